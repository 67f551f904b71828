use screenshots::Screen;

use crate::{Bitmap, CoordinateSpace, Display, Error, Rect};

/// Geometry as `screenshots` reports it: points on macOS, and on X11 the
/// device geometry divided by the `Xft.dpi` scale.
#[cfg(any(target_os = "macos", target_os = "linux"))]
#[derive(Debug, Clone, Copy)]
struct Reported {
    id: u32,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    scale_factor: f32,
    is_primary: bool,
}

#[cfg(any(target_os = "macos", target_os = "linux"))]
pub fn enumerate() -> Result<Vec<Display>, Error> {
    let space = CoordinateSpace::current();
    let screens = Screen::all().map_err(|e| Error::Platform(e.to_string()))?;

    Ok(screens
        .iter()
        .map(|screen| {
            let info = &screen.display_info;
            from_reported(
                Reported {
                    id: info.id,
                    x: info.x,
                    y: info.y,
                    width: info.width,
                    height: info.height,
                    scale_factor: info.scale_factor,
                    is_primary: info.is_primary,
                },
                space,
            )
        })
        .collect())
}

/// Size always becomes device pixels. The origin stays in points for the
/// scaled model and becomes device pixels for the physical one.
#[cfg(any(target_os = "macos", target_os = "linux"))]
fn from_reported(reported: Reported, space: CoordinateSpace) -> Display {
    use crate::space::{normalize_scale, scale_up, to_i32};
    use crate::{Point, Size};

    let scale = normalize_scale(f64::from(reported.scale_factor));
    let size = Size::new(
        scale_up(to_i32(reported.width), scale),
        scale_up(to_i32(reported.height), scale),
    );
    let origin = match space {
        CoordinateSpace::Physical => {
            Point::new(scale_up(reported.x, scale), scale_up(reported.y, scale))
        }
        CoordinateSpace::Scaled => Point::new(reported.x, reported.y),
    };
    Display::new(u64::from(reported.id), origin, size, scale, space).with_main(reported.is_primary)
}

/// Capture `native`, a region relative to `display` in the units of the
/// display's coordinate space.
pub fn capture(display: &Display, native: Rect) -> Result<Bitmap, Error> {
    let screen = find_screen(display)?;
    let region = backend_region(display, native);
    let width = u32::try_from(region.size.width).map_err(|_| invalid(region))?;
    let height = u32::try_from(region.size.height).map_err(|_| invalid(region))?;

    let image = screen
        .capture_area(region.origin.x, region.origin.y, width, height)
        .map_err(|e| Error::CaptureFailed(e.to_string()))?;

    let width = image.width();
    let height = image.height();
    Bitmap::from_rgba(width, height, image.into_raw())
}

/// `capture_area` takes regions in the units `screenshots` reports geometry
/// in, which are points everywhere except Windows. X11 multiplies them back
/// by the scale, so odd device offsets round down to an even pixel at 2x.
fn backend_region(display: &Display, native: Rect) -> Rect {
    if cfg!(target_os = "windows") {
        return native;
    }
    match display.space() {
        CoordinateSpace::Physical => {
            CoordinateSpace::Scaled.region_to_native(native, display.scale())
        }
        CoordinateSpace::Scaled => native,
    }
}

fn find_screen(display: &Display) -> Result<Screen, Error> {
    let screens = Screen::all().map_err(|e| Error::Platform(e.to_string()))?;
    if let Some(screen) = screens
        .into_iter()
        .find(|s| u64::from(s.display_info.id) == display.id())
    {
        return Ok(screen);
    }

    // Windows ids are monitor handles, which the capture backend does not share.
    let origin = display.origin();
    Screen::from_point(origin.x, origin.y).map_err(|e| Error::Platform(e.to_string()))
}

const fn invalid(native: Rect) -> Error {
    Error::InvalidRegion {
        width: native.size.width,
        height: native.size.height,
    }
}
