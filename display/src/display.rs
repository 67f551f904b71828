use std::path::Path;

use serde::Serialize;

use crate::capture::Bitmap;
use crate::geometry::{Point, Rect, Size};
use crate::space::{CoordinateSpace, normalize_scale};
use crate::{Error, sys};

/// A monitor as seen by one enumeration call.
///
/// Relative coordinates are physical pixels measured from the display's
/// top-left corner. Absolute coordinates are whatever the platform speaks,
/// described by [`Display::space`].
///
/// Values are snapshots: unplugging a monitor or changing its resolution
/// does not update an existing `Display`. Enumerate again instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Display {
    id: u64,
    index: usize,
    is_main: bool,
    origin: Point,
    size: Size,
    scale: f64,
    space: CoordinateSpace,
}

impl Display {
    /// Describe a display.
    ///
    /// `origin` is in the platform's absolute space, `size` in physical
    /// pixels, and `scale` is physical pixels per logical point. A scale that
    /// is not finite or not positive is stored as `1.0`.
    ///
    /// The display starts out at index 0 and not main; enumeration assigns
    /// the final values.
    #[must_use]
    pub fn new(id: u64, origin: Point, size: Size, scale: f64, space: CoordinateSpace) -> Self {
        Self {
            id,
            index: 0,
            is_main: false,
            origin,
            size,
            scale: normalize_scale(scale),
            space,
        }
    }

    /// Mark the display as the system's main display.
    #[must_use]
    pub const fn with_main(mut self, is_main: bool) -> Self {
        self.is_main = is_main;
        self
    }

    /// Platform identifier (`CGDirectDisplayID`, `HMONITOR` or X11 output id).
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Position in the enumeration result. Index 0 is the main display.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Whether this is the main display.
    #[must_use]
    pub const fn is_main(&self) -> bool {
        self.is_main
    }

    /// Top-left corner in the platform's absolute space.
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Size in physical pixels.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Physical pixels per logical point.
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// The absolute coordinate model this display was enumerated with.
    #[must_use]
    pub const fn space(&self) -> CoordinateSpace {
        self.space
    }

    /// The display's area in absolute coordinates: the origin and the size
    /// expressed in the same space.
    #[must_use]
    pub fn origin_rect(&self) -> Rect {
        Rect::from_parts(self.origin, self.space.extent(self.size, self.scale))
    }

    /// Convert a relative physical point into an absolute coordinate.
    #[must_use]
    pub fn to_absolute(&self, relative: Point) -> Point {
        self.space.to_absolute(self.origin, self.scale, relative)
    }

    /// Convert an absolute coordinate into a relative physical point.
    ///
    /// Returns `None` if the coordinate is not on this display.
    #[must_use]
    pub fn to_relative(&self, absolute: Point) -> Option<Point> {
        self.contains(absolute)
            .then(|| self.space.to_relative(self.origin, self.scale, absolute))
    }

    /// Whether an absolute coordinate falls on this display.
    #[must_use]
    pub fn contains(&self, absolute: Point) -> bool {
        self.origin_rect().contains(absolute)
    }

    /// Capture a region given in relative physical pixels.
    ///
    /// The returned bitmap may be larger than requested on scaled displays,
    /// where the platform captures whole logical points.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidRegion`] if the width or height is not positive.
    ///   Nothing is captured in that case.
    /// - [`Error::CaptureFailed`] if the platform returns no pixels.
    /// - [`Error::Platform`] or [`Error::Unsupported`] from the backend.
    pub fn capture_rect(&self, region: Rect) -> Result<Bitmap, Error> {
        if !region.is_valid() {
            return Err(Error::InvalidRegion {
                width: region.size.width,
                height: region.size.height,
            });
        }
        let native = self.space.region_to_native(region, self.scale);
        log::debug!(
            "capturing {region:?} on display {} ({native:?} native)",
            self.index
        );
        sys::capture(self, native)
    }

    /// Capture the whole display.
    ///
    /// # Errors
    ///
    /// See [`Display::capture_rect`].
    pub fn capture(&self) -> Result<Bitmap, Error> {
        self.capture_rect(Rect::from_parts(Point::default(), self.size))
    }

    /// Capture a region and write it to `path`; the format follows the
    /// file extension.
    ///
    /// # Errors
    ///
    /// Any capture error, or [`Error::Image`] if encoding fails.
    pub fn save_capture(&self, path: impl AsRef<Path>, region: Rect) -> Result<(), Error> {
        self.capture_rect(region)?.save(path)
    }

    /// Capture the whole display and write it to `path`.
    ///
    /// # Errors
    ///
    /// Any capture error, or [`Error::Image`] if encoding fails.
    pub fn save_capture_all(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        self.capture()?.save(path)
    }

    /// The color under a relative physical point, as lowercase `"rrggbb"`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] if the point is not on the display, otherwise
    /// any capture error.
    pub fn pixel_color(&self, relative: Point) -> Result<String, Error> {
        let bounds = Rect::from_parts(Point::default(), self.size);
        if !bounds.contains(relative) {
            return Err(Error::OutOfBounds {
                x: relative.x,
                y: relative.y,
            });
        }
        let bitmap = self.capture_rect(Rect::from_parts(relative, Size::new(1, 1)))?;
        bitmap
            .pixel_hex(0, 0)
            .ok_or_else(|| Error::CaptureFailed("empty pixel capture".into()))
    }

    /// A serializable snapshot of this display.
    #[must_use]
    pub fn info(&self) -> DisplayInfo {
        DisplayInfo {
            id: self.id,
            index: self.index,
            is_main: self.is_main,
            origin: self.origin,
            size: self.size,
            logical_size: self.space.extent(self.size, self.scale),
            scale: self.scale,
            space: self.space,
        }
    }
}

/// Plain data describing a display, for logs and diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayInfo {
    /// Platform identifier.
    pub id: u64,
    /// Position in the enumeration result.
    pub index: usize,
    /// Whether this is the main display.
    pub is_main: bool,
    /// Top-left corner in absolute coordinates.
    pub origin: Point,
    /// Size in physical pixels.
    pub size: Size,
    /// Size in absolute-coordinate units.
    pub logical_size: Size,
    /// Physical pixels per logical point.
    pub scale: f64,
    /// Absolute coordinate model.
    pub space: CoordinateSpace,
}

/// Put the main display first and number everything densely.
///
/// If no display claims to be main, the first one is promoted. Only the first
/// display claiming to be main keeps the flag.
pub(crate) fn arrange(mut displays: Vec<Display>) -> Result<Vec<Display>, Error> {
    if displays.is_empty() {
        return Err(Error::NoDisplayFound);
    }

    let main = displays.iter().position(|d| d.is_main).unwrap_or(0);
    let first = displays.remove(main);
    displays.insert(0, first);

    for (index, display) in displays.iter_mut().enumerate() {
        display.index = index;
        display.is_main = index == 0;
    }
    Ok(displays)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn physical(id: u64, x: i32, y: i32, w: i32, h: i32) -> Display {
        Display::new(id, Point::new(x, y), Size::new(w, h), 1.0, CoordinateSpace::Physical)
    }

    fn retina() -> Display {
        Display::new(
            7,
            Point::new(1440, 0),
            Size::new(2880, 1800),
            2.0,
            CoordinateSpace::Scaled,
        )
    }

    #[test]
    fn main_moves_to_front() {
        let displays = vec![
            physical(1, -1920, 0, 1920, 1080),
            physical(2, 0, 0, 2560, 1440).with_main(true),
            physical(3, 2560, 0, 1920, 1080),
        ];
        let arranged = arrange(displays).unwrap();
        let ids: Vec<u64> = arranged.iter().map(Display::id).collect();
        assert_eq!(ids, [2, 1, 3], "others keep their relative order");
        for (i, d) in arranged.iter().enumerate() {
            assert_eq!(d.index(), i);
            assert_eq!(d.is_main(), i == 0);
        }
    }

    #[test]
    fn first_display_promoted_when_none_is_main() {
        let arranged =
            arrange(vec![physical(4, 0, 0, 800, 600), physical(5, 800, 0, 800, 600)]).unwrap();
        assert_eq!(arranged[0].id(), 4);
        assert!(arranged[0].is_main());
        assert!(!arranged[1].is_main());
    }

    #[test]
    fn duplicate_main_flags_collapse() {
        let arranged = arrange(vec![
            physical(1, 0, 0, 10, 10),
            physical(2, 10, 0, 10, 10).with_main(true),
            physical(3, 20, 0, 10, 10).with_main(true),
        ])
        .unwrap();
        let mains: Vec<u64> = arranged.iter().filter(|d| d.is_main()).map(Display::id).collect();
        assert_eq!(mains, [2]);
    }

    #[test]
    fn empty_enumeration_is_an_error() {
        assert!(matches!(arrange(Vec::new()), Err(Error::NoDisplayFound)));
    }

    #[test]
    fn scaled_contains_uses_logical_size() {
        let display = retina();
        assert_eq!(display.origin_rect(), Rect::new(1440, 0, 1440, 900));
        assert!(display.contains(Point::new(1440, 0)));
        assert!(display.contains(Point::new(2879, 899)));
        assert!(!display.contains(Point::new(2880, 0)), "physical width is not a valid bound");
        assert!(!display.contains(Point::new(1439, 0)));
    }

    #[test]
    fn scaled_conversions() {
        let display = retina();
        assert_eq!(display.to_absolute(Point::new(0, 0)), Point::new(1440, 0));
        assert_eq!(display.to_absolute(Point::new(2879, 1799)), Point::new(2879, 899));
        assert_eq!(display.to_relative(Point::new(2000, 450)), Some(Point::new(1120, 900)));
        assert_eq!(display.to_relative(Point::new(0, 0)), None);
    }

    #[test]
    fn physical_conversions() {
        let display = physical(1, -1920, -200, 1920, 1080);
        assert_eq!(display.to_absolute(Point::new(5, 6)), Point::new(-1915, -194));
        assert_eq!(display.to_relative(Point::new(-1, 879)), Some(Point::new(1919, 1079)));
        assert_eq!(display.to_relative(Point::new(0, 0)), None);
    }

    #[test]
    fn far_offsets_saturate_instead_of_overflowing() {
        let display = physical(1, 100, 0, 1920, 1080);
        let abs = display.to_absolute(Point::new(i32::MAX, 0));
        assert_eq!(abs, Point::new(i32::MAX, 0));
        assert_eq!(display.to_relative(abs), None);
        assert_eq!(display.to_relative(Point::new(i32::MIN, 0)), None);

        let abs = retina().to_absolute(Point::new(i32::MAX, i32::MAX));
        assert_eq!(abs, Point::new(i32::MAX, i32::MAX));
        assert!(!retina().contains(abs));
    }

    #[test]
    fn invalid_regions_are_rejected_before_capturing() {
        let display = retina();
        for (w, h) in [(0, 10), (10, 0), (-1, 5), (5, -1), (0, 0)] {
            match display.capture_rect(Rect::new(0, 0, w, h)) {
                Err(Error::InvalidRegion { width, height }) => {
                    assert_eq!((width, height), (w, h));
                }
                other => panic!("expected InvalidRegion for {w}x{h}, got {other:?}"),
            }
        }
    }

    #[test]
    fn pixel_color_bounds() {
        let display = physical(1, 0, 0, 100, 50);
        for point in [Point::new(-1, 0), Point::new(0, -1), Point::new(100, 0), Point::new(0, 50)] {
            assert!(matches!(
                display.pixel_color(point),
                Err(Error::OutOfBounds { x, y }) if Point::new(x, y) == point
            ));
        }
    }

    #[test]
    fn bad_scale_is_normalized() {
        let display = Display::new(1, Point::default(), Size::new(10, 10), f64::NAN, CoordinateSpace::Scaled);
        assert!((display.scale() - 1.0).abs() < f64::EPSILON);
        assert_eq!(display.origin_rect(), Rect::new(0, 0, 10, 10));
    }

    #[test]
    fn info_snapshot() {
        let info = arrange(vec![retina()]).unwrap()[0].info();
        assert_eq!(info.id, 7);
        assert!(info.is_main);
        assert_eq!(info.logical_size, Size::new(1440, 900));
        assert_eq!(info.space, CoordinateSpace::Scaled);
    }
}
