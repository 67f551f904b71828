//! Coordinate spaces and the conversions between them.
//!
//! Every display has two ways of addressing a location:
//!
//! - *relative* coordinates, always physical pixels measured from the display's
//!   top-left corner;
//! - *absolute* coordinates in whatever space the platform APIs speak for the
//!   whole virtual desktop.
//!
//! Platforms disagree on that absolute space. X11 always reports device
//! pixels. macOS always reports points. Windows reports device pixels only if
//! the process managed to become DPI aware and falls back to logical
//! coordinates otherwise. [`CoordinateSpace`] captures the two models so one
//! [`Display`](crate::Display) type can serve all three platforms.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect, Size};

/// The model the platform uses for absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateSpace {
    /// Absolute coordinates are device pixels; conversion is pure translation.
    Physical,
    /// Absolute coordinates are logical points; one point spans `scale` pixels.
    Scaled,
}

impl CoordinateSpace {
    /// The space in effect for this process right now.
    ///
    /// On Windows this depends on the process-wide DPI-awareness flag, which is
    /// initialized on first use.
    #[must_use]
    pub fn current() -> Self {
        if crate::dpi::is_dpi_aware() {
            Self::Physical
        } else {
            Self::Scaled
        }
    }

    /// Map a display-relative physical point to an absolute coordinate.
    #[must_use]
    pub fn to_absolute(self, origin: Point, scale: f64, relative: Point) -> Point {
        match self {
            Self::Physical => relative.offset(origin.x, origin.y),
            Self::Scaled => {
                let scale = normalize_scale(scale);
                origin.offset(scale_down(relative.x, scale), scale_down(relative.y, scale))
            }
        }
    }

    /// Map an absolute coordinate to a display-relative physical point.
    ///
    /// No bounds check happens here; callers test containment first.
    #[must_use]
    pub fn to_relative(self, origin: Point, scale: f64, absolute: Point) -> Point {
        let dx = absolute.x.saturating_sub(origin.x);
        let dy = absolute.y.saturating_sub(origin.y);
        match self {
            Self::Physical => Point::new(dx, dy),
            Self::Scaled => {
                let scale = normalize_scale(scale);
                Point::new(scale_up(dx, scale), scale_up(dy, scale))
            }
        }
    }

    /// Express a physical size in this space's units.
    ///
    /// This is the size containment tests must use: comparing an absolute
    /// logical coordinate against a physical width gives wrong answers on every
    /// scaled display.
    #[must_use]
    pub fn extent(self, physical: Size, scale: f64) -> Size {
        match self {
            Self::Physical => physical,
            Self::Scaled => {
                let scale = normalize_scale(scale);
                Size::new(
                    scale_down(physical.width, scale),
                    scale_down(physical.height, scale),
                )
            }
        }
    }

    /// Convert a display-relative physical region into the units the capture
    /// primitive expects, still relative to the display.
    ///
    /// Scaled sizes are clamped to one unit so a one-pixel request never
    /// collapses into an empty native region.
    #[must_use]
    pub fn region_to_native(self, region: Rect, scale: f64) -> Rect {
        match self {
            Self::Physical => region,
            Self::Scaled => {
                let scale = normalize_scale(scale);
                Rect::new(
                    scale_down(region.origin.x, scale),
                    scale_down(region.origin.y, scale),
                    scale_down(region.size.width, scale).max(1),
                    scale_down(region.size.height, scale).max(1),
                )
            }
        }
    }
}

/// Replace unusable scale factors with `1.0`.
#[must_use]
pub fn normalize_scale(scale: f64) -> f64 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    }
}

// Every conversion between pixels and points truncates toward zero and
// saturates at the `i32` range.

/// Points from pixels.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn scale_down(value: i32, scale: f64) -> i32 {
    (f64::from(value) / scale) as i32
}

/// Pixels from points.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn scale_up(value: i32, scale: f64) -> i32 {
    (f64::from(value) * scale) as i32
}

/// Platform dimensions arrive unsigned.
pub(crate) fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
