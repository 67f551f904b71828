//! # deskkit-display
//!
//! Display enumeration, DPI-aware coordinate conversion and screen capture.
//!
//! Part of the `deskkit` workspace, this crate gives every monitor a uniform
//! description regardless of how the platform reports coordinates.
//!
//! ## Features
//!
//! - **Enumeration**: list monitors, main display first.
//! - **Coordinate conversion**: map between display-relative physical pixels
//!   and the platform's absolute coordinates.
//! - **Capture**: grab a region of a display as an owned RGBA [`Bitmap`].
//! - **Pixel color**: read a single pixel as `"rrggbb"`.
//!
//! ## Coordinate models
//!
//! | Platform | Absolute coordinates                                   |
//! |----------|--------------------------------------------------------|
//! | Linux    | device pixels                                          |
//! | macOS    | points                                                 |
//! | Windows  | device pixels if the process is DPI aware, else logical |
//!
//! See [`CoordinateSpace`] and [`dpi`].
//!
//! ```rust,no_run
//! use deskkit_display::{Point, main_display};
//!
//! let display = main_display()?;
//! let center = Point::new(display.size().width / 2, display.size().height / 2);
//! println!("{} at {:?}", display.pixel_color(center)?, display.to_absolute(center));
//! # Ok::<(), deskkit_display::Error>(())
//! ```
//!
//! ### macOS
//! Capture requires the "Screen Recording" permission.

mod capture;
mod display;
pub mod dpi;
mod geometry;
mod space;
mod sys;

pub use capture::{Bitmap, hex_color, pad_hex, parse_hex};
pub use display::{Display, DisplayInfo};
pub use geometry::{Point, Rect, Size};
pub use space::CoordinateSpace;

/// Errors returned by display operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The platform reported no displays, or none contains the point.
    #[error("No display found")]
    NoDisplayFound,

    /// The requested display index does not exist.
    #[error("Invalid display index: {0}")]
    InvalidDisplay(usize),

    /// A point lies outside the display.
    #[error("Point ({x}, {y}) is out of bounds")]
    OutOfBounds {
        /// Horizontal coordinate.
        x: i32,
        /// Vertical coordinate.
        y: i32,
    },

    /// A capture region has a non-positive width or height.
    #[error("Invalid region: {width}x{height}")]
    InvalidRegion {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },

    /// The platform returned no usable pixels.
    #[error("Capture failed: {0}")]
    CaptureFailed(String),

    /// An error occurred in the underlying platform implementation.
    #[error("Platform error: {0}")]
    Platform(String),

    /// The requested feature is not supported on the current platform.
    #[error("Unsupported platform or feature")]
    Unsupported,

    /// Encoding or writing an image failed.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// List all displays, main display first.
///
/// # Errors
///
/// Returns [`Error::NoDisplayFound`] if the platform reports none, or
/// [`Error::Platform`] if enumeration fails.
pub fn displays() -> Result<Vec<Display>, Error> {
    dpi::init();
    let displays = display::arrange(sys::enumerate()?)?;
    for display in &displays {
        log::debug!("found display {:?}", display.info());
    }
    Ok(displays)
}

/// Number of connected displays.
///
/// # Errors
///
/// See [`displays`].
pub fn display_count() -> Result<usize, Error> {
    displays().map(|d| d.len())
}

/// The main display, which is always index 0.
///
/// # Errors
///
/// See [`displays`].
pub fn main_display() -> Result<Display, Error> {
    display_at(0)
}

/// The display at `index` in the order returned by [`displays`].
///
/// # Errors
///
/// Returns [`Error::InvalidDisplay`] if `index` is out of range.
pub fn display_at(index: usize) -> Result<Display, Error> {
    displays()?
        .into_iter()
        .nth(index)
        .ok_or(Error::InvalidDisplay(index))
}

/// The display containing an absolute coordinate.
///
/// # Errors
///
/// Returns [`Error::NoDisplayFound`] if no display contains the point.
pub fn display_containing(point: Point) -> Result<Display, Error> {
    displays()?
        .into_iter()
        .find(|d| d.contains(point))
        .ok_or(Error::NoDisplayFound)
}
