//! Captured pixels.

use std::fmt;
use std::path::Path;

use image::RgbaImage;

use crate::Error;

/// An owned RGBA capture.
///
/// The pixel buffer belongs to whoever holds the value and is released when
/// it is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    image: RgbaImage,
}

impl Bitmap {
    /// Wrap a tightly packed RGBA buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CaptureFailed`] if the buffer is empty or its length
    /// does not match `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::CaptureFailed("capture returned no pixels".into()));
        }
        let len = data.len();
        RgbaImage::from_raw(width, height, data)
            .map(|image| Self { image })
            .ok_or_else(|| {
                Error::CaptureFailed(format!(
                    "buffer of {len} bytes does not hold {width}x{height} RGBA pixels"
                ))
            })
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The raw RGBA bytes, row-major.
    #[must_use]
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Take the raw RGBA bytes.
    #[must_use]
    pub fn into_raw(self) -> Vec<u8> {
        self.image.into_raw()
    }

    /// The `[r, g, b, a]` value at `(x, y)`, or `None` outside the bitmap.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// The color at `(x, y)` as lowercase `"rrggbb"`.
    #[must_use]
    pub fn pixel_hex(&self, x: u32, y: u32) -> Option<String> {
        self.pixel(x, y).map(|[r, g, b, _]| hex_color(r, g, b))
    }

    /// Borrow the capture as an [`image`] buffer.
    #[must_use]
    pub const fn to_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Convert into an [`image`] buffer.
    #[must_use]
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Encode to `path`; the format follows the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Image`] if the format is unknown or writing fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        self.image.save(path.as_ref())?;
        Ok(())
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

/// Format a color as lowercase `"rrggbb"`.
#[must_use]
pub fn hex_color(r: u8, g: u8, b: u8) -> String {
    format!("{r:02x}{g:02x}{b:02x}")
}

/// Format a packed `0xRRGGBB` value as six lowercase hex digits.
///
/// Bits above the low 24 are ignored.
#[must_use]
pub fn pad_hex(color: u32) -> String {
    format!("{:06x}", color & 0x00ff_ffff)
}

/// Parse `"rrggbb"` or `"#rrggbb"`, in either case, back into components.
#[must_use]
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
