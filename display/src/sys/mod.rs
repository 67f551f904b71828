#[cfg(any(target_os = "macos", target_os = "windows", target_os = "linux"))]
mod desktop;
#[cfg(any(target_os = "macos", target_os = "windows", target_os = "linux"))]
pub use desktop::capture;
#[cfg(any(target_os = "macos", target_os = "linux"))]
pub use desktop::enumerate;

#[cfg(target_os = "windows")]
mod win32;
#[cfg(target_os = "windows")]
pub use win32::{enumerate, make_dpi_aware};

// X11 hands out device pixels unconditionally.
#[cfg(target_os = "linux")]
pub const fn make_dpi_aware() -> bool {
    true
}

// CoreGraphics always speaks points.
#[cfg(target_os = "macos")]
pub const fn make_dpi_aware() -> bool {
    false
}

// Fallback for docs or other platforms
#[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
mod unsupported {
    use crate::{Bitmap, Display, Error, Rect};

    pub fn enumerate() -> Result<Vec<Display>, Error> {
        Err(Error::Unsupported)
    }

    pub fn capture(_display: &Display, _native: Rect) -> Result<Bitmap, Error> {
        Err(Error::Unsupported)
    }

    pub const fn make_dpi_aware() -> bool {
        true
    }
}
#[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
pub use unsupported::*;
