//! # Deskkit
//!
//! Cross-platform desktop automation: displays, DPI-aware coordinates, screen
//! capture and mouse control on macOS, Windows and Linux.
//!
//! ## Features
//!
//! Deskkit is modular. Enable only the capabilities you need.
//!
//! - `display` (default): display enumeration, coordinate conversion, capture
//!   and pixel color.
//! - `mouse`: absolute and display-relative mouse control. Implies `display`.
//!
//! Use the `full` feature to enable everything.
//!
//! ## Example
//!
//! ```toml
//! [dependencies]
//! deskkit = { version = "0.1", features = ["full"] }
//! ```
//!
//! ```rust,ignore
//! use deskkit::display::{self, Point};
//! use deskkit::mouse::DisplayMouse;
//!
//! for screen in display::displays()? {
//!     let center = Point::new(screen.size().width / 2, screen.size().height / 2);
//!     screen.move_mouse_smooth(center)?;
//!     println!("display {}: {}", screen.index(), screen.pixel_color(center)?);
//! }
//! ```

#[cfg(feature = "display")]
pub use deskkit_display as display;

#[cfg(feature = "mouse")]
pub use deskkit_mouse as mouse;
