use deskkit_display::{Display, Point};

use crate::{Button, Mouse, MouseError};

/// Mouse control in a display's relative physical pixels.
///
/// Each call connects to the platform input system with the default
/// [`MouseConfig`](crate::MouseConfig). Use the `*_on` methods of [`Mouse`]
/// to keep one connection and configuration across calls.
pub trait DisplayMouse {
    /// Move the cursor to a point on this display.
    ///
    /// # Errors
    /// Returns an error if the input system is unavailable or the move fails.
    fn move_mouse(&self, relative: Point) -> Result<(), MouseError>;

    /// Smoothly move the cursor to a point on this display.
    ///
    /// # Errors
    /// Returns an error if the input system is unavailable or a step fails.
    fn move_mouse_smooth(&self, relative: Point) -> Result<(), MouseError>;

    /// Move to `from`, press `button`, smoothly move to `to`, release.
    ///
    /// # Errors
    /// Returns an error if the input system is unavailable or an event fails.
    fn drag(&self, from: Point, to: Point, button: Button) -> Result<(), MouseError>;

    /// Drag from wherever the cursor is to a point on this display.
    ///
    /// # Errors
    /// Returns an error if the input system is unavailable or an event fails.
    fn drag_to(&self, to: Point, button: Button) -> Result<(), MouseError>;

    /// The cursor position on this display, or `None` if it is elsewhere.
    ///
    /// # Errors
    /// Returns an error if the input system is unavailable.
    fn mouse_location(&self) -> Result<Option<Point>, MouseError>;

    /// Whether the cursor is on this display.
    ///
    /// # Errors
    /// Returns an error if the input system is unavailable.
    fn contains_mouse(&self) -> Result<bool, MouseError>;
}

impl DisplayMouse for Display {
    fn move_mouse(&self, relative: Point) -> Result<(), MouseError> {
        Mouse::new()?.move_to_on(self, relative)
    }

    fn move_mouse_smooth(&self, relative: Point) -> Result<(), MouseError> {
        Mouse::new()?.move_smooth_on(self, relative)
    }

    fn drag(&self, from: Point, to: Point, button: Button) -> Result<(), MouseError> {
        Mouse::new()?.drag_on(self, from, to, button)
    }

    fn drag_to(&self, to: Point, button: Button) -> Result<(), MouseError> {
        Mouse::new()?.drag_to_on(self, to, button)
    }

    fn mouse_location(&self) -> Result<Option<Point>, MouseError> {
        Mouse::new()?.location_on(self)
    }

    fn contains_mouse(&self) -> Result<bool, MouseError> {
        Mouse::new()?.is_on(self)
    }
}
