use std::fmt;

use enigo::{Axis, Coordinate, Enigo, Mouse as _, Settings};

use crate::{Button, Direction, MouseDriver, MouseError, Point};

/// The platform input system: CoreGraphics events on macOS, `SendInput` on
/// Windows, XTest on Linux.
pub struct SystemDriver {
    enigo: Enigo,
}

impl SystemDriver {
    /// Connect to the input system.
    ///
    /// # Errors
    /// Returns [`MouseError::Connection`] if the connection fails, e.g. no X
    /// server on Linux or missing accessibility permission on macOS.
    pub fn new() -> Result<Self, MouseError> {
        let enigo =
            Enigo::new(&Settings::default()).map_err(|e| MouseError::Connection(e.to_string()))?;
        Ok(Self { enigo })
    }
}

impl fmt::Debug for SystemDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemDriver").finish_non_exhaustive()
    }
}

const fn to_enigo(button: Button) -> enigo::Button {
    match button {
        Button::Left => enigo::Button::Left,
        Button::Right => enigo::Button::Right,
        Button::Middle => enigo::Button::Middle,
    }
}

fn injection(e: impl fmt::Display) -> MouseError {
    MouseError::Injection(e.to_string())
}

impl MouseDriver for SystemDriver {
    fn move_to(&mut self, point: Point) -> Result<(), MouseError> {
        self.enigo
            .move_mouse(point.x, point.y, Coordinate::Abs)
            .map_err(injection)
    }

    fn button(&mut self, button: Button, direction: Direction) -> Result<(), MouseError> {
        let direction = match direction {
            Direction::Down => enigo::Direction::Press,
            Direction::Up => enigo::Direction::Release,
        };
        self.enigo.button(to_enigo(button), direction).map_err(injection)
    }

    fn scroll(&mut self, dx: i32, dy: i32) -> Result<(), MouseError> {
        // enigo counts positive lengths downward.
        if dy != 0 {
            self.enigo.scroll(-dy, Axis::Vertical).map_err(injection)?;
        }
        if dx != 0 {
            self.enigo.scroll(dx, Axis::Horizontal).map_err(injection)?;
        }
        Ok(())
    }

    fn location(&self) -> Result<Point, MouseError> {
        let (x, y) = self.enigo.location().map_err(injection)?;
        Ok(Point::new(x, y))
    }
}
