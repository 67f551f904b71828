//! # deskkit-mouse
//!
//! Mouse control for the `deskkit` workspace.
//!
//! Every operation comes in two flavors:
//!
//! - **absolute**: coordinates in the platform's absolute space, the same
//!   space [`Display::origin`] uses;
//! - **display-relative**: physical pixels from a display's top-left corner,
//!   via [`DisplayMouse`] or the `*_on` methods of [`Mouse`].
//!
//! All calls block until the input has been injected, including the pauses
//! of smooth moves and clicks.
//!
//! ```rust,no_run
//! use deskkit_mouse::{Button, DisplayMouse, Point};
//!
//! let display = deskkit_display::main_display()?;
//! display.move_mouse_smooth(Point::new(400, 300))?;
//! deskkit_mouse::click(Button::Left, 2)?;
//! # Ok::<(), deskkit_mouse::MouseError>(())
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

mod config;
mod display_ext;
mod smooth;
mod sys;

pub use config::{MouseConfig, SmoothConfig};
pub use deskkit_display::{Display, Point};
pub use display_ext::DisplayMouse;
pub use smooth::smooth_path;
pub use sys::SystemDriver;

/// How long a button stays down during a click.
pub const CLICK_HOLD: Duration = Duration::from_millis(5);
/// Pause between the clicks of a multi-click.
pub const CLICK_INTERVAL: Duration = Duration::from_millis(200);
/// Pause between pressing the button and moving during a drag.
pub const DRAG_DELAY: Duration = Duration::from_millis(50);

/// Errors returned by mouse operations.
#[derive(Debug, thiserror::Error)]
pub enum MouseError {
    /// Connecting to the platform input system failed.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The platform rejected an input event or cursor query.
    #[error("Input injection failed: {0}")]
    Injection(String),

    /// A button name was not recognized.
    #[error("Unknown mouse button: {0}")]
    UnknownButton(String),

    /// A display lookup failed.
    #[error(transparent)]
    Display(#[from] deskkit_display::Error),

    /// The requested feature is not supported on the current platform.
    #[error("Unsupported platform or feature")]
    Unsupported,
}

/// A mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Primary button.
    Left,
    /// Secondary button.
    Right,
    /// Wheel button.
    Middle,
}

impl FromStr for Button {
    type Err = MouseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "center" | "middle" => Ok(Self::Middle),
            other => Err(MouseError::UnknownButton(other.to_string())),
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Middle => "middle",
        })
    }
}

/// Whether a button goes down or comes up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Press.
    Down,
    /// Release.
    Up,
}

/// The primitive input operations a platform must provide.
///
/// Coordinates are absolute. [`Mouse`] builds everything else on top.
pub trait MouseDriver {
    /// Put the cursor at `point`.
    ///
    /// # Errors
    /// Returns an error if the event cannot be injected.
    fn move_to(&mut self, point: Point) -> Result<(), MouseError>;

    /// Press or release `button`.
    ///
    /// # Errors
    /// Returns an error if the event cannot be injected.
    fn button(&mut self, button: Button, direction: Direction) -> Result<(), MouseError>;

    /// Scroll by whole wheel notches. Positive `dy` scrolls up, positive `dx`
    /// scrolls right.
    ///
    /// # Errors
    /// Returns an error if the event cannot be injected.
    fn scroll(&mut self, dx: i32, dy: i32) -> Result<(), MouseError>;

    /// The current cursor position.
    ///
    /// # Errors
    /// Returns an error if the position cannot be read.
    fn location(&self) -> Result<Point, MouseError>;

    /// Block for `duration`.
    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// A mouse bound to one input driver.
#[derive(Debug)]
pub struct Mouse<D = SystemDriver> {
    driver: D,
    config: MouseConfig,
    rng: StdRng,
}

impl Mouse<SystemDriver> {
    /// Connect to the platform's input system.
    ///
    /// # Errors
    ///
    /// Returns [`MouseError::Connection`] if the input system is unavailable,
    /// or [`MouseError::Unsupported`] on platforms without a driver.
    pub fn new() -> Result<Self, MouseError> {
        deskkit_display::dpi::init();
        Ok(Self::with_driver(SystemDriver::new()?))
    }
}

impl<D: MouseDriver> Mouse<D> {
    /// Wrap an arbitrary driver.
    #[must_use]
    pub fn with_driver(driver: D) -> Self {
        Self {
            driver,
            config: MouseConfig::default(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Replace the configuration.
    #[must_use]
    pub const fn with_config(mut self, config: MouseConfig) -> Self {
        self.config = config;
        self
    }

    /// Make smooth paths reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// The current configuration.
    #[must_use]
    pub const fn config(&self) -> &MouseConfig {
        &self.config
    }

    /// The underlying driver.
    #[must_use]
    pub const fn driver(&self) -> &D {
        &self.driver
    }

    /// Unwrap the driver.
    pub fn into_driver(self) -> D {
        self.driver
    }

    /// Move the cursor to an absolute coordinate.
    ///
    /// # Errors
    /// Returns an error if the move cannot be injected.
    pub fn move_to(&mut self, point: Point) -> Result<(), MouseError> {
        self.driver.move_to(point)?;
        self.settle();
        Ok(())
    }

    /// The cursor position in absolute coordinates.
    ///
    /// # Errors
    /// Returns an error if the position cannot be read.
    pub fn location(&self) -> Result<Point, MouseError> {
        self.driver.location()
    }

    /// Walk the cursor to an absolute coordinate along a human-looking path,
    /// using the configured [`SmoothConfig`].
    ///
    /// # Errors
    /// Returns an error if the cursor cannot be read or a step cannot be
    /// injected. The cursor stays wherever the failing step left it.
    pub fn move_smooth(&mut self, point: Point) -> Result<(), MouseError> {
        let smooth = self.config.smooth;
        self.move_smooth_with(point, &smooth)
    }

    /// Like [`Mouse::move_smooth`] with explicit tuning.
    ///
    /// # Errors
    /// See [`Mouse::move_smooth`].
    pub fn move_smooth_with(&mut self, point: Point, smooth: &SmoothConfig) -> Result<(), MouseError> {
        let from = self.driver.location()?;
        let path = smooth_path(from, point, smooth.max_steps, &mut self.rng);
        log::debug!("smooth move {from:?} -> {point:?} in {} steps", path.len());

        let last = path.len().saturating_sub(1);
        for (i, step) in path.into_iter().enumerate() {
            self.driver.move_to(step)?;
            if i < last {
                let delay = smooth.step_delay(&mut self.rng);
                self.driver.pause(delay);
            }
        }
        self.settle();
        Ok(())
    }

    /// Press or release a button.
    ///
    /// # Errors
    /// Returns an error if the event cannot be injected.
    pub fn toggle(&mut self, button: Button, direction: Direction) -> Result<(), MouseError> {
        self.driver.button(button, direction)
    }

    /// Click `count` times. Zero clicks does nothing.
    ///
    /// # Errors
    /// Returns an error if an event cannot be injected.
    pub fn click(&mut self, button: Button, count: u32) -> Result<(), MouseError> {
        for i in 0..count {
            if i > 0 {
                self.driver.pause(CLICK_INTERVAL);
            }
            self.driver.button(button, Direction::Down)?;
            self.driver.pause(CLICK_HOLD);
            self.driver.button(button, Direction::Up)?;
        }
        Ok(())
    }

    /// Scroll the wheel. Positive `dy` scrolls up, positive `dx` scrolls right.
    ///
    /// # Errors
    /// Returns an error if the event cannot be injected.
    pub fn scroll(&mut self, dx: i32, dy: i32) -> Result<(), MouseError> {
        if dx == 0 && dy == 0 {
            return Ok(());
        }
        self.driver.scroll(dx, dy)
    }

    /// Hold `button` while smoothly moving from the current position to an
    /// absolute coordinate.
    ///
    /// # Errors
    /// Returns an error if an event cannot be injected. The button is released
    /// if the move fails after it was pressed.
    pub fn drag_smooth(&mut self, to: Point, button: Button) -> Result<(), MouseError> {
        self.driver.button(button, Direction::Down)?;
        self.driver.pause(DRAG_DELAY);
        let moved = self.move_smooth(to);
        let released = self.driver.button(button, Direction::Up);
        moved.and(released)
    }

    /// Move to a point relative to `display`.
    ///
    /// # Errors
    /// Returns an error if the move cannot be injected.
    pub fn move_to_on(&mut self, display: &Display, relative: Point) -> Result<(), MouseError> {
        self.move_to(display.to_absolute(relative))
    }

    /// Smoothly move to a point relative to `display`.
    ///
    /// # Errors
    /// See [`Mouse::move_smooth`].
    pub fn move_smooth_on(&mut self, display: &Display, relative: Point) -> Result<(), MouseError> {
        self.move_smooth(display.to_absolute(relative))
    }

    /// Move to `from`, then drag to `to`, both relative to `display`.
    ///
    /// # Errors
    /// See [`Mouse::drag_smooth`].
    pub fn drag_on(
        &mut self,
        display: &Display,
        from: Point,
        to: Point,
        button: Button,
    ) -> Result<(), MouseError> {
        self.move_to_on(display, from)?;
        self.drag_to_on(display, to, button)
    }

    /// Drag from the current position to a point relative to `display`.
    ///
    /// # Errors
    /// See [`Mouse::drag_smooth`].
    pub fn drag_to_on(&mut self, display: &Display, to: Point, button: Button) -> Result<(), MouseError> {
        self.drag_smooth(display.to_absolute(to), button)
    }

    /// The cursor position relative to `display`, or `None` if the cursor is
    /// on another display.
    ///
    /// # Errors
    /// Returns an error if the position cannot be read.
    pub fn location_on(&self, display: &Display) -> Result<Option<Point>, MouseError> {
        Ok(display.to_relative(self.location()?))
    }

    /// Whether the cursor is on `display`.
    ///
    /// # Errors
    /// Returns an error if the position cannot be read.
    pub fn is_on(&self, display: &Display) -> Result<bool, MouseError> {
        Ok(display.contains(self.location()?))
    }

    fn settle(&mut self) {
        self.driver.pause(self.config.settle_delay);
    }
}

/// Move the cursor to an absolute coordinate.
///
/// # Errors
/// Returns an error if the input system is unavailable or the move fails.
pub fn move_to(point: Point) -> Result<(), MouseError> {
    Mouse::new()?.move_to(point)
}

/// The cursor position in absolute coordinates.
///
/// # Errors
/// Returns an error if the input system is unavailable.
pub fn location() -> Result<Point, MouseError> {
    Mouse::new()?.location()
}

/// Smoothly move the cursor to an absolute coordinate.
///
/// # Errors
/// Returns an error if the input system is unavailable or a step fails.
pub fn move_smooth(point: Point, smooth: &SmoothConfig) -> Result<(), MouseError> {
    Mouse::new()?.move_smooth_with(point, smooth)
}

/// Press or release a button.
///
/// # Errors
/// Returns an error if the input system is unavailable or the event fails.
pub fn toggle(button: Button, direction: Direction) -> Result<(), MouseError> {
    Mouse::new()?.toggle(button, direction)
}

/// Click `count` times.
///
/// # Errors
/// Returns an error if the input system is unavailable or an event fails.
pub fn click(button: Button, count: u32) -> Result<(), MouseError> {
    Mouse::new()?.click(button, count)
}

/// Scroll the wheel. Positive `dy` scrolls up, positive `dx` scrolls right.
///
/// # Errors
/// Returns an error if the input system is unavailable or the event fails.
pub fn scroll(dx: i32, dy: i32) -> Result<(), MouseError> {
    Mouse::new()?.scroll(dx, dy)
}

/// Drag from the current position to an absolute coordinate.
///
/// # Errors
/// Returns an error if the input system is unavailable or an event fails.
pub fn drag_smooth(to: Point, button: Button, smooth: &SmoothConfig) -> Result<(), MouseError> {
    let config = MouseConfig::default().with_smooth(*smooth);
    Mouse::new()?.with_config(config).drag_smooth(to, button)
}
