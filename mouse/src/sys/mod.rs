#[cfg(any(target_os = "macos", target_os = "windows", target_os = "linux"))]
mod desktop;
#[cfg(any(target_os = "macos", target_os = "windows", target_os = "linux"))]
pub use desktop::SystemDriver;

// Fallback for docs or other platforms
#[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
mod unsupported {
    use crate::{Button, Direction, MouseDriver, MouseError, Point};

    /// Placeholder driver; every operation fails with [`MouseError::Unsupported`].
    #[derive(Debug)]
    pub struct SystemDriver;

    impl SystemDriver {
        /// Always fails on this platform.
        ///
        /// # Errors
        /// Returns [`MouseError::Unsupported`].
        pub const fn new() -> Result<Self, MouseError> {
            Err(MouseError::Unsupported)
        }
    }

    impl MouseDriver for SystemDriver {
        fn move_to(&mut self, _point: Point) -> Result<(), MouseError> {
            Err(MouseError::Unsupported)
        }

        fn button(&mut self, _button: Button, _direction: Direction) -> Result<(), MouseError> {
            Err(MouseError::Unsupported)
        }

        fn scroll(&mut self, _dx: i32, _dy: i32) -> Result<(), MouseError> {
            Err(MouseError::Unsupported)
        }

        fn location(&self) -> Result<Point, MouseError> {
            Err(MouseError::Unsupported)
        }
    }
}
#[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
pub use unsupported::SystemDriver;
