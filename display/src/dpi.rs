//! Process-wide DPI awareness.
//!
//! The flag decides which [`CoordinateSpace`](crate::CoordinateSpace) the
//! platform speaks. It is computed once, the first time anything asks for it,
//! and never changes afterwards.

use std::sync::OnceLock;

static DPI_AWARE: OnceLock<bool> = OnceLock::new();

/// Make the process DPI aware where the platform allows it, and record the
/// outcome.
///
/// Calling this early (before any window is created) gives Windows the best
/// chance to accept the request. Later calls return the recorded value
/// without touching the OS again. Enumeration, capture and mouse calls run
/// it lazily, so calling it explicitly is optional.
///
/// Failure is not an error: the process simply keeps receiving logical
/// coordinates and every display uses the scaled model.
pub fn init() -> bool {
    *DPI_AWARE.get_or_init(|| {
        let aware = crate::sys::make_dpi_aware();
        if aware {
            log::debug!("process is DPI aware, using physical coordinates");
        }
        aware
    })
}

/// Whether absolute coordinates are device pixels for this process.
///
/// Always `true` on Linux, always `false` on macOS.
#[must_use]
pub fn is_dpi_aware() -> bool {
    init()
}
