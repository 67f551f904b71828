use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Tuning for smooth mouse movement.
///
/// Between two steps of a smooth move the cursor rests for a random delay
/// drawn uniformly from `[low_ms, high_ms)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothConfig {
    /// Shortest pause between steps, in milliseconds.
    pub low_ms: f64,
    /// Longest pause between steps, in milliseconds.
    pub high_ms: f64,
    /// Give up walking after this many steps and jump to the target.
    pub max_steps: usize,
}

impl Default for SmoothConfig {
    fn default() -> Self {
        Self {
            low_ms: 1.0,
            high_ms: 3.0,
            max_steps: 10_000,
        }
    }
}

impl SmoothConfig {
    /// Set the per-step delay range in milliseconds.
    #[must_use]
    pub const fn with_delay(mut self, low_ms: f64, high_ms: f64) -> Self {
        self.low_ms = low_ms;
        self.high_ms = high_ms;
        self
    }

    /// Set the step limit.
    #[must_use]
    pub const fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Draw one inter-step pause.
    ///
    /// Negative or non-finite bounds count as zero; an empty range yields
    /// `low_ms`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn step_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let low = millis(self.low_ms);
        let high = millis(self.high_ms);
        let ms = if high > low {
            rng.gen_range(low..high)
        } else {
            low
        };
        Duration::from_nanos((ms * 1_000_000.0).round() as u64)
    }
}

fn millis(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// Mouse behavior shared by every call on one [`Mouse`](crate::Mouse).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MouseConfig {
    /// Pause after every move, letting the target application catch up.
    pub settle_delay: Duration,
    /// Smooth movement tuning.
    pub smooth: SmoothConfig,
}

impl MouseConfig {
    /// Set the pause taken after each move.
    #[must_use]
    pub const fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Set the smooth movement tuning.
    #[must_use]
    pub const fn with_smooth(mut self, smooth: SmoothConfig) -> Self {
        self.smooth = smooth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn defaults() {
        let config = MouseConfig::default();
        assert_eq!(config.settle_delay, Duration::ZERO);
        assert!((config.smooth.low_ms - 1.0).abs() < f64::EPSILON);
        assert!((config.smooth.high_ms - 3.0).abs() < f64::EPSILON);
        assert_eq!(config.smooth.max_steps, 10_000);
    }

    #[test]
    fn step_delay_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let smooth = SmoothConfig::default().with_delay(2.0, 4.0);
        for _ in 0..500 {
            let delay = smooth.step_delay(&mut rng);
            assert!(delay >= Duration::from_millis(2), "{delay:?}");
            assert!(delay <= Duration::from_millis(4), "{delay:?}");
        }
    }

    #[test]
    fn degenerate_ranges() {
        let mut rng = StdRng::seed_from_u64(1);
        let fixed = SmoothConfig::default().with_delay(5.0, 5.0);
        assert_eq!(fixed.step_delay(&mut rng), Duration::from_millis(5));

        let inverted = SmoothConfig::default().with_delay(3.0, 1.0);
        assert_eq!(inverted.step_delay(&mut rng), Duration::from_millis(3));

        let broken = SmoothConfig::default().with_delay(f64::NAN, -1.0);
        assert_eq!(broken.step_delay(&mut rng), Duration::ZERO);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: MouseConfig =
            serde_json::from_str(r#"{ "smooth": { "high_ms": 8.0 } }"#).unwrap();
        assert_eq!(config.settle_delay, Duration::ZERO);
        assert!((config.smooth.low_ms - 1.0).abs() < f64::EPSILON);
        assert!((config.smooth.high_ms - 8.0).abs() < f64::EPSILON);
        assert_eq!(config.smooth.max_steps, 10_000);
    }

    #[test]
    fn builders() {
        let config = MouseConfig::default()
            .with_settle_delay(Duration::from_millis(10))
            .with_smooth(SmoothConfig::default().with_max_steps(3));
        assert_eq!(config.settle_delay, Duration::from_millis(10));
        assert_eq!(config.smooth.max_steps, 3);
    }
}
