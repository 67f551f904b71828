//! Human-looking cursor paths.
//!
//! The cursor is treated as a particle pulled toward the target by a gravity
//! of random strength. Each step the pull is added to the velocity, which is
//! then renormalized to unit length, so the cursor moves at most one pixel
//! per axis per step and curves slightly as the random pulls accumulate.

use std::f64::consts::SQRT_2;

use deskkit_display::Point;
use rand::Rng;

/// Strength range of the pull toward the target.
const GRAVITY: std::ops::Range<f64> = 5.0..500.0;

/// Octagonal approximation of `hypot`, within 8% of the true length.
fn crude_hypot(x: f64, y: f64) -> f64 {
    let (x, y) = (x.abs(), y.abs());
    let (big, small) = if x > y { (x, y) } else { (y, x) };
    big + (SQRT_2 - 1.0) * small
}

/// Plan a gravity walk from `from` to `to`.
///
/// Every returned point is one injected move; the last one is always `to`.
/// The walk stops once the cursor is within a pixel of the target or after
/// `max_steps` steps, whichever comes first, and then jumps to `to`.
#[must_use]
pub fn smooth_path<R: Rng + ?Sized>(
    from: Point,
    to: Point,
    max_steps: usize,
    rng: &mut R,
) -> Vec<Point> {
    let target = (f64::from(to.x), f64::from(to.y));
    let mut pos = (f64::from(from.x), f64::from(from.y));
    let mut velocity = (0.0_f64, 0.0_f64);
    let mut path = Vec::new();

    loop {
        let distance = crude_hypot(pos.0 - target.0, pos.1 - target.1);
        if distance <= 1.0 {
            break;
        }
        if path.len() >= max_steps {
            log::warn!("smooth move from {from:?} to {to:?} gave up after {max_steps} steps");
            break;
        }

        let gravity = rng.gen_range(GRAVITY);
        velocity.0 += gravity * (target.0 - pos.0) / distance;
        velocity.1 += gravity * (target.1 - pos.1) / distance;

        let speed = crude_hypot(velocity.0, velocity.1);
        if speed > 0.0 {
            velocity.0 /= speed;
            velocity.1 /= speed;
        }

        pos.0 += (velocity.0 + 0.5).floor();
        pos.1 += (velocity.1 + 0.5).floor();
        path.push(to_point(pos));
    }

    if path.last() != Some(&to) {
        path.push(to);
    }
    path
}

#[allow(clippy::cast_possible_truncation)]
fn to_point((x, y): (f64, f64)) -> Point {
    Point::new(x as i32, y as i32)
}
