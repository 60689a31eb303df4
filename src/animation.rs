//! Clock driving the propagation of light rays.
use log::warn;
use uom::si::{f64::Time, time::second};

use crate::seconds;

/// Duration (s) after which all rays are considered fully propagated.
pub const MAX_ANIMATION_TIME: f64 = 10.0;

/// Accumulates the elapsed animation time, clamped to `[0, MAX_ANIMATION_TIME]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RayAnimationClock {
    elapsed: f64,
}
impl RayAnimationClock {
    /// Creates a new [`RayAnimationClock`] at time zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { elapsed: 0.0 }
    }
    /// Advance the clock by the given time step.
    ///
    /// Negative or non finite time steps are ignored.
    pub fn step(&mut self, dt: Time) {
        let dt = dt.get::<second>();
        if !dt.is_finite() || dt < 0.0 {
            warn!("ignoring invalid animation time step of {dt} s");
            return;
        }
        self.elapsed = (self.elapsed + dt).clamp(0.0, MAX_ANIMATION_TIME);
    }
    /// Restart the animation.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
    /// Jump to the end of the animation (all rays fully propagated).
    pub fn finish(&mut self) {
        self.elapsed = MAX_ANIMATION_TIME;
    }
    /// Returns the elapsed time of this [`RayAnimationClock`].
    #[must_use]
    pub fn elapsed(&self) -> Time {
        seconds!(self.elapsed)
    }
    /// Returns true if the clock reached its end.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= MAX_ANIMATION_TIME
    }
}
