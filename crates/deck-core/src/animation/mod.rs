#![forbid(unsafe_code)]

//! Animation primitives driven by explicit `tick(dt)` calls.
//!
//! The deck never owns a clock. Hosts deliver frame deltas through `tick`,
//! and every animation here advances deterministically from those deltas,
//! which keeps the card state machine unit-testable.
//!
//! - [`Easing`]: progress curves for timed motion.
//! - [`Tween`]: a timed 0→1 progress with an easing curve.
//! - [`Spring`]: damped harmonic oscillator for settle-back motion.
//!
//! # Invariants
//!
//! 1. `Tween::value()` is always in [0.0, 1.0] for non-overshooting easings.
//! 2. A zero-duration tween completes on its first tick (including a
//!    zero-length tick).
//! 3. Once complete, an animation stays complete until reset.

mod spring;

pub use spring::Spring;

use std::time::Duration;

#[cfg(feature = "config-file")]
use serde::{Deserialize, Serialize};

/// Common interface for tick-driven animations.
pub trait Animation {
    /// Advance by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has finished.
    fn is_complete(&self) -> bool;

    /// Current output value.
    fn value(&self) -> f64;

    /// Restart from the beginning.
    fn reset(&mut self);
}

// ============================================================================
// Easing
// ============================================================================

/// Easing curve for timed motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config-file", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config-file", serde(rename_all = "snake_case"))]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Decelerating; good for ramps that should feel responsive.
    #[default]
    EaseOut,
    /// Accelerating; good for exits.
    EaseIn,
    /// Smooth S-curve.
    EaseInOut,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseIn => t * t * t,
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }
}

// ============================================================================
// Tween
// ============================================================================

/// Timed progress from 0.0 to 1.0 with an easing curve.
#[derive(Debug, Clone)]
pub struct Tween {
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
    done: bool,
}

impl Tween {
    /// Create a tween of the given duration (linear easing).
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
            easing: Easing::Linear,
            done: false,
        }
    }

    /// Set the easing curve (builder pattern).
    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Total duration.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Raw (un-eased) progress in [0.0, 1.0].
    #[must_use]
    pub fn raw_progress(&self) -> f64 {
        if self.done {
            return 1.0;
        }
        if self.duration.is_zero() {
            return 0.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }
}

impl Animation for Tween {
    fn tick(&mut self, dt: Duration) {
        if self.done {
            return;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.done = true;
        }
    }

    fn is_complete(&self) -> bool {
        self.done
    }

    fn value(&self) -> f64 {
        self.easing.apply(self.raw_progress())
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.done = false;
    }
}
