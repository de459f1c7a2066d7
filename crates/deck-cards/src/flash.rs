#![forbid(unsafe_code)]

//! Attention flash: a short pulse the card plays to ask for input.
//!
//! Pairs with a veto: a handler that refuses a commit ("select an option
//! first") leaves the card silently back at center, and the flash is the
//! only visible cue. Each pulse rises to full intensity and falls back to
//! zero (a triangle wave).

use std::time::Duration;

use deck_core::config::MotionConfig;

#[derive(Debug, Clone)]
pub struct AttentionFlash {
    pulse: Duration,
    pulses: u32,
    elapsed: Duration,
    active: bool,
}

impl AttentionFlash {
    #[must_use]
    pub fn new(motion: &MotionConfig) -> Self {
        Self {
            pulse: motion.flash_pulse(),
            pulses: motion.flash_pulses,
            elapsed: Duration::ZERO,
            active: false,
        }
    }

    /// Start (or restart) the flash.
    pub fn trigger(&mut self) {
        self.elapsed = Duration::ZERO;
        self.active = self.pulses > 0;
    }

    /// Stop immediately.
    pub fn cancel(&mut self) {
        self.active = false;
        self.elapsed = Duration::ZERO;
    }

    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    fn total(&self) -> Duration {
        self.pulse.saturating_mul(self.pulses)
    }

    /// Advance. Returns `true` when the flash finishes on this tick.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.active {
            return false;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.total() {
            self.cancel();
            return true;
        }
        false
    }

    /// Current intensity in [0, 1].
    #[must_use]
    pub fn intensity(&self) -> f64 {
        if !self.active || self.pulse.is_zero() {
            return 0.0;
        }
        let pulse = self.pulse.as_secs_f64();
        let t = (self.elapsed.as_secs_f64() % pulse) / pulse;
        1.0 - (2.0 * t - 1.0).abs()
    }
}
