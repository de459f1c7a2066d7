#![forbid(unsafe_code)]

//! Damped harmonic oscillator for card settle-back motion.
//!
//! A card released below threshold (or vetoed) springs back to center along
//! each axis independently:
//!
//!   F = -stiffness × (position - target) - damping × velocity
//!
//! Positions are in logical points, so the rest thresholds are expressed in
//! points and points per second rather than normalized units.
//!
//! # Invariants
//!
//! 1. A spring at rest will not move until `reset()` is called.
//! 2. On coming to rest, the position snaps exactly to the target and the
//!    velocity to zero.
//! 3. Stiffness is clamped to a positive minimum; damping to non-negative.
//!
//! # Failure Modes
//!
//! - Very large dt is subdivided into 4ms steps for stability.
//! - Zero damping oscillates forever; `is_complete()` never returns true.

use std::time::Duration;

use super::Animation;

/// Maximum dt per integration step (4ms).
const MAX_STEP_SECS: f64 = 0.004;

/// Position delta (points) below which the spring may come to rest.
const REST_THRESHOLD: f64 = 0.5;

/// Speed (points/sec) below which the spring may come to rest.
const VELOCITY_THRESHOLD: f64 = 5.0;

/// Minimum stiffness to prevent degenerate springs.
const MIN_STIFFNESS: f64 = 0.1;

/// A damped spring moving one coordinate toward a target.
#[derive(Debug, Clone)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    initial: f64,
    stiffness: f64,
    damping: f64,
    at_rest: bool,
}

impl Spring {
    /// Create a spring starting at `initial` and targeting `target`.
    ///
    /// Default parameters: stiffness = 300.0, damping = 30.0 (slightly
    /// underdamped; a released card overshoots center a little).
    #[must_use]
    pub fn new(initial: f64, target: f64) -> Self {
        Self {
            position: initial,
            velocity: 0.0,
            target,
            initial,
            stiffness: 300.0,
            damping: 30.0,
            at_rest: false,
        }
    }

    /// Set stiffness (builder pattern). Clamped to minimum 0.1.
    #[must_use]
    pub fn with_stiffness(mut self, k: f64) -> Self {
        self.stiffness = k.max(MIN_STIFFNESS);
        self
    }

    /// Set damping (builder pattern). Clamped to minimum 0.0.
    #[must_use]
    pub fn with_damping(mut self, c: f64) -> Self {
        self.damping = c.max(0.0);
        self
    }

    /// Current position (unclamped).
    #[inline]
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Current velocity.
    #[inline]
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Stiffness parameter.
    #[inline]
    #[must_use]
    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    /// Perform a single semi-implicit Euler step of `dt` seconds.
    fn step(&mut self, dt: f64) {
        let displacement = self.position - self.target;
        let acceleration = -self.stiffness * displacement - self.damping * self.velocity;
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
    }

    /// Advance the spring by `dt`, subdividing if necessary for stability.
    pub fn advance(&mut self, dt: Duration) {
        if self.at_rest {
            return;
        }

        let mut remaining = dt.as_secs_f64();
        while remaining > 0.0 {
            let step_dt = remaining.min(MAX_STEP_SECS);
            self.step(step_dt);
            remaining -= step_dt;
        }

        if (self.position - self.target).abs() < REST_THRESHOLD
            && self.velocity.abs() < VELOCITY_THRESHOLD
        {
            self.position = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }
    }
}

impl Animation for Spring {
    fn tick(&mut self, dt: Duration) {
        self.advance(dt);
    }

    fn is_complete(&self) -> bool {
        self.at_rest
    }

    /// The raw position; card springs move in points, not a unit range.
    fn value(&self) -> f64 {
        self.position
    }

    fn reset(&mut self) {
        self.position = self.initial;
        self.velocity = 0.0;
        self.at_rest = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_16: Duration = Duration::from_millis(16);

    fn simulate(spring: &mut Spring, frames: usize) {
        for _ in 0..frames {
            spring.tick(MS_16);
        }
    }

    #[test]
    fn spring_returns_to_center() {
        let mut spring = Spring::new(140.0, 0.0);
        simulate(&mut spring, 120);
        assert!(spring.is_complete());
        assert_eq!(spring.position(), 0.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn default_spring_settles_quickly_with_small_overshoot() {
        let mut spring = Spring::new(100.0, 0.0);
        let mut min_pos = f64::MAX;
        let mut frames = 0;
        while !spring.is_complete() && frames < 120 {
            spring.tick(MS_16);
            min_pos = min_pos.min(spring.position());
            frames += 1;
        }
        assert!(spring.is_complete());
        assert!(frames <= 40, "took {frames} frames to settle");
        assert!(min_pos > -5.0, "overshoot too large: {min_pos}");
    }

    #[test]
    fn high_damping_minimal_overshoot() {
        let mut spring = Spring::new(100.0, 0.0).with_damping(200.0);
        let mut min_pos = f64::MAX;
        for _ in 0..600 {
            spring.tick(MS_16);
            min_pos = min_pos.min(spring.position());
        }
        assert!(min_pos > -1.0, "overdamped spring overshot to {min_pos}");
    }

    #[test]
    fn zero_dt_noop() {
        let mut spring = Spring::new(50.0, 0.0);
        spring.tick(Duration::ZERO);
        assert_eq!(spring.position(), 50.0);
        assert!(!spring.is_complete());
    }

    #[test]
    fn spring_at_target_settles_on_first_tick() {
        let mut spring = Spring::new(0.0, 0.0);
        spring.tick(Duration::ZERO);
        assert!(spring.is_complete());
    }

    #[test]
    fn large_dt_subdivided() {
        let mut spring = Spring::new(200.0, 0.0);
        spring.tick(Duration::from_secs(5));
        assert!(spring.is_complete(), "position: {}", spring.position());
    }

    #[test]
    fn zero_stiffness_clamped() {
        let spring = Spring::new(0.0, 1.0).with_stiffness(0.0);
        assert!(spring.stiffness() >= MIN_STIFFNESS);
    }

    #[test]
    fn reset_restores_initial() {
        let mut spring = Spring::new(40.0, 0.0);
        simulate(&mut spring, 10);
        spring.reset();
        assert_eq!(spring.position(), 40.0);
        assert_eq!(spring.velocity(), 0.0);
    }
}
