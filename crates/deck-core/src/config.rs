#![forbid(unsafe_code)]

//! Tunable parameters for the swipe engine.
//!
//! Every constant the engine uses lives in a [`SwipeConfig`] that can be
//! loaded from TOML or JSON at startup.
//!
//! # Loading
//!
//! ```toml
//! # deck.toml
//! [thresholds]
//! horizontal = 120.0
//! vertical = 160.0
//!
//! [motion]
//! command_ramp_ms = 220
//! reduced_motion = false
//! ```
//!
//! ```rust,ignore
//! let config = SwipeConfig::from_toml_file("deck.toml")?;
//! let config = SwipeConfig::from_json_str(json)?;
//! ```
//!
//! # Defaults
//!
//! Horizontal swipes are the primary interaction, so the default horizontal
//! threshold is smaller than the vertical one. Loaded values are validated
//! for range only; the relation between the two thresholds is not enforced.

#[cfg(feature = "config-file")]
use std::path::Path;
use std::time::Duration;

#[cfg(feature = "config-file")]
use serde::{Deserialize, Serialize};

use crate::animation::Easing;
use crate::direction::Axis;
#[cfg(feature = "config-file")]
use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Top-level SwipeConfig
// ---------------------------------------------------------------------------

/// Top-level configuration for cards and stacks.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "config-file", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config-file", serde(default))]
pub struct SwipeConfig {
    /// Commit distances per axis.
    pub thresholds: ThresholdConfig,

    /// Overlay feedback scaling.
    pub overlay: OverlayConfig,

    /// Settle, exit, and command ramp timings.
    pub motion: MotionConfig,

    /// Screen size used for exit distance and rotation.
    pub viewport: ViewportConfig,
}

impl SwipeConfig {
    /// Load from a TOML string and validate.
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validated()
    }

    /// Load from a TOML file on disk and validate.
    #[cfg(feature = "config-file")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string and validate.
    #[cfg(feature = "config-file")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validated()
    }

    /// Load from a JSON file on disk and validate.
    #[cfg(feature = "config-file")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    #[cfg(feature = "config-file")]
    fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            tracing::debug!(target: crate::logging::CONFIG, config = %self.to_jsonl(), "swipe config loaded");
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (name, value) in [
            ("thresholds.horizontal", self.thresholds.horizontal),
            ("thresholds.vertical", self.thresholds.vertical),
            ("viewport.width", self.viewport.width),
            ("viewport.height", self.viewport.height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                errors.push(format!("{name} must be > 0, got {value}"));
            }
        }

        if !(self.overlay.max_intensity > 0.0 && self.overlay.max_intensity <= 1.0) {
            errors.push(format!(
                "overlay.max_intensity must be in (0, 1], got {}",
                self.overlay.max_intensity
            ));
        }

        if !(0.0..=1.0).contains(&self.overlay.reveal_scale_floor) {
            errors.push(format!(
                "overlay.reveal_scale_floor must be in [0, 1], got {}",
                self.overlay.reveal_scale_floor
            ));
        }

        if !self.viewport.max_rotation_deg.is_finite() || self.viewport.max_rotation_deg < 0.0 {
            errors.push(format!(
                "viewport.max_rotation_deg must be >= 0, got {}",
                self.viewport.max_rotation_deg
            ));
        }

        if !self.motion.reset_stiffness.is_finite() || self.motion.reset_stiffness <= 0.0 {
            errors.push(format!(
                "motion.reset_stiffness must be > 0, got {}",
                self.motion.reset_stiffness
            ));
        }

        // Zero damping never settles, so a reset would never complete.
        if !self.motion.reset_damping.is_finite() || self.motion.reset_damping <= 0.0 {
            errors.push(format!(
                "motion.reset_damping must be > 0, got {}",
                self.motion.reset_damping
            ));
        }

        errors
    }

    /// Format as a JSONL line for structured logging.
    #[must_use]
    pub fn to_jsonl(&self) -> String {
        format!(
            r#"{{"schema":"swipe-config-v1","horizontal_threshold":{},"vertical_threshold":{},"max_intensity":{},"command_ramp_ms":{},"exit_duration_ms":{},"reduced_motion":{}}}"#,
            self.thresholds.horizontal,
            self.thresholds.vertical,
            self.overlay.max_intensity,
            self.motion.command_ramp_ms,
            self.motion.exit_duration_ms,
            self.motion.reduced_motion,
        )
    }
}

// ---------------------------------------------------------------------------
// Sub-configs (flat, serde-friendly)
// ---------------------------------------------------------------------------

/// Commit distances in logical points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "config-file", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config-file", serde(default))]
pub struct ThresholdConfig {
    /// Horizontal commit distance. Default: 120.
    pub horizontal: f64,
    /// Vertical commit distance. Default: 160.
    pub vertical: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            horizontal: 120.0,
            vertical: 160.0,
        }
    }
}

impl ThresholdConfig {
    /// Threshold for `axis`.
    #[inline]
    #[must_use]
    pub fn for_axis(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }
}

/// Overlay feedback scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "config-file", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config-file", serde(default))]
pub struct OverlayConfig {
    /// Color wash at full progress; kept below 1 so card content stays
    /// legible. Default: 0.4.
    pub max_intensity: f64,
    /// Reveal scale at zero progress. Default: 0.5.
    pub reveal_scale_floor: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            max_intensity: 0.4,
            reveal_scale_floor: 0.5,
        }
    }
}

/// Settle, exit, and command ramp timings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "config-file", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config-file", serde(default))]
pub struct MotionConfig {
    /// Settle spring stiffness. Default: 300.
    pub reset_stiffness: f64,
    /// Settle spring damping. Default: 30.
    pub reset_damping: f64,
    /// Off-screen exit duration. Default: 250ms.
    pub exit_duration_ms: u64,
    /// Overlay fade-out duration on settle and exit. Default: 150ms.
    pub overlay_fade_ms: u64,
    /// Imperative command feedback ramp. Default: 220ms.
    pub command_ramp_ms: u64,
    /// Easing for the command ramp. Default: ease-out.
    pub ramp_easing: Easing,
    /// Easing for the exit. Default: ease-in.
    pub exit_easing: Easing,
    /// Length of one attention flash pulse. Default: 180ms.
    pub flash_pulse_ms: u64,
    /// Pulses per attention flash. Default: 2.
    pub flash_pulses: u32,
    /// Replace all motion with zero-duration transitions.
    pub reduced_motion: bool,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reset_stiffness: 300.0,
            reset_damping: 30.0,
            exit_duration_ms: 250,
            overlay_fade_ms: 150,
            command_ramp_ms: 220,
            ramp_easing: Easing::EaseOut,
            exit_easing: Easing::EaseIn,
            flash_pulse_ms: 180,
            flash_pulses: 2,
            reduced_motion: false,
        }
    }
}

impl MotionConfig {
    fn effective(&self, ms: u64) -> Duration {
        if self.reduced_motion {
            Duration::ZERO
        } else {
            Duration::from_millis(ms)
        }
    }

    /// Exit duration after applying reduced motion.
    #[must_use]
    pub fn exit_duration(&self) -> Duration {
        self.effective(self.exit_duration_ms)
    }

    /// Overlay fade duration after applying reduced motion.
    #[must_use]
    pub fn overlay_fade(&self) -> Duration {
        self.effective(self.overlay_fade_ms)
    }

    /// Command ramp duration after applying reduced motion.
    #[must_use]
    pub fn command_ramp(&self) -> Duration {
        self.effective(self.command_ramp_ms)
    }

    /// Attention flash pulse duration after applying reduced motion.
    #[must_use]
    pub fn flash_pulse(&self) -> Duration {
        self.effective(self.flash_pulse_ms)
    }
}

/// Screen geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "config-file", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config-file", serde(default))]
pub struct ViewportConfig {
    /// Viewport width in points. Default: 390.
    pub width: f64,
    /// Viewport height in points. Default: 844.
    pub height: f64,
    /// Card rotation at half a viewport width of travel. Default: 12°.
    pub max_rotation_deg: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 390.0,
            height: 844.0,
            max_rotation_deg: 12.0,
        }
    }
}

impl ViewportConfig {
    /// Rotation in degrees for a horizontal card offset.
    #[must_use]
    pub fn rotation_for(&self, x: f64) -> f64 {
        let half = self.width / 2.0;
        if half <= 0.0 {
            return 0.0;
        }
        (x / half).clamp(-1.0, 1.0) * self.max_rotation_deg
    }

    /// Distance that puts a card fully off-screen along `axis`.
    #[must_use]
    pub fn exit_distance(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width * 1.5,
            Axis::Vertical => self.height * 1.5,
        }
    }
}
