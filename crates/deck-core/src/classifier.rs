#![forbid(unsafe_code)]

//! Direction classifier: displacement + capabilities → candidate direction.
//!
//! # Algorithm
//!
//! 1. The dominant axis is horizontal when `|dx| > |dy|`, else vertical.
//! 2. Horizontal: `Right` if `dx > 0`, else `Left`. A direction the card
//!    cannot move toward yields no verdict (`Right` can always move).
//! 3. Vertical: only when vertical swipes are enabled; `Up` if `dy < 0`,
//!    else `Down`, each gated by its own handler.
//! 4. Progress per axis is `min(|component| / threshold, 1)`.
//!
//! The classification is recomputed on every move with no hysteresis beyond
//! the dominant-axis comparison, so the most recent classification wins when
//! a drag crosses from one axis to the other.

use crate::capability::CapabilitySet;
use crate::config::ThresholdConfig;
use crate::direction::{Axis, SwipeDirection};
use crate::geometry::Offset;

/// Result of classifying one displacement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Candidate direction, or `None` for no feedback.
    pub direction: Option<SwipeDirection>,
    /// Dominant axis of the displacement.
    pub axis: Axis,
    /// `min(|dx| / horizontal_threshold, 1)`.
    pub horizontal_progress: f64,
    /// `min(|dy| / vertical_threshold, 1)`.
    pub vertical_progress: f64,
}

impl Classification {
    /// Classification of a card at rest.
    pub const REST: Self = Self {
        direction: None,
        axis: Axis::Vertical,
        horizontal_progress: 0.0,
        vertical_progress: 0.0,
    };

    /// Progress along the verdict's axis, or 0 without a verdict.
    #[must_use]
    pub fn progress(&self) -> f64 {
        match self.direction {
            Some(d) if d.is_horizontal() => self.horizontal_progress,
            Some(_) => self.vertical_progress,
            None => 0.0,
        }
    }

    /// Whether the verdict's axis has reached its threshold.
    #[must_use]
    pub fn at_threshold(&self) -> bool {
        self.direction.is_some() && self.progress() >= 1.0
    }
}

fn ratio(component: f64, threshold: f64) -> f64 {
    if threshold <= 0.0 {
        return if component == 0.0 { 0.0 } else { 1.0 };
    }
    (component.abs() / threshold).min(1.0)
}

/// Classify a displacement against a card's capabilities.
#[must_use]
pub fn classify(
    d: Offset,
    caps: &CapabilitySet,
    thresholds: &ThresholdConfig,
) -> Classification {
    let axis = Axis::dominant(d);
    let component = axis.component(d);

    let direction = if component == 0.0 {
        None
    } else {
        match axis {
            Axis::Horizontal => {
                let dir = SwipeDirection::from_sign(axis, component);
                caps.allows_motion(dir).then_some(dir)
            }
            Axis::Vertical if caps.vertical_enabled() => {
                let dir = SwipeDirection::from_sign(axis, component);
                caps.allows_motion(dir).then_some(dir)
            }
            Axis::Vertical => None,
        }
    };

    Classification {
        direction,
        axis,
        horizontal_progress: ratio(d.x, thresholds.horizontal),
        vertical_progress: ratio(d.y, thresholds.vertical),
    }
}
