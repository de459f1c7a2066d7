#![forbid(unsafe_code)]

//! Commit/cancel resolution at gesture end.
//!
//! The final displacement decides between a commit candidate and a reset:
//!
//! 1. `|dx|` past the horizontal threshold: right or left by sign, if that
//!    direction can commit; otherwise reset (vertical is not consulted).
//! 2. Else, with vertical enabled and `|dy|` past the vertical threshold: up
//!    or down by sign, if that direction can commit; otherwise reset.
//! 3. Else reset.
//!
//! Thresholds must be strictly exceeded. A candidate is then handed to
//! [`run_commit`], which invokes its handler exactly once and reports
//! whether it vetoed.

use deck_core::config::ThresholdConfig;
use deck_core::logging::CARD;
use deck_core::{Axis, CapabilitySet, Offset, SwipeDirection};
use tracing::field::Empty;

use crate::handler::SwipeHandlers;

/// Verdict for a finished gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Invoke this direction's handler.
    Commit(SwipeDirection),
    /// Return to center.
    Reset,
}

/// Result of one commit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitOutcome {
    pub direction: SwipeDirection,
    pub vetoed: bool,
}

/// Resolve a final displacement.
#[must_use]
pub fn resolve(d: Offset, caps: &CapabilitySet, thresholds: &ThresholdConfig) -> Resolution {
    let candidate = if d.x.abs() > thresholds.horizontal {
        Some(SwipeDirection::from_sign(Axis::Horizontal, d.x))
    } else if caps.vertical_enabled() && d.y.abs() > thresholds.vertical {
        Some(SwipeDirection::from_sign(Axis::Vertical, d.y))
    } else {
        None
    };

    match candidate {
        Some(direction) if caps.can_commit(direction) => Resolution::Commit(direction),
        _ => Resolution::Reset,
    }
}

/// Invoke the handler for `direction` once.
///
/// A missing handler counts as a veto; callers only get here for
/// directions that passed [`CapabilitySet::can_commit`].
pub fn run_commit(direction: SwipeDirection, handlers: &mut SwipeHandlers) -> CommitOutcome {
    let span = tracing::debug_span!(
        target: CARD,
        "deck.card.commit",
        direction = direction.as_str(),
        vetoed = Empty
    );
    let _guard = span.enter();

    let vetoed = handlers
        .invoke(direction)
        .is_none_or(|reply| reply.is_veto());
    span.record("vetoed", vetoed);

    if vetoed {
        tracing::debug!(target: CARD, %direction, "commit vetoed");
    } else {
        tracing::debug!(target: CARD, %direction, "commit accepted");
    }

    CommitOutcome { direction, vetoed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::handler;
    use deck_core::{DirectionSet, LeftStyle, RightStyle};

    fn thresholds() -> ThresholdConfig {
        ThresholdConfig {
            horizontal: 60.0,
            vertical: 50.0,
        }
    }

    fn right_and_down() -> CapabilitySet {
        CapabilitySet::new(
            DirectionSet::RIGHT | DirectionSet::DOWN,
            true,
            RightStyle::Agree,
            LeftStyle::Disagree,
        )
    }

    #[test]
    fn right_and_down_scenario() {
        let caps = right_and_down();
        let t = thresholds();
        assert_eq!(
            resolve(Offset::new(80.0, 5.0), &caps, &t),
            Resolution::Commit(SwipeDirection::Right)
        );
        assert_eq!(resolve(Offset::new(-80.0, 5.0), &caps, &t), Resolution::Reset);
        assert_eq!(
            resolve(Offset::new(10.0, 70.0), &caps, &t),
            Resolution::Commit(SwipeDirection::Down)
        );
        assert_eq!(resolve(Offset::new(10.0, -70.0), &caps, &t), Resolution::Reset);
    }

    #[test]
    fn threshold_must_be_exceeded() {
        let caps = right_and_down();
        assert_eq!(
            resolve(Offset::new(60.0, 0.0), &caps, &thresholds()),
            Resolution::Reset
        );
    }

    #[test]
    fn horizontal_miss_does_not_fall_back_to_vertical() {
        let caps = right_and_down();
        assert_eq!(
            resolve(Offset::new(-80.0, 70.0), &caps, &thresholds()),
            Resolution::Reset
        );
    }

    #[test]
    fn vertical_disabled_never_commits_vertically() {
        let caps = CapabilitySet::new(
            DirectionSet::all(),
            false,
            RightStyle::Agree,
            LeftStyle::Disagree,
        );
        assert_eq!(
            resolve(Offset::new(0.0, 500.0), &caps, &thresholds()),
            Resolution::Reset
        );
    }

    #[test]
    fn right_without_handler_resets() {
        let caps = CapabilitySet::default();
        assert_eq!(
            resolve(Offset::new(200.0, 0.0), &caps, &thresholds()),
            Resolution::Reset
        );
    }

    #[test]
    fn run_commit_reports_veto() {
        let mut handlers = SwipeHandlers::new();
        handlers.set(SwipeDirection::Right, handler(|| false));
        handlers.set(SwipeDirection::Left, handler(|| ()));
        assert!(run_commit(SwipeDirection::Right, &mut handlers).vetoed);
        assert!(!run_commit(SwipeDirection::Left, &mut handlers).vetoed);
        assert!(run_commit(SwipeDirection::Up, &mut handlers).vetoed);
    }
}
