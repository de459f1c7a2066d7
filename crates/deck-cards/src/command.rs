#![forbid(unsafe_code)]

//! Imperative commands: the same outcomes as a swipe, without a gesture.
//!
//! An accepted command ramps the overlay (and the card) to the
//! at-threshold pose over `motion.command_ramp`, then commits through the
//! same path a released gesture uses, veto included. The handler cannot
//! tell the two apart.

use std::time::Duration;

use deck_core::animation::{Animation, Tween};
use deck_core::config::MotionConfig;
use deck_core::SwipeDirection;
use thiserror::Error;

use crate::overlay::RevealMark;

/// A command a parent (keyboard shortcut, button) can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeCommand {
    Right,
    Left,
    Up,
    Down,
    /// Right commit revealing a "plus" mark (adopt a position).
    RightWithPlus,
}

impl SwipeCommand {
    pub const ALL: [Self; 5] = [
        Self::Right,
        Self::Left,
        Self::Up,
        Self::Down,
        Self::RightWithPlus,
    ];

    /// Direction this command commits in.
    #[must_use]
    pub const fn direction(self) -> SwipeDirection {
        match self {
            Self::Right | Self::RightWithPlus => SwipeDirection::Right,
            Self::Left => SwipeDirection::Left,
            Self::Up => SwipeDirection::Up,
            Self::Down => SwipeDirection::Down,
        }
    }

    /// Mark shown instead of the style's default one.
    #[must_use]
    pub const fn mark_override(self) -> Option<RevealMark> {
        match self {
            Self::RightWithPlus => Some(RevealMark::Plus),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Left => "left",
            Self::Up => "up",
            Self::Down => "down",
            Self::RightWithPlus => "right_with_plus",
        }
    }
}

impl From<SwipeDirection> for SwipeCommand {
    fn from(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Right => Self::Right,
            SwipeDirection::Left => Self::Left,
            SwipeDirection::Up => Self::Up,
            SwipeDirection::Down => Self::Down,
        }
    }
}

/// Why a command was refused. A refused command changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandRejected {
    #[error("a gesture is in progress")]
    GestureActive,

    #[error("the card is animating")]
    Busy,

    #[error("the card has exited")]
    Exited,

    #[error("back cards do not accept commands")]
    BackCard,

    #[error("no {0} outcome on this card")]
    Unsupported(SwipeDirection),
}

/// Feedback ramp driven by an accepted command.
#[derive(Debug, Clone)]
pub struct CommandRamp {
    command: SwipeCommand,
    tween: Tween,
}

impl CommandRamp {
    #[must_use]
    pub fn new(command: SwipeCommand, motion: &MotionConfig) -> Self {
        Self {
            command,
            tween: Tween::new(motion.command_ramp()).easing(motion.ramp_easing),
        }
    }

    #[inline]
    #[must_use]
    pub fn command(&self) -> SwipeCommand {
        self.command
    }

    pub fn tick(&mut self, dt: Duration) {
        self.tween.tick(dt);
    }

    /// Eased progress in [0, 1].
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.tween.value()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.tween.is_complete()
    }
}
