#![forbid(unsafe_code)]

//! Per-card capability set.
//!
//! A [`CapabilitySet`] is fixed when a card is mounted: which directions have
//! an outcome handler, whether vertical movement is permitted at all, and
//! which feedback style applies to each horizontal side. Nothing mutates it
//! afterwards; a new card gets a new set.
//!
//! # Invariants
//!
//! 1. `Right` may always move, with or without a handler (every card type
//!    has a right outcome).
//! 2. `Left` moves only with a left handler.
//! 3. `Up` / `Down` move only when vertical swipes are enabled **and** the
//!    direction has a handler.
//! 4. A direction can commit only if it can move and has a handler.

use crate::direction::{DirectionSet, SwipeDirection};
use crate::geometry::Offset;

/// Feedback style for a right swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RightStyle {
    /// Green wash with a checkmark.
    #[default]
    Agree,
    /// Yellow chat wash (accepting a chat request).
    ChatAccept,
    /// Green wash with a "submit" label instead of a checkmark.
    Submit,
    /// Gold kudos wash.
    Kudos,
}

impl RightStyle {
    /// Resolve the legacy independent boolean selectors into one style.
    ///
    /// Precedence is chat-accept, then submit, then kudos. The second value
    /// is `true` when more than one selector was set.
    #[must_use]
    pub fn from_flags(chat_accept: bool, submit: bool, kudos: bool) -> (Self, bool) {
        let set = [chat_accept, submit, kudos].iter().filter(|f| **f).count();
        let style = if chat_accept {
            Self::ChatAccept
        } else if submit {
            Self::Submit
        } else if kudos {
            Self::Kudos
        } else {
            Self::Agree
        };
        (style, set > 1)
    }
}

/// Feedback style for a left swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LeftStyle {
    /// Red wash with an X.
    #[default]
    Disagree,
    /// Gray wash with a text label.
    Pass,
}

/// Fixed per-card swipe capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapabilitySet {
    handlers: DirectionSet,
    vertical_enabled: bool,
    right_style: RightStyle,
    left_style: LeftStyle,
}

impl CapabilitySet {
    /// Create a capability set.
    #[must_use]
    pub const fn new(
        handlers: DirectionSet,
        vertical_enabled: bool,
        right_style: RightStyle,
        left_style: LeftStyle,
    ) -> Self {
        Self {
            handlers,
            vertical_enabled,
            right_style,
            left_style,
        }
    }

    /// Directions with a registered handler (regardless of vertical gating).
    #[inline]
    #[must_use]
    pub const fn handlers(&self) -> DirectionSet {
        self.handlers
    }

    /// Whether vertical movement is permitted at all.
    #[inline]
    #[must_use]
    pub const fn vertical_enabled(&self) -> bool {
        self.vertical_enabled
    }

    #[inline]
    #[must_use]
    pub const fn right_style(&self) -> RightStyle {
        self.right_style
    }

    #[inline]
    #[must_use]
    pub const fn left_style(&self) -> LeftStyle {
        self.left_style
    }

    /// Whether the card may be displaced toward `direction`.
    #[must_use]
    pub fn allows_motion(&self, direction: SwipeDirection) -> bool {
        match direction {
            SwipeDirection::Right => true,
            SwipeDirection::Left => self.handlers.has(direction),
            SwipeDirection::Up | SwipeDirection::Down => {
                self.vertical_enabled && self.handlers.has(direction)
            }
        }
    }

    /// Whether a swipe toward `direction` can produce a commit.
    #[must_use]
    pub fn can_commit(&self, direction: SwipeDirection) -> bool {
        self.allows_motion(direction) && self.handlers.has(direction)
    }

    /// Clamp a displacement so forbidden directions contribute nothing.
    #[must_use]
    pub fn clamp(&self, d: Offset) -> Offset {
        let x = if d.x > 0.0 && self.allows_motion(SwipeDirection::Right)
            || d.x < 0.0 && self.allows_motion(SwipeDirection::Left)
        {
            d.x
        } else {
            0.0
        };
        let y = if d.y < 0.0 && self.allows_motion(SwipeDirection::Up)
            || d.y > 0.0 && self.allows_motion(SwipeDirection::Down)
        {
            d.y
        } else {
            0.0
        };
        Offset::new(x, y)
    }
}
