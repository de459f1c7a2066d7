#![forbid(unsafe_code)]

//! Outcome handlers registered per swipe direction.
//!
//! Which handlers are present defines the card's capability set. A handler
//! runs synchronously at commit time and may veto the commit by returning
//! [`HandlerReply::Veto`] (or `false`); anything else lets the card exit.

use std::fmt;

use deck_core::{DirectionSet, SwipeDirection};

/// A handler's answer to a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandlerReply {
    /// Let the card exit.
    #[default]
    Proceed,
    /// Return the card to center as if the gesture fell short.
    Veto,
}

impl HandlerReply {
    #[inline]
    #[must_use]
    pub fn is_veto(self) -> bool {
        matches!(self, Self::Veto)
    }
}

impl From<bool> for HandlerReply {
    /// `false` vetoes; `true` proceeds.
    fn from(proceed: bool) -> Self {
        if proceed { Self::Proceed } else { Self::Veto }
    }
}

impl From<()> for HandlerReply {
    fn from((): ()) -> Self {
        Self::Proceed
    }
}

/// Boxed outcome handler.
pub type OutcomeHandler = Box<dyn FnMut() -> HandlerReply>;

/// Wrap a closure returning anything convertible to a reply.
pub fn handler<R, F>(mut f: F) -> OutcomeHandler
where
    R: Into<HandlerReply>,
    F: FnMut() -> R + 'static,
{
    Box::new(move || f().into())
}

/// Up to one handler per direction.
#[derive(Default)]
pub struct SwipeHandlers {
    right: Option<OutcomeHandler>,
    left: Option<OutcomeHandler>,
    up: Option<OutcomeHandler>,
    down: Option<OutcomeHandler>,
}

impl fmt::Debug for SwipeHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeHandlers")
            .field("directions", &self.directions())
            .finish()
    }
}

impl SwipeHandlers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, direction: SwipeDirection) -> &mut Option<OutcomeHandler> {
        match direction {
            SwipeDirection::Right => &mut self.right,
            SwipeDirection::Left => &mut self.left,
            SwipeDirection::Up => &mut self.up,
            SwipeDirection::Down => &mut self.down,
        }
    }

    /// Register (or replace) the handler for `direction`.
    pub fn set(&mut self, direction: SwipeDirection, handler: OutcomeHandler) {
        *self.slot(direction) = Some(handler);
    }

    /// Whether `direction` has a handler.
    #[must_use]
    pub fn has(&self, direction: SwipeDirection) -> bool {
        match direction {
            SwipeDirection::Right => self.right.is_some(),
            SwipeDirection::Left => self.left.is_some(),
            SwipeDirection::Up => self.up.is_some(),
            SwipeDirection::Down => self.down.is_some(),
        }
    }

    /// Directions with a registered handler.
    #[must_use]
    pub fn directions(&self) -> DirectionSet {
        SwipeDirection::ALL
            .into_iter()
            .filter(|d| self.has(*d))
            .fold(DirectionSet::empty(), |set, d| set | DirectionSet::from(d))
    }

    /// Run the handler for `direction`. `None` if there is none.
    pub fn invoke(&mut self, direction: SwipeDirection) -> Option<HandlerReply> {
        self.slot(direction).as_mut().map(|h| h())
    }

    /// Drop every handler.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
