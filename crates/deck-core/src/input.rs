#![forbid(unsafe_code)]

//! Normalized input events consumed by the swipe engine.
//!
//! Hosts translate their native touch or mouse events into [`PointerEvent`]s
//! (coordinates in logical points, any fixed origin) and their key events
//! into [`KeyCode`]s for the keyboard shortcut map.

use crate::geometry::Offset;

/// A pointer event for the interactive front card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed at a screen location.
    Down(Offset),
    /// Pointer moved while pressed.
    Move(Offset),
    /// Pointer released at a screen location.
    Up(Offset),
    /// The input system took the gesture away (responder transfer, focus
    /// loss, system gesture). Always resolves as a reset.
    Cancel,
}

impl PointerEvent {
    /// The screen location carried by this event, if any.
    #[must_use]
    pub fn location(&self) -> Option<Offset> {
        match *self {
            Self::Down(at) | Self::Move(at) | Self::Up(at) => Some(at),
            Self::Cancel => None,
        }
    }
}

/// Key codes relevant to card shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),

    /// Enter/Return key.
    Enter,

    /// Escape key.
    Escape,

    /// Up arrow key.
    Up,

    /// Down arrow key.
    Down,

    /// Left arrow key.
    Left,

    /// Right arrow key.
    Right,
}
