#![forbid(unsafe_code)]

//! Gesture session: one continuous pointer interaction on a card.
//!
//! A session begins on pointer-down, reports the displacement since
//! pointer-down on every move, and ends on pointer-up (release) or on a
//! forced interruption. [`SessionSlot`] holds at most one session.
//!
//! # Invariants
//!
//! 1. At most one session is active per slot; `begin` on an occupied slot is
//!    refused and leaves the active session untouched.
//! 2. The displacement is always relative to the pointer-down location.
//! 3. The effective displacement adds the card offset captured at
//!    pointer-down, so a gesture that interrupts a settle animation takes
//!    ownership of the card where it currently is.
//!
//! # Failure Modes
//!
//! - Moves or releases without an active session are ignored (`None`).
//! - An interruption ends the session through [`SessionSlot::interrupt`];
//!   callers must treat it as a reset, never as a commit.

use std::time::Duration;

use web_time::Instant;

use crate::geometry::Offset;
use crate::logging::GESTURE;

/// State of one active pointer interaction.
#[derive(Debug, Clone)]
pub struct GestureSession {
    start: Offset,
    current: Offset,
    base: Offset,
    started_at: Instant,
    moves: u32,
}

impl GestureSession {
    /// Start a session at pointer location `at` with the card at `base`.
    #[must_use]
    pub fn new(at: Offset, base: Offset, now: Instant) -> Self {
        Self {
            start: at,
            current: at,
            base,
            started_at: now,
            moves: 0,
        }
    }

    /// Cumulative pointer displacement since pointer-down.
    #[inline]
    #[must_use]
    pub fn displacement(&self) -> Offset {
        self.current - self.start
    }

    /// Card offset at pointer-down plus the pointer displacement.
    #[inline]
    #[must_use]
    pub fn effective_displacement(&self) -> Offset {
        self.base + self.displacement()
    }

    /// Number of pointer moves processed.
    #[inline]
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.moves
    }

    fn held(&self) -> Duration {
        self.started_at.elapsed()
    }

    fn track(&mut self, at: Offset) {
        self.current = at;
        self.moves = self.moves.saturating_add(1);
    }
}

/// Single-occupancy holder for a card's gesture session.
#[derive(Debug, Clone, Default)]
pub struct SessionSlot {
    active: Option<GestureSession>,
}

impl SessionSlot {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a session is active.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The active session, if any.
    #[inline]
    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        self.active.as_ref()
    }

    /// Begin a session. Returns `false` (and changes nothing) if one is
    /// already active.
    pub fn begin(&mut self, at: Offset, base: Offset, now: Instant) -> bool {
        if self.active.is_some() {
            tracing::debug!(target: GESTURE, "pointer down ignored: session already active");
            return false;
        }
        tracing::debug!(target: GESTURE, x = at.x, y = at.y, "session begin");
        self.active = Some(GestureSession::new(at, base, now));
        true
    }

    /// Record a pointer move. Returns the effective displacement.
    pub fn update(&mut self, at: Offset) -> Option<Offset> {
        let session = self.active.as_mut()?;
        session.track(at);
        Some(session.effective_displacement())
    }

    /// End the session on pointer-up at `at`.
    pub fn release(&mut self, at: Offset) -> Option<GestureSession> {
        let mut session = self.active.take()?;
        session.track(at);
        tracing::debug!(
            target: GESTURE,
            dx = session.displacement().x,
            dy = session.displacement().y,
            moves = session.move_count(),
            held_ms = session.held().as_millis() as u64,
            "session released"
        );
        Some(session)
    }

    /// End the session because the input system took the gesture away.
    pub fn interrupt(&mut self) -> Option<GestureSession> {
        let session = self.active.take()?;
        tracing::debug!(
            target: GESTURE,
            moves = session.move_count(),
            held_ms = session.held().as_millis() as u64,
            "session interrupted"
        );
        Some(session)
    }

}
