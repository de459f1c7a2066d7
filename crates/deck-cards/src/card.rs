#![forbid(unsafe_code)]

//! The swipeable card: one explicit state container per front card.
//!
//! All gesture and command input flows through pure transition methods:
//!
//! - [`SwipeCard::on_gesture_start`] / [`on_gesture_update`] /
//!   [`on_gesture_end`] / [`on_gesture_interrupt`] for pointer input
//! - [`SwipeCard::on_command`] for keyboard shortcuts and buttons
//! - [`SwipeCard::tick`] to advance whichever animation is running
//!
//! [`on_gesture_update`]: SwipeCard::on_gesture_update
//! [`on_gesture_end`]: SwipeCard::on_gesture_end
//! [`on_gesture_interrupt`]: SwipeCard::on_gesture_interrupt
//!
//! # State Machine
//!
//! ```text
//!          pointer down             release below threshold / veto / interrupt
//!   Idle ───────────────► Dragging ─────────────────────────────► Resetting ──► Idle
//!    │                       │ release past threshold                 ▲
//!    │ command               ▼                                        │ veto
//!    └──────────────────► Committing ─────────────────────────────────┘
//!                            │ exit animation done
//!                            ▼
//!                         Exited (terminal)
//! ```
//!
//! `Committing` covers both the command feedback ramp and the off-screen
//! exit. A pointer down while `Resetting` takes over the card from wherever
//! the settle animation left it; a pointer down while `Committing` or
//! `Exited` is ignored. Commands are accepted only while `Idle`.
//!
//! # Invariants
//!
//! 1. At most one gesture session is active.
//! 2. A gesture or command invokes at most one handler, at most once.
//! 3. When the card is `Idle` its position is (0, 0) and every overlay
//!    channel is exactly zero.
//! 4. Back cards never hold a session, never accept commands, and never
//!    show overlays.

use std::time::Duration;

use deck_core::animation::{Animation, Spring, Tween};
use deck_core::config::MotionConfig;
use deck_core::logging::{CARD, GESTURE};
use deck_core::{
    Axis, CapabilitySet, Classification, ConfigError, LeftStyle, Offset, PointerEvent,
    RightStyle, SessionSlot, SwipeConfig, SwipeDirection, classify,
};
use web_time::Instant;

use crate::command::{CommandRamp, CommandRejected, SwipeCommand};
use crate::flash::AttentionFlash;
use crate::handler::{HandlerReply, SwipeHandlers, handler};
use crate::overlay::{Feedback, FeedbackLabels, OverlayController, OverlayIntensity};
use crate::resolver::{CommitOutcome, Resolution, resolve, run_commit};

/// Observable phase of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardPhase {
    /// At rest, centered, no feedback.
    Idle,
    /// A gesture session is active.
    Dragging,
    /// Springing back to center.
    Resetting,
    /// Command ramp or exit animation running.
    Committing,
    /// Off-screen. Terminal.
    Exited,
}

impl CardPhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging => "dragging",
            Self::Resetting => "resetting",
            Self::Committing => "committing",
            Self::Exited => "exited",
        }
    }
}

/// Something the host may want to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEvent {
    /// A handler ran.
    Outcome(CommitOutcome),
    /// A reset finished; the card is idle again.
    Settled,
    /// The exit animation finished; discard the card.
    Exited,
}

/// Label and hint surfaced on the interactive root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accessibility {
    pub label: Option<String>,
    pub hint: Option<String>,
}

/// Everything needed to draw the card this frame.
///
/// Overlay values are decorative and never exposed to assistive technology.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardFrame<'a> {
    pub phase: CardPhase,
    pub position: Offset,
    pub rotation_deg: f64,
    pub overlay: OverlayIntensity,
    /// Text for label marks ("Submit", "Pass").
    pub overlay_label: Option<&'a str>,
    /// Attention flash intensity.
    pub flash: f64,
    pub interactive: bool,
    /// Back cards are hidden from assistive technology.
    pub accessibility_hidden: bool,
    pub accessibility: &'a Accessibility,
}

// ---------------------------------------------------------------------------
// Animations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Settle {
    Springs { x: Spring, y: Spring },
    /// Reduced motion.
    Timed { from: Offset, tween: Tween },
}

impl Settle {
    fn new(from: Offset, motion: &MotionConfig) -> Self {
        if motion.reduced_motion {
            return Self::Timed {
                from,
                tween: Tween::new(Duration::ZERO),
            };
        }
        let spring = |v: f64| {
            Spring::new(v, 0.0)
                .with_stiffness(motion.reset_stiffness)
                .with_damping(motion.reset_damping)
        };
        Self::Springs {
            x: spring(from.x),
            y: spring(from.y),
        }
    }

    fn tick(&mut self, dt: Duration) {
        match self {
            Self::Springs { x, y } => {
                x.tick(dt);
                y.tick(dt);
            }
            Self::Timed { tween, .. } => tween.tick(dt),
        }
    }

    fn position(&self) -> Offset {
        match self {
            Self::Springs { x, y } => Offset::new(x.value(), y.value()),
            Self::Timed { from, tween } => from.lerp(Offset::ZERO, tween.value()),
        }
    }

    fn is_complete(&self) -> bool {
        match self {
            Self::Springs { x, y } => x.is_complete() && y.is_complete(),
            Self::Timed { tween, .. } => tween.is_complete(),
        }
    }
}

#[derive(Debug, Clone)]
enum Motion {
    Rest,
    Drag,
    Reset {
        settle: Settle,
        fade: Tween,
        overlay_from: OverlayIntensity,
    },
    Ramp {
        ramp: CommandRamp,
        from: Offset,
        feedback: Feedback,
    },
    Exit {
        direction: SwipeDirection,
        from: Offset,
        to: Offset,
        tween: Tween,
        fade: Tween,
        overlay_from: OverlayIntensity,
    },
    Exited,
}

impl Motion {
    fn phase(&self) -> CardPhase {
        match self {
            Self::Rest => CardPhase::Idle,
            Self::Drag => CardPhase::Dragging,
            Self::Reset { .. } => CardPhase::Resetting,
            Self::Ramp { .. } | Self::Exit { .. } => CardPhase::Committing,
            Self::Exited => CardPhase::Exited,
        }
    }
}

// ---------------------------------------------------------------------------
// SwipeCard
// ---------------------------------------------------------------------------

/// A swipeable card.
///
/// Capabilities are fixed at [`build`](SwipeCardBuilder::build); a new card
/// instance is needed for a new set.
#[derive(Debug)]
pub struct SwipeCard {
    caps: CapabilitySet,
    handlers: SwipeHandlers,
    config: SwipeConfig,
    controller: OverlayController,
    labels: FeedbackLabels,
    accessibility: Accessibility,
    back_card: bool,
    flash_on_veto: bool,
    slot: SessionSlot,
    position: Offset,
    overlay: OverlayIntensity,
    classification: Classification,
    motion: Motion,
    flash: AttentionFlash,
    last_outcome: Option<CommitOutcome>,
}

impl SwipeCard {
    #[must_use]
    pub fn builder() -> SwipeCardBuilder {
        SwipeCardBuilder::default()
    }

    /// A static, non-interactive back card.
    #[must_use]
    pub fn static_preview(config: SwipeConfig) -> Self {
        Self::builder().config(config).back_card(true).build()
    }

    // --- Accessors ---

    #[inline]
    #[must_use]
    pub fn phase(&self) -> CardPhase {
        self.motion.phase()
    }

    /// Offset from center.
    #[inline]
    #[must_use]
    pub fn position(&self) -> Offset {
        self.position
    }

    /// Rotation derived from the horizontal offset.
    #[must_use]
    pub fn rotation_deg(&self) -> f64 {
        self.config.viewport.rotation_for(self.position.x)
    }

    #[inline]
    #[must_use]
    pub fn overlay(&self) -> &OverlayIntensity {
        &self.overlay
    }

    /// Latest classification of the active drag.
    #[inline]
    #[must_use]
    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    #[inline]
    #[must_use]
    pub fn capabilities(&self) -> &CapabilitySet {
        &self.caps
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn accessibility(&self) -> &Accessibility {
        &self.accessibility
    }

    #[inline]
    #[must_use]
    pub fn is_back_card(&self) -> bool {
        self.back_card
    }

    /// Whether pointer input can reach this card.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        !self.back_card && self.phase() != CardPhase::Exited
    }

    /// The most recent commit attempt.
    #[inline]
    #[must_use]
    pub fn last_outcome(&self) -> Option<CommitOutcome> {
        self.last_outcome
    }

    #[inline]
    #[must_use]
    pub fn is_flashing(&self) -> bool {
        self.flash.is_active()
    }

    // --- Gesture transitions ---

    /// Pointer down. Returns `true` if a session began.
    pub fn on_gesture_start(&mut self, at: Offset, now: Instant) -> bool {
        if self.back_card {
            return false;
        }
        let superseding = match self.motion {
            Motion::Rest => false,
            Motion::Reset { .. } => true,
            Motion::Drag | Motion::Ramp { .. } | Motion::Exit { .. } | Motion::Exited => {
                tracing::debug!(
                    target: GESTURE,
                    phase = self.phase().as_str(),
                    "pointer down ignored"
                );
                return false;
            }
        };

        let base = self.position;
        if !self.slot.begin(at, base, now) {
            return false;
        }
        if superseding {
            tracing::debug!(target: CARD, x = base.x, y = base.y, "reset superseded by gesture");
        }
        self.motion = Motion::Drag;
        self.apply_drag(base);
        true
    }

    /// Pointer move. Returns the fresh classification while dragging.
    pub fn on_gesture_update(&mut self, at: Offset) -> Option<Classification> {
        if !matches!(self.motion, Motion::Drag) {
            return None;
        }
        let d = self.slot.update(at)?;
        self.apply_drag(d);
        Some(self.classification)
    }

    /// Pointer up. Returns the outcome if a handler ran.
    pub fn on_gesture_end(&mut self, at: Offset) -> Option<CommitOutcome> {
        if !matches!(self.motion, Motion::Drag) {
            return None;
        }
        let session = self.slot.release(at)?;
        let d = session.effective_displacement();
        self.apply_drag(d);

        let span = tracing::debug_span!(
            target: CARD,
            "deck.card.gesture_end",
            dx = d.x,
            dy = d.y,
            moves = session.move_count()
        );
        let _guard = span.enter();

        match resolve(d, &self.caps, &self.config.thresholds) {
            Resolution::Commit(direction) => Some(self.commit(direction)),
            Resolution::Reset => {
                self.start_reset();
                None
            }
        }
    }

    /// The input system took the gesture away. Always resets.
    pub fn on_gesture_interrupt(&mut self) -> bool {
        if self.slot.interrupt().is_none() {
            return false;
        }
        self.start_reset();
        true
    }

    /// Route a raw pointer event.
    pub fn handle_pointer(&mut self, event: &PointerEvent, now: Instant) -> Option<CardEvent> {
        match *event {
            PointerEvent::Down(at) => {
                self.on_gesture_start(at, now);
                None
            }
            PointerEvent::Move(at) => {
                self.on_gesture_update(at);
                None
            }
            PointerEvent::Up(at) => self.on_gesture_end(at).map(CardEvent::Outcome),
            PointerEvent::Cancel => {
                self.on_gesture_interrupt();
                None
            }
        }
    }

    // --- Commands ---

    /// Request an outcome without a gesture.
    pub fn on_command(&mut self, command: SwipeCommand) -> Result<(), CommandRejected> {
        if let Err(reason) = self.check_command(command) {
            tracing::debug!(
                target: CARD,
                command = command.as_str(),
                %reason,
                "command rejected"
            );
            return Err(reason);
        }

        let mut feedback = Feedback::for_direction(command.direction(), &self.caps);
        if let Some(mark) = command.mark_override() {
            feedback = feedback.with_mark(mark);
        }
        self.classification = Classification::REST;
        self.motion = Motion::Ramp {
            ramp: CommandRamp::new(command, &self.config.motion),
            from: self.position,
            feedback,
        };
        tracing::debug!(target: CARD, command = command.as_str(), "command accepted");
        Ok(())
    }

    fn check_command(&self, command: SwipeCommand) -> Result<(), CommandRejected> {
        if self.back_card {
            return Err(CommandRejected::BackCard);
        }
        match self.motion {
            Motion::Drag => return Err(CommandRejected::GestureActive),
            Motion::Reset { .. } | Motion::Ramp { .. } | Motion::Exit { .. } => {
                return Err(CommandRejected::Busy);
            }
            Motion::Exited => return Err(CommandRejected::Exited),
            Motion::Rest => {}
        }
        let direction = command.direction();
        if !self.caps.can_commit(direction) {
            return Err(CommandRejected::Unsupported(direction));
        }
        Ok(())
    }

    pub fn swipe_right(&mut self) -> Result<(), CommandRejected> {
        self.on_command(SwipeCommand::Right)
    }

    pub fn swipe_left(&mut self) -> Result<(), CommandRejected> {
        self.on_command(SwipeCommand::Left)
    }

    pub fn swipe_up(&mut self) -> Result<(), CommandRejected> {
        self.on_command(SwipeCommand::Up)
    }

    pub fn swipe_down(&mut self) -> Result<(), CommandRejected> {
        self.on_command(SwipeCommand::Down)
    }

    pub fn swipe_right_with_plus(&mut self) -> Result<(), CommandRejected> {
        self.on_command(SwipeCommand::RightWithPlus)
    }

    /// Play the attention flash.
    pub fn trigger_flash(&mut self) {
        if !self.back_card {
            self.flash.trigger();
        }
    }

    // --- Animation ---

    /// Advance running animations by `dt`.
    pub fn tick(&mut self, dt: Duration) -> Option<CardEvent> {
        self.flash.tick(dt);

        match std::mem::replace(&mut self.motion, Motion::Rest) {
            Motion::Ramp {
                mut ramp,
                from,
                feedback,
            } => {
                ramp.tick(dt);
                let progress = ramp.progress();
                let direction = ramp.command().direction();
                self.position = from.lerp(self.threshold_pose(direction), progress);
                self.overlay = self.controller.intensity(Some(feedback), progress);
                if ramp.is_complete() {
                    return Some(CardEvent::Outcome(self.commit(direction)));
                }
                self.motion = Motion::Ramp {
                    ramp,
                    from,
                    feedback,
                };
                None
            }
            Motion::Reset {
                mut settle,
                mut fade,
                overlay_from,
            } => {
                settle.tick(dt);
                fade.tick(dt);
                self.position = settle.position();
                self.overlay = overlay_from.faded(1.0 - fade.value());
                if settle.is_complete() && fade.is_complete() {
                    self.position = Offset::ZERO;
                    self.overlay = OverlayIntensity::REST;
                    tracing::debug!(target: CARD, "card settled");
                    return Some(CardEvent::Settled);
                }
                self.motion = Motion::Reset {
                    settle,
                    fade,
                    overlay_from,
                };
                None
            }
            Motion::Exit {
                direction,
                from,
                to,
                mut tween,
                mut fade,
                overlay_from,
            } => {
                tween.tick(dt);
                fade.tick(dt);
                self.position = from.lerp(to, tween.value());
                self.overlay = overlay_from.faded(1.0 - fade.value());
                if tween.is_complete() && fade.is_complete() {
                    self.position = to;
                    self.overlay = OverlayIntensity::REST;
                    self.motion = Motion::Exited;
                    tracing::debug!(target: CARD, %direction, "card exited");
                    return Some(CardEvent::Exited);
                }
                self.motion = Motion::Exit {
                    direction,
                    from,
                    to,
                    tween,
                    fade,
                    overlay_from,
                };
                None
            }
            other => {
                self.motion = other;
                None
            }
        }
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn frame(&self) -> CardFrame<'_> {
        let overlay = if self.back_card {
            OverlayIntensity::REST
        } else {
            self.overlay
        };
        CardFrame {
            phase: self.phase(),
            position: self.position,
            rotation_deg: self.rotation_deg(),
            overlay,
            overlay_label: overlay
                .feedback()
                .and_then(|f| self.labels.text_for(f.mark)),
            flash: self.flash.intensity(),
            interactive: self.is_interactive(),
            accessibility_hidden: self.back_card,
            accessibility: &self.accessibility,
        }
    }

    // --- Internals ---

    fn apply_drag(&mut self, d: Offset) {
        self.position = self.caps.clamp(d);
        self.classification = classify(d, &self.caps, &self.config.thresholds);
        self.overlay = self
            .controller
            .for_classification(&self.classification, &self.caps);
        tracing::trace!(
            target: GESTURE,
            dx = d.x,
            dy = d.y,
            direction = self.classification.direction.map(SwipeDirection::as_str),
            progress = self.classification.progress(),
            "classified"
        );
    }

    /// Position where a gesture in `direction` just reaches threshold.
    fn threshold_pose(&self, direction: SwipeDirection) -> Offset {
        direction.unit() * self.config.thresholds.for_axis(direction.axis())
    }

    fn commit(&mut self, direction: SwipeDirection) -> CommitOutcome {
        // A handler that unwinds leaves the card settling, not stuck mid-drag.
        self.motion = self.reset_motion();
        let outcome = run_commit(direction, &mut self.handlers);
        self.last_outcome = Some(outcome);
        if outcome.vetoed {
            if self.flash_on_veto {
                self.flash.trigger();
            }
            self.start_reset();
        } else {
            self.start_exit(direction);
        }
        outcome
    }

    fn reset_motion(&self) -> Motion {
        Motion::Reset {
            settle: Settle::new(self.position, &self.config.motion),
            fade: Tween::new(self.config.motion.overlay_fade()),
            overlay_from: self.overlay,
        }
    }

    fn start_reset(&mut self) {
        self.classification = Classification::REST;
        self.motion = self.reset_motion();
        tracing::debug!(
            target: CARD,
            x = self.position.x,
            y = self.position.y,
            "resetting"
        );
    }

    fn start_exit(&mut self, direction: SwipeDirection) {
        let motion = &self.config.motion;
        let distance = self.config.viewport.exit_distance(direction.axis());
        let unit = direction.unit();
        let to = match direction.axis() {
            Axis::Horizontal => Offset::new(unit.x * distance, self.position.y),
            Axis::Vertical => Offset::new(self.position.x, unit.y * distance),
        };
        self.classification = Classification::REST;
        self.motion = Motion::Exit {
            direction,
            from: self.position,
            to,
            tween: Tween::new(motion.exit_duration()).easing(motion.exit_easing),
            fade: Tween::new(motion.overlay_fade()),
            overlay_from: self.overlay,
        };
        tracing::debug!(target: CARD, %direction, "exiting");
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Construction contract for a [`SwipeCard`].
///
/// Registered handlers define which directions can commit. Style enums pick
/// the overlay feedback; the boolean `right_swipe_as_*` setters exist for
/// callers still passing flags and resolve to one style at build time.
#[derive(Debug, Default)]
pub struct SwipeCardBuilder {
    handlers: SwipeHandlers,
    vertical: bool,
    right_style: RightStyle,
    left_style: LeftStyle,
    legacy_chat_accept: bool,
    legacy_submit: bool,
    legacy_kudos: bool,
    labels: FeedbackLabels,
    accessibility: Accessibility,
    back_card: bool,
    flash_on_veto: bool,
    config: SwipeConfig,
}

impl SwipeCardBuilder {
    /// Register the handler for `direction`.
    #[must_use]
    pub fn on_swipe<R, F>(mut self, direction: SwipeDirection, f: F) -> Self
    where
        R: Into<HandlerReply>,
        F: FnMut() -> R + 'static,
    {
        self.handlers.set(direction, handler(f));
        self
    }

    #[must_use]
    pub fn on_swipe_right<R, F>(self, f: F) -> Self
    where
        R: Into<HandlerReply>,
        F: FnMut() -> R + 'static,
    {
        self.on_swipe(SwipeDirection::Right, f)
    }

    #[must_use]
    pub fn on_swipe_left<R, F>(self, f: F) -> Self
    where
        R: Into<HandlerReply>,
        F: FnMut() -> R + 'static,
    {
        self.on_swipe(SwipeDirection::Left, f)
    }

    #[must_use]
    pub fn on_swipe_up<R, F>(self, f: F) -> Self
    where
        R: Into<HandlerReply>,
        F: FnMut() -> R + 'static,
    {
        self.on_swipe(SwipeDirection::Up, f)
    }

    #[must_use]
    pub fn on_swipe_down<R, F>(self, f: F) -> Self
    where
        R: Into<HandlerReply>,
        F: FnMut() -> R + 'static,
    {
        self.on_swipe(SwipeDirection::Down, f)
    }

    #[must_use]
    pub fn enable_vertical_swipe(mut self, enabled: bool) -> Self {
        self.vertical = enabled;
        self
    }

    #[must_use]
    pub fn right_style(mut self, style: RightStyle) -> Self {
        self.right_style = style;
        self
    }

    #[must_use]
    pub fn left_style(mut self, style: LeftStyle) -> Self {
        self.left_style = style;
        self
    }

    #[must_use]
    pub fn right_swipe_as_chat_accept(mut self, on: bool) -> Self {
        self.legacy_chat_accept = on;
        self
    }

    #[must_use]
    pub fn right_swipe_as_submit(mut self, on: bool) -> Self {
        self.legacy_submit = on;
        self
    }

    #[must_use]
    pub fn right_swipe_as_kudos(mut self, on: bool) -> Self {
        self.legacy_kudos = on;
        self
    }

    #[must_use]
    pub fn left_swipe_as_pass(mut self, on: bool) -> Self {
        self.left_style = if on {
            LeftStyle::Pass
        } else {
            LeftStyle::Disagree
        };
        self
    }

    #[must_use]
    pub fn submit_label(mut self, text: impl Into<String>) -> Self {
        self.labels.submit = text.into();
        self
    }

    #[must_use]
    pub fn pass_label(mut self, text: impl Into<String>) -> Self {
        self.labels.pass = text.into();
        self
    }

    #[must_use]
    pub fn accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.accessibility.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn accessibility_hint(mut self, hint: impl Into<String>) -> Self {
        self.accessibility.hint = Some(hint.into());
        self
    }

    /// Render statically and ignore handlers, flags, and input.
    #[must_use]
    pub fn back_card(mut self, back: bool) -> Self {
        self.back_card = back;
        self
    }

    /// Play the attention flash when a handler vetoes.
    #[must_use]
    pub fn flash_on_veto(mut self, on: bool) -> Self {
        self.flash_on_veto = on;
        self
    }

    #[must_use]
    pub fn config(mut self, config: SwipeConfig) -> Self {
        self.config = config;
        self
    }

    fn resolved_right_style(&self) -> RightStyle {
        let (chat_accept, submit, kudos) =
            (self.legacy_chat_accept, self.legacy_submit, self.legacy_kudos);
        if !(chat_accept || submit || kudos) {
            return self.right_style;
        }
        let (style, conflict) = RightStyle::from_flags(chat_accept, submit, kudos);
        if conflict {
            tracing::warn!(
                target: CARD,
                chat_accept,
                submit,
                kudos,
                resolved = ?style,
                "more than one right swipe style set"
            );
        }
        style
    }

    /// Build, refusing a configuration that fails
    /// [`SwipeConfig::validate`].
    pub fn try_build(self) -> Result<SwipeCard, ConfigError> {
        let errors = self.config.validate();
        if !errors.is_empty() {
            return Err(ConfigError::Validation(errors));
        }
        Ok(self.assemble())
    }

    /// Build the card. An invalid configuration is logged and replaced by
    /// the defaults.
    #[must_use]
    pub fn build(mut self) -> SwipeCard {
        let errors = self.config.validate();
        if !errors.is_empty() {
            tracing::warn!(
                target: CARD,
                errors = %errors.join("; "),
                "invalid swipe config, using defaults"
            );
            self.config = SwipeConfig::default();
        }
        self.assemble()
    }

    fn assemble(mut self) -> SwipeCard {
        let caps = if self.back_card {
            self.handlers.clear();
            CapabilitySet::default()
        } else {
            CapabilitySet::new(
                self.handlers.directions(),
                self.vertical,
                self.resolved_right_style(),
                self.left_style,
            )
        };
        let flash = AttentionFlash::new(&self.config.motion);
        SwipeCard {
            caps,
            handlers: self.handlers,
            controller: OverlayController::new(self.config.overlay),
            config: self.config,
            labels: self.labels,
            accessibility: self.accessibility,
            back_card: self.back_card,
            flash_on_veto: self.flash_on_veto && !self.back_card,
            slot: SessionSlot::new(),
            position: Offset::ZERO,
            overlay: OverlayIntensity::REST,
            classification: Classification::REST,
            motion: Motion::Rest,
            flash,
            last_outcome: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::{FeedbackChannel, RevealMark};
    use std::cell::RefCell;
    use std::rc::Rc;

    const FRAME: Duration = Duration::from_millis(16);

    fn config() -> SwipeConfig {
        let mut config = SwipeConfig::default();
        config.thresholds.horizontal = 60.0;
        config.thresholds.vertical = 50.0;
        config
    }

    type Log = Rc<RefCell<Vec<SwipeDirection>>>;

    fn logging(log: &Log, direction: SwipeDirection, reply: bool) -> impl FnMut() -> bool + 'static {
        let log = Rc::clone(log);
        move || {
            log.borrow_mut().push(direction);
            reply
        }
    }

    fn position_card(log: &Log) -> SwipeCard {
        SwipeCard::builder()
            .config(config())
            .enable_vertical_swipe(true)
            .on_swipe_right(logging(log, SwipeDirection::Right, true))
            .on_swipe_left(logging(log, SwipeDirection::Left, true))
            .on_swipe_down(logging(log, SwipeDirection::Down, true))
            .build()
    }

    fn drag(card: &mut SwipeCard, to: Offset) -> Option<CommitOutcome> {
        assert!(card.on_gesture_start(Offset::ZERO, Instant::now()));
        card.on_gesture_update(to * 0.5);
        card.on_gesture_update(to);
        card.on_gesture_end(to)
    }

    fn run(card: &mut SwipeCard) -> Vec<CardEvent> {
        let mut events = Vec::new();
        for _ in 0..300 {
            if let Some(event) = card.tick(FRAME) {
                events.push(event);
            }
            if matches!(card.phase(), CardPhase::Idle | CardPhase::Exited) {
                break;
            }
        }
        events
    }

    #[test]
    fn drag_tracks_position_and_rotation() {
        let log = Log::default();
        let mut card = position_card(&log);
        card.on_gesture_start(Offset::new(100.0, 100.0), Instant::now());
        card.on_gesture_update(Offset::new(130.0, 104.0));
        assert_eq!(card.phase(), CardPhase::Dragging);
        assert_eq!(card.position(), Offset::new(30.0, 4.0));
        assert!(card.rotation_deg() > 0.0);
        assert_eq!(
            card.overlay().feedback().map(|f| f.channel),
            Some(FeedbackChannel::Agree)
        );
    }

    #[test]
    fn forbidden_axis_does_not_move() {
        let mut card = SwipeCard::builder()
            .config(config())
            .on_swipe_right(|| ())
            .build();
        card.on_gesture_start(Offset::ZERO, Instant::now());
        let c = card.on_gesture_update(Offset::new(-40.0, 10.0));
        assert_eq!(c.map(|c| c.direction), Some(None));
        assert_eq!(card.position(), Offset::ZERO);
        assert!(card.overlay().is_rest());
    }

    #[test]
    fn short_drag_resets_without_handler() {
        let log = Log::default();
        let mut card = position_card(&log);
        assert_eq!(drag(&mut card, Offset::new(40.0, 10.0)), None);
        assert_eq!(card.phase(), CardPhase::Resetting);
        assert_eq!(run(&mut card), vec![CardEvent::Settled]);
        assert_eq!(card.phase(), CardPhase::Idle);
        assert_eq!(card.position(), Offset::ZERO);
        assert!(card.overlay().is_rest());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn long_drag_commits_and_exits() {
        let log = Log::default();
        let mut card = position_card(&log);
        let outcome = drag(&mut card, Offset::new(80.0, 5.0));
        assert_eq!(
            outcome,
            Some(CommitOutcome {
                direction: SwipeDirection::Right,
                vetoed: false
            })
        );
        assert_eq!(card.phase(), CardPhase::Committing);
        assert_eq!(run(&mut card), vec![CardEvent::Exited]);
        assert_eq!(card.phase(), CardPhase::Exited);
        assert!(card.position().x >= card.config().viewport.width);
        assert!(card.overlay().is_rest());
        assert_eq!(*log.borrow(), vec![SwipeDirection::Right]);
        assert!(!card.is_interactive());
    }

    #[test]
    fn veto_resets_and_flashes() {
        let mut card = SwipeCard::builder()
            .config(config())
            .flash_on_veto(true)
            .on_swipe_right(|| false)
            .build();
        let outcome = drag(&mut card, Offset::new(90.0, 0.0));
        assert_eq!(outcome.map(|o| o.vetoed), Some(true));
        assert_eq!(card.phase(), CardPhase::Resetting);
        assert!(card.is_flashing());
        assert_eq!(run(&mut card), vec![CardEvent::Settled]);
        assert_eq!(card.position(), Offset::ZERO);
    }

    #[test]
    fn command_ramps_then_commits() {
        let log = Log::default();
        let mut card = position_card(&log);
        card.swipe_left().unwrap();
        assert_eq!(card.phase(), CardPhase::Committing);

        card.tick(Duration::from_millis(100));
        let wash = card.overlay().channel(FeedbackChannel::Disagree);
        assert!(wash > 0.0 && wash < 0.4, "mid-ramp wash {wash}");
        assert!(log.borrow().is_empty());

        let event = card.tick(Duration::from_millis(200));
        assert_eq!(
            event,
            Some(CardEvent::Outcome(CommitOutcome {
                direction: SwipeDirection::Left,
                vetoed: false
            }))
        );
        assert_eq!(*log.borrow(), vec![SwipeDirection::Left]);
        assert_eq!(run(&mut card), vec![CardEvent::Exited]);
    }

    #[test]
    fn commands_are_rejected_while_dragging_or_busy() {
        let log = Log::default();
        let mut card = position_card(&log);
        card.on_gesture_start(Offset::ZERO, Instant::now());
        assert_eq!(card.swipe_right(), Err(CommandRejected::GestureActive));
        card.on_gesture_end(Offset::ZERO);
        run(&mut card);

        card.swipe_right().unwrap();
        assert_eq!(card.swipe_left(), Err(CommandRejected::Busy));
        assert!(!card.on_gesture_start(Offset::ZERO, Instant::now()));
        run(&mut card);
        assert_eq!(card.swipe_right(), Err(CommandRejected::Exited));
        assert_eq!(*log.borrow(), vec![SwipeDirection::Right]);
    }

    #[test]
    fn unsupported_command_is_rejected_up_front() {
        let log = Log::default();
        let mut card = position_card(&log);
        assert_eq!(
            card.swipe_up(),
            Err(CommandRejected::Unsupported(SwipeDirection::Up))
        );
        assert_eq!(card.phase(), CardPhase::Idle);
    }

    #[test]
    fn plus_command_reveals_plus_mark() {
        let mut card = SwipeCard::builder()
            .config(config())
            .on_swipe_right(|| ())
            .build();
        card.swipe_right_with_plus().unwrap();
        card.tick(FRAME);
        assert_eq!(
            card.overlay().feedback().map(|f| f.mark),
            Some(RevealMark::Plus)
        );
    }

    #[test]
    fn gesture_during_reset_takes_over_position() {
        let log = Log::default();
        let mut card = position_card(&log);
        drag(&mut card, Offset::new(50.0, 0.0));
        card.tick(FRAME);
        let mid = card.position();
        assert!(mid.x > 0.0 && mid.x < 50.0);

        assert!(card.on_gesture_start(Offset::new(10.0, 10.0), Instant::now()));
        assert_eq!(card.phase(), CardPhase::Dragging);
        assert_eq!(card.position(), mid);
        card.on_gesture_update(Offset::new(20.0, 10.0));
        assert!((card.position().x - (mid.x + 10.0)).abs() < 1e-9);
    }

    #[test]
    fn interrupt_resets_without_commit() {
        let log = Log::default();
        let mut card = position_card(&log);
        card.on_gesture_start(Offset::ZERO, Instant::now());
        card.on_gesture_update(Offset::new(200.0, 0.0));
        assert!(card.on_gesture_interrupt());
        assert_eq!(card.phase(), CardPhase::Resetting);
        run(&mut card);
        assert!(log.borrow().is_empty());
        assert!(!card.on_gesture_interrupt());
    }

    #[test]
    fn second_pointer_down_is_ignored() {
        let log = Log::default();
        let mut card = position_card(&log);
        assert!(card.on_gesture_start(Offset::ZERO, Instant::now()));
        assert!(!card.on_gesture_start(Offset::new(5.0, 5.0), Instant::now()));
    }

    #[test]
    fn back_card_is_static() {
        let mut card = SwipeCard::builder()
            .on_swipe_right(|| ())
            .accessibility_label("Next position")
            .back_card(true)
            .build();
        assert!(!card.on_gesture_start(Offset::ZERO, Instant::now()));
        assert_eq!(card.swipe_right(), Err(CommandRejected::BackCard));
        let frame = card.frame();
        assert!(!frame.interactive);
        assert!(frame.accessibility_hidden);
        assert!(frame.overlay.is_rest());
        assert!(card.capabilities().handlers().is_empty());
    }

    #[test]
    fn legacy_flags_resolve_to_one_style() {
        let card = SwipeCard::builder()
            .right_swipe_as_kudos(true)
            .right_swipe_as_chat_accept(true)
            .on_swipe_right(|| ())
            .build();
        assert_eq!(card.capabilities().right_style(), RightStyle::ChatAccept);
    }

    #[test]
    fn frame_carries_pass_label() {
        let mut card = SwipeCard::builder()
            .config(config())
            .left_swipe_as_pass(true)
            .pass_label("Skip")
            .on_swipe_left(|| ())
            .build();
        card.on_gesture_start(Offset::ZERO, Instant::now());
        card.on_gesture_update(Offset::new(-30.0, 0.0));
        let frame = card.frame();
        assert_eq!(frame.overlay_label, Some("Skip"));
        assert!((frame.overlay.channel(FeedbackChannel::Pass) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn commands_wait_for_reset_to_finish() {
        let log = Log::default();
        let mut card = position_card(&log);
        assert_eq!(drag(&mut card, Offset::new(40.0, 0.0)), None);
        card.tick(FRAME);
        assert_eq!(card.phase(), CardPhase::Resetting);
        let mid = card.position();

        assert_eq!(card.swipe_right(), Err(CommandRejected::Busy));
        assert_eq!(card.phase(), CardPhase::Resetting);
        assert_eq!(card.position(), mid);

        assert_eq!(run(&mut card), vec![CardEvent::Settled]);
        card.swipe_right().unwrap();
        assert_eq!(card.phase(), CardPhase::Committing);
        run(&mut card);
        assert_eq!(*log.borrow(), vec![SwipeDirection::Right]);
    }

    #[test]
    fn panicking_handler_leaves_card_recoverable() {
        let mut card = SwipeCard::builder()
            .config(config())
            .on_swipe_right(|| -> bool { panic!("handler failed") })
            .on_swipe_left(|| ())
            .build();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            drag(&mut card, Offset::new(90.0, 0.0))
        }));
        assert!(result.is_err());
        assert_eq!(card.phase(), CardPhase::Resetting);

        assert_eq!(run(&mut card), vec![CardEvent::Settled]);
        assert_eq!(card.position(), Offset::ZERO);
        assert!(card.on_gesture_start(Offset::ZERO, Instant::now()));
        card.on_gesture_end(Offset::ZERO);
        run(&mut card);
        card.swipe_left().unwrap();
    }

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        let mut bad = config();
        bad.thresholds.horizontal = -1.0;

        let err = SwipeCard::builder()
            .config(bad.clone())
            .on_swipe_left(|| ())
            .try_build()
            .unwrap_err();
        assert!(
            matches!(&err, ConfigError::Validation(errors)
                if errors.iter().any(|e| e.contains("thresholds.horizontal")))
        );

        let mut card = SwipeCard::builder()
            .config(bad)
            .on_swipe_left(|| ())
            .build();
        assert_eq!(
            card.config().thresholds.horizontal,
            SwipeConfig::default().thresholds.horizontal
        );
        assert!(card.on_gesture_start(Offset::ZERO, Instant::now()));
        assert_eq!(card.on_gesture_end(Offset::ZERO), None);
    }

    #[test]
    fn valid_config_builds_as_given() {
        let card = SwipeCard::builder()
            .config(config())
            .try_build()
            .unwrap();
        assert_eq!(card.config().thresholds.horizontal, 60.0);
    }

    #[test]
    fn single_legacy_flag_selects_its_style() {
        let card = SwipeCard::builder()
            .right_swipe_as_submit(true)
            .on_swipe_right(|| ())
            .build();
        assert_eq!(card.capabilities().right_style(), RightStyle::Submit);
    }

    #[test]
    fn reduced_motion_completes_on_next_tick() {
        let mut config = config();
        config.motion.reduced_motion = true;
        let mut card = SwipeCard::builder()
            .config(config)
            .on_swipe_right(|| ())
            .build();
        card.swipe_right().unwrap();
        assert!(matches!(card.tick(Duration::ZERO), Some(CardEvent::Outcome(_))));
        assert_eq!(card.tick(Duration::ZERO), Some(CardEvent::Exited));
    }
}
