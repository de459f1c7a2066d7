#![forbid(unsafe_code)]

//! Two-card stack: an interactive front card over a static back preview.
//!
//! The stack owns the queue of card contents and builds a fresh
//! [`SwipeCard`] for every content that reaches the front, through the
//! caller's mount function. When the front card finishes its exit
//! animation, the back content moves to the front with a new card (no
//! position or overlay state carries over) and the next queued content
//! becomes the back preview.

use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

use deck_core::logging::STACK;
use deck_core::{KeyCode, PointerEvent, SwipeConfig};
use web_time::Instant;

use crate::card::{CardEvent, CardFrame, SwipeCard};
use crate::command::{CommandRejected, SwipeCommand};
use crate::keymap::SwipeKeymap;
use crate::resolver::CommitOutcome;

/// Builds the interactive card for a content.
pub type MountFn<C> = Box<dyn FnMut(&C) -> SwipeCard>;

/// What happened to the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackEvent<C> {
    /// The front card's handler ran.
    Outcome(CommitOutcome),
    /// The front card returned to center.
    Settled,
    /// The front card exited; the back card moved up.
    Advanced { departed: C },
    /// The last card exited. Reported once per run dry.
    Exhausted { departed: C },
}

struct Slot<C> {
    content: C,
    card: SwipeCard,
}

pub struct CardStack<C> {
    front: Option<Slot<C>>,
    back: Option<Slot<C>>,
    queue: VecDeque<C>,
    mount: MountFn<C>,
    keymap: SwipeKeymap,
    config: SwipeConfig,
}

impl<C: fmt::Debug> fmt::Debug for CardStack<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardStack")
            .field("front", &self.front.as_ref().map(|s| &s.content))
            .field("back", &self.back.as_ref().map(|s| &s.content))
            .field("queued", &self.queue.len())
            .finish_non_exhaustive()
    }
}

impl<C> CardStack<C> {
    /// Create a stack over `items`, mounting front cards with `mount`.
    ///
    /// `config` styles the back preview; an invalid one is logged and
    /// replaced by the defaults.
    pub fn new<I, F>(items: I, config: SwipeConfig, mount: F) -> Self
    where
        I: IntoIterator<Item = C>,
        F: FnMut(&C) -> SwipeCard + 'static,
    {
        let errors = config.validate();
        let config = if errors.is_empty() {
            config
        } else {
            tracing::warn!(
                target: STACK,
                errors = %errors.join("; "),
                "invalid swipe config, using defaults"
            );
            SwipeConfig::default()
        };
        let mut stack = Self {
            front: None,
            back: None,
            queue: items.into_iter().collect(),
            mount: Box::new(mount),
            keymap: SwipeKeymap::default(),
            config,
        };
        stack.fill();
        stack
    }

    /// Replace the keyboard shortcuts.
    #[must_use]
    pub fn with_keymap(mut self, keymap: SwipeKeymap) -> Self {
        self.keymap = keymap;
        self
    }

    fn fill(&mut self) {
        if self.front.is_none() {
            let source = self.back.take().map(|s| s.content).or_else(|| self.queue.pop_front());
            if let Some(content) = source {
                let card = (self.mount)(&content);
                self.front = Some(Slot { content, card });
            }
        }
        if self.back.is_none()
            && let Some(content) = self.queue.pop_front()
        {
            let card = SwipeCard::static_preview(self.config.clone());
            self.back = Some(Slot { content, card });
        }
    }

    /// Queue more content.
    pub fn push(&mut self, item: C) {
        self.queue.push_back(item);
        self.fill();
    }

    #[must_use]
    pub fn front(&self) -> Option<&C> {
        self.front.as_ref().map(|s| &s.content)
    }

    #[must_use]
    pub fn back(&self) -> Option<&C> {
        self.back.as_ref().map(|s| &s.content)
    }

    #[must_use]
    pub fn front_card(&self) -> Option<&SwipeCard> {
        self.front.as_ref().map(|s| &s.card)
    }

    pub fn front_card_mut(&mut self) -> Option<&mut SwipeCard> {
        self.front.as_mut().map(|s| &mut s.card)
    }

    #[must_use]
    pub fn front_frame(&self) -> Option<CardFrame<'_>> {
        self.front.as_ref().map(|s| s.card.frame())
    }

    #[must_use]
    pub fn back_frame(&self) -> Option<CardFrame<'_>> {
        self.back.as_ref().map(|s| s.card.frame())
    }

    /// Contents not yet swiped, front included.
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.front.is_some()) + usize::from(self.back.is_some()) + self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    /// Route pointer input to the front card. The back card never sees it.
    pub fn handle_pointer(&mut self, event: &PointerEvent, now: Instant) -> Option<StackEvent<C>> {
        let slot = self.front.as_mut()?;
        match slot.card.handle_pointer(event, now)? {
            CardEvent::Outcome(outcome) => Some(StackEvent::Outcome(outcome)),
            CardEvent::Settled => Some(StackEvent::Settled),
            CardEvent::Exited => self.advance(),
        }
    }

    /// Issue a command to the front card.
    pub fn command(&mut self, command: SwipeCommand) -> Result<(), CommandRejected> {
        match self.front.as_mut() {
            Some(slot) => slot.card.on_command(command),
            None => Err(CommandRejected::Exited),
        }
    }

    /// Route a key through the keymap. `None` if the key is unbound.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<Result<(), CommandRejected>> {
        let command = self.keymap.lookup(key)?;
        Some(self.command(command))
    }

    /// Advance the front card's animations.
    pub fn tick(&mut self, dt: Duration) -> Option<StackEvent<C>> {
        let slot = self.front.as_mut()?;
        match slot.card.tick(dt)? {
            CardEvent::Outcome(outcome) => Some(StackEvent::Outcome(outcome)),
            CardEvent::Settled => Some(StackEvent::Settled),
            CardEvent::Exited => self.advance(),
        }
    }

    fn advance(&mut self) -> Option<StackEvent<C>> {
        let departed = self.front.take()?.content;
        self.fill();
        if self.front.is_some() {
            tracing::debug!(target: STACK, remaining = self.len(), "advanced to next card");
            Some(StackEvent::Advanced { departed })
        } else {
            tracing::debug!(target: STACK, "stack exhausted");
            Some(StackEvent::Exhausted { departed })
        }
    }
}
