#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Swipeable cards for voting, surveys, and chat requests.
//!
//! A [`SwipeCard`] turns pointer gestures and imperative commands into one
//! of up to four directional outcomes, with continuous overlay feedback,
//! a threshold-based commit/reset decision, and a handler veto. A
//! [`CardStack`] shows an interactive front card over a static back card
//! and advances once the front card has exited.
//!
//! ```rust,ignore
//! use deck_cards::{CardKind, CardStack};
//!
//! let mut stack = CardStack::new(positions, config.clone(), move |position| {
//!     let id = position.id;
//!     CardKind::Position
//!         .builder()
//!         .config(config.clone())
//!         .on_swipe_right(move || api.vote(id, Vote::Agree))
//!         .on_swipe_left(move || api.vote(id, Vote::Disagree))
//!         .build()
//! });
//!
//! // Per frame:
//! stack.handle_pointer(&event, Instant::now());
//! stack.tick(dt);
//! ```

pub mod card;
pub mod command;
pub mod flash;
pub mod handler;
pub mod keymap;
pub mod kinds;
pub mod overlay;
pub mod resolver;
pub mod stack;

pub use card::{Accessibility, CardEvent, CardFrame, CardPhase, SwipeCard, SwipeCardBuilder};
pub use command::{CommandRejected, SwipeCommand};
pub use flash::AttentionFlash;
pub use handler::{HandlerReply, OutcomeHandler, SwipeHandlers};
pub use keymap::SwipeKeymap;
pub use kinds::CardKind;
pub use overlay::{
    Feedback, FeedbackChannel, FeedbackLabels, OverlayController, OverlayIntensity, RevealMark,
};
pub use resolver::{CommitOutcome, Resolution, resolve};
pub use stack::{CardStack, StackEvent};
