// Forbid unsafe in production; deny (with targeted allows) in tests.
#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Core: pointer sessions, direction classification, and motion primitives.
//!
//! # Role in the deck
//! `deck-core` is the input layer of the swipe deck. It owns the pointer
//! gesture session, the per-card capability set, and the classifier that
//! turns a displacement into a candidate direction. It also carries the
//! animation primitives (easing, tweens, springs) and the tunable
//! [`SwipeConfig`](config::SwipeConfig).
//!
//! # Primary responsibilities
//! - **GestureSession**: one continuous pointer interaction, from down to
//!   release or interruption.
//! - **CapabilitySet**: which swipe directions a card supports and which
//!   feedback style applies to each horizontal side.
//! - **Classifier**: maps displacement + capabilities into a direction and a
//!   per-axis progress ratio.
//! - **Animation**: easing curves, timed tweens, and damped springs driven
//!   by explicit `tick(dt)` calls.
//!
//! # How it fits in the system
//! `deck-cards` consumes these types to build the card state machine, the
//! overlay feedback controller, and the card stack. Nothing here knows about
//! handlers or outcomes; it is pure input and geometry.

pub mod animation;
pub mod capability;
pub mod classifier;
pub mod config;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod session;

pub use capability::{CapabilitySet, LeftStyle, RightStyle};
pub use classifier::{Classification, classify};
pub use config::SwipeConfig;
pub use direction::{Axis, DirectionSet, SwipeDirection};
pub use error::ConfigError;
pub use geometry::Offset;
pub use input::{KeyCode, PointerEvent};
pub use session::{GestureSession, SessionSlot};
