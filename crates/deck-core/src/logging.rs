#![forbid(unsafe_code)]

//! Tracing targets and optional subscriber setup.
//!
//! The engine logs through `tracing` under these targets:
//!
//! | Target | Events |
//! |--------|--------|
//! | [`GESTURE`] | session begin / release / interrupt, ignored pointer downs |
//! | [`CARD`] | phase transitions, commit and veto, command accept / reject |
//! | [`STACK`] | advancing to the next card, exhaustion |
//! | [`CONFIG`] | configuration loaded |
//!
//! Per-move classification is only logged at `trace` level.

/// Target for gesture session events.
pub const GESTURE: &str = "deck.gesture";

/// Target for card state machine events.
pub const CARD: &str = "deck.card";

/// Target for card stack events.
pub const STACK: &str = "deck.stack";

/// Target for configuration events.
pub const CONFIG: &str = "deck.config";

/// Install a global JSON subscriber filtered by `filter` (an `EnvFilter`
/// directive such as `"deck.card=debug,info"`).
///
/// Returns `false` if a global subscriber was already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json_subscriber(filter: &str) -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
