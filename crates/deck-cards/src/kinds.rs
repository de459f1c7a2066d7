#![forbid(unsafe_code)]

//! Card kinds and the styles each one presets.
//!
//! | Kind | Right | Left | Vertical |
//! |------|-------|------|----------|
//! | position | agree | disagree | up = chat, down = pass |
//! | survey | submit | pass | no |
//! | pairwise | submit | pass | no |
//! | chat request | chat accept | pass | no |
//! | kudos | kudos | pass | no |
//!
//! A preset only picks styles and vertical enablement. Handlers still come
//! from the caller, and a missing handler still disables its direction.

use deck_core::{DirectionSet, LeftStyle, RightStyle};

use crate::card::{SwipeCard, SwipeCardBuilder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    /// Vote on a discussion position.
    Position,
    /// Answer a survey question.
    Survey,
    /// Pick one of two options.
    Pairwise,
    /// Accept or decline a chat request.
    ChatRequest,
    /// Give kudos.
    Kudos,
}

impl CardKind {
    pub const ALL: [Self; 5] = [
        Self::Position,
        Self::Survey,
        Self::Pairwise,
        Self::ChatRequest,
        Self::Kudos,
    ];

    #[must_use]
    pub const fn right_style(self) -> RightStyle {
        match self {
            Self::Position => RightStyle::Agree,
            Self::Survey | Self::Pairwise => RightStyle::Submit,
            Self::ChatRequest => RightStyle::ChatAccept,
            Self::Kudos => RightStyle::Kudos,
        }
    }

    #[must_use]
    pub const fn left_style(self) -> LeftStyle {
        match self {
            Self::Position => LeftStyle::Disagree,
            _ => LeftStyle::Pass,
        }
    }

    #[must_use]
    pub const fn vertical_enabled(self) -> bool {
        matches!(self, Self::Position)
    }

    /// Directions a fully wired card of this kind handles.
    #[must_use]
    pub fn expected_directions(self) -> DirectionSet {
        if self.vertical_enabled() {
            DirectionSet::all()
        } else {
            DirectionSet::HORIZONTAL
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Survey => "survey",
            Self::Pairwise => "pairwise",
            Self::ChatRequest => "chat_request",
            Self::Kudos => "kudos",
        }
    }

    /// A builder with this kind's styles applied.
    #[must_use]
    pub fn builder(self) -> SwipeCardBuilder {
        self.apply(SwipeCard::builder())
    }

    /// Apply this kind's styles to an existing builder.
    #[must_use]
    pub fn apply(self, builder: SwipeCardBuilder) -> SwipeCardBuilder {
        builder
            .right_style(self.right_style())
            .left_style(self.left_style())
            .enable_vertical_swipe(self.vertical_enabled())
    }
}
