#![forbid(unsafe_code)]

//! Overlay feedback: continuous color wash and icon/text reveal during a drag.
//!
//! Five mutually exclusive channels carry the feedback. For a classified
//! direction at progress `p` the controller sets exactly one channel to
//! `p × max_intensity`, its reveal to `p`, and its reveal scale to
//! `floor + (1 - floor) × p`. Every other channel is zero in the same
//! update; switching direction mid-drag is immediate, with no cross-fade.
//!
//! # Channel selection
//!
//! | Direction | Style | Channel | Mark |
//! |-----------|-------|---------|------|
//! | right | agree | agree | checkmark |
//! | right | submit | agree | "submit" label |
//! | right | chat accept | chat | chat bubble |
//! | right | kudos | kudos | star |
//! | left | disagree | disagree | cross |
//! | left | pass | pass | "pass" label |
//! | up | any | chat | chat bubble |
//! | down | any | pass | "pass" label |
//!
//! Overlays are decorative: nothing here is exposed to assistive
//! technology.

use deck_core::config::OverlayConfig;
use deck_core::{CapabilitySet, Classification, LeftStyle, RightStyle, SwipeDirection};

/// One of the five feedback colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackChannel {
    /// Green.
    Agree,
    /// Red.
    Disagree,
    /// Gray.
    Pass,
    /// Yellow.
    Chat,
    /// Gold.
    Kudos,
}

impl FeedbackChannel {
    /// All channels in storage order.
    pub const ALL: [Self; 5] = [
        Self::Agree,
        Self::Disagree,
        Self::Pass,
        Self::Chat,
        Self::Kudos,
    ];

    const fn index(self) -> usize {
        match self {
            Self::Agree => 0,
            Self::Disagree => 1,
            Self::Pass => 2,
            Self::Chat => 3,
            Self::Kudos => 4,
        }
    }

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Agree => "agree",
            Self::Disagree => "disagree",
            Self::Pass => "pass",
            Self::Chat => "chat",
            Self::Kudos => "kudos",
        }
    }
}

/// What the overlay reveals on top of the wash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealMark {
    Checkmark,
    Cross,
    /// Adopt-style right commit.
    Plus,
    ChatBubble,
    Star,
    /// Text from [`FeedbackLabels::submit`].
    SubmitLabel,
    /// Text from [`FeedbackLabels::pass`].
    PassLabel,
}

impl RevealMark {
    /// Whether the mark renders as text rather than an icon.
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::SubmitLabel | Self::PassLabel)
    }
}

/// A channel plus the mark it reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    pub channel: FeedbackChannel,
    pub mark: RevealMark,
}

impl Feedback {
    /// Feedback for `direction` under the card's style flags.
    #[must_use]
    pub fn for_direction(direction: SwipeDirection, caps: &CapabilitySet) -> Self {
        let (channel, mark) = match direction {
            SwipeDirection::Right => match caps.right_style() {
                RightStyle::Agree => (FeedbackChannel::Agree, RevealMark::Checkmark),
                RightStyle::Submit => (FeedbackChannel::Agree, RevealMark::SubmitLabel),
                RightStyle::ChatAccept => (FeedbackChannel::Chat, RevealMark::ChatBubble),
                RightStyle::Kudos => (FeedbackChannel::Kudos, RevealMark::Star),
            },
            SwipeDirection::Left => match caps.left_style() {
                LeftStyle::Disagree => (FeedbackChannel::Disagree, RevealMark::Cross),
                LeftStyle::Pass => (FeedbackChannel::Pass, RevealMark::PassLabel),
            },
            SwipeDirection::Up => (FeedbackChannel::Chat, RevealMark::ChatBubble),
            SwipeDirection::Down => (FeedbackChannel::Pass, RevealMark::PassLabel),
        };
        Self { channel, mark }
    }

    /// Same channel, different mark.
    #[must_use]
    pub const fn with_mark(self, mark: RevealMark) -> Self {
        Self {
            channel: self.channel,
            mark,
        }
    }
}

/// Text for the label marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackLabels {
    pub submit: String,
    pub pass: String,
}

impl Default for FeedbackLabels {
    fn default() -> Self {
        Self {
            submit: "Submit".to_owned(),
            pass: "Pass".to_owned(),
        }
    }
}

impl FeedbackLabels {
    /// Text for `mark`, or `None` for icon marks.
    #[must_use]
    pub fn text_for(&self, mark: RevealMark) -> Option<&str> {
        match mark {
            RevealMark::SubmitLabel => Some(&self.submit),
            RevealMark::PassLabel => Some(&self.pass),
            _ => None,
        }
    }
}

/// Current overlay values.
///
/// At most one channel is non-zero. `reveal_scale` is only meaningful while
/// a channel is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayIntensity {
    wash: [f64; 5],
    reveal: f64,
    reveal_scale: f64,
    feedback: Option<Feedback>,
}

impl Default for OverlayIntensity {
    fn default() -> Self {
        Self::REST
    }
}

impl OverlayIntensity {
    /// Every channel at zero.
    pub const REST: Self = Self {
        wash: [0.0; 5],
        reveal: 0.0,
        reveal_scale: 0.0,
        feedback: None,
    };

    /// Wash intensity of `channel`.
    #[inline]
    #[must_use]
    pub fn channel(&self, channel: FeedbackChannel) -> f64 {
        self.wash[channel.index()]
    }

    /// Reveal opacity of the active mark.
    #[inline]
    #[must_use]
    pub fn reveal(&self) -> f64 {
        self.reveal
    }

    /// Reveal scale of the active mark.
    #[inline]
    #[must_use]
    pub fn reveal_scale(&self) -> f64 {
        self.reveal_scale
    }

    /// The active channel and mark, if any.
    #[inline]
    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    /// Whether nothing is showing.
    #[must_use]
    pub fn is_rest(&self) -> bool {
        self.reveal == 0.0 && self.wash.iter().all(|w| *w == 0.0)
    }

    /// Number of channels with a non-zero wash.
    #[must_use]
    pub fn active_channels(&self) -> usize {
        self.wash.iter().filter(|w| **w != 0.0).count()
    }

    /// Scale wash and reveal by `remaining` (1 = unchanged, 0 = rest).
    #[must_use]
    pub fn faded(self, remaining: f64) -> Self {
        if remaining <= 0.0 {
            return Self::REST;
        }
        let remaining = remaining.min(1.0);
        let mut wash = self.wash;
        for w in &mut wash {
            *w *= remaining;
        }
        Self {
            wash,
            reveal: self.reveal * remaining,
            ..self
        }
    }
}

/// Maps feedback and progress to overlay values.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlayController {
    config: OverlayConfig,
}

impl OverlayController {
    #[must_use]
    pub fn new(config: OverlayConfig) -> Self {
        Self { config }
    }

    /// Overlay for `feedback` at `progress` (clamped to [0, 1]).
    #[must_use]
    pub fn intensity(&self, feedback: Option<Feedback>, progress: f64) -> OverlayIntensity {
        let Some(feedback) = feedback else {
            return OverlayIntensity::REST;
        };
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        let floor = self.config.reveal_scale_floor;
        let mut wash = [0.0; 5];
        wash[feedback.channel.index()] = progress * self.config.max_intensity;
        OverlayIntensity {
            wash,
            reveal: progress,
            reveal_scale: floor + (1.0 - floor) * progress,
            feedback: Some(feedback),
        }
    }

    /// Overlay for a live classification.
    #[must_use]
    pub fn for_classification(
        &self,
        classification: &Classification,
        caps: &CapabilitySet,
    ) -> OverlayIntensity {
        let feedback = classification
            .direction
            .map(|d| Feedback::for_direction(d, caps));
        self.intensity(feedback, classification.progress())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::DirectionSet;

    fn caps(right: RightStyle, left: LeftStyle) -> CapabilitySet {
        CapabilitySet::new(DirectionSet::all(), true, right, left)
    }

    #[test]
    fn right_channel_follows_style() {
        let cases = [
            (RightStyle::Agree, FeedbackChannel::Agree, RevealMark::Checkmark),
            (RightStyle::Submit, FeedbackChannel::Agree, RevealMark::SubmitLabel),
            (RightStyle::ChatAccept, FeedbackChannel::Chat, RevealMark::ChatBubble),
            (RightStyle::Kudos, FeedbackChannel::Kudos, RevealMark::Star),
        ];
        for (style, channel, mark) in cases {
            let fb = Feedback::for_direction(SwipeDirection::Right, &caps(style, LeftStyle::Disagree));
            assert_eq!(fb, Feedback { channel, mark }, "{style:?}");
        }
    }

    #[test]
    fn left_channel_follows_style() {
        let fb = Feedback::for_direction(
            SwipeDirection::Left,
            &caps(RightStyle::Agree, LeftStyle::Pass),
        );
        assert_eq!(fb.channel, FeedbackChannel::Pass);
        assert!(fb.mark.is_text());

        let fb = Feedback::for_direction(
            SwipeDirection::Left,
            &caps(RightStyle::Agree, LeftStyle::Disagree),
        );
        assert_eq!(fb.channel, FeedbackChannel::Disagree);
        assert_eq!(fb.mark, RevealMark::Cross);
    }

    #[test]
    fn exactly_one_channel_lights() {
        let controller = OverlayController::default();
        let fb = Feedback::for_direction(
            SwipeDirection::Left,
            &caps(RightStyle::Agree, LeftStyle::Disagree),
        );
        let overlay = controller.intensity(Some(fb), 0.75);
        assert_eq!(overlay.active_channels(), 1);
        assert!((overlay.channel(FeedbackChannel::Disagree) - 0.3).abs() < 1e-12);
        assert_eq!(overlay.reveal(), 0.75);
        assert!((overlay.reveal_scale() - 0.875).abs() < 1e-12);
    }

    #[test]
    fn progress_is_clamped() {
        let controller = OverlayController::default();
        let fb = Feedback::for_direction(SwipeDirection::Right, &CapabilitySet::default());
        let overlay = controller.intensity(Some(fb), 3.0);
        assert_eq!(overlay.reveal(), 1.0);
        assert_eq!(overlay.channel(FeedbackChannel::Agree), 0.4);
        assert_eq!(controller.intensity(Some(fb), f64::NAN).reveal(), 0.0);
    }

    #[test]
    fn no_feedback_is_rest() {
        let overlay = OverlayController::default().intensity(None, 0.9);
        assert!(overlay.is_rest());
        assert_eq!(overlay, OverlayIntensity::REST);
    }

    #[test]
    fn fade_scales_and_bottoms_out_at_rest() {
        let controller = OverlayController::default();
        let fb = Feedback::for_direction(SwipeDirection::Right, &CapabilitySet::default());
        let overlay = controller.intensity(Some(fb), 1.0);
        let half = overlay.faded(0.5);
        assert!((half.channel(FeedbackChannel::Agree) - 0.2).abs() < 1e-12);
        assert_eq!(half.feedback(), Some(fb));
        assert_eq!(overlay.faded(0.0), OverlayIntensity::REST);
    }

    #[test]
    fn labels_resolve_text_marks_only() {
        let labels = FeedbackLabels {
            submit: "Send".into(),
            pass: "Skip".into(),
        };
        assert_eq!(labels.text_for(RevealMark::SubmitLabel), Some("Send"));
        assert_eq!(labels.text_for(RevealMark::PassLabel), Some("Skip"));
        assert_eq!(labels.text_for(RevealMark::Plus), None);
    }

    #[test]
    fn vertical_feedback_uses_chat_and_pass() {
        let c = caps(RightStyle::Kudos, LeftStyle::Disagree);
        assert_eq!(
            Feedback::for_direction(SwipeDirection::Up, &c).channel,
            FeedbackChannel::Chat
        );
        assert_eq!(
            Feedback::for_direction(SwipeDirection::Down, &c).channel,
            FeedbackChannel::Pass
        );
    }
}
