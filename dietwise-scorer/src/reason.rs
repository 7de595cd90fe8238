//! Localized explanations attached to a diet's score.

#![forbid(unsafe_code)]

use dietwise_core::{Goal, Lang};

/// A scoring rule that fired for a diet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// The diet suits the inferred goal.
    GoalMatch(Goal),
    /// A weight-focused diet recommended for BMI 25 or more.
    WeightFocused,
    /// The diet is easy.
    EasyStart,
    /// The diet is not behind the paywall.
    FreeAccess,
}

impl Reason {
    /// User-facing text in `lang`, if the rule explains itself.
    ///
    /// Goal matches for `maintain` and `gain_weight` carry no text.
    #[must_use]
    pub const fn text(self, lang: Lang) -> Option<&'static str> {
        match self {
            Self::GoalMatch(Goal::LoseWeight) => Some(lang.pick(
                "Kilo verme hedefinize uygun",
                "Matches your weight loss goal",
            )),
            Self::GoalMatch(Goal::BuildMuscle) => Some(lang.pick(
                "Kas yapma hedefinize uygun",
                "Matches your muscle building goal",
            )),
            Self::GoalMatch(Goal::Maintain | Goal::GainWeight) => None,
            Self::WeightFocused => {
                Some(lang.pick("Kilonuz için önerilen", "Recommended for your weight"))
            }
            Self::EasyStart => Some(lang.pick("Başlaması kolay", "Easy to start")),
            Self::FreeAccess => Some(lang.pick("Ücretsiz erişim", "Free access")),
        }
    }
}
