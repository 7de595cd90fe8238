//! Score diets for a derived user profile.
//!
//! The `Scorer` trait assigns an integer score and a list of justification
//! strings to a [`DietRecord`](crate::DietRecord) given the caller's
//! [`DerivedProfile`](crate::DerivedProfile).

use crate::{DerivedProfile, DietRecord, Lang};

/// Upper bound of the user-facing match percentage.
pub const MAX_MATCH_PERCENTAGE: u32 = 100;

/// Score and reasons produced for a single diet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DietScore {
    /// Raw additive score. May exceed 100.
    pub score: u32,
    /// Human-readable justifications in rule order.
    pub reasons: Vec<String>,
}

impl DietScore {
    /// Clamped percentage shown to the user.
    ///
    /// # Examples
    /// ```
    /// use dietwise_core::DietScore;
    ///
    /// let score = DietScore { score: 105, reasons: Vec::new() };
    /// assert_eq!(score.match_percentage(), 100);
    /// ```
    #[must_use]
    pub fn match_percentage(&self) -> u32 {
        self.score.min(MAX_MATCH_PERCENTAGE)
    }
}

/// Calculate how well a diet fits a user.
///
/// Higher scores indicate a better fit. Implementations must be thread-safe
/// (`Send` + `Sync`) and deterministic: the same inputs always produce the
/// same score and the same reasons, in the same order. Scoring is
/// infallible; a diet with no signal simply scores `0`.
///
/// # Examples
///
/// ```rust
/// use dietwise_core::{DerivedProfile, DietRecord, DietScore, Lang, LocalizedText, Scorer};
/// use dietwise_core::{UserProfile, derive};
///
/// struct FreeOnly;
///
/// impl Scorer for FreeOnly {
///     fn score(&self, diet: &DietRecord, _profile: &DerivedProfile, _lang: Lang) -> DietScore {
///         DietScore {
///             score: if diet.is_premium { 0 } else { 10 },
///             reasons: Vec::new(),
///         }
///     }
/// }
///
/// let diet = DietRecord::new("vegan", LocalizedText::default(), LocalizedText::default());
/// let profile = derive(&UserProfile::default());
/// assert_eq!(FreeOnly.score(&diet, &profile, Lang::En).score, 10);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `diet` according to `profile`, with reasons
    /// rendered in `lang`.
    fn score(&self, diet: &DietRecord, profile: &DerivedProfile, lang: Lang) -> DietScore;
}

impl<S: Scorer + ?Sized> Scorer for &S {
    fn score(&self, diet: &DietRecord, profile: &DerivedProfile, lang: Lang) -> DietScore {
        (**self).score(diet, profile, lang)
    }
}

impl<S: Scorer + ?Sized> Scorer for Box<S> {
    fn score(&self, diet: &DietRecord, profile: &DerivedProfile, lang: Lang) -> DietScore {
        (**self).score(diet, profile, lang)
    }
}
