//! Rank scored diets and select the top pick.
//!
//! [`Recommender`] derives the profile once, scores every catalog entry with
//! its [`Scorer`], stable-sorts by raw score, and splits the first
//! `max_results` entries into a top pick and alternatives.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    DerivedProfile, DietRecord, DietScore, Difficulty, Lang, Macros, Scorer, UserProfile, derive,
};

/// Number of recommendations returned when the caller does not say.
pub const DEFAULT_MAX_RESULTS: usize = 5;
/// Reasons surfaced per diet.
pub const MAX_REASONS: usize = 2;
/// Characters of description kept in the preview.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

const ELLIPSIS: &str = "...";

/// Parameters for a recommendation request.
///
/// # Examples
/// ```rust
/// use dietwise_core::{Lang, RecommendationRequest, UserProfile};
///
/// let request = RecommendationRequest::new(UserProfile::new(80.0, 170.0, 70.0))
///     .with_lang(Lang::En);
/// assert_eq!(request.max_results, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecommendationRequest {
    /// Raw profile of the user asking.
    pub profile: UserProfile,
    /// Language for names, descriptions, and reasons.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lang: Lang,
    /// Total results including the top pick.
    #[cfg_attr(feature = "serde", serde(default = "default_max_results"))]
    pub max_results: usize,
}

#[cfg(feature = "serde")]
const fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

impl RecommendationRequest {
    /// Request Turkish results with the default result bound.
    #[must_use]
    pub const fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            lang: Lang::Tr,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Set the language while returning `self` for chaining.
    #[must_use]
    pub const fn with_lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }

    /// Set the result bound while returning `self` for chaining.
    #[must_use]
    pub const fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

/// A diet prepared for display, with its score and reasons.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoredDiet {
    /// Identifier of the source record.
    pub diet_id: String,
    /// Name in the requested language.
    pub name: String,
    /// Description preview in the requested language.
    pub description: String,
    /// Programme length in days.
    pub duration_days: u32,
    /// Content category.
    pub category: String,
    /// Difficulty of the diet.
    pub difficulty: Difficulty,
    /// Macronutrient split.
    pub macros: Macros,
    /// Whether the diet sits behind the paywall.
    pub is_premium: bool,
    /// Optional decorative emoji.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub emoji: Option<String>,
    /// Raw score used for ranking.
    pub score: u32,
    /// At most [`MAX_REASONS`] justifications.
    pub reasons: Vec<String>,
    /// Score clamped to 100 for display.
    pub match_percentage: u32,
}

impl ScoredDiet {
    /// Resolve `diet` into `lang` and attach its score.
    ///
    /// Reasons beyond [`MAX_REASONS`] are dropped; the score is unaffected.
    #[must_use]
    pub fn from_record(diet: &DietRecord, scored: DietScore, lang: Lang) -> Self {
        let match_percentage = scored.match_percentage();
        let DietScore { score, mut reasons } = scored;
        reasons.truncate(MAX_REASONS);
        Self {
            diet_id: diet.id.clone(),
            name: diet.name.get(lang).to_owned(),
            description: description_preview(diet.description.get(lang)),
            duration_days: diet.duration_days,
            category: diet.category_or_default().to_owned(),
            difficulty: diet.difficulty,
            macros: diet.macros,
            is_premium: diet.is_premium,
            emoji: diet.emoji.clone(),
            score,
            reasons,
            match_percentage,
        }
    }
}

/// Top pick and alternatives for a single request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RecommendationResult {
    /// Derived profile the ranking was computed for.
    pub profile: DerivedProfile,
    /// Highest-scoring diet, if any.
    pub top_pick: Option<ScoredDiet>,
    /// Remaining diets in descending score order.
    pub alternatives: Vec<ScoredDiet>,
}

impl RecommendationResult {
    /// Iterate over the top pick followed by the alternatives.
    pub fn iter(&self) -> impl Iterator<Item = &ScoredDiet> {
        self.top_pick.iter().chain(self.alternatives.iter())
    }

    /// Number of diets in the result.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Report whether nothing was recommended.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.top_pick.is_none()
    }
}

/// Ranks a catalog with a [`Scorer`].
///
/// The recommender is stateless apart from its scorer, so a single instance
/// can serve concurrent requests.
///
/// # Examples
/// ```rust
/// use dietwise_core::{
///     DerivedProfile, DietRecord, DietScore, Lang, LocalizedText, RecommendationRequest,
///     Recommender, Scorer, UserProfile,
/// };
///
/// struct DurationScorer;
///
/// impl Scorer for DurationScorer {
///     fn score(&self, diet: &DietRecord, _: &DerivedProfile, _: Lang) -> DietScore {
///         DietScore { score: diet.duration_days, reasons: Vec::new() }
///     }
/// }
///
/// let catalog = vec![
///     DietRecord::new("short", LocalizedText::default(), LocalizedText::default()),
///     DietRecord::new("long", LocalizedText::default(), LocalizedText::default())
///         .with_duration_days(30),
/// ];
/// let request = RecommendationRequest::new(UserProfile::default());
/// let result = Recommender::new(DurationScorer).recommend(&request, &catalog);
/// assert_eq!(result.top_pick.map(|d| d.diet_id), Some("long".to_string()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Recommender<S> {
    scorer: S,
}

impl<S: Scorer> Recommender<S> {
    /// Wrap a scorer.
    pub const fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Borrow the underlying scorer.
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Score, rank, and select recommendations for `request`.
    ///
    /// Premium diets are scored like any other; gating them is the
    /// caller's concern. Ties keep catalog order. An empty catalog or a
    /// `max_results` of zero yields an empty result.
    pub fn recommend(
        &self,
        request: &RecommendationRequest,
        catalog: &[DietRecord],
    ) -> RecommendationResult {
        let profile = derive(&request.profile);
        let ranked = self.rank(&profile, catalog, request.lang);
        let mut selected = ranked.into_iter().take(request.max_results);
        let top_pick = selected.next();
        let alternatives: Vec<ScoredDiet> = selected.collect();

        log::debug!(
            "ranked {} diets for goal {} (bmi {}): top pick {:?}, {} alternatives",
            catalog.len(),
            profile.inferred_goal(),
            profile.bmi(),
            top_pick.as_ref().map(|diet| diet.diet_id.as_str()),
            alternatives.len(),
        );

        RecommendationResult {
            profile,
            top_pick,
            alternatives,
        }
    }

    /// Score every diet and stable-sort by descending raw score.
    pub fn rank(
        &self,
        profile: &DerivedProfile,
        catalog: &[DietRecord],
        lang: Lang,
    ) -> Vec<ScoredDiet> {
        let mut scored: Vec<ScoredDiet> = catalog
            .iter()
            .map(|diet| {
                let score = self.scorer.score(diet, profile, lang);
                ScoredDiet::from_record(diet, score, lang)
            })
            .collect();
        // `sort_by` is stable, which keeps catalog order for equal scores.
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored
    }
}

/// Cut `description` to [`DESCRIPTION_PREVIEW_CHARS`] characters, appending
/// an ellipsis when anything was removed.
///
/// Descriptions that fit are returned unchanged, without a trailing
/// ellipsis, so short copy does not read as cut off.
///
/// # Examples
/// ```
/// use dietwise_core::recommend::description_preview;
///
/// assert_eq!(description_preview("Short."), "Short.");
/// let long = "ş".repeat(120);
/// let preview = description_preview(&long);
/// assert_eq!(preview.chars().count(), 103);
/// assert!(preview.ends_with("..."));
/// ```
#[must_use]
pub fn description_preview(description: &str) -> String {
    match description.char_indices().nth(DESCRIPTION_PREVIEW_CHARS) {
        Some((cut, _)) => {
            let mut preview = description.get(..cut).unwrap_or(description).to_owned();
            preview.push_str(ELLIPSIS);
            preview
        }
        None => description.to_owned(),
    }
}
