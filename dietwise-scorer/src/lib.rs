//! Rule-based scoring for the Dietwise recommendation engine.
//!
//! [`RuleScorer`] implements [`Scorer`](dietwise_core::Scorer) with four
//! additive rules:
//! - **Goal suitability**: the diet suits the user's inferred goal, using the
//!   record's declared `suitable_goals` or, failing that, keyword families
//!   found in its English name and description.
//! - **BMI tier**: weight-focused diets earn a bonus for a BMI of 25 or more;
//!   every diet earns a smaller one below 25.
//! - **Difficulty**: easier diets score higher.
//! - **Accessibility**: diets outside the paywall earn a bonus.
//!
//! [`lint_catalog`] reuses the keyword heuristic to review catalog records at
//! authoring time.
//!
//! # Examples
//!
//! ```
//! use dietwise_core::{RecommendationRequest, UserProfile};
//! use dietwise_core::test_support::sample_catalog;
//! use dietwise_scorer::recommend;
//!
//! let request = RecommendationRequest::new(UserProfile::new(90.0, 170.0, 75.0));
//! let result = recommend(&request, &sample_catalog());
//! assert!(result.top_pick.is_some());
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use dietwise_core::{DietRecord, RecommendationRequest, RecommendationResult, Recommender};

mod error;
mod lint;
mod reason;
mod rules;
mod suitability;
mod types;

pub use error::RuleScorerError;
pub use lint::{LintFinding, LintKind, MACRO_TOTAL_PERCENT, lint_catalog};
pub use reason::Reason;
pub use rules::{HIGH_BMI_THRESHOLD, RuleScorer};
pub use suitability::{FALLBACK_GOALS, SuitabilitySource, SuitableGoals};
pub use types::ScoreWeights;

/// Recommend diets from `catalog` using the default [`RuleScorer`].
///
/// Premium diets are scored like any other; entitlement handling is left to
/// the caller.
#[must_use]
pub fn recommend(request: &RecommendationRequest, catalog: &[DietRecord]) -> RecommendationResult {
    Recommender::new(RuleScorer::default()).recommend(request, catalog)
}

#[cfg(test)]
mod tests;
