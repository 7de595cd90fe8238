//! Facade crate for the Dietwise diet recommendation engine.
//!
//! This crate re-exports the core domain types and the ranker, and exposes the
//! rule-based scorer behind the `scorer-rules` feature.
//!
//! ```
//! # #[cfg(feature = "scorer-rules")]
//! # {
//! use dietwise_engine::{
//!     DietRecord, Difficulty, Lang, LocalizedText, RecommendationRequest, UserProfile, recommend,
//! };
//!
//! let catalog = [DietRecord::new(
//!     "keto",
//!     LocalizedText::new("Ketojenik Diyet", "Ketogenic Diet"),
//!     LocalizedText::default(),
//! )
//! .with_difficulty(Difficulty::Medium)
//! .with_premium(true)];
//! let request = RecommendationRequest::new(UserProfile::new(90.0, 170.0, 75.0)).with_lang(Lang::En);
//! let result = recommend(&request, &catalog);
//! let top = result.top_pick.expect("keto is recommended");
//! assert_eq!(top.match_percentage, 90);
//! # }
//! ```

#![forbid(unsafe_code)]

pub use dietwise_core::{
    BmiCategory, CatalogError, DerivedProfile, DietCatalog, DietRecord, DietScore, Difficulty,
    Goal, Lang, LocalizedText, Macros, RecommendationRequest, RecommendationResult, Recommender,
    ScoredDiet, Scorer, StatedGoal, UserProfile, derive,
};

#[cfg(feature = "scorer-rules")]
pub use dietwise_scorer::{
    LintFinding, LintKind, RuleScorer, RuleScorerError, ScoreWeights, SuitableGoals, lint_catalog,
    recommend,
};
