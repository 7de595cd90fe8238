//! Core domain types for the Dietwise recommendation engine.
//!
//! The crate covers the whole request path short of the scoring rules
//! themselves:
//! - [`derive`] turns a raw [`UserProfile`] into a [`DerivedProfile`]
//!   (BMI, [`BmiCategory`], weight delta, inferred [`Goal`]);
//! - [`DietRecord`] and [`DietCatalog`] model the read-only content catalog;
//! - the [`Scorer`] trait is the seam scoring strategies plug into;
//! - [`Recommender`] ranks a catalog and selects a top pick and
//!   alternatives.
//!
//! Everything here is pure and synchronous. Invalid profile measurements
//! are replaced by defaults rather than reported, so a recommendation is
//! always produced.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod bmi;
pub mod catalog;
pub mod diet;
pub mod goal;
pub mod lang;
pub mod profile;
pub mod recommend;
pub mod scorer;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use bmi::BmiCategory;
pub use catalog::{CatalogError, DietCatalog};
pub use diet::{DEFAULT_CATEGORY, DietRecord, Difficulty, Macros};
pub use goal::{Goal, StatedGoal};
pub use lang::{Lang, LocalizedText};
pub use profile::{DerivedProfile, UserProfile, derive, infer_goal};
pub use recommend::{
    DEFAULT_MAX_RESULTS, RecommendationRequest, RecommendationResult, Recommender, ScoredDiet,
};
pub use scorer::{DietScore, MAX_MATCH_PERCENTAGE, Scorer};
