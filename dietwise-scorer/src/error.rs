//! Error types raised while configuring the rule scorer.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when building a [`RuleScorer`](crate::RuleScorer).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleScorerError {
    /// Every bonus was zero, so every diet would score the same.
    #[error("at least one score bonus must be non-zero")]
    AllBonusesZero,
}
