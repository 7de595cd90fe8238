//! Tunable bonus values for rule-based scoring.
#![forbid(unsafe_code)]

use dietwise_core::Difficulty;
use serde::{Deserialize, Serialize};

use crate::RuleScorerError;

/// Points awarded by each scoring rule.
///
/// The defaults reproduce the production weighting, under which the best
/// possible score is 105.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Awarded when the diet suits the inferred goal.
    pub goal_match: u32,
    /// Awarded to weight-focused diets when BMI is 25 or more.
    pub weight_focused: u32,
    /// Awarded to every diet when BMI is below 25.
    pub healthy_bmi: u32,
    /// Awarded to easy diets.
    pub easy: u32,
    /// Awarded to medium diets.
    pub medium: u32,
    /// Awarded to hard diets.
    pub hard: u32,
    /// Awarded to diets outside the paywall.
    pub free_access: u32,
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`RuleScorerError::AllBonusesZero`] when no rule can award
    /// points.
    pub fn validate(self) -> Result<Self, RuleScorerError> {
        let bonuses = [
            self.goal_match,
            self.weight_focused,
            self.healthy_bmi,
            self.easy,
            self.medium,
            self.hard,
            self.free_access,
        ];
        if bonuses.iter().all(|bonus| *bonus == 0) {
            Err(RuleScorerError::AllBonusesZero)
        } else {
            Ok(self)
        }
    }

    /// Bonus for a diet's difficulty.
    #[must_use]
    pub const fn difficulty(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    /// Highest score a single diet can reach.
    #[must_use]
    pub fn max_score(&self) -> u32 {
        let bmi_tier = self.weight_focused.max(self.healthy_bmi);
        let difficulty = self.easy.max(self.medium).max(self.hard);
        self.goal_match
            .saturating_add(bmi_tier)
            .saturating_add(difficulty)
            .saturating_add(self.free_access)
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            goal_match: 50,
            weight_focused: 30,
            healthy_bmi: 20,
            easy: 15,
            medium: 10,
            hard: 0,
            free_access: 10,
        }
    }
}
