//! Rule-based diet scoring.
//!
//! [`RuleScorer`] adds up four independent bonuses: goal suitability, a BMI
//! tier, difficulty and free access. Each bonus is configurable through
//! [`ScoreWeights`].

#![forbid(unsafe_code)]

use dietwise_core::{DerivedProfile, DietRecord, DietScore, Difficulty, Lang, Scorer};

use crate::{Reason, RuleScorerError, ScoreWeights, SuitableGoals};

/// BMI from which weight-focused diets earn their bonus.
pub const HIGH_BMI_THRESHOLD: f64 = 25.0;

/// Id fragments marking a diet as weight-focused.
const WEIGHT_FOCUSED_ID_MARKERS: [&str; 3] = ["keto", "low-carb", "intermittent"];

/// Scores diets with additive, explainable rules.
///
/// # Examples
///
/// ```
/// use dietwise_core::{DietRecord, Difficulty, Lang, LocalizedText, Scorer, UserProfile, derive};
/// use dietwise_scorer::RuleScorer;
///
/// let keto = DietRecord::new(
///     "keto",
///     LocalizedText::new("Keto Diyeti", "Ketogenic Diet"),
///     LocalizedText::default(),
/// )
/// .with_premium(true);
/// let profile = derive(&UserProfile::new(90.0, 170.0, 75.0));
/// let scored = RuleScorer::default().score(&keto, &profile, Lang::En);
/// assert_eq!(scored.score, 90);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleScorer {
    weights: ScoreWeights,
}

impl RuleScorer {
    /// Build a scorer from validated weights.
    ///
    /// # Errors
    /// Returns [`RuleScorerError::AllBonusesZero`] when every bonus is zero.
    pub fn new(weights: ScoreWeights) -> Result<Self, RuleScorerError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// The weights in use.
    #[must_use]
    pub const fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Evaluate every rule and return the bonuses that fired, in rule order.
    #[must_use]
    pub fn evaluate(
        &self,
        diet: &DietRecord,
        profile: &DerivedProfile,
    ) -> Vec<(u32, Option<Reason>)> {
        let mut fired = Vec::with_capacity(4);

        let goal = profile.inferred_goal();
        if SuitableGoals::resolve(diet).contains(goal) {
            fired.push((self.weights.goal_match, Some(Reason::GoalMatch(goal))));
        }

        if profile.raw_bmi() >= HIGH_BMI_THRESHOLD {
            if is_weight_focused(diet) {
                fired.push((self.weights.weight_focused, Some(Reason::WeightFocused)));
            }
        } else {
            fired.push((self.weights.healthy_bmi, None));
        }

        let difficulty_reason = (diet.difficulty == Difficulty::Easy).then_some(Reason::EasyStart);
        fired.push((self.weights.difficulty(diet.difficulty), difficulty_reason));

        if !diet.is_premium {
            fired.push((self.weights.free_access, Some(Reason::FreeAccess)));
        }

        fired
    }
}

impl Scorer for RuleScorer {
    fn score(&self, diet: &DietRecord, profile: &DerivedProfile, lang: Lang) -> DietScore {
        let fired = self.evaluate(diet, profile);
        let score = fired
            .iter()
            .fold(0_u32, |total, (points, _)| total.saturating_add(*points));
        let reasons = fired
            .iter()
            .filter_map(|(_, reason)| reason.and_then(|r| r.text(lang)))
            .map(str::to_owned)
            .collect();
        DietScore { score, reasons }
    }
}

fn is_weight_focused(diet: &DietRecord) -> bool {
    WEIGHT_FOCUSED_ID_MARKERS
        .iter()
        .any(|marker| diet.id.contains(marker))
}

#[cfg(test)]
mod tests {
    use dietwise_core::{Goal, LocalizedText, StatedGoal, UserProfile, derive};
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn scorer() -> RuleScorer {
        RuleScorer::default()
    }

    fn diet(id: &str, en_name: &str) -> DietRecord {
        DietRecord::new(id, LocalizedText::new("", en_name), LocalizedText::default())
    }

    #[rstest]
    fn ketogenic_diet_for_obese_user(scorer: RuleScorer) {
        let profile = derive(&UserProfile::new(90.0, 170.0, 75.0));
        let keto = diet("keto", "Ketogenic Diet")
            .with_difficulty(Difficulty::Medium)
            .with_premium(true);
        let scored = scorer.score(&keto, &profile, Lang::En);
        assert_eq!(scored.score, 90);
        assert_eq!(
            scored.reasons,
            ["Matches your weight loss goal", "Recommended for your weight"]
        );
    }

    #[rstest]
    fn explicit_goals_for_obese_user(scorer: RuleScorer) {
        let profile = derive(&UserProfile::new(90.0, 170.0, 75.0));
        let mediterranean = diet("mediterranean", "Mediterranean Diet")
            .with_difficulty(Difficulty::Easy)
            .with_suitable_goals([Goal::LoseWeight, Goal::Maintain]);
        let scored = scorer.score(&mediterranean, &profile, Lang::En);
        assert_eq!(scored.score, 75);
        assert_eq!(
            scored.reasons,
            ["Matches your weight loss goal", "Easy to start", "Free access"]
        );
    }

    #[rstest]
    fn keyword_mediterranean_misses_lose_goal(scorer: RuleScorer) {
        let profile = derive(&UserProfile::new(90.0, 170.0, 75.0));
        let mediterranean =
            diet("mediterranean", "Mediterranean Diet").with_difficulty(Difficulty::Easy);
        assert_eq!(scorer.score(&mediterranean, &profile, Lang::En).score, 25);
    }

    #[rstest]
    fn best_case_reaches_maximum(scorer: RuleScorer) {
        let profile = derive(&UserProfile::new(90.0, 170.0, 75.0));
        let low_carb = diet("low-carb", "Low Carb Diet").with_difficulty(Difficulty::Easy);
        let scored = scorer.score(&low_carb, &profile, Lang::Tr);
        assert_eq!(scored.score, 105);
        assert_eq!(scored.score, scorer.weights().max_score());
        assert_eq!(scored.match_percentage(), 100);
        assert_eq!(
            scored.reasons,
            [
                "Kilo verme hedefinize uygun",
                "Kilonuz için önerilen",
                "Başlaması kolay",
                "Ücretsiz erişim",
            ]
        );
    }

    #[rstest]
    fn healthy_bmi_adds_silent_bonus(scorer: RuleScorer) {
        let profile = derive(&UserProfile::new(70.0, 170.0, 70.0));
        let vegan = diet("vegan", "Vegan Diet").with_premium(true);
        let scored = scorer.score(&vegan, &profile, Lang::En);
        // Maintain goal matches the fallback set: 50 + 20 + 10.
        assert_eq!(scored.score, 80);
        assert!(scored.reasons.is_empty());
    }

    #[rstest]
    fn high_bmi_without_weight_focus_scores_nothing_for_tier(scorer: RuleScorer) {
        let profile = derive(&UserProfile::new(90.0, 170.0, 90.0));
        let vegan = diet("vegan", "Vegan Diet")
            .with_difficulty(Difficulty::Hard)
            .with_premium(true);
        // Maintain goal matches the fallback set; no tier, hard, premium.
        assert_eq!(scorer.score(&vegan, &profile, Lang::En).score, 50);
    }

    #[rstest]
    fn muscle_goal_matches_protein_diet(scorer: RuleScorer) {
        let profile = derive(
            &UserProfile::new(75.0, 180.0, 75.0).with_stated_goal(StatedGoal::BuildMuscle),
        );
        let protein = diet("high-protein", "High Protein Diet")
            .with_difficulty(Difficulty::Hard)
            .with_premium(true);
        let scored = scorer.score(&protein, &profile, Lang::En);
        assert_eq!(scored.score, 70);
        assert_eq!(scored.reasons, ["Matches your muscle building goal"]);
    }

    #[test]
    fn custom_weights_are_applied() {
        let weights = ScoreWeights {
            goal_match: 0,
            free_access: 1,
            ..ScoreWeights::default()
        };
        let scorer = RuleScorer::new(weights).expect("valid weights");
        let profile = derive(&UserProfile::new(70.0, 170.0, 70.0));
        let record = diet("vegan", "Vegan Diet").with_difficulty(Difficulty::Hard);
        assert_eq!(scorer.score(&record, &profile, Lang::En).score, 21);
    }

    #[test]
    fn zero_weights_are_rejected() {
        let weights = ScoreWeights {
            goal_match: 0,
            weight_focused: 0,
            healthy_bmi: 0,
            easy: 0,
            medium: 0,
            hard: 0,
            free_access: 0,
        };
        assert_eq!(RuleScorer::new(weights), Err(RuleScorerError::AllBonusesZero));
    }
}
