//! Resolve the goals a diet is suitable for.
//!
//! Catalog authors may declare `suitable_goals` on a record. When they do not,
//! the goals are inferred from keywords in the English name and description.
//! A record that matches no keyword family falls back to
//! [`FALLBACK_GOALS`].

#![forbid(unsafe_code)]

use std::collections::BTreeSet;

use dietwise_core::{DietRecord, Goal, Lang};
use serde::Serialize;

/// Goals assumed for diets that match no keyword family.
pub const FALLBACK_GOALS: [Goal; 2] = [Goal::LoseWeight, Goal::Maintain];

/// Keywords that mark a diet as suitable for one goal.
struct KeywordFamily {
    goal: Goal,
    name: &'static [&'static str],
    description: &'static [&'static str],
}

const KEYWORD_FAMILIES: [KeywordFamily; 4] = [
    KeywordFamily {
        goal: Goal::LoseWeight,
        name: &["keto", "low carb", "fasting"],
        description: &["weight loss"],
    },
    KeywordFamily {
        goal: Goal::BuildMuscle,
        name: &["protein", "muscle"],
        description: &["muscle"],
    },
    KeywordFamily {
        goal: Goal::Maintain,
        name: &["mediterranean", "balanced", "mind"],
        description: &[],
    },
    KeywordFamily {
        goal: Goal::GainWeight,
        name: &["bulk"],
        description: &["gain weight"],
    },
];

/// Where a resolved goal set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuitabilitySource {
    /// Declared on the catalog record.
    Explicit,
    /// Matched one or more keyword families.
    Keywords,
    /// No keyword family matched.
    Fallback,
}

/// The set of goals a diet is suitable for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuitableGoals {
    goals: BTreeSet<Goal>,
    source: SuitabilitySource,
}

impl SuitableGoals {
    /// Resolve the goal set for `diet`, preferring declared goals.
    ///
    /// # Examples
    ///
    /// ```
    /// use dietwise_core::{DietRecord, Goal, LocalizedText};
    /// use dietwise_scorer::{SuitabilitySource, SuitableGoals};
    ///
    /// let diet = DietRecord::new(
    ///     "keto",
    ///     LocalizedText::new("Keto", "Ketogenic Diet"),
    ///     LocalizedText::default(),
    /// );
    /// let goals = SuitableGoals::resolve(&diet);
    /// assert!(goals.contains(Goal::LoseWeight));
    /// assert_eq!(goals.source(), SuitabilitySource::Keywords);
    /// ```
    #[must_use]
    pub fn resolve(diet: &DietRecord) -> Self {
        match &diet.suitable_goals {
            Some(declared) if !declared.is_empty() => Self {
                goals: declared.iter().copied().collect(),
                source: SuitabilitySource::Explicit,
            },
            _ => Self::from_keywords(diet),
        }
    }

    /// Infer the goal set from keywords, ignoring declared goals.
    #[must_use]
    pub fn from_keywords(diet: &DietRecord) -> Self {
        let name = diet.name.get(Lang::En).to_lowercase();
        let description = diet.description.get(Lang::En).to_lowercase();
        let goals: BTreeSet<Goal> = KEYWORD_FAMILIES
            .iter()
            .filter(|family| {
                family.name.iter().any(|word| name.contains(word))
                    || family.description.iter().any(|word| description.contains(word))
            })
            .map(|family| family.goal)
            .collect();
        if goals.is_empty() {
            log::debug!(
                "diet {} matches no keyword family; assuming lose_weight and maintain",
                diet.id
            );
            Self {
                goals: FALLBACK_GOALS.into_iter().collect(),
                source: SuitabilitySource::Fallback,
            }
        } else {
            Self {
                goals,
                source: SuitabilitySource::Keywords,
            }
        }
    }

    /// Whether `goal` is in the set.
    #[must_use]
    pub fn contains(&self, goal: Goal) -> bool {
        self.goals.contains(&goal)
    }

    /// The goals in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = Goal> + '_ {
        self.goals.iter().copied()
    }

    /// Where the set came from.
    #[must_use]
    pub const fn source(&self) -> SuitabilitySource {
        self.source
    }

    /// Compare goal membership only, ignoring the source.
    #[must_use]
    pub fn same_goals(&self, other: &Self) -> bool {
        self.goals == other.goals
    }
}
