//! Authoring-time checks for diet catalogs.
//!
//! The lint compares declared `suitable_goals` with what the keyword
//! heuristic would infer, and flags incomplete translations and macro splits
//! that do not add up.

#![forbid(unsafe_code)]

use std::fmt;

use dietwise_core::{DietRecord, Goal, Lang};
use serde::Serialize;

use crate::SuitableGoals;

/// Expected sum of a diet's macro percentages.
pub const MACRO_TOTAL_PERCENT: u16 = 100;

/// A single problem found in a catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintFinding {
    /// Id of the offending record.
    pub diet_id: String,
    /// What is wrong with it.
    #[serde(flatten)]
    pub kind: LintKind,
}

/// Categories of catalog problems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "finding", rename_all = "snake_case")]
pub enum LintKind {
    /// The record relies on keyword inference.
    MissingSuitableGoals {
        /// Goals the keyword heuristic infers.
        inferred: Vec<Goal>,
    },
    /// Declared goals differ from keyword inference.
    SuitableGoalsDisagree {
        /// Goals declared on the record.
        declared: Vec<Goal>,
        /// Goals the keyword heuristic infers.
        inferred: Vec<Goal>,
    },
    /// A name or description is empty in one language.
    MissingTranslation {
        /// `name` or `description`.
        field: &'static str,
        /// Language with no text.
        lang: Lang,
    },
    /// Macro percentages do not add up to 100.
    MacrosDoNotSumTo100 {
        /// Actual sum.
        total: u16,
    },
}

impl fmt::Display for LintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSuitableGoals { inferred } => {
                write!(f, "no suitable_goals declared (inferred {})", join(inferred))
            }
            Self::SuitableGoalsDisagree { declared, inferred } => write!(
                f,
                "suitable_goals [{}] disagree with keywords [{}]",
                join(declared),
                join(inferred)
            ),
            Self::MissingTranslation { field, lang } => {
                write!(f, "{field} has no {lang} text")
            }
            Self::MacrosDoNotSumTo100 { total } => {
                write!(f, "macros sum to {total}%, expected {MACRO_TOTAL_PERCENT}%")
            }
        }
    }
}

impl fmt::Display for LintFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.diet_id, self.kind)
    }
}

/// Check every record and return the findings in catalog order.
///
/// # Examples
///
/// ```
/// use dietwise_core::{DietRecord, Goal, LocalizedText, Macros};
/// use dietwise_scorer::lint_catalog;
///
/// let diet = DietRecord::new(
///     "keto",
///     LocalizedText::new("Keto Diyeti", "Ketogenic Diet"),
///     LocalizedText::new("Az karbonhidrat", "Low carbohydrate"),
/// )
/// .with_macros(Macros::new(20, 5, 75))
/// .with_suitable_goals([Goal::LoseWeight]);
/// assert!(lint_catalog(&[diet]).is_empty());
/// ```
#[must_use]
pub fn lint_catalog(records: &[DietRecord]) -> Vec<LintFinding> {
    records.iter().flat_map(lint_record).collect()
}

fn lint_record(diet: &DietRecord) -> Vec<LintFinding> {
    let mut kinds = Vec::new();

    let inferred = SuitableGoals::from_keywords(diet);
    match &diet.suitable_goals {
        Some(declared) if !declared.is_empty() => {
            let resolved = SuitableGoals::resolve(diet);
            if !resolved.same_goals(&inferred) {
                kinds.push(LintKind::SuitableGoalsDisagree {
                    declared: resolved.iter().collect(),
                    inferred: inferred.iter().collect(),
                });
            }
        }
        _ => kinds.push(LintKind::MissingSuitableGoals {
            inferred: inferred.iter().collect(),
        }),
    }

    for (field, text) in [("name", &diet.name), ("description", &diet.description)] {
        for lang in [Lang::Tr, Lang::En] {
            if text.is_missing(lang) {
                kinds.push(LintKind::MissingTranslation { field, lang });
            }
        }
    }

    let total = diet.macros.total();
    if total != MACRO_TOTAL_PERCENT {
        kinds.push(LintKind::MacrosDoNotSumTo100 { total });
    }

    kinds
        .into_iter()
        .map(|kind| LintFinding {
            diet_id: diet.id.clone(),
            kind,
        })
        .collect()
}

fn join(goals: &[Goal]) -> String {
    goals
        .iter()
        .copied()
        .map(Goal::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
