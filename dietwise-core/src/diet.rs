//! Diet catalog records.
//!
//! A [`DietRecord`] is read-only content authored outside the engine. Only
//! the fields the recommendation flow consumes are modelled; the day-by-day
//! meal plans stay with the content layer.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Goal, Lang, LocalizedText};

/// Category rendered when a record does not declare one.
pub const DEFAULT_CATEGORY: &str = "weight_loss";

/// How demanding a diet is to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    /// Little change to existing habits.
    Easy,
    /// Moderate restrictions.
    #[default]
    Medium,
    /// Strict rules or long fasting windows.
    Hard,
}

impl Difficulty {
    /// Return the difficulty as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Human-readable label in `lang`.
    ///
    /// # Examples
    /// ```
    /// use dietwise_core::{Difficulty, Lang};
    ///
    /// assert_eq!(Difficulty::Easy.label(Lang::Tr), "Kolay");
    /// assert_eq!(Difficulty::Hard.label(Lang::En), "Hard");
    /// ```
    #[must_use]
    pub const fn label(self, lang: Lang) -> &'static str {
        match self {
            Self::Easy => lang.pick("Kolay", "Easy"),
            Self::Medium => lang.pick("Orta", "Medium"),
            Self::Hard => lang.pick("Zor", "Hard"),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Macronutrient split in percent of daily energy.
///
/// The values conventionally sum to 100 but nothing enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Macros {
    /// Protein share.
    pub protein: u8,
    /// Carbohydrate share.
    pub carbs: u8,
    /// Fat share.
    pub fat: u8,
}

impl Macros {
    /// Construct a macro split.
    #[must_use]
    pub const fn new(protein: u8, carbs: u8, fat: u8) -> Self {
        Self {
            protein,
            carbs,
            fat,
        }
    }

    /// Sum of the three shares.
    #[must_use]
    pub fn total(self) -> u16 {
        u16::from(self.protein) + u16::from(self.carbs) + u16::from(self.fat)
    }
}

/// A diet plan as published in the content catalog.
///
/// # Examples
/// ```
/// use dietwise_core::{DietRecord, Difficulty, Lang, LocalizedText};
///
/// let keto = DietRecord::new(
///     "keto",
///     LocalizedText::new("Ketojenik Diyet", "Ketogenic Diet"),
///     LocalizedText::new("Çok düşük karbonhidrat.", "Very low carbohydrate."),
/// )
/// .with_difficulty(Difficulty::Hard)
/// .with_premium(true);
///
/// assert_eq!(keto.name.get(Lang::En), "Ketogenic Diet");
/// assert!(keto.is_premium);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DietRecord {
    /// Catalog-unique identifier.
    pub id: String,
    /// Display name per language.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: LocalizedText,
    /// Long description per language.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: LocalizedText,
    /// Recommended programme length in days.
    #[cfg_attr(feature = "serde", serde(alias = "duration"))]
    pub duration_days: u32,
    /// Content category such as `weight_loss` or `balanced`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: Option<String>,
    /// How demanding the diet is.
    #[cfg_attr(feature = "serde", serde(default))]
    pub difficulty: Difficulty,
    /// Macronutrient split.
    #[cfg_attr(feature = "serde", serde(default))]
    pub macros: Macros,
    /// Whether the diet sits behind the paywall.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_premium: bool,
    /// Optional decorative emoji.
    #[cfg_attr(feature = "serde", serde(default))]
    pub emoji: Option<String>,
    /// Goals the content team marked this diet as suitable for.
    ///
    /// When absent, scorers fall back to inferring goals from the English
    /// name and description.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub suitable_goals: Option<Vec<Goal>>,
}

impl DietRecord {
    /// Default programme length for records built in code.
    pub const DEFAULT_DURATION_DAYS: u32 = 7;

    /// Construct a free, medium-difficulty, seven-day record.
    pub fn new(id: impl Into<String>, name: LocalizedText, description: LocalizedText) -> Self {
        Self {
            id: id.into(),
            name,
            description,
            duration_days: Self::DEFAULT_DURATION_DAYS,
            category: None,
            difficulty: Difficulty::Medium,
            macros: Macros::default(),
            is_premium: false,
            emoji: None,
            suitable_goals: None,
        }
    }

    /// Set the difficulty while returning `self` for chaining.
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the premium flag while returning `self` for chaining.
    #[must_use]
    pub const fn with_premium(mut self, is_premium: bool) -> Self {
        self.is_premium = is_premium;
        self
    }

    /// Set the programme length while returning `self` for chaining.
    #[must_use]
    pub const fn with_duration_days(mut self, days: u32) -> Self {
        self.duration_days = days;
        self
    }

    /// Set the macro split while returning `self` for chaining.
    #[must_use]
    pub const fn with_macros(mut self, macros: Macros) -> Self {
        self.macros = macros;
        self
    }

    /// Set the category while returning `self` for chaining.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the emoji while returning `self` for chaining.
    #[must_use]
    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    /// Declare the goals this diet suits while returning `self` for chaining.
    #[must_use]
    pub fn with_suitable_goals(mut self, goals: impl IntoIterator<Item = Goal>) -> Self {
        self.suitable_goals = Some(goals.into_iter().collect());
        self
    }

    /// Category to render, defaulting to [`DEFAULT_CATEGORY`].
    #[must_use]
    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }
}
