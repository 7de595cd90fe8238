//! Test-only fixtures: a table-driven `Scorer` and a small bilingual
//! catalog modelled on the production content.

use std::collections::HashMap;

use crate::{
    DerivedProfile, DietRecord, DietScore, Difficulty, Lang, LocalizedText, Macros, Scorer,
};

/// `Scorer` returning a fixed score per diet id and `0` for unknown ids.
///
/// Each non-zero score carries a single reason naming the diet, which keeps
/// reason plumbing observable in tests.
#[derive(Debug, Clone, Default)]
pub struct TableScorer {
    scores: HashMap<String, u32>,
}

impl TableScorer {
    /// Set the score for `id` while returning `self` for chaining.
    #[must_use]
    pub fn with_score(mut self, id: impl Into<String>, score: u32) -> Self {
        self.scores.insert(id.into(), score);
        self
    }
}

impl<const N: usize> From<[(&str, u32); N]> for TableScorer {
    fn from(entries: [(&str, u32); N]) -> Self {
        entries
            .into_iter()
            .fold(Self::default(), |scorer, (id, score)| {
                scorer.with_score(id, score)
            })
    }
}

impl Scorer for TableScorer {
    fn score(&self, diet: &DietRecord, _profile: &DerivedProfile, _lang: Lang) -> DietScore {
        let score = self.scores.get(&diet.id).copied().unwrap_or(0);
        let reasons = if score > 0 {
            vec![format!("table:{}", diet.id)]
        } else {
            Vec::new()
        };
        DietScore { score, reasons }
    }
}

/// Six diets in the order the content team ships them.
#[must_use]
pub fn sample_catalog() -> Vec<DietRecord> {
    vec![
        DietRecord::new(
            "keto",
            LocalizedText::new("Ketojenik Diyet", "Ketogenic Diet"),
            LocalizedText::new(
                "Çok düşük karbonhidrat, yüksek yağ içeren bir beslenme yaklaşımı.",
                "A very low carbohydrate, high fat approach that shifts the body into ketosis.",
            ),
        )
        .with_duration_days(28)
        .with_difficulty(Difficulty::Medium)
        .with_macros(Macros::new(20, 5, 75))
        .with_premium(true)
        .with_emoji("🥑"),
        DietRecord::new(
            "mediterranean",
            LocalizedText::new("Akdeniz Diyeti", "Mediterranean Diet"),
            LocalizedText::new(
                "Zeytinyağı, balık ve sebzelere dayalı dengeli beslenme.",
                "Balanced eating built on olive oil, fish, and vegetables.",
            ),
        )
        .with_duration_days(7)
        .with_category("balanced")
        .with_difficulty(Difficulty::Easy)
        .with_macros(Macros::new(20, 45, 35)),
        DietRecord::new(
            "intermittent-fasting",
            LocalizedText::new("Aralıklı Oruç 16:8", "Intermittent Fasting 16:8"),
            LocalizedText::new(
                "Günün 8 saatlik penceresinde yemek.",
                "Eat within an eight hour window each day.",
            ),
        )
        .with_duration_days(14)
        .with_difficulty(Difficulty::Medium)
        .with_macros(Macros::new(25, 45, 30)),
        DietRecord::new(
            "low-carb",
            LocalizedText::new("Düşük Karbonhidrat", "Low Carb Diet"),
            LocalizedText::new(
                "Karbonhidratı azaltan esnek bir plan.",
                "A flexible plan that trims carbohydrates.",
            ),
        )
        .with_duration_days(14)
        .with_difficulty(Difficulty::Easy)
        .with_macros(Macros::new(30, 25, 45)),
        DietRecord::new(
            "vegan",
            LocalizedText::new("Vegan Diyet", "Vegan Diet"),
            LocalizedText::new(
                "Tamamen bitkisel beslenme.",
                "Entirely plant-based eating.",
            ),
        )
        .with_duration_days(7)
        .with_category("vegetarian")
        .with_difficulty(Difficulty::Medium)
        .with_macros(Macros::new(15, 60, 25)),
        DietRecord::new(
            "high-protein",
            LocalizedText::new("Yüksek Protein Diyeti", "High Protein Diet"),
            LocalizedText::new(
                "Kas kütlesini korurken yağ yakımı.",
                "Burn fat while preserving muscle mass.",
            ),
        )
        .with_duration_days(30)
        .with_category("muscle_building")
        .with_difficulty(Difficulty::Hard)
        .with_macros(Macros::new(40, 30, 30))
        .with_premium(true),
    ]
}
