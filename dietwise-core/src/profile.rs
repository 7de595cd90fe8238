//! User profiles and the values derived from them.
//!
//! [`derive`] turns the raw anthropometric inputs of a [`UserProfile`] into a
//! [`DerivedProfile`]: BMI, its classification, the distance to the target
//! weight, and the goal the rest of the engine works towards. Derivation is
//! infallible; unknown inputs fall back to defaults.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bmi::{body_mass_index, round_to_tenth};
use crate::{BmiCategory, Goal, Lang, StatedGoal};

/// Weight assumed when the profile carries none.
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
/// Height assumed when the profile carries none.
pub const DEFAULT_HEIGHT_CM: f64 = 170.0;
/// Excess weight beyond which losing weight outranks the stated goal.
pub const LOSE_DELTA_THRESHOLD_KG: f64 = 5.0;
/// Weight deficit beyond which gaining weight outranks the stated goal.
pub const GAIN_DELTA_THRESHOLD_KG: f64 = -5.0;

/// Raw profile supplied by the caller.
///
/// Numeric fields are optional; absent, zero, negative, or non-finite values
/// count as unknown.
///
/// # Examples
/// ```
/// use dietwise_core::{StatedGoal, UserProfile};
///
/// let profile = UserProfile::new(90.0, 170.0, 75.0).with_stated_goal(StatedGoal::BuildMuscle);
/// assert_eq!(profile.weight_kg, Some(90.0));
/// assert_eq!(profile.stated_goal, StatedGoal::BuildMuscle);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UserProfile {
    /// Current weight in kilograms.
    #[cfg_attr(feature = "serde", serde(default, alias = "weight"))]
    pub weight_kg: Option<f64>,
    /// Height in centimetres.
    #[cfg_attr(feature = "serde", serde(default, alias = "height"))]
    pub height_cm: Option<f64>,
    /// Target weight in kilograms.
    #[cfg_attr(feature = "serde", serde(default, alias = "target_weight"))]
    pub target_weight_kg: Option<f64>,
    /// Self-reported goal. `null` reads as `maintain`.
    #[cfg_attr(
        feature = "serde",
        serde(default, alias = "goal", deserialize_with = "null_as_default")
    )]
    pub stated_goal: StatedGoal,
}

/// Deserialize `null` as the type's default.
#[cfg(feature = "serde")]
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl UserProfile {
    /// Construct a profile with every measurement known and a `maintain`
    /// stated goal.
    #[must_use]
    pub const fn new(weight_kg: f64, height_cm: f64, target_weight_kg: f64) -> Self {
        Self {
            weight_kg: Some(weight_kg),
            height_cm: Some(height_cm),
            target_weight_kg: Some(target_weight_kg),
            stated_goal: StatedGoal::Maintain,
        }
    }

    /// Replace the stated goal while returning `self` for chaining.
    #[must_use]
    pub const fn with_stated_goal(mut self, goal: StatedGoal) -> Self {
        self.stated_goal = goal;
        self
    }
}

/// Values computed from a [`UserProfile`].
///
/// The unrounded BMI drives classification and scoring; [`Self::bmi`]
/// returns the one-decimal value for display.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DerivedProfile {
    #[cfg_attr(feature = "serde", serde(skip))]
    raw_bmi: f64,
    #[cfg_attr(feature = "serde", serde(rename = "bmi"))]
    display_bmi: f64,
    bmi_category: BmiCategory,
    weight_delta_kg: f64,
    inferred_goal: Goal,
}

impl DerivedProfile {
    /// BMI rounded to one decimal.
    #[must_use]
    pub const fn bmi(&self) -> f64 {
        self.display_bmi
    }

    /// Unrounded BMI.
    #[must_use]
    pub const fn raw_bmi(&self) -> f64 {
        self.raw_bmi
    }

    /// Classification of the unrounded BMI.
    #[must_use]
    pub const fn bmi_category(&self) -> BmiCategory {
        self.bmi_category
    }

    /// Current weight minus target weight. Positive values are excess to lose.
    #[must_use]
    pub const fn weight_delta_kg(&self) -> f64 {
        self.weight_delta_kg
    }

    /// Goal inferred from the delta and the stated goal.
    #[must_use]
    pub const fn inferred_goal(&self) -> Goal {
        self.inferred_goal
    }

    /// Kilograms to lose, or zero.
    #[must_use]
    pub const fn weight_to_lose(&self) -> f64 {
        self.weight_delta_kg.max(0.0)
    }

    /// Kilograms to gain, or zero.
    #[must_use]
    pub const fn weight_to_gain(&self) -> f64 {
        if self.weight_delta_kg < 0.0 {
            self.weight_delta_kg.abs()
        } else {
            0.0
        }
    }

    /// One-line goal description shown above the recommendations.
    ///
    /// # Examples
    /// ```
    /// use dietwise_core::{Lang, UserProfile, derive};
    ///
    /// let derived = derive(&UserProfile::new(90.0, 170.0, 75.0));
    /// assert_eq!(derived.goal_summary(Lang::En), "Goal: Lose 15 kg");
    /// assert_eq!(derived.goal_summary(Lang::Tr), "Hedef: 15 kg vermek");
    /// ```
    #[must_use]
    pub fn goal_summary(&self, lang: Lang) -> String {
        let lose = self.weight_to_lose();
        let gain = self.weight_to_gain();
        if lose > 0.0 {
            let lose = round_to_tenth(lose);
            match lang {
                Lang::En => format!("Goal: Lose {lose} kg"),
                Lang::Tr => format!("Hedef: {lose} kg vermek"),
            }
        } else if gain > 0.0 {
            let gain = round_to_tenth(gain);
            match lang {
                Lang::En => format!("Goal: Gain {gain} kg"),
                Lang::Tr => format!("Hedef: {gain} kg almak"),
            }
        } else {
            lang.pick("Hedef: Kiloyu korumak", "Goal: Maintain weight")
                .to_owned()
        }
    }
}

/// Derive BMI, classification, weight delta, and the actionable goal.
///
/// Unknown measurements are replaced before computing: weight becomes
/// [`DEFAULT_WEIGHT_KG`], height becomes [`DEFAULT_HEIGHT_CM`], and the
/// target weight becomes the (possibly defaulted) current weight.
///
/// # Examples
/// ```
/// use dietwise_core::{BmiCategory, Goal, UserProfile, derive};
///
/// let derived = derive(&UserProfile::new(90.0, 170.0, 75.0));
/// assert_eq!(derived.bmi(), 31.1);
/// assert_eq!(derived.bmi_category(), BmiCategory::Obese);
/// assert_eq!(derived.inferred_goal(), Goal::LoseWeight);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "the weight delta is a difference of two measurements"
)]
#[must_use]
pub fn derive(profile: &UserProfile) -> DerivedProfile {
    let weight_kg = known_or(profile.weight_kg, DEFAULT_WEIGHT_KG, "weight_kg");
    let height_cm = known_or(profile.height_cm, DEFAULT_HEIGHT_CM, "height_cm");
    let target_weight_kg = known_or(profile.target_weight_kg, weight_kg, "target_weight_kg");

    let raw_bmi = body_mass_index(weight_kg, height_cm);
    let weight_delta_kg = weight_kg - target_weight_kg;

    DerivedProfile {
        raw_bmi,
        display_bmi: round_to_tenth(raw_bmi),
        bmi_category: BmiCategory::classify(raw_bmi),
        weight_delta_kg,
        inferred_goal: infer_goal(weight_delta_kg, profile.stated_goal),
    }
}

/// Decide the actionable goal; the first matching rule wins.
///
/// 1. Delta above [`LOSE_DELTA_THRESHOLD_KG`]: lose weight.
/// 2. Delta below [`GAIN_DELTA_THRESHOLD_KG`]: gain weight.
/// 3. Stated goal of building muscle: build muscle.
/// 4. Otherwise: maintain.
#[must_use]
pub fn infer_goal(weight_delta_kg: f64, stated_goal: StatedGoal) -> Goal {
    if weight_delta_kg > LOSE_DELTA_THRESHOLD_KG {
        Goal::LoseWeight
    } else if weight_delta_kg < GAIN_DELTA_THRESHOLD_KG {
        Goal::GainWeight
    } else if stated_goal == StatedGoal::BuildMuscle {
        Goal::BuildMuscle
    } else {
        Goal::Maintain
    }
}

fn known_or(value: Option<f64>, fallback: f64, field: &'static str) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        other => {
            log::debug!("profile {field} unknown ({other:?}); using {fallback}");
            fallback
        }
    }
}
