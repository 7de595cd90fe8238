//! Body-mass index calculation and classification.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Lang;

const UNDERWEIGHT_BELOW: f64 = 18.5;
const NORMAL_BELOW: f64 = 25.0;
const OVERWEIGHT_BELOW: f64 = 30.0;

/// Compute the body-mass index from weight in kilograms and height in
/// centimetres.
///
/// Inputs are expected to be positive and finite; the profile deriver
/// substitutes defaults before calling this.
///
/// # Examples
/// ```
/// use dietwise_core::bmi::body_mass_index;
///
/// let bmi = body_mass_index(90.0, 170.0);
/// assert!((bmi - 31.14).abs() < 0.01);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "BMI is a ratio of weight to squared height"
)]
#[must_use]
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Round a BMI to one decimal place for display.
#[expect(
    clippy::float_arithmetic,
    reason = "rounding to one decimal scales by ten"
)]
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Body-mass classification bands.
///
/// | BMI        | Category    |
/// |------------|-------------|
/// | < 18.5     | underweight |
/// | 18.5–24.9  | normal      |
/// | 25–29.9    | overweight  |
/// | ≥ 30       | obese       |
///
/// # Examples
/// ```
/// use dietwise_core::BmiCategory;
///
/// assert_eq!(BmiCategory::classify(18.5), BmiCategory::Normal);
/// assert_eq!(BmiCategory::classify(30.0), BmiCategory::Obese);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BmiCategory {
    /// BMI below 18.5.
    Underweight,
    /// BMI from 18.5 up to 25.
    Normal,
    /// BMI from 25 up to 30.
    Overweight,
    /// BMI of 30 or more.
    Obese,
}

impl BmiCategory {
    /// Classify an unrounded BMI value.
    #[must_use]
    pub fn classify(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_BELOW {
            Self::Underweight
        } else if bmi < NORMAL_BELOW {
            Self::Normal
        } else if bmi < OVERWEIGHT_BELOW {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Return the category as a `snake_case` `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
        }
    }

    /// Human-readable label in `lang`.
    ///
    /// # Examples
    /// ```
    /// use dietwise_core::{BmiCategory, Lang};
    ///
    /// assert_eq!(BmiCategory::Overweight.label(Lang::Tr), "fazla kilolu");
    /// assert_eq!(BmiCategory::Overweight.label(Lang::En), "Overweight");
    /// ```
    #[must_use]
    pub const fn label(self, lang: Lang) -> &'static str {
        match self {
            Self::Underweight => lang.pick("zayıf", "Underweight"),
            Self::Normal => lang.pick("normal", "Normal"),
            Self::Overweight => lang.pick("fazla kilolu", "Overweight"),
            Self::Obese => lang.pick("obez", "Obese"),
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
