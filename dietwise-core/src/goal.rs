//! User goals: what a user says they want and what the engine infers.
//!
//! [`StatedGoal`] is the free-form hint collected during onboarding.
//! [`Goal`] is the actionable goal the deriver settles on and the value
//! diets are matched against.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Goal as reported by the user.
///
/// Parsing is forgiving: `muscle` is accepted as an alias of
/// `build_muscle`, and anything unrecognised becomes [`StatedGoal::Other`].
///
/// # Examples
/// ```
/// use dietwise_core::StatedGoal;
///
/// assert_eq!(StatedGoal::parse("muscle"), StatedGoal::BuildMuscle);
/// assert_eq!(StatedGoal::parse("stay_fit"), StatedGoal::Other);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StatedGoal {
    /// Keep the current weight.
    #[default]
    Maintain,
    /// Put on muscle.
    #[cfg_attr(feature = "serde", serde(alias = "muscle"))]
    BuildMuscle,
    /// Lose weight.
    LoseWeight,
    /// Gain weight.
    GainWeight,
    /// Any other label.
    #[cfg_attr(feature = "serde", serde(other))]
    Other,
}

impl StatedGoal {
    /// Parse a stated goal label, mapping unknown labels to
    /// [`StatedGoal::Other`].
    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "maintain" => Self::Maintain,
            "build_muscle" | "muscle" => Self::BuildMuscle,
            "lose_weight" => Self::LoseWeight,
            "gain_weight" => Self::GainWeight,
            _ => Self::Other,
        }
    }
}

/// Actionable goal used for diet matching.
///
/// # Examples
/// ```
/// use dietwise_core::Goal;
///
/// assert_eq!(Goal::LoseWeight.as_str(), "lose_weight");
/// assert_eq!("gain_weight".parse::<Goal>(), Ok(Goal::GainWeight));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Goal {
    /// Reduce body weight.
    LoseWeight,
    /// Increase body weight.
    GainWeight,
    /// Build muscle mass.
    BuildMuscle,
    /// Keep the current weight.
    Maintain,
}

impl Goal {
    /// Every goal, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::LoseWeight,
        Self::GainWeight,
        Self::BuildMuscle,
        Self::Maintain,
    ];

    /// Return the goal as a `snake_case` `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoseWeight => "lose_weight",
            Self::GainWeight => "gain_weight",
            Self::BuildMuscle => "build_muscle",
            Self::Maintain => "maintain",
        }
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lose_weight" => Ok(Self::LoseWeight),
            "gain_weight" => Ok(Self::GainWeight),
            "build_muscle" | "muscle" => Ok(Self::BuildMuscle),
            "maintain" => Ok(Self::Maintain),
            _ => Err(format!("unknown goal '{s}'")),
        }
    }
}
