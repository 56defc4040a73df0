// ABOUTME: User profile snapshot used for energy and goal calculations
// ABOUTME: Gender, ActivityLevel and HealthGoal enums with lossy parsing fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::mifflin_st_jeor::MIN_AGE_YEARS;
use crate::errors::ProfileError;
use serde::{Deserialize, Serialize};

/// Biological sex used by the resting energy equation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male constant (+5 kcal)
    Male,
    /// Female constant (-161 kcal)
    Female,
}

/// Habitual activity level used to scale BMR into TDEE
///
/// Deserialization never fails: unknown strings become [`ActivityLevel::Unrecognized`],
/// which energy calculations treat as moderate activity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Hard daily exercise or physical job
    VeryActive,
    /// Missing or garbled value supplied by the caller
    Unrecognized,
}

impl ActivityLevel {
    /// Parse activity level from string, accepting the long-form aliases
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "sedentary" => Self::Sedentary,
            "light" | "lightly_active" => Self::Light,
            "moderate" | "moderately_active" => Self::Moderate,
            "active" => Self::Active,
            "very_active" | "extremely_active" | "extra_active" => Self::VeryActive,
            _ => Self::Unrecognized,
        }
    }

    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl From<String> for ActivityLevel {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

/// Stated health goal driving calorie targets and trend expectations
///
/// Unknown strings become [`HealthGoal::Unrecognized`], which the engine treats as
/// maintenance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum HealthGoal {
    /// Caloric deficit, downward weight trend expected
    WeightLoss,
    /// Caloric balance, flat weight trend expected
    Maintenance,
    /// Caloric surplus, upward weight trend expected
    MuscleGain,
    /// Mild surplus to fuel endurance training
    Endurance,
    /// Missing or garbled value supplied by the caller
    Unrecognized,
}

impl HealthGoal {
    /// Parse health goal from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "weight_loss" | "lose_weight" => Self::WeightLoss,
            "maintenance" | "maintain" => Self::Maintenance,
            "muscle_gain" | "weight_gain" | "gain_muscle" => Self::MuscleGain,
            "endurance" => Self::Endurance,
            _ => Self::Unrecognized,
        }
    }

    /// Expected sign of the weight trend: -1 for loss, +1 for gain, 0 otherwise
    #[must_use]
    pub const fn weight_direction(self) -> i8 {
        match self {
            Self::WeightLoss => -1,
            Self::MuscleGain => 1,
            Self::Maintenance | Self::Endurance | Self::Unrecognized => 0,
        }
    }

    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::Maintenance => "maintenance",
            Self::MuscleGain => "muscle_gain",
            Self::Endurance => "endurance",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl From<String> for HealthGoal {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

/// Immutable profile snapshot for a single computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Age in whole years
    pub age: u32,
    /// Biological sex for the BMR constant
    pub gender: Gender,
    /// Height in centimeters
    pub height_cm: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Habitual activity level
    pub activity_level: ActivityLevel,
    /// Stated health goal
    pub health_goal: HealthGoal,
}

impl Profile {
    /// Check that the snapshot holds physical values
    ///
    /// # Errors
    ///
    /// Returns the first offending field as a [`ProfileError`]
    pub fn validate(&self) -> Result<(), ProfileError> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(ProfileError::NonPositiveWeight(self.weight_kg));
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(ProfileError::NonPositiveHeight(self.height_cm));
        }
        if self.age < MIN_AGE_YEARS {
            return Err(ProfileError::AgeOutOfRange {
                min: MIN_AGE_YEARS,
                actual: self.age,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile {
            age: 30,
            gender: Gender::Male,
            height_cm: 180.0,
            weight_kg: 80.0,
            activity_level: ActivityLevel::Moderate,
            health_goal: HealthGoal::WeightLoss,
        }
    }

    #[test]
    fn test_activity_level_aliases() {
        assert_eq!(
            ActivityLevel::from_str_lossy("lightly_active"),
            ActivityLevel::Light
        );
        assert_eq!(
            ActivityLevel::from_str_lossy("Very Active"),
            ActivityLevel::VeryActive
        );
        assert_eq!(
            ActivityLevel::from_str_lossy("couch"),
            ActivityLevel::Unrecognized
        );
    }

    #[test]
    fn test_unknown_enum_values_deserialize() {
        let json = r#"{"age":30,"gender":"male","height_cm":180.0,"weight_kg":80.0,
            "activity_level":"marathon_monk","health_goal":"world_domination"}"#;
        let parsed: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.activity_level, ActivityLevel::Unrecognized);
        assert_eq!(parsed.health_goal, HealthGoal::Unrecognized);
    }

    #[test]
    fn test_validate_rejects_non_physical_values() {
        let mut p = profile();
        assert!(p.validate().is_ok());

        p.weight_kg = 0.0;
        assert_eq!(p.validate(), Err(ProfileError::NonPositiveWeight(0.0)));

        p = profile();
        p.height_cm = -1.0;
        assert!(matches!(
            p.validate(),
            Err(ProfileError::NonPositiveHeight(_))
        ));

        p = profile();
        p.age = 0;
        assert!(matches!(
            p.validate(),
            Err(ProfileError::AgeOutOfRange { actual: 0, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_nan_weight() {
        let mut p = profile();
        p.weight_kg = f64::NAN;
        assert!(p.validate().is_err());
    }
}
