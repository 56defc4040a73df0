// ABOUTME: Calorie target policy configuration per health goal
// ABOUTME: Goal offsets, BMR safety floor, adherence nudge and macronutrient splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calorie Policy Configuration
//!
//! The adherence nudge size and tolerance have no documented derivation; they are kept
//! as named, overridable policy values.

use super::ConfigError;
use serde::{Deserialize, Serialize};
use wellness_core::constants::calorie_policy;
use wellness_core::models::HealthGoal;

/// Calorie recommendation policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalorieConfig {
    /// Offset from TDEE for weight loss (kcal/day, negative)
    pub weight_loss_offset_kcal: i32,
    /// Offset from TDEE for maintenance (kcal/day)
    pub maintenance_offset_kcal: i32,
    /// Offset from TDEE for muscle gain (kcal/day)
    pub muscle_gain_offset_kcal: i32,
    /// Offset from TDEE for endurance (kcal/day)
    pub endurance_offset_kcal: i32,
    /// Recommendations never go below `BMR * bmr_floor_multiplier`
    pub bmr_floor_multiplier: f64,
    /// Relative gap between intake and plan that triggers a nudge
    pub adherence_tolerance: f64,
    /// Largest nudge toward observed intake (kcal/day)
    pub max_adherence_nudge_kcal: i32,
    /// Energy content of one kilogram of body mass
    pub kcal_per_kg_body_mass: f64,
    /// Macronutrient split per goal
    pub macros: MacroSplitConfig,
}

impl Default for CalorieConfig {
    fn default() -> Self {
        Self {
            weight_loss_offset_kcal: calorie_policy::WEIGHT_LOSS_OFFSET_KCAL,
            maintenance_offset_kcal: 0,
            muscle_gain_offset_kcal: calorie_policy::MUSCLE_GAIN_OFFSET_KCAL,
            endurance_offset_kcal: calorie_policy::ENDURANCE_OFFSET_KCAL,
            bmr_floor_multiplier: calorie_policy::BMR_FLOOR_MULTIPLIER,
            adherence_tolerance: calorie_policy::ADHERENCE_TOLERANCE,
            max_adherence_nudge_kcal: calorie_policy::MAX_ADHERENCE_NUDGE_KCAL,
            kcal_per_kg_body_mass: calorie_policy::KCAL_PER_KG_BODY_MASS,
            macros: MacroSplitConfig::default(),
        }
    }
}

impl CalorieConfig {
    /// Offset from TDEE for a goal; unrecognized goals are treated as maintenance
    #[must_use]
    pub const fn offset_for(&self, goal: HealthGoal) -> i32 {
        match goal {
            HealthGoal::WeightLoss => self.weight_loss_offset_kcal,
            HealthGoal::MuscleGain => self.muscle_gain_offset_kcal,
            HealthGoal::Endurance => self.endurance_offset_kcal,
            HealthGoal::Maintenance | HealthGoal::Unrecognized => self.maintenance_offset_kcal,
        }
    }

    /// Validate calorie policy values
    ///
    /// # Errors
    ///
    /// Returns an error if a policy value is non-physical or the macro splits are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weight_loss_offset_kcal > 0 {
            return Err(ConfigError::ValueOutOfRange(
                "weight_loss_offset_kcal must not be positive",
            ));
        }
        if self.muscle_gain_offset_kcal < 0 {
            return Err(ConfigError::ValueOutOfRange(
                "muscle_gain_offset_kcal must not be negative",
            ));
        }
        if !(0.5..=2.0).contains(&self.bmr_floor_multiplier) {
            return Err(ConfigError::ValueOutOfRange(
                "bmr_floor_multiplier must be between 0.5 and 2.0",
            ));
        }
        if !(0.0..1.0).contains(&self.adherence_tolerance) {
            return Err(ConfigError::ValueOutOfRange(
                "adherence_tolerance must be in [0, 1)",
            ));
        }
        if self.max_adherence_nudge_kcal < 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_adherence_nudge_kcal must not be negative",
            ));
        }
        if self.kcal_per_kg_body_mass <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "kcal_per_kg_body_mass must be positive",
            ));
        }
        self.macros.validate()
    }
}

/// Share of calories from protein and fat; carbohydrates take the remainder
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Protein share (0-1)
    pub protein: f64,
    /// Fat share (0-1)
    pub fat: f64,
}

impl MacroSplit {
    /// Carbohydrate share (0-1)
    #[must_use]
    pub fn carbs(&self) -> f64 {
        1.0 - self.protein - self.fat
    }
}

/// Macronutrient split per goal
///
/// References:
/// - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204
/// - Carbohydrate: Burke et al. (2011) DOI: 10.1080/02640414.2011.585473
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacroSplitConfig {
    /// Weight loss split (25% protein, 30% fat)
    pub weight_loss: MacroSplit,
    /// Muscle gain split (30% protein, 25% fat)
    pub muscle_gain: MacroSplit,
    /// Split for every other goal (20% protein, 25% fat)
    pub general: MacroSplit,
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            weight_loss: MacroSplit {
                protein: 0.25,
                fat: 0.30,
            },
            muscle_gain: MacroSplit {
                protein: 0.30,
                fat: 0.25,
            },
            general: MacroSplit {
                protein: 0.20,
                fat: 0.25,
            },
        }
    }
}

impl MacroSplitConfig {
    /// Split for a goal
    #[must_use]
    pub const fn split_for(&self, goal: HealthGoal) -> MacroSplit {
        match goal {
            HealthGoal::WeightLoss => self.weight_loss,
            HealthGoal::MuscleGain => self.muscle_gain,
            HealthGoal::Maintenance | HealthGoal::Endurance | HealthGoal::Unrecognized => {
                self.general
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for split in [self.weight_loss, self.muscle_gain, self.general] {
            if split.protein < 0.0 || split.fat < 0.0 || split.carbs() < 0.0 {
                return Err(ConfigError::InvalidWeights(
                    "protein and fat shares must be non-negative and sum to at most 1.0",
                ));
            }
        }
        Ok(())
    }
}
