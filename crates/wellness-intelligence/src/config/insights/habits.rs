// ABOUTME: Hydration and exercise habit configuration
// ABOUTME: Water needs per body weight and activity, weekly exercise day targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ConfigError;
use serde::{Deserialize, Serialize};
use wellness_core::constants::{exercise, hydration};
use wellness_core::models::ActivityLevel;

/// Habit targets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HabitsConfig {
    /// Water intake heuristics
    pub hydration: HydrationConfig,
    /// Exercise frequency heuristics
    pub exercise: ExerciseConfig,
}

impl HabitsConfig {
    /// Validate habit targets
    ///
    /// # Errors
    ///
    /// Returns an error if a volume is non-positive or exercise targets are out of order
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hydration.ml_per_kg <= 0.0 || self.hydration.glass_ml <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "hydration ml_per_kg and glass_ml must be positive",
            ));
        }
        if self.exercise.min_weekly_days >= self.exercise.excellent_weekly_days {
            return Err(ConfigError::InvalidRange(
                "exercise min_weekly_days must be < excellent_weekly_days",
            ));
        }
        Ok(())
    }
}

/// Water intake heuristics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HydrationConfig {
    /// Baseline water per kg of body weight (ml)
    pub ml_per_kg: f64,
    /// Volume of one glass (ml)
    pub glass_ml: f64,
    /// Glasses per day below which a reminder is issued
    pub min_daily_glasses: u32,
    /// Extra water for sedentary users (ml)
    pub sedentary_allowance_ml: f64,
    /// Extra water for lightly active users (ml)
    pub light_allowance_ml: f64,
    /// Extra water for moderately active users, also used for unknown levels (ml)
    pub moderate_allowance_ml: f64,
    /// Extra water for active users (ml)
    pub active_allowance_ml: f64,
    /// Extra water for very active users (ml)
    pub very_active_allowance_ml: f64,
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            ml_per_kg: hydration::ML_PER_KG,
            glass_ml: hydration::GLASS_ML,
            min_daily_glasses: hydration::MIN_DAILY_GLASSES,
            sedentary_allowance_ml: 0.0,
            light_allowance_ml: 250.0,
            moderate_allowance_ml: 500.0,
            active_allowance_ml: 750.0,
            very_active_allowance_ml: 1000.0,
        }
    }
}

impl HydrationConfig {
    /// Activity allowance for a level
    #[must_use]
    pub const fn allowance_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary_allowance_ml,
            ActivityLevel::Light => self.light_allowance_ml,
            ActivityLevel::Moderate | ActivityLevel::Unrecognized => self.moderate_allowance_ml,
            ActivityLevel::Active => self.active_allowance_ml,
            ActivityLevel::VeryActive => self.very_active_allowance_ml,
        }
    }
}

/// Exercise frequency heuristics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExerciseConfig {
    /// Fewer distinct exercise days than this per window triggers a nudge
    pub min_weekly_days: usize,
    /// At least this many distinct exercise days is praised
    pub excellent_weekly_days: usize,
    /// Suggested session length without history (minutes)
    pub default_session_minutes: u32,
}

impl Default for ExerciseConfig {
    fn default() -> Self {
        Self {
            min_weekly_days: exercise::MIN_WEEKLY_DAYS,
            excellent_weekly_days: exercise::EXCELLENT_WEEKLY_DAYS,
            default_session_minutes: exercise::DEFAULT_SESSION_MINUTES,
        }
    }
}
