// ABOUTME: Plateau risk configuration for stagnation classification
// ABOUTME: Trailing window and slope thresholds measured toward the goal direction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ConfigError;
use serde::{Deserialize, Serialize};
use wellness_core::constants::plateau;

/// Thresholds are expressed as progress toward the goal in kg/day, so a weight loss
/// slope of -0.08 and a muscle gain slope of +0.08 both count as 0.08.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlateauConfig {
    /// Trailing window examined, in days
    pub window_days: u32,
    /// Progress at or below this is high risk
    pub high_risk_progress_kg_per_day: f64,
    /// Progress at or above this is low risk
    pub low_risk_progress_kg_per_day: f64,
}

impl Default for PlateauConfig {
    fn default() -> Self {
        Self {
            window_days: plateau::WINDOW_DAYS,
            high_risk_progress_kg_per_day: plateau::HIGH_RISK_SLOPE_KG_PER_DAY,
            low_risk_progress_kg_per_day: plateau::LOW_RISK_SLOPE_KG_PER_DAY,
        }
    }
}

impl PlateauConfig {
    /// Validate plateau thresholds
    ///
    /// # Errors
    ///
    /// Returns an error if the window is too short or thresholds are out of order
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_days < 7 {
            return Err(ConfigError::ValueOutOfRange(
                "plateau window_days must be at least 7",
            ));
        }
        if self.high_risk_progress_kg_per_day >= self.low_risk_progress_kg_per_day {
            return Err(ConfigError::InvalidRange(
                "high_risk_progress must be < low_risk_progress",
            ));
        }
        Ok(())
    }
}
