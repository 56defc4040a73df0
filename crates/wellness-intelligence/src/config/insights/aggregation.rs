// ABOUTME: Look-back window configuration for daily rollups
// ABOUTME: Controls the trailing periods used for adherence, consistency and exercise analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ConfigError;
use serde::{Deserialize, Serialize};
use wellness_core::constants::windows;

/// Trailing windows, in calendar days ending on the report date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Window for calorie adherence and logging consistency
    pub lookback_days: u32,
    /// Window for exercise adherence
    pub exercise_window_days: u32,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            lookback_days: windows::LOOKBACK_DAYS,
            exercise_window_days: windows::EXERCISE_WINDOW_DAYS,
        }
    }
}

impl AggregationConfig {
    /// Validate window lengths
    ///
    /// # Errors
    ///
    /// Returns an error if a window is empty or longer than a year
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=366).contains(&self.lookback_days) {
            return Err(ConfigError::ValueOutOfRange(
                "lookback_days must be between 1 and 366",
            ));
        }
        if !(1..=366).contains(&self.exercise_window_days) {
            return Err(ConfigError::ValueOutOfRange(
                "exercise_window_days must be between 1 and 366",
            ));
        }
        Ok(())
    }
}
