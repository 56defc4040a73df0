// ABOUTME: Trend forecasting configuration for weight projections
// ABOUTME: Projection horizons, minimum history, confidence ramp and stability band
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ConfigError;
use serde::{Deserialize, Serialize};
use wellness_core::constants::forecasting;

/// Configuration for linear trend fitting and projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Days ahead of the last observation to project
    pub horizons_days: Vec<u32>,
    /// Distinct dates required before a trend is fitted
    pub min_distinct_dates: usize,
    /// History length at which confidence is no longer discounted
    pub full_confidence_points: usize,
    /// Weekly change (kg) below which a trend is labelled stable
    pub stable_weekly_change_kg: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizons_days: forecasting::HORIZON_DAYS.to_vec(),
            min_distinct_dates: forecasting::MIN_DISTINCT_DATES,
            full_confidence_points: forecasting::FULL_CONFIDENCE_POINTS,
            stable_weekly_change_kg: forecasting::STABLE_WEEKLY_CHANGE_KG,
        }
    }
}

impl ForecastConfig {
    /// Validate forecasting parameters
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two points are allowed for a fit or the stability
    /// band is negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_distinct_dates < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "min_distinct_dates must be at least 2",
            ));
        }
        if self.full_confidence_points < self.min_distinct_dates {
            return Err(ConfigError::InvalidRange(
                "full_confidence_points must be >= min_distinct_dates",
            ));
        }
        if self.stable_weekly_change_kg < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "stable_weekly_change_kg must not be negative",
            ));
        }
        Ok(())
    }
}
