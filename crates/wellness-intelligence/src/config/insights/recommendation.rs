// ABOUTME: Recommendation rule thresholds and output limits
// ABOUTME: Controls when rapid-loss, calorie and logging-consistency rules fire
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Recommendation engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Upper bound on recommendations in one report
    pub max_recommendations: usize,
    /// Weekly loss (kg) beyond which a rapid-loss warning fires
    pub rapid_loss_kg_per_week: f64,
    /// Relative gap between intake and target that triggers a calorie card
    pub calorie_tolerance: f64,
    /// Consistency scores below this trigger a logging reminder
    pub low_consistency_score: f64,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            max_recommendations: 10,
            rapid_loss_kg_per_week: 1.0,
            calorie_tolerance: 0.10,
            low_consistency_score: 50.0,
        }
    }
}

impl RecommendationConfig {
    /// Validate recommendation thresholds
    ///
    /// # Errors
    ///
    /// Returns an error if a threshold is out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_recommendations == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_recommendations must be at least 1",
            ));
        }
        if self.rapid_loss_kg_per_week <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "rapid_loss_kg_per_week must be positive",
            ));
        }
        if !(0.0..1.0).contains(&self.calorie_tolerance) {
            return Err(ConfigError::ValueOutOfRange(
                "calorie_tolerance must be in [0, 1)",
            ));
        }
        if !(0.0..=100.0).contains(&self.low_consistency_score) {
            return Err(ConfigError::ValueOutOfRange(
                "low_consistency_score must be within 0-100",
            ));
        }
        Ok(())
    }
}
