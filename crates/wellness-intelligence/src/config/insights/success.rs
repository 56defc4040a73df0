// ABOUTME: Goal success scoring configuration
// ABOUTME: Signal weights, target rates of change and key factor selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ConfigError;
use serde::{Deserialize, Serialize};
use wellness_core::constants::success;

/// Weighted-average scoring of trend, adherence and consistency signals
///
/// The 40/35/25 weighting is a tunable policy, not a statistically derived value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuccessConfig {
    /// Weight of trend alignment (0.40)
    pub trend_weight: f64,
    /// Weight of calorie adherence (0.35)
    pub adherence_weight: f64,
    /// Weight of logging consistency (0.25)
    pub consistency_weight: f64,
    /// Loss rate scoring 100 for weight loss goals (kg/week)
    pub loss_target_kg_per_week: f64,
    /// Gain rate scoring 100 for muscle gain goals (kg/week)
    pub gain_target_kg_per_week: f64,
    /// Weekly drift scoring 0 for non-directional goals (kg/week)
    pub maintenance_tolerance_kg_per_week: f64,
    /// Score given to a signal with no data
    pub neutral_score: f64,
    /// Signals below this score are reported as key factors
    pub key_factor_threshold: f64,
    /// Upper bound on reported key factors
    pub max_key_factors: usize,
}

impl Default for SuccessConfig {
    fn default() -> Self {
        Self {
            trend_weight: success::TREND_WEIGHT,
            adherence_weight: success::ADHERENCE_WEIGHT,
            consistency_weight: success::CONSISTENCY_WEIGHT,
            loss_target_kg_per_week: success::LOSS_TARGET_KG_PER_WEEK,
            gain_target_kg_per_week: success::GAIN_TARGET_KG_PER_WEEK,
            maintenance_tolerance_kg_per_week: success::MAINTENANCE_TOLERANCE_KG_PER_WEEK,
            neutral_score: success::NEUTRAL_SCORE,
            key_factor_threshold: success::KEY_FACTOR_THRESHOLD,
            max_key_factors: 3,
        }
    }
}

impl SuccessConfig {
    /// Validate success scoring values
    ///
    /// # Errors
    ///
    /// Returns an error if the weights do not sum to 1.0 or a target is non-positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            self.trend_weight,
            self.adherence_weight,
            self.consistency_weight,
        ];
        if weights.iter().any(|w| *w < 0.0) {
            return Err(ConfigError::InvalidWeights(
                "success weights must not be negative",
            ));
        }
        if (weights.iter().sum::<f64>() - 1.0).abs() > 0.01 {
            return Err(ConfigError::InvalidWeights(
                "success weights must sum to 1.0",
            ));
        }
        if self.loss_target_kg_per_week <= 0.0
            || self.gain_target_kg_per_week <= 0.0
            || self.maintenance_tolerance_kg_per_week <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "target rates of change must be positive",
            ));
        }
        if !(0.0..=100.0).contains(&self.neutral_score)
            || !(0.0..=100.0).contains(&self.key_factor_threshold)
        {
            return Err(ConfigError::ValueOutOfRange(
                "neutral_score and key_factor_threshold must be within 0-100",
            ));
        }
        if !(1..=3).contains(&self.max_key_factors) {
            return Err(ConfigError::ValueOutOfRange(
                "max_key_factors must be between 1 and 3",
            ));
        }
        Ok(())
    }
}
