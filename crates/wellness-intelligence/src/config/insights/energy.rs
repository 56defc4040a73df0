// ABOUTME: Energy expenditure configuration for BMR and TDEE estimation
// ABOUTME: Mifflin-St Jeor coefficients and activity factor multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Configuration
//!
//! Coefficients for the Mifflin-St Jeor resting energy equation and the activity
//! multipliers that scale it into total daily energy expenditure.

use super::ConfigError;
use serde::{Deserialize, Serialize};
use wellness_core::constants::{activity_factors, mifflin_st_jeor};
use wellness_core::models::ActivityLevel;

/// Energy model configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyConfig {
    /// Resting energy equation coefficients
    pub bmr: BmrConfig,
    /// Activity multipliers
    pub activity_factors: ActivityFactorsConfig,
}

/// Mifflin-St Jeor coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: mifflin_st_jeor::WEIGHT_COEF,
            msj_height_coef: mifflin_st_jeor::HEIGHT_COEF,
            msj_age_coef: mifflin_st_jeor::AGE_COEF,
            msj_male_constant: mifflin_st_jeor::MALE_CONSTANT,
            msj_female_constant: mifflin_st_jeor::FEMALE_CONSTANT,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub light: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderate: f64,
    /// Active (6-7 days/week): 1.725
    pub active: f64,
    /// Very active (hard training or physical job): 1.9
    pub very_active: f64,
    /// Factor used when the activity level is not recognized
    pub fallback: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: activity_factors::SEDENTARY,
            light: activity_factors::LIGHT,
            moderate: activity_factors::MODERATE,
            active: activity_factors::ACTIVE,
            very_active: activity_factors::VERY_ACTIVE,
            fallback: activity_factors::MODERATE,
        }
    }
}

impl ActivityFactorsConfig {
    /// Multiplier for a known activity level, `None` when unrecognized
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> Option<f64> {
        match level {
            ActivityLevel::Sedentary => Some(self.sedentary),
            ActivityLevel::Light => Some(self.light),
            ActivityLevel::Moderate => Some(self.moderate),
            ActivityLevel::Active => Some(self.active),
            ActivityLevel::VeryActive => Some(self.very_active),
            ActivityLevel::Unrecognized => None,
        }
    }

    /// Validate that factors are at least 1.0 and ascend with activity
    ///
    /// # Errors
    ///
    /// Returns an error if a factor is below 1.0 or the ordering is broken
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ordered = [
            self.sedentary,
            self.light,
            self.moderate,
            self.active,
            self.very_active,
        ];
        if ordered.iter().chain([&self.fallback]).any(|f| *f < 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "activity factors must be at least 1.0",
            ));
        }
        if ordered.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(ConfigError::InvalidRange(
                "activity factors must ascend from sedentary to very_active",
            ));
        }
        Ok(())
    }
}
