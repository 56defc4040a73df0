// ABOUTME: Energy model computing BMR and TDEE from a profile snapshot
// ABOUTME: Mifflin-St Jeor resting energy scaled by configurable activity factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Expenditure
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy
//!   expenditure in healthy individuals. *American Journal of Clinical Nutrition*,
//!   51(2), 241-247. <https://doi.org/10.1093/ajcn/51.2.241>
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology:
//!   Nutrition, Energy, and Human Performance*. Lippincott Williams & Wilkins.

use crate::config::insights::EnergyConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use wellness_core::errors::ProfileError;
use wellness_core::models::{ActivityLevel, Gender, Profile};

/// Resting and total daily energy expenditure for one profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyEstimate {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// Multiplier applied to BMR
    pub activity_factor: f64,
}

/// Computes BMR and TDEE
pub struct EnergyModel<'a> {
    config: &'a EnergyConfig,
}

impl<'a> EnergyModel<'a> {
    /// Create a model over the given coefficients
    #[must_use]
    pub const fn new(config: &'a EnergyConfig) -> Self {
        Self { config }
    }

    /// Calculate Basal Metabolic Rate using the Mifflin-St Jeor formula
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError`] when weight, height or age are non-physical, or when the
    /// formula yields a non-positive rate for an extreme combination of values
    pub fn compute_bmr(&self, profile: &Profile) -> Result<f64, ProfileError> {
        profile.validate()?;
        let bmr = &self.config.bmr;

        let weight_component = bmr.msj_weight_coef * profile.weight_kg;
        let height_component = bmr.msj_height_coef * profile.height_cm;
        let age_component = bmr.msj_age_coef * f64::from(profile.age);

        let gender_constant = match profile.gender {
            Gender::Male => bmr.msj_male_constant,
            Gender::Female => bmr.msj_female_constant,
        };

        let value = weight_component + height_component + age_component + gender_constant;
        if !value.is_finite() || value <= 0.0 {
            return Err(ProfileError::NonPhysicalBmr(value));
        }
        Ok(value)
    }

    /// Activity multiplier for a level; unknown levels fall back to moderate
    #[must_use]
    pub fn activity_factor(&self, level: ActivityLevel) -> f64 {
        self.config
            .activity_factors
            .factor_for(level)
            .unwrap_or_else(|| {
                warn!(
                    fallback = self.config.activity_factors.fallback,
                    "Unrecognized activity level, using fallback factor"
                );
                self.config.activity_factors.fallback
            })
    }

    /// Calculate Total Daily Energy Expenditure from BMR and activity level
    #[must_use]
    pub fn compute_tdee(&self, bmr: f64, level: ActivityLevel) -> f64 {
        bmr * self.activity_factor(level)
    }

    /// BMR and TDEE for a profile
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError`] if the profile is non-physical
    pub fn estimate(&self, profile: &Profile) -> Result<EnergyEstimate, ProfileError> {
        let bmr = self.compute_bmr(profile)?;
        let activity_factor = self.activity_factor(profile.activity_level);
        let tdee = bmr * activity_factor;
        debug!(bmr, tdee, activity_factor, "Computed energy estimate");
        Ok(EnergyEstimate {
            bmr,
            tdee,
            activity_factor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wellness_core::models::HealthGoal;

    fn profile(gender: Gender) -> Profile {
        Profile {
            age: 30,
            gender,
            height_cm: 180.0,
            weight_kg: 80.0,
            activity_level: ActivityLevel::Moderate,
            health_goal: HealthGoal::WeightLoss,
        }
    }

    #[test]
    fn test_male_bmr_matches_formula() {
        let config = EnergyConfig::default();
        let model = EnergyModel::new(&config);
        let bmr = model.compute_bmr(&profile(Gender::Male)).unwrap();
        assert!((bmr - 1780.0).abs() < 1e-9);
        let tdee = model.compute_tdee(bmr, ActivityLevel::Moderate);
        assert!((tdee - 2759.0).abs() < 1e-6);
    }

    #[test]
    fn test_female_constant_is_166_lower() {
        let config = EnergyConfig::default();
        let model = EnergyModel::new(&config);
        let male = model.compute_bmr(&profile(Gender::Male)).unwrap();
        let female = model.compute_bmr(&profile(Gender::Female)).unwrap();
        assert!((male - female - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_activity_defaults_to_moderate() {
        let config = EnergyConfig::default();
        let model = EnergyModel::new(&config);
        let known = model.compute_tdee(1500.0, ActivityLevel::Moderate);
        let unknown = model.compute_tdee(1500.0, ActivityLevel::Unrecognized);
        assert!((known - unknown).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_positive_bmr_is_rejected() {
        let config = EnergyConfig::default();
        let model = EnergyModel::new(&config);
        let tiny = Profile {
            age: 90,
            gender: Gender::Female,
            height_cm: 20.0,
            weight_kg: 5.0,
            ..profile(Gender::Female)
        };
        assert!(matches!(
            model.compute_bmr(&tiny),
            Err(ProfileError::NonPhysicalBmr(_))
        ));
    }
}
