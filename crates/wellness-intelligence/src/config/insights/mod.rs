// ABOUTME: Insights engine configuration for health metric analysis and recommendations
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Insights Configuration Module
//!
//! Provides type-safe configuration for every engine component. Defaults carry the
//! documented heuristic constants; `WELLNESS_*` environment variables override them.
//!
//! # Module Structure
//!
//! - `energy` - Mifflin-St Jeor coefficients and activity factors
//! - `aggregation` - Look-back windows
//! - `forecast` - Projection horizons and confidence ramp
//! - `plateau` - Stagnation thresholds
//! - `calorie` - Goal offsets, safety floor, adherence nudge and macro splits
//! - `success` - Signal weights and key factors
//! - `habits` - Hydration and exercise targets
//! - `recommendation` - Rule thresholds and limits

pub mod aggregation;
pub mod calorie;
pub mod energy;
pub mod error;
pub mod forecast;
pub mod habits;
pub mod plateau;
pub mod recommendation;
pub mod success;

pub use aggregation::AggregationConfig;
pub use calorie::{CalorieConfig, MacroSplit, MacroSplitConfig};
pub use energy::{ActivityFactorsConfig, BmrConfig, EnergyConfig};
pub use error::ConfigError;
pub use forecast::ForecastConfig;
pub use habits::{ExerciseConfig, HabitsConfig, HydrationConfig};
pub use plateau::PlateauConfig;
pub use recommendation::RecommendationConfig;
pub use success::SuccessConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INSIGHTS_CONFIG: OnceLock<InsightsConfig> = OnceLock::new();

/// Main insights configuration container
///
/// Sections missing from a serialized config take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightsConfig {
    /// BMR and TDEE estimation
    pub energy: EnergyConfig,
    /// Trailing analysis windows
    pub aggregation: AggregationConfig,
    /// Weight trend forecasting
    pub forecast: ForecastConfig,
    /// Plateau classification
    pub plateau: PlateauConfig,
    /// Calorie target policy
    pub calorie: CalorieConfig,
    /// Goal success scoring
    pub success: SuccessConfig,
    /// Hydration and exercise targets
    pub habits: HabitsConfig,
    /// Recommendation rules
    pub recommendation: RecommendationConfig,
}

impl InsightsConfig {
    /// Get the global configuration instance
    #[must_use]
    pub fn global() -> &'static Self {
        INSIGHTS_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load insights config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first sub-configuration error found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.energy.activity_factors.validate()?;
        self.aggregation.validate()?;
        self.forecast.validate()?;
        self.plateau.validate()?;
        self.calorie.validate()?;
        self.success.validate()?;
        self.habits.validate()?;
        self.recommendation.validate()?;
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Windows
        Self::apply_env_var(
            "WELLNESS_LOOKBACK_DAYS",
            &mut self.aggregation.lookback_days,
        )?;
        Self::apply_env_var(
            "WELLNESS_EXERCISE_WINDOW_DAYS",
            &mut self.aggregation.exercise_window_days,
        )?;

        // Calorie policy
        Self::apply_env_var(
            "WELLNESS_CALORIE_WEIGHT_LOSS_OFFSET",
            &mut self.calorie.weight_loss_offset_kcal,
        )?;
        Self::apply_env_var(
            "WELLNESS_CALORIE_MUSCLE_GAIN_OFFSET",
            &mut self.calorie.muscle_gain_offset_kcal,
        )?;
        Self::apply_env_var(
            "WELLNESS_CALORIE_ENDURANCE_OFFSET",
            &mut self.calorie.endurance_offset_kcal,
        )?;
        Self::apply_env_var(
            "WELLNESS_CALORIE_BMR_FLOOR_MULTIPLIER",
            &mut self.calorie.bmr_floor_multiplier,
        )?;
        Self::apply_env_var(
            "WELLNESS_CALORIE_ADHERENCE_TOLERANCE",
            &mut self.calorie.adherence_tolerance,
        )?;
        Self::apply_env_var(
            "WELLNESS_CALORIE_MAX_NUDGE",
            &mut self.calorie.max_adherence_nudge_kcal,
        )?;

        // Success weights
        Self::apply_env_var(
            "WELLNESS_SUCCESS_TREND_WEIGHT",
            &mut self.success.trend_weight,
        )?;
        Self::apply_env_var(
            "WELLNESS_SUCCESS_ADHERENCE_WEIGHT",
            &mut self.success.adherence_weight,
        )?;
        Self::apply_env_var(
            "WELLNESS_SUCCESS_CONSISTENCY_WEIGHT",
            &mut self.success.consistency_weight,
        )?;

        // Plateau thresholds
        Self::apply_env_var(
            "WELLNESS_PLATEAU_WINDOW_DAYS",
            &mut self.plateau.window_days,
        )?;
        Self::apply_env_var(
            "WELLNESS_PLATEAU_HIGH_RISK_PROGRESS",
            &mut self.plateau.high_risk_progress_kg_per_day,
        )?;
        Self::apply_env_var(
            "WELLNESS_PLATEAU_LOW_RISK_PROGRESS",
            &mut self.plateau.low_risk_progress_kg_per_day,
        )?;

        // Habits
        Self::apply_env_var(
            "WELLNESS_HYDRATION_MIN_GLASSES",
            &mut self.habits.hydration.min_daily_glasses,
        )?;
        Self::apply_env_var(
            "WELLNESS_EXERCISE_MIN_WEEKLY_DAYS",
            &mut self.habits.exercise.min_weekly_days,
        )?;

        Self::apply_env_var(
            "WELLNESS_MAX_RECOMMENDATIONS",
            &mut self.recommendation.max_recommendations,
        )?;

        Ok(self)
    }
}
