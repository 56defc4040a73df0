// ABOUTME: Prediction report orchestration tying every engine component together
// ABOUTME: Single-user compute_report plus rayon-parallel batch evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Prediction Reports
//!
//! `InsightsEngine::compute_report` is a pure function of the profile, the logs and the
//! explicit `as_of` date: it never reads the system clock and keeps no state between
//! calls, so one engine can serve many users from many threads.

use crate::aggregator::TimeSeriesAggregator;
use crate::calorie::{average_logged_intake, CalorieRecommendation, CalorieRecommender};
use crate::config::insights::{ConfigError, InsightsConfig};
use crate::energy::{EnergyEstimate, EnergyModel};
use crate::forecaster::{TrendForecaster, WeightForecast};
use crate::habits::{
    exercise_adherence, hydration_needs, macro_distribution, meal_timing, progress_snapshot,
    ExerciseAdherence, HydrationNeeds, MacroDistribution, MealTiming, ProgressSnapshot,
};
use crate::plateau::{PlateauRisk, PlateauRiskAssessor};
use crate::recommendation_engine::{
    Recommendation, RecommendationContext, RecommendationGenerator, RecommendationRule,
};
use crate::success::{SuccessInputs, SuccessPrediction, SuccessPredictor};
use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug_span, info, warn};
use wellness_core::errors::AppResult;
use wellness_core::models::{HealthGoal, LogsByKind, Profile};

/// Everything derived for one user on one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionReport {
    /// Date the report describes
    pub as_of: NaiveDate,
    /// BMR and TDEE
    pub energy: EnergyEstimate,
    /// Weight trend and projections
    pub weight_forecast: WeightForecast,
    /// Daily calorie target
    pub calorie_recommendation: CalorieRecommendation,
    /// Stagnation risk
    pub plateau_risk: PlateauRisk,
    /// Probability of reaching the goal
    pub success_prediction: SuccessPrediction,
    /// Prioritized suggestions
    pub recommendations: Vec<Recommendation>,
    /// Daily water needs
    pub hydration: HydrationNeeds,
    /// Weekly exercise habit
    pub exercise_adherence: ExerciseAdherence,
    /// Macronutrient split of the calorie target
    pub macros: MacroDistribution,
    /// Suggested meal schedule
    pub meal_timing: MealTiming,
    /// Standing on the report date
    pub progress: ProgressSnapshot,
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn round1(value: f64) -> f64 {
    round_to(value, 1)
}

impl PredictionReport {
    /// Copy with measurements rounded for display
    ///
    /// Weights, energies, scores and percentages get one decimal place; the daily slope
    /// keeps three and the variance two so small trends stay visible.
    #[must_use]
    pub fn rounded_for_display(&self) -> Self {
        let mut report = self.clone();

        report.energy.bmr = round1(report.energy.bmr);
        report.energy.tdee = round1(report.energy.tdee);

        let forecast = &mut report.weight_forecast;
        forecast.weekly_change_kg = round1(forecast.weekly_change_kg);
        forecast.confidence = round1(forecast.confidence);
        forecast.slope_kg_per_day = forecast.slope_kg_per_day.map(|s| round_to(s, 3));
        forecast.current_weight_kg = forecast.current_weight_kg.map(round1);
        for projection in &mut forecast.projections {
            projection.weight_kg = round1(projection.weight_kg);
        }

        let calories = &mut report.calorie_recommendation;
        calories.tdee = round1(calories.tdee);
        calories.bmr = round1(calories.bmr);
        calories.weekly_target_kg = round_to(calories.weekly_target_kg, 2);
        calories.average_intake_kcal = calories.average_intake_kcal.map(round1);
        calories.plan_adherence_ratio = calories.plan_adherence_ratio.map(|r| round_to(r, 2));

        let plateau = &mut report.plateau_risk;
        plateau.slope_kg_per_day = plateau.slope_kg_per_day.map(|s| round_to(s, 3));
        plateau.variance = plateau.variance.map(|v| round_to(v, 2));

        let success = &mut report.success_prediction;
        success.success_probability = round1(success.success_probability);
        success.signals.trend_alignment = round1(success.signals.trend_alignment);
        success.signals.calorie_adherence = round1(success.signals.calorie_adherence);
        success.signals.logging_consistency = round1(success.signals.logging_consistency);

        report.hydration.daily_ml = report.hydration.daily_ml.round();
        report.exercise_adherence.adherence_rate = round1(report.exercise_adherence.adherence_rate);
        report.exercise_adherence.average_session_minutes =
            report.exercise_adherence.average_session_minutes.round();

        let progress = &mut report.progress;
        progress.current_weight_kg = round1(progress.current_weight_kg);
        progress.starting_weight_kg = progress.starting_weight_kg.map(round1);
        progress.total_change_kg = progress.total_change_kg.map(round1);

        report
    }
}

/// One user's inputs for batch evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Profile snapshot
    pub profile: Profile,
    /// Logs grouped by kind
    #[serde(default)]
    pub logs: LogsByKind,
    /// Report date
    pub as_of: NaiveDate,
}

/// Computes prediction reports
#[derive(Debug, Clone)]
pub struct InsightsEngine {
    config: InsightsConfig,
    recommendations: RecommendationGenerator,
}

impl Default for InsightsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightsEngine {
    /// Engine with the default policy
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(InsightsConfig::default())
    }

    /// Engine with an explicit policy
    #[must_use]
    pub fn with_config(config: InsightsConfig) -> Self {
        let recommendations = RecommendationGenerator::new(config.recommendation.clone());
        Self {
            config,
            recommendations,
        }
    }

    /// Engine with a policy that is validated first
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the policy fails validation
    pub fn try_with_config(config: InsightsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    /// Append a recommendation rule after the built-in ones
    #[must_use]
    pub fn with_rule(mut self, rule: RecommendationRule) -> Self {
        self.recommendations = self.recommendations.with_rule(rule);
        self
    }

    /// Active policy
    #[must_use]
    pub const fn config(&self) -> &InsightsConfig {
        &self.config
    }

    /// Compute the full report for one user
    ///
    /// Entries dated after `as_of` are ignored.
    ///
    /// # Errors
    ///
    /// Returns an `INVALID_PROFILE` error when the profile is non-physical. Sparse logs
    /// never fail; they produce sentinel sections instead.
    pub fn compute_report(
        &self,
        profile: &Profile,
        logs: &LogsByKind,
        as_of: NaiveDate,
    ) -> AppResult<PredictionReport> {
        let _span = debug_span!("compute_report", %as_of, logs = logs.len()).entered();
        let cfg = &self.config;
        let goal = profile.health_goal;
        if goal == HealthGoal::Unrecognized {
            warn!("Unrecognized health goal, treating as maintenance");
        }

        let energy = EnergyModel::new(&cfg.energy).estimate(profile)?;
        let rollups = TimeSeriesAggregator::rollup(logs).up_to(as_of);

        let forecaster = TrendForecaster::new(&cfg.forecast);
        let weight_forecast = forecaster.forecast_weight(&rollups.weight);

        let assessor = PlateauRiskAssessor::new(&cfg.plateau);
        let plateau_window = rollups.weight.window(as_of, assessor.window_days());
        let plateau_trend = forecaster.fit_linear_trend(&plateau_window);
        let plateau_risk = assessor.assess(&plateau_trend, &plateau_window, goal);

        let lookback_days = cfg.aggregation.lookback_days;
        let average_intake = average_logged_intake(&rollups.calories, as_of, lookback_days);
        let calorie_recommendation = CalorieRecommender::new(&cfg.calorie)
            .recommend_from_intake(&energy, goal, average_intake);

        let success_prediction = SuccessPredictor::new(&cfg.success).predict(&SuccessInputs {
            goal,
            forecast: &weight_forecast,
            adherence_ratio: calorie_recommendation.adherence_to_target(),
            logged_days: rollups.logged_days(as_of, lookback_days),
            lookback_days,
        });

        let progress = progress_snapshot(profile, &rollups, as_of);
        let hydration = hydration_needs(profile, &cfg.habits.hydration, progress.glasses_today);
        let exercise = exercise_adherence(
            &rollups.exercise,
            as_of,
            cfg.aggregation.exercise_window_days,
            &cfg.habits.exercise,
        );
        let macros = macro_distribution(
            calorie_recommendation.recommended_calories,
            goal,
            &cfg.calorie.macros,
        );

        let recommendations = self.recommendations.generate(&RecommendationContext {
            goal,
            forecast: &weight_forecast,
            plateau: &plateau_risk,
            calories: &calorie_recommendation,
            success: &success_prediction,
            exercise: &exercise,
            hydration: &hydration,
            progress: &progress,
            habits: &cfg.habits,
        });

        let user_id = logs.user_ids().first().copied();
        info!(
            user.id = ?user_id,
            forecast.trend = ?weight_forecast.trend,
            plateau.risk = ?plateau_risk.risk_level,
            success.probability = success_prediction.success_probability,
            report.recommendations = recommendations.len(),
            "Computed prediction report"
        );

        Ok(PredictionReport {
            as_of,
            energy,
            weight_forecast,
            calorie_recommendation,
            plateau_risk,
            success_prediction,
            recommendations,
            hydration,
            exercise_adherence: exercise,
            macros,
            meal_timing: meal_timing(goal),
            progress,
        })
    }

    /// Compute reports for independent users in parallel, one result per request in order
    #[must_use]
    pub fn compute_reports(&self, requests: &[ReportRequest]) -> Vec<AppResult<PredictionReport>> {
        requests
            .par_iter()
            .map(|request| self.compute_report(&request.profile, &request.logs, request.as_of))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;
    use wellness_core::errors::ErrorCode;
    use wellness_core::models::{ActivityLevel, Gender, WeightLog};

    fn profile() -> Profile {
        Profile {
            age: 30,
            gender: Gender::Male,
            height_cm: 180.0,
            weight_kg: 80.0,
            activity_level: ActivityLevel::Moderate,
            health_goal: HealthGoal::WeightLoss,
        }
    }

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 30).unwrap()
    }

    #[test]
    fn test_empty_logs_give_sentinels() {
        let report = InsightsEngine::new()
            .compute_report(&profile(), &LogsByKind::default(), as_of())
            .unwrap();
        assert!(report.weight_forecast.is_insufficient());
        assert_eq!(
            report.plateau_risk.risk_level,
            crate::plateau::RiskLevel::Unknown
        );
        assert_eq!(report.calorie_recommendation.recommended_calories, 2259);
        assert!((report.progress.current_weight_kg - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_profile_fails() {
        let mut bad = profile();
        bad.height_cm = 0.0;
        let err = InsightsEngine::new()
            .compute_report(&bad, &LogsByKind::default(), as_of())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidProfile);
    }

    #[test]
    fn test_future_logs_are_ignored() {
        let logs = LogsByKind {
            weight: vec![WeightLog {
                date: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
                user_id: Uuid::nil(),
                weight_kg: 70.0,
            }],
            ..LogsByKind::default()
        };
        let report = InsightsEngine::new()
            .compute_report(&profile(), &logs, as_of())
            .unwrap();
        assert_eq!(report.weight_forecast.data_points, 0);
        assert!(report.progress.starting_weight_kg.is_none());
    }

    #[test]
    fn test_display_rounding() {
        let report = InsightsEngine::new()
            .compute_report(&profile(), &LogsByKind::default(), as_of())
            .unwrap()
            .rounded_for_display();
        assert!((report.energy.tdee - 2759.0).abs() < f64::EPSILON);
    }
}
