// ABOUTME: Health metrics intelligence: energy, forecasting, plateau, calories, success, advice
// ABOUTME: Pure, synchronous engine turning a profile and raw logs into a prediction report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Wellness Intelligence
//!
//! Components, leaves first:
//!
//! - **aggregator**: per-day rollups of weight, calories, hydration and exercise logs
//! - **energy**: BMR (Mifflin-St Jeor) and TDEE
//! - **forecaster**: linear weight trend with projections and confidence
//! - **plateau**: stagnation risk from the recent trend
//! - **calorie**: daily calorie target with safety floor and adherence nudge
//! - **success**: composite goal success probability with key factors
//! - **`recommendation_engine`**: ordered rule table producing prioritized advice
//! - **habits**: hydration, exercise adherence, macros and meal timing
//! - **report**: `InsightsEngine` wiring it all into a `PredictionReport`

/// Daily rollups of raw log entries
pub mod aggregator;
/// Daily calorie target
pub mod calorie;
/// Engine policy configuration
pub mod config;
/// BMR and TDEE
pub mod energy;
/// Linear trend fitting and projection
pub mod forecaster;
/// Hydration, exercise adherence, macros and progress
pub mod habits;
/// Plateau risk classification
pub mod plateau;
/// Rule-based recommendations
pub mod recommendation_engine;
/// Report orchestration and batch evaluation
pub mod report;
/// Regression and variance helpers
pub mod statistics;
/// Goal success prediction
pub mod success;

pub use aggregator::{DailyRollups, DailySeries, SeriesPoint, TimeSeriesAggregator};
pub use calorie::{CalorieRecommendation, CalorieRecommender};
pub use config::{ConfigError, InsightsConfig};
pub use energy::{EnergyEstimate, EnergyModel};
pub use forecaster::{
    FittedTrend, LinearTrend, TrendForecaster, TrendLabel, WeightForecast, WeightProjection,
};
pub use habits::{
    ExerciseAdherence, HydrationNeeds, MacroDistribution, MealSlot, MealTiming, ProgressSnapshot,
};
pub use plateau::{PlateauRisk, PlateauRiskAssessor, RiskLevel};
pub use recommendation_engine::{
    Priority, Recommendation, RecommendationCategory, RecommendationContext,
    RecommendationGenerator, RecommendationRule,
};
pub use report::{InsightsEngine, PredictionReport, ReportRequest};
pub use success::{SignalScores, SuccessInputs, SuccessPrediction, SuccessPredictor, SuccessSignal};
