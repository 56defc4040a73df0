// ABOUTME: Main library entry point for the wellness insights engine
// ABOUTME: Re-exports the core and intelligence crates plus logging and request loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Wellness Engine
//!
//! Turns a user's profile and raw health logs (weight, calories, hydration, exercise)
//! into a prediction report: BMR/TDEE, a weight forecast, plateau risk, a daily calorie
//! target, goal success probability and prioritized recommendations.
//!
//! ## Architecture
//!
//! - **`wellness_core`**: errors, profile and log models, heuristic constants
//! - **`wellness_intelligence`**: the engine components and `InsightsEngine`
//! - **logging**: structured `tracing` setup for the binary
//! - **request**: JSON request files for the CLI
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use wellness_engine::models::{ActivityLevel, Gender, HealthGoal, LogsByKind, Profile};
//! use wellness_engine::InsightsEngine;
//!
//! let profile = Profile {
//!     age: 30,
//!     gender: Gender::Male,
//!     height_cm: 180.0,
//!     weight_kg: 80.0,
//!     activity_level: ActivityLevel::Moderate,
//!     health_goal: HealthGoal::WeightLoss,
//! };
//! let as_of = NaiveDate::from_ymd_opt(2024, 4, 30).unwrap();
//! let report = InsightsEngine::new()
//!     .compute_report(&profile, &LogsByKind::default(), as_of)
//!     .unwrap();
//! assert_eq!(report.calorie_recommendation.recommended_calories, 2259);
//! ```

/// Structured logging configuration
pub mod logging;

/// Loading report requests from JSON files
pub mod request;

pub use wellness_core::{constants, errors, models};
pub use wellness_intelligence::{
    aggregator, calorie, config, energy, forecaster, habits, plateau, recommendation_engine,
    report, statistics, success,
};
pub use wellness_intelligence::{InsightsConfig, InsightsEngine, PredictionReport, ReportRequest};
