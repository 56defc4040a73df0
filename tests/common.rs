// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, profiles and synthetic log series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `wellness_engine`

use chrono::{Days, NaiveDate};
use std::sync::Once;
use uuid::Uuid;
use wellness_engine::models::{
    ActivityLevel, CalorieLog, ExerciseLog, Gender, HealthGoal, HydrationLog, LogsByKind,
    Profile, WeightLog,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; tests stay quiet by default
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Fixed test user
pub fn user_id() -> Uuid {
    Uuid::from_u128(0x5eed_0000_0000_0000_0000_0000_0000_0001)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// `days` after `start`
pub fn day(start: NaiveDate, days: u64) -> NaiveDate {
    start.checked_add_days(Days::new(days)).unwrap()
}

/// 30-year-old, 180 cm, 80 kg, moderately active man
pub fn male_profile(goal: HealthGoal) -> Profile {
    Profile {
        age: 30,
        gender: Gender::Male,
        height_cm: 180.0,
        weight_kg: 80.0,
        activity_level: ActivityLevel::Moderate,
        health_goal: goal,
    }
}

/// 25-year-old, 165 cm, 60 kg, sedentary woman
pub fn female_profile(goal: HealthGoal) -> Profile {
    Profile {
        age: 25,
        gender: Gender::Female,
        height_cm: 165.0,
        weight_kg: 60.0,
        activity_level: ActivityLevel::Sedentary,
        health_goal: goal,
    }
}

pub fn weight(on: NaiveDate, weight_kg: f64) -> WeightLog {
    WeightLog {
        date: on,
        user_id: user_id(),
        weight_kg,
    }
}

pub fn calories(on: NaiveDate, calories_consumed: u32) -> CalorieLog {
    CalorieLog {
        date: on,
        user_id: user_id(),
        calories_consumed,
        meal_type: None,
    }
}

pub fn hydration(on: NaiveDate, glasses: u32) -> HydrationLog {
    HydrationLog {
        date: on,
        user_id: user_id(),
        glasses,
    }
}

pub fn exercise(on: NaiveDate, duration_minutes: u32) -> ExerciseLog {
    ExerciseLog {
        date: on,
        user_id: user_id(),
        duration_minutes,
    }
}

/// One weigh-in per day starting at `start`, changing by `per_day`
pub fn linear_weights(start: NaiveDate, days: u64, first_kg: f64, per_day: f64) -> Vec<WeightLog> {
    (0..days)
        .map(|i| weight(day(start, i), (i as f64).mul_add(per_day, first_kg)))
        .collect()
}

/// 28 days of steady loss (0.12 kg/day) ending on `as_of`, with calories on plan,
/// eight glasses of water daily and five exercise days per week
pub fn active_loser_logs(as_of: NaiveDate) -> LogsByKind {
    let start = as_of.checked_sub_days(Days::new(27)).unwrap();
    LogsByKind {
        weight: linear_weights(start, 28, 84.0, -0.12),
        calories: (0..28).map(|i| calories(day(start, i), 2250)).collect(),
        hydration: (0..28).map(|i| hydration(day(start, i), 8)).collect(),
        exercise: (0..28)
            .filter(|i| i % 7 < 5)
            .map(|i| exercise(day(start, i), 45))
            .collect(),
    }
}
