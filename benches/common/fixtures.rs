// ABOUTME: Benchmark fixtures generating realistic multi-metric health log histories
// ABOUTME: Deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for health log histories.
//!
//! Every value derives from the day index, so runs are reproducible.

use chrono::{Days, NaiveDate};
use uuid::Uuid;
use wellness_engine::models::{
    ActivityLevel, CalorieLog, ExerciseLog, Gender, HealthGoal, HydrationLog, LogsByKind,
    MealType, Profile, WeightLog,
};
use wellness_engine::ReportRequest;

/// Predefined history lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// Four weeks of logs
    Month,
    /// Thirteen weeks of logs
    Quarter,
    /// A full year of logs
    Year,
}

impl HistorySize {
    #[must_use]
    pub const fn days(self) -> u64 {
        match self {
            Self::Month => 28,
            Self::Quarter => 91,
            Self::Year => 365,
        }
    }
}

/// Fixed report date for all fixtures
#[must_use]
pub fn bench_as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default()
}

/// Profile for the `index`-th synthetic user
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
#[must_use]
pub fn bench_profile(index: usize) -> Profile {
    let goal = match index % 3 {
        0 => HealthGoal::WeightLoss,
        1 => HealthGoal::Maintenance,
        _ => HealthGoal::MuscleGain,
    };
    Profile {
        age: 25 + (index % 30) as u32,
        gender: if index % 2 == 0 {
            Gender::Male
        } else {
            Gender::Female
        },
        height_cm: 160.0 + (index % 30) as f64,
        weight_kg: 60.0 + (index % 40) as f64,
        activity_level: ActivityLevel::Moderate,
        health_goal: goal,
    }
}

/// One user's history of all four log kinds ending on `as_of`
///
/// Weight drifts down with a weekly wobble; calories, water and exercise follow weekly
/// patterns with a few skipped days.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
#[must_use]
pub fn generate_history(size: HistorySize, as_of: NaiveDate, seed: usize) -> LogsByKind {
    let user_id = Uuid::from_u128(seed as u128 + 1);
    let days = size.days();
    let start = as_of
        .checked_sub_days(Days::new(days - 1))
        .unwrap_or(as_of);
    let mut logs = LogsByKind::default();

    for i in 0..days {
        let Some(date) = start.checked_add_days(Days::new(i)) else {
            continue;
        };
        let index = i as usize + seed;

        if index % 5 != 4 {
            let wobble = ((index * 37) % 10) as f64 / 20.0;
            logs.weight.push(WeightLog {
                date,
                user_id,
                weight_kg: (i as f64).mul_add(-0.05, 85.0) + wobble,
            });
        }

        for (meal, share) in [
            (MealType::Breakfast, 500),
            (MealType::Lunch, 750),
            (MealType::Dinner, 850),
        ] {
            logs.calories.push(CalorieLog {
                date,
                user_id,
                calories_consumed: share + ((index * 53) % 150) as u32,
                meal_type: Some(meal),
            });
        }

        logs.hydration.push(HydrationLog {
            date,
            user_id,
            glasses: 5 + (index % 5) as u32,
        });

        if index % 7 < 4 {
            logs.exercise.push(ExerciseLog {
                date,
                user_id,
                duration_minutes: 30 + ((index * 11) % 40) as u32,
            });
        }
    }

    logs
}

/// Independent report requests for batch benchmarks
#[must_use]
pub fn generate_requests(count: usize, size: HistorySize) -> Vec<ReportRequest> {
    let as_of = bench_as_of();
    (0..count)
        .map(|index| ReportRequest {
            profile: bench_profile(index),
            logs: generate_history(size, as_of, index),
            as_of,
        })
        .collect()
}
