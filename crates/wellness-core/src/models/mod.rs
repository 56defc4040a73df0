// ABOUTME: Domain models for the wellness insights engine
// ABOUTME: Re-exports the profile snapshot and the health log entry types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Health log entries (weight, calories, hydration, exercise)
pub mod logs;
/// User profile snapshot and its enumerations
pub mod profile;

pub use logs::{
    CalorieLog, DailyObservation, DailyReduction, ExerciseLog, HydrationLog, LogEntry, LogKind,
    LogsByKind, MealType, WeightLog,
};
pub use profile::{ActivityLevel, Gender, HealthGoal, Profile};
