// ABOUTME: Health log entry models: weight, calorie, hydration and exercise logs
// ABOUTME: Closed LogEntry sum type plus LogsByKind grouping handed to the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Unspecified or other meal type
    Other,
}

impl MealType {
    /// Parse meal type from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" | "snacks" => Self::Snack,
            _ => Self::Other,
        }
    }
}

/// The four metrics the engine tracks
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum LogKind {
    /// Body weight in kg
    Weight,
    /// Calories consumed
    Calories,
    /// Glasses of water
    Hydration,
    /// Exercise minutes
    Exercise,
}

/// How same-day entries collapse into one daily value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyReduction {
    /// The last entry supplied for the day wins
    LastWins,
    /// Entries for the day are summed
    Sum,
}

impl LogKind {
    /// Every kind, in report order
    pub const ALL: [Self; 4] = [Self::Weight, Self::Calories, Self::Hydration, Self::Exercise];

    /// Reduction applied to duplicate days
    #[must_use]
    pub const fn reduction(self) -> DailyReduction {
        match self {
            Self::Weight => DailyReduction::LastWins,
            Self::Calories | Self::Hydration | Self::Exercise => DailyReduction::Sum,
        }
    }

    /// Whether a day without entries means zero (true) or a gap (false)
    #[must_use]
    pub const fn pads_missing_days(self) -> bool {
        match self {
            Self::Weight => false,
            Self::Calories | Self::Hydration | Self::Exercise => true,
        }
    }
}

/// A single dated observation that can be rolled up per calendar day
pub trait DailyObservation {
    /// Metric this observation belongs to
    const KIND: LogKind;

    /// Calendar day the observation was logged for
    fn date(&self) -> NaiveDate;

    /// Numeric value of the observation
    fn value(&self) -> f64;
}

/// Body weight measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightLog {
    /// Calendar day of the measurement
    pub date: NaiveDate,
    /// Owning user
    pub user_id: Uuid,
    /// Weight in kilograms
    pub weight_kg: f64,
}

/// Calorie intake entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieLog {
    /// Calendar day the food was eaten
    pub date: NaiveDate,
    /// Owning user
    pub user_id: Uuid,
    /// Energy consumed (kcal)
    pub calories_consumed: u32,
    /// Meal this entry belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
}

/// Water intake entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HydrationLog {
    /// Calendar day of the entry
    pub date: NaiveDate,
    /// Owning user
    pub user_id: Uuid,
    /// Glasses of water (250 ml each)
    pub glasses: u32,
}

/// Exercise session entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseLog {
    /// Calendar day of the session
    pub date: NaiveDate,
    /// Owning user
    pub user_id: Uuid,
    /// Session length in minutes
    pub duration_minutes: u32,
}

impl DailyObservation for WeightLog {
    const KIND: LogKind = LogKind::Weight;

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn value(&self) -> f64 {
        self.weight_kg
    }
}

impl DailyObservation for CalorieLog {
    const KIND: LogKind = LogKind::Calories;

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn value(&self) -> f64 {
        f64::from(self.calories_consumed)
    }
}

impl DailyObservation for HydrationLog {
    const KIND: LogKind = LogKind::Hydration;

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn value(&self) -> f64 {
        f64::from(self.glasses)
    }
}

impl DailyObservation for ExerciseLog {
    const KIND: LogKind = LogKind::Exercise;

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn value(&self) -> f64 {
        f64::from(self.duration_minutes)
    }
}

/// Any health log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LogEntry {
    /// Weight measurement
    Weight(WeightLog),
    /// Calorie intake
    Calories(CalorieLog),
    /// Water intake
    Hydration(HydrationLog),
    /// Exercise session
    Exercise(ExerciseLog),
}

impl LogEntry {
    /// Metric this entry belongs to
    #[must_use]
    pub const fn kind(&self) -> LogKind {
        match self {
            Self::Weight(_) => LogKind::Weight,
            Self::Calories(_) => LogKind::Calories,
            Self::Hydration(_) => LogKind::Hydration,
            Self::Exercise(_) => LogKind::Exercise,
        }
    }

    /// Calendar day of the entry
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Weight(log) => log.date,
            Self::Calories(log) => log.date,
            Self::Hydration(log) => log.date,
            Self::Exercise(log) => log.date,
        }
    }

    /// Owning user
    #[must_use]
    pub const fn user_id(&self) -> Uuid {
        match self {
            Self::Weight(log) => log.user_id,
            Self::Calories(log) => log.user_id,
            Self::Hydration(log) => log.user_id,
            Self::Exercise(log) => log.user_id,
        }
    }

    /// Numeric value of the entry
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Self::Weight(log) => log.value(),
            Self::Calories(log) => log.value(),
            Self::Hydration(log) => log.value(),
            Self::Exercise(log) => log.value(),
        }
    }
}

/// Logs for one user grouped by kind, in submission order
///
/// Order within each vector matters only for weight, where the last entry of a day wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogsByKind {
    /// Weight measurements
    #[serde(default)]
    pub weight: Vec<WeightLog>,
    /// Calorie entries
    #[serde(default)]
    pub calories: Vec<CalorieLog>,
    /// Hydration entries
    #[serde(default)]
    pub hydration: Vec<HydrationLog>,
    /// Exercise sessions
    #[serde(default)]
    pub exercise: Vec<ExerciseLog>,
}

impl LogsByKind {
    /// Split a mixed stream of entries by kind, preserving submission order
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = LogEntry>) -> Self {
        let mut logs = Self::default();
        for entry in entries {
            logs.push(entry);
        }
        logs
    }

    /// Append one entry to the matching kind
    pub fn push(&mut self, entry: LogEntry) {
        match entry {
            LogEntry::Weight(log) => self.weight.push(log),
            LogEntry::Calories(log) => self.calories.push(log),
            LogEntry::Hydration(log) => self.hydration.push(log),
            LogEntry::Exercise(log) => self.exercise.push(log),
        }
    }

    /// Total number of entries across kinds
    #[must_use]
    pub fn len(&self) -> usize {
        self.weight.len() + self.calories.len() + self.hydration.len() + self.exercise.len()
    }

    /// Whether no entries of any kind were supplied
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distinct calendar days carrying at least one entry of any kind
    #[must_use]
    pub fn logged_dates(&self) -> BTreeSet<NaiveDate> {
        self.weight
            .iter()
            .map(|l| l.date)
            .chain(self.calories.iter().map(|l| l.date))
            .chain(self.hydration.iter().map(|l| l.date))
            .chain(self.exercise.iter().map(|l| l.date))
            .collect()
    }

    /// Distinct user references found in the entries
    #[must_use]
    pub fn user_ids(&self) -> BTreeSet<Uuid> {
        self.weight
            .iter()
            .map(|l| l.user_id)
            .chain(self.calories.iter().map(|l| l.user_id))
            .chain(self.hydration.iter().map(|l| l.user_id))
            .chain(self.exercise.iter().map(|l| l.user_id))
            .collect()
    }
}
