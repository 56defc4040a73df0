// ABOUTME: Habit analysis: hydration, exercise adherence, macros, meal timing and progress
// ABOUTME: Small report sections derived from the profile, daily rollups and calorie target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::aggregator::{DailyRollups, DailySeries};
use crate::config::insights::{ExerciseConfig, HydrationConfig, MacroSplitConfig};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use wellness_core::constants::macronutrients;
use wellness_core::models::{HealthGoal, Profile};

/// Daily water needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrationNeeds {
    /// Recommended water per day (ml)
    pub daily_ml: f64,
    /// Recommended glasses per day
    pub daily_glasses: u32,
    /// Glasses logged on the report date
    pub glasses_today: u32,
    /// Glasses still to drink today
    pub remaining_glasses: u32,
    /// When to drink through the day
    pub timing: Vec<String>,
}

/// Weekly exercise habit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseAdherence {
    /// Distinct days with exercise in the window
    pub active_days: usize,
    /// Length of the window
    pub window_days: u32,
    /// Active days as a percentage of the window
    pub adherence_rate: f64,
    /// Average minutes on active days
    pub average_session_minutes: f64,
    /// Advice keyed to the adherence rate
    pub recommendation: String,
}

/// Daily macronutrient targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroDistribution {
    /// Protein share (%)
    pub protein_percent: f64,
    /// Carbohydrate share (%)
    pub carbs_percent: f64,
    /// Fat share (%)
    pub fat_percent: f64,
    /// Protein (g)
    pub protein_g: u32,
    /// Carbohydrate (g)
    pub carbs_g: u32,
    /// Fat (g)
    pub fat_g: u32,
}

/// One meal on the suggested schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSlot {
    /// Meal name, e.g. "breakfast"
    pub meal: String,
    /// Clock time or a relative cue such as "Within 30 min after exercise"
    pub time: String,
}

/// Suggested daily meal schedule for the goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealTiming {
    /// Meals in the order they are eaten
    pub meals: Vec<MealSlot>,
    /// Why the schedule looks this way
    pub note: String,
}

/// Where the user stands on the report date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Most recent logged weight, or the profile weight without weigh-ins
    pub current_weight_kg: f64,
    /// First logged weight
    pub starting_weight_kg: Option<f64>,
    /// Change since the first weigh-in
    pub total_change_kg: Option<f64>,
    /// Calories logged on the report date
    pub calories_today: f64,
    /// Glasses logged on the report date
    pub glasses_today: u32,
    /// Exercise minutes logged on the report date
    pub exercise_minutes_today: f64,
}

/// Water needs from body weight and activity
#[must_use]
pub fn hydration_needs(
    profile: &Profile,
    config: &HydrationConfig,
    glasses_today: u32,
) -> HydrationNeeds {
    let daily_ml =
        profile.weight_kg.mul_add(config.ml_per_kg, config.allowance_for(profile.activity_level));
    let daily_glasses = (daily_ml / config.glass_ml).round().max(0.0) as u32;

    HydrationNeeds {
        daily_ml,
        daily_glasses,
        glasses_today,
        remaining_glasses: daily_glasses.saturating_sub(glasses_today),
        timing: hydration_timing(daily_glasses),
    }
}

/// Drinking schedule for a number of daily glasses
#[must_use]
pub fn hydration_timing(total_glasses: u32) -> Vec<String> {
    [
        (1, "Upon waking: 1-2 glasses"),
        (3, "Before lunch: 1 glass"),
        (5, "Afternoon: 1-2 glasses"),
        (7, "With dinner: 1 glass"),
        (8, "Evening: 1 glass"),
    ]
    .into_iter()
    .filter(|(min, _)| total_glasses >= *min)
    .map(|(_, text)| text.to_owned())
    .collect()
}

/// Distinct exercise days in the window ending on `as_of`
///
/// Every day with an exercise entry counts as active, including entries of zero minutes.
#[must_use]
pub fn exercise_adherence(
    exercise: &DailySeries,
    as_of: NaiveDate,
    window_days: u32,
    config: &ExerciseConfig,
) -> ExerciseAdherence {
    let active: Vec<f64> = exercise.logged_window(as_of, window_days).values().collect();
    let active_days = active.len();

    let adherence_rate = if window_days == 0 {
        0.0
    } else {
        (active_days as f64 / f64::from(window_days) * 100.0).min(100.0)
    };
    let average_session_minutes = if active.is_empty() {
        f64::from(config.default_session_minutes)
    } else {
        active.iter().sum::<f64>() / active_days as f64
    };

    let recommendation = if adherence_rate > 80.0 {
        "Excellent consistency! Consider increasing intensity"
    } else if adherence_rate > 50.0 {
        "Good progress! Try to add one more session"
    } else {
        "Start small - aim for 3 days per week"
    };

    ExerciseAdherence {
        active_days,
        window_days,
        adherence_rate,
        average_session_minutes,
        recommendation: recommendation.to_owned(),
    }
}

/// Split a calorie target into macronutrient grams
#[must_use]
pub fn macro_distribution(
    calories: i32,
    goal: HealthGoal,
    config: &MacroSplitConfig,
) -> MacroDistribution {
    let split = config.split_for(goal);
    let kcal = f64::from(calories.max(0));
    let grams = |share: f64, kcal_per_g: f64| (kcal * share / kcal_per_g).floor() as u32;

    MacroDistribution {
        protein_percent: split.protein * 100.0,
        carbs_percent: split.carbs() * 100.0,
        fat_percent: split.fat * 100.0,
        protein_g: grams(split.protein, macronutrients::PROTEIN_KCAL_PER_G),
        carbs_g: grams(split.carbs(), macronutrients::CARB_KCAL_PER_G),
        fat_g: grams(split.fat, macronutrients::FAT_KCAL_PER_G),
    }
}

/// Meal schedule for a goal
///
/// Muscle gain spreads intake over five meals plus a post-workout feed, weight loss
/// keeps three meals and one snack, and every other goal gets a balanced schedule.
#[must_use]
pub fn meal_timing(goal: HealthGoal) -> MealTiming {
    let (meals, note): (&[(&str, &str)], &str) = match goal {
        HealthGoal::MuscleGain => (
            &[
                ("breakfast", "07:00"),
                ("snack", "10:00"),
                ("lunch", "12:30"),
                ("snack", "15:30"),
                ("dinner", "18:30"),
                ("post_workout", "Within 30 min after exercise"),
            ],
            "Frequent meals support muscle growth",
        ),
        HealthGoal::WeightLoss => (
            &[
                ("breakfast", "08:00"),
                ("lunch", "13:00"),
                ("snack", "16:00"),
                ("dinner", "19:00"),
            ],
            "3 meals + 1 snack for satiety",
        ),
        HealthGoal::Maintenance | HealthGoal::Endurance | HealthGoal::Unrecognized => (
            &[
                ("breakfast", "07:30"),
                ("lunch", "12:30"),
                ("snack", "15:30"),
                ("dinner", "19:00"),
            ],
            "Balanced timing for steady energy",
        ),
    };

    MealTiming {
        meals: meals
            .iter()
            .map(|(meal, time)| MealSlot {
                meal: (*meal).to_owned(),
                time: (*time).to_owned(),
            })
            .collect(),
        note: note.to_owned(),
    }
}

/// Current standing from rollups already limited to `as_of`
#[must_use]
pub fn progress_snapshot(
    profile: &Profile,
    rollups: &DailyRollups,
    as_of: NaiveDate,
) -> ProgressSnapshot {
    let starting_weight_kg = rollups.weight.first().map(|p| p.value);
    let latest_weight = rollups.weight.last().map(|p| p.value);

    ProgressSnapshot {
        current_weight_kg: latest_weight.unwrap_or(profile.weight_kg),
        starting_weight_kg,
        total_change_kg: starting_weight_kg
            .zip(latest_weight)
            .map(|(start, latest)| latest - start),
        calories_today: rollups.calories.value_on(as_of).unwrap_or(0.0),
        glasses_today: rollups.hydration.value_on(as_of).unwrap_or(0.0) as u32,
        exercise_minutes_today: rollups.exercise.value_on(as_of).unwrap_or(0.0),
    }
}
