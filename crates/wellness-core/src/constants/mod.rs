// ABOUTME: Heuristic constants organized by domain for health metrics analysis
// ABOUTME: Energy equations, calorie policy, forecasting, hydration and scoring defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Evidence-based heuristic constants
//!
//! These values seed the `Default` implementations of the engine configuration.
//! They are heuristics drawn from nutrition and exercise literature, not claims of
//! clinical precision.

/// Mifflin-St Jeor resting energy equation
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy
/// expenditure. *American Journal of Clinical Nutrition*, 51(2), 241-247.
/// <https://doi.org/10.1093/ajcn/51.2.241>
pub mod mifflin_st_jeor {
    /// kcal per kg of body weight
    pub const WEIGHT_COEF: f64 = 10.0;
    /// kcal per cm of height
    pub const HEIGHT_COEF: f64 = 6.25;
    /// kcal per year of age
    pub const AGE_COEF: f64 = -5.0;
    /// Male constant
    pub const MALE_CONSTANT: f64 = 5.0;
    /// Female constant
    pub const FEMALE_CONSTANT: f64 = -161.0;
    /// Lowest age the equation was validated for
    pub const MIN_AGE_YEARS: u32 = 10;
}

/// Activity multipliers applied to BMR to estimate TDEE
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
pub mod activity_factors {
    /// Little or no exercise
    pub const SEDENTARY: f64 = 1.2;
    /// Light exercise 1-3 days/week
    pub const LIGHT: f64 = 1.375;
    /// Moderate exercise 3-5 days/week
    pub const MODERATE: f64 = 1.55;
    /// Hard exercise 6-7 days/week
    pub const ACTIVE: f64 = 1.725;
    /// Hard daily exercise or physical job
    pub const VERY_ACTIVE: f64 = 1.9;
}

/// Calorie target policy
pub mod calorie_policy {
    /// Daily deficit for weight loss (about 0.5 kg/week)
    pub const WEIGHT_LOSS_OFFSET_KCAL: i32 = -500;
    /// Daily surplus for muscle gain
    pub const MUSCLE_GAIN_OFFSET_KCAL: i32 = 300;
    /// Daily surplus for endurance training
    pub const ENDURANCE_OFFSET_KCAL: i32 = 200;
    /// Recommendations never fall below `BMR * BMR_FLOOR_MULTIPLIER`
    pub const BMR_FLOOR_MULTIPLIER: f64 = 1.0;
    /// Relative adherence gap that triggers a nudge
    pub const ADHERENCE_TOLERANCE: f64 = 0.10;
    /// Largest nudge toward observed intake
    pub const MAX_ADHERENCE_NUDGE_KCAL: i32 = 100;
    /// Energy content of one kilogram of body mass
    pub const KCAL_PER_KG_BODY_MASS: f64 = 7700.0;
}

/// Macronutrient energy density
pub mod macronutrients {
    /// kcal per gram of protein
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// kcal per gram of carbohydrate
    pub const CARB_KCAL_PER_G: f64 = 4.0;
    /// kcal per gram of fat
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}

/// Trend forecasting
pub mod forecasting {
    /// Fixed projection horizons in days
    pub const HORIZON_DAYS: [u32; 3] = [7, 14, 30];
    /// Distinct dates required for a regression
    pub const MIN_DISTINCT_DATES: usize = 2;
    /// Points at which history length stops discounting confidence
    pub const FULL_CONFIDENCE_POINTS: usize = 7;
    /// Weekly change below which the trend is labelled stable (kg)
    pub const STABLE_WEEKLY_CHANGE_KG: f64 = 0.1;
}

/// Plateau classification
pub mod plateau {
    /// Trailing window examined for stagnation
    pub const WINDOW_DAYS: u32 = 28;
    /// Slopes flatter than this (kg/day, toward the goal) are high risk
    pub const HIGH_RISK_SLOPE_KG_PER_DAY: f64 = 0.05;
    /// Slopes at least this steep (kg/day, toward the goal) are low risk
    pub const LOW_RISK_SLOPE_KG_PER_DAY: f64 = 0.10;
}

/// Goal success scoring
pub mod success {
    /// Weight of the trend alignment signal
    pub const TREND_WEIGHT: f64 = 0.40;
    /// Weight of the calorie adherence signal
    pub const ADHERENCE_WEIGHT: f64 = 0.35;
    /// Weight of the logging consistency signal
    pub const CONSISTENCY_WEIGHT: f64 = 0.25;
    /// Target loss rate for weight loss goals (kg/week)
    pub const LOSS_TARGET_KG_PER_WEEK: f64 = 0.5;
    /// Target gain rate for muscle gain goals (kg/week)
    pub const GAIN_TARGET_KG_PER_WEEK: f64 = 0.25;
    /// Weekly drift that scores zero for non-directional goals (kg/week)
    pub const MAINTENANCE_TOLERANCE_KG_PER_WEEK: f64 = 1.0;
    /// Neutral score used when a signal has no data
    pub const NEUTRAL_SCORE: f64 = 50.0;
    /// Signals scoring below this are called out as key factors
    pub const KEY_FACTOR_THRESHOLD: f64 = 70.0;
}

/// Look-back windows
pub mod windows {
    /// Trailing window for adherence and consistency analysis
    pub const LOOKBACK_DAYS: u32 = 14;
    /// Trailing window for exercise adherence
    pub const EXERCISE_WINDOW_DAYS: u32 = 7;
}

/// Hydration heuristics
pub mod hydration {
    /// Baseline water need per kg of body weight (ml)
    pub const ML_PER_KG: f64 = 35.0;
    /// Volume of one glass (ml)
    pub const GLASS_ML: f64 = 250.0;
    /// Minimum glasses per day before a reminder is issued
    pub const MIN_DAILY_GLASSES: u32 = 6;
}

/// Exercise habit heuristics
pub mod exercise {
    /// Fewer distinct exercise days than this in a week triggers a nudge
    pub const MIN_WEEKLY_DAYS: usize = 3;
    /// At least this many distinct exercise days is excellent
    pub const EXCELLENT_WEEKLY_DAYS: usize = 5;
    /// Suggested session length when there is no history (minutes)
    pub const DEFAULT_SESSION_MINUTES: u32 = 30;
}
