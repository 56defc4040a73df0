// ABOUTME: Calorie recommender deriving a daily intake target from TDEE and goal
// ABOUTME: Applies goal offsets, a BMR safety floor and a bounded nudge toward observed intake
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calorie Targets
//!
//! The plan target is TDEE plus a per-goal offset. When the user has consistently
//! eaten more or less than the plan, the target moves part of the way toward what they
//! actually eat, bounded by the configured nudge. The result never falls below the
//! BMR safety floor.

use crate::aggregator::DailySeries;
use crate::config::insights::CalorieConfig;
use crate::energy::EnergyEstimate;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use wellness_core::models::HealthGoal;

/// Calorie section of a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieRecommendation {
    /// Target daily intake (kcal)
    pub recommended_calories: i32,
    /// Signed difference from rounded TDEE (kcal)
    pub adjustment: i32,
    /// Why the target is what it is
    pub reason: String,
    /// TDEE the target is based on (kcal)
    pub tdee: f64,
    /// BMR the safety floor is based on (kcal)
    pub bmr: f64,
    /// Expected weekly weight change at this target (kg)
    pub weekly_target_kg: f64,
    /// Average logged intake over the look-back window (kcal)
    pub average_intake_kcal: Option<f64>,
    /// Average intake divided by the plan target, before any nudge
    pub plan_adherence_ratio: Option<f64>,
}

impl CalorieRecommendation {
    /// Average intake divided by the final recommended target
    #[must_use]
    pub fn adherence_to_target(&self) -> Option<f64> {
        let target = f64::from(self.recommended_calories);
        if target <= 0.0 {
            return None;
        }
        self.average_intake_kcal.map(|intake| intake / target)
    }
}

/// Mean of the days with calorie entries in the window ending on `as_of`
///
/// Days without entries are skipped rather than counted as zero intake.
#[must_use]
pub fn average_logged_intake(calories: &DailySeries, as_of: NaiveDate, days: u32) -> Option<f64> {
    calories.logged_window(as_of, days).mean()
}

/// Derives the daily calorie target
pub struct CalorieRecommender<'a> {
    config: &'a CalorieConfig,
}

impl<'a> CalorieRecommender<'a> {
    /// Create a recommender
    #[must_use]
    pub const fn new(config: &'a CalorieConfig) -> Self {
        Self { config }
    }

    /// TDEE plus the goal offset, before nudging and flooring
    #[must_use]
    pub fn plan_target(&self, energy: &EnergyEstimate, goal: HealthGoal) -> f64 {
        energy.tdee + f64::from(self.config.offset_for(goal))
    }

    /// Recommend a target from an optional adherence ratio (average intake ÷ plan target)
    #[must_use]
    pub fn recommend(
        &self,
        energy: &EnergyEstimate,
        goal: HealthGoal,
        adherence_ratio: Option<f64>,
    ) -> CalorieRecommendation {
        let offset = self.config.offset_for(goal);
        let plan = self.plan_target(energy, goal);

        let nudge = adherence_ratio
            .filter(|ratio| ratio.is_finite())
            .filter(|ratio| (ratio - 1.0).abs() > self.config.adherence_tolerance)
            .map_or(0.0, |ratio| {
                let max = f64::from(self.config.max_adherence_nudge_kcal);
                (plan * ratio - plan).clamp(-max, max)
            });

        let floor = energy.bmr * self.config.bmr_floor_multiplier;
        let unfloored = plan + nudge;
        let floored = unfloored < floor;
        let recommended_calories = unfloored.max(floor).round() as i32;
        let adjustment = recommended_calories - energy.tdee.round() as i32;

        let weekly_target_kg = f64::from(adjustment) * 7.0 / self.config.kcal_per_kg_body_mass;
        let reason = Self::reason(goal, offset, nudge, floored);

        debug!(
            recommended_calories,
            adjustment, nudge, floored, "Computed calorie recommendation"
        );

        CalorieRecommendation {
            recommended_calories,
            adjustment,
            reason,
            tdee: energy.tdee,
            bmr: energy.bmr,
            weekly_target_kg,
            average_intake_kcal: None,
            plan_adherence_ratio: adherence_ratio,
        }
    }

    /// Recommend a target from the average logged intake
    #[must_use]
    pub fn recommend_from_intake(
        &self,
        energy: &EnergyEstimate,
        goal: HealthGoal,
        average_intake_kcal: Option<f64>,
    ) -> CalorieRecommendation {
        let plan = self.plan_target(energy, goal);
        let ratio = average_intake_kcal
            .filter(|_| plan > 0.0)
            .map(|intake| intake / plan);
        CalorieRecommendation {
            average_intake_kcal,
            ..self.recommend(energy, goal, ratio)
        }
    }

    fn reason(goal: HealthGoal, offset: i32, nudge: f64, floored: bool) -> String {
        let base = match goal {
            HealthGoal::WeightLoss => {
                format!("{} kcal daily deficit for steady weight loss", offset.abs())
            }
            HealthGoal::MuscleGain => format!("{offset} kcal daily surplus to support muscle gain"),
            HealthGoal::Endurance => {
                format!("{offset} kcal daily surplus to fuel endurance training")
            }
            HealthGoal::Maintenance | HealthGoal::Unrecognized => {
                "Matches your daily energy expenditure to maintain weight".to_owned()
            }
        };

        let mut reason = base;
        if nudge > 0.0 {
            reason.push_str(&format!(
                "; raised {nudge:.0} kcal toward your consistently higher intake"
            ));
        } else if nudge < 0.0 {
            reason.push_str(&format!(
                "; lowered {:.0} kcal toward your consistently lower intake",
                nudge.abs()
            ));
        }
        if floored {
            reason.push_str("; held at your BMR so intake never drops below resting needs");
        }
        reason
    }
}
