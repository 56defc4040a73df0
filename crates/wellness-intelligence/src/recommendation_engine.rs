// ABOUTME: Rule-based recommendation generator over the assembled report sections
// ABOUTME: Ordered rule table of predicates and message templates, sorted by priority
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation Engine
//!
//! Rules are evaluated in table order. Each matching rule emits one recommendation;
//! the output is stably sorted high to medium to low, so rules of equal priority keep
//! their table order. Rules within a group (plateau, exercise, calories, consistency)
//! are written with mutually exclusive conditions. Across groups, "Calories Above
//! Target" stays quiet during rapid loss and the exercise streak praise stays quiet
//! while logging is sparse.

use crate::calorie::CalorieRecommendation;
use crate::config::insights::{HabitsConfig, RecommendationConfig};
use crate::forecaster::WeightForecast;
use crate::habits::{ExerciseAdherence, HydrationNeeds, ProgressSnapshot};
use crate::plateau::{PlateauRisk, RiskLevel};
use crate::success::SuccessPrediction;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;
use wellness_core::models::HealthGoal;

/// Display priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Act on this first
    High,
    /// Worth attention
    Medium,
    /// Encouragement or fine tuning
    Low,
}

/// Area a recommendation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    /// Weight trend and plateaus
    WeightManagement,
    /// Exercise frequency
    Exercise,
    /// Water intake
    Hydration,
    /// Calorie intake
    Nutrition,
    /// Logging habits and mindset
    Wellness,
}

/// One actionable suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Short heading, unique within a report
    pub title: String,
    /// Explanation
    pub message: String,
    /// Display priority
    pub priority: Priority,
    /// Area the suggestion belongs to
    pub category: RecommendationCategory,
    /// Concrete next steps, in order
    pub actions: Vec<String>,
}

/// The report-so-far that rules inspect
#[derive(Debug, Clone, Copy)]
pub struct RecommendationContext<'a> {
    /// Stated goal
    pub goal: HealthGoal,
    /// Weight forecast
    pub forecast: &'a WeightForecast,
    /// Plateau assessment
    pub plateau: &'a PlateauRisk,
    /// Calorie target
    pub calories: &'a CalorieRecommendation,
    /// Success prediction
    pub success: &'a SuccessPrediction,
    /// Weekly exercise habit
    pub exercise: &'a ExerciseAdherence,
    /// Water needs
    pub hydration: &'a HydrationNeeds,
    /// Standing on the report date
    pub progress: &'a ProgressSnapshot,
    /// Hydration and exercise targets
    pub habits: &'a HabitsConfig,
}

/// Predicate deciding whether a rule fires
pub type RulePredicate = fn(&RecommendationContext<'_>, &RecommendationConfig) -> bool;

/// Template producing a rule's message
pub type RuleMessage = fn(&RecommendationContext<'_>) -> String;

/// A (predicate, template) pair with fixed presentation
#[derive(Debug, Clone, Copy)]
pub struct RecommendationRule {
    /// Heading of the emitted recommendation
    pub title: &'static str,
    /// Area of the emitted recommendation
    pub category: RecommendationCategory,
    /// Priority of the emitted recommendation
    pub priority: Priority,
    /// When the rule fires
    pub applies: RulePredicate,
    /// Message for the emitted recommendation
    pub message: RuleMessage,
    /// Next steps, in order
    pub actions: &'static [&'static str],
}

impl RecommendationRule {
    fn emit(&self, ctx: &RecommendationContext<'_>) -> Recommendation {
        Recommendation {
            title: self.title.to_owned(),
            message: (self.message)(ctx),
            priority: self.priority,
            category: self.category,
            actions: self.actions.iter().map(|a| (*a).to_owned()).collect(),
        }
    }
}

/// Evaluates the rule table
#[derive(Debug, Clone)]
pub struct RecommendationGenerator {
    config: RecommendationConfig,
    rules: Vec<RecommendationRule>,
}

impl Default for RecommendationGenerator {
    fn default() -> Self {
        Self::new(RecommendationConfig::default())
    }
}

impl RecommendationGenerator {
    /// Generator with the built-in rules
    #[must_use]
    pub fn new(config: RecommendationConfig) -> Self {
        Self {
            config,
            rules: default_rules(),
        }
    }

    /// Generator with no rules
    #[must_use]
    pub const fn empty(config: RecommendationConfig) -> Self {
        Self {
            config,
            rules: Vec::new(),
        }
    }

    /// Append a rule after the existing ones
    #[must_use]
    pub fn with_rule(mut self, rule: RecommendationRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Rules in evaluation order
    #[must_use]
    pub fn rules(&self) -> &[RecommendationRule] {
        &self.rules
    }

    /// Evaluate every rule against the context
    #[must_use]
    pub fn generate(&self, ctx: &RecommendationContext<'_>) -> Vec<Recommendation> {
        let mut seen_titles = HashSet::new();
        let mut recommendations: Vec<Recommendation> = self
            .rules
            .iter()
            .filter(|rule| (rule.applies)(ctx, &self.config))
            .filter(|rule| seen_titles.insert(rule.title))
            .map(|rule| rule.emit(ctx))
            .collect();

        recommendations.sort_by_key(|r| r.priority);
        recommendations.truncate(self.config.max_recommendations);

        debug!(count = recommendations.len(), "Generated recommendations");
        recommendations
    }
}

fn exercise_days(ctx: &RecommendationContext<'_>) -> String {
    format!("You exercised {} days this week.", ctx.exercise.active_days)
}

/// Fast loss with no plateau signal; rules asking to eat less stay quiet while it holds
fn losing_too_fast(ctx: &RecommendationContext<'_>, config: &RecommendationConfig) -> bool {
    !ctx.forecast.is_insufficient()
        && ctx.forecast.weekly_change_kg < -config.rapid_loss_kg_per_week
        && !matches!(ctx.plateau.risk_level, RiskLevel::High | RiskLevel::Moderate)
}

fn logging_is_sparse(ctx: &RecommendationContext<'_>, config: &RecommendationConfig) -> bool {
    ctx.success.signals.logging_consistency < config.low_consistency_score
}

/// The built-in rule table
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn default_rules() -> Vec<RecommendationRule> {
    vec![
        RecommendationRule {
            title: "Potential Plateau Detected",
            category: RecommendationCategory::WeightManagement,
            priority: Priority::High,
            applies: |ctx, _| ctx.plateau.risk_level == RiskLevel::High,
            message: |ctx| {
                format!(
                    "Your weight has barely moved over the last {} days. Time to shake things up!",
                    ctx.plateau.window_days
                )
            },
            actions: &[
                "Adjust calorie intake by 100-200 calories",
                "Try a new exercise routine",
                "Review your meal portions",
                "Ensure you're drinking enough water",
            ],
        },
        RecommendationRule {
            title: "Progress Slowing",
            category: RecommendationCategory::WeightManagement,
            priority: Priority::Medium,
            applies: |ctx, _| ctx.plateau.risk_level == RiskLevel::Moderate,
            message: |ctx| {
                format!(
                    "Your weight trend has slowed over the last {} days. Small adjustments now can keep you moving.",
                    ctx.plateau.window_days
                )
            },
            actions: &[
                "Re-check portion sizes for a week",
                "Add one extra activity session",
                "Log every meal, including snacks",
                "Review your progress again in 7 days",
            ],
        },
        RecommendationRule {
            title: "Rapid Weight Loss",
            category: RecommendationCategory::WeightManagement,
            priority: Priority::Medium,
            applies: losing_too_fast,
            message: |ctx| {
                format!(
                    "You're losing {:.1} kg per week. A safe rate is 0.5-1 kg per week.",
                    ctx.forecast.weekly_change_kg.abs()
                )
            },
            actions: &[
                "Ensure you're meeting minimum calorie needs",
                "Focus on nutrient-dense foods",
                "Monitor energy levels",
                "Consider slightly increasing calories",
            ],
        },
        RecommendationRule {
            title: "Start Logging Your Weight",
            category: RecommendationCategory::WeightManagement,
            priority: Priority::Medium,
            applies: |ctx, _| ctx.forecast.is_insufficient(),
            message: |_| {
                "Log your weight on at least two different days to unlock trend forecasts."
                    .to_owned()
            },
            actions: &[
                "Weigh yourself at the same time of day",
                "Log weight at least 3 times per week",
                "Use the same scale each time",
                "Record the value right away",
            ],
        },
        RecommendationRule {
            title: "Increase Activity Level",
            category: RecommendationCategory::Exercise,
            priority: Priority::High,
            applies: |ctx, _| ctx.exercise.active_days < ctx.habits.exercise.min_weekly_days,
            message: |ctx| format!("{} Aim for at least 3-4 days.", exercise_days(ctx)),
            actions: &[
                "Start with 20-minute walks",
                "Schedule workouts in your calendar",
                "Find an exercise buddy",
                "Try a new activity you enjoy",
            ],
        },
        RecommendationRule {
            title: "Great Exercise Streak",
            category: RecommendationCategory::Exercise,
            priority: Priority::Low,
            applies: |ctx, config| {
                ctx.exercise.active_days >= ctx.habits.exercise.excellent_weekly_days
                    && !logging_is_sparse(ctx, config)
            },
            message: |ctx| format!("{} Keep up the great training!", exercise_days(ctx)),
            actions: &[
                "Consider progressive overload",
                "Vary your workout routine",
                "Ensure adequate rest days",
                "Track strength improvements",
            ],
        },
        RecommendationRule {
            title: "Increase Water Intake",
            category: RecommendationCategory::Hydration,
            priority: Priority::Medium,
            applies: |ctx, _| ctx.hydration.glasses_today < ctx.habits.hydration.min_daily_glasses,
            message: |ctx| {
                format!(
                    "You've logged {} glasses today. Aim for {}.",
                    ctx.hydration.glasses_today, ctx.hydration.daily_glasses
                )
            },
            actions: &[
                "Set hourly water reminders",
                "Keep a water bottle nearby",
                "Drink a glass with each meal",
                "Track your daily intake",
            ],
        },
        RecommendationRule {
            title: "Calories Above Target",
            category: RecommendationCategory::Nutrition,
            priority: Priority::Medium,
            applies: |ctx, config| {
                ctx.calories
                    .adherence_to_target()
                    .is_some_and(|ratio| ratio > 1.0 + config.calorie_tolerance)
                    && !losing_too_fast(ctx, config)
            },
            message: |ctx| {
                format!(
                    "Your recent intake averages {:.0} kcal against a {} kcal target.",
                    ctx.calories.average_intake_kcal.unwrap_or_default(),
                    ctx.calories.recommended_calories
                )
            },
            actions: &[
                "Plan meals ahead of time",
                "Measure portions for a week",
                "Swap sugary drinks for water",
                "Keep healthy snacks within reach",
            ],
        },
        RecommendationRule {
            title: "Calories Below Target",
            category: RecommendationCategory::Nutrition,
            priority: Priority::Medium,
            applies: |ctx, config| {
                ctx.calories
                    .adherence_to_target()
                    .is_some_and(|ratio| ratio < 1.0 - config.calorie_tolerance)
            },
            message: |ctx| {
                format!(
                    "Your recent intake averages {:.0} kcal against a {} kcal target.",
                    ctx.calories.average_intake_kcal.unwrap_or_default(),
                    ctx.calories.recommended_calories
                )
            },
            actions: &[
                "Add a protein-rich snack",
                "Don't skip meals",
                "Include healthy fats like nuts and olive oil",
                "Log every meal so totals are accurate",
            ],
        },
        RecommendationRule {
            title: "Log More Consistently",
            category: RecommendationCategory::Wellness,
            priority: Priority::High,
            applies: logging_is_sparse,
            message: |ctx| {
                format!(
                    "You logged on {} of the last {} days. Regular entries make every insight sharper.",
                    ctx.success.logged_days, ctx.success.lookback_days
                )
            },
            actions: &[
                "Set a daily logging reminder",
                "Log meals right after eating",
                "Start with just weight and water",
                "Keep the app on your home screen",
            ],
        },
        RecommendationRule {
            title: "Consistency is Key",
            category: RecommendationCategory::Wellness,
            priority: Priority::Low,
            applies: |ctx, config| !logging_is_sparse(ctx, config),
            message: |_| "Focus on sustainable habits for long-term success".to_owned(),
            actions: &[
                "Log your progress daily",
                "Celebrate small wins",
                "Don't aim for perfection",
                "Stay patient with the process",
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecaster::TrendLabel;
    use crate::success::SignalScores;

    struct Sections {
        forecast: WeightForecast,
        plateau: PlateauRisk,
        calories: CalorieRecommendation,
        success: SuccessPrediction,
        exercise: ExerciseAdherence,
        hydration: HydrationNeeds,
        progress: ProgressSnapshot,
        habits: HabitsConfig,
    }

    impl Sections {
        fn healthy() -> Self {
            Self {
                forecast: WeightForecast {
                    trend: TrendLabel::Decreasing,
                    weekly_change_kg: -0.6,
                    slope_kg_per_day: Some(-0.6 / 7.0),
                    confidence: 90.0,
                    projections: Vec::new(),
                    current_weight_kg: Some(80.0),
                    data_points: 20,
                    analysis_period_days: 27,
                },
                plateau: PlateauRisk {
                    risk_level: RiskLevel::Low,
                    slope_kg_per_day: Some(-0.12),
                    variance: Some(1.2),
                    window_days: 28,
                    data_points: 20,
                    recommendation: RiskLevel::Low.recommendation().to_owned(),
                },
                calories: CalorieRecommendation {
                    recommended_calories: 2000,
                    adjustment: -500,
                    reason: String::new(),
                    tdee: 2500.0,
                    bmr: 1600.0,
                    weekly_target_kg: -0.45,
                    average_intake_kcal: Some(2000.0),
                    plan_adherence_ratio: Some(1.0),
                },
                success: SuccessPrediction {
                    success_probability: 90.0,
                    signals: SignalScores {
                        trend_alignment: 100.0,
                        calorie_adherence: 100.0,
                        logging_consistency: 100.0,
                    },
                    key_factors: Vec::new(),
                    insight: String::new(),
                    logged_days: 14,
                    lookback_days: 14,
                },
                exercise: ExerciseAdherence {
                    active_days: 4,
                    window_days: 7,
                    adherence_rate: 57.1,
                    average_session_minutes: 40.0,
                    recommendation: String::new(),
                },
                hydration: HydrationNeeds {
                    daily_ml: 3000.0,
                    daily_glasses: 12,
                    glasses_today: 8,
                    remaining_glasses: 4,
                    timing: Vec::new(),
                },
                progress: ProgressSnapshot {
                    current_weight_kg: 80.0,
                    starting_weight_kg: Some(82.0),
                    total_change_kg: Some(-2.0),
                    calories_today: 1900.0,
                    glasses_today: 8,
                    exercise_minutes_today: 30.0,
                },
                habits: HabitsConfig::default(),
            }
        }

        fn context(&self) -> RecommendationContext<'_> {
            RecommendationContext {
                goal: HealthGoal::WeightLoss,
                forecast: &self.forecast,
                plateau: &self.plateau,
                calories: &self.calories,
                success: &self.success,
                exercise: &self.exercise,
                hydration: &self.hydration,
                progress: &self.progress,
                habits: &self.habits,
            }
        }
    }

    fn titles(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_healthy_report_only_gets_encouragement() {
        let sections = Sections::healthy();
        let recs = RecommendationGenerator::default().generate(&sections.context());
        assert_eq!(titles(&recs), vec!["Consistency is Key"]);
        assert_eq!(recs[0].actions.len(), 4);
    }

    #[test]
    fn test_priority_order_is_stable() {
        let mut sections = Sections::healthy();
        sections.plateau.risk_level = RiskLevel::High;
        sections.exercise.active_days = 1;
        sections.hydration.glasses_today = 2;
        sections.success.signals.logging_consistency = 30.0;

        let recs = RecommendationGenerator::default().generate(&sections.context());
        assert_eq!(
            titles(&recs),
            vec![
                "Potential Plateau Detected",
                "Increase Activity Level",
                "Log More Consistently",
                "Increase Water Intake",
            ]
        );
        assert_eq!(
            recs[1].message,
            "You exercised 1 days this week. Aim for at least 3-4 days."
        );
    }

    #[test]
    fn test_duplicate_titles_are_dropped() {
        let sections = Sections::healthy();
        let extra = RecommendationRule {
            title: "Consistency is Key",
            category: RecommendationCategory::Wellness,
            priority: Priority::High,
            applies: |_, _| true,
            message: |_| "duplicate".to_owned(),
            actions: &[],
        };
        let recs = RecommendationGenerator::default()
            .with_rule(extra)
            .generate(&sections.context());
        assert_eq!(titles(&recs), vec!["Consistency is Key"]);
        assert_eq!(recs[0].priority, Priority::Low);
    }

    #[test]
    fn test_custom_rules_extend_the_table() {
        let sections = Sections::healthy();
        let generator = RecommendationGenerator::empty(RecommendationConfig::default()).with_rule(
            RecommendationRule {
                title: "Weigh-in Streak",
                category: RecommendationCategory::WeightManagement,
                priority: Priority::Low,
                applies: |ctx, _| ctx.forecast.data_points >= 20,
                message: |ctx| format!("{} weigh-ins logged", ctx.forecast.data_points),
                actions: &["Keep going"],
            },
        );
        let recs = generator.generate(&sections.context());
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].message, "20 weigh-ins logged");
    }

    #[test]
    fn test_calorie_rules_are_exclusive() {
        let mut sections = Sections::healthy();
        sections.calories.average_intake_kcal = Some(2500.0);
        let recs = RecommendationGenerator::default().generate(&sections.context());
        assert!(titles(&recs).contains(&"Calories Above Target"));
        assert!(!titles(&recs).contains(&"Calories Below Target"));

        sections.calories.average_intake_kcal = Some(1500.0);
        let recs = RecommendationGenerator::default().generate(&sections.context());
        assert!(titles(&recs).contains(&"Calories Below Target"));
        assert!(!titles(&recs).contains(&"Calories Above Target"));
    }

    #[test]
    fn test_rapid_loss_silences_calories_above_target() {
        let mut sections = Sections::healthy();
        sections.forecast.weekly_change_kg = -1.75;
        sections.calories.average_intake_kcal = Some(3200.0);

        let recs = RecommendationGenerator::default().generate(&sections.context());
        assert!(titles(&recs).contains(&"Rapid Weight Loss"));
        assert!(!titles(&recs).contains(&"Calories Above Target"));

        sections.forecast.weekly_change_kg = -0.6;
        let recs = RecommendationGenerator::default().generate(&sections.context());
        assert!(titles(&recs).contains(&"Calories Above Target"));
    }

    #[test]
    fn test_exercise_streak_waits_for_regular_logging() {
        let mut sections = Sections::healthy();
        sections.exercise.active_days = 6;
        sections.success.signals.logging_consistency = 40.0;

        let recs = RecommendationGenerator::default().generate(&sections.context());
        assert!(titles(&recs).contains(&"Log More Consistently"));
        assert!(!titles(&recs).contains(&"Great Exercise Streak"));

        sections.success.signals.logging_consistency = 100.0;
        let recs = RecommendationGenerator::default().generate(&sections.context());
        assert_eq!(titles(&recs), vec!["Great Exercise Streak", "Consistency is Key"]);
    }

    #[test]
    fn test_limit_truncates_low_priority_first() {
        let mut sections = Sections::healthy();
        sections.plateau.risk_level = RiskLevel::High;
        sections.exercise.active_days = 0;
        let config = RecommendationConfig {
            max_recommendations: 2,
            ..RecommendationConfig::default()
        };
        let recs = RecommendationGenerator::new(config).generate(&sections.context());
        assert_eq!(recs.len(), 2);
        assert!(recs.iter().all(|r| r.priority == Priority::High));
    }
}
