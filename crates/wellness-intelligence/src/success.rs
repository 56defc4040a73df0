// ABOUTME: Goal success predictor combining trend, adherence and consistency signals
// ABOUTME: Weighted average of normalized scores with plain-language key factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::insights::SuccessConfig;
use crate::forecaster::WeightForecast;
use serde::{Deserialize, Serialize};
use tracing::debug;
use wellness_core::models::HealthGoal;

/// The three signals behind a success prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuccessSignal {
    /// Weight trend points toward the goal
    TrendAlignment,
    /// Logged calories track the target
    CalorieAdherence,
    /// Days with any log in the look-back window
    LoggingConsistency,
}

/// Normalized signal scores (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalScores {
    /// Trend alignment score
    pub trend_alignment: f64,
    /// Calorie adherence score
    pub calorie_adherence: f64,
    /// Logging consistency score
    pub logging_consistency: f64,
}

impl SignalScores {
    /// Score for one signal
    #[must_use]
    pub const fn get(&self, signal: SuccessSignal) -> f64 {
        match signal {
            SuccessSignal::TrendAlignment => self.trend_alignment,
            SuccessSignal::CalorieAdherence => self.calorie_adherence,
            SuccessSignal::LoggingConsistency => self.logging_consistency,
        }
    }
}

/// Success section of a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessPrediction {
    /// Probability of reaching the goal (0-100)
    pub success_probability: f64,
    /// Normalized signal scores
    pub signals: SignalScores,
    /// The weakest signals, explained
    pub key_factors: Vec<String>,
    /// One-line reading of the probability
    pub insight: String,
    /// Days with any log in the look-back window
    pub logged_days: usize,
    /// Length of the look-back window
    pub lookback_days: u32,
}

/// Everything the predictor reads
#[derive(Debug, Clone, Copy)]
pub struct SuccessInputs<'a> {
    /// Stated goal
    pub goal: HealthGoal,
    /// Weight forecast over the full history
    pub forecast: &'a WeightForecast,
    /// Average intake divided by the recommended target
    pub adherence_ratio: Option<f64>,
    /// Days with any log in the look-back window
    pub logged_days: usize,
    /// Length of the look-back window
    pub lookback_days: u32,
}

/// Produces a composite success probability
pub struct SuccessPredictor<'a> {
    config: &'a SuccessConfig,
}

impl<'a> SuccessPredictor<'a> {
    /// Create a predictor
    #[must_use]
    pub const fn new(config: &'a SuccessConfig) -> Self {
        Self { config }
    }

    /// Trend alignment: 50 when flat, 100 at the target rate toward the goal
    #[must_use]
    pub fn trend_score(&self, goal: HealthGoal, forecast: &WeightForecast) -> f64 {
        if forecast.is_insufficient() {
            return self.config.neutral_score;
        }
        let weekly = forecast.weekly_change_kg;
        let score = match goal.weight_direction() {
            0 => 100.0 - 100.0 * weekly.abs() / self.config.maintenance_tolerance_kg_per_week,
            direction => {
                let target = if direction < 0 {
                    self.config.loss_target_kg_per_week
                } else {
                    self.config.gain_target_kg_per_week
                };
                let progress = weekly * f64::from(direction);
                50.0f64.mul_add(progress / target, 50.0)
            }
        };
        score.clamp(0.0, 100.0)
    }

    /// Adherence: 100 on target, losing 2 points per percent of deviation
    #[must_use]
    pub fn adherence_score(&self, ratio: Option<f64>) -> f64 {
        ratio
            .filter(|r| r.is_finite())
            .map_or(self.config.neutral_score, |r| {
                200.0f64.mul_add(-(r - 1.0).abs(), 100.0).clamp(0.0, 100.0)
            })
    }

    /// Consistency: share of look-back days with any entry
    #[must_use]
    pub fn consistency_score(logged_days: usize, lookback_days: u32) -> f64 {
        if lookback_days == 0 {
            return 0.0;
        }
        (logged_days as f64 / f64::from(lookback_days) * 100.0).clamp(0.0, 100.0)
    }

    /// Combine the signals
    #[must_use]
    pub fn predict(&self, inputs: &SuccessInputs<'_>) -> SuccessPrediction {
        let signals = SignalScores {
            trend_alignment: self.trend_score(inputs.goal, inputs.forecast),
            calorie_adherence: self.adherence_score(inputs.adherence_ratio),
            logging_consistency: Self::consistency_score(inputs.logged_days, inputs.lookback_days),
        };

        let success_probability = self
            .config
            .trend_weight
            .mul_add(
                signals.trend_alignment,
                self.config.adherence_weight.mul_add(
                    signals.calorie_adherence,
                    self.config.consistency_weight * signals.logging_consistency,
                ),
            )
            .clamp(0.0, 100.0);

        let key_factors = self
            .key_signals(&signals)
            .into_iter()
            .map(|signal| Self::describe(signal, &signals, inputs, self.config))
            .collect();

        debug!(
            success_probability,
            trend = signals.trend_alignment,
            adherence = signals.calorie_adherence,
            consistency = signals.logging_consistency,
            "Predicted goal success"
        );

        SuccessPrediction {
            success_probability,
            signals,
            key_factors,
            insight: Self::insight(success_probability).to_owned(),
            logged_days: inputs.logged_days,
            lookback_days: inputs.lookback_days,
        }
    }

    /// Lowest-scoring signal, plus any other signal below the threshold, weakest first
    #[must_use]
    pub fn key_signals(&self, signals: &SignalScores) -> Vec<SuccessSignal> {
        let mut ranked = [
            SuccessSignal::TrendAlignment,
            SuccessSignal::CalorieAdherence,
            SuccessSignal::LoggingConsistency,
        ];
        ranked.sort_by(|a, b| signals.get(*a).total_cmp(&signals.get(*b)));

        ranked
            .iter()
            .enumerate()
            .filter(|(idx, signal)| {
                *idx == 0 || signals.get(**signal) < self.config.key_factor_threshold
            })
            .map(|(_, signal)| *signal)
            .take(self.config.max_key_factors.max(1))
            .collect()
    }

    fn describe(
        signal: SuccessSignal,
        signals: &SignalScores,
        inputs: &SuccessInputs<'_>,
        config: &SuccessConfig,
    ) -> String {
        let weak = signals.get(signal) < config.key_factor_threshold;
        match signal {
            SuccessSignal::TrendAlignment if inputs.forecast.is_insufficient() => {
                "Not enough weigh-ins yet to judge your weight trend".to_owned()
            }
            SuccessSignal::TrendAlignment if weak => format!(
                "Weight trend ({:+.2} kg/week) is not moving toward your goal",
                inputs.forecast.weekly_change_kg
            ),
            SuccessSignal::TrendAlignment => format!(
                "Weight trend ({:+.2} kg/week) is aligned with your goal",
                inputs.forecast.weekly_change_kg
            ),
            SuccessSignal::CalorieAdherence => inputs.adherence_ratio.map_or_else(
                || "No recent calorie logs to measure adherence".to_owned(),
                |ratio| {
                    let verdict = if weak { "off" } else { "close to" };
                    format!(
                        "Calorie intake averages {:.0}% of target, {verdict} plan",
                        ratio * 100.0
                    )
                },
            ),
            SuccessSignal::LoggingConsistency => format!(
                "Logged on {} of the last {} days",
                inputs.logged_days, inputs.lookback_days
            ),
        }
    }

    /// Interpretation band for a probability
    #[must_use]
    pub fn insight(probability: f64) -> &'static str {
        if probability > 80.0 {
            "Excellent! You're on track to reach your goal"
        } else if probability > 60.0 {
            "Good progress! Small improvements will help"
        } else if probability > 40.0 {
            "Need more consistency to reach your goal"
        } else {
            "Consider reassessing your approach"
        }
    }
}
