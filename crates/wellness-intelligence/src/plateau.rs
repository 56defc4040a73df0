// ABOUTME: Plateau risk assessment from the recent weight trend
// ABOUTME: Classifies stagnation by slope relative to the goal direction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::aggregator::DailySeries;
use crate::config::insights::PlateauConfig;
use crate::forecaster::LinearTrend;
use crate::statistics::StatisticalAnalyzer;
use serde::{Deserialize, Serialize};
use tracing::debug;
use wellness_core::models::HealthGoal;

/// Stagnation risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Effectively flat despite a directional goal
    High,
    /// Progress is slowing
    Moderate,
    /// Clear progress toward the goal
    Low,
    /// Not enough recent weigh-ins
    Unknown,
}

impl RiskLevel {
    /// Advice keyed to the risk level
    #[must_use]
    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::High => "Consider calorie cycling or changing workout routine",
            Self::Moderate => "Monitor closely, may need adjustments soon",
            Self::Low => "Good progress, continue current plan",
            Self::Unknown => "Need more data to assess plateau risk",
        }
    }
}

/// Plateau section of a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateauRisk {
    /// Classified risk
    pub risk_level: RiskLevel,
    /// Slope of the window's trend (kg/day)
    pub slope_kg_per_day: Option<f64>,
    /// Population variance of the window's weights (kg²)
    pub variance: Option<f64>,
    /// Days examined
    pub window_days: u32,
    /// Weigh-in days inside the window
    pub data_points: usize,
    /// Advice keyed to the risk level
    pub recommendation: String,
}

/// Classifies stagnation risk
pub struct PlateauRiskAssessor<'a> {
    config: &'a PlateauConfig,
}

impl<'a> PlateauRiskAssessor<'a> {
    /// Create an assessor
    #[must_use]
    pub const fn new(config: &'a PlateauConfig) -> Self {
        Self { config }
    }

    /// Days of weight history the assessor expects to be handed
    #[must_use]
    pub const fn window_days(&self) -> u32 {
        self.config.window_days
    }

    /// Risk level for a trend and goal
    ///
    /// Maintenance and endurance goals do not expect the weight to move, so any fitted
    /// trend is low risk for them.
    #[must_use]
    pub fn classify(&self, trend: &LinearTrend, goal: HealthGoal) -> RiskLevel {
        let Some(fitted) = trend.fitted() else {
            return RiskLevel::Unknown;
        };
        let direction = goal.weight_direction();
        if direction == 0 {
            return RiskLevel::Low;
        }

        let progress = fitted.slope * f64::from(direction);
        if progress <= self.config.high_risk_progress_kg_per_day {
            RiskLevel::High
        } else if progress < self.config.low_risk_progress_kg_per_day {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    /// Assess the trend fitted over `window`, the most recent weigh-ins
    #[must_use]
    pub fn assess(
        &self,
        trend: &LinearTrend,
        window: &DailySeries,
        goal: HealthGoal,
    ) -> PlateauRisk {
        let risk_level = self.classify(trend, goal);
        let weights: Vec<f64> = window.values().collect();
        let variance = StatisticalAnalyzer::variance(&weights);

        debug!(?risk_level, points = window.len(), "Assessed plateau risk");

        PlateauRisk {
            risk_level,
            slope_kg_per_day: trend.fitted().map(|t| t.slope),
            variance,
            window_days: self.config.window_days,
            data_points: window.len(),
            recommendation: risk_level.recommendation().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::SeriesPoint;
    use crate::config::insights::ForecastConfig;
    use crate::forecaster::TrendForecaster;
    use chrono::{Days, NaiveDate};
    use wellness_core::models::LogKind;

    fn linear_window(slope: f64, days: u64) -> DailySeries {
        let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        DailySeries::from_points(
            LogKind::Weight,
            (0..days).map(|i| SeriesPoint {
                date: start.checked_add_days(Days::new(i)).unwrap(),
                value: slope.mul_add(i as f64, 90.0),
            }),
        )
    }

    fn assess(slope: f64, goal: HealthGoal) -> RiskLevel {
        let forecast_config = ForecastConfig::default();
        let plateau_config = PlateauConfig::default();
        let window = linear_window(slope, 28);
        let trend = TrendForecaster::new(&forecast_config).fit_linear_trend(&window);
        PlateauRiskAssessor::new(&plateau_config)
            .assess(&trend, &window, goal)
            .risk_level
    }

    #[test]
    fn test_flat_weight_loss_is_high_risk() {
        assert_eq!(assess(-0.01, HealthGoal::WeightLoss), RiskLevel::High);
        assert_eq!(assess(0.02, HealthGoal::WeightLoss), RiskLevel::High);
    }

    #[test]
    fn test_weight_loss_bands() {
        assert_eq!(assess(-0.07, HealthGoal::WeightLoss), RiskLevel::Moderate);
        assert_eq!(assess(-0.15, HealthGoal::WeightLoss), RiskLevel::Low);
    }

    #[test]
    fn test_muscle_gain_is_mirrored() {
        assert_eq!(assess(0.01, HealthGoal::MuscleGain), RiskLevel::High);
        assert_eq!(assess(0.07, HealthGoal::MuscleGain), RiskLevel::Moderate);
        assert_eq!(assess(0.15, HealthGoal::MuscleGain), RiskLevel::Low);
    }

    #[test]
    fn test_maintenance_is_low_risk() {
        assert_eq!(assess(0.0, HealthGoal::Maintenance), RiskLevel::Low);
    }

    #[test]
    fn test_insufficient_trend_is_unknown() {
        let config = PlateauConfig::default();
        let window = linear_window(-0.1, 1);
        let risk = PlateauRiskAssessor::new(&config).assess(
            &LinearTrend::InsufficientData,
            &window,
            HealthGoal::WeightLoss,
        );
        assert_eq!(risk.risk_level, RiskLevel::Unknown);
        assert_eq!(risk.recommendation, "Need more data to assess plateau risk");
        assert!(risk.slope_kg_per_day.is_none());
    }
}
