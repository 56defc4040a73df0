// ABOUTME: Linear trend forecaster for daily health series
// ABOUTME: Fits OLS against elapsed days and projects weight at fixed horizons with confidence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Trend Forecasting
//!
//! Values are regressed against the number of calendar days elapsed since the first
//! point, so gaps in logging stretch the x-axis instead of compressing it. Projections
//! stay in full precision; rounding happens only when a report is prepared for display.

use crate::aggregator::DailySeries;
use crate::config::insights::ForecastConfig;
use crate::statistics::StatisticalAnalyzer;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A fitted linear trend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedTrend {
    /// Change per day
    pub slope: f64,
    /// Value at day index 0
    pub intercept: f64,
    /// Coefficient of determination (0-1)
    pub r_squared: f64,
    /// Confidence score (0-100)
    pub confidence: f64,
    /// Date of day index 0
    pub first_date: NaiveDate,
    /// Day index of the most recent point
    pub last_index: i64,
    /// Number of points fitted
    pub points: usize,
}

impl FittedTrend {
    /// Fitted value at a day index counted from `first_date`
    #[must_use]
    pub fn value_at(&self, day_index: f64) -> f64 {
        self.slope.mul_add(day_index, self.intercept)
    }

    /// Change per week
    #[must_use]
    pub fn weekly_change(&self) -> f64 {
        self.slope * 7.0
    }
}

/// Result of fitting a series
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinearTrend {
    /// Fewer distinct dates than a fit requires
    InsufficientData,
    /// A usable trend
    Fitted(FittedTrend),
}

impl LinearTrend {
    /// The fitted trend, if any
    #[must_use]
    pub const fn fitted(&self) -> Option<&FittedTrend> {
        match self {
            Self::InsufficientData => None,
            Self::Fitted(trend) => Some(trend),
        }
    }
}

/// Direction of the weight trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendLabel {
    /// Not enough weigh-ins to fit a trend
    InsufficientData,
    /// Losing weight
    Decreasing,
    /// Weekly change within the stability band
    Stable,
    /// Gaining weight
    Increasing,
}

/// Projected weight at a horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightProjection {
    /// Days after the last weigh-in
    pub days_ahead: u32,
    /// Projected weight (kg)
    pub weight_kg: f64,
}

/// Weight forecast section of a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightForecast {
    /// Trend direction, or the insufficient data sentinel
    pub trend: TrendLabel,
    /// Change per week (kg)
    pub weekly_change_kg: f64,
    /// Change per day (kg), absent without a trend
    pub slope_kg_per_day: Option<f64>,
    /// Confidence score (0-100)
    pub confidence: f64,
    /// Projections at each horizon, empty without a trend
    pub projections: Vec<WeightProjection>,
    /// Most recent logged weight
    pub current_weight_kg: Option<f64>,
    /// Distinct weigh-in days used
    pub data_points: usize,
    /// Days between the first and last weigh-in
    pub analysis_period_days: i64,
}

impl WeightForecast {
    /// Sentinel forecast for series too short to fit
    #[must_use]
    pub const fn insufficient(data_points: usize, current_weight_kg: Option<f64>) -> Self {
        Self {
            trend: TrendLabel::InsufficientData,
            weekly_change_kg: 0.0,
            slope_kg_per_day: None,
            confidence: 0.0,
            projections: Vec::new(),
            current_weight_kg,
            data_points,
            analysis_period_days: 0,
        }
    }

    /// Whether this is the insufficient data sentinel
    #[must_use]
    pub fn is_insufficient(&self) -> bool {
        self.trend == TrendLabel::InsufficientData
    }

    /// Projection at a horizon, if one was made
    #[must_use]
    pub fn projection(&self, days_ahead: u32) -> Option<f64> {
        self.projections
            .iter()
            .find(|p| p.days_ahead == days_ahead)
            .map(|p| p.weight_kg)
    }
}

/// Fits and projects linear trends
pub struct TrendForecaster<'a> {
    config: &'a ForecastConfig,
}

impl<'a> TrendForecaster<'a> {
    /// Create a forecaster
    #[must_use]
    pub const fn new(config: &'a ForecastConfig) -> Self {
        Self { config }
    }

    /// Ordinary least squares fit of value against elapsed day index
    #[must_use]
    pub fn fit_linear_trend(&self, series: &DailySeries) -> LinearTrend {
        let (Some(first), Some(last)) = (series.first(), series.last()) else {
            return LinearTrend::InsufficientData;
        };
        if series.len() < self.config.min_distinct_dates {
            return LinearTrend::InsufficientData;
        }

        let first_date = first.date;
        let points: Vec<(f64, f64)> = series
            .points()
            .iter()
            .map(|p| ((p.date - first_date).num_days() as f64, p.value))
            .collect();

        let Some(regression) = StatisticalAnalyzer::linear_regression(&points) else {
            return LinearTrend::InsufficientData;
        };

        let history_factor =
            (series.len() as f64 / self.config.full_confidence_points.max(1) as f64).min(1.0);
        let confidence = (regression.r_squared * 100.0 * history_factor).clamp(0.0, 100.0);

        LinearTrend::Fitted(FittedTrend {
            slope: regression.slope,
            intercept: regression.intercept,
            r_squared: regression.r_squared,
            confidence,
            first_date,
            last_index: (last.date - first_date).num_days(),
            points: series.len(),
        })
    }

    /// Value `days_ahead` days after the last point of the fitted series
    #[must_use]
    pub fn project(trend: &FittedTrend, days_ahead: u32) -> f64 {
        trend.value_at(trend.last_index as f64 + f64::from(days_ahead))
    }

    /// Classify a weekly change against the stability band
    #[must_use]
    pub fn label(&self, weekly_change_kg: f64) -> TrendLabel {
        if weekly_change_kg.abs() < self.config.stable_weekly_change_kg {
            TrendLabel::Stable
        } else if weekly_change_kg < 0.0 {
            TrendLabel::Decreasing
        } else {
            TrendLabel::Increasing
        }
    }

    /// Forecast weight from a daily weight series
    #[must_use]
    pub fn forecast_weight(&self, weight: &DailySeries) -> WeightForecast {
        let current = weight.last().map(|p| p.value);
        let LinearTrend::Fitted(trend) = self.fit_linear_trend(weight) else {
            debug!(points = weight.len(), "Weight forecast has insufficient data");
            return WeightForecast::insufficient(weight.len(), current);
        };

        let weekly_change_kg = trend.weekly_change();
        let projections = self
            .config
            .horizons_days
            .iter()
            .map(|&days_ahead| WeightProjection {
                days_ahead,
                weight_kg: Self::project(&trend, days_ahead),
            })
            .collect();

        debug!(
            slope = trend.slope,
            confidence = trend.confidence,
            points = trend.points,
            "Fitted weight trend"
        );

        WeightForecast {
            trend: self.label(weekly_change_kg),
            weekly_change_kg,
            slope_kg_per_day: Some(trend.slope),
            confidence: trend.confidence,
            projections,
            current_weight_kg: current,
            data_points: trend.points,
            analysis_period_days: trend.last_index,
        }
    }
}
