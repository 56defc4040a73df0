// ABOUTME: Statistical helpers for trend fitting over daily health series
// ABOUTME: Ordinary least squares regression, coefficient of determination and variance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Linear regression results
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Slope of the regression line (rate of change)
    pub slope: f64,
    /// Y-intercept of the regression line
    pub intercept: f64,
    /// Coefficient of determination (goodness of fit, 0-1)
    pub r_squared: f64,
    /// Standard error of the estimate
    pub standard_error: f64,
}

/// Statistical analyzer for daily series
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Ordinary least squares fit of `y` against `x`
    ///
    /// Returns `None` with fewer than two points or when every `x` is identical. A series
    /// with no variance in `y` is fitted exactly and reports an R² of 1.
    #[must_use]
    pub fn linear_regression(points: &[(f64, f64)]) -> Option<RegressionResult> {
        if points.len() < 2 {
            return None;
        }

        let n = points.len() as f64;
        let sum_x = points.iter().map(|(x, _)| x).sum::<f64>();
        let sum_y = points.iter().map(|(_, y)| y).sum::<f64>();
        let sum_xx = points.iter().map(|(x, _)| x * x).sum::<f64>();
        let sum_x_y = points.iter().map(|(x, y)| x * y).sum::<f64>();

        let mean_x = sum_x / n;
        let mean_y = sum_y / n;

        let denominator = (n * mean_x).mul_add(-mean_x, sum_xx);
        if denominator.abs() < f64::EPSILON {
            return None;
        }

        let slope = (n * mean_x).mul_add(-mean_y, sum_x_y) / denominator;
        let intercept = slope.mul_add(-mean_x, mean_y);

        let sse = points
            .iter()
            .map(|(x, y)| {
                let diff = y - slope.mul_add(*x, intercept);
                diff * diff
            })
            .sum::<f64>();
        let sst = points
            .iter()
            .map(|(_, y)| {
                let diff = y - mean_y;
                diff * diff
            })
            .sum::<f64>();

        let r_squared = if sst < f64::EPSILON {
            1.0
        } else {
            (1.0 - sse / sst).clamp(0.0, 1.0)
        };

        let degrees_of_freedom = points.len().saturating_sub(2);
        let standard_error = if degrees_of_freedom > 0 {
            (sse / degrees_of_freedom as f64).sqrt()
        } else {
            0.0
        };

        Some(RegressionResult {
            slope,
            intercept,
            r_squared,
            standard_error,
        })
    }

    /// Population variance, `None` when empty
    #[must_use]
    pub fn variance(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        Some(
            values
                .iter()
                .map(|v| {
                    let diff = v - mean;
                    diff * diff
                })
                .sum::<f64>()
                / n,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_line() {
        let points: Vec<(f64, f64)> = (0..10)
            .map(|i| (f64::from(i), 0.1f64.mul_add(-f64::from(i), 80.0)))
            .collect();
        let fit = StatisticalAnalyzer::linear_regression(&points).unwrap();
        assert!((fit.slope + 0.1).abs() < 1e-9);
        assert!((fit.intercept - 80.0).abs() < 1e-9);
        assert!(fit.r_squared > 0.999_999);
    }

    #[test]
    fn test_flat_series_is_a_perfect_fit() {
        let points = [(0.0, 70.0), (1.0, 70.0), (2.0, 70.0)];
        let fit = StatisticalAnalyzer::linear_regression(&points).unwrap();
        assert!(fit.slope.abs() < 1e-12);
        assert!((fit.r_squared - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_noise_lowers_r_squared() {
        let points = [(0.0, 80.0), (1.0, 81.0), (2.0, 79.0), (3.0, 80.5), (4.0, 79.5)];
        let fit = StatisticalAnalyzer::linear_regression(&points).unwrap();
        assert!(fit.r_squared < 0.5);
        assert!(fit.standard_error > 0.0);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(StatisticalAnalyzer::linear_regression(&[(0.0, 1.0)]).is_none());
        assert!(StatisticalAnalyzer::linear_regression(&[(2.0, 1.0), (2.0, 3.0)]).is_none());
        assert!(StatisticalAnalyzer::variance(&[]).is_none());
        assert!((StatisticalAnalyzer::variance(&[1.0, 3.0]).unwrap() - 1.0).abs() < 1e-12);
    }
}
