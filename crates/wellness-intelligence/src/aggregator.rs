// ABOUTME: Time series aggregation of raw health logs into per-day rollups
// ABOUTME: Last-wins reduction for weight, summed days for calories, hydration and exercise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use wellness_core::models::{DailyObservation, DailyReduction, LogKind, LogsByKind};

/// One day of one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Calendar day
    pub date: NaiveDate,
    /// Reduced value for the day
    pub value: f64,
}

/// Per-day rollup of a single metric, ascending by date with no duplicate dates
#[derive(Debug, Clone, PartialEq)]
pub struct DailySeries {
    kind: LogKind,
    points: Vec<SeriesPoint>,
}

impl DailySeries {
    /// Empty series for a metric
    #[must_use]
    pub const fn empty(kind: LogKind) -> Self {
        Self {
            kind,
            points: Vec::new(),
        }
    }

    /// Build from already reduced points; they are sorted and deduplicated (last wins)
    #[must_use]
    pub fn from_points(kind: LogKind, points: impl IntoIterator<Item = SeriesPoint>) -> Self {
        let by_date: BTreeMap<NaiveDate, f64> =
            points.into_iter().map(|p| (p.date, p.value)).collect();
        Self::from_map(kind, by_date)
    }

    fn from_map(kind: LogKind, by_date: BTreeMap<NaiveDate, f64>) -> Self {
        Self {
            kind,
            points: by_date
                .into_iter()
                .map(|(date, value)| SeriesPoint { date, value })
                .collect(),
        }
    }

    /// Metric this series describes
    #[must_use]
    pub const fn kind(&self) -> LogKind {
        self.kind
    }

    /// Points in ascending date order
    #[must_use]
    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    /// Number of days in the series
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Earliest point
    #[must_use]
    pub fn first(&self) -> Option<&SeriesPoint> {
        self.points.first()
    }

    /// Most recent point
    #[must_use]
    pub fn last(&self) -> Option<&SeriesPoint> {
        self.points.last()
    }

    /// Value recorded for a day, if any
    #[must_use]
    pub fn value_on(&self, date: NaiveDate) -> Option<f64> {
        self.points
            .binary_search_by_key(&date, |p| p.date)
            .ok()
            .map(|idx| self.points[idx].value)
    }

    /// Values in date order
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    /// Dates in ascending order
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.points.iter().map(|p| p.date)
    }

    /// Mean of the values, `None` when empty
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        if self.points.is_empty() {
            return None;
        }
        Some(self.values().sum::<f64>() / self.points.len() as f64)
    }

    /// The most recent `n` points
    #[must_use]
    pub fn last_n(&self, n: usize) -> Self {
        let start = self.points.len().saturating_sub(n);
        Self {
            kind: self.kind,
            points: self.points[start..].to_vec(),
        }
    }

    /// Points dated on or before `as_of`
    #[must_use]
    pub fn up_to(&self, as_of: NaiveDate) -> Self {
        let end = self.points.partition_point(|p| p.date <= as_of);
        Self {
            kind: self.kind,
            points: self.points[..end].to_vec(),
        }
    }

    /// The `days` calendar days ending on `as_of`
    ///
    /// Calories, hydration and exercise are padded with zero for days without entries;
    /// weight keeps missing days as gaps.
    #[must_use]
    pub fn window(&self, as_of: NaiveDate, days: u32) -> Self {
        if !self.kind.pads_missing_days() {
            return self.logged_window(as_of, days);
        }
        let Some(start) = window_start(as_of, days) else {
            return Self::empty(self.kind);
        };
        let points = start
            .iter_days()
            .take_while(|date| *date <= as_of)
            .map(|date| SeriesPoint {
                date,
                value: self.value_on(date).unwrap_or(0.0),
            })
            .collect();
        Self {
            kind: self.kind,
            points,
        }
    }

    /// The `days` calendar days ending on `as_of`, without padding
    #[must_use]
    pub fn logged_window(&self, as_of: NaiveDate, days: u32) -> Self {
        let Some(start) = window_start(as_of, days) else {
            return Self::empty(self.kind);
        };
        Self {
            kind: self.kind,
            points: self
                .points
                .iter()
                .filter(|p| p.date >= start && p.date <= as_of)
                .copied()
                .collect(),
        }
    }
}

/// First day of a `days`-long window ending on `as_of`, `None` for an empty window
fn window_start(as_of: NaiveDate, days: u32) -> Option<NaiveDate> {
    if days == 0 {
        return None;
    }
    Some(
        as_of
            .checked_sub_days(Days::new(u64::from(days - 1)))
            .unwrap_or(NaiveDate::MIN),
    )
}

/// Daily rollups of all four metrics
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRollups {
    /// Weight, last entry of each day
    pub weight: DailySeries,
    /// Calories consumed, summed per day
    pub calories: DailySeries,
    /// Glasses of water, summed per day
    pub hydration: DailySeries,
    /// Exercise minutes, summed per day
    pub exercise: DailySeries,
}

impl DailyRollups {
    /// Drop every point dated after `as_of`
    #[must_use]
    pub fn up_to(&self, as_of: NaiveDate) -> Self {
        Self {
            weight: self.weight.up_to(as_of),
            calories: self.calories.up_to(as_of),
            hydration: self.hydration.up_to(as_of),
            exercise: self.exercise.up_to(as_of),
        }
    }

    /// Distinct days in the window ending on `as_of` with at least one entry of any kind
    #[must_use]
    pub fn logged_days(&self, as_of: NaiveDate, days: u32) -> usize {
        [&self.weight, &self.calories, &self.hydration, &self.exercise]
            .into_iter()
            .flat_map(|series| {
                series
                    .logged_window(as_of, days)
                    .points
                    .into_iter()
                    .map(|p| p.date)
            })
            .collect::<BTreeSet<_>>()
            .len()
    }
}

/// Groups raw log entries by calendar day
pub struct TimeSeriesAggregator;

impl TimeSeriesAggregator {
    /// Reduce entries of one kind into a daily series
    ///
    /// Entries may arrive in any date order. For weight, the entry supplied last for a
    /// day wins, so callers must pass entries in submission order.
    #[must_use]
    pub fn aggregate<T: DailyObservation>(entries: &[T]) -> DailySeries {
        let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        match T::KIND.reduction() {
            DailyReduction::LastWins => {
                for entry in entries {
                    by_date.insert(entry.date(), entry.value());
                }
            }
            DailyReduction::Sum => {
                for entry in entries {
                    *by_date.entry(entry.date()).or_insert(0.0) += entry.value();
                }
            }
        }
        DailySeries::from_map(T::KIND, by_date)
    }

    /// Roll up every kind of log
    #[must_use]
    pub fn rollup(logs: &LogsByKind) -> DailyRollups {
        DailyRollups {
            weight: Self::aggregate(&logs.weight),
            calories: Self::aggregate(&logs.calories),
            hydration: Self::aggregate(&logs.hydration),
            exercise: Self::aggregate(&logs.exercise),
        }
    }
}
