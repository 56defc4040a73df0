// ABOUTME: Integration tests for daily rollups of raw health logs
// ABOUTME: Covers ordering, same-day reduction per kind, windows and padding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{calories, date, exercise, hydration, weight};
use wellness_engine::aggregator::TimeSeriesAggregator;
use wellness_engine::models::{LogEntry, LogKind, LogsByKind};

#[test]
fn test_weight_is_sorted_and_last_entry_of_day_wins() {
    common::init_test_logging();
    let logs = vec![
        weight(date(2024, 3, 5), 81.0),
        weight(date(2024, 3, 1), 82.0),
        weight(date(2024, 3, 5), 80.6),
        weight(date(2024, 3, 3), 81.4),
    ];

    let series = TimeSeriesAggregator::aggregate(&logs);

    assert_eq!(series.kind(), LogKind::Weight);
    assert_eq!(
        series.dates().collect::<Vec<_>>(),
        vec![date(2024, 3, 1), date(2024, 3, 3), date(2024, 3, 5)]
    );
    assert_eq!(series.value_on(date(2024, 3, 5)), Some(80.6));
}

#[test]
fn test_calories_hydration_and_exercise_sum_per_day() {
    let logs = LogsByKind {
        calories: vec![
            calories(date(2024, 3, 2), 450),
            calories(date(2024, 3, 2), 700),
            calories(date(2024, 3, 1), 900),
        ],
        hydration: vec![
            hydration(date(2024, 3, 2), 3),
            hydration(date(2024, 3, 2), 4),
        ],
        exercise: vec![
            exercise(date(2024, 3, 2), 20),
            exercise(date(2024, 3, 2), 25),
        ],
        ..LogsByKind::default()
    };

    let rollups = TimeSeriesAggregator::rollup(&logs);

    assert_eq!(rollups.calories.len(), 2);
    assert_eq!(rollups.calories.value_on(date(2024, 3, 2)), Some(1150.0));
    assert_eq!(rollups.hydration.value_on(date(2024, 3, 2)), Some(7.0));
    assert_eq!(rollups.exercise.value_on(date(2024, 3, 2)), Some(45.0));
    assert!(rollups.weight.is_empty());
}

#[test]
fn test_empty_input_gives_empty_series() {
    let rollups = TimeSeriesAggregator::rollup(&LogsByKind::default());
    assert!(rollups.weight.is_empty());
    assert!(rollups.calories.is_empty());
    assert!(rollups.calories.mean().is_none());
    assert_eq!(rollups.logged_days(date(2024, 3, 10), 14), 0);
}

#[test]
fn test_window_pads_intake_but_not_weight() {
    let as_of = date(2024, 3, 10);
    let logs = LogsByKind {
        weight: vec![weight(date(2024, 3, 4), 80.0), weight(date(2024, 3, 9), 79.5)],
        calories: vec![calories(date(2024, 3, 9), 2000)],
        ..LogsByKind::default()
    };
    let rollups = TimeSeriesAggregator::rollup(&logs);

    let intake = rollups.calories.window(as_of, 7);
    assert_eq!(intake.len(), 7);
    assert_eq!(intake.first().unwrap().date, date(2024, 3, 4));
    assert_eq!(intake.value_on(date(2024, 3, 5)), Some(0.0));
    assert!((intake.mean().unwrap() - 2000.0 / 7.0).abs() < 1e-9);

    let weights = rollups.weight.window(as_of, 7);
    assert_eq!(weights.len(), 2);
    assert!(weights.value_on(date(2024, 3, 5)).is_none());
}

#[test]
fn test_last_n_and_up_to() {
    let logs: Vec<_> = (1..=10)
        .map(|d| weight(date(2024, 3, d), f64::from(d).mul_add(-0.1, 80.0)))
        .collect();
    let series = TimeSeriesAggregator::aggregate(&logs);

    let recent = series.last_n(3);
    assert_eq!(recent.len(), 3);
    assert_eq!(recent.first().unwrap().date, date(2024, 3, 8));
    assert_eq!(series.last_n(50).len(), 10);

    let earlier = series.up_to(date(2024, 3, 4));
    assert_eq!(earlier.len(), 4);
    assert_eq!(earlier.last().unwrap().date, date(2024, 3, 4));
}

#[test]
fn test_logged_days_counts_any_kind_once() {
    let entries = vec![
        LogEntry::Weight(weight(date(2024, 3, 10), 80.0)),
        LogEntry::Calories(calories(date(2024, 3, 10), 500)),
        LogEntry::Hydration(hydration(date(2024, 3, 8), 2)),
        LogEntry::Exercise(exercise(date(2024, 2, 1), 30)),
    ];
    let rollups = TimeSeriesAggregator::rollup(&LogsByKind::from_entries(entries));

    assert_eq!(rollups.logged_days(date(2024, 3, 10), 14), 2);
    assert_eq!(rollups.logged_days(date(2024, 3, 10), 1), 1);
}
