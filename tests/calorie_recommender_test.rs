// ABOUTME: Integration tests for daily calorie targets
// ABOUTME: Covers goal offsets, the BMR safety floor, adherence nudges and weekly targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{calories, date, female_profile, male_profile};
use wellness_engine::aggregator::TimeSeriesAggregator;
use wellness_engine::calorie::{average_logged_intake, CalorieRecommender};
use wellness_engine::config::insights::{CalorieConfig, EnergyConfig};
use wellness_engine::energy::{EnergyEstimate, EnergyModel};
use wellness_engine::models::{HealthGoal, Profile};

fn energy_for(profile: &Profile) -> EnergyEstimate {
    let config = EnergyConfig::default();
    EnergyModel::new(&config).estimate(profile).unwrap()
}

#[test]
fn test_goal_offsets_from_tdee() {
    common::init_test_logging();
    let config = CalorieConfig::default();
    let recommender = CalorieRecommender::new(&config);
    let energy = energy_for(&male_profile(HealthGoal::Maintenance));

    let cases = [
        (HealthGoal::WeightLoss, 2259, -500),
        (HealthGoal::Maintenance, 2759, 0),
        (HealthGoal::MuscleGain, 3059, 300),
        (HealthGoal::Endurance, 2959, 200),
        (HealthGoal::Unrecognized, 2759, 0),
    ];
    for (goal, expected, adjustment) in cases {
        let rec = recommender.recommend(&energy, goal, None);
        assert_eq!(rec.recommended_calories, expected, "{goal:?}");
        assert_eq!(rec.adjustment, adjustment, "{goal:?}");
    }
}

#[test]
fn test_weight_loss_reason_and_weekly_target() {
    let config = CalorieConfig::default();
    let rec = CalorieRecommender::new(&config).recommend(
        &energy_for(&male_profile(HealthGoal::WeightLoss)),
        HealthGoal::WeightLoss,
        None,
    );

    assert_eq!(rec.reason, "500 kcal daily deficit for steady weight loss");
    assert!((rec.weekly_target_kg + 500.0 * 7.0 / 7700.0).abs() < 1e-9);
    assert!((rec.tdee - 2759.0).abs() < 1e-9);
    assert!((rec.bmr - 1780.0).abs() < 1e-9);
}

#[test]
fn test_deficit_is_floored_at_bmr() {
    let config = CalorieConfig::default();
    // BMR 1345.25, TDEE 1614.3: a 500 kcal deficit would undercut resting needs
    let energy = energy_for(&female_profile(HealthGoal::WeightLoss));
    let rec = CalorieRecommender::new(&config).recommend(&energy, HealthGoal::WeightLoss, None);

    assert_eq!(rec.recommended_calories, 1345);
    assert_eq!(rec.adjustment, 1345 - 1614);
    assert!(rec.reason.contains("held at your BMR"));
    assert!(f64::from(rec.recommended_calories) >= energy.bmr.floor());
}

#[test]
fn test_adherence_nudges_are_capped() {
    let config = CalorieConfig::default();
    let recommender = CalorieRecommender::new(&config);
    let energy = energy_for(&male_profile(HealthGoal::WeightLoss));

    let eating_more = recommender.recommend(&energy, HealthGoal::WeightLoss, Some(1.2));
    assert_eq!(eating_more.recommended_calories, 2359);
    assert!(eating_more.reason.contains("raised 100 kcal"));

    let eating_less = recommender.recommend(&energy, HealthGoal::WeightLoss, Some(0.5));
    assert_eq!(eating_less.recommended_calories, 2159);
    assert!(eating_less.reason.contains("lowered 100 kcal"));

    let within_tolerance = recommender.recommend(&energy, HealthGoal::WeightLoss, Some(1.05));
    assert_eq!(within_tolerance.recommended_calories, 2259);
}

#[test]
fn test_nudge_cap_is_configurable() {
    let config = CalorieConfig::default();
    let energy = energy_for(&male_profile(HealthGoal::Maintenance));

    // 2759 * 0.12 = 331 kcal, above the default cap
    let capped =
        CalorieRecommender::new(&config).recommend(&energy, HealthGoal::Maintenance, Some(1.12));
    assert_eq!(capped.recommended_calories, 2859);

    let generous = CalorieConfig {
        max_adherence_nudge_kcal: 1000,
        ..CalorieConfig::default()
    };
    let uncapped =
        CalorieRecommender::new(&generous).recommend(&energy, HealthGoal::Maintenance, Some(1.12));
    assert_eq!(uncapped.recommended_calories, 3090);
}

#[test]
fn test_recommend_from_logged_intake() {
    let config = CalorieConfig::default();
    let energy = energy_for(&male_profile(HealthGoal::WeightLoss));
    let as_of = date(2024, 5, 14);

    // Two logged days averaging 2900 kcal; unlogged days are skipped, not zero
    let series = TimeSeriesAggregator::aggregate(&[
        calories(date(2024, 5, 10), 1500),
        calories(date(2024, 5, 10), 1300),
        calories(date(2024, 5, 12), 3000),
        calories(date(2024, 4, 1), 9000),
    ]);
    let intake = average_logged_intake(&series, as_of, 14);
    assert!((intake.unwrap() - 2900.0).abs() < 1e-9);

    let rec = CalorieRecommender::new(&config).recommend_from_intake(
        &energy,
        HealthGoal::WeightLoss,
        intake,
    );
    assert_eq!(rec.recommended_calories, 2359);
    assert_eq!(rec.average_intake_kcal, Some(2900.0));
    assert!((rec.plan_adherence_ratio.unwrap() - 2900.0 / 2259.0).abs() < 1e-9);
    assert!((rec.adherence_to_target().unwrap() - 2900.0 / 2359.0).abs() < 1e-9);
}

#[test]
fn test_no_intake_means_no_adherence() {
    let config = CalorieConfig::default();
    let energy = energy_for(&male_profile(HealthGoal::MuscleGain));
    let rec = CalorieRecommender::new(&config).recommend_from_intake(
        &energy,
        HealthGoal::MuscleGain,
        None,
    );

    assert_eq!(rec.recommended_calories, 3059);
    assert!(rec.average_intake_kcal.is_none());
    assert!(rec.adherence_to_target().is_none());
}
