// ABOUTME: Configuration module for wellness-intelligence crate
// ABOUTME: Re-exports insights policy configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Engine policy configuration (energy, forecasting, plateau, calories, scoring, habits)
pub mod insights;

pub use insights::{ConfigError, InsightsConfig};
