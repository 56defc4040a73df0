// ABOUTME: Profile validation errors naming the field that failed
// ABOUTME: Converts into AppError with the INVALID_PROFILE code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Reasons a profile snapshot cannot be used for energy calculations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    /// Body weight is zero, negative, or not a finite number
    #[error("weight_kg must be a positive number, got {0}")]
    NonPositiveWeight(f64),

    /// Height is zero, negative, or not a finite number
    #[error("height_cm must be a positive number, got {0}")]
    NonPositiveHeight(f64),

    /// Age is below the validated range of the energy equations
    #[error("age must be at least {min} years, got {actual}")]
    AgeOutOfRange {
        /// Minimum supported age
        min: u32,
        /// Age supplied by the caller
        actual: u32,
    },

    /// The combination of values yields a non-positive basal metabolic rate
    #[error("profile yields a non-positive BMR ({0:.1} kcal)")]
    NonPhysicalBmr(f64),
}

impl From<ProfileError> for AppError {
    fn from(error: ProfileError) -> Self {
        Self::new(ErrorCode::InvalidProfile, error.to_string())
    }
}
