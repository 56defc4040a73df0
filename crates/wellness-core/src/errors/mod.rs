// ABOUTME: Unified error type and error codes shared by every engine crate
// ABOUTME: AppError carries a stable ErrorCode plus a human-readable message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The engine has a deliberately small failure surface: a report either completes
//! (possibly carrying sentinel sub-results) or fails with [`ErrorCode::InvalidProfile`].
//! The remaining codes exist for the outer edges (configuration, request decoding).

mod profile;

pub use profile::ProfileError;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Profile is missing or carries non-physical values
    #[serde(rename = "INVALID_PROFILE")]
    InvalidProfile,
    /// Configuration failed to load or validate
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid,
    /// Request or report could not be (de)serialized
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidProfile => "The user profile is missing or contains non-physical values",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidProfile => "INVALID_PROFILE",
            Self::ConfigInvalid => "CONFIG_INVALID",
            Self::SerializationError => "SERIALIZATION_ERROR",
        };
        f.write_str(name)
    }
}

/// Unified error type for the engine
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create an invalid profile error
    #[must_use]
    pub fn invalid_profile(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidProfile, message)
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Create a serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string())
    }
}

/// Result alias used across the engine crates
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_and_message() {
        let err = AppError::invalid_profile("weight_kg must be positive");
        assert_eq!(err.to_string(), "INVALID_PROFILE: weight_kg must be positive");
    }

    #[test]
    fn test_serde_error_maps_to_serialization_code() {
        let err: AppError = serde_json::from_str::<ErrorCode>("\"NOPE\"")
            .unwrap_err()
            .into();
        assert_eq!(err.code, ErrorCode::SerializationError);
    }

    #[test]
    fn test_serde_uses_screaming_codes() {
        let json = serde_json::to_string(&ErrorCode::InvalidProfile).unwrap_or_default();
        assert_eq!(json, "\"INVALID_PROFILE\"");
    }
}
