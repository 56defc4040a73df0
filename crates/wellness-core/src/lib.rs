// ABOUTME: Core types and constants for the wellness insights engine
// ABOUTME: Foundation crate with error handling, profile and log models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Wellness Core
//!
//! Foundation crate providing shared types and constants for the wellness insights
//! engine. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ProfileError`
//! - **models**: User profile snapshot and the closed set of health log entries
//! - **constants**: Evidence-based heuristic constants organized by domain

/// Unified error handling system with standard error codes
pub mod errors;

/// Core data models (Profile, `LogEntry`, log kinds)
pub mod models;

/// Heuristic constants organized by domain
pub mod constants;
