// ABOUTME: Loads report requests from JSON files for the command-line interface
// ABOUTME: Accepts logs grouped by kind or as a flat tagged entry list, with an as_of override
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;
use wellness_core::models::{LogEntry, LogsByKind, Profile};
use wellness_intelligence::ReportRequest;

/// On-disk shape of one request
///
/// ```json
/// {
///   "profile": { "age": 30, "gender": "male", ... },
///   "logs": { "weight": [ ... ], "calories": [ ... ] },
///   "entries": [ { "kind": "weight", "date": "2024-04-01", ... } ],
///   "as_of": "2024-04-30"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct RequestFile {
    /// Profile snapshot
    pub profile: Profile,
    /// Logs grouped by kind
    #[serde(default)]
    pub logs: LogsByKind,
    /// Flat tagged entries, merged into `logs`
    #[serde(default)]
    pub entries: Vec<LogEntry>,
    /// Report date, unless given on the command line
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

impl RequestFile {
    /// Merge the entry list and resolve the report date
    ///
    /// # Errors
    ///
    /// Returns an error if neither the file nor the override supplies `as_of`
    pub fn into_request(self, as_of_override: Option<NaiveDate>) -> Result<ReportRequest> {
        let as_of = as_of_override
            .or(self.as_of)
            .context("Request has no as_of date; pass --as-of")?;

        let mut logs = self.logs;
        for entry in self.entries {
            logs.push(entry);
        }

        Ok(ReportRequest {
            profile: self.profile,
            logs,
            as_of,
        })
    }
}

/// Request file holding either one request or an array of them
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RequestDocument {
    Batch(Vec<RequestFile>),
    Single(Box<RequestFile>),
}

/// Parse a single request from JSON text
///
/// # Errors
///
/// Returns an error if the text is not a valid request or has no report date
pub fn parse_request(json: &str, as_of_override: Option<NaiveDate>) -> Result<ReportRequest> {
    let file: RequestFile = serde_json::from_str(json).context("Invalid report request JSON")?;
    file.into_request(as_of_override)
}

/// Load one request from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn load_request(path: &Path, as_of_override: Option<NaiveDate>) -> Result<ReportRequest> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file {}", path.display()))?;
    let request = parse_request(&json, as_of_override)
        .with_context(|| format!("Failed to load request from {}", path.display()))?;
    debug!(
        path = %path.display(),
        logs = request.logs.len(),
        as_of = %request.as_of,
        "Loaded report request"
    );
    Ok(request)
}

/// Load one or many requests from a file
///
/// A single object yields one request; an array yields one per element.
///
/// # Errors
///
/// Returns an error if the file cannot be read or any request is invalid
pub fn load_requests(path: &Path, as_of_override: Option<NaiveDate>) -> Result<Vec<ReportRequest>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file {}", path.display()))?;
    let document: RequestDocument = serde_json::from_str(&json)
        .with_context(|| format!("Invalid report request JSON in {}", path.display()))?;

    let files = match document {
        RequestDocument::Batch(files) => files,
        RequestDocument::Single(file) => vec![*file],
    };
    files
        .into_iter()
        .enumerate()
        .map(|(idx, file)| {
            file.into_request(as_of_override)
                .with_context(|| format!("Request #{idx} in {}", path.display()))
        })
        .collect()
}
