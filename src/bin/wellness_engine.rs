// ABOUTME: Command-line front end for the wellness insights engine
// ABOUTME: Computes prediction reports from JSON request files and prints BMR/TDEE estimates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Full prediction report for one user
//! wellness-engine report --input request.json --as-of 2024-04-30 --pretty
//!
//! # Reports for an array of requests, evaluated in parallel
//! wellness-engine batch --input requests.json
//!
//! # BMR and TDEE only
//! wellness-engine energy --age 30 --gender male --height-cm 180 --weight-kg 80 --activity moderate
//!
//! # Print the effective policy (defaults plus WELLNESS_* overrides)
//! wellness-engine config --pretty
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use wellness_engine::energy::EnergyModel;
use wellness_engine::logging::LoggingConfig;
use wellness_engine::models::{ActivityLevel, Gender, HealthGoal, Profile};
use wellness_engine::request::{load_request, load_requests};
use wellness_engine::{InsightsConfig, InsightsEngine};

#[derive(Parser)]
#[command(
    name = "wellness-engine",
    about = "Health metrics and predictive insights engine",
    long_about = "Computes BMR/TDEE, weight forecasts, plateau risk, calorie targets, goal success and recommendations from a profile and health logs."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Policy configuration file (JSON); defaults plus WELLNESS_* overrides otherwise
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Compute a prediction report for one user
    Report {
        /// Request file with profile and logs
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Report date (YYYY-MM-DD), overriding the file's as_of
        #[arg(long)]
        as_of: Option<NaiveDate>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        /// Print full-precision values instead of display rounding
        #[arg(long)]
        raw: bool,
    },

    /// Compute reports for an array of requests
    Batch {
        /// Request file holding a JSON array of requests
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Report date applied to every request
        #[arg(long)]
        as_of: Option<NaiveDate>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Estimate BMR and TDEE for a profile
    Energy {
        /// Age in years
        #[arg(long)]
        age: u32,

        /// Biological sex
        #[arg(long, value_enum)]
        gender: GenderArg,

        /// Height in centimeters
        #[arg(long)]
        height_cm: f64,

        /// Weight in kilograms
        #[arg(long)]
        weight_kg: f64,

        /// Activity level (sedentary, light, moderate, active, very_active)
        #[arg(long, default_value = "moderate")]
        activity: String,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Print the effective policy configuration
    Config {
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(value: GenderArg) -> Self {
        match value {
            GenderArg::Male => Self::Male,
            GenderArg::Female => Self::Female,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose { logging.verbose() } else { logging };
    logging.init()?;

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Report {
            input,
            as_of,
            pretty,
            raw,
        } => run_report(config, &input, as_of, pretty, raw),
        Command::Batch {
            input,
            as_of,
            pretty,
        } => run_batch(config, &input, as_of, pretty),
        Command::Energy {
            age,
            gender,
            height_cm,
            weight_kg,
            activity,
            pretty,
        } => {
            let profile = Profile {
                age,
                gender: gender.into(),
                height_cm,
                weight_kg,
                activity_level: ActivityLevel::from_str_lossy(&activity),
                health_goal: HealthGoal::Maintenance,
            };
            let estimate = EnergyModel::new(&config.energy)
                .estimate(&profile)
                .context("Cannot estimate energy for this profile")?;
            print_json(&estimate, pretty)
        }
        Command::Config { pretty } => print_json(&config, pretty),
    }
}

fn load_config(path: Option<&Path>) -> Result<InsightsConfig> {
    let Some(path) = path else {
        return InsightsConfig::load().context("Invalid WELLNESS_* configuration");
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: InsightsConfig = serde_json::from_str(&json)
        .with_context(|| format!("Invalid config JSON in {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid policy in {}", path.display()))?;
    info!(path = %path.display(), "Loaded policy configuration");
    Ok(config)
}

fn run_report(
    config: InsightsConfig,
    input: &Path,
    as_of: Option<NaiveDate>,
    pretty: bool,
    raw: bool,
) -> Result<()> {
    let request = load_request(input, as_of)?;
    let engine = InsightsEngine::with_config(config);
    let report = engine
        .compute_report(&request.profile, &request.logs, request.as_of)
        .context("Failed to compute prediction report")?;

    if raw {
        print_json(&report, pretty)
    } else {
        print_json(&report.rounded_for_display(), pretty)
    }
}

fn run_batch(
    config: InsightsConfig,
    input: &Path,
    as_of: Option<NaiveDate>,
    pretty: bool,
) -> Result<()> {
    let requests = load_requests(input, as_of)?;
    let engine = InsightsEngine::with_config(config);

    let results: Vec<serde_json::Value> = engine
        .compute_reports(&requests)
        .into_iter()
        .enumerate()
        .map(|(idx, result)| match result {
            Ok(report) => json!({ "report": report.rounded_for_display() }),
            Err(error) => {
                warn!(request = idx, error = %error, "Request failed");
                json!({ "error": error })
            }
        })
        .collect();

    info!(requests = requests.len(), "Batch complete");
    print_json(&results, pretty)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{output}");
    Ok(())
}
