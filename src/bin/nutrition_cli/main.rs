// ABOUTME: Nutrition CLI - command-line front end for target and progress reports
// ABOUTME: Loads a profile and meal log from JSON files and prints reports as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Calorie and macro targets for a profile
//! nutrition-cli targets --profile profile.json
//!
//! # Progress for one date (defaults to today)
//! nutrition-cli daily --profile profile.json --meals meals.json --date 2024-06-12
//!
//! # Calorie series for the Monday-based week containing a date
//! nutrition-cli weekly --profile profile.json --meals meals.json --date 2024-06-12
//!
//! # Evaluate ages and defaults against a fixed date
//! nutrition-cli --today 2024-06-15 targets --profile profile.json
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use nutrition_tracker::logging::LoggingConfig;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "nutrition-cli",
    about = "Nutrition target and progress reports",
    long_about = "Computes calorie and macronutrient targets from a profile and reports daily and weekly intake progress from a meal log."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Date used as "today" for ages and defaults (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Print calorie and macronutrient targets
    Targets {
        /// Profile JSON file
        #[arg(long)]
        profile: PathBuf,
    },

    /// Print the progress report of one date
    Daily {
        /// Profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Meal log JSON file (array of daily records)
        #[arg(long)]
        meals: PathBuf,

        /// Report date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Print the calorie series of one week
    Weekly {
        /// Profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Meal log JSON file (array of daily records)
        #[arg(long)]
        meals: PathBuf,

        /// Any date within the week (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let today = cli.today.unwrap_or_else(|| Utc::now().date_naive());
    info!(%today, "Nutrition CLI");

    match cli.command {
        Command::Targets { profile } => {
            commands::targets::show(&profile, today).await?;
        }
        Command::Daily {
            profile,
            meals,
            date,
        } => {
            commands::progress::daily(&profile, &meals, date.unwrap_or(today), today).await?;
        }
        Command::Weekly {
            profile,
            meals,
            date,
        } => {
            commands::progress::weekly(&profile, &meals, date.unwrap_or(today), today).await?;
        }
    }

    Ok(())
}
