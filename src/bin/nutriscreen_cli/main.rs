// ABOUTME: NutriScreen CLI - command-line malnutrition screening against WHO growth standards
// ABOUTME: Screens single measurements, JSON-lines batches and inspects reference tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriScreen Contributors
//!
//! Usage:
//! ```bash
//! # Screen one child
//! nutriscreen-cli screen --weight 12.2 --height 87.1 --birth-date 2022-03-15 --sex male
//!
//! # Screen with MUAC and modifiers on a fixed observation date
//! nutriscreen-cli screen --weight 9.1 --height 84 --birth-date 2021-09-01 --sex female \
//!     --observation-date 2024-03-01 --muac 11.2 --diet vegan --allergy peanuts
//!
//! # Screen a JSON-lines file in parallel
//! nutriscreen-cli batch --input visits.jsonl --output reports.jsonl
//!
//! # Show the reference row used for a lookup
//! nutriscreen-cli lookup --indicator wfh --sex female --index 65
//! ```

mod commands;
mod helpers;

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use nutriscreen::logging::LoggingConfig;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "nutriscreen-cli",
    about = "NutriScreen malnutrition screening CLI",
    long_about = "Classifies child growth measurements against the WHO 2006 growth standards and computes a malnutrition risk score."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Screen a single measurement and print the JSON report
    Screen {
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Height or length in centimeters
        #[arg(long)]
        height: f64,

        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        birth_date: NaiveDate,

        /// Sex (male or female)
        #[arg(long)]
        sex: String,

        /// Observation date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        observation_date: Option<NaiveDate>,

        /// Mid-upper arm circumference in centimeters
        #[arg(long)]
        muac: Option<f64>,

        /// Diet pattern (omnivore, vegetarian, vegan, ...)
        #[arg(long)]
        diet: Option<String>,

        /// Declared food allergies (free text)
        #[arg(long)]
        allergy: Option<String>,

        /// Print a human-readable summary instead of JSON
        #[arg(long)]
        summary: bool,
    },

    /// Screen a JSON-lines file, one measurement per line
    Batch {
        /// Input file (JSON lines)
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Show the reference entry used for an indicator lookup
    Lookup {
        /// Indicator (weight_for_age, height_for_age, weight_for_height, bmi_for_age)
        #[arg(long)]
        indicator: String,

        /// Sex (male or female)
        #[arg(long)]
        sex: String,

        /// Age in months, or height in centimeters for weight-for-height
        #[arg(long)]
        index: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // --verbose wins over RUST_LOG; without either the CLI stays quiet
    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else if env::var_os("RUST_LOG").is_none() {
        logging.with_level("warn")
    } else {
        logging
    };
    logging.init()?;

    debug!("NutriScreen CLI");

    match cli.command {
        Command::Screen {
            weight,
            height,
            birth_date,
            sex,
            observation_date,
            muac,
            diet,
            allergy,
            summary,
        } => {
            let args = commands::screen::ScreenArgs {
                weight,
                height,
                birth_date,
                sex,
                observation_date,
                muac,
                diet,
                allergy,
            };
            commands::screen::run(&args, summary)?;
        }
        Command::Batch { input, output } => {
            commands::batch::run(&input, output.as_deref())?;
        }
        Command::Lookup {
            indicator,
            sex,
            index,
        } => {
            commands::lookup::run(&indicator, &sex, index)?;
        }
    }

    Ok(())
}
