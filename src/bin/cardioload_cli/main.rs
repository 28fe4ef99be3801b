// ABOUTME: cardioload CLI - compute training loads from sample files and convert between scales
// ABOUTME: Subcommands for load computation, unit conversion, heart rate zones, and catalogues
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Banister TRIMP for one day of samples
//! cardioload-cli compute --file strap.json --method banister --end 2025-03-02 --age 40
//!
//! # Lucia TRIMP with lactate thresholds, also expressed on the Edwards scale
//! cardioload-cli compute --file strap.json --method lucia --vt1 150 --vt2 170 --convert-to edwards
//!
//! # Acute:chronic ratio over the 28 days ending today
//! cardioload-cli compute --file strap.json --method acwr
//!
//! # Convert a Banister score to the Edwards scale
//! cardioload-cli convert 120 banister edwards
//!
//! # Heart rate zones for a maximum heart rate
//! cardioload-cli zones --max-hr 190
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use cardioload::config::AppConfig;
use cardioload_core::models::{BiologicalSex, LoadMethod};
use cardioload_core::units::UnitId;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "cardioload-cli",
    about = "Heart-rate training load calculator",
    long_about = "Computes Banister, Edwards, Lucia, and acute:chronic training loads from JSON sample files and converts scores between their scales."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute a training load from one or more source documents
    Compute(ComputeArgs),

    /// Convert a value between units of the same quantity
    Convert {
        /// Value to convert
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Unit of the value (e.g. banister, edwards, bpm, lb)
        from: UnitId,

        /// Target unit
        to: UnitId,

        /// Polynomial converter override, `UNIT=c0,c1,...` (repeatable)
        #[arg(long = "polynomial", value_name = "UNIT=COEFFS")]
        polynomials: Vec<String>,
    },

    /// Show heart rate training zones
    Zones {
        /// Maximum heart rate in bpm
        #[arg(long, conflicts_with = "age", required_unless_present = "age")]
        max_hr: Option<f64>,

        /// Age in years, for the 220 - age estimate
        #[arg(long)]
        age: Option<u32>,
    },

    /// List the training load methods
    Methods,

    /// List the units of the conversion network
    Units,
}

/// Arguments of the `compute` subcommand
#[derive(Args)]
pub struct ComputeArgs {
    /// Source document (repeatable); sources are read in the given order
    #[arg(long = "file", short = 'f', required = true)]
    pub files: Vec<PathBuf>,

    /// Method: banister, edwards, lucia, or acute_chronic
    #[arg(long, short = 'm')]
    pub method: LoadMethod,

    /// Season start (RFC 3339 or YYYY-MM-DD); defaults to `--days` before the end
    #[arg(long)]
    pub start: Option<String>,

    /// Season end, exclusive (RFC 3339 or YYYY-MM-DD); defaults to now
    #[arg(long)]
    pub end: Option<String>,

    /// Season length in days when no start is given
    #[arg(long, default_value = "1")]
    pub days: u32,

    /// Athlete name
    #[arg(long, default_value = "athlete")]
    pub name: String,

    /// Age in years
    #[arg(long)]
    pub age: Option<u32>,

    /// Biological sex: female, male, or other
    #[arg(long)]
    pub sex: Option<BiologicalSex>,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    pub date_of_birth: Option<NaiveDate>,

    /// Height in meters
    #[arg(long)]
    pub height: Option<f64>,

    /// Weight in kilograms
    #[arg(long)]
    pub weight: Option<f64>,

    /// First lactate threshold in bpm (Lucia)
    #[arg(long, requires = "vt2")]
    pub vt1: Option<f64>,

    /// Second lactate threshold in bpm (Lucia)
    #[arg(long, requires = "vt1")]
    pub vt2: Option<f64>,

    /// Also express the result in these units (repeatable)
    #[arg(long = "convert-to")]
    pub convert_to: Vec<UnitId>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::try_from_env()?;
    if cli.verbose {
        config.logging = config.logging.with_level("debug");
    }
    config.logging.init()?;
    debug!(intelligence = ?config.intelligence, "Configuration loaded");

    match cli.command {
        Command::Compute(args) => commands::compute::run(&config, args, cli.json).await?,
        Command::Convert {
            value,
            from,
            to,
            polynomials,
        } => commands::convert::run(&config, value, from, to, &polynomials, cli.json)?,
        Command::Zones { max_hr, age } => commands::zones::run(max_hr, age, cli.json)?,
        Command::Methods => commands::catalogue::methods(cli.json)?,
        Command::Units => commands::catalogue::units(cli.json)?,
    }

    Ok(())
}
