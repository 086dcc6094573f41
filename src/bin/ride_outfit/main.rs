// ABOUTME: Ride Outfit CLI - cycling clothing recommendations from the command line
// ABOUTME: Recommends outfits, checks rule tables, validates worn outfits, and lists garment domains
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Recommend an outfit for a cold tempo ride
//! ride-outfit recommend --temperature 4 --wind 18 --activity tempo
//!
//! # Include the per-slot rule trace
//! ride-outfit recommend --temperature 8 --activity intervals --cold-hands --trace
//!
//! # Check every rule table for ordering and domain defects
//! ride-outfit check-tables
//!
//! # Validate a worn-outfit document (file path or - for stdin)
//! ride-outfit validate-outfit worn.json
//!
//! # List the accepted values of every garment zone
//! ride-outfit domains
//! ```
//!
//! JSON goes to stdout; logs go to stderr.

mod commands;
mod helpers;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ride_outfit::config::AppConfig;
use ride_outfit::logging::LoggingConfig;
use ride_outfit::outfit_engine::{ensure_rule_tables, OutfitAssembler, RuleTableSet};
use std::path::PathBuf;
use tracing::debug;

use commands::recommend::RecommendArgs;

#[derive(Parser)]
#[command(
    name = "ride-outfit",
    about = "Cycling outfit recommendations",
    long_about = "Deterministic cycling clothing recommendations from weather, planned activity, and rider thermal profile."
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
    /// Recommend an outfit and print it as JSON
    Recommend(RecommendArgs),

    /// Check the rule tables and print a defect report
    CheckTables,

    /// Validate a worn-outfit JSON document against the garment domains
    ValidateOutfit {
        /// Path to the JSON document, or `-` for stdin
        input: PathBuf,
    },

    /// Print every zone's accepted garment values as JSON
    Domains,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init().context("Failed to initialize logging")?;

    let config = AppConfig::from_env();
    config.log_summary();

    let tables = RuleTableSet::standard();

    match cli.command {
        Command::Recommend(args) => {
            ensure_rule_tables(&tables)?;
            let assembler = OutfitAssembler::with_tables(config.engine, tables);
            commands::recommend::run(&assembler, &args)?;
        }
        Command::CheckTables => {
            commands::tables::check(&tables)?;
        }
        Command::ValidateOutfit { input } => {
            ensure_rule_tables(&tables)?;
            commands::validate::run(&input)?;
        }
        Command::Domains => {
            commands::domains::run()?;
        }
    }

    debug!("Command completed");
    Ok(())
}
