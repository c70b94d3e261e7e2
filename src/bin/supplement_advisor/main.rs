// ABOUTME: Supplement advisor CLI - generate, parse, and inspect supplementation reports
// ABOUTME: Thin clap front-end over the report generation service and the structuring engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors
//!
//! Usage:
//! ```bash
//! # Generate a report for a questionnaire profile
//! supplement-advisor generate --profile profile.json
//!
//! # Same, printing the result and the parsed supplements as JSON
//! supplement-advisor generate --profile profile.json --json
//!
//! # Parse an existing report into supplement records
//! supplement-advisor parse --input report.md
//!
//! # Print the offline fallback report
//! supplement-advisor fallback --profile profile.json
//!
//! # Ask a single question
//! supplement-advisor chat "¿Puedo tomar creatina y cafeína juntas?"
//! ```

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use supplement_advisor::logging::LoggingConfig;

#[derive(Parser)]
#[command(
    name = "supplement-advisor",
    about = "Supplement report generation and structuring",
    long_about = "Generates personalized supplementation reports through the configured completion endpoint and parses report text into structured supplement records."
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
    /// Generate a report for a profile
    Generate {
        /// Profile JSON file (questionnaire answers)
        #[arg(long)]
        profile: PathBuf,

        /// Use this prompt instead of the built-in template
        #[arg(long)]
        prompt_file: Option<PathBuf>,

        /// Print the result and parsed supplements as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse report text into supplement records (JSON)
    Parse {
        /// Report text file
        #[arg(long)]
        input: PathBuf,
    },

    /// Print the offline fallback report for a profile
    Fallback {
        /// Profile JSON file (questionnaire answers)
        #[arg(long)]
        profile: PathBuf,
    },

    /// Ask a single question, without retry or fallback
    Chat {
        /// Question text
        question: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    match cli.command {
        Command::Generate {
            profile,
            prompt_file,
            json,
        } => commands::generate(&profile, prompt_file.as_deref(), json).await,
        Command::Parse { input } => commands::parse(&input).await,
        Command::Fallback { profile } => commands::fallback(&profile).await,
        Command::Chat { question } => commands::chat(&question).await,
    }
}
