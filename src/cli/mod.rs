//! Command-line interface for scoreboard.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **replay**: Apply a script of start/update/finish operations and print the summary
//! - **demo**: Play a fixed World Cup round and print the summary
//!
//! ## Usage
//!
//! ```text
//! # Replay a script using wall-clock kick-off times
//! scoreboard replay opening_day.csv
//!
//! # Reproducible kick-off times, one minute apart
//! scoreboard replay opening_day.csv --start-at 2026-06-11T16:00:00Z --step-seconds 60
//!
//! # JSON output for scripting
//! scoreboard --format json demo
//! ```

use clap::{Parser, Subcommand};

pub mod demo;
pub mod replay;
pub mod report;

#[derive(Parser)]
#[command(name = "scoreboard")]
#[command(version)]
#[command(about = "Track in-progress matches and print a ranked live scoreboard")]
#[command(
    long_about = "scoreboard keeps the live state of in-progress matches.\n\nMatches start at 0-0, scores may only go up, and finished matches leave the board.\nThe summary lists matches by total score, most recent kick-off first among equal totals."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a script of scoreboard operations
    Replay(replay::ReplayArgs),

    /// Play a sample World Cup round
    Demo(demo::DemoArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
