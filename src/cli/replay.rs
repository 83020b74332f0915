//! Replay command - apply a script of scoreboard operations.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use chrono::{DateTime, Duration, Utc};
use clap::Args;
use tracing::warn;

use crate::cli::report::print_summary;
use crate::cli::OutputFormat;
use crate::core::clock::{Clock, SteppingClock, SystemClock};
use crate::core::game::Match;
use crate::parsing::script::{parse_script_file, Command};
use crate::registry::audit::ScoreboardError;
use crate::registry::engine::MatchRegistry;

/// Arguments for the replay command
#[derive(Args)]
pub struct ReplayArgs {
    /// Script file (TSV, or CSV when the name ends in .csv)
    #[arg(required = true)]
    pub script: PathBuf,

    /// Number of summary rows to show (all by default)
    #[arg(short = 'n', long)]
    pub top: Option<usize>,

    /// Kick-off time of the first started match (RFC 3339).
    /// Switches from wall-clock time to a stepping clock.
    #[arg(long)]
    pub start_at: Option<DateTime<Utc>>,

    /// Seconds between consecutive kick-offs when --start-at is given
    #[arg(long, default_value = "60", requires = "start_at")]
    pub step_seconds: u32,

    /// Log rejected operations and continue instead of stopping
    #[arg(long)]
    pub keep_going: bool,
}

/// Execute the replay command
///
/// # Errors
///
/// Returns an error if the script cannot be parsed, or if an operation is
/// rejected and `--keep-going` was not given.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ReplayArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let steps = parse_script_file(&args.script)
        .with_context(|| format!("Failed to load script {}", args.script.display()))?;

    if verbose {
        eprintln!(
            "Loaded {} steps from {}",
            steps.len(),
            args.script.display()
        );
    }

    let clock: Arc<dyn Clock> = match args.start_at {
        Some(start) => Arc::new(SteppingClock::new(
            start,
            Duration::seconds(i64::from(args.step_seconds)),
        )),
        None => Arc::new(SystemClock),
    };
    let registry = MatchRegistry::with_clock(clock);

    let mut rejected = 0usize;
    for step in &steps {
        match apply(&registry, &step.command) {
            Ok(Some(summary)) => print_summary(&summary, args.top, format)?,
            Ok(None) => {}
            Err(e) if args.keep_going => {
                warn!(line = step.line, "Skipping rejected step: {e}");
                rejected += 1;
            }
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("Step on line {} was rejected", step.line)));
            }
        }
    }

    if verbose {
        eprintln!(
            "Applied {} steps ({rejected} rejected)",
            steps.len() - rejected
        );
    }

    print_summary(&registry.summary(), args.top, format)
}

/// Apply one command; `summary` commands hand back the current ranking
fn apply(
    registry: &MatchRegistry,
    command: &Command,
) -> Result<Option<Vec<Match>>, ScoreboardError> {
    match command {
        Command::Start {
            home_team,
            away_team,
        } => registry.start(home_team, away_team)?,
        Command::Update {
            home_team,
            away_team,
            score,
        } => registry.update(home_team, away_team, score.home, score.away)?,
        Command::Finish {
            home_team,
            away_team,
        } => registry.finish(home_team, away_team)?,
        Command::Summary => return Ok(Some(registry.summary())),
    }
    Ok(None)
}
