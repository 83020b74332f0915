//! Demo command - play a fixed round of World Cup matches.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use clap::Args;

use crate::cli::report::print_summary;
use crate::cli::OutputFormat;
use crate::core::clock::SteppingClock;
use crate::registry::engine::MatchRegistry;

/// Arguments for the demo command
#[derive(Args)]
pub struct DemoArgs {
    /// Finish the opening match (Mexico-Canada) before printing
    #[arg(long)]
    pub finish_opener: bool,
}

/// Matches in kick-off order, with their final scores
const ROUND: [(&str, &str, u32, u32); 5] = [
    ("Mexico", "Canada", 0, 5),
    ("Spain", "Brazil", 10, 2),
    ("Germany", "France", 2, 2),
    ("Uruguay", "Italy", 6, 6),
    ("Argentina", "Australia", 3, 1),
];

fn first_kick_off() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 11, 16, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Build the demo round on a fresh registry, kick-offs one minute apart
///
/// # Errors
///
/// Returns an error if any operation is rejected.
pub fn play_round(finish_opener: bool) -> anyhow::Result<MatchRegistry> {
    let clock = SteppingClock::new(first_kick_off(), Duration::minutes(1));
    let registry = MatchRegistry::with_clock(Arc::new(clock));

    for (home, away, _, _) in ROUND {
        registry.start(home, away)?;
    }
    for (home, away, home_score, away_score) in ROUND {
        registry.update(home, away, home_score, away_score)?;
    }
    if finish_opener {
        let (home, away, _, _) = ROUND[0];
        registry.finish(home, away)?;
    }

    Ok(registry)
}

/// Execute the demo command
///
/// # Errors
///
/// Returns an error if the round cannot be played or printed.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: DemoArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let registry = play_round(args.finish_opener)?;

    if verbose {
        eprintln!(
            "Played {} matches{}",
            ROUND.len(),
            if args.finish_opener {
                ", opener finished"
            } else {
                ""
            }
        );
    }

    print_summary(&registry.summary(), None, format)
}
