//! Rendering of the ranked summary in each output format.

use std::borrow::Cow;

use crate::cli::OutputFormat;
use crate::core::game::Match;

/// Print a ranked summary, optionally keeping only the first `top` rows
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn print_summary(
    matches: &[Match],
    top: Option<usize>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let shown = &matches[..top.map_or(matches.len(), |n| n.min(matches.len()))];

    match format {
        OutputFormat::Text => print_text_summary(shown, matches.len()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(shown)?),
        OutputFormat::Tsv => print_tsv_summary(shown),
    }

    Ok(())
}

fn print_text_summary(shown: &[Match], in_progress: usize) {
    if in_progress == 0 {
        println!("No matches in progress.");
        return;
    }

    println!("Live scoreboard ({in_progress} in progress)");
    println!("{}", "=".repeat(60));
    for (i, game) in shown.iter().enumerate() {
        println!("{:>3}. {game}", i + 1);
    }
}

fn print_tsv_summary(shown: &[Match]) {
    println!("rank\thome_team\thome_score\taway_team\taway_score\ttotal\tstart_time");
    for (i, game) in shown.iter().enumerate() {
        println!("{}", tsv_row(i + 1, game));
    }
}

fn tsv_row(rank: usize, game: &Match) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}",
        rank,
        tsv_field(&game.home_team),
        game.home_score,
        tsv_field(&game.away_team),
        game.away_score,
        game.total_score(),
        game.start_time.to_rfc3339(),
    )
}

/// Team names may carry tabs or line breaks from a CSV script; flatten them
/// to spaces so every row keeps seven columns.
fn tsv_field(value: &str) -> Cow<'_, str> {
    if value.contains(['\t', '\n', '\r']) {
        Cow::Owned(value.replace(['\t', '\n', '\r'], " "))
    } else {
        Cow::Borrowed(value)
    }
}
