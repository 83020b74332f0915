use std::cmp::Ordering;

use crate::core::game::Match;

/// Order two matches for the summary.
///
/// 1. Higher total score first
/// 2. Later kick-off first
/// 3. Home team, then away team, alphabetically
pub fn compare(a: &Match, b: &Match) -> Ordering {
    b.total_score()
        .cmp(&a.total_score())
        .then_with(|| b.start_time.cmp(&a.start_time))
        .then_with(|| a.home_team.cmp(&b.home_team))
        .then_with(|| a.away_team.cmp(&b.away_team))
}

/// Sort matches into summary order
pub fn rank(matches: &mut [Match]) {
    matches.sort_by(compare);
}
