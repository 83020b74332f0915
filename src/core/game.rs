use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::types::{MatchRecord, Score, TeamPair};

/// Read-only view of an in-progress match, as returned by the summary.
///
/// Views are detached copies; they never change once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    pub start_time: DateTime<Utc>,
}

impl Match {
    /// Project a stored entry into a view
    pub fn from_entry(pair: TeamPair, record: &MatchRecord) -> Self {
        Self {
            home_team: pair.home_team,
            away_team: pair.away_team,
            home_score: record.score.home,
            away_score: record.score.away,
            start_time: record.start_time,
        }
    }

    #[must_use]
    pub fn score(&self) -> Score {
        Score::new(self.home_score, self.away_score)
    }

    #[must_use]
    pub fn total_score(&self) -> u64 {
        self.score().total()
    }

    #[must_use]
    pub fn team_pair(&self) -> TeamPair {
        TeamPair::new(&self.home_team, &self.away_team)
    }
}

impl std::fmt::Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team, self.home_score, self.away_team, self.away_score
        )
    }
}
