use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Names the caller-supplied fields of a scoreboard operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    HomeTeam,
    AwayTeam,
    HomeScore,
    AwayScore,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HomeTeam => write!(f, "Home Team"),
            Self::AwayTeam => write!(f, "Away Team"),
            Self::HomeScore => write!(f, "Home Team Score"),
            Self::AwayScore => write!(f, "Away Team Score"),
        }
    }
}

/// Identifies a match by its home and away team.
///
/// Positions are significant: `(A, B)` and `(B, A)` are different matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamPair {
    pub home_team: String,
    pub away_team: String,
}

impl TeamPair {
    pub fn new(home_team: impl Into<String>, away_team: impl Into<String>) -> Self {
        Self {
            home_team: home_team.into(),
            away_team: away_team.into(),
        }
    }
}

impl std::fmt::Display for TeamPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.home_team, self.away_team)
    }
}

/// Goals scored by each side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    #[must_use]
    pub const fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    /// Combined goals of both sides, widened so it cannot overflow
    #[must_use]
    pub fn total(&self) -> u64 {
        u64::from(self.home) + u64::from(self.away)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

/// State of one in-progress match as held by the store.
///
/// Records are replaced whole on every score change; `start_time` is carried
/// over unchanged from the record created at kick-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub start_time: DateTime<Utc>,
    pub score: Score,
}

impl MatchRecord {
    /// A fresh record at 0-0
    #[must_use]
    pub fn kick_off(start_time: DateTime<Utc>) -> Self {
        Self {
            start_time,
            score: Score::default(),
        }
    }

    /// Same match, new score
    #[must_use]
    pub fn with_score(&self, score: Score) -> Self {
        Self {
            start_time: self.start_time,
            score,
        }
    }
}
