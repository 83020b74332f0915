//! Validation rules for scoreboard operations.
//!
//! Every check is a pure function that either passes or returns a typed error;
//! none of them touches the store.

use crate::core::types::{Field, MatchRecord, Score, TeamPair};

/// Malformed caller input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("An input value is missing: {0}")]
    Missing(Field),

    #[error("An input value is blank: {0}")]
    Blank(Field),
}

/// Well-formed input that conflicts with the current state of a match
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsistencyError {
    #[error("This match ({home_team}-{away_team}) has already started.")]
    AlreadyStarted {
        home_team: String,
        away_team: String,
    },

    #[error("This match ({home_team}-{away_team}) has not been started.")]
    NotStarted {
        home_team: String,
        away_team: String,
    },

    #[error("The score input is already recorded: {0}")]
    ScoreUnchanged(Score),

    #[error(
        "An input value is inconsistent: {field}. The score can only be increased or unchanged \
         (recorded {recorded}, requested {requested})."
    )]
    ScoreRegressed {
        field: Field,
        recorded: u32,
        requested: u32,
    },
}

/// Error returned by the mutating scoreboard operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreboardError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Consistency(#[from] ConsistencyError),
}

impl ScoreboardError {
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }

    pub fn is_consistency(&self) -> bool {
        matches!(self, Self::Consistency(_))
    }
}

/// Require that an optional text field was supplied.
///
/// # Errors
///
/// Returns `InputError::Missing` if `value` is `None`.
pub fn check_present(field: Field, value: Option<&str>) -> Result<&str, InputError> {
    value.ok_or(InputError::Missing(field))
}

/// Require that a text field has non-whitespace content.
///
/// # Errors
///
/// Returns `InputError::Blank` if `value` is empty after trimming.
pub fn check_not_blank(field: Field, value: &str) -> Result<(), InputError> {
    if value.trim().is_empty() {
        return Err(InputError::Blank(field));
    }
    Ok(())
}

/// Validate both team names and build the match key.
///
/// Names are kept as given; only blankness is checked.
///
/// # Errors
///
/// Returns `InputError::Blank` for the first blank name, home team first.
pub fn validate_team_names(home_team: &str, away_team: &str) -> Result<TeamPair, InputError> {
    check_not_blank(Field::HomeTeam, home_team)?;
    check_not_blank(Field::AwayTeam, away_team)?;
    Ok(TeamPair::new(home_team, away_team))
}

/// Fail if the match is already in progress.
///
/// # Errors
///
/// Returns `ConsistencyError::AlreadyStarted` if `exists` is true.
pub fn require_absent(exists: bool, pair: &TeamPair) -> Result<(), ConsistencyError> {
    if exists {
        return Err(ConsistencyError::AlreadyStarted {
            home_team: pair.home_team.clone(),
            away_team: pair.away_team.clone(),
        });
    }
    Ok(())
}

/// Fail if the match is not in progress.
///
/// # Errors
///
/// Returns `ConsistencyError::NotStarted` if `exists` is false.
pub fn require_exists(exists: bool, pair: &TeamPair) -> Result<(), ConsistencyError> {
    if !exists {
        return Err(not_started(pair));
    }
    Ok(())
}

/// Like [`require_exists`], handing back the record that was found.
///
/// # Errors
///
/// Returns `ConsistencyError::NotStarted` if `current` is `None`.
pub fn require_record<'a>(
    current: Option<&'a MatchRecord>,
    pair: &TeamPair,
) -> Result<&'a MatchRecord, ConsistencyError> {
    current.ok_or_else(|| not_started(pair))
}

fn not_started(pair: &TeamPair) -> ConsistencyError {
    ConsistencyError::NotStarted {
        home_team: pair.home_team.clone(),
        away_team: pair.away_team.clone(),
    }
}

/// Check that a new score may replace the recorded one.
///
/// Rules, evaluated in order (the first failure wins):
/// 1. The new score must differ from the recorded score
/// 2. The home score must not decrease
/// 3. The away score must not decrease
///
/// # Errors
///
/// Returns `ConsistencyError::ScoreUnchanged` or `ConsistencyError::ScoreRegressed`.
pub fn validate_score_transition(
    requested: Score,
    recorded: Score,
) -> Result<(), ConsistencyError> {
    if requested == recorded {
        return Err(ConsistencyError::ScoreUnchanged(recorded));
    }
    check_not_decreasing(Field::HomeScore, requested.home, recorded.home)?;
    check_not_decreasing(Field::AwayScore, requested.away, recorded.away)?;
    Ok(())
}

fn check_not_decreasing(
    field: Field,
    requested: u32,
    recorded: u32,
) -> Result<(), ConsistencyError> {
    if requested < recorded {
        return Err(ConsistencyError::ScoreRegressed {
            field,
            recorded,
            requested,
        });
    }
    Ok(())
}
