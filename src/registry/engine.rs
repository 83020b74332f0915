use std::sync::Arc;

use tracing::{debug, trace};

use crate::core::clock::{Clock, SystemClock};
use crate::core::game::Match;
use crate::core::types::{MatchRecord, Score, TeamPair};
use crate::registry::audit::{self, ScoreboardError};
use crate::registry::ranking;
use crate::store::match_store::{MatchStore, Mutation};

/// The scoreboard: validates operations and applies them to a [`MatchStore`].
///
/// Both the store and the clock are injected. Registries that share an
/// `Arc<MatchStore>` see and guard the same set of matches.
pub struct MatchRegistry {
    store: Arc<MatchStore>,
    clock: Arc<dyn Clock>,
}

impl MatchRegistry {
    /// Create a registry over an existing store and clock
    pub fn new(store: Arc<MatchStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Create a registry with its own empty store
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::new(Arc::new(MatchStore::new()), clock)
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &Arc<MatchStore> {
        &self.store
    }

    /// Start a match at 0-0, stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `ScoreboardError::Input` for a blank team name, or
    /// `ScoreboardError::Consistency` if the match is already in progress.
    pub fn start(&self, home_team: &str, away_team: &str) -> Result<(), ScoreboardError> {
        let pair = audit::validate_team_names(home_team, away_team)?;
        let result = self.store.apply::<ScoreboardError>(&pair, |current| {
            audit::require_absent(current.is_some(), &pair)?;
            Ok(Mutation::Put(MatchRecord::kick_off(self.clock.now())))
        });
        log_outcome("start", &pair, &result);
        result
    }

    /// Replace the score of an in-progress match.
    ///
    /// The kick-off time is kept.
    ///
    /// # Errors
    ///
    /// Returns `ScoreboardError::Input` for a blank team name, or
    /// `ScoreboardError::Consistency` if the match is not in progress, the score
    /// is unchanged, or either side's score would decrease.
    pub fn update(
        &self,
        home_team: &str,
        away_team: &str,
        home_score: u32,
        away_score: u32,
    ) -> Result<(), ScoreboardError> {
        let pair = audit::validate_team_names(home_team, away_team)?;
        let requested = Score::new(home_score, away_score);
        let result = self.store.apply::<ScoreboardError>(&pair, |current| {
            let record = audit::require_record(current, &pair)?;
            audit::validate_score_transition(requested, record.score)?;
            Ok(Mutation::Put(record.with_score(requested)))
        });
        log_outcome("update", &pair, &result);
        result
    }

    /// Finish an in-progress match and drop it from the scoreboard.
    ///
    /// # Errors
    ///
    /// Returns `ScoreboardError::Input` for a blank team name, or
    /// `ScoreboardError::Consistency` if the match is not in progress.
    pub fn finish(&self, home_team: &str, away_team: &str) -> Result<(), ScoreboardError> {
        let pair = audit::validate_team_names(home_team, away_team)?;
        let result = self.store.apply::<ScoreboardError>(&pair, |current| {
            audit::require_exists(current.is_some(), &pair)?;
            Ok(Mutation::Remove)
        });
        log_outcome("finish", &pair, &result);
        result
    }

    /// All in-progress matches, highest total score first and, among equal
    /// totals, the most recently started first.
    ///
    /// The returned list is detached from the store.
    pub fn summary(&self) -> Vec<Match> {
        let mut matches: Vec<Match> = self
            .store
            .snapshot()
            .into_iter()
            .map(|(pair, record)| Match::from_entry(pair, &record))
            .collect();
        ranking::rank(&mut matches);
        trace!(count = matches.len(), "summary built");
        matches
    }
}

impl Default for MatchRegistry {
    fn default() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }
}

fn log_outcome(operation: &str, pair: &TeamPair, result: &Result<(), ScoreboardError>) {
    match result {
        Ok(()) => debug!(match_id = %pair, "{operation} accepted"),
        Err(e) => debug!(match_id = %pair, error = %e, "{operation} rejected"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::core::types::Field;
    use crate::registry::audit::{ConsistencyError, InputError};
    use chrono::{TimeZone, Utc};

    fn registry() -> MatchRegistry {
        let t = Utc.with_ymd_and_hms(2026, 6, 11, 18, 0, 0).unwrap();
        MatchRegistry::with_clock(Arc::new(FixedClock(t)))
    }

    #[test]
    fn test_start_creates_zero_zero_record() {
        let registry = registry();
        registry.start("Mexico", "Canada").unwrap();

        let record = registry
            .store()
            .get(&TeamPair::new("Mexico", "Canada"))
            .unwrap();
        assert_eq!(record.score, Score::new(0, 0));
        assert_eq!(
            record.start_time,
            Utc.with_ymd_and_hms(2026, 6, 11, 18, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_blank_names_never_reach_store() {
        let registry = registry();
        assert_eq!(
            registry.start(" ", "Canada"),
            Err(ScoreboardError::Input(InputError::Blank(Field::HomeTeam)))
        );
        assert_eq!(
            registry.update("Mexico", "", 1, 0),
            Err(ScoreboardError::Input(InputError::Blank(Field::AwayTeam)))
        );
        assert!(registry.finish("", "").unwrap_err().is_input());
        assert!(registry.store().is_empty());
    }

    #[test]
    fn test_update_keeps_start_time() {
        let registry = registry();
        registry.start("Spain", "Brazil").unwrap();
        let before = registry.store().get(&TeamPair::new("Spain", "Brazil")).unwrap();

        registry.update("Spain", "Brazil", 1, 0).unwrap();
        let after = registry.store().get(&TeamPair::new("Spain", "Brazil")).unwrap();
        assert_eq!(after.start_time, before.start_time);
        assert_eq!(after.score, Score::new(1, 0));
    }

    #[test]
    fn test_update_rejections_leave_record() {
        let registry = registry();
        registry.start("Germany", "France").unwrap();
        registry.update("Germany", "France", 2, 2).unwrap();
        let pair = TeamPair::new("Germany", "France");

        assert_eq!(
            registry.update("Germany", "France", 2, 2),
            Err(ScoreboardError::Consistency(
                ConsistencyError::ScoreUnchanged(Score::new(2, 2))
            ))
        );
        assert!(registry
            .update("Germany", "France", 1, 3)
            .unwrap_err()
            .is_consistency());
        assert!(registry
            .update("Germany", "France", 3, 1)
            .unwrap_err()
            .is_consistency());
        assert_eq!(registry.store().get(&pair).unwrap().score, Score::new(2, 2));
    }

    #[test]
    fn test_update_unknown_match() {
        let registry = registry();
        let err = registry.update("Uruguay", "Italy", 1, 0).unwrap_err();
        assert_eq!(
            err,
            ScoreboardError::Consistency(ConsistencyError::NotStarted {
                home_team: "Uruguay".to_string(),
                away_team: "Italy".to_string(),
            })
        );
    }

    #[test]
    fn test_finish_then_restart() {
        let registry = registry();
        registry.start("Argentina", "Australia").unwrap();
        registry.update("Argentina", "Australia", 3, 1).unwrap();
        registry.finish("Argentina", "Australia").unwrap();

        assert!(registry.summary().is_empty());
        assert!(registry.finish("Argentina", "Australia").unwrap_err().is_consistency());
        assert!(registry
            .update("Argentina", "Australia", 4, 1)
            .unwrap_err()
            .is_consistency());

        registry.start("Argentina", "Australia").unwrap();
        let summary = registry.summary();
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].score(), Score::new(0, 0));
    }

    #[test]
    fn test_reversed_pair_is_a_different_match() {
        let registry = registry();
        registry.start("Spain", "Brazil").unwrap();
        registry.start("Brazil", "Spain").unwrap();
        assert_eq!(registry.summary().len(), 2);
    }

    #[test]
    fn test_default_registry_is_empty() {
        let registry = MatchRegistry::default();
        assert!(registry.summary().is_empty());
    }
}
