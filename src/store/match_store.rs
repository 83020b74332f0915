use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::types::{MatchRecord, TeamPair};

/// Change to apply to a single key inside [`MatchStore::apply`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Insert or replace the record
    Put(MatchRecord),
    /// Delete the record if present
    Remove,
}

/// Thread-safe map from [`TeamPair`] to the [`MatchRecord`] of an in-progress match.
///
/// The store performs no validation of its own; callers decide what may be
/// written. Every method takes `&self` so one store can be shared behind an
/// `Arc` by several registries.
#[derive(Debug, Default)]
pub struct MatchStore {
    entries: RwLock<HashMap<TeamPair, MatchRecord>>,
}

impl MatchStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    // Records are only ever replaced whole, so a writer that panicked cannot
    // have left a half-written entry behind and the poison flag can be ignored.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<TeamPair, MatchRecord>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<TeamPair, MatchRecord>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Check whether a match is in progress
    pub fn has(&self, pair: &TeamPair) -> bool {
        self.read().contains_key(pair)
    }

    /// Get a copy of the record for a match
    pub fn get(&self, pair: &TeamPair) -> Option<MatchRecord> {
        self.read().get(pair).copied()
    }

    /// Insert or overwrite a record unconditionally
    pub fn put(&self, pair: TeamPair, record: MatchRecord) {
        self.write().insert(pair, record);
    }

    /// Delete a record; absent keys are ignored
    pub fn remove(&self, pair: &TeamPair) {
        self.write().remove(pair);
    }

    /// Run a read-validate-write step on one key under the write lock.
    ///
    /// `decide` sees the current record (if any) and returns the mutation to
    /// perform, or an error that leaves the store untouched. No other writer
    /// can interleave between the read and the write.
    ///
    /// # Errors
    ///
    /// Returns whatever error `decide` returns.
    pub fn apply<E>(
        &self,
        pair: &TeamPair,
        decide: impl FnOnce(Option<&MatchRecord>) -> Result<Mutation, E>,
    ) -> Result<(), E> {
        let mut entries = self.write();
        match decide(entries.get(pair))? {
            Mutation::Put(record) => {
                entries.insert(pair.clone(), record);
            }
            Mutation::Remove => {
                entries.remove(pair);
            }
        }
        Ok(())
    }

    /// Independent copy of every entry at this moment
    pub fn snapshot(&self) -> HashMap<TeamPair, MatchRecord> {
        self.read().clone()
    }

    /// Drop every in-progress match
    pub fn clear(&self) {
        self.write().clear();
    }

    /// Number of matches in progress
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check if no match is in progress
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Score;
    use chrono::{TimeZone, Utc};

    fn record(home: u32, away: u32) -> MatchRecord {
        let t = Utc.with_ymd_and_hms(2026, 6, 11, 18, 0, 0).unwrap();
        MatchRecord::kick_off(t).with_score(Score::new(home, away))
    }

    #[test]
    fn test_put_get_has() {
        let store = MatchStore::new();
        let pair = TeamPair::new("Mexico", "Canada");
        assert!(!store.has(&pair));
        assert!(store.get(&pair).is_none());

        store.put(pair.clone(), record(0, 0));
        assert!(store.has(&pair));
        assert_eq!(store.get(&pair), Some(record(0, 0)));

        store.put(pair.clone(), record(0, 5));
        assert_eq!(store.get(&pair), Some(record(0, 5)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let store = MatchStore::new();
        store.remove(&TeamPair::new("Germany", "France"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = MatchStore::new();
        let pair = TeamPair::new("Spain", "Brazil");
        store.put(pair.clone(), record(1, 0));

        let snapshot = store.snapshot();
        store.put(pair.clone(), record(2, 0));
        store.put(TeamPair::new("Uruguay", "Italy"), record(0, 0));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[&pair], record(1, 0));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_apply_error_leaves_store_unchanged() {
        let store = MatchStore::new();
        let pair = TeamPair::new("Argentina", "Australia");
        store.put(pair.clone(), record(3, 1));

        let result: Result<(), &str> = store.apply(&pair, |_| Err("rejected"));
        assert_eq!(result, Err("rejected"));
        assert_eq!(store.get(&pair), Some(record(3, 1)));
    }

    #[test]
    fn test_apply_put_and_remove() {
        let store = MatchStore::new();
        let pair = TeamPair::new("Argentina", "Australia");

        let seen = store.apply::<()>(&pair, |current| {
            assert!(current.is_none());
            Ok(Mutation::Put(record(0, 0)))
        });
        assert!(seen.is_ok());
        assert!(store.has(&pair));

        store
            .apply::<()>(&pair, |current| {
                assert_eq!(current, Some(&record(0, 0)));
                Ok(Mutation::Remove)
            })
            .unwrap();
        assert!(!store.has(&pair));
    }

    #[test]
    fn test_clear() {
        let store = MatchStore::new();
        store.put(TeamPair::new("Mexico", "Canada"), record(0, 0));
        store.put(TeamPair::new("Spain", "Brazil"), record(0, 0));
        store.clear();
        assert!(store.is_empty());
        assert!(store.snapshot().is_empty());
    }
}
