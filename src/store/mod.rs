//! In-memory storage of in-progress matches.
//!
//! [`MatchStore`] owns the current [`MatchRecord`] of every match that has
//! started and not yet finished. It offers plain point operations
//! (`has`, `get`, `put`, `remove`), detached snapshots, and [`MatchStore::apply`],
//! which runs a caller-supplied decision and its resulting write under one lock.
//!
//! ## Example
//!
//! ```rust
//! use chrono::Utc;
//! use scoreboard::store::match_store::MatchStore;
//! use scoreboard::core::types::{MatchRecord, TeamPair};
//!
//! let store = MatchStore::new();
//! let pair = TeamPair::new("Mexico", "Canada");
//! store.put(pair.clone(), MatchRecord::kick_off(Utc::now()));
//!
//! let snapshot = store.snapshot();
//! store.remove(&pair);
//! assert_eq!(snapshot.len(), 1);
//! assert!(store.is_empty());
//! ```
//!
//! [`MatchStore`]: match_store::MatchStore
//! [`MatchStore::apply`]: match_store::MatchStore::apply
//! [`MatchRecord`]: crate::core::types::MatchRecord

pub mod match_store;
