//! # scoreboard
//!
//! A live scoreboard for in-progress matches.
//!
//! Matches are started at 0-0, have their scores raised as goals go in, and
//! disappear when finished. At any moment the scoreboard can produce a ranked
//! summary of every match still in progress.
//!
//! ## Features
//!
//! - **Checked transitions**: duplicate starts, updates of unknown matches, and
//!   score regressions are rejected with typed errors
//! - **Atomic per match**: validation and write for one match happen under a
//!   single lock, so concurrent callers cannot race a check past each other
//! - **Deterministic ranking**: highest total score first, latest kick-off
//!   breaking ties
//! - **Injected time**: kick-off times come from a [`Clock`], so replays and
//!   tests are reproducible
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use chrono::{Duration, TimeZone, Utc};
//! use scoreboard::{MatchRegistry, MatchStore, SteppingClock};
//!
//! let kick_off = Utc.with_ymd_and_hms(2026, 6, 11, 18, 0, 0).unwrap();
//! let clock = Arc::new(SteppingClock::new(kick_off, Duration::minutes(1)));
//! let registry = MatchRegistry::new(Arc::new(MatchStore::new()), clock);
//!
//! registry.start("Mexico", "Canada").unwrap();
//! registry.start("Spain", "Brazil").unwrap();
//! registry.update("Spain", "Brazil", 10, 2).unwrap();
//!
//! for (i, game) in registry.summary().iter().enumerate() {
//!     println!("{}. {game}", i + 1);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Team pairs, scores, match views and clocks
//! - [`store`]: Thread-safe in-memory match store
//! - [`registry`]: Validated operations and the ranked summary
//! - [`parsing`]: Replay-script parser
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod registry;
pub mod store;

// Re-export commonly used types for convenience
pub use crate::core::clock::{Clock, FixedClock, SteppingClock, SystemClock};
pub use crate::core::game::Match;
pub use crate::core::types::*;
pub use crate::registry::audit::{ConsistencyError, InputError, ScoreboardError};
pub use crate::registry::engine::MatchRegistry;
pub use crate::store::match_store::MatchStore;
