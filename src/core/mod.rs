//! Core data types for the scoreboard.
//!
//! - [`TeamPair`]: Home and away team, the key of a match in the store
//! - [`MatchRecord`]: Kick-off time and current [`Score`] of an in-progress match
//! - [`Match`]: Flattened, read-only view returned by the summary
//! - [`Clock`]: Injected time source used for kick-off times
//!
//! ## Lifecycle
//!
//! | Operation | Before      | After       |
//! |-----------|-------------|-------------|
//! | start     | absent      | in progress |
//! | update    | in progress | in progress |
//! | finish    | in progress | absent      |
//!
//! Finished matches are not retained.
//!
//! [`TeamPair`]: types::TeamPair
//! [`MatchRecord`]: types::MatchRecord
//! [`Score`]: types::Score
//! [`Match`]: game::Match
//! [`Clock`]: clock::Clock

pub mod clock;
pub mod game;
pub mod types;
