//! The scoreboard registry: validated operations over the match store.
//!
//! - [`MatchRegistry`]: Entry point with `start`, `update`, `finish` and `summary`
//! - [`audit`]: Validation rules and the error taxonomy
//! - [`ranking`]: Summary ordering
//!
//! ## Validation order
//!
//! Each mutating operation validates team names before touching the store,
//! then checks the match state and (for `update`) the score transition while
//! holding the store's write lock. A failed operation never changes the store.
//!
//! ## Example
//!
//! ```rust
//! use scoreboard::MatchRegistry;
//!
//! let registry = MatchRegistry::default();
//! registry.start("Mexico", "Canada").unwrap();
//! registry.update("Mexico", "Canada", 0, 5).unwrap();
//!
//! let summary = registry.summary();
//! assert_eq!(summary[0].to_string(), "Mexico 0 - Canada 5");
//!
//! assert!(registry.update("Mexico", "Canada", 0, 4).is_err());
//! registry.finish("Mexico", "Canada").unwrap();
//! assert!(registry.summary().is_empty());
//! ```
//!
//! [`MatchRegistry`]: engine::MatchRegistry

pub mod audit;
pub mod engine;
pub mod ranking;
