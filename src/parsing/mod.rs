//! Parser for replay scripts.
//!
//! A replay script is a tabular text file (TSV, or CSV when the file ends in
//! `.csv`) with one scoreboard operation per row:
//!
//! | Action  | Fields                                       |
//! |---------|----------------------------------------------|
//! | start   | home team, away team                         |
//! | update  | home team, away team, home score, away score |
//! | finish  | home team, away team                         |
//! | summary | (none)                                       |
//!
//! ## Example
//!
//! ```rust
//! use scoreboard::parsing::script::{parse_script_text, Command};
//!
//! let steps = parse_script_text("start,Mexico,Canada\nsummary\n", ',').unwrap();
//! assert_eq!(steps.len(), 2);
//! assert_eq!(steps[1].command, Command::Summary);
//! ```

pub mod script;
