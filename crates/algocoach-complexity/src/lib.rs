//! # algocoach-complexity
//!
//! **Tier 2 (Estimators)**
//!
//! Turns lexical signals into the two headline numbers of a report: a
//! time/space big-O class and a cyclomatic score.
//!
//! ## What belongs here
//! * Ordered time and space rule tables
//! * Decision-point counting and tier explanations
//!
//! ## What does NOT belong here
//! * Lexical scanning (use `algocoach-scan`)
//! * Report assembly (use `algocoach-core`)

pub mod cyclomatic;
pub mod estimate;

pub use cyclomatic::calculate;
pub use estimate::{SPACE_RULES, SpaceRule, TIME_RULES, TimeRule, estimate, estimate_text};
