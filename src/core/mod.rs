//! Core data types for Swiss-system standings and pairings.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Roster`]: The registered teams and their seed ranks
//! - [`MatchOutcome`]: One completed match with scores and fouls for both sides
//! - [`TeamRecord`]: Cumulative record of a team folded from the ledger
//! - [`Standings`]: An immutable ranked snapshot with derived tiebreak metrics
//! - [`Outcome`], [`Pairing`]: Per-match result and next-round assignment
//!
//! ## Points
//!
//! | Result | Points |
//! |--------|--------|
//! | Win    | 3      |
//! | Draw   | 1      |
//! | Loss   | 0      |
//!
//! Team identity is the team name. Names are unique within a roster.
//!
//! [`Roster`]: roster::Roster
//! [`MatchOutcome`]: outcome::MatchOutcome
//! [`TeamRecord`]: record::TeamRecord
//! [`Standings`]: standings::Standings
//! [`Outcome`]: types::Outcome
//! [`Pairing`]: types::Pairing

pub mod outcome;
pub mod record;
pub mod roster;
pub mod standings;
pub mod types;
