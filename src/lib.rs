//! # swiss-pairing
//!
//! A library for ranking Swiss-system tournaments and pairing the next round.
//!
//! In a Swiss system every team plays every round, against an opponent of similar
//! standing it has not met before. After each round the teams are ranked again
//! and paired for the next one.
//!
//! `swiss-pairing` folds the match results played so far into a table, breaks ties
//! with a fixed cascade of criteria, and pairs the next round without rematches.
//!
//! ## Features
//!
//! - **Cascading tiebreaks**: points, Buchholz, fewest fouls, wins over tied teams
//! - **Reproducible draws**: remaining exact ties use a seeded random permutation
//! - **Foul disqualification**: teams over the foul limit drop to the bottom
//! - **Rank-proximity pairing**: greedy nearest-rank pairing with an exhaustive,
//!   capped fallback when greedy gets stuck
//! - **Plain-text rounds**: reads and writes `A - B ; 2 - 1 ; 0 - 3` round files
//!
//! ## Example
//!
//! ```rust
//! use swiss_pairing::config::TournamentConfig;
//! use swiss_pairing::parsing::ledger::{parse_round_text, Ledger, RoundFile};
//! use swiss_pairing::parsing::roster::parse_roster_text;
//! use swiss_pairing::ranking::compute_standings;
//! use swiss_pairing::{PairingConfig, PairingEngine};
//!
//! let roster = parse_roster_text("A ; 1\nB ; 2\nC ; 3\nD ; 4\n").unwrap();
//! let RoundFile::Played(round1) =
//!     parse_round_text("A - B ; 2 - 1 ; 0 - 0\nC - D ; 1 - 1 ; 0 - 0\n").unwrap()
//! else {
//!     unreachable!()
//! };
//! let ledger = Ledger::from_rounds(vec![round1]);
//!
//! let report = compute_standings(&roster, &ledger, &TournamentConfig::default()).unwrap();
//! let engine = PairingEngine::new(&report.standings, PairingConfig::default()).unwrap();
//! for pairing in engine.pair().unwrap().pairings {
//!     println!("{pairing}");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Team records, match outcomes and ranked standings
//! - [`parsing`]: Parsers for roster and round files
//! - [`ranking`]: Aggregation, tiebreaks and foul disqualification
//! - [`pairing`]: Greedy pairing and exhaustive fallback search
//! - [`export`]: Standings export and next-round file writer
//! - [`config`]: Tournament configuration
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod export;
pub mod pairing;
pub mod parsing;
pub mod ranking;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::config::TournamentConfig;
pub use crate::core::outcome::MatchOutcome;
pub use crate::core::record::TeamRecord;
pub use crate::core::roster::{Roster, RosterEntry};
pub use crate::core::standings::{RankedTeam, Standings};
pub use crate::core::types::*;
pub use crate::pairing::{PairingConfig, PairingEngine, PairingError, RoundPairings};
pub use crate::ranking::{compute_standings, StandingsError, StandingsReport};
