//! Parsers for the roster and round (ledger) files.
//!
//! This module provides parsers for:
//!
//! - **Roster files**: one `<team> ; <seed-rank>` line per team
//! - **Round files**: one `<teamA> - <teamB> ; <scoreA> - <scoreB> ; <foulsA> - <foulsB>`
//!   line per match, or `?` placeholders for a round that has been paired but not played
//!
//! ## Example
//!
//! ```rust,no_run
//! use swiss_pairing::parsing::{ledger, roster};
//! use std::path::{Path, PathBuf};
//!
//! let roster = roster::parse_roster_file(Path::new("teams.txt")).unwrap();
//! let rounds = vec![PathBuf::from("round1.txt"), PathBuf::from("round2.txt")];
//! let ledger = ledger::load_ledger(&rounds).unwrap();
//! println!("{} teams, {} rounds played", roster.len(), ledger.rounds.len());
//! ```
//!
//! ## Line Formats
//!
//! | File | Line | Example |
//! |------|------|---------|
//! | Roster | `<team> ; <seed>` | `Lions ; 1` |
//! | Played match | `<A> - <B> ; <sA> - <sB> ; <fA> - <fB>` | `Lions - Tigers ; 2 - 1 ; 0 - 3` |
//! | Pending match | `<A> - <B> ; ? - ? ; ? - ?` | `Lions - Bears ; ? - ? ; ? - ?` |
//!
//! Blank lines and lines starting with `#` are ignored.

use thiserror::Error;

use crate::utils::validation::ValidationError;

pub mod ledger;
pub mod roster;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Invalid team name on line {line}: {source}")]
    InvalidTeamName {
        line: usize,
        #[source]
        source: ValidationError,
    },

    #[error("Team '{name}' is listed more than once (line {line})")]
    DuplicateTeam { name: String, line: usize },

    #[error("{0}")]
    TooManyTeams(String),

    #[error("Round file mixes played and pending matches: {0}")]
    MixedRound(String),

    #[error("{path}: {error}")]
    InFile {
        path: String,
        error: Box<ParseError>,
    },
}
