//! Command-line interface for swiss-pairing.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **standings**: Rank the teams after the rounds played so far
//! - **pair**: Rank the teams and write the next round's pairings
//!
//! ## Usage
//!
//! ```text
//! # Show the table after the played rounds
//! swiss-pairing standings --roster teams.txt round1.txt round2.txt round3.txt
//!
//! # Pair the first unplayed round file and write it in place
//! swiss-pairing pair --roster teams.txt round1.txt round2.txt round3.txt
//!
//! # JSON output, custom foul threshold, keep a TSV snapshot of the table
//! swiss-pairing -f json pair --roster teams.txt r1.txt r2.txt --foul-threshold 4 --export table.tsv
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::TournamentConfig;
use crate::core::roster::Roster;
use crate::parsing::ledger::{load_ledger, Ledger};
use crate::parsing::roster::parse_roster_file;

pub mod pair;
pub mod standings;

#[derive(Parser)]
#[command(name = "swiss-pairing")]
#[command(version)]
#[command(about = "Compute Swiss-system standings and pair the next round")]
#[command(
    long_about = "swiss-pairing reads a team roster and the round files played so far, ranks the teams and pairs the next round.\n\nRanking uses points, then Buchholz, fewest fouls, wins over teams on equal points, and finally a seeded random draw. Teams reaching the foul threshold are moved to the bottom of the table.\n\nPairings never repeat a previous match: teams are paired greedily by rank, with an exhaustive search when the greedy pass gets stuck."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the standings after the rounds played so far
    Standings(standings::StandingsArgs),

    /// Compute the standings and pair the next round
    Pair(pair::PairArgs),
}

/// Inputs shared by every command
#[derive(clap::Args)]
pub struct TournamentArgs {
    /// Roster file with one '<team> ; <seed-rank>' line per team
    #[arg(short, long)]
    pub roster: PathBuf,

    /// Round files in playing order. Reading stops at the first file that is
    /// empty, missing, or only holds '?' placeholders.
    #[arg(required = true)]
    pub rounds: Vec<PathBuf>,

    /// JSON configuration file (foul_threshold, enumeration_cap, tiebreak_seed)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Fouls at which a team is moved to the bottom of the table [default: 6]
    #[arg(long)]
    pub foul_threshold: Option<u32>,

    /// Seed for the random tiebreak [default: 0]
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also write the standings to this file (.tsv, .csv or .json)
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Everything a command needs after reading its input files
pub struct Inputs {
    pub roster: Roster,
    pub ledger: Ledger,
    pub config: TournamentConfig,
}

/// Read the roster, the round files and the configuration.
///
/// `enumeration_cap` is only provided by commands that pair.
///
/// # Errors
///
/// Returns an error if any input cannot be read or parsed.
pub fn load_inputs(args: &TournamentArgs, enumeration_cap: Option<usize>) -> anyhow::Result<Inputs> {
    let base = match &args.config {
        Some(path) => TournamentConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => TournamentConfig::default(),
    };
    let config = base.with_overrides(args.foul_threshold, enumeration_cap, args.seed);
    config.validate()?;
    debug!("Using {config:?}");

    let roster = parse_roster_file(&args.roster)
        .with_context(|| format!("Failed to read roster {}", args.roster.display()))?;
    let ledger = load_ledger(&args.rounds).context("Failed to read round files")?;

    Ok(Inputs {
        roster,
        ledger,
        config,
    })
}
