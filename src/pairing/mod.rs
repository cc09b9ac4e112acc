//! Next-round pairing under a no-rematch constraint.
//!
//! This module provides:
//!
//! - [`PairingEngine`]: Pairs every team in the standings with one opponent
//! - [`PartitionSearch`]: Lazy, capped enumeration of rematch-free perfect matchings
//! - [`RematchTable`]: Which ranked positions have already met
//!
//! ## Algorithm
//!
//! 1. **Greedy pass**: walk the table top to bottom; each untaken team takes the
//!    highest-ranked untaken team it has not played yet.
//! 2. **Exhaustive fallback**: if any team is left without a legal opponent, the
//!    greedy result is discarded and rematch-free partitions are enumerated (up
//!    to the enumeration cap). The partition with the smallest sum of rank
//!    distances wins; the first one found wins ties.
//!
//! ```text
//! Idle -> Greedy -> AllPaired
//!                -> Stuck -> Exhaustive -> AllPaired
//!                                       -> NoneFound (error)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use swiss_pairing::core::record::TeamRecord;
//! use swiss_pairing::core::standings::{RankedTeam, Standings};
//! use swiss_pairing::pairing::{PairingConfig, PairingEngine};
//!
//! let standings = Standings::new(
//!     ["A", "B", "C", "D"]
//!         .iter()
//!         .enumerate()
//!         .map(|(i, n)| RankedTeam::unranked(TeamRecord::new(*n, i as u32 + 1)))
//!         .collect(),
//! );
//!
//! let engine = PairingEngine::new(&standings, PairingConfig::default()).unwrap();
//! let round = engine.pair().unwrap();
//! assert_eq!(round.pairings.len(), 2);
//! ```

pub mod engine;
pub mod rematch;
pub mod search;

pub use engine::{
    GreedyOutcome, PairingConfig, PairingEngine, PairingError, PairingMethod, RoundPairings,
};
pub use rematch::RematchTable;
pub use search::PartitionSearch;
