//! Standings computation: aggregation, tiebreaks and foul disqualification.
//!
//! The pipeline runs three pure stages, each consuming the previous stage's
//! output and producing a new value:
//!
//! 1. [`aggregate`]: fold the ledger into one [`TeamRecord`] per team
//! 2. [`tiebreak`]: derive TB, Buchholz and a seeded random key, then sort
//! 3. [`disqualify`]: move teams at or above the foul threshold to the bottom
//!
//! ## Ranking Criteria
//!
//! | Priority | Criterion | Direction |
//! |----------|-----------|-----------|
//! | 1 | Points (3 win, 1 draw) | Descending |
//! | 2 | Buchholz (sum of opponents' points per match) | Descending |
//! | 3 | Fouls | Ascending |
//! | 4 | TB (wins over teams on equal points) | Descending |
//! | 5 | Seeded random key | Ascending |
//!
//! Before any round has been played the table is the seed order and no random
//! keys are drawn.
//!
//! ## Example
//!
//! ```rust
//! use swiss_pairing::config::TournamentConfig;
//! use swiss_pairing::core::outcome::MatchOutcome;
//! use swiss_pairing::parsing::ledger::Ledger;
//! use swiss_pairing::parsing::roster::parse_roster_text;
//! use swiss_pairing::ranking::compute_standings;
//!
//! let roster = parse_roster_text("A ; 1\nB ; 2\nC ; 3\nD ; 4\n").unwrap();
//! let ledger = Ledger::from_rounds(vec![vec![
//!     MatchOutcome::new("A", "B").with_scores(2, 1),
//!     MatchOutcome::new("C", "D").with_scores(1, 1),
//! ]]);
//!
//! let report = compute_standings(&roster, &ledger, &TournamentConfig::default()).unwrap();
//! assert_eq!(report.standings.names()[0], "A");
//! assert_eq!(report.standings.names()[3], "B");
//! ```
//!
//! [`TeamRecord`]: crate::core::record::TeamRecord

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::info;

use crate::config::TournamentConfig;
use crate::core::roster::Roster;
use crate::core::standings::{RankedTeam, Standings};
use crate::parsing::ledger::Ledger;

pub mod aggregate;
pub mod disqualify;
pub mod tiebreak;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StandingsError {
    #[error("Team '{team}' is not in the roster")]
    UnknownTeam { team: String },

    #[error("Team '{team}' cannot play against itself")]
    SelfMatch { team: String },

    #[error("Team '{team}' plays more than once in round {round}")]
    PlayedTwiceInRound { team: String, round: usize },

    #[error("Score or foul total of team '{team}' is too large")]
    CounterOverflow { team: String },
}

/// Final standings of one pipeline run
#[derive(Debug, Clone)]
pub struct StandingsReport {
    /// Ranked table after disqualified teams were moved to the bottom
    pub standings: Standings,

    /// Teams at or above the foul threshold, in ranked order
    pub disqualified: Vec<String>,

    /// Number of completed rounds folded into the table
    pub rounds_played: usize,
}

/// Run aggregation, tiebreaking and disqualification with a generator seeded
/// from `config.tiebreak_seed`.
///
/// # Errors
///
/// Returns a `StandingsError` if the ledger references a team missing from the
/// roster or is otherwise inconsistent.
pub fn compute_standings(
    roster: &Roster,
    ledger: &Ledger,
    config: &TournamentConfig,
) -> Result<StandingsReport, StandingsError> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.tiebreak_seed);
    compute_standings_with_rng(roster, ledger, config.foul_threshold, &mut rng)
}

/// Same as [`compute_standings`] with a caller-provided generator
///
/// # Errors
///
/// Returns a `StandingsError` if the ledger is inconsistent with the roster.
pub fn compute_standings_with_rng<R: rand::Rng + ?Sized>(
    roster: &Roster,
    ledger: &Ledger,
    foul_threshold: u32,
    rng: &mut R,
) -> Result<StandingsReport, StandingsError> {
    let records = aggregate::aggregate_ledger(roster, ledger)?;

    let ranked = if ledger.is_empty() {
        info!("No rounds played yet, ranking {} teams by seed", records.len());
        Standings::new(records.into_iter().map(RankedTeam::unranked).collect())
    } else {
        tiebreak::rank(records, rng)?
    };

    let filtered = disqualify::apply_foul_threshold(ranked, foul_threshold);

    Ok(StandingsReport {
        standings: filtered.standings,
        disqualified: filtered.disqualified,
        rounds_played: ledger.rounds.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::outcome::MatchOutcome;
    use crate::core::roster::RosterEntry;

    fn roster() -> Roster {
        [
            RosterEntry::new("A", 1),
            RosterEntry::new("B", 2),
            RosterEntry::new("C", 3),
            RosterEntry::new("D", 4),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_opening_round_uses_seed_order() {
        let roster: Roster = [
            RosterEntry::new("D", 4),
            RosterEntry::new("B", 2),
            RosterEntry::new("A", 1),
            RosterEntry::new("C", 3),
        ]
        .into_iter()
        .collect();

        let report =
            compute_standings(&roster, &Ledger::default(), &TournamentConfig::default()).unwrap();
        assert_eq!(report.standings.names(), vec!["A", "B", "C", "D"]);
        assert_eq!(report.rounds_played, 0);
        assert!(report.disqualified.is_empty());
    }

    #[test]
    fn test_example_round() {
        let ledger = Ledger::from_rounds(vec![vec![
            MatchOutcome::new("A", "B").with_scores(2, 1),
            MatchOutcome::new("C", "D").with_scores(1, 1),
        ]]);

        let report = compute_standings(&roster(), &ledger, &TournamentConfig::default()).unwrap();
        let names = report.standings.names();
        assert_eq!(names[0], "A");
        assert_eq!(names[3], "B");
        assert!(names[1..3].contains(&"C") && names[1..3].contains(&"D"));

        let a = report.standings.team("A").unwrap();
        assert_eq!((a.record.wins, a.points), (1, 3));
        let b = report.standings.team("B").unwrap();
        assert_eq!((b.record.losses, b.points), (1, 0));
        assert_eq!(report.standings.team("C").unwrap().points, 1);
        assert_eq!(report.standings.team("D").unwrap().points, 1);
    }

    #[test]
    fn test_recomputation_is_identical() {
        let ledger = Ledger::from_rounds(vec![vec![
            MatchOutcome::new("A", "B").with_scores(1, 1),
            MatchOutcome::new("C", "D").with_scores(1, 1),
        ]]);
        let config = TournamentConfig::default();

        let first = compute_standings(&roster(), &ledger, &config).unwrap();
        let second = compute_standings(&roster(), &ledger, &config).unwrap();
        assert_eq!(first.standings.names(), second.standings.names());
        let first_teams: Vec<_> = first.standings.iter().cloned().collect();
        let second_teams: Vec<_> = second.standings.iter().cloned().collect();
        assert_eq!(first_teams, second_teams);
    }

    #[test]
    fn test_foul_threshold_applied() {
        let ledger = Ledger::from_rounds(vec![vec![
            MatchOutcome::new("A", "B").with_scores(3, 0).with_fouls(6, 0),
            MatchOutcome::new("C", "D").with_scores(1, 0),
        ]]);

        let report = compute_standings(&roster(), &ledger, &TournamentConfig::default()).unwrap();
        assert_eq!(report.disqualified, vec!["A".to_string()]);
        assert_eq!(report.standings.names().last(), Some(&"A"));
    }

    #[test]
    fn test_unknown_team_is_an_error() {
        let ledger = Ledger::from_rounds(vec![vec![MatchOutcome::new("A", "Z")]]);
        let err = compute_standings(&roster(), &ledger, &TournamentConfig::default()).unwrap_err();
        assert_eq!(
            err,
            StandingsError::UnknownTeam {
                team: "Z".to_string()
            }
        );
    }
}
