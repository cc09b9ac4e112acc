use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::DEFAULT_ENUMERATION_CAP;
use crate::core::standings::Standings;
use crate::core::types::Pairing;
use crate::pairing::rematch::RematchTable;
use crate::pairing::search::{partition_cost, PartitionSearch};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PairingError {
    #[error("Cannot pair an odd number of teams ({0}); byes are not supported")]
    OddTeamCount(usize),

    #[error("Team '{team}' has played '{opponent}', who is not in the standings")]
    UnknownOpponent { team: String, opponent: String },

    #[error("No rematch-free pairing exists for {teams} teams")]
    NoValidPairing { teams: usize },
}

/// Configuration for the pairing engine
#[derive(Debug, Clone)]
pub struct PairingConfig {
    /// Maximum number of complete partitions the fallback enumerates
    pub enumeration_cap: usize,
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self {
            enumeration_cap: DEFAULT_ENUMERATION_CAP,
        }
    }
}

/// Result of the greedy pass, in ranked positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GreedyOutcome {
    /// Every team was paired
    Complete(Vec<(usize, usize)>),
    /// The team at this position had no legal opponent left
    Stuck { team: usize },
}

/// Which algorithm produced a round's pairings
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum PairingMethod {
    Greedy,
    Exhaustive {
        /// Team the greedy pass could not pair
        stuck_team: String,
        /// Complete partitions enumerated
        partitions_searched: usize,
        /// The enumeration cap stopped the search early
        cap_reached: bool,
    },
}

/// A complete set of pairings for the next round
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RoundPairings {
    /// Pairings in the order they were made; the higher-ranked team is `home`
    pub pairings: Vec<Pairing>,
    pub method: PairingMethod,
    /// Sum of rank distances between paired teams
    pub cost: usize,
}

/// Pairs the teams of a ranked table so that nobody meets a previous opponent
pub struct PairingEngine<'a> {
    standings: &'a Standings,
    rematches: RematchTable,
    config: PairingConfig,
}

impl<'a> PairingEngine<'a> {
    /// Create an engine for the given standings
    ///
    /// # Errors
    ///
    /// Returns `PairingError::UnknownOpponent` if a team's history names a team
    /// that is not in the standings.
    pub fn new(standings: &'a Standings, config: PairingConfig) -> Result<Self, PairingError> {
        let rematches = RematchTable::from_standings(standings)?;
        Ok(Self {
            standings,
            rematches,
            config,
        })
    }

    /// Pair every team: greedy first, exhaustive search if greedy gets stuck.
    ///
    /// # Errors
    ///
    /// Returns `PairingError::OddTeamCount` for an odd number of teams, or
    /// `PairingError::NoValidPairing` if no rematch-free partition exists.
    pub fn pair(&self) -> Result<RoundPairings, PairingError> {
        let teams = self.standings.len();
        if teams % 2 != 0 {
            return Err(PairingError::OddTeamCount(teams));
        }

        match self.greedy() {
            GreedyOutcome::Complete(pairs) => Ok(self.finish(&pairs, PairingMethod::Greedy)),
            GreedyOutcome::Stuck { team } => {
                let stuck_team = self.name_at(team).to_string();
                info!(
                    "Greedy pairing stuck at {stuck_team} (rank {}), searching combinations",
                    team + 1
                );
                self.exhaustive(stuck_team)
            }
        }
    }

    /// Greedy rank-proximity pass.
    ///
    /// Walks the table in ranked order; each untaken team is paired with the
    /// highest-ranked untaken team it has not played.
    #[must_use]
    pub fn greedy(&self) -> GreedyOutcome {
        let size = self.standings.len();
        let mut taken = vec![false; size];
        let mut pairs = Vec::with_capacity(size / 2);

        for team in 0..size {
            if taken[team] {
                continue;
            }
            taken[team] = true;

            let opponent = (0..size).find(|&candidate| {
                candidate != team && !taken[candidate] && !self.rematches.contains(team, candidate)
            });
            match opponent {
                Some(opponent) => {
                    taken[opponent] = true;
                    pairs.push((team, opponent));
                }
                None => return GreedyOutcome::Stuck { team },
            }
        }

        GreedyOutcome::Complete(pairs)
    }

    /// Enumerate rematch-free partitions (up to the cap) and keep the one with
    /// the smallest rank-distance cost. The first partition found wins ties.
    fn exhaustive(&self, stuck_team: String) -> Result<RoundPairings, PairingError> {
        let started = Instant::now();
        let mut search = PartitionSearch::new(&self.rematches, self.config.enumeration_cap);

        let mut best: Option<(usize, Vec<(usize, usize)>)> = None;
        for partition in search.by_ref() {
            let cost = partition_cost(&partition);
            if best.as_ref().map_or(true, |(best_cost, _)| cost < *best_cost) {
                best = Some((cost, partition));
            }
        }

        info!(
            "Number of possible combinations = {} ({:.3}s)",
            search.yielded(),
            started.elapsed().as_secs_f64()
        );
        if search.cap_reached() {
            warn!(
                "Enumeration cap of {} partitions reached; the pairing may not be the best available",
                search.cap()
            );
        }

        let (_, partition) = best.ok_or(PairingError::NoValidPairing {
            teams: self.standings.len(),
        })?;

        Ok(self.finish(
            &partition,
            PairingMethod::Exhaustive {
                stuck_team,
                partitions_searched: search.yielded(),
                cap_reached: search.cap_reached(),
            },
        ))
    }

    fn finish(&self, pairs: &[(usize, usize)], method: PairingMethod) -> RoundPairings {
        let pairings: Vec<Pairing> = pairs
            .iter()
            .map(|&(a, b)| Pairing::new(self.name_at(a), self.name_at(b)))
            .collect();
        for pairing in &pairings {
            debug!("Paired {pairing}");
        }

        RoundPairings {
            pairings,
            method,
            cost: partition_cost(pairs),
        }
    }

    fn name_at(&self, position: usize) -> &str {
        self.standings.get(position).map_or("", |team| team.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::TeamRecord;
    use crate::core::standings::RankedTeam;
    use crate::core::types::Outcome;

    /// Standings in the given order, with `played` pairs recorded in both histories
    fn standings(order: &[&str], played: &[(&str, &str)]) -> Standings {
        let mut records: Vec<TeamRecord> = order
            .iter()
            .enumerate()
            .map(|(i, name)| TeamRecord::new(*name, i as u32 + 1))
            .collect();
        for (a, b) in played {
            for record in records.iter_mut() {
                if record.name == *a {
                    record.record_match(b, Outcome::Draw, 0, 0, 0).unwrap();
                } else if record.name == *b {
                    record.record_match(a, Outcome::Draw, 0, 0, 0).unwrap();
                }
            }
        }
        Standings::new(records.into_iter().map(RankedTeam::unranked).collect())
    }

    fn assert_perfect_and_fresh(table: &Standings, round: &RoundPairings) {
        assert_eq!(round.pairings.len(), table.len() / 2);
        for team in table {
            let count = round
                .pairings
                .iter()
                .filter(|p| p.involves(team.name()))
                .count();
            assert_eq!(count, 1, "{} paired {count} times", team.name());
        }
        for pairing in &round.pairings {
            let home = table.team(&pairing.home).unwrap();
            assert!(!home.record.has_played(&pairing.away), "rematch {pairing}");
        }
    }

    #[test]
    fn test_greedy_pairs_neighbours() {
        let table = standings(&["A", "B", "C", "D"], &[]);
        let engine = PairingEngine::new(&table, PairingConfig::default()).unwrap();
        let round = engine.pair().unwrap();

        assert_eq!(round.method, PairingMethod::Greedy);
        assert_eq!(
            round.pairings,
            vec![Pairing::new("A", "B"), Pairing::new("C", "D")]
        );
        assert_eq!(round.cost, 2);
    }

    #[test]
    fn test_greedy_skips_previous_opponents() {
        let table = standings(&["A", "B", "C", "D"], &[("A", "B"), ("C", "D")]);
        let engine = PairingEngine::new(&table, PairingConfig::default()).unwrap();

        assert_eq!(engine.greedy(), GreedyOutcome::Complete(vec![(0, 2), (1, 3)]));
        let round = engine.pair().unwrap();
        assert_eq!(round.method, PairingMethod::Greedy);
        assert_perfect_and_fresh(&table, &round);
    }

    #[test]
    fn test_stuck_last_pair_falls_back() {
        // A and B already met and are the last two left for greedy
        let table = standings(&["C", "D", "A", "B"], &[("A", "B")]);
        let engine = PairingEngine::new(&table, PairingConfig::default()).unwrap();

        assert_eq!(engine.greedy(), GreedyOutcome::Stuck { team: 2 });

        let round = engine.pair().unwrap();
        assert!(matches!(
            round.method,
            PairingMethod::Exhaustive { ref stuck_team, cap_reached: false, partitions_searched: 2 }
                if stuck_team == "A"
        ));
        // (C,A)(D,B) and (C,B)(D,A) both cost 4; the first found wins
        assert_eq!(
            round.pairings,
            vec![Pairing::new("C", "A"), Pairing::new("D", "B")]
        );
        assert_eq!(round.cost, 4);
        assert_perfect_and_fresh(&table, &round);
    }

    #[test]
    fn test_fallback_picks_lowest_cost() {
        // Greedy: A-C, B-D, then E and F have met -> stuck
        let table = standings(
            &["A", "B", "C", "D", "E", "F"],
            &[("A", "B"), ("C", "D"), ("E", "F"), ("B", "C")],
        );
        let engine = PairingEngine::new(&table, PairingConfig::default()).unwrap();
        assert!(matches!(engine.greedy(), GreedyOutcome::Stuck { .. }));

        let round = engine.pair().unwrap();
        assert_perfect_and_fresh(&table, &round);

        // Brute-force the optimum over all legal partitions
        let rematches = RematchTable::from_standings(&table).unwrap();
        let optimum = PartitionSearch::new(&rematches, usize::MAX)
            .map(|p| partition_cost(&p))
            .min()
            .unwrap();
        assert_eq!(round.cost, optimum);
    }

    #[test]
    fn test_cap_limits_search() {
        let table = standings(&["C", "D", "A", "B"], &[("A", "B")]);
        let config = PairingConfig { enumeration_cap: 1 };
        let engine = PairingEngine::new(&table, config).unwrap();

        let round = engine.pair().unwrap();
        assert!(matches!(
            round.method,
            PairingMethod::Exhaustive { cap_reached: true, partitions_searched: 1, .. }
        ));
        assert_perfect_and_fresh(&table, &round);
    }

    #[test]
    fn test_no_valid_pairing() {
        let table = standings(&["A", "B", "C", "D"], &[("A", "B"), ("A", "C"), ("A", "D")]);
        let engine = PairingEngine::new(&table, PairingConfig::default()).unwrap();
        assert_eq!(
            engine.pair().unwrap_err(),
            PairingError::NoValidPairing { teams: 4 }
        );
    }

    #[test]
    fn test_odd_team_count() {
        let table = standings(&["A", "B", "C"], &[]);
        let engine = PairingEngine::new(&table, PairingConfig::default()).unwrap();
        assert_eq!(engine.pair().unwrap_err(), PairingError::OddTeamCount(3));
    }

    #[test]
    fn test_empty_standings() {
        let table = Standings::default();
        let engine = PairingEngine::new(&table, PairingConfig::default()).unwrap();
        let round = engine.pair().unwrap();
        assert!(round.pairings.is_empty());
        assert_eq!(round.method, PairingMethod::Greedy);
    }

    #[test]
    fn test_unknown_opponent() {
        let mut record = TeamRecord::new("A", 1);
        record.record_match("Ghost", Outcome::Win, 1, 0, 0).unwrap();
        let table = Standings::new(vec![
            RankedTeam::unranked(record),
            RankedTeam::unranked(TeamRecord::new("B", 2)),
        ]);
        assert!(matches!(
            PairingEngine::new(&table, PairingConfig::default()),
            Err(PairingError::UnknownOpponent { .. })
        ));
    }
}
