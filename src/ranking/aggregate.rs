use std::collections::{HashMap, HashSet};

use crate::core::outcome::MatchOutcome;
use crate::core::record::TeamRecord;
use crate::core::roster::Roster;
use crate::parsing::ledger::Ledger;
use crate::ranking::StandingsError;

/// Fold matches into one record per roster team.
///
/// Records come back in seed order (ascending seed, roster order on equal seeds).
/// Counters do not depend on the order of `outcomes`, but each team's
/// `played_teams`/`history` follow it, so pass matches oldest first.
///
/// # Errors
///
/// Returns `StandingsError::UnknownTeam` if a match names a team missing from the
/// roster, `StandingsError::SelfMatch` if both sides are the same team, or
/// `StandingsError::CounterOverflow` if a team's score or foul total overflows.
pub fn aggregate<'a, I>(roster: &Roster, outcomes: I) -> Result<Vec<TeamRecord>, StandingsError>
where
    I: IntoIterator<Item = &'a MatchOutcome>,
{
    let mut records: Vec<TeamRecord> = roster
        .seed_order()
        .into_iter()
        .map(|entry| TeamRecord::new(entry.name.clone(), entry.seed))
        .collect();
    let index: HashMap<String, usize> = records
        .iter()
        .enumerate()
        .map(|(i, record)| (record.name.clone(), i))
        .collect();

    for outcome in outcomes {
        let a = lookup(&index, &outcome.team_a)?;
        let b = lookup(&index, &outcome.team_b)?;
        if a == b {
            return Err(StandingsError::SelfMatch {
                team: outcome.team_a.clone(),
            });
        }

        let (result_a, result_b) = outcome.outcomes();
        records[a].record_match(
            &outcome.team_b,
            result_a,
            outcome.score_a,
            outcome.score_b,
            outcome.fouls_a,
        )?;
        records[b].record_match(
            &outcome.team_a,
            result_b,
            outcome.score_b,
            outcome.score_a,
            outcome.fouls_b,
        )?;
    }

    Ok(records)
}

/// Validate each round and fold the whole ledger, oldest round first.
///
/// # Errors
///
/// Returns `StandingsError::PlayedTwiceInRound` if a team appears in two matches
/// of the same round, plus the errors of [`aggregate`].
pub fn aggregate_ledger(roster: &Roster, ledger: &Ledger) -> Result<Vec<TeamRecord>, StandingsError> {
    for (i, round) in ledger.rounds.iter().enumerate() {
        let mut seen: HashSet<&str> = HashSet::new();
        for outcome in &round.matches {
            for team in [outcome.team_a.as_str(), outcome.team_b.as_str()] {
                if !seen.insert(team) && outcome.team_a != outcome.team_b {
                    return Err(StandingsError::PlayedTwiceInRound {
                        team: team.to_string(),
                        round: i + 1,
                    });
                }
            }
        }
    }

    aggregate(roster, ledger.outcomes())
}

fn lookup(index: &HashMap<String, usize>, team: &str) -> Result<usize, StandingsError> {
    index
        .get(team)
        .copied()
        .ok_or_else(|| StandingsError::UnknownTeam {
            team: team.to_string(),
        })
}
