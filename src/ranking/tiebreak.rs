use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::core::record::TeamRecord;
use crate::core::standings::{RankedTeam, Standings};
use crate::ranking::StandingsError;

/// Exact key of the first four ranking criteria. Buchholz is compared by bit
/// pattern, matching the exact-equality grouping of the sort.
type TieKey = (u32, u64, u32, u32);

/// Buchholz score: for every opponent played, that opponent's points divided by
/// the number of matches it has played, summed.
///
/// An opponent with no matches contributes nothing; a valid ledger never
/// produces one since every match counts for both sides.
///
/// # Errors
///
/// Returns `StandingsError::UnknownTeam` if an opponent has no record.
pub fn buchholz(
    record: &TeamRecord,
    records: &HashMap<&str, &TeamRecord>,
) -> Result<f64, StandingsError> {
    let mut total = 0.0;
    for opponent in &record.played_teams {
        let other = records
            .get(opponent.as_str())
            .ok_or_else(|| StandingsError::UnknownTeam {
                team: opponent.clone(),
            })?;
        let played = other.matches_played();
        if played > 0 {
            total += f64::from(other.points()) / played as f64;
        }
    }
    Ok(total)
}

/// TB score: how many of the other teams currently on the same points this team
/// has beaten at least once. Zero when no other team shares its points.
#[must_use]
pub fn tb_score(record: &TeamRecord, records: &[TeamRecord]) -> u32 {
    let points = record.points();
    let tied: Vec<&str> = records
        .iter()
        .filter(|other| other.name != record.name && other.points() == points)
        .map(|other| other.name.as_str())
        .collect();

    if tied.is_empty() {
        return 0;
    }
    record.teams_beaten(tied.iter().copied())
}

/// Full ranking comparison: points desc, Buchholz desc, fouls asc, TB desc,
/// random key asc.
#[must_use]
pub fn compare_ranked(a: &RankedTeam, b: &RankedTeam) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.buchholz.total_cmp(&a.buchholz))
        .then_with(|| a.fouls().cmp(&b.fouls()))
        .then_with(|| b.tb.cmp(&a.tb))
        .then_with(|| a.random_key.cmp(&b.random_key))
}

/// Derive tiebreak metrics for every record and sort them into a strict order.
///
/// All metrics are computed from the same input snapshot before anything is
/// reordered. Teams sharing points, Buchholz, fouls and TB exactly receive keys
/// from a uniform permutation drawn from `rng`; groups are visited in input
/// order, so a seeded generator reproduces the same table for the same input.
///
/// # Errors
///
/// Returns `StandingsError::UnknownTeam` if a record references an opponent that
/// has no record.
pub fn rank<R: Rng + ?Sized>(
    records: Vec<TeamRecord>,
    rng: &mut R,
) -> Result<Standings, StandingsError> {
    let by_name: HashMap<&str, &TeamRecord> =
        records.iter().map(|r| (r.name.as_str(), r)).collect();

    let mut metrics = Vec::with_capacity(records.len());
    for record in &records {
        metrics.push((
            record.points(),
            buchholz(record, &by_name)?,
            tb_score(record, &records),
        ));
    }

    let mut ranked: Vec<RankedTeam> = records
        .into_iter()
        .zip(metrics)
        .map(|(record, (points, buchholz, tb))| RankedTeam {
            record,
            points,
            buchholz,
            tb,
            random_key: 0,
        })
        .collect();

    assign_random_keys(&mut ranked, rng);
    ranked.sort_by(compare_ranked);

    Ok(Standings::new(ranked))
}

fn tie_key(team: &RankedTeam) -> TieKey {
    (team.points, team.buchholz.to_bits(), team.fouls(), team.tb)
}

fn assign_random_keys<R: Rng + ?Sized>(teams: &mut [RankedTeam], rng: &mut R) {
    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut group_of: HashMap<TieKey, usize> = HashMap::new();
    for (i, team) in teams.iter().enumerate() {
        let group = *group_of.entry(tie_key(team)).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[group].push(i);
    }

    for members in groups.iter().filter(|members| members.len() > 1) {
        let mut keys: Vec<u32> = (0..members.len() as u32).collect();
        keys.shuffle(rng);
        for (&member, key) in members.iter().zip(keys) {
            teams[member].random_key = key;
        }
    }
}
