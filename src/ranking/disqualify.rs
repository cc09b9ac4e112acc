use tracing::{info, warn};

use crate::core::standings::{RankedTeam, Standings};

/// Standings after the foul threshold was applied
#[derive(Debug, Clone)]
pub struct Disqualification {
    pub standings: Standings,

    /// Teams at or above the threshold, in their ranked order
    pub disqualified: Vec<String>,
}

/// Move every team whose fouls reach `threshold` below all other teams.
///
/// This is a stable partition: both groups keep their relative order and no team
/// is removed. One warning is logged per disqualified team.
pub fn apply_foul_threshold(standings: Standings, threshold: u32) -> Disqualification {
    let (eligible, penalized): (Vec<RankedTeam>, Vec<RankedTeam>) = standings
        .into_teams()
        .into_iter()
        .partition(|team| team.fouls() < threshold);

    if penalized.is_empty() {
        info!("No team has {threshold} or more fouls");
    }
    for team in &penalized {
        warn!(
            "Team {} disqualified: {} fouls (threshold {})",
            team.name(),
            team.fouls(),
            threshold
        );
    }

    let disqualified = penalized.iter().map(|t| t.name().to_string()).collect();
    let mut teams = eligible;
    teams.extend(penalized);

    Disqualification {
        standings: Standings::new(teams),
        disqualified,
    }
}
