use serde::{Deserialize, Serialize};

use crate::core::types::Outcome;
use crate::ranking::StandingsError;

/// Cumulative record of one team over every match played so far
///
/// `played_teams` and `history` are parallel: entry `i` of each describes the
/// same match, in the order matches were applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub name: String,
    pub seed: u32,

    /// Opponents in the order they were played
    pub played_teams: Vec<String>,

    /// Result of each match against the corresponding entry of `played_teams`
    pub history: Vec<Outcome>,

    pub wins: u32,
    pub draws: u32,
    pub losses: u32,

    /// Score scored across all matches
    pub points_for: u32,

    /// Score conceded across all matches
    pub points_against: u32,

    /// Accumulated fouls
    pub fouls: u32,
}

impl TeamRecord {
    /// Create an empty record for a team that has not played yet
    pub fn new(name: impl Into<String>, seed: u32) -> Self {
        Self {
            name: name.into(),
            seed,
            played_teams: Vec::new(),
            history: Vec::new(),
            wins: 0,
            draws: 0,
            losses: 0,
            points_for: 0,
            points_against: 0,
            fouls: 0,
        }
    }

    /// Record one match from this team's side
    ///
    /// # Errors
    ///
    /// Returns `StandingsError::CounterOverflow` if a score or foul total would
    /// no longer fit; the record is left unchanged.
    pub fn record_match(
        &mut self,
        opponent: &str,
        outcome: Outcome,
        scored: u32,
        conceded: u32,
        fouls: u32,
    ) -> Result<(), StandingsError> {
        let overflow = || StandingsError::CounterOverflow {
            team: self.name.clone(),
        };
        let points_for = self.points_for.checked_add(scored).ok_or_else(overflow)?;
        let points_against = self
            .points_against
            .checked_add(conceded)
            .ok_or_else(overflow)?;
        let total_fouls = self.fouls.checked_add(fouls).ok_or_else(overflow)?;

        self.played_teams.push(opponent.to_string());
        self.history.push(outcome);
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Loss => self.losses += 1,
        }
        self.points_for = points_for;
        self.points_against = points_against;
        self.fouls = total_fouls;
        Ok(())
    }

    /// Standings points: 3 per win, 1 per draw
    #[must_use]
    pub fn points(&self) -> u32 {
        self.history.iter().map(|outcome| outcome.points()).sum()
    }

    #[must_use]
    pub fn matches_played(&self) -> usize {
        self.played_teams.len()
    }

    #[must_use]
    pub fn has_played(&self, opponent: &str) -> bool {
        self.played_teams.iter().any(|t| t == opponent)
    }

    /// Check whether this team has won at least one match against `opponent`
    #[must_use]
    pub fn has_beaten(&self, opponent: &str) -> bool {
        self.played_teams
            .iter()
            .zip(&self.history)
            .any(|(team, outcome)| team == opponent && *outcome == Outcome::Win)
    }

    /// Number of the given teams this team has beaten, each counted once no
    /// matter how many times it was beaten. `teams` must not repeat a name.
    pub fn teams_beaten<'a, I>(&self, teams: I) -> u32
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut count = 0;
        for team in teams {
            if self.has_beaten(team) {
                count += 1;
            }
        }
        count
    }

    /// Most recent opponent, if any
    #[must_use]
    pub fn last_opponent(&self) -> Option<&str> {
        self.played_teams.last().map(String::as_str)
    }

    /// Result of the most recent match, if any
    #[must_use]
    pub fn last_result(&self) -> Option<Outcome> {
        self.history.last().copied()
    }
}
