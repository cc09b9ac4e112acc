use serde::Serialize;
use std::collections::HashMap;

use crate::core::record::TeamRecord;

/// A team record together with the metrics derived from one ranking snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTeam {
    pub record: TeamRecord,

    /// 3 per win, 1 per draw
    pub points: u32,

    /// Sum over opponents of (opponent points / opponent matches played)
    pub buchholz: f64,

    /// Wins against other teams currently on the same points
    pub tb: u32,

    /// Position within a fully tied group; 0 for teams with no exact tie
    pub random_key: u32,
}

impl RankedTeam {
    /// Wrap a record with no tiebreak metrics (used before any round is played)
    pub fn unranked(record: TeamRecord) -> Self {
        let points = record.points();
        Self {
            record,
            points,
            buchholz: 0.0,
            tb: 0,
            random_key: 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.record.name
    }

    #[must_use]
    pub fn fouls(&self) -> u32 {
        self.record.fouls
    }
}

/// An immutable ranked table of teams
///
/// Position 0 is the top of the table. Every stage that changes the order
/// builds a new `Standings` rather than mutating an existing one.
#[derive(Debug, Clone, Default)]
pub struct Standings {
    teams: Vec<RankedTeam>,

    /// Index: team name -> position
    name_to_position: HashMap<String, usize>,
}

impl Standings {
    pub fn new(teams: Vec<RankedTeam>) -> Self {
        let name_to_position = teams
            .iter()
            .enumerate()
            .map(|(i, team)| (team.record.name.clone(), i))
            .collect();
        Self {
            teams,
            name_to_position,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&RankedTeam> {
        self.teams.get(position)
    }

    #[must_use]
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.name_to_position.get(name).copied()
    }

    #[must_use]
    pub fn team(&self, name: &str) -> Option<&RankedTeam> {
        self.position_of(name).map(|i| &self.teams[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedTeam> {
        self.teams.iter()
    }

    /// Team names in ranked order
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.teams.iter().map(RankedTeam::name).collect()
    }

    pub fn into_teams(self) -> Vec<RankedTeam> {
        self.teams
    }
}

impl<'a> IntoIterator for &'a Standings {
    type Item = &'a RankedTeam;
    type IntoIter = std::slice::Iter<'a, RankedTeam>;

    fn into_iter(self) -> Self::IntoIter {
        self.teams.iter()
    }
}
