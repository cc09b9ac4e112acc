use crate::core::standings::Standings;
use crate::pairing::engine::PairingError;

/// Symmetric table of which ranked positions have already played each other
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RematchTable {
    size: usize,
    played: Vec<bool>,
}

impl RematchTable {
    /// Create a table for `size` teams with no matches recorded
    pub fn new(size: usize) -> Self {
        Self {
            size,
            played: vec![false; size * size],
        }
    }

    /// Build the table from each team's opponent history.
    ///
    /// # Errors
    ///
    /// Returns `PairingError::UnknownOpponent` if a history entry names a team
    /// that is not in the standings.
    pub fn from_standings(standings: &Standings) -> Result<Self, PairingError> {
        let mut table = Self::new(standings.len());
        for (i, team) in standings.iter().enumerate() {
            for opponent in &team.record.played_teams {
                let j = standings
                    .position_of(opponent)
                    .ok_or_else(|| PairingError::UnknownOpponent {
                        team: team.name().to_string(),
                        opponent: opponent.clone(),
                    })?;
                table.mark(i, j);
            }
        }
        Ok(table)
    }

    pub fn mark(&mut self, a: usize, b: usize) {
        self.played[a * self.size + b] = true;
        self.played[b * self.size + a] = true;
    }

    #[must_use]
    pub fn contains(&self, a: usize, b: usize) -> bool {
        self.played[a * self.size + b]
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::TeamRecord;
    use crate::core::standings::RankedTeam;
    use crate::core::types::Outcome;

    #[test]
    fn test_mark_is_symmetric() {
        let mut table = RematchTable::new(4);
        table.mark(0, 3);
        assert!(table.contains(0, 3));
        assert!(table.contains(3, 0));
        assert!(!table.contains(0, 1));
        assert!(!table.contains(1, 2));
    }

    #[test]
    fn test_from_standings() {
        let mut a = TeamRecord::new("A", 1);
        let mut b = TeamRecord::new("B", 2);
        a.record_match("B", Outcome::Win, 1, 0, 0).unwrap();
        b.record_match("A", Outcome::Loss, 0, 1, 0).unwrap();
        let standings = Standings::new(vec![
            RankedTeam::unranked(b),
            RankedTeam::unranked(TeamRecord::new("C", 3)),
            RankedTeam::unranked(a),
        ]);

        let table = RematchTable::from_standings(&standings).unwrap();
        assert!(table.contains(0, 2));
        assert!(table.contains(2, 0));
        assert!(!table.contains(0, 1));
        assert!(!table.contains(1, 2));
    }

    #[test]
    fn test_unknown_opponent() {
        let mut a = TeamRecord::new("A", 1);
        a.record_match("Ghost", Outcome::Win, 1, 0, 0).unwrap();
        let standings = Standings::new(vec![RankedTeam::unranked(a)]);
        assert_eq!(
            RematchTable::from_standings(&standings).unwrap_err(),
            PairingError::UnknownOpponent {
                team: "A".to_string(),
                opponent: "Ghost".to_string()
            }
        );
    }
}
