use serde::{Deserialize, Serialize};

use crate::core::types::Outcome;

/// A completed match between two teams
///
/// The two sides are stored in ledger order, but the match itself is unordered:
/// applying it updates both teams symmetrically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub team_a: String,
    pub team_b: String,
    pub score_a: u32,
    pub score_b: u32,
    pub fouls_a: u32,
    pub fouls_b: u32,
}

impl MatchOutcome {
    pub fn new(team_a: impl Into<String>, team_b: impl Into<String>) -> Self {
        Self {
            team_a: team_a.into(),
            team_b: team_b.into(),
            score_a: 0,
            score_b: 0,
            fouls_a: 0,
            fouls_b: 0,
        }
    }

    #[must_use]
    pub fn with_scores(mut self, score_a: u32, score_b: u32) -> Self {
        self.score_a = score_a;
        self.score_b = score_b;
        self
    }

    #[must_use]
    pub fn with_fouls(mut self, fouls_a: u32, fouls_b: u32) -> Self {
        self.fouls_a = fouls_a;
        self.fouls_b = fouls_b;
        self
    }

    /// Outcomes for (team A, team B)
    #[must_use]
    pub fn outcomes(&self) -> (Outcome, Outcome) {
        Outcome::from_scores(self.score_a, self.score_b)
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} ; {} - {} ; {} - {}",
            self.team_a, self.team_b, self.score_a, self.score_b, self.fouls_a, self.fouls_b
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcomes_follow_scores() {
        let m = MatchOutcome::new("A", "B").with_scores(2, 1);
        assert_eq!(m.outcomes(), (Outcome::Win, Outcome::Loss));

        let m = MatchOutcome::new("A", "B").with_scores(1, 1);
        assert_eq!(m.outcomes(), (Outcome::Draw, Outcome::Draw));
    }

    #[test]
    fn test_display_matches_ledger_format() {
        let m = MatchOutcome::new("A", "B").with_scores(2, 1).with_fouls(0, 3);
        assert_eq!(m.to_string(), "A - B ; 2 - 1 ; 0 - 3");
    }
}
