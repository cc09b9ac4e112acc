use serde::{Deserialize, Serialize};

/// Points awarded for a win
pub const WIN_POINTS: u32 = 3;

/// Points awarded for a draw
pub const DRAW_POINTS: u32 = 1;

/// Result of a single match from one team's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// Derive both sides' outcomes from a pair of scores
    #[must_use]
    pub fn from_scores(score_a: u32, score_b: u32) -> (Self, Self) {
        match score_a.cmp(&score_b) {
            std::cmp::Ordering::Greater => (Self::Win, Self::Loss),
            std::cmp::Ordering::Less => (Self::Loss, Self::Win),
            std::cmp::Ordering::Equal => (Self::Draw, Self::Draw),
        }
    }

    #[must_use]
    pub fn points(self) -> u32 {
        match self {
            Self::Win => WIN_POINTS,
            Self::Draw => DRAW_POINTS,
            Self::Loss => 0,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "W"),
            Self::Draw => write!(f, "D"),
            Self::Loss => write!(f, "L"),
        }
    }
}

/// Two teams assigned to play each other in the next round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub home: String,
    pub away: String,
}

impl Pairing {
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
        }
    }

    /// Check whether this pairing names the given team on either side
    #[must_use]
    pub fn involves(&self, team: &str) -> bool {
        self.home == team || self.away == team
    }
}

impl std::fmt::Display for Pairing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} vs {}", self.home, self.away)
    }
}
