//! Tournament configuration.
//!
//! Values come from [`TournamentConfig::default`], optionally overridden by a JSON
//! file, and finally by command-line flags:
//!
//! ```json
//! { "foul_threshold": 6, "enumeration_cap": 100000, "tiebreak_seed": 0 }
//! ```
//!
//! Missing keys keep their defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Accumulated fouls at which a team is pushed to the bottom of the table
pub const DEFAULT_FOUL_THRESHOLD: u32 = 6;

/// Maximum number of complete partitions the pairing fallback enumerates
pub const DEFAULT_ENUMERATION_CAP: usize = 100_000;

/// Seed for the tiebreak permutation generator
pub const DEFAULT_TIEBREAK_SEED: u64 = 0;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Settings for one standings + pairing run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TournamentConfig {
    pub foul_threshold: u32,
    pub enumeration_cap: usize,
    pub tiebreak_seed: u64,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            foul_threshold: DEFAULT_FOUL_THRESHOLD,
            enumeration_cap: DEFAULT_ENUMERATION_CAP,
            tiebreak_seed: DEFAULT_TIEBREAK_SEED,
        }
    }
}

impl TournamentConfig {
    /// Load configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadError` if the file cannot be read,
    /// `ConfigError::ParseError` for invalid JSON or unknown keys, or
    /// `ConfigError::Invalid` if a value is out of range.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` for invalid JSON, or
    /// `ConfigError::Invalid` if a value is out of range.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the enumeration cap is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enumeration_cap == 0 {
            return Err(ConfigError::Invalid(
                "enumeration_cap must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Return a copy with any provided overrides applied
    #[must_use]
    pub fn with_overrides(
        mut self,
        foul_threshold: Option<u32>,
        enumeration_cap: Option<usize>,
        tiebreak_seed: Option<u64>,
    ) -> Self {
        if let Some(value) = foul_threshold {
            self.foul_threshold = value;
        }
        if let Some(value) = enumeration_cap {
            self.enumeration_cap = value;
        }
        if let Some(value) = tiebreak_seed {
            self.tiebreak_seed = value;
        }
        self
    }
}
