//! Centralized validation and helper functions.

/// Maximum number of teams allowed in a single roster (DOS protection)
pub const MAX_TEAMS: usize = 10_000;

/// Separator between the two sides of a ledger field
pub const SIDE_SEPARATOR: &str = " - ";

/// Separator between ledger fields
pub const FIELD_SEPARATOR: &str = " ; ";

/// Placeholder used for scores and fouls of a match not yet played
pub const PENDING_TOKEN: &str = "?";

/// Check if adding another team would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new team.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_team_limit(count: usize) -> Option<String> {
    if count >= MAX_TEAMS {
        Some(format!(
            "Too many teams: adding another would exceed maximum of {MAX_TEAMS}"
        ))
    } else {
        None
    }
}

/// Team name validation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Empty team name")]
    EmptyName,
    #[error("Team name '{0}' contains a ledger separator (' - ' or ' ; ')")]
    ContainsSeparator(String),
    #[error("Team name '{0}' contains control characters")]
    ControlCharacters(String),
}

/// Validate a team name so that it survives a round trip through the ledger format.
///
/// Returns the trimmed name.
///
/// # Errors
///
/// Returns `ValidationError::EmptyName` if nothing is left after trimming,
/// `ValidationError::ContainsSeparator` if the name would split a ledger line, or
/// `ValidationError::ControlCharacters` for embedded control characters.
///
/// # Examples
///
/// ```
/// use swiss_pairing::utils::validation::validate_team_name;
///
/// assert_eq!(validate_team_name("  Red Lions ").unwrap(), "Red Lions");
/// assert!(validate_team_name("Red - Lions").is_err());
/// assert!(validate_team_name("   ").is_err());
/// ```
pub fn validate_team_name(name: &str) -> Result<&str, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    // ';' is rejected even without surrounding spaces so roster lines stay unambiguous
    if trimmed.contains(SIDE_SEPARATOR) || trimmed.contains(FIELD_SEPARATOR.trim()) {
        return Err(ValidationError::ContainsSeparator(trimmed.to_string()));
    }
    if trimmed.chars().any(char::is_control) {
        return Err(ValidationError::ControlCharacters(trimmed.to_string()));
    }
    Ok(trimmed)
}
