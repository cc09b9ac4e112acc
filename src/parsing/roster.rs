use std::path::Path;

use crate::core::roster::{Roster, RosterEntry};
use crate::parsing::ParseError;
use crate::utils::validation::{check_team_limit, validate_team_name, FIELD_SEPARATOR};

/// Parse a roster file with one `<team> ; <seed-rank>` line per team
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_roster_file(path: &Path) -> Result<Roster, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_roster_text(&content)
}

/// Parse roster text with one `<team> ; <seed-rank>` line per team
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a line does not have exactly two fields,
/// the seed rank is not a non-negative integer, or no teams are found;
/// `ParseError::InvalidTeamName` or `ParseError::DuplicateTeam` for bad names; or
/// `ParseError::TooManyTeams` if the limit is exceeded.
pub fn parse_roster_text(text: &str) -> Result<Roster, ParseError> {
    let mut roster = Roster::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        let fields: Vec<&str> = line.split(FIELD_SEPARATOR.trim()).collect();
        if fields.len() != 2 {
            return Err(ParseError::InvalidFormat(format!(
                "Roster line {line_num} must be '<team> ; <seed-rank>', got '{line}'"
            )));
        }

        let name = validate_team_name(fields[0]).map_err(|source| ParseError::InvalidTeamName {
            line: line_num,
            source,
        })?;
        let seed: u32 = fields[1].trim().parse().map_err(|_| {
            ParseError::InvalidFormat(format!(
                "Invalid seed rank on line {}: '{}'",
                line_num,
                fields[1].trim()
            ))
        })?;

        // Check team limit for DOS protection
        if let Some(message) = check_team_limit(roster.len()) {
            return Err(ParseError::TooManyTeams(message));
        }

        if !roster.add(RosterEntry::new(name, seed)) {
            return Err(ParseError::DuplicateTeam {
                name: name.to_string(),
                line: line_num,
            });
        }
    }

    if roster.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No teams found in roster".to_string(),
        ));
    }

    Ok(roster)
}
