use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::outcome::MatchOutcome;
use crate::core::types::Pairing;
use crate::parsing::ParseError;
use crate::utils::validation::{
    validate_team_name, FIELD_SEPARATOR, PENDING_TOKEN, SIDE_SEPARATOR,
};

/// One parsed line of a round file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerLine {
    /// A completed match with scores and fouls
    Played(MatchOutcome),
    /// A paired match still carrying `?` placeholders
    Pending(Pairing),
}

/// Contents of one round file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundFile {
    /// Every line is a completed match
    Played(Vec<MatchOutcome>),
    /// Every line is a pending placeholder
    Pending(Vec<Pairing>),
    /// No match lines at all (or the file does not exist yet)
    Empty,
}

/// A round whose matches have all been played
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedRound {
    /// File the round was read from, if any
    pub source: Option<PathBuf>,
    pub matches: Vec<MatchOutcome>,
}

/// The first round file that has not been played yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextRound {
    pub path: PathBuf,
    /// Pairings already written into the file, if any
    pub pending: Vec<Pairing>,
}

/// All completed rounds in chronological order, plus the slot for the next round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    pub rounds: Vec<PlayedRound>,
    pub next_round: Option<NextRound>,
}

impl Ledger {
    /// Build a ledger from in-memory rounds
    pub fn from_rounds(rounds: Vec<Vec<MatchOutcome>>) -> Self {
        Self {
            rounds: rounds
                .into_iter()
                .map(|matches| PlayedRound {
                    source: None,
                    matches,
                })
                .collect(),
            next_round: None,
        }
    }

    /// Every completed match, oldest round first
    pub fn outcomes(&self) -> impl Iterator<Item = &MatchOutcome> {
        self.rounds.iter().flat_map(|round| round.matches.iter())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.iter().all(|round| round.matches.is_empty())
    }
}

/// Load round files in order, stopping at the first round that is not fully played.
///
/// A missing file counts as an empty round, so the next round's file does not
/// have to exist before it is written. Files after the first unplayed round are
/// not read.
///
/// # Errors
///
/// Returns `ParseError::InFile` wrapping the error of the first round file that
/// cannot be read or parsed.
pub fn load_ledger(paths: &[PathBuf]) -> Result<Ledger, ParseError> {
    let mut ledger = Ledger::default();

    for (i, path) in paths.iter().enumerate() {
        let round = parse_round_file(path).map_err(|e| ParseError::InFile {
            path: path.display().to_string(),
            error: Box::new(e),
        })?;
        match round {
            RoundFile::Played(matches) => {
                debug!(
                    "Read round {} from {} ({} matches)",
                    i + 1,
                    path.display(),
                    matches.len()
                );
                ledger.rounds.push(PlayedRound {
                    source: Some(path.clone()),
                    matches,
                });
            }
            RoundFile::Pending(pending) => {
                debug!("Round {} in {} is not played yet", i + 1, path.display());
                ledger.next_round = Some(NextRound {
                    path: path.clone(),
                    pending,
                });
                break;
            }
            RoundFile::Empty => {
                debug!("Round {} in {} is empty", i + 1, path.display());
                ledger.next_round = Some(NextRound {
                    path: path.clone(),
                    pending: Vec::new(),
                });
                break;
            }
        }
    }

    Ok(ledger)
}

/// Parse one round file. A file that does not exist is an empty round.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file exists but cannot be read, or other parse
/// errors if the content is invalid.
pub fn parse_round_file(path: &Path) -> Result<RoundFile, ParseError> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_round_text(&content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(RoundFile::Empty),
        Err(e) => Err(e.into()),
    }
}

/// Parse the text of one round file
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` or `ParseError::InvalidTeamName` for a
/// malformed line, or `ParseError::MixedRound` if played and pending lines appear
/// in the same round.
pub fn parse_round_text(text: &str) -> Result<RoundFile, ParseError> {
    let mut played = Vec::new();
    let mut pending = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match parse_ledger_line(line, i + 1)? {
            LedgerLine::Played(outcome) => played.push(outcome),
            LedgerLine::Pending(pairing) => pending.push(pairing),
        }
    }

    match (played.is_empty(), pending.is_empty()) {
        (true, true) => Ok(RoundFile::Empty),
        (false, true) => Ok(RoundFile::Played(played)),
        (true, false) => Ok(RoundFile::Pending(pending)),
        (false, false) => Err(ParseError::MixedRound(format!(
            "{} played and {} pending lines",
            played.len(),
            pending.len()
        ))),
    }
}

/// Parse a single ledger line. `line_num` is 1-based and only used in errors.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if the line does not have three
/// `;`-separated fields of two sides each, if a score or foul token is neither a
/// non-negative integer nor `?`, or if placeholders and numbers are mixed;
/// `ParseError::InvalidTeamName` if a team name is invalid.
pub fn parse_ledger_line(line: &str, line_num: usize) -> Result<LedgerLine, ParseError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR.trim()).map(str::trim).collect();
    if fields.len() != 3 {
        return Err(ParseError::InvalidFormat(format!(
            "Line {line_num} must have 3 fields separated by ';', found {}",
            fields.len()
        )));
    }

    let (team_a, team_b) = split_sides(fields[0], SIDE_SEPARATOR, line_num, "teams")?;
    let team_a = validate_team_name(team_a)
        .map_err(|source| ParseError::InvalidTeamName {
            line: line_num,
            source,
        })?
        .to_string();
    let team_b = validate_team_name(team_b)
        .map_err(|source| ParseError::InvalidTeamName {
            line: line_num,
            source,
        })?
        .to_string();

    let scores = split_sides(fields[1], SIDE_SEPARATOR.trim(), line_num, "scores")?;
    let fouls = split_sides(fields[2], SIDE_SEPARATOR.trim(), line_num, "fouls")?;
    let tokens = [scores.0, scores.1, fouls.0, fouls.1];

    if tokens.iter().all(|t| *t == PENDING_TOKEN) {
        return Ok(LedgerLine::Pending(Pairing::new(team_a, team_b)));
    }
    if tokens.iter().any(|t| *t == PENDING_TOKEN) {
        return Err(ParseError::InvalidFormat(format!(
            "Line {line_num} mixes '?' placeholders with numbers"
        )));
    }

    let mut values = [0u32; 4];
    for (value, token) in values.iter_mut().zip(tokens) {
        *value = token.parse().map_err(|_| {
            ParseError::InvalidFormat(format!(
                "Invalid score or foul count on line {line_num}: '{token}'"
            ))
        })?;
    }

    Ok(LedgerLine::Played(
        MatchOutcome::new(team_a, team_b)
            .with_scores(values[0], values[1])
            .with_fouls(values[2], values[3]),
    ))
}

fn split_sides<'a>(
    field: &'a str,
    separator: &str,
    line_num: usize,
    what: &str,
) -> Result<(&'a str, &'a str), ParseError> {
    let sides: Vec<&str> = field.split(separator).map(str::trim).collect();
    if sides.len() != 2 {
        return Err(ParseError::InvalidFormat(format!(
            "Line {line_num}: {what} must be written as '<a> - <b>', got '{field}'"
        )));
    }
    Ok((sides[0], sides[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_played_line() {
        let line = parse_ledger_line("Lions - Tigers ; 2 - 1 ; 0 - 3", 1).unwrap();
        assert_eq!(
            line,
            LedgerLine::Played(
                MatchOutcome::new("Lions", "Tigers")
                    .with_scores(2, 1)
                    .with_fouls(0, 3)
            )
        );
    }

    #[test]
    fn test_parse_pending_line() {
        let line = parse_ledger_line("Lions - Bears ; ? - ? ; ? - ?", 1).unwrap();
        assert_eq!(line, LedgerLine::Pending(Pairing::new("Lions", "Bears")));
    }

    #[test]
    fn test_parse_line_allows_hyphenated_names() {
        let line = parse_ledger_line("Real-Madrid - Atletico ; 1-1 ; 2-0", 4).unwrap();
        match line {
            LedgerLine::Played(m) => {
                assert_eq!(m.team_a, "Real-Madrid");
                assert_eq!(m.team_b, "Atletico");
                assert_eq!((m.score_a, m.score_b), (1, 1));
                assert_eq!((m.fouls_a, m.fouls_b), (2, 0));
            }
            LedgerLine::Pending(_) => panic!("expected a played line"),
        }
    }

    #[test]
    fn test_parse_line_rejects_malformed() {
        // wrong field count
        assert!(parse_ledger_line("Lions - Tigers ; 2 - 1", 1).is_err());
        // non-integer score
        assert!(parse_ledger_line("Lions - Tigers ; two - 1 ; 0 - 0", 1).is_err());
        // negative fouls
        assert!(parse_ledger_line("Lions - Tigers ; 2 - 1 ; -1 - 0", 1).is_err());
        // one side only
        assert!(parse_ledger_line("Lions ; 2 - 1 ; 0 - 0", 1).is_err());
        // partial placeholders
        let err = parse_ledger_line("Lions - Tigers ; ? - 1 ; 0 - 0", 7).unwrap_err();
        assert!(err.to_string().contains("Line 7"));
    }

    #[test]
    fn test_parse_round_text_kinds() {
        let played = "A - B ; 2 - 1 ; 0 - 0\nC - D ; 1 - 1 ; 0 - 0\n";
        assert!(matches!(parse_round_text(played).unwrap(), RoundFile::Played(m) if m.len() == 2));

        let pending = "A - C ; ? - ? ; ? - ?\nB - D ; ? - ? ; ? - ?\n";
        assert!(matches!(parse_round_text(pending).unwrap(), RoundFile::Pending(p) if p.len() == 2));

        assert_eq!(parse_round_text("\n  \n").unwrap(), RoundFile::Empty);

        let mixed = "A - B ; 2 - 1 ; 0 - 0\nC - D ; ? - ? ; ? - ?\n";
        assert!(matches!(
            parse_round_text(mixed).unwrap_err(),
            ParseError::MixedRound(_)
        ));
    }

    #[test]
    fn test_load_ledger_stops_at_first_unplayed_round() {
        let dir = tempfile::tempdir().unwrap();
        let round1 = dir.path().join("round1.txt");
        let round2 = dir.path().join("round2.txt");
        let round3 = dir.path().join("round3.txt");
        std::fs::write(&round1, "A - B ; 2 - 1 ; 0 - 0\nC - D ; 1 - 1 ; 0 - 0\n").unwrap();
        std::fs::write(&round2, "A - C ; ? - ? ; ? - ?\nB - D ; ? - ? ; ? - ?\n").unwrap();
        // round3 is malformed but never read
        std::fs::write(&round3, "garbage\n").unwrap();

        let ledger = load_ledger(&[round1.clone(), round2.clone(), round3]).unwrap();
        assert_eq!(ledger.rounds.len(), 1);
        assert_eq!(ledger.rounds[0].source.as_deref(), Some(round1.as_path()));
        let next = ledger.next_round.unwrap();
        assert_eq!(next.path, round2);
        assert_eq!(next.pending.len(), 2);
    }

    #[test]
    fn test_load_ledger_missing_file_is_next_round() {
        let dir = tempfile::tempdir().unwrap();
        let round1 = dir.path().join("round1.txt");
        std::fs::write(&round1, "A - B ; 2 - 1 ; 0 - 0\n").unwrap();
        let round2 = dir.path().join("round2.txt");

        let ledger = load_ledger(&[round1, round2.clone()]).unwrap();
        assert_eq!(ledger.rounds.len(), 1);
        assert_eq!(ledger.next_round.map(|n| n.path), Some(round2));
    }

    #[test]
    fn test_load_ledger_reports_file() {
        let dir = tempfile::tempdir().unwrap();
        let round1 = dir.path().join("round1.txt");
        std::fs::write(&round1, "A - B ; 2 - x ; 0 - 0\n").unwrap();

        let err = load_ledger(&[round1]).unwrap_err();
        assert!(matches!(err, ParseError::InFile { .. }));
        assert!(err.to_string().contains("round1.txt"));
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_ledger_outcomes_in_order() {
        let ledger = Ledger::from_rounds(vec![
            vec![MatchOutcome::new("A", "B"), MatchOutcome::new("C", "D")],
            vec![MatchOutcome::new("A", "C")],
        ]);
        let teams: Vec<(&str, &str)> = ledger
            .outcomes()
            .map(|m| (m.team_a.as_str(), m.team_b.as_str()))
            .collect();
        assert_eq!(teams, vec![("A", "B"), ("C", "D"), ("A", "C")]);
        assert!(!ledger.is_empty());
        assert!(Ledger::default().is_empty());
    }
}
