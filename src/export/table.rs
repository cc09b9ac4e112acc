use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::core::standings::Standings;
use crate::core::types::Outcome;
use crate::export::{write_atomically, ExportError};

/// Column headers of the delimited standings export
pub const EXPORT_COLUMNS: [&str; 10] = [
    "team",
    "points",
    "Buchholz",
    "fouls",
    "TB",
    "wins",
    "draws",
    "losses",
    "points_for",
    "points_against",
];

/// Output format for the standings export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Tsv,
    Csv,
    Json,
}

impl ExportFormat {
    /// Pick a format from the file extension; TSV when unknown
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match ext.as_deref() {
            Some("csv") => Self::Csv,
            Some("json") => Self::Json,
            _ => Self::Tsv,
        }
    }
}

/// One row of the standings export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingsRow {
    pub position: usize,
    pub team: String,
    pub points: u32,
    pub buchholz: f64,
    pub fouls: u32,
    pub tb: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub points_for: u32,
    pub points_against: u32,
    pub last_opponent: Option<String>,
    pub last_result: Option<Outcome>,
}

/// Rows in ranked order, positions starting at 1
#[must_use]
pub fn rows(standings: &Standings) -> Vec<StandingsRow> {
    standings
        .iter()
        .enumerate()
        .map(|(i, team)| StandingsRow {
            position: i + 1,
            team: team.name().to_string(),
            points: team.points,
            buchholz: team.buchholz,
            fouls: team.fouls(),
            tb: team.tb,
            wins: team.record.wins,
            draws: team.record.draws,
            losses: team.record.losses,
            points_for: team.record.points_for,
            points_against: team.record.points_against,
            last_opponent: team.record.last_opponent().map(str::to_string),
            last_result: team.record.last_result(),
        })
        .collect()
}

/// Write the delimited export: header line, then one line per team
///
/// # Errors
///
/// Returns an I/O error if writing fails.
pub fn write_delimited<W: Write>(
    writer: &mut W,
    standings: &Standings,
    delimiter: char,
) -> std::io::Result<()> {
    writeln!(writer, "{}", EXPORT_COLUMNS.join(&delimiter.to_string()))?;
    for row in rows(standings) {
        let fields = [
            escape_field(&row.team, delimiter),
            row.points.to_string(),
            format!("{:.4}", row.buchholz),
            row.fouls.to_string(),
            row.tb.to_string(),
            row.wins.to_string(),
            row.draws.to_string(),
            row.losses.to_string(),
            row.points_for.to_string(),
            row.points_against.to_string(),
        ];
        writeln!(writer, "{}", fields.join(&delimiter.to_string()))?;
    }
    Ok(())
}

/// Standings rows as pretty-printed JSON
///
/// # Errors
///
/// Returns a serialization error if the rows cannot be encoded.
pub fn to_json(standings: &Standings) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&rows(standings))
}

/// Render the export in the given format
///
/// # Errors
///
/// Returns `ExportError` if rendering fails.
pub fn render(standings: &Standings, format: ExportFormat) -> Result<String, ExportError> {
    let text = match format {
        ExportFormat::Json => to_json(standings)? + "\n",
        ExportFormat::Tsv | ExportFormat::Csv => {
            let delimiter = if format == ExportFormat::Csv { ',' } else { '\t' };
            let mut buffer = Vec::new();
            write_delimited(&mut buffer, standings, delimiter)?;
            String::from_utf8_lossy(&buffer).into_owned()
        }
    };
    Ok(text)
}

/// Write the standings export to `path`, format chosen by extension
///
/// # Errors
///
/// Returns `ExportError` if rendering or writing fails.
pub fn export_standings(path: &Path, standings: &Standings) -> Result<(), ExportError> {
    let text = render(standings, ExportFormat::from_path(path))?;
    write_atomically(path, text.as_bytes())
}

/// Quote a field that contains the delimiter or a quote
fn escape_field(value: &str, delimiter: char) -> String {
    if value.contains(delimiter) || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
