//! Standings command - rank the teams after the rounds played so far.

use clap::Args;

use crate::cli::{load_inputs, OutputFormat, TournamentArgs};
use crate::export::table::{export_standings, rows, write_delimited};
use crate::ranking::{compute_standings, StandingsReport};

/// Arguments for the standings command
#[derive(Args)]
pub struct StandingsArgs {
    #[command(flatten)]
    pub tournament: TournamentArgs,
}

/// Execute the standings command
///
/// # Errors
///
/// Returns an error if inputs cannot be read or the ledger is inconsistent.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: StandingsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let inputs = load_inputs(&args.tournament, None)?;

    if verbose {
        eprintln!(
            "Roster: {} teams, {} rounds played",
            inputs.roster.len(),
            inputs.ledger.rounds.len()
        );
    }

    let report = compute_standings(&inputs.roster, &inputs.ledger, &inputs.config)?;

    if let Some(path) = &args.tournament.export {
        export_standings(path, &report.standings)?;
        if verbose {
            eprintln!("Standings written to {}", path.display());
        }
    }

    match format {
        OutputFormat::Text => print_text_standings(&report),
        OutputFormat::Json => print_json_standings(&report)?,
        OutputFormat::Tsv => write_delimited(&mut std::io::stdout().lock(), &report.standings, '\t')?,
    }

    Ok(())
}

/// Print the ranked table for humans
pub fn print_text_standings(report: &StandingsReport) {
    println!(
        "Standings after {} round{}",
        report.rounds_played,
        if report.rounds_played == 1 { "" } else { "s" }
    );
    println!("{}", "=".repeat(60));

    let width = report
        .standings
        .iter()
        .map(|team| team.name().len())
        .max()
        .unwrap_or(4)
        .max(4);

    println!(
        "{:>3}  {:<width$}  {:>3}  {:>8}  {:>5}  {:>2}  {:>5}  {:>6}  Last",
        "#", "Team", "Pts", "Buchholz", "Fouls", "TB", "W-D-L", "For-Ag"
    );
    for row in rows(&report.standings) {
        let marker = if report.disqualified.contains(&row.team) {
            "  (disqualified)"
        } else {
            ""
        };
        let last = match (&row.last_result, &row.last_opponent) {
            (Some(result), Some(opponent)) => format!("{result} vs {opponent}"),
            _ => "-".to_string(),
        };
        println!(
            "{:>3}  {:<width$}  {:>3}  {:>8.3}  {:>5}  {:>2}  {:>5}  {:>6}  {last}{marker}",
            row.position,
            row.team,
            row.points,
            row.buchholz,
            row.fouls,
            row.tb,
            format!("{}-{}-{}", row.wins, row.draws, row.losses),
            format!("{}-{}", row.points_for, row.points_against),
        );
    }
}

fn print_json_standings(report: &StandingsReport) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "rounds_played": report.rounds_played,
        "disqualified": report.disqualified,
        "standings": rows(&report.standings),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
