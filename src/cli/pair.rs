//! Pair command - rank the teams and write the next round's pairings.

use std::path::PathBuf;

use anyhow::bail;
use clap::Args;
use tracing::warn;

use crate::cli::standings::print_text_standings;
use crate::cli::{load_inputs, OutputFormat, TournamentArgs};
use crate::export::round::{format_pending_line, write_pending_round};
use crate::export::table::export_standings;
use crate::pairing::{PairingConfig, PairingEngine, PairingMethod, RoundPairings};

/// Arguments for the pair command
#[derive(Args)]
pub struct PairArgs {
    #[command(flatten)]
    pub tournament: TournamentArgs,

    /// Maximum number of partitions the fallback search enumerates [default: 100000]
    #[arg(long)]
    pub enumeration_cap: Option<usize>,

    /// Write the pairings here instead of the first unplayed round file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the pairings without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Also print the standings used for pairing (text format only)
    #[arg(long)]
    pub show_standings: bool,
}

/// Execute the pair command
///
/// # Errors
///
/// Returns an error if inputs cannot be read, no legal pairing exists, or the
/// round file cannot be written.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: PairArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let inputs = load_inputs(&args.tournament, args.enumeration_cap)?;

    let destination = match (&args.output, &inputs.ledger.next_round) {
        (Some(path), _) => Some(path.clone()),
        (None, Some(next)) => Some(next.path.clone()),
        (None, None) if args.dry_run => None,
        (None, None) => bail!(
            "Every round file given is already played; add a file for the next round or use --output"
        ),
    };

    if let Some(next) = &inputs.ledger.next_round {
        if !next.pending.is_empty() && !args.dry_run && args.output.is_none() {
            warn!(
                "Replacing {} pending pairings in {}",
                next.pending.len(),
                next.path.display()
            );
        }
    }

    let report =
        crate::ranking::compute_standings(&inputs.roster, &inputs.ledger, &inputs.config)?;

    if let Some(path) = &args.tournament.export {
        export_standings(path, &report.standings)?;
    }

    let engine = PairingEngine::new(
        &report.standings,
        PairingConfig {
            enumeration_cap: inputs.config.enumeration_cap,
        },
    )?;
    let round = engine.pair()?;

    let written = match &destination {
        Some(path) if !args.dry_run => {
            write_pending_round(path, &round.pairings)?;
            if verbose {
                eprintln!("Pairings written to {}", path.display());
            }
            Some(path.clone())
        }
        _ => None,
    };

    let round_number = report.rounds_played + 1;
    match format {
        OutputFormat::Text => {
            if args.show_standings {
                print_text_standings(&report);
                println!();
            }
            print_text_pairings(round_number, &round, written.as_ref());
        }
        OutputFormat::Json => print_json_pairings(round_number, &round, written.as_ref())?,
        OutputFormat::Tsv => print_tsv_pairings(&round),
    }

    Ok(())
}

fn print_text_pairings(round_number: usize, round: &RoundPairings, written: Option<&PathBuf>) {
    println!("Pairings for round {round_number}");
    println!("{}", "=".repeat(60));
    for (i, pairing) in round.pairings.iter().enumerate() {
        println!("{:>3}. {}", i + 1, pairing);
    }

    println!();
    match &round.method {
        PairingMethod::Greedy => println!("Method: greedy"),
        PairingMethod::Exhaustive {
            stuck_team,
            partitions_searched,
            cap_reached,
        } => {
            println!("Method: exhaustive search (greedy stuck at {stuck_team})");
            println!(
                "  Partitions searched: {partitions_searched}{}",
                if *cap_reached { " (cap reached)" } else { "" }
            );
        }
    }
    println!("Rank distance: {}", round.cost);

    if let Some(path) = written {
        println!("Saved to {}", path.display());
    }
}

fn print_json_pairings(
    round_number: usize,
    round: &RoundPairings,
    written: Option<&PathBuf>,
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "round": round_number,
        "pairings": round.pairings,
        "method": round.method,
        "cost": round.cost,
        "lines": round.pairings.iter().map(format_pending_line).collect::<Vec<_>>(),
        "output": written.map(|p| p.display().to_string()),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_pairings(round: &RoundPairings) {
    println!("home\taway");
    for pairing in &round.pairings {
        println!("{}\t{}", pairing.home, pairing.away);
    }
}
