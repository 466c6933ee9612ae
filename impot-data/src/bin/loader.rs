use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use impot_data::loader::BracketTableLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Validate a bracket-table CSV file.
///
/// The CSV file should have the following columns:
/// - jurisdiction: table key (e.g. federal, quebec, montreal)
/// - tax_year: the year the table applies to (e.g. 2026)
/// - lower_bound: inclusive lower edge of the bracket
/// - upper_bound: exclusive upper edge (empty for the unbounded top tier)
/// - rate: the marginal rate as a decimal (e.g. 0.15)
#[derive(Parser, Debug)]
#[command(name = "impot-data-loader")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing bracket data
    #[arg(short, long)]
    file: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;

    let records = BracketTableLoader::parse(file)
        .with_context(|| format!("Failed to parse CSV: {}", args.file.display()))?;

    info!(records = records.len(), "parsed bracket records");

    let tables = BracketTableLoader::build_tables(&records)
        .context("Bracket table validation failed")?;

    for ((jurisdiction, tax_year), table) in &tables {
        info!(
            %jurisdiction,
            tax_year,
            brackets = table.len(),
            "validated bracket table"
        );
    }

    println!(
        "{} bracket table(s) valid in {}",
        tables.len(),
        args.file.display()
    );

    Ok(())
}
