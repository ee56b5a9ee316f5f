use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use tracing::debug;
use wealth_cli::{
    app,
    config::{ConfigOverrides, FileConfig},
    logging,
};
use wealth_core::calculations::common::current_calendar_year;
use wealth_core::{InMemoryRecordStore, OverrideMap, ProjectionEngine};
use wealth_data::{IntervalCsvLoader, OverrideCsvLoader};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Projects a prospect's year-by-year income, taxes and accumulated wealth
/// from their employment history.
#[derive(Debug, Parser)]
#[command(name = "wealth-projector", version, about, long_about = None)]
struct Cli {
    /// CSV of employment intervals
    /// (`company,position,start_year,end_year,annual_gross_income`).
    #[arg(long)]
    intervals: PathBuf,

    /// CSV of per-year overrides
    /// (`year,gross_income,income_tax,social_contributions,deductions`).
    #[arg(long)]
    overrides: Option<PathBuf>,

    /// Jurisdiction code: US, UK, CA, AU, DE, FR, CH, SG, HK or JP.
    #[arg(long)]
    jurisdiction: Option<String>,

    /// Fraction of net income assumed saved each year, e.g. `0.2`.
    #[arg(long)]
    savings_rate: Option<Decimal>,

    /// Year that ongoing roles run to. Defaults to the current year.
    #[arg(long)]
    as_of: Option<i32>,

    /// TOML config file. `wealth-projector.toml` is used when present.
    #[arg(long)]
    config: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = FileConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .resolve(&ConfigOverrides {
            jurisdiction: cli.jurisdiction,
            savings_rate: cli.savings_rate,
            ..Default::default()
        })?;

    logging::init(&settings.log_level, settings.log_file.as_deref())?;
    debug!(?settings, "resolved settings");

    let evaluation_year = cli.as_of.unwrap_or_else(current_calendar_year);

    let intervals = IntervalCsvLoader::load_from_file(&cli.intervals, evaluation_year)
        .with_context(|| format!("Failed to load intervals: {}", cli.intervals.display()))?;

    let overrides = match &cli.overrides {
        Some(path) => OverrideCsvLoader::load_from_file(path)
            .with_context(|| format!("Failed to load overrides: {}", path.display()))?,
        None => OverrideMap::new(),
    };

    let store = InMemoryRecordStore::with_evaluation_year(evaluation_year);
    app::register_intervals(&store, intervals)
        .await
        .context("Failed to register intervals")?;

    let engine = ProjectionEngine::new(settings.jurisdiction).as_of(evaluation_year);
    let report = app::build_report(&store, engine, &overrides, settings.savings_rate).await?;

    println!("{report}");
    Ok(())
}
