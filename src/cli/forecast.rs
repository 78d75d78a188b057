//! Forecast CLI commands
//!
//! The forecast itself plus its individual views and the scenario
//! comparison.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::config::settings::Settings;
use crate::display::{format_insights, format_metrics};
use crate::error::CashflowResult;
use crate::reports::{CashFlowReport, ScenarioComparisonReport};
use crate::services::ForecastService;
use crate::storage::Storage;

fn create_output(path: &Path) -> CashflowResult<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}

/// Print the twelve-month forecast, optionally saving the rows as CSV
pub fn handle_forecast(
    storage: &Storage,
    settings: &Settings,
    scenario: Option<&str>,
    output: Option<PathBuf>,
    breakdown: bool,
) -> CashflowResult<()> {
    let report = CashFlowReport::generate(storage, scenario)?;

    if let Some(path) = output {
        let mut writer = create_output(&path)?;
        report.export_csv(&mut writer)?;
        println!("Forecast written to {}", path.display());
        return Ok(());
    }

    print!(
        "{}",
        report.format_terminal(&settings.currency_symbol, breakdown)
    );
    Ok(())
}

pub fn handle_insights(storage: &Storage, scenario: Option<&str>) -> CashflowResult<()> {
    let analysis = ForecastService::new(storage).analyze(scenario)?;
    print!("{}", format_insights(&analysis.insights));
    Ok(())
}

pub fn handle_metrics(
    storage: &Storage,
    settings: &Settings,
    scenario: Option<&str>,
) -> CashflowResult<()> {
    let analysis = ForecastService::new(storage).analyze(scenario)?;
    print!(
        "{}",
        format_metrics(&analysis.metrics, &settings.currency_symbol)
    );
    Ok(())
}

/// Compare every configured scenario side by side
pub fn handle_compare(
    storage: &Storage,
    settings: &Settings,
    output: Option<PathBuf>,
) -> CashflowResult<()> {
    let report = ScenarioComparisonReport::generate(storage)?;

    if let Some(path) = output {
        let mut writer = create_output(&path)?;
        report.export_csv(&mut writer)?;
        println!("Comparison written to {}", path.display());
        return Ok(());
    }

    print!("{}", report.format_terminal(&settings.currency_symbol));
    Ok(())
}
