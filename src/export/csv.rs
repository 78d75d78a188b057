//! CSV export of monthly projections
//!
//! One row per month, amounts rounded to two decimals. Breakdowns are not
//! flattened into CSV; use the JSON or YAML export for those.

use std::io::Write;

use serde::Serialize;

use crate::engine::ScenarioOutcome;
use crate::error::{CashflowError, CashflowResult};
use crate::models::MonthlyProjection;

#[derive(Serialize)]
struct ProjectionRecord<'a> {
    #[serde(rename = "Month")]
    month: u32,
    #[serde(rename = "Month Name")]
    month_name: &'a str,
    #[serde(rename = "Income")]
    income: String,
    #[serde(rename = "Expenses")]
    expenses: String,
    #[serde(rename = "Net Flow")]
    net_flow: String,
    #[serde(rename = "Cumulative Balance")]
    cumulative_balance: String,
}

#[derive(Serialize)]
struct ScenarioRecord<'a> {
    #[serde(rename = "Scenario")]
    scenario: &'a str,
    #[serde(rename = "Multiplier")]
    multiplier: f64,
    #[serde(rename = "Total Income")]
    total_income: String,
    #[serde(rename = "Total Expenses")]
    total_expenses: String,
    #[serde(rename = "Net Profit")]
    net_profit: String,
    #[serde(rename = "Min Balance")]
    min_balance: String,
    #[serde(rename = "Profit Margin")]
    profit_margin: String,
    #[serde(rename = "Break Even Month")]
    break_even_month: u32,
}

fn money(value: f64) -> String {
    format!("{:.2}", value)
}

fn export_error(e: impl std::fmt::Display) -> CashflowError {
    CashflowError::Export(e.to_string())
}

/// Write the monthly projections as CSV with a header row
pub fn export_projections_csv<W: Write>(
    projections: &[MonthlyProjection],
    writer: W,
) -> CashflowResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for projection in projections {
        csv_writer
            .serialize(ProjectionRecord {
                month: projection.month,
                month_name: &projection.month_name,
                income: money(projection.income),
                expenses: money(projection.expenses),
                net_flow: money(projection.net_flow),
                cumulative_balance: money(projection.cumulative_balance),
            })
            .map_err(export_error)?;
    }

    csv_writer.flush().map_err(export_error)?;
    Ok(())
}

/// Write one row of metrics per scenario
pub fn export_scenarios_csv<W: Write>(
    outcomes: &[ScenarioOutcome],
    writer: W,
) -> CashflowResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for outcome in outcomes {
        let metrics = &outcome.metrics;
        csv_writer
            .serialize(ScenarioRecord {
                scenario: &outcome.scenario.name,
                multiplier: outcome.scenario.multiplier,
                total_income: money(metrics.total_income),
                total_expenses: money(metrics.total_expenses),
                net_profit: money(metrics.net_profit),
                min_balance: money(metrics.min_balance),
                profit_margin: money(metrics.profit_margin),
                break_even_month: metrics.break_even_month,
            })
            .map_err(export_error)?;
    }

    csv_writer.flush().map_err(export_error)?;
    Ok(())
}
