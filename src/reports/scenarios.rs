//! Scenario comparison report
//!
//! Reruns the forecast under every configured scenario and lays the
//! headline metrics side by side.

use std::io::Write;

use crate::display::format::{format_amount, format_bar, format_percentage, separator};
use crate::engine::ScenarioOutcome;
use crate::error::CashflowResult;
use crate::export::export_scenarios_csv;
use crate::services::ForecastService;
use crate::storage::Storage;

const BAR_WIDTH: usize = 20;

/// Metrics for each scenario, in configuration order
#[derive(Debug, Clone)]
pub struct ScenarioComparisonReport {
    pub outcomes: Vec<ScenarioOutcome>,
    /// Id of the scenario the plain forecast uses
    pub active: Option<String>,
}

impl ScenarioComparisonReport {
    pub fn generate(storage: &Storage) -> CashflowResult<Self> {
        let service = ForecastService::new(storage);
        let active = service
            .configuration()?
            .active_scenario()
            .map(|s| s.id.clone());

        Ok(Self {
            outcomes: service.compare()?,
            active,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        if self.outcomes.is_empty() {
            return "No scenarios configured.".to_string();
        }

        let mut output = String::new();
        output.push_str("Scenario Comparison\n");
        output.push_str(&"=".repeat(90));
        output.push('\n');
        output.push_str(&format!(
            "  {:<14} {:>14} {:>14} {:>14} {:>14} {:>8}  {}\n",
            "Scenario", "Income", "Expenses", "Net Profit", "Low Point", "Margin", "Break-even"
        ));
        output.push_str(&separator(90));
        output.push('\n');

        for outcome in &self.outcomes {
            let metrics = &outcome.metrics;
            let marker = if self.active.as_deref() == Some(outcome.scenario.id.as_str()) {
                '*'
            } else {
                ' '
            };
            let break_even = metrics
                .break_even()
                .map_or_else(|| "never".to_string(), |m| format!("month {}", m));

            output.push_str(&format!(
                "{} {:<14} {:>14} {:>14} {:>14} {:>14} {:>8}  {}\n",
                marker,
                outcome.scenario.name,
                format_amount(metrics.total_income, symbol),
                format_amount(metrics.total_expenses, symbol),
                format_amount(metrics.net_profit, symbol),
                format_amount(metrics.min_balance, symbol),
                format_percentage(metrics.profit_margin),
                break_even,
            ));
        }

        // Net profit bars, scaled to the best outcome
        let best = self
            .outcomes
            .iter()
            .map(|o| o.metrics.net_profit)
            .fold(0.0_f64, f64::max);
        output.push('\n');
        for outcome in &self.outcomes {
            output.push_str(&format!(
                "  {:<14} {} {}\n",
                outcome.scenario.name,
                format_bar(outcome.metrics.net_profit, best, BAR_WIDTH),
                format_amount(outcome.metrics.net_profit, symbol),
            ));
        }

        output
    }

    /// Export the comparison to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> CashflowResult<()> {
        export_scenarios_csv(&self.outcomes, writer)
    }
}
