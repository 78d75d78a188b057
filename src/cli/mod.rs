//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod export;
pub mod forecast;
pub mod income;
pub mod scenario;
pub mod settings;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::handle_export_command;
pub use forecast::{handle_compare, handle_forecast, handle_insights, handle_metrics};
pub use income::{handle_income_command, IncomeCommands};
pub use scenario::{handle_scenario_command, ScenarioCommands};
pub use settings::{handle_settings_command, SettingsCommands};

use crate::display::{parse_amount, parse_percentage};
use crate::error::{CashflowError, CashflowResult};

pub(crate) fn parse_amount_arg(input: &str) -> CashflowResult<f64> {
    parse_amount(input).map_err(CashflowError::Validation)
}

pub(crate) fn parse_growth_arg(input: &str) -> CashflowResult<f64> {
    parse_percentage(input).map_err(CashflowError::Validation)
}

/// Parse a comma-separated seasonal curve; length is checked by validation
pub(crate) fn parse_curve_arg(input: &str) -> CashflowResult<Vec<f64>> {
    input
        .split(',')
        .map(|part| {
            part.trim().parse::<f64>().map_err(|_| {
                CashflowError::Validation(format!("Invalid seasonal multiplier: {}", part.trim()))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_curve_arg() {
        let curve = parse_curve_arg("0.6, 0.7,1,1.2").unwrap();
        assert_eq!(curve, vec![0.6, 0.7, 1.0, 1.2]);
        assert!(parse_curve_arg("1,x").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_amount_arg() {
        assert_eq!(parse_amount_arg("£1,200").unwrap(), 1200.0);
        assert!(parse_amount_arg("").unwrap_err().is_validation());
    }
}
