//! Reports module for cashflow-cli
//!
//! The single-scenario cash-flow forecast and the side-by-side scenario
//! comparison, each with terminal and CSV output.

pub mod cash_flow;
pub mod scenarios;

pub use cash_flow::CashFlowReport;
pub use scenarios::ScenarioComparisonReport;
