//! Display formatting for terminal output
//!
//! Turns models and analysis results into plain strings; the CLI decides
//! where they are printed.

pub mod analysis;
pub mod configuration;
pub mod format;
pub mod projection;

pub use analysis::{format_insights, format_metrics};
pub use configuration::{
    format_expense_details, format_expense_list, format_income_details, format_income_list,
    format_scenario_list, format_settings,
};
pub use format::{format_amount, format_percentage, parse_amount, parse_percentage};
pub use projection::{format_breakdown, format_projection_table};
