//! Core data models for cashflow-cli
//!
//! This module contains the data structures of a cash-flow forecast: income
//! streams, expense categories, scenarios, the root configuration and the
//! derived monthly projection records.

pub mod configuration;
pub mod expense;
pub mod ids;
pub mod income;
pub mod projection;
pub mod scenario;

pub use configuration::{CashFlowConfiguration, ConfigurationValidationError, SettingsUpdate};
pub use expense::{ExpenseCategory, ExpenseCategoryUpdate, ExpenseFrequency, ExpenseValidationError};
pub use ids::{ExpenseCategoryId, IncomeStreamId};
pub use income::{IncomeFrequency, IncomeStream, IncomeStreamUpdate, IncomeValidationError};
pub use projection::{month_name, MonthlyProjection, PROJECTION_MONTHS, VAT_PAYMENT};
pub use scenario::Scenario;
