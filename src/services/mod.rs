//! Service layer for cashflow-cli
//!
//! The service layer sits on top of the storage layer: it applies validated
//! configuration mutations, persists them and runs the forecast.

pub mod expense;
pub mod forecast;
pub mod income;

pub use expense::ExpenseService;
pub use forecast::ForecastService;
pub use income::IncomeService;
