//! cashflow - twelve-month cash-flow forecasting
//!
//! This library turns a small business's recurring income streams and
//! expense categories into a month-by-month projection of income, outflow,
//! VAT and bank balance, then derives warnings and summary metrics from it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management and user preferences
//! - `error`: Custom error types
//! - `models`: The planning configuration and projection records
//! - `engine`: Pure projection, insight and metric calculators
//! - `storage`: JSON file storage of the planning file
//! - `services`: Validated mutations and analysis on top of storage
//! - `display`, `reports`, `export`: Terminal and file output
//! - `cli`: Command handlers for the `cashflow` binary
//!
//! # Example
//!
//! ```rust
//! use cashflow::engine::CashFlowAnalysis;
//! use cashflow::models::{CashFlowConfiguration, IncomeFrequency, IncomeStream};
//!
//! let mut config = CashFlowConfiguration::default();
//! config
//!     .add_income_stream(IncomeStream::new("Callouts", 800.0, IncomeFrequency::Monthly))
//!     .unwrap();
//!
//! let analysis = CashFlowAnalysis::run(&config);
//! assert_eq!(analysis.projections.len(), 12);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{CashflowError, CashflowResult};
