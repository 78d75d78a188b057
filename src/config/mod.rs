//! Configuration module for cashflow-cli
//!
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::CashflowPaths;
pub use settings::{ExportFormat, Settings};
