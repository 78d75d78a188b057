//! Export module for cashflow-cli
//!
//! - CSV: monthly projection rows and scenario comparisons
//! - JSON: configuration plus full analysis, machine-readable
//! - YAML: the same document, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_projections_csv, export_scenarios_csv};
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml};
