//! JSON export
//!
//! A full export bundles the planning file with the analysis derived from
//! it, so the projections can be consumed without re-running the engine.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::engine::{CashFlowAnalysis, FinancialMetrics, Insight};
use crate::error::{CashflowError, CashflowResult};
use crate::models::{CashFlowConfiguration, MonthlyProjection};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Configuration plus derived analysis
#[derive(Debug, Clone, Serialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub configuration: CashFlowConfiguration,

    pub projections: Vec<MonthlyProjection>,

    pub insights: Vec<Insight>,

    pub metrics: FinancialMetrics,
}

impl FullExport {
    /// Run the analysis for a configuration and bundle the results
    pub fn from_configuration(configuration: CashFlowConfiguration) -> Self {
        let analysis = CashFlowAnalysis::run(&configuration);

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            configuration,
            projections: analysis.projections,
            insights: analysis.insights,
            metrics: analysis.metrics,
        }
    }
}

/// Write a full export as JSON
pub fn export_full_json<W: Write>(
    export: &FullExport,
    writer: &mut W,
    pretty: bool,
) -> CashflowResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, export)
    } else {
        serde_json::to_writer(writer, export)
    }
    .map_err(|e| CashflowError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_export_contents() {
        let export = FullExport::from_configuration(CashFlowConfiguration::sample());
        let mut buffer = Vec::new();
        export_full_json(&export, &mut buffer, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["projections"].as_array().unwrap().len(), 12);
        assert_eq!(
            value["configuration"]["selectedScenario"],
            serde_json::json!("realistic")
        );
        assert!(value["metrics"]["netProfit"].is_number());
        assert!(value["insights"][0]["type"].is_string());
    }
}
