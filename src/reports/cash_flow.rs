//! Cash-flow report
//!
//! The twelve-month forecast with its insights and metrics, for one
//! scenario.

use std::io::Write;

use crate::display::{
    format_amount, format_breakdown, format_insights, format_metrics, format_projection_table,
};
use crate::engine::CashFlowAnalysis;
use crate::error::CashflowResult;
use crate::export::export_projections_csv;
use crate::models::Scenario;
use crate::services::ForecastService;
use crate::storage::Storage;

/// Cash-flow forecast report
#[derive(Debug, Clone)]
pub struct CashFlowReport {
    /// Scenario the forecast ran under, if any is configured
    pub scenario: Option<Scenario>,
    pub starting_balance: f64,
    pub analysis: CashFlowAnalysis,
}

impl CashFlowReport {
    /// Generate the report, optionally under a scenario other than the
    /// selected one
    pub fn generate(storage: &Storage, scenario: Option<&str>) -> CashflowResult<Self> {
        let service = ForecastService::new(storage);
        let analysis = service.analyze(scenario)?;

        let config = service.configuration()?;
        let scenario = match scenario {
            Some(id) => config.find_scenario(id).cloned(),
            None => config.active_scenario().cloned(),
        };

        Ok(Self {
            scenario,
            starting_balance: config.starting_balance,
            analysis,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str, breakdown: bool) -> String {
        let mut output = String::new();

        let scenario = self
            .scenario
            .as_ref()
            .map_or_else(|| "none".to_string(), |s| s.to_string());
        output.push_str(&format!("Cash-Flow Forecast: {}\n", scenario));
        output.push_str(&"=".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "Starting balance: {}\n\n",
            format_amount(self.starting_balance, symbol)
        ));

        output.push_str(&format_projection_table(&self.analysis.projections, symbol));
        output.push_str("\n\n");

        if breakdown {
            output.push_str(&format_breakdown(&self.analysis.projections, symbol));
            output.push('\n');
        }

        output.push_str("Insights\n");
        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format_insights(&self.analysis.insights));
        output.push('\n');

        output.push_str(&format_metrics(&self.analysis.metrics, symbol));
        output
    }

    /// Export the monthly rows to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> CashflowResult<()> {
        export_projections_csv(&self.analysis.projections, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CashflowPaths;
    use crate::models::CashFlowConfiguration;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashflowPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        storage
            .configuration
            .replace(CashFlowConfiguration::sample())
            .unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_generate_selected_scenario() {
        let (_temp_dir, storage) = create_test_storage();
        let report = CashFlowReport::generate(&storage, None).unwrap();

        assert_eq!(report.scenario.as_ref().unwrap().id, "realistic");
        assert_eq!(report.analysis.projections.len(), 12);
        assert_eq!(report.starting_balance, 5000.0);
    }

    #[test]
    fn test_generate_override() {
        let (_temp_dir, storage) = create_test_storage();
        let report = CashFlowReport::generate(&storage, Some("pessimistic")).unwrap();
        assert_eq!(report.scenario.unwrap().id, "pessimistic");

        assert!(CashFlowReport::generate(&storage, Some("boom"))
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_format_terminal() {
        let (_temp_dir, storage) = create_test_storage();
        let report = CashFlowReport::generate(&storage, None).unwrap();

        let output = report.format_terminal("£", false);
        assert!(output.contains("Cash-Flow Forecast: Realistic (x1.00)"));
        assert!(output.contains("Starting balance: £5,000.00"));
        assert!(output.contains("Financial Metrics"));
        assert!(!output.contains("+ Domestic Rewires"));

        let detailed = report.format_terminal("£", true);
        assert!(detailed.contains("+ Domestic Rewires"));
    }

    #[test]
    fn test_export_csv() {
        let (_temp_dir, storage) = create_test_storage();
        let report = CashFlowReport::generate(&storage, None).unwrap();

        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().lines().count(), 13);
    }
}
