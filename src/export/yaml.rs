//! YAML export
//!
//! The same document as the JSON export, preceded by a comment header.

use std::io::Write;

use crate::error::{CashflowError, CashflowResult};
use crate::export::json::FullExport;

fn export_error(e: impl std::fmt::Display) -> CashflowError {
    CashflowError::Export(e.to_string())
}

/// Write a full export as YAML
pub fn export_full_yaml<W: Write>(export: &FullExport, writer: &mut W) -> CashflowResult<()> {
    writeln!(writer, "# cashflow-cli forecast export").map_err(export_error)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_error)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_error)?;
    let scenario = export
        .configuration
        .active_scenario()
        .map_or_else(|| "none".to_string(), |s| s.to_string());
    writeln!(writer, "# Scenario: {}", scenario).map_err(export_error)?;
    writeln!(writer).map_err(export_error)?;

    serde_yaml::to_writer(writer, export).map_err(export_error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CashFlowConfiguration;

    #[test]
    fn test_yaml_export() {
        let export = FullExport::from_configuration(CashFlowConfiguration::sample());
        let mut buffer = Vec::new();
        export_full_yaml(&export, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("# cashflow-cli forecast export"));
        assert!(output.contains("# Scenario: Realistic (x1.00)"));
        assert!(output.contains("schema_version:"));
        assert!(output.contains("incomeStreams:"));
        assert!(output.contains("VAT Payment"));
    }
}
