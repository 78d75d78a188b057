//! User settings for cashflow-cli
//!
//! Presentation preferences only. Forecast inputs such as the starting
//! balance live in the planning file, not here.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::paths::CashflowPaths;
use crate::error::CashflowError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// Export format preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!("Unknown export format: {}", other)),
        }
    }
}

/// User settings for cashflow-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol prefixed to amounts in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Format used by `export` when none is given
    #[serde(default)]
    pub default_export_format: ExportFormat,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "£".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_export_format: ExportFormat::default(),
        }
    }
}

impl Settings {
    /// Load preferences, or defaults when `config.json` does not exist yet
    ///
    /// Defaults are not written back; `init` and `settings set` persist them.
    pub fn load_or_create(paths: &CashflowPaths) -> Result<Self, CashflowError> {
        read_json(paths.settings_file()).map_err(|e| {
            CashflowError::Config(format!("Failed to load settings: {}", e))
        })
    }

    pub fn save(&self, paths: &CashflowPaths) -> Result<(), CashflowError> {
        write_json_atomic(paths.settings_file(), self)?;
        tracing::debug!(path = %paths.settings_file().display(), "Saved settings");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.currency_symbol, "£");
        assert_eq!(settings.default_export_format, ExportFormat::Csv);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashflowPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "€".into();
        settings.default_export_format = ExportFormat::Yaml;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.default_export_format, ExportFormat::Yaml);
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashflowPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, CashflowError::Config(_)));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.currency_symbol, "£");
    }

    #[test]
    fn test_export_format_parse() {
        assert_eq!("YML".parse::<ExportFormat>(), Ok(ExportFormat::Yaml));
        assert!("pdf".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::Json.extension(), "json");
    }
}
