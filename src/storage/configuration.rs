//! Configuration repository
//!
//! Holds the loaded planning file in memory and persists it to JSON.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::CashflowError;
use crate::models::CashFlowConfiguration;

use super::file_io::{read_json, write_json_atomic};

/// Repository for the cash-flow configuration
pub struct ConfigurationRepository {
    path: PathBuf,
    configuration: RwLock<CashFlowConfiguration>,
}

impl ConfigurationRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            configuration: RwLock::new(CashFlowConfiguration::default()),
        }
    }

    fn read_guard(&self) -> Result<RwLockReadGuard<'_, CashFlowConfiguration>, CashflowError> {
        self.configuration
            .read()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_guard(&self) -> Result<RwLockWriteGuard<'_, CashFlowConfiguration>, CashflowError> {
        self.configuration
            .write()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load the configuration from disk; a missing file yields defaults
    ///
    /// A file that parses but breaks a validation rule is rejected, so a
    /// hand-edited plan never reaches the engine.
    pub fn load(&self) -> Result<(), CashflowError> {
        let loaded: CashFlowConfiguration = read_json(&self.path)?;
        loaded.validate_all().map_err(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "Rejected planning file");
            CashflowError::Storage(format!(
                "Invalid planning file {}: {}",
                self.path.display(),
                e
            ))
        })?;
        tracing::debug!(
            incomes = loaded.income_streams.len(),
            expenses = loaded.expense_categories.len(),
            "Loaded configuration"
        );
        *self.write_guard()? = loaded;
        Ok(())
    }

    /// Save the configuration to disk
    pub fn save(&self) -> Result<(), CashflowError> {
        let configuration = self.read_guard()?;
        write_json_atomic(&self.path, &*configuration)
    }

    /// Snapshot of the current configuration
    pub fn get(&self) -> Result<CashFlowConfiguration, CashflowError> {
        let configuration = self.read_guard()?;
        Ok((*configuration).clone())
    }

    /// Replace the configuration wholesale
    pub fn replace(&self, configuration: CashFlowConfiguration) -> Result<(), CashflowError> {
        *self.write_guard()? = configuration;
        Ok(())
    }

    /// Apply a fallible mutation in place
    ///
    /// The closure works on a copy, so the stored configuration only changes
    /// when it returns `Ok`.
    pub fn update<T, F>(&self, mutate: F) -> Result<T, CashflowError>
    where
        F: FnOnce(&mut CashFlowConfiguration) -> Result<T, CashflowError>,
    {
        let mut guard = self.write_guard()?;
        let mut working = (*guard).clone();
        let result = mutate(&mut working)?;
        *guard = working;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IncomeFrequency, IncomeStream};
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ConfigurationRepository::new(temp_dir.path().join("cashflow.json"));
        repo.load().unwrap();
        assert_eq!(repo.get().unwrap(), CashFlowConfiguration::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cashflow.json");

        {
            let repo = ConfigurationRepository::new(path.clone());
            repo.replace(CashFlowConfiguration::sample()).unwrap();
            repo.save().unwrap();
        }

        let repo = ConfigurationRepository::new(path);
        repo.load().unwrap();
        let loaded = repo.get().unwrap();
        assert_eq!(loaded.income_streams.len(), 3);
        assert_eq!(loaded.expense_categories.len(), 6);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cashflow.json");
        std::fs::write(
            &path,
            r#"{
                "vatQuarter": 1,
                "scenarios": [
                    {"id": "realistic", "name": "Realistic", "multiplier": -2.0}
                ],
                "incomeStreams": []
            }"#,
        )
        .unwrap();

        let repo = ConfigurationRepository::new(path.clone());
        let err = repo.load().unwrap_err();
        assert!(err.to_string().contains("Invalid planning file"));
        assert!(err.to_string().contains("positive multiplier"));
        assert_eq!(repo.get().unwrap(), CashFlowConfiguration::default());

        std::fs::write(&path, r#"{"vatQuarter": 0}"#).unwrap();
        assert!(repo.load().is_err());

        std::fs::write(
            &path,
            r#"{"expenseCategories": [{
                "id": "5f0c3a52-3f4e-4b8e-9a51-0d6b7c9e2a11",
                "name": "Insurance",
                "amount": 900.0,
                "frequency": "quarterly",
                "timing": 13
            }]}"#,
        )
        .unwrap();
        assert!(repo.load().is_err());
    }

    #[test]
    fn test_failed_update_leaves_configuration() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ConfigurationRepository::new(temp_dir.path().join("cashflow.json"));

        let result: Result<(), _> = repo.update(|config| {
            config.starting_balance = -1.0;
            Err(CashflowError::Validation("nope".into()))
        });
        assert!(result.is_err());
        assert_eq!(repo.get().unwrap().starting_balance, 5000.0);

        let id = repo
            .update(|config| {
                config.add_income_stream(IncomeStream::new(
                    "Jobs",
                    100.0,
                    IncomeFrequency::Monthly,
                ))
            })
            .unwrap();
        assert_eq!(repo.get().unwrap().income_streams[0].id, id);
    }
}
