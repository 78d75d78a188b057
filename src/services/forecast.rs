//! Forecast service
//!
//! Scalar settings of the planning file and on-demand analysis. The
//! analysis is recomputed from the stored configuration on every call.

use crate::engine::{compare_scenarios, CashFlowAnalysis, ScenarioOutcome};
use crate::error::{CashflowError, CashflowResult};
use crate::models::{CashFlowConfiguration, SettingsUpdate};
use crate::storage::Storage;

/// Service for forecast settings and analysis
pub struct ForecastService<'a> {
    storage: &'a Storage,
}

impl<'a> ForecastService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Current configuration snapshot
    pub fn configuration(&self) -> CashflowResult<CashFlowConfiguration> {
        self.storage.configuration.get()
    }

    /// Update starting balance, scenario, emergency fund target or VAT
    /// quarter, then save
    pub fn update_settings(&self, update: SettingsUpdate) -> CashflowResult<CashFlowConfiguration> {
        if update.is_empty() {
            return Err(CashflowError::Validation(
                "No settings given to update".into(),
            ));
        }

        let updated = self.storage.configuration.update(|config| {
            config.update_settings(update)?;
            Ok(config.clone())
        })?;
        self.storage.configuration.save()?;

        tracing::info!(
            starting_balance = updated.starting_balance,
            scenario = %updated.selected_scenario,
            emergency_fund_target = updated.emergency_fund_target,
            vat_quarter = updated.vat_quarter,
            "Updated forecast settings"
        );
        Ok(updated)
    }

    /// Run the forecast, optionally under a different scenario
    ///
    /// A scenario override must name a configured scenario; it only affects
    /// this run and is never saved.
    pub fn analyze(&self, scenario: Option<&str>) -> CashflowResult<CashFlowAnalysis> {
        let mut config = self.storage.configuration.get()?;

        if let Some(id) = scenario {
            if config.find_scenario(id).is_none() {
                return Err(CashflowError::scenario_not_found(id));
            }
            config.selected_scenario = id.to_string();
        }

        Ok(CashFlowAnalysis::run(&config))
    }

    /// Metrics under every configured scenario
    pub fn compare(&self) -> CashflowResult<Vec<ScenarioOutcome>> {
        let config = self.storage.configuration.get()?;
        Ok(compare_scenarios(&config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CashflowPaths;
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
    fn test_update_settings_persists() {
        let (temp_dir, storage) = create_test_storage();
        let service = ForecastService::new(&storage);

        service
            .update_settings(SettingsUpdate {
                starting_balance: Some(12000.0),
                ..Default::default()
            })
            .unwrap();

        let paths = CashflowPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reloaded = Storage::new(paths).unwrap();
        reloaded.load_all().unwrap();
        assert_eq!(
            reloaded.configuration.get().unwrap().starting_balance,
            12000.0
        );
    }

    #[test]
    fn test_empty_update_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ForecastService::new(&storage);
        assert!(service
            .update_settings(SettingsUpdate::default())
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_analyze_with_override_does_not_save() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ForecastService::new(&storage);

        let realistic = service.analyze(None).unwrap();
        let optimistic = service.analyze(Some("optimistic")).unwrap();

        assert!(optimistic.metrics.total_income > realistic.metrics.total_income);
        assert_eq!(
            service.configuration().unwrap().selected_scenario,
            "realistic"
        );
    }

    #[test]
    fn test_analyze_unknown_override() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ForecastService::new(&storage);
        assert!(service.analyze(Some("boom")).unwrap_err().is_not_found());
    }
}
