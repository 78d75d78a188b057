//! Income service
//!
//! Validated income stream mutations that persist the planning file.

use crate::error::{CashflowError, CashflowResult};
use crate::models::{IncomeStream, IncomeStreamUpdate};
use crate::storage::Storage;

/// Service for income stream management
pub struct IncomeService<'a> {
    storage: &'a Storage,
}

impl<'a> IncomeService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a new income stream and save
    pub fn add(&self, stream: IncomeStream) -> CashflowResult<IncomeStream> {
        let added = stream.clone();
        self.storage
            .configuration
            .update(|config| config.add_income_stream(stream))?;
        self.storage.configuration.save()?;

        tracing::info!(
            id = %added.id,
            name = %added.name,
            frequency = %added.frequency,
            amount = added.amount,
            "Added income stream"
        );
        Ok(added)
    }

    /// Find an income stream by id, short id or name
    pub fn find(&self, reference: &str) -> CashflowResult<IncomeStream> {
        self.storage
            .configuration
            .get()?
            .find_income_stream(reference)
            .cloned()
            .ok_or_else(|| CashflowError::income_stream_not_found(reference))
    }

    /// List all income streams in configuration order
    pub fn list(&self) -> CashflowResult<Vec<IncomeStream>> {
        Ok(self.storage.configuration.get()?.income_streams)
    }

    /// Update an income stream and save
    pub fn update(
        &self,
        reference: &str,
        update: IncomeStreamUpdate,
    ) -> CashflowResult<IncomeStream> {
        let id = self.find(reference)?.id;
        let updated = self
            .storage
            .configuration
            .update(|config| config.update_income_stream(id, update).cloned())?;
        self.storage.configuration.save()?;

        tracing::info!(id = %updated.id, name = %updated.name, "Updated income stream");
        Ok(updated)
    }

    /// Remove an income stream and save
    pub fn remove(&self, reference: &str) -> CashflowResult<IncomeStream> {
        let id = self.find(reference)?.id;
        let removed = self
            .storage
            .configuration
            .update(|config| config.remove_income_stream(id))?;
        self.storage.configuration.save()?;

        tracing::info!(id = %removed.id, name = %removed.name, "Removed income stream");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CashflowPaths;
    use crate::models::IncomeFrequency;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashflowPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_add_persists() {
        let (temp_dir, storage) = create_test_storage();
        let service = IncomeService::new(&storage);

        service
            .add(IncomeStream::new("Callouts", 800.0, IncomeFrequency::Monthly))
            .unwrap();

        let paths = CashflowPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reloaded = Storage::new(paths).unwrap();
        reloaded.load_all().unwrap();
        assert_eq!(IncomeService::new(&reloaded).list().unwrap().len(), 1);
    }

    #[test]
    fn test_update_by_name() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IncomeService::new(&storage);
        service
            .add(IncomeStream::new("Callouts", 800.0, IncomeFrequency::Monthly))
            .unwrap();

        let updated = service
            .update(
                "callouts",
                IncomeStreamUpdate {
                    growth: Some(0.1),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.growth, 0.1);
    }

    #[test]
    fn test_remove_by_short_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IncomeService::new(&storage);
        let stream = service
            .add(IncomeStream::new("Callouts", 800.0, IncomeFrequency::Monthly))
            .unwrap();

        service.remove(&stream.id.to_string()).unwrap();
        assert!(service.list().unwrap().is_empty());
        assert!(service.find("Callouts").unwrap_err().is_not_found());
    }

    #[test]
    fn test_invalid_stream_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IncomeService::new(&storage);

        let result = service.add(IncomeStream::new("", 800.0, IncomeFrequency::Monthly));
        assert!(result.unwrap_err().is_validation());
        assert!(service.list().unwrap().is_empty());
    }
}
