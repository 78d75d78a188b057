//! Expense service
//!
//! Validated expense category mutations that persist the planning file.

use crate::error::{CashflowError, CashflowResult};
use crate::models::{ExpenseCategory, ExpenseCategoryUpdate};
use crate::storage::Storage;

/// Service for expense category management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a new expense category and save
    pub fn add(&self, category: ExpenseCategory) -> CashflowResult<ExpenseCategory> {
        let added = category.clone();
        self.storage
            .configuration
            .update(|config| config.add_expense_category(category))?;
        self.storage.configuration.save()?;

        tracing::info!(
            id = %added.id,
            name = %added.name,
            frequency = %added.frequency,
            amount = added.amount,
            variable = added.variable,
            "Added expense category"
        );
        Ok(added)
    }

    /// Find an expense category by id, short id or name
    pub fn find(&self, reference: &str) -> CashflowResult<ExpenseCategory> {
        self.storage
            .configuration
            .get()?
            .find_expense_category(reference)
            .cloned()
            .ok_or_else(|| CashflowError::expense_category_not_found(reference))
    }

    /// List all expense categories in configuration order
    pub fn list(&self) -> CashflowResult<Vec<ExpenseCategory>> {
        Ok(self.storage.configuration.get()?.expense_categories)
    }

    /// Update an expense category and save
    pub fn update(
        &self,
        reference: &str,
        update: ExpenseCategoryUpdate,
    ) -> CashflowResult<ExpenseCategory> {
        let id = self.find(reference)?.id;
        let updated = self
            .storage
            .configuration
            .update(|config| config.update_expense_category(id, update).cloned())?;
        self.storage.configuration.save()?;

        tracing::info!(id = %updated.id, name = %updated.name, "Updated expense category");
        Ok(updated)
    }

    /// Remove an expense category and save
    pub fn remove(&self, reference: &str) -> CashflowResult<ExpenseCategory> {
        let id = self.find(reference)?.id;
        let removed = self
            .storage
            .configuration
            .update(|config| config.remove_expense_category(id))?;
        self.storage.configuration.save()?;

        tracing::info!(id = %removed.id, name = %removed.name, "Removed expense category");
        Ok(removed)
    }
}
