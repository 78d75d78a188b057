//! Cash-flow configuration
//!
//! The single root object of a forecast. It owns the income streams,
//! expense categories, scenarios and scalar settings, and exposes the
//! mutation operations. Every projection, insight and metric is derived
//! from it on demand; nothing derived is stored here.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::expense::{ExpenseCategory, ExpenseCategoryUpdate, ExpenseFrequency};
use super::ids::{ExpenseCategoryId, IncomeStreamId};
use super::income::{IncomeFrequency, IncomeStream, IncomeStreamUpdate};
use super::scenario::Scenario;
use crate::error::{CashflowError, CashflowResult};

/// Validation errors for the configuration as a whole
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationValidationError {
    NoScenarios,
    InvalidMultiplier(String),
    VatQuarterOutOfRange(u8),
    NonFiniteValue(&'static str),
}

impl fmt::Display for ConfigurationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoScenarios => write!(f, "At least one scenario must be configured"),
            Self::InvalidMultiplier(id) => {
                write!(f, "Scenario '{}' must have a positive multiplier", id)
            }
            Self::VatQuarterOutOfRange(q) => {
                write!(f, "VAT quarter must be 1, 2 or 3, got {}", q)
            }
            Self::NonFiniteValue(field) => write!(f, "{} must be a finite number", field),
        }
    }
}

impl std::error::Error for ConfigurationValidationError {}

/// Scalar settings update; `None` leaves a field unchanged
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub starting_balance: Option<f64>,
    pub selected_scenario: Option<String>,
    pub emergency_fund_target: Option<f64>,
    pub vat_quarter: Option<u8>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.starting_balance.is_none()
            && self.selected_scenario.is_none()
            && self.emergency_fund_target.is_none()
            && self.vat_quarter.is_none()
    }
}

/// Root configuration of a twelve-month cash-flow forecast
///
/// Keys missing from a planning file take their values from `Default`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CashFlowConfiguration {
    pub income_streams: Vec<IncomeStream>,
    pub expense_categories: Vec<ExpenseCategory>,
    pub starting_balance: f64,
    pub scenarios: Vec<Scenario>,
    pub selected_scenario: String,
    pub emergency_fund_target: f64,
    pub vat_quarter: u8,
}

fn default_selected_scenario() -> String {
    "realistic".to_string()
}

fn default_vat_quarter() -> u8 {
    1
}

impl Default for CashFlowConfiguration {
    fn default() -> Self {
        Self {
            income_streams: Vec::new(),
            expense_categories: Vec::new(),
            starting_balance: 5000.0,
            scenarios: Scenario::defaults(),
            selected_scenario: default_selected_scenario(),
            emergency_fund_target: 10000.0,
            vat_quarter: default_vat_quarter(),
        }
    }
}

impl CashFlowConfiguration {
    /// A representative plan for a small electrical contractor
    pub fn sample() -> Self {
        let mut config = Self::default();

        config.income_streams = vec![
            IncomeStream::new("Domestic Rewires", 4500.0, IncomeFrequency::Monthly)
                .with_growth(0.05)
                .with_payment_delay(14),
            IncomeStream::new(
                "Commercial Maintenance Contract",
                1500.0,
                IncomeFrequency::Quarterly,
            )
            .with_payment_delay(30),
            IncomeStream::seasonal(
                "EICR Inspections",
                1200.0,
                vec![0.6, 0.7, 0.9, 1.1, 1.2, 1.3, 1.2, 1.0, 1.1, 1.0, 0.8, 0.5],
            )
            .with_payment_delay(7),
        ];

        config.expense_categories = vec![
            ExpenseCategory::new("Van Lease", 450.0, ExpenseFrequency::Monthly),
            ExpenseCategory::new("Materials", 1800.0, ExpenseFrequency::Monthly)
                .variable()
                .with_growth(0.04),
            ExpenseCategory::new("Fuel", 320.0, ExpenseFrequency::Monthly).variable(),
            ExpenseCategory::new("Accountant Fees", 300.0, ExpenseFrequency::Quarterly)
                .with_timing(1),
            ExpenseCategory::new("Public Liability Insurance", 650.0, ExpenseFrequency::Annual)
                .with_timing(4),
            ExpenseCategory::new("Competent Person Scheme", 480.0, ExpenseFrequency::Annual)
                .with_timing(9),
        ];

        config
    }

    /// Resolve the scenario the engine should use
    ///
    /// Looks up `selected_scenario` by id; when it does not resolve, falls
    /// back positionally to the second configured scenario (the realistic
    /// baseline), then to the first.
    pub fn active_scenario(&self) -> Option<&Scenario> {
        self.find_scenario(&self.selected_scenario)
            .or_else(|| self.scenarios.get(1))
            .or_else(|| self.scenarios.first())
    }

    /// Multiplier of the active scenario, neutral when none is configured
    pub fn scenario_multiplier(&self) -> f64 {
        self.active_scenario().map_or(1.0, |s| s.multiplier)
    }

    /// Find a scenario by id
    pub fn find_scenario(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    /// Find an income stream by full id, short id or exact name
    pub fn find_income_stream(&self, reference: &str) -> Option<&IncomeStream> {
        self.income_streams
            .iter()
            .find(|s| s.id.matches(reference))
            .or_else(|| {
                self.income_streams
                    .iter()
                    .find(|s| s.name.eq_ignore_ascii_case(reference))
            })
    }

    /// Find an expense category by full id, short id or exact name
    pub fn find_expense_category(&self, reference: &str) -> Option<&ExpenseCategory> {
        self.expense_categories
            .iter()
            .find(|c| c.id.matches(reference))
            .or_else(|| {
                self.expense_categories
                    .iter()
                    .find(|c| c.name.eq_ignore_ascii_case(reference))
            })
    }

    /// Add an income stream
    pub fn add_income_stream(&mut self, stream: IncomeStream) -> CashflowResult<IncomeStreamId> {
        stream
            .validate()
            .map_err(|e| CashflowError::Validation(e.to_string()))?;

        if self.income_streams.iter().any(|s| s.id == stream.id) {
            return Err(CashflowError::Duplicate {
                entity_type: "Income stream",
                identifier: stream.id.to_string(),
            });
        }

        let id = stream.id;
        self.income_streams.push(stream);
        Ok(id)
    }

    /// Update an income stream; the stream is left untouched if the result
    /// would be invalid
    pub fn update_income_stream(
        &mut self,
        id: IncomeStreamId,
        update: IncomeStreamUpdate,
    ) -> CashflowResult<&IncomeStream> {
        let index = self
            .income_streams
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| CashflowError::income_stream_not_found(id.to_string()))?;

        let mut updated = self.income_streams[index].clone();
        update.apply_to(&mut updated);
        updated
            .validate()
            .map_err(|e| CashflowError::Validation(e.to_string()))?;

        self.income_streams[index] = updated;
        Ok(&self.income_streams[index])
    }

    /// Remove an income stream, returning it
    pub fn remove_income_stream(&mut self, id: IncomeStreamId) -> CashflowResult<IncomeStream> {
        let index = self
            .income_streams
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| CashflowError::income_stream_not_found(id.to_string()))?;
        Ok(self.income_streams.remove(index))
    }

    /// Add an expense category
    pub fn add_expense_category(
        &mut self,
        category: ExpenseCategory,
    ) -> CashflowResult<ExpenseCategoryId> {
        category
            .validate()
            .map_err(|e| CashflowError::Validation(e.to_string()))?;

        if self.expense_categories.iter().any(|c| c.id == category.id) {
            return Err(CashflowError::Duplicate {
                entity_type: "Expense category",
                identifier: category.id.to_string(),
            });
        }

        let id = category.id;
        self.expense_categories.push(category);
        Ok(id)
    }

    /// Update an expense category; the category is left untouched if the
    /// result would be invalid
    pub fn update_expense_category(
        &mut self,
        id: ExpenseCategoryId,
        update: ExpenseCategoryUpdate,
    ) -> CashflowResult<&ExpenseCategory> {
        let index = self
            .expense_categories
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| CashflowError::expense_category_not_found(id.to_string()))?;

        let mut updated = self.expense_categories[index].clone();
        update.apply_to(&mut updated);
        updated
            .validate()
            .map_err(|e| CashflowError::Validation(e.to_string()))?;

        self.expense_categories[index] = updated;
        Ok(&self.expense_categories[index])
    }

    /// Remove an expense category, returning it
    pub fn remove_expense_category(
        &mut self,
        id: ExpenseCategoryId,
    ) -> CashflowResult<ExpenseCategory> {
        let index = self
            .expense_categories
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| CashflowError::expense_category_not_found(id.to_string()))?;
        Ok(self.expense_categories.remove(index))
    }

    /// Update scalar settings
    ///
    /// An unknown scenario id is accepted: the engine falls back to the
    /// realistic baseline for it.
    pub fn update_settings(&mut self, update: SettingsUpdate) -> CashflowResult<()> {
        let mut updated = self.clone();

        if let Some(balance) = update.starting_balance {
            updated.starting_balance = balance;
        }
        if let Some(scenario) = update.selected_scenario {
            if updated.find_scenario(&scenario).is_none() {
                tracing::warn!(
                    scenario = %scenario,
                    "Selected scenario not configured, realistic baseline will be used"
                );
            }
            updated.selected_scenario = scenario;
        }
        if let Some(target) = update.emergency_fund_target {
            updated.emergency_fund_target = target;
        }
        if let Some(quarter) = update.vat_quarter {
            updated.vat_quarter = quarter;
        }

        updated
            .validate()
            .map_err(|e| CashflowError::Validation(e.to_string()))?;

        *self = updated;
        Ok(())
    }

    /// Validate the scalar settings and scenario list
    pub fn validate(&self) -> Result<(), ConfigurationValidationError> {
        if self.scenarios.is_empty() {
            return Err(ConfigurationValidationError::NoScenarios);
        }
        if let Some(bad) = self
            .scenarios
            .iter()
            .find(|s| !s.multiplier.is_finite() || s.multiplier <= 0.0)
        {
            return Err(ConfigurationValidationError::InvalidMultiplier(bad.id.clone()));
        }
        if !(1..=3).contains(&self.vat_quarter) {
            return Err(ConfigurationValidationError::VatQuarterOutOfRange(
                self.vat_quarter,
            ));
        }
        if !self.starting_balance.is_finite() {
            return Err(ConfigurationValidationError::NonFiniteValue("Starting balance"));
        }
        if !self.emergency_fund_target.is_finite() {
            return Err(ConfigurationValidationError::NonFiniteValue(
                "Emergency fund target",
            ));
        }
        Ok(())
    }

    /// Validate the whole configuration, entries included
    pub fn validate_all(&self) -> CashflowResult<()> {
        self.validate()
            .map_err(|e| CashflowError::Validation(e.to_string()))?;
        for stream in &self.income_streams {
            stream
                .validate()
                .map_err(|e| CashflowError::Validation(format!("{}: {}", stream.name, e)))?;
        }
        for category in &self.expense_categories {
            category
                .validate()
                .map_err(|e| CashflowError::Validation(format!("{}: {}", category.name, e)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CashFlowConfiguration::default();
        assert!(config.income_streams.is_empty());
        assert!(config.expense_categories.is_empty());
        assert_eq!(config.starting_balance, 5000.0);
        assert_eq!(config.selected_scenario, "realistic");
        assert_eq!(config.vat_quarter, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sample_is_valid() {
        let config = CashFlowConfiguration::sample();
        assert!(config.validate_all().is_ok());
        assert_eq!(config.income_streams.len(), 3);
    }

    #[test]
    fn test_active_scenario_lookup() {
        let mut config = CashFlowConfiguration::default();
        config.selected_scenario = "optimistic".into();
        assert_eq!(config.scenario_multiplier(), 1.2);
    }

    #[test]
    fn test_unknown_scenario_falls_back_to_second_entry() {
        let mut config = CashFlowConfiguration::default();
        config.scenarios = vec![
            Scenario::new("low", "Low", 0.5, ""),
            Scenario::new("mid", "Mid", 0.9, ""),
            Scenario::new("high", "High", 1.4, ""),
        ];
        config.selected_scenario = "missing".into();

        assert_eq!(config.active_scenario().unwrap().id, "mid");
        assert_eq!(config.scenario_multiplier(), 0.9);
    }

    #[test]
    fn test_fallback_with_single_or_no_scenarios() {
        let mut config = CashFlowConfiguration::default();
        config.scenarios = vec![Scenario::new("only", "Only", 1.1, "")];
        config.selected_scenario = "missing".into();
        assert_eq!(config.scenario_multiplier(), 1.1);

        config.scenarios.clear();
        assert!(config.active_scenario().is_none());
        assert_eq!(config.scenario_multiplier(), 1.0);
    }

    #[test]
    fn test_add_update_remove_income_stream() {
        let mut config = CashFlowConfiguration::default();
        let id = config
            .add_income_stream(IncomeStream::new("Callouts", 800.0, IncomeFrequency::Monthly))
            .unwrap();

        let updated = config
            .update_income_stream(
                id,
                IncomeStreamUpdate {
                    amount: Some(900.0),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.amount, 900.0);

        let removed = config.remove_income_stream(id).unwrap();
        assert_eq!(removed.name, "Callouts");
        assert!(config.income_streams.is_empty());

        let err = config.remove_income_stream(id).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_add_rejects_invalid_and_duplicate() {
        let mut config = CashFlowConfiguration::default();
        let err = config
            .add_income_stream(IncomeStream::new("EICRs", 100.0, IncomeFrequency::Seasonal))
            .unwrap_err();
        assert!(err.is_validation());

        let stream = IncomeStream::new("Callouts", 800.0, IncomeFrequency::Monthly);
        config.add_income_stream(stream.clone()).unwrap();
        let err = config.add_income_stream(stream).unwrap_err();
        assert!(matches!(err, CashflowError::Duplicate { .. }));
    }

    #[test]
    fn test_invalid_update_leaves_stream_untouched() {
        let mut config = CashFlowConfiguration::default();
        let id = config
            .add_income_stream(IncomeStream::new("Callouts", 800.0, IncomeFrequency::Monthly))
            .unwrap();

        let result = config.update_income_stream(
            id,
            IncomeStreamUpdate {
                frequency: Some(IncomeFrequency::Seasonal),
                ..Default::default()
            },
        );
        assert!(result.is_err());
        assert_eq!(config.income_streams[0].frequency, IncomeFrequency::Monthly);
    }

    #[test]
    fn test_expense_mutations() {
        let mut config = CashFlowConfiguration::default();
        let id = config
            .add_expense_category(
                ExpenseCategory::new("Insurance", 650.0, ExpenseFrequency::Annual).with_timing(4),
            )
            .unwrap();

        let err = config
            .update_expense_category(
                id,
                ExpenseCategoryUpdate {
                    timing: Some(0),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(config.expense_categories[0].timing, Some(4));

        config.remove_expense_category(id).unwrap();
        assert!(config.expense_categories.is_empty());
    }

    #[test]
    fn test_update_settings() {
        let mut config = CashFlowConfiguration::default();
        config
            .update_settings(SettingsUpdate {
                starting_balance: Some(250.0),
                vat_quarter: Some(3),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(config.starting_balance, 250.0);
        assert_eq!(config.vat_quarter, 3);

        let err = config
            .update_settings(SettingsUpdate {
                starting_balance: Some(999.0),
                vat_quarter: Some(4),
                ..Default::default()
            })
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(config.starting_balance, 250.0);
    }

    #[test]
    fn test_update_settings_accepts_unknown_scenario() {
        let mut config = CashFlowConfiguration::default();
        config
            .update_settings(SettingsUpdate {
                selected_scenario: Some("boom".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(config.selected_scenario, "boom");
        assert_eq!(config.active_scenario().unwrap().id, "realistic");
    }

    #[test]
    fn test_find_by_name_or_short_id() {
        let config = CashFlowConfiguration::sample();
        let van = config.find_expense_category("van lease").unwrap();
        let short = van.id.to_string();
        assert_eq!(config.find_expense_category(&short).unwrap().id, van.id);
        assert!(config.find_income_stream("Nope").is_none());
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: CashFlowConfiguration =
            serde_json::from_str(r#"{"startingBalance": 1200.0}"#).unwrap();
        assert_eq!(config.starting_balance, 1200.0);
        assert_eq!(config.scenarios.len(), 3);
        assert_eq!(config.selected_scenario, "realistic");
        assert_eq!(config.vat_quarter, 1);
        assert_eq!(config.emergency_fund_target, 10000.0);

        let config: CashFlowConfiguration =
            serde_json::from_str(r#"{"vatQuarter": 2, "incomeStreams": []}"#).unwrap();
        assert_eq!(config.starting_balance, 5000.0);
        assert_eq!(config.emergency_fund_target, 10000.0);
        assert_eq!(config.vat_quarter, 2);
    }
}
