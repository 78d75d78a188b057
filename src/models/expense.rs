//! Expense category model
//!
//! A named, recurring outflow. Quarterly and annual expenses land on a
//! configured month (`timing`); variable expenses scale with the active
//! scenario the same way income does.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseCategoryId;

/// How often an expense is paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseFrequency {
    #[default]
    Monthly,
    Quarterly,
    Annual,
}

impl fmt::Display for ExpenseFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "Monthly"),
            Self::Quarterly => write!(f, "Quarterly"),
            Self::Annual => write!(f, "Annual"),
        }
    }
}

impl std::str::FromStr for ExpenseFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "annual" | "annually" | "yearly" => Ok(Self::Annual),
            other => Err(format!("Unknown expense frequency: {}", other)),
        }
    }
}

/// Validation errors for expense categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    NegativeAmount,
    NonFiniteValue,
    TimingOutOfRange(u8),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense category name cannot be empty"),
            Self::NegativeAmount => write!(f, "Expense amount cannot be negative"),
            Self::NonFiniteValue => write!(f, "Expense amount and growth must be finite numbers"),
            Self::TimingOutOfRange(m) => {
                write!(f, "Expense timing must be a month between 1 and 12, got {}", m)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// A recurring outflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseCategory {
    pub id: ExpenseCategoryId,
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub frequency: ExpenseFrequency,
    /// Month (1-12) a quarterly or annual expense lands on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing: Option<u8>,
    /// Whether the scenario multiplier applies
    #[serde(default)]
    pub variable: bool,
    #[serde(default)]
    pub growth: f64,
}

impl ExpenseCategory {
    /// Create a new fixed monthly-style expense with a fresh ID
    pub fn new(name: impl Into<String>, amount: f64, frequency: ExpenseFrequency) -> Self {
        Self {
            id: ExpenseCategoryId::new(),
            name: name.into(),
            amount,
            frequency,
            timing: None,
            variable: false,
            growth: 0.0,
        }
    }

    /// Builder-style timing setter
    pub fn with_timing(mut self, month: u8) -> Self {
        self.timing = Some(month);
        self
    }

    /// Mark the expense as scaling with the scenario
    pub fn variable(mut self) -> Self {
        self.variable = true;
        self
    }

    /// Builder-style growth setter
    pub fn with_growth(mut self, growth: f64) -> Self {
        self.growth = growth;
        self
    }

    /// Month the expense lands on, defaulting to January
    pub fn timing_or_default(&self) -> u8 {
        self.timing.unwrap_or(1)
    }

    /// Whether this expense falls due in calendar month `month` (1-12)
    ///
    /// Quarterly timing is compared modulo 3, so a timing of 1, 4, 7 or 10
    /// all mean "first month of each quarter".
    pub fn is_due_in(&self, month: u32) -> bool {
        let timing = u32::from(self.timing_or_default());
        match self.frequency {
            ExpenseFrequency::Monthly => true,
            ExpenseFrequency::Quarterly => month % 3 == timing % 3,
            ExpenseFrequency::Annual => month == timing,
        }
    }

    /// Validate the expense category
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }
        if !self.amount.is_finite() || !self.growth.is_finite() {
            return Err(ExpenseValidationError::NonFiniteValue);
        }
        if self.amount < 0.0 {
            return Err(ExpenseValidationError::NegativeAmount);
        }
        if self.frequency != ExpenseFrequency::Monthly {
            if let Some(month) = self.timing {
                if !(1..=12).contains(&month) {
                    return Err(ExpenseValidationError::TimingOutOfRange(month));
                }
            }
        }
        Ok(())
    }
}

/// Partial update for an expense category; `None` leaves a field unchanged
#[derive(Debug, Clone, Default)]
pub struct ExpenseCategoryUpdate {
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub frequency: Option<ExpenseFrequency>,
    pub timing: Option<u8>,
    pub variable: Option<bool>,
    pub growth: Option<f64>,
}

impl ExpenseCategoryUpdate {
    /// Apply this update to a category in place
    pub fn apply_to(self, category: &mut ExpenseCategory) {
        if let Some(name) = self.name {
            category.name = name;
        }
        if let Some(amount) = self.amount {
            category.amount = amount;
        }
        if let Some(frequency) = self.frequency {
            category.frequency = frequency;
        }
        if let Some(timing) = self.timing {
            category.timing = Some(timing);
        }
        if let Some(variable) = self.variable {
            category.variable = variable;
        }
        if let Some(growth) = self.growth {
            category.growth = growth;
        }
    }
}
