//! Income stream model
//!
//! An income stream is a named, recurring source of money: regular domestic
//! jobs, a maintenance contract billed quarterly, or seasonal work that
//! follows a twelve-month demand curve.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::IncomeStreamId;

/// Number of entries a seasonal multiplier curve must carry
pub const SEASONAL_CURVE_LEN: usize = 12;

/// How often an income stream pays out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IncomeFrequency {
    /// Every month
    #[default]
    Monthly,
    /// Three months' worth, paid in the first month of each calendar quarter
    Quarterly,
    /// Every month, scaled by a per-month multiplier curve
    Seasonal,
}

impl fmt::Display for IncomeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "Monthly"),
            Self::Quarterly => write!(f, "Quarterly"),
            Self::Seasonal => write!(f, "Seasonal"),
        }
    }
}

impl std::str::FromStr for IncomeFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "seasonal" => Ok(Self::Seasonal),
            other => Err(format!("Unknown income frequency: {}", other)),
        }
    }
}

/// Validation errors for income streams
#[derive(Debug, Clone, PartialEq)]
pub enum IncomeValidationError {
    EmptyName,
    NegativeAmount,
    NonFiniteValue,
    MissingSeasonalCurve,
    SeasonalCurveLength(usize),
    NegativeSeasonalMultiplier,
}

impl fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Income stream name cannot be empty"),
            Self::NegativeAmount => write!(f, "Income amount cannot be negative"),
            Self::NonFiniteValue => write!(f, "Income amount and growth must be finite numbers"),
            Self::MissingSeasonalCurve => {
                write!(f, "Seasonal income streams need a seasonal multiplier curve")
            }
            Self::SeasonalCurveLength(len) => write!(
                f,
                "Seasonal multiplier curve must have {} entries, got {}",
                SEASONAL_CURVE_LEN, len
            ),
            Self::NegativeSeasonalMultiplier => {
                write!(f, "Seasonal multipliers cannot be negative")
            }
        }
    }
}

impl std::error::Error for IncomeValidationError {}

/// A recurring source of money
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStream {
    pub id: IncomeStreamId,
    pub name: String,
    /// Base magnitude per occurrence
    pub amount: f64,
    #[serde(default)]
    pub frequency: IncomeFrequency,
    /// One multiplier per calendar month, required for seasonal streams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seasonal_multiplier: Option<Vec<f64>>,
    /// How long customers take to pay; informational only
    #[serde(default)]
    pub payment_delay_days: u32,
    /// Annualised fractional growth, applied pro-rata across the year
    #[serde(default)]
    pub growth: f64,
}

impl IncomeStream {
    /// Create a new income stream with a fresh ID
    pub fn new(name: impl Into<String>, amount: f64, frequency: IncomeFrequency) -> Self {
        Self {
            id: IncomeStreamId::new(),
            name: name.into(),
            amount,
            frequency,
            seasonal_multiplier: None,
            payment_delay_days: 0,
            growth: 0.0,
        }
    }

    /// Create a seasonal income stream with its multiplier curve
    pub fn seasonal(name: impl Into<String>, amount: f64, curve: Vec<f64>) -> Self {
        let mut stream = Self::new(name, amount, IncomeFrequency::Seasonal);
        stream.seasonal_multiplier = Some(curve);
        stream
    }

    /// Builder-style growth setter
    pub fn with_growth(mut self, growth: f64) -> Self {
        self.growth = growth;
        self
    }

    /// Builder-style payment delay setter
    pub fn with_payment_delay(mut self, days: u32) -> Self {
        self.payment_delay_days = days;
        self
    }

    /// Validate the income stream
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if self.name.trim().is_empty() {
            return Err(IncomeValidationError::EmptyName);
        }
        if !self.amount.is_finite() || !self.growth.is_finite() {
            return Err(IncomeValidationError::NonFiniteValue);
        }
        if self.amount < 0.0 {
            return Err(IncomeValidationError::NegativeAmount);
        }

        if self.frequency == IncomeFrequency::Seasonal {
            let curve = self
                .seasonal_multiplier
                .as_ref()
                .ok_or(IncomeValidationError::MissingSeasonalCurve)?;
            if curve.len() != SEASONAL_CURVE_LEN {
                return Err(IncomeValidationError::SeasonalCurveLength(curve.len()));
            }
            if curve.iter().any(|m| !m.is_finite() || *m < 0.0) {
                return Err(IncomeValidationError::NegativeSeasonalMultiplier);
            }
        }

        Ok(())
    }
}

/// Partial update for an income stream; `None` leaves a field unchanged
#[derive(Debug, Clone, Default)]
pub struct IncomeStreamUpdate {
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub frequency: Option<IncomeFrequency>,
    pub seasonal_multiplier: Option<Vec<f64>>,
    pub payment_delay_days: Option<u32>,
    pub growth: Option<f64>,
}

impl IncomeStreamUpdate {
    /// Apply this update to a stream in place
    pub fn apply_to(self, stream: &mut IncomeStream) {
        if let Some(name) = self.name {
            stream.name = name;
        }
        if let Some(amount) = self.amount {
            stream.amount = amount;
        }
        if let Some(frequency) = self.frequency {
            stream.frequency = frequency;
        }
        if let Some(curve) = self.seasonal_multiplier {
            stream.seasonal_multiplier = Some(curve);
        }
        if let Some(days) = self.payment_delay_days {
            stream.payment_delay_days = days;
        }
        if let Some(growth) = self.growth {
            stream.growth = growth;
        }
    }
}
