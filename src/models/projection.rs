//! Monthly projection record
//!
//! One month of a forecast: totals, net flow, running balance and the
//! per-source breakdowns. Projections are derived data; they are rebuilt
//! from the configuration on every run and never persisted on their own.

use chrono::Month;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of months in a forecast
pub const PROJECTION_MONTHS: usize = 12;

/// Breakdown entry name for the synthetic VAT outflow
pub const VAT_PAYMENT: &str = "VAT Payment";

/// One month of a cash-flow forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyProjection {
    /// Calendar month, 1-12
    pub month: u32,
    pub month_name: String,
    pub income: f64,
    /// Total outflow, including the VAT line
    pub expenses: f64,
    pub net_flow: f64,
    pub cumulative_balance: f64,
    /// Keyed by stream name; streams sharing a name overwrite each other
    pub income_breakdown: BTreeMap<String, f64>,
    /// Keyed by category name, plus "VAT Payment" in VAT months
    pub expense_breakdown: BTreeMap<String, f64>,
}

impl MonthlyProjection {
    /// Start an empty record for calendar month `month`
    pub fn new(month: u32) -> Self {
        Self {
            month,
            month_name: month_name(month),
            income: 0.0,
            expenses: 0.0,
            net_flow: 0.0,
            cumulative_balance: 0.0,
            income_breakdown: BTreeMap::new(),
            expense_breakdown: BTreeMap::new(),
        }
    }

    /// Contribution of the synthetic VAT line this month
    pub fn vat_payment(&self) -> f64 {
        self.expense_breakdown.get(VAT_PAYMENT).copied().unwrap_or(0.0)
    }

    /// Short three-letter month label for tables
    pub fn short_month_name(&self) -> &str {
        self.month_name.get(..3).unwrap_or(&self.month_name)
    }
}

/// English month name for a 1-based calendar month
pub fn month_name(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name().to_string())
        .unwrap_or_else(|| format!("Month {}", month))
}
