//! Financial metrics calculator
//!
//! Scalar summary statistics over a projection series.

use serde::{Deserialize, Serialize};

use crate::models::MonthlyProjection;

/// Summary statistics for a twelve-month forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialMetrics {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_profit: f64,
    pub avg_monthly_income: f64,
    pub avg_monthly_expenses: f64,
    pub min_balance: f64,
    pub max_balance: f64,
    /// Net profit as a percentage of income; 0 when there is no income
    pub profit_margin: f64,
    /// Whole months of buffer at the average burn, measured from the lowest
    /// balance. `Some(0)` when the balance ever goes negative, `None` when
    /// there are no expenses to burn through.
    pub cash_runway: Option<u32>,
    /// First month (1-based) with a positive balance; 0 means never
    pub break_even_month: u32,
}

impl FinancialMetrics {
    /// Break-even month as an option, `None` when the balance never turns
    /// positive
    pub fn break_even(&self) -> Option<u32> {
        (self.break_even_month > 0).then_some(self.break_even_month)
    }
}

/// Compute summary metrics from a projection series
pub fn compute_metrics(projections: &[MonthlyProjection]) -> FinancialMetrics {
    let months = projections.len().max(1) as f64;

    let total_income: f64 = projections.iter().map(|p| p.income).sum();
    let total_expenses: f64 = projections.iter().map(|p| p.expenses).sum();
    let net_profit = total_income - total_expenses;
    let avg_monthly_income = total_income / months;
    let avg_monthly_expenses = total_expenses / months;

    let balances = projections.iter().map(|p| p.cumulative_balance);
    let min_balance = balances.clone().reduce(f64::min).unwrap_or(0.0);
    let max_balance = balances.reduce(f64::max).unwrap_or(0.0);

    let profit_margin = if total_income == 0.0 {
        0.0
    } else {
        net_profit / total_income * 100.0
    };

    let cash_runway = if min_balance < 0.0 {
        Some(0)
    } else if avg_monthly_expenses > 0.0 {
        Some((min_balance / avg_monthly_expenses).floor() as u32)
    } else {
        None
    };

    let break_even_month = projections
        .iter()
        .position(|p| p.cumulative_balance > 0.0)
        .map_or(0, |i| i as u32 + 1);

    FinancialMetrics {
        total_income,
        total_expenses,
        net_profit,
        avg_monthly_income,
        avg_monthly_expenses,
        min_balance,
        max_balance,
        profit_margin,
        cash_runway,
        break_even_month,
    }
}
