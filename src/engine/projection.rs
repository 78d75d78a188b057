//! Projection calculator
//!
//! Expands income streams and expense categories across the twelve calendar
//! months, applying frequency rules, growth, seasonal curves and the
//! scenario multiplier, then carries a running balance forward from the
//! starting balance.

use crate::models::{
    CashFlowConfiguration, ExpenseCategory, IncomeFrequency, IncomeStream, MonthlyProjection,
    PROJECTION_MONTHS, VAT_PAYMENT,
};

/// Simplified VAT rate applied to a month's income
pub const VAT_RATE: f64 = 0.2;

/// The VAT line bills one month's income as if it were the whole quarter's.
/// This is an illustrative estimate, not a tax calculation.
const VAT_QUARTER_MONTHS: f64 = 3.0;

/// Pro-rata growth factor for month index `index` (0-based)
fn growth_factor(growth: f64, index: usize) -> f64 {
    1.0 + growth * index as f64 / 12.0
}

/// Raw income of a stream in month index `index`, before the scenario
fn income_for_month(stream: &IncomeStream, index: usize) -> f64 {
    let month = index as u32 + 1;
    let growth = growth_factor(stream.growth, index);

    match stream.frequency {
        IncomeFrequency::Monthly => stream.amount * growth,
        IncomeFrequency::Seasonal => {
            let multiplier = stream
                .seasonal_multiplier
                .as_ref()
                .and_then(|curve| curve.get(index))
                .copied();
            match multiplier {
                Some(m) => stream.amount * m * growth,
                None => {
                    tracing::warn!(
                        stream = %stream.name,
                        month,
                        "Seasonal stream has no multiplier for this month, contributing nothing"
                    );
                    0.0
                }
            }
        }
        // Quarterly income always lands in the first month of a calendar quarter.
        IncomeFrequency::Quarterly if month % 3 == 1 => stream.amount * 3.0 * growth,
        IncomeFrequency::Quarterly => 0.0,
    }
}

/// Raw outflow of a category in month index `index`, before the scenario
fn expense_for_month(category: &ExpenseCategory, index: usize) -> f64 {
    let month = index as u32 + 1;
    if category.is_due_in(month) {
        category.amount * growth_factor(category.growth, index)
    } else {
        0.0
    }
}

/// Whether the synthetic VAT line is due in calendar month `month`
pub fn is_vat_month(month: u32, vat_quarter: u8) -> bool {
    month % 3 == u32::from(vat_quarter) % 3
}

/// Project the configuration across twelve months
///
/// Pure and deterministic: the same configuration always yields the same
/// twelve records, in chronological order.
pub fn project(config: &CashFlowConfiguration) -> Vec<MonthlyProjection> {
    let scenario = config.scenario_multiplier();
    tracing::debug!(
        selected = %config.selected_scenario,
        multiplier = scenario,
        incomes = config.income_streams.len(),
        expenses = config.expense_categories.len(),
        "Projecting cash flow"
    );

    let mut balance = config.starting_balance;
    let mut projections = Vec::with_capacity(PROJECTION_MONTHS);

    for index in 0..PROJECTION_MONTHS {
        let month = index as u32 + 1;
        let mut projection = MonthlyProjection::new(month);

        for stream in &config.income_streams {
            let amount = income_for_month(stream, index) * scenario;
            projection.income_breakdown.insert(stream.name.clone(), amount);
            projection.income += amount;
        }

        for category in &config.expense_categories {
            let mut amount = expense_for_month(category, index);
            if category.variable {
                amount *= scenario;
            }
            projection
                .expense_breakdown
                .insert(category.name.clone(), amount);
            projection.expenses += amount;
        }

        if is_vat_month(month, config.vat_quarter) {
            let vat = projection.income * VAT_RATE * VAT_QUARTER_MONTHS;
            projection
                .expense_breakdown
                .insert(VAT_PAYMENT.to_string(), vat);
            projection.expenses += vat;
        }

        projection.net_flow = projection.income - projection.expenses;
        balance += projection.net_flow;
        projection.cumulative_balance = balance;

        projections.push(projection);
    }

    projections
}
