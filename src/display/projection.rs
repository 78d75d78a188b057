//! Monthly projection table

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::format::format_amount;
use crate::models::MonthlyProjection;

#[derive(Tabled)]
struct ProjectionRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expenses")]
    expenses: String,
    #[tabled(rename = "VAT")]
    vat: String,
    #[tabled(rename = "Net Flow")]
    net_flow: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

impl ProjectionRow {
    fn new(projection: &MonthlyProjection, symbol: &str) -> Self {
        let vat = projection.vat_payment();
        Self {
            month: projection.short_month_name().to_string(),
            income: format_amount(projection.income, symbol),
            expenses: format_amount(projection.expenses, symbol),
            vat: if vat > 0.0 {
                format_amount(vat, symbol)
            } else {
                String::new()
            },
            net_flow: format_amount(projection.net_flow, symbol),
            balance: format_amount(projection.cumulative_balance, symbol),
        }
    }
}

/// Render the twelve-month table; amounts are right-aligned
pub fn format_projection_table(projections: &[MonthlyProjection], symbol: &str) -> String {
    if projections.is_empty() {
        return "No projections.".to_string();
    }

    let rows: Vec<ProjectionRow> = projections
        .iter()
        .map(|p| ProjectionRow::new(p, symbol))
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .modify(Columns::new(1..), Alignment::right());
    table.to_string()
}

/// Per-source lines for each month, income first
pub fn format_breakdown(projections: &[MonthlyProjection], symbol: &str) -> String {
    let mut output = String::new();

    for projection in projections {
        output.push_str(&format!("{}\n", projection.month_name));
        for (name, amount) in &projection.income_breakdown {
            output.push_str(&format!(
                "  + {:<32}{:>14}\n",
                name,
                format_amount(*amount, symbol)
            ));
        }
        for (name, amount) in &projection.expense_breakdown {
            output.push_str(&format!(
                "  - {:<32}{:>14}\n",
                name,
                format_amount(*amount, symbol)
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::project;
    use crate::models::{CashFlowConfiguration, VAT_PAYMENT};

    #[test]
    fn test_table_has_all_months() {
        let projections = project(&CashFlowConfiguration::sample());
        let table = format_projection_table(&projections, "£");

        for projection in &projections {
            assert!(table.contains(projection.short_month_name()));
        }
        assert!(table.contains("Net Flow"));
    }

    #[test]
    fn test_breakdown_lists_vat() {
        let projections = project(&CashFlowConfiguration::sample());
        let output = format_breakdown(&projections, "£");
        assert!(output.contains(VAT_PAYMENT));
        assert!(output.contains("+ Domestic Rewires"));
    }
}
