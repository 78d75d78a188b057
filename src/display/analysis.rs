//! Insight and metric display formatting

use super::format::{format_amount, format_percentage, separator};
use crate::engine::{FinancialMetrics, Insight, InsightKind};

fn kind_marker(kind: InsightKind) -> &'static str {
    match kind {
        InsightKind::Warning => "[!]",
        InsightKind::Info => "[i]",
        InsightKind::Success => "[+]",
    }
}

/// Format insights in their ranked order
pub fn format_insights(insights: &[Insight]) -> String {
    if insights.is_empty() {
        return "No insights for this forecast.".to_string();
    }

    let mut output = String::new();
    for insight in insights {
        output.push_str(&format!(
            "{} {} ({} priority)\n    {}\n",
            kind_marker(insight.kind),
            insight.title,
            insight.priority,
            insight.message
        ));
    }
    output
}

/// Format summary metrics as a two-column block
pub fn format_metrics(metrics: &FinancialMetrics, symbol: &str) -> String {
    let runway = match metrics.cash_runway {
        Some(0) => "none (balance goes negative)".to_string(),
        Some(months) => format!("{} months", months),
        None => "unlimited (no expenses)".to_string(),
    };
    let break_even = match metrics.break_even() {
        Some(month) => format!("month {}", month),
        None => "never".to_string(),
    };

    let rows = [
        ("Total income", format_amount(metrics.total_income, symbol)),
        ("Total expenses", format_amount(metrics.total_expenses, symbol)),
        ("Net profit", format_amount(metrics.net_profit, symbol)),
        (
            "Avg monthly income",
            format_amount(metrics.avg_monthly_income, symbol),
        ),
        (
            "Avg monthly expenses",
            format_amount(metrics.avg_monthly_expenses, symbol),
        ),
        ("Lowest balance", format_amount(metrics.min_balance, symbol)),
        ("Highest balance", format_amount(metrics.max_balance, symbol)),
        ("Profit margin", format_percentage(metrics.profit_margin)),
        ("Cash runway", runway),
        ("Break-even", break_even),
    ];

    let mut output = String::new();
    output.push_str("Financial Metrics\n");
    output.push_str(&separator(40));
    output.push('\n');
    for (label, value) in rows {
        output.push_str(&format!("{:<22}{:>18}\n", label, value));
    }
    output
}
