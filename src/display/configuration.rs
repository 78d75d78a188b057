//! Configuration display formatting
//!
//! Formats income streams, expense categories, scenarios and forecast
//! settings for terminal output in list and detail views.

use super::format::{format_amount, format_percentage};
use crate::models::{
    CashFlowConfiguration, ExpenseCategory, ExpenseFrequency, IncomeFrequency, IncomeStream,
};

/// Format a list of income streams as a table
pub fn format_income_list(streams: &[IncomeStream], symbol: &str) -> String {
    if streams.is_empty() {
        return "No income streams configured.".to_string();
    }

    let name_width = streams
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:<9}  {:>12}  {:>7}  {}\n",
        "ID",
        "Name",
        "Frequency",
        "Amount",
        "Growth",
        "Paid after",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:-<9}  {:->12}  {:->7}  {:-<10}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for stream in streams {
        output.push_str(&format!(
            "{:<12}  {:<name_width$}  {:<9}  {:>12}  {:>7}  {}\n",
            stream.id.to_string(),
            stream.name,
            stream.frequency.to_string(),
            format_amount(stream.amount, symbol),
            format_percentage(stream.growth * 100.0),
            format!("{} days", stream.payment_delay_days),
            name_width = name_width,
        ));
    }

    output
}

/// Format a single income stream in detail
pub fn format_income_details(stream: &IncomeStream, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Income Stream: {}\n", stream.name));
    output.push_str(&format!("  ID:            {}\n", stream.id));
    output.push_str(&format!("  Frequency:     {}\n", stream.frequency));
    output.push_str(&format!(
        "  Amount:        {}\n",
        format_amount(stream.amount, symbol)
    ));
    output.push_str(&format!(
        "  Growth:        {} per year\n",
        format_percentage(stream.growth * 100.0)
    ));
    output.push_str(&format!(
        "  Payment delay: {} days\n",
        stream.payment_delay_days
    ));

    if stream.frequency == IncomeFrequency::Seasonal {
        match &stream.seasonal_multiplier {
            Some(curve) => {
                let values: Vec<String> = curve.iter().map(|m| format!("{:.2}", m)).collect();
                output.push_str(&format!("  Seasonality:   {}\n", values.join(" ")));
            }
            None => output.push_str("  Seasonality:   (missing, contributes nothing)\n"),
        }
    }

    output
}

/// Format a list of expense categories as a table
pub fn format_expense_list(categories: &[ExpenseCategory], symbol: &str) -> String {
    if categories.is_empty() {
        return "No expense categories configured.".to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:<9}  {:>12}  {:<6}  {:>7}  {}\n",
        "ID",
        "Name",
        "Frequency",
        "Amount",
        "Due",
        "Growth",
        "Variable",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:-<9}  {:->12}  {:-<6}  {:->7}  {:-<8}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for category in categories {
        output.push_str(&format!(
            "{:<12}  {:<name_width$}  {:<9}  {:>12}  {:<6}  {:>7}  {}\n",
            category.id.to_string(),
            category.name,
            category.frequency.to_string(),
            format_amount(category.amount, symbol),
            due_label(category),
            format_percentage(category.growth * 100.0),
            if category.variable { "yes" } else { "" },
            name_width = name_width,
        ));
    }

    output
}

/// Format a single expense category in detail
pub fn format_expense_details(category: &ExpenseCategory, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense Category: {}\n", category.name));
    output.push_str(&format!("  ID:        {}\n", category.id));
    output.push_str(&format!("  Frequency: {}\n", category.frequency));
    output.push_str(&format!(
        "  Amount:    {}\n",
        format_amount(category.amount, symbol)
    ));
    output.push_str(&format!("  Due:       {}\n", due_label(category)));
    output.push_str(&format!(
        "  Growth:    {} per year\n",
        format_percentage(category.growth * 100.0)
    ));
    output.push_str(&format!(
        "  Variable:  {}\n",
        if category.variable {
            "yes (scales with scenario)"
        } else {
            "no"
        }
    ));

    output
}

fn due_label(category: &ExpenseCategory) -> String {
    let timing = category.timing_or_default();
    match category.frequency {
        ExpenseFrequency::Monthly => "every".to_string(),
        ExpenseFrequency::Quarterly => {
            let months: Vec<String> = (1..=12u32)
                .filter(|m| category.is_due_in(*m))
                .map(|m| m.to_string())
                .collect();
            months.join("/")
        }
        ExpenseFrequency::Annual => format!("m{}", timing),
    }
}

/// Format the configured scenarios, marking the one forecasts use
pub fn format_scenario_list(config: &CashFlowConfiguration) -> String {
    if config.scenarios.is_empty() {
        return "No scenarios configured.".to_string();
    }

    let active = config.active_scenario().map(|s| s.id.as_str());
    let id_width = config
        .scenarios
        .iter()
        .map(|s| s.id.len())
        .max()
        .unwrap_or(2)
        .max(2);

    let mut output = String::new();
    for scenario in &config.scenarios {
        let marker = if Some(scenario.id.as_str()) == active {
            "*"
        } else {
            " "
        };
        output.push_str(&format!(
            "{} {:<id_width$}  {:<12}  x{:<5.2}  {}\n",
            marker,
            scenario.id,
            scenario.name,
            scenario.multiplier,
            scenario.description,
            id_width = id_width,
        ));
    }

    if config.find_scenario(&config.selected_scenario).is_none() {
        output.push_str(&format!(
            "\nSelected scenario '{}' is not configured; forecasts use the baseline marked *.\n",
            config.selected_scenario
        ));
    }

    output
}

/// Format the scalar forecast settings
pub fn format_settings(config: &CashFlowConfiguration, symbol: &str) -> String {
    let scenario = match (
        config.find_scenario(&config.selected_scenario),
        config.active_scenario(),
    ) {
        (Some(selected), _) => selected.to_string(),
        (None, Some(fallback)) => format!(
            "{} (unknown, using {})",
            config.selected_scenario, fallback
        ),
        (None, None) => format!("{} (unknown)", config.selected_scenario),
    };

    let mut output = String::new();
    output.push_str("Forecast Settings\n");
    output.push_str(&format!(
        "  Starting balance:      {}\n",
        format_amount(config.starting_balance, symbol)
    ));
    output.push_str(&format!("  Scenario:              {}\n", scenario));
    output.push_str(&format!(
        "  Emergency fund target: {}\n",
        format_amount(config.emergency_fund_target, symbol)
    ));
    output.push_str(&format!("  VAT quarter:           {}\n", config.vat_quarter));
    output.push_str(&format!(
        "  Income streams:        {}\n",
        config.income_streams.len()
    ));
    output.push_str(&format!(
        "  Expense categories:    {}\n",
        config.expense_categories.len()
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_lists() {
        assert_eq!(format_income_list(&[], "£"), "No income streams configured.");
        assert_eq!(
            format_expense_list(&[], "£"),
            "No expense categories configured."
        );
    }

    #[test]
    fn test_income_list_contains_rows() {
        let config = CashFlowConfiguration::sample();
        let output = format_income_list(&config.income_streams, "£");
        assert!(output.contains("Domestic Rewires"));
        assert!(output.contains("£4,500.00"));
        assert!(output.contains("Seasonal"));
    }

    #[test]
    fn test_quarterly_due_months() {
        let category = ExpenseCategory::new("Accountant", 300.0, ExpenseFrequency::Quarterly)
            .with_timing(2);
        assert_eq!(due_label(&category), "2/5/8/11");
    }

    #[test]
    fn test_scenario_list_marks_active() {
        let output = format_scenario_list(&CashFlowConfiguration::default());
        let marked: Vec<_> = output.lines().filter(|l| l.starts_with('*')).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("Realistic"));
        assert!(!output.contains("not configured"));
    }

    #[test]
    fn test_scenario_list_unknown_selection() {
        let mut config = CashFlowConfiguration::default();
        config.selected_scenario = "boom".to_string();
        let output = format_scenario_list(&config);
        assert!(output.contains("'boom' is not configured"));
        assert!(output
            .lines()
            .any(|l| l.starts_with('*') && l.contains("Realistic")));
    }

    #[test]
    fn test_settings_unknown_scenario() {
        let mut config = CashFlowConfiguration::default();
        config.selected_scenario = "boom".to_string();
        assert!(format_settings(&config, "£").contains("boom (unknown, using Realistic (x1.00))"));
    }
}
