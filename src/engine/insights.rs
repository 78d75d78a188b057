//! Insight generator
//!
//! Derives qualitative warnings and observations from a projection series.
//! Every rule is evaluated independently; the resulting list is ordered by
//! priority with ties kept in rule order.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{CashFlowConfiguration, MonthlyProjection};

/// Kind of insight, used for presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Warning,
    Info,
    Success,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::Warning => "warning",
            InsightKind::Info => "info",
            InsightKind::Success => "success",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How urgent an insight is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Numeric rank for sorting (higher = more urgent)
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A derived observation about a forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub message: String,
    pub priority: Priority,
}

impl Insight {
    fn new(
        kind: InsightKind,
        priority: Priority,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            priority,
        }
    }
}

fn negative_balance(projections: &[MonthlyProjection]) -> Option<Insight> {
    let months = projections
        .iter()
        .filter(|p| p.cumulative_balance < 0.0)
        .count();
    if months == 0 {
        return None;
    }

    Some(Insight::new(
        InsightKind::Warning,
        Priority::High,
        "Negative Cash Flow Warning",
        format!(
            "Your cash balance goes negative in {} month{}. Consider arranging an overdraft, \
             chasing invoices sooner or deferring purchases.",
            months,
            if months == 1 { "" } else { "s" }
        ),
    ))
}

fn emergency_fund(
    projections: &[MonthlyProjection],
    config: &CashFlowConfiguration,
) -> Option<Insight> {
    let min_balance = projections
        .iter()
        .map(|p| p.cumulative_balance)
        .reduce(f64::min)?;
    if min_balance >= config.emergency_fund_target {
        return None;
    }

    Some(Insight::new(
        InsightKind::Warning,
        Priority::Medium,
        "Emergency Fund Below Target",
        format!(
            "Your lowest projected balance is {:.2}, below your emergency fund target of {:.2}.",
            min_balance, config.emergency_fund_target
        ),
    ))
}

fn seasonal_pattern(projections: &[MonthlyProjection]) -> Option<Insight> {
    let first = projections.first()?;
    let mut peak = first;
    let mut low = first;
    for p in projections {
        if p.income > peak.income {
            peak = p;
        }
        if p.income < low.income {
            low = p;
        }
    }

    Some(Insight::new(
        InsightKind::Info,
        Priority::Low,
        "Seasonal Pattern",
        format!(
            "Income peaks in {} and is lowest in {}. Plan larger purchases and time off around it.",
            peak.month_name, low.month_name
        ),
    ))
}

fn annual_outlook(projections: &[MonthlyProjection]) -> Option<Insight> {
    let income: f64 = projections.iter().map(|p| p.income).sum();
    let expenses: f64 = projections.iter().map(|p| p.expenses).sum();
    let net = income - expenses;
    if net <= 0.0 {
        return None;
    }

    Some(Insight::new(
        InsightKind::Success,
        Priority::Low,
        "Positive Annual Outlook",
        format!("You're projected to make {:.2} net profit this year.", net),
    ))
}

/// Derive insights from a projection series, most urgent first
pub fn derive_insights(
    projections: &[MonthlyProjection],
    config: &CashFlowConfiguration,
) -> Vec<Insight> {
    let mut insights: Vec<Insight> = [
        negative_balance(projections),
        emergency_fund(projections, config),
        seasonal_pattern(projections),
        annual_outlook(projections),
    ]
    .into_iter()
    .flatten()
    .collect();

    // Stable sort: equal priorities keep rule order.
    insights.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank()));

    tracing::debug!(count = insights.len(), "Insights derived");
    insights
}
