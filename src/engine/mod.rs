//! Cash-flow forecasting engine
//!
//! Three pure stages run leaf-first over a [`CashFlowConfiguration`]:
//!
//! - `projection`: twelve monthly records with a running balance
//! - `insights`: ranked warnings and observations about those records
//! - `metrics`: scalar summary statistics
//!
//! Nothing here performs I/O or mutates its input, so results can be
//! recomputed after every configuration change.
//!
//! ```rust
//! use cashflow::engine::CashFlowAnalysis;
//! use cashflow::models::CashFlowConfiguration;
//!
//! let analysis = CashFlowAnalysis::run(&CashFlowConfiguration::sample());
//! assert_eq!(analysis.projections.len(), 12);
//! ```

pub mod insights;
pub mod metrics;
pub mod projection;

pub use insights::{derive_insights, Insight, InsightKind, Priority};
pub use metrics::{compute_metrics, FinancialMetrics};
pub use projection::{is_vat_month, project, VAT_RATE};

use serde::{Deserialize, Serialize};

use crate::models::{CashFlowConfiguration, MonthlyProjection, Scenario};

/// The three derived views of a configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowAnalysis {
    pub projections: Vec<MonthlyProjection>,
    pub insights: Vec<Insight>,
    pub metrics: FinancialMetrics,
}

impl CashFlowAnalysis {
    /// Run the full pipeline over a configuration
    pub fn run(config: &CashFlowConfiguration) -> Self {
        let projections = project(config);
        let insights = derive_insights(&projections, config);
        let metrics = compute_metrics(&projections);

        tracing::debug!(
            net_profit = metrics.net_profit,
            min_balance = metrics.min_balance,
            insights = insights.len(),
            "Cash-flow analysis complete"
        );

        Self {
            projections,
            insights,
            metrics,
        }
    }
}

/// Metrics of a forecast rerun under one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    pub metrics: FinancialMetrics,
}

/// Rerun the forecast once per configured scenario, in scenario order
pub fn compare_scenarios(config: &CashFlowConfiguration) -> Vec<ScenarioOutcome> {
    config
        .scenarios
        .iter()
        .map(|scenario| {
            let mut variant = config.clone();
            variant.selected_scenario = scenario.id.clone();
            ScenarioOutcome {
                scenario: scenario.clone(),
                metrics: compute_metrics(&project(&variant)),
            }
        })
        .collect()
}
