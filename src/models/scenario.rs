//! What-if scenarios
//!
//! A scenario is a named multiplier applied to all income and to variable
//! expenses, representing a pessimistic, realistic or optimistic year.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named business-outlook multiplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub multiplier: f64,
    #[serde(default)]
    pub description: String,
}

impl Scenario {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        multiplier: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            multiplier,
            description: description.into(),
        }
    }

    /// The three built-in outlooks, in the order the engine relies on
    ///
    /// The second entry is the realistic baseline used when the selected
    /// scenario id does not resolve.
    pub fn defaults() -> Vec<Scenario> {
        vec![
            Scenario::new(
                "pessimistic",
                "Pessimistic",
                0.8,
                "Work dries up: 20% less income and higher variable costs",
            ),
            Scenario::new(
                "realistic",
                "Realistic",
                1.0,
                "Business as usual based on current figures",
            ),
            Scenario::new(
                "optimistic",
                "Optimistic",
                1.2,
                "Strong year: 20% more work coming through the door",
            ),
        ]
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (x{:.2})", self.name, self.multiplier)
    }
}
