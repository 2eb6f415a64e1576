//! Calculator configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_HEADROOM_MULTIPLIER;

/// Configuration for the graph pack calculator.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Headroom multiplier over the summed pack sizes. Default: 50.
    pub headroom_multiplier: Option<i64>,
}

impl CalculatorConfig {
    /// Returns the effective headroom multiplier, defaulting to 50.
    pub fn effective_headroom_multiplier(&self) -> i64 {
        self.headroom_multiplier.unwrap_or(DEFAULT_HEADROOM_MULTIPLIER)
    }
}
