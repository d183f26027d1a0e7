//! Contribution escalation rule

use serde::{Deserialize, Serialize};

/// Recurring contribution increase applied once per year in a fixed calendar month.
///
/// The first escalation happens in `month` of the first year >= `start_year`,
/// then again every year in that same month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscalationRule {
    /// Calendar month (1-12) in which the contribution steps up
    pub month: u32,

    /// First year in which the step-up may apply
    pub start_year: i32,

    /// Multiplier applied to the running contribution (1.20 = +20%)
    pub factor: f64,
}

impl EscalationRule {
    pub fn new(month: u32, start_year: i32, factor: f64) -> Self {
        Self { month, start_year, factor }
    }

    /// 20% step-up every November from 2025
    pub fn annual_november() -> Self {
        Self::new(11, 2025, 1.20)
    }

    /// Whether the contribution steps up at the start of the given month
    pub fn should_escalate(&self, year: i32, month: u32) -> bool {
        month == self.month && year >= self.start_year
    }

    /// Escalated contribution, rounded half away from zero to a whole unit
    pub fn apply(&self, amount: u64) -> u64 {
        (amount as f64 * self.factor).round() as u64
    }
}

impl Default for EscalationRule {
    fn default() -> Self {
        Self::annual_november()
    }
}
