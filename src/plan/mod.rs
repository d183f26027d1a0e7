//! Savings plan configuration: projection inputs and output settings

mod escalation;
pub mod loader;

pub use escalation::EscalationRule;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};

/// Default directory the tracker files are written to
pub const DEFAULT_OUTPUT_DIR: &str = "retirement_plan";

/// Inputs to the projection engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsPlan {
    /// Interest rate compounded once per period (0.025 = 2.5% monthly)
    pub interest_rate: f64,

    /// Contribution for the first period, in whole currency units
    pub initial_contribution: u64,

    /// First month of the projection (day of month is ignored)
    pub start_date: NaiveDate,

    /// Last month of the projection, inclusive
    pub end_date: NaiveDate,

    /// Recurring contribution step-up, if any
    #[serde(default)]
    pub escalation: Option<EscalationRule>,
}

impl SavingsPlan {
    /// April 2025 to October 2035 at 2.5% monthly, starting at 5800 with
    /// a 20% step-up every November
    pub fn default_plan() -> Self {
        Self {
            interest_rate: 0.025,
            initial_contribution: 5800,
            start_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap_or_default(),
            end_date: NaiveDate::from_ymd_opt(2035, 10, 1).unwrap_or_default(),
            escalation: Some(EscalationRule::annual_november()),
        }
    }

    /// Same plan with a different interest rate
    pub fn with_interest_rate(&self, interest_rate: f64) -> Self {
        Self {
            interest_rate,
            ..self.clone()
        }
    }

    /// Check the preconditions the engine relies on.
    ///
    /// An end date before the start date is not an error; it projects to an
    /// empty schedule.
    pub fn validate(&self) -> TrackerResult<()> {
        if !self.interest_rate.is_finite() || self.interest_rate < 0.0 {
            return Err(TrackerError::InvalidInterestRate(self.interest_rate));
        }

        if let Some(rule) = &self.escalation {
            if !(1..=12).contains(&rule.month) {
                return Err(TrackerError::InvalidEscalationMonth(rule.month));
            }
            if !rule.factor.is_finite() || rule.factor < 1.0 {
                return Err(TrackerError::InvalidEscalationFactor(rule.factor));
            }
        }

        Ok(())
    }
}

impl Default for SavingsPlan {
    fn default() -> Self {
        Self::default_plan()
    }
}

/// Settings used only by the renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory the checklist and calendar are written to
    pub output_dir: String,

    /// Display symbol placed next to amounts
    pub currency_symbol: String,

    /// Day of month the deposit reminder falls on
    pub reminder_day: u32,

    /// How many days before the reminder the alarm fires
    pub alarm_days_before: u32,
}

impl OutputSettings {
    pub fn validate(&self) -> TrackerResult<()> {
        // Day 28 exists in every month
        if !(1..=28).contains(&self.reminder_day) {
            return Err(TrackerError::InvalidReminderDay(self.reminder_day));
        }
        Ok(())
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            currency_symbol: "₹".to_string(),
            reminder_day: 5,
            alarm_days_before: 1,
        }
    }
}

/// Complete tracker configuration as stored in a JSON config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default)]
    pub plan: SavingsPlan,

    #[serde(default)]
    pub output: OutputSettings,
}

impl TrackerConfig {
    pub fn validate(&self) -> TrackerResult<()> {
        self.plan.validate()?;
        self.output.validate()
    }
}
