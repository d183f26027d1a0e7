//! Period records and projection output structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar month of the savings schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,

    /// Calendar month (1-12)
    pub month: u32,

    /// Contribution scheduled for this month, in whole units
    pub contribution_amount: u64,

    /// First day of the month
    pub period_start_date: NaiveDate,
}

impl Period {
    /// English month name, e.g. "April"
    pub fn month_name(&self) -> String {
        self.period_start_date.format("%B").to_string()
    }
}

/// A period together with the balance held before its contribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccumulatedPeriod {
    #[serde(flatten)]
    pub period: Period,

    /// Compounded balance before this month's contribution, rounded to 2 dp
    pub pre_accumulated_balance: f64,
}

impl AccumulatedPeriod {
    pub fn year(&self) -> i32 {
        self.period.year
    }

    pub fn month(&self) -> u32 {
        self.period.month
    }

    pub fn month_name(&self) -> String {
        self.period.month_name()
    }

    pub fn contribution_amount(&self) -> u64 {
        self.period.contribution_amount
    }

    pub fn period_start_date(&self) -> NaiveDate {
        self.period.period_start_date
    }
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Monthly rows in chronological order
    pub periods: Vec<AccumulatedPeriod>,

    /// Full-precision balance after the last month's contribution and interest
    pub closing_balance: f64,
}

impl ProjectionResult {
    pub fn new() -> Self {
        Self {
            periods: Vec::new(),
            closing_balance: 0.0,
        }
    }

    /// Add a projected month
    pub fn add_row(&mut self, row: AccumulatedPeriod) {
        self.periods.push(row);
    }

    /// The plain schedule, as consumed by the calendar renderer
    pub fn schedule(&self) -> Vec<Period> {
        self.periods.iter().map(|p| p.period.clone()).collect()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_contributed: u64 = self.periods.iter().map(|p| p.contribution_amount()).sum();
        let final_contribution = self.periods.last().map(|p| p.contribution_amount()).unwrap_or(0);

        ProjectionSummary {
            total_months: self.periods.len() as u32,
            total_contributed,
            final_contribution,
            closing_balance: self.closing_balance,
            interest_earned: self.closing_balance - total_contributed as f64,
        }
    }
}

impl Default for ProjectionResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_months: u32,
    pub total_contributed: u64,
    pub final_contribution: u64,
    pub closing_balance: f64,
    pub interest_earned: f64,
}
