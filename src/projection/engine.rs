//! Core projection engine for monthly compounding savings projections

use super::periods::{AccumulatedPeriod, Period, ProjectionResult};
use super::schedule::{first_of_month, generate_schedule};
use super::state::AccumulationState;
use crate::plan::SavingsPlan;

/// Attach the pre-contribution balance to each period.
///
/// Interest compounds once per period on the balance plus that period's
/// contribution. The output has the same length and order as `periods`.
pub fn accumulate(periods: &[Period], interest_rate: f64) -> Vec<AccumulatedPeriod> {
    accumulate_with_closing(periods, interest_rate).0
}

/// Same as [`accumulate`], also returning the full-precision balance after the last period
fn accumulate_with_closing(periods: &[Period], interest_rate: f64) -> (Vec<AccumulatedPeriod>, f64) {
    let mut state = AccumulationState::new(interest_rate);
    let mut rows = Vec::with_capacity(periods.len());

    for period in periods {
        rows.push(AccumulatedPeriod {
            period: period.clone(),
            pre_accumulated_balance: state.recorded_balance(),
        });
        state.advance_month(period.contribution_amount);
    }

    (rows, state.balance)
}

/// Main projection engine
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    plan: SavingsPlan,
}

impl ProjectionEngine {
    /// Create a new projection engine for a plan.
    ///
    /// The plan is expected to have passed `SavingsPlan::validate`.
    pub fn new(plan: SavingsPlan) -> Self {
        Self { plan }
    }

    /// Contribution schedule for the plan's date range
    pub fn schedule(&self) -> Vec<Period> {
        if first_of_month(self.plan.end_date) < first_of_month(self.plan.start_date) {
            log::warn!(
                "End date {} is before start date {}; projection is empty",
                self.plan.end_date,
                self.plan.start_date
            );
        }

        generate_schedule(
            self.plan.start_date,
            self.plan.end_date,
            self.plan.initial_contribution,
            self.plan.escalation.as_ref(),
        )
    }

    /// Run the full projection: schedule, then accumulation
    pub fn project(&self) -> ProjectionResult {
        let schedule = self.schedule();
        let (rows, closing_balance) = accumulate_with_closing(&schedule, self.plan.interest_rate);

        let mut result = ProjectionResult::new();
        for row in rows {
            result.add_row(row);
        }
        result.closing_balance = closing_balance;

        log::debug!(
            "Projected {} months at {} per period, closing balance {:.2}",
            result.periods.len(),
            self.plan.interest_rate,
            result.closing_balance
        );

        result
    }
}
