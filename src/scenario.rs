//! Scenario runner for comparing one plan across several interest rates

use std::io::Write;

use rayon::prelude::*;
use serde::Serialize;

use crate::error::TrackerResult;
use crate::plan::SavingsPlan;
use crate::projection::{ProjectionEngine, ProjectionResult};

/// Outcome of one rate scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSummary {
    pub interest_rate: f64,
    pub total_months: u32,
    pub total_contributed: u64,
    pub final_contribution: u64,
    pub closing_balance: f64,
    pub interest_earned: f64,
}

/// Runs a base plan under different interest rates
///
/// # Example
/// ```
/// use savings_tracker::{SavingsPlan, ScenarioRunner};
///
/// let runner = ScenarioRunner::new(SavingsPlan::default_plan());
/// let summaries = runner.run_rates(&[0.01, 0.02, 0.025]);
/// assert_eq!(summaries.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_plan: SavingsPlan,
}

impl ScenarioRunner {
    pub fn new(base_plan: SavingsPlan) -> Self {
        Self { base_plan }
    }

    /// Project the base plan at a single rate
    pub fn run(&self, interest_rate: f64) -> ProjectionResult {
        ProjectionEngine::new(self.base_plan.with_interest_rate(interest_rate)).project()
    }

    /// Summaries for each rate, in the order given. Rates are projected in parallel.
    pub fn run_rates(&self, rates: &[f64]) -> Vec<ScenarioSummary> {
        log::info!("Running {} rate scenarios", rates.len());
        rates
            .par_iter()
            .map(|&rate| {
                let summary = self.run(rate).summary();
                ScenarioSummary {
                    interest_rate: rate,
                    total_months: summary.total_months,
                    total_contributed: summary.total_contributed,
                    final_contribution: summary.final_contribution,
                    closing_balance: summary.closing_balance,
                    interest_earned: summary.interest_earned,
                }
            })
            .collect()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new(SavingsPlan::default_plan())
    }
}

/// Write scenario summaries as CSV
pub fn write_scenarios_csv<W: Write>(writer: W, summaries: &[ScenarioSummary]) -> TrackerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for summary in summaries {
        csv_writer.serialize(summary)?;
    }
    csv_writer.flush()?;
    Ok(())
}
