//! Savings Tracker - monthly compounding savings projection
//!
//! This library provides:
//! - Monthly contribution schedules with a recurring annual step-up
//! - Compound accumulation of the running balance
//! - Checklist (Markdown), calendar reminder (iCalendar) and CSV renderers
//! - Side-by-side comparison of several interest rates

pub mod error;
pub mod plan;
pub mod projection;
pub mod render;
pub mod scenario;

// Re-export commonly used types
pub use error::{TrackerError, TrackerResult};
pub use plan::{EscalationRule, OutputSettings, SavingsPlan, TrackerConfig};
pub use projection::{accumulate, generate_schedule, AccumulatedPeriod, Period, ProjectionEngine, ProjectionResult};
pub use scenario::ScenarioRunner;
