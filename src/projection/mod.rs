//! Projection engine: monthly schedule generation and compound accumulation

mod periods;
mod schedule;
mod state;
mod engine;

pub use periods::{AccumulatedPeriod, Period, ProjectionResult, ProjectionSummary};
pub use schedule::{first_of_month, generate_schedule, months_between_inclusive};
pub use state::{round_to_cents, AccumulationState};
pub use engine::{accumulate, ProjectionEngine};
