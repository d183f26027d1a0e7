//! Error types for plan validation and output I/O

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid interest rate: {0} (must be finite and non-negative)")]
    InvalidInterestRate(f64),

    #[error("Invalid escalation month: {0} (expected 1-12)")]
    InvalidEscalationMonth(u32),

    #[error("Invalid escalation factor: {0} (must be finite and at least 1.0)")]
    InvalidEscalationFactor(f64),

    #[error("Invalid reminder day: {0} (expected 1-28)")]
    InvalidReminderDay(u32),
}

pub type TrackerResult<T> = Result<T, TrackerError>;
