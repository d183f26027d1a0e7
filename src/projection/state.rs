//! Running balance tracked across the projection

/// Round to 2 decimal places, ties away from zero
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Balance state carried from one month to the next
#[derive(Debug, Clone)]
pub struct AccumulationState {
    /// Full-precision balance after the last processed month.
    /// Never rounded in place; rounding happens only when a value is recorded.
    pub balance: f64,

    /// Per-period compounding rate
    pub interest_rate: f64,
}

impl AccumulationState {
    pub fn new(interest_rate: f64) -> Self {
        Self {
            balance: 0.0,
            interest_rate,
        }
    }

    /// Balance before the next contribution, as recorded in the output
    pub fn recorded_balance(&self) -> f64 {
        round_to_cents(self.balance)
    }

    /// Add this month's contribution and compound once
    pub fn advance_month(&mut self, contribution: u64) {
        self.balance = (self.balance + contribution as f64) * (1.0 + self.interest_rate);
    }
}
