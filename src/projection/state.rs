//! Running state of a compound-growth projection

/// Balance and contribution totals at a point in the projection
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Months elapsed (0 before the first month is simulated)
    pub month: u32,

    /// Current balance
    pub balance: f64,

    /// Initial amount plus every contribution made so far
    pub total_contributions: f64,
}

impl ProjectionState {
    pub fn new(initial_amount: f64) -> Self {
        Self {
            month: 0,
            balance: initial_amount,
            total_contributions: initial_amount,
        }
    }

    /// Simulate one month: deposit first, then compound.
    ///
    /// The order matters: the month's deposit earns that month's interest.
    /// Returns the interest credited.
    pub fn advance_month(&mut self, contribution: f64, monthly_rate: f64) -> f64 {
        self.month += 1;
        self.balance += contribution;
        self.total_contributions += contribution;

        let before = self.balance;
        self.balance *= 1.0 + monthly_rate;
        self.balance - before
    }

    /// Growth earned so far, floored at 0
    pub fn total_interest(&self) -> f64 {
        (self.balance - self.total_contributions).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit_earns_interest_in_same_month() {
        let mut state = ProjectionState::new(0.0);
        let interest = state.advance_month(100.0, 0.01);

        assert!((interest - 1.0).abs() < 1e-12);
        assert!((state.balance - 101.0).abs() < 1e-12);
        assert_eq!(state.total_contributions, 100.0);
        assert_eq!(state.month, 1);
    }

    #[test]
    fn test_total_interest_floored() {
        let mut state = ProjectionState::new(1_000.0);
        state.advance_month(0.0, -0.5);
        assert_eq!(state.total_interest(), 0.0);

        let mut state = ProjectionState::new(1_000.0);
        state.advance_month(0.0, 0.01);
        assert!((state.total_interest() - 10.0).abs() < 1e-9);
    }
}
