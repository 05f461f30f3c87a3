//! Projection input and output records

use serde::{Deserialize, Serialize};

/// Parameters of a compound-growth projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentProjectionInput {
    pub initial_amount: f64,
    pub monthly_contribution: f64,
    /// Annual rate (percent), compounded monthly
    pub annual_rate: f64,
    pub years: f64,
}

/// One simulated month of a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionRow {
    pub month: u32,
    pub contribution: f64,
    pub interest: f64,
    pub balance: f64,
    pub total_contributions: f64,
}

/// Result of a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentProjectionResult {
    pub final_balance: f64,
    /// Initial amount plus all monthly contributions
    pub total_contributions: f64,
    pub total_interest: f64,

    /// Month-by-month rows, only filled when requested
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schedule: Vec<ProjectionRow>,
}

impl InvestmentProjectionResult {
    /// Months covered by the schedule (0 when no schedule was recorded)
    pub fn schedule_months(&self) -> usize {
        self.schedule.len()
    }

    /// Balance at the end of each year of the schedule
    pub fn yearly_balances(&self) -> Vec<f64> {
        self.schedule
            .iter()
            .filter(|row| row.month % 12 == 0)
            .map(|row| row.balance)
            .collect()
    }
}
