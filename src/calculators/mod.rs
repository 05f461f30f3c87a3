//! Leaf calculators
//!
//! Each calculator is independent of the others and can be called directly;
//! the report builder composes them.

pub mod budget;
pub mod debt;
pub mod emergency;
pub mod retirement;
pub mod roi;
pub mod target;

pub use budget::{analyze_budget, BudgetInput, BudgetResult, BudgetRule};
pub use debt::{simulate_debt_payoff, DebtPayoffInput, DebtPayoffResult, MAX_PAYOFF_MONTHS};
pub use emergency::{advise_emergency_fund, EmergencyFundInput, EmergencyFundResult};
pub use retirement::{plan_retirement, RetirementInput, RetirementResult};
pub use roi::{calculate_roi, RoiInput, RoiResult};
pub use target::{months_to_target, years_to_target, DEFAULT_MAX_YEARS};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Traffic-light classification shared by calculators and report metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Good,
    Attention,
    Risk,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Good => "good",
            HealthStatus::Attention => "attention",
            HealthStatus::Risk => "risk",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
