//! Emergency fund sizing

use serde::{Deserialize, Serialize};

use super::HealthStatus;
use crate::household::IncomeStability;
use crate::numeric::{non_negative, safe_div};

/// Dependents beyond this count add no further months
pub const MAX_DEPENDENT_MONTHS: u32 = 4;

/// Coverage (months) below which the fund is a risk
const MIN_COVERAGE_MONTHS: f64 = 3.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyFundInput {
    pub monthly_expenses: f64,
    pub monthly_debt_payments: f64,
    pub current_fund: f64,
    pub dependents: u32,
    pub income_stability: IncomeStability,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyFundResult {
    pub recommended_months: u32,
    pub recommended_amount: f64,
    /// Months of outflow the current fund covers
    pub current_coverage: f64,
    /// Amount still missing (>= 0)
    pub gap: f64,
    pub status: HealthStatus,
}

pub fn advise_emergency_fund(input: &EmergencyFundInput) -> EmergencyFundResult {
    let monthly_need =
        non_negative(input.monthly_expenses) + non_negative(input.monthly_debt_payments);
    let current_fund = non_negative(input.current_fund);

    let recommended_months =
        input.income_stability.base_months() + input.dependents.min(MAX_DEPENDENT_MONTHS);
    let recommended_amount = monthly_need * recommended_months as f64;
    let current_coverage = safe_div(current_fund, monthly_need);
    let gap = (recommended_amount - current_fund).max(0.0);

    let status = if current_coverage >= recommended_months as f64 {
        HealthStatus::Good
    } else if current_coverage >= MIN_COVERAGE_MONTHS {
        HealthStatus::Attention
    } else {
        HealthStatus::Risk
    };

    EmergencyFundResult {
        recommended_months,
        recommended_amount,
        current_coverage,
        gap,
        status,
    }
}
