//! Retirement capital and required monthly contribution

use serde::{Deserialize, Serialize};

use crate::household::WITHDRAWAL_RATE_BOUNDS;
use crate::numeric::{clamp_finite, finite_or_zero, non_negative, safe_div, years_to_months};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementInput {
    pub monthly_expenses_today: f64,
    pub years_to_retirement: f64,
    /// Annual inflation (percent)
    pub inflation_rate: f64,
    /// Safe withdrawal rate (percent, clamped to 1-10)
    pub withdrawal_rate: f64,
    pub current_capital: f64,
    /// Expected annual return until retirement (percent)
    pub expected_return_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementResult {
    /// Annual spending need expressed in retirement-date money
    pub annual_need_at_retirement: f64,
    /// Capital whose withdrawal-rate yield covers the annual need
    pub target_capital: f64,
    /// What today's capital grows to by retirement
    pub future_value_of_current_capital: f64,
    /// Part of the target not covered by today's capital (>= 0)
    pub shortfall: f64,
    /// Monthly contribution closing the shortfall (>= 0)
    pub required_monthly_contribution: f64,
}

/// Inflate today's expenses to retirement and solve for the contribution
pub fn plan_retirement(input: &RetirementInput) -> RetirementResult {
    let monthly_expenses = non_negative(input.monthly_expenses_today);
    let years = non_negative(input.years_to_retirement);
    let inflation = finite_or_zero(input.inflation_rate);
    let withdrawal_rate = clamp_finite(
        input.withdrawal_rate,
        WITHDRAWAL_RATE_BOUNDS.0,
        WITHDRAWAL_RATE_BOUNDS.1,
    );
    let current_capital = non_negative(input.current_capital);
    let expected_return = finite_or_zero(input.expected_return_rate);

    let annual_need_at_retirement =
        finite_or_zero(monthly_expenses * 12.0 * (1.0 + inflation / 100.0).powf(years));
    let target_capital = safe_div(annual_need_at_retirement, withdrawal_rate / 100.0);

    let months = years_to_months(years);
    let monthly_rate = expected_return / 100.0 / 12.0;
    let growth = (1.0 + monthly_rate).powf(months as f64);

    let future_value_of_current_capital = finite_or_zero(current_capital * growth);
    let shortfall = (target_capital - future_value_of_current_capital).max(0.0);

    // Ordinary annuity: FV = PMT * ((1+r)^n - 1) / r, degenerating to n at r = 0
    let annuity_factor = if monthly_rate == 0.0 {
        months as f64
    } else {
        (growth - 1.0) / monthly_rate
    };
    let required_monthly_contribution = safe_div(shortfall, annuity_factor).max(0.0);

    RetirementResult {
        annual_need_at_retirement,
        target_capital,
        future_value_of_current_capital,
        shortfall,
        required_monthly_contribution,
    }
}
