//! Months needed for a balance to reach a target

use crate::numeric::{finite_or_zero, non_negative};
use crate::projection::ProjectionState;

/// Default search horizon in years
pub const DEFAULT_MAX_YEARS: u32 = 80;

/// Months until `initial` grows to `target` with monthly contributions at
/// `annual_rate` percent, searching at most `max_years`.
///
/// `Some(0)` when the target is already met; `None` when it cannot be reached
/// (no contribution and no positive rate) or is not reached within the
/// horizon. `None` is a normal outcome, not a fault.
pub fn months_to_target(
    initial: f64,
    monthly_contribution: f64,
    annual_rate: f64,
    target: f64,
    max_years: u32,
) -> Option<u32> {
    let initial = non_negative(initial);
    let contribution = non_negative(monthly_contribution);
    let annual_rate = finite_or_zero(annual_rate);
    let target = finite_or_zero(target);

    if initial >= target {
        return Some(0);
    }
    if contribution <= 0.0 && annual_rate <= 0.0 {
        return None;
    }

    let monthly_rate = annual_rate / 100.0 / 12.0;
    let max_months = max_years.saturating_mul(12);
    let mut state = ProjectionState::new(initial);

    for _ in 0..max_months {
        state.advance_month(contribution, monthly_rate);
        if state.balance >= target {
            return Some(state.month);
        }
    }

    None
}

/// `months_to_target` with the default 80-year horizon, in years
pub fn years_to_target(
    initial: f64,
    monthly_contribution: f64,
    annual_rate: f64,
    target: f64,
) -> Option<f64> {
    months_to_target(initial, monthly_contribution, annual_rate, target, DEFAULT_MAX_YEARS)
        .map(|months| months as f64 / 12.0)
}
