//! Return on investment over a holding period

use serde::{Deserialize, Serialize};

use crate::numeric::{finite_or_zero, non_negative, percent_of};

/// Floor for `1 + roi` before annualizing
const MIN_GROWTH_BASE: f64 = 0.0001;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiInput {
    pub initial_cost: f64,
    pub current_value: f64,
    /// Dividends, rent or other cash received (may be negative for costs)
    pub additional_cash_flow: f64,
    pub holding_months: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiResult {
    pub net_gain: f64,
    /// Simple ROI (percent)
    pub roi: f64,
    /// Geometric annualized ROI (percent)
    pub annualized_roi: f64,
}

pub fn calculate_roi(input: &RoiInput) -> RoiResult {
    let initial_cost = non_negative(input.initial_cost);
    let current_value = non_negative(input.current_value);
    let cash_flow = finite_or_zero(input.additional_cash_flow);
    let months = finite_or_zero(input.holding_months).max(1.0);

    let final_value = current_value + cash_flow;
    let net_gain = final_value - initial_cost;
    let roi = percent_of(net_gain, initial_cost);

    // A total loss would put a negative base under a fractional power
    let base = (1.0 + roi / 100.0).max(MIN_GROWTH_BASE);
    let annualized_roi = finite_or_zero((base.powf(12.0 / months) - 1.0) * 100.0);

    RoiResult {
        net_gain,
        roi,
        annualized_roi,
    }
}
