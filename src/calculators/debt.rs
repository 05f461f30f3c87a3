//! Avalanche debt payoff simulation
//!
//! Each plan is simulated month by month: interest accrues, minimums are
//! paid, then any extra budget goes to the highest-rate debt still open.
//! Minimums of debts already paid off are not rolled into the extra budget,
//! so schedules are irregular and no closed form applies across debts.

use serde::{Deserialize, Serialize};

use crate::household::Debt;
use crate::numeric::non_negative;

/// Simulation cap (50 years)
pub const MAX_PAYOFF_MONTHS: u32 = 600;

/// Balance at or below which a debt counts as repaid
const PAID_OFF_THRESHOLD: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtPayoffInput {
    pub debts: Vec<Debt>,
    pub extra_monthly_payment: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DebtPayoffResult {
    pub total_debt: f64,
    pub total_minimum_payments: f64,
    /// Months to repay everything with minimum payments only
    pub months_to_payoff: u32,
    pub total_interest_paid: f64,
    pub months_with_extra: u32,
    pub total_interest_with_extra: f64,
    pub interest_saved: f64,
    /// Debt names in the order they are repaid under the extra-payment plan
    pub payoff_order: Vec<String>,
}

/// Outcome of one simulated plan
#[derive(Debug, Clone)]
struct PayoffRun {
    months: u32,
    total_interest: f64,
    payoff_order: Vec<String>,
}

pub fn simulate_debt_payoff(input: &DebtPayoffInput) -> DebtPayoffResult {
    let debts: Vec<Debt> = input.debts.iter().map(Debt::sanitized).collect();
    let extra = non_negative(input.extra_monthly_payment);

    let total_debt: f64 = debts.iter().map(|d| d.balance).sum();
    if total_debt <= 0.0 {
        return DebtPayoffResult::default();
    }
    let total_minimum_payments: f64 = debts.iter().map(|d| d.minimum_payment).sum();

    let minimum_only = simulate_payoff(&debts, 0.0);
    let with_extra = simulate_payoff(&debts, extra);

    log::debug!(
        "Debt payoff: {} debts, {:.2} total, {} months minimum-only, {} months with {:.2} extra",
        debts.len(),
        total_debt,
        minimum_only.months,
        with_extra.months,
        extra
    );

    DebtPayoffResult {
        total_debt,
        total_minimum_payments,
        months_to_payoff: minimum_only.months,
        total_interest_paid: minimum_only.total_interest,
        months_with_extra: with_extra.months,
        total_interest_with_extra: with_extra.total_interest,
        interest_saved: (minimum_only.total_interest - with_extra.total_interest).max(0.0),
        payoff_order: with_extra.payoff_order,
    }
}

/// Simulate one repayment plan with a fixed monthly extra budget
fn simulate_payoff(debts: &[Debt], extra_monthly_payment: f64) -> PayoffRun {
    let mut balances: Vec<f64> = debts.iter().map(|d| d.balance).collect();
    let mut total_interest = 0.0;
    let mut payoff_order = Vec::new();
    let mut months = 0;

    // Debts starting at zero are never "paid off" during the run
    let mut open: Vec<bool> = balances.iter().map(|&b| b > PAID_OFF_THRESHOLD).collect();

    while months < MAX_PAYOFF_MONTHS && balances.iter().any(|&b| b > PAID_OFF_THRESHOLD) {
        months += 1;

        for (balance, debt) in balances.iter_mut().zip(debts) {
            if *balance <= 0.0 {
                continue;
            }
            let interest = *balance * debt.monthly_rate();
            *balance += interest;
            total_interest += interest;
            let payment = balance.min(debt.minimum_payment);
            *balance -= payment;
        }

        // Re-rank every month: a debt repaid mid-run changes the order
        let mut by_rate: Vec<usize> = (0..debts.len()).filter(|&i| balances[i] > 0.0).collect();
        by_rate.sort_by(|&a, &b| debts[b].annual_rate.total_cmp(&debts[a].annual_rate));

        let mut remaining_extra = extra_monthly_payment;
        for idx in by_rate {
            if remaining_extra <= 0.0 {
                break;
            }
            let payment = balances[idx].min(remaining_extra);
            balances[idx] -= payment;
            remaining_extra -= payment;
        }

        for (idx, balance) in balances.iter().enumerate() {
            if open[idx] && *balance <= PAID_OFF_THRESHOLD {
                open[idx] = false;
                payoff_order.push(debts[idx].name.clone());
            }
        }
    }

    PayoffRun {
        months,
        total_interest,
        payoff_order,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_debts() -> Vec<Debt> {
        vec![
            Debt::new("Car loan", 8_000.0, 6.5, 210.0),
            Debt::new("Credit card", 2_500.0, 19.9, 75.0),
            Debt::new("Personal loan", 4_000.0, 11.0, 120.0),
        ]
    }

    #[test]
    fn test_empty_and_zero_balances_short_circuit() {
        let empty = simulate_debt_payoff(&DebtPayoffInput {
            debts: vec![],
            extra_monthly_payment: 100.0,
        });
        assert_eq!(empty.total_debt, 0.0);
        assert_eq!(empty.months_to_payoff, 0);
        assert_eq!(empty.months_with_extra, 0);
        assert_eq!(empty.total_minimum_payments, 0.0);

        let zeros = simulate_debt_payoff(&DebtPayoffInput {
            debts: vec![Debt::new("Paid", 0.0, 10.0, 50.0)],
            extra_monthly_payment: 100.0,
        });
        assert_eq!(zeros.total_minimum_payments, 0.0);
        assert_eq!(zeros.interest_saved, 0.0);
    }

    #[test]
    fn test_single_zero_rate_debt() {
        let result = simulate_debt_payoff(&DebtPayoffInput {
            debts: vec![Debt::new("Family", 1_000.0, 0.0, 100.0)],
            extra_monthly_payment: 150.0,
        });
        assert_eq!(result.months_to_payoff, 10);
        assert_eq!(result.months_with_extra, 4);
        assert_eq!(result.total_interest_paid, 0.0);
        assert_eq!(result.payoff_order, vec!["Family".to_string()]);
    }

    #[test]
    fn test_extra_payment_is_monotonic() {
        let result = simulate_debt_payoff(&DebtPayoffInput {
            debts: sample_debts(),
            extra_monthly_payment: 300.0,
        });

        assert!(result.months_with_extra <= result.months_to_payoff);
        assert!(result.total_interest_with_extra <= result.total_interest_paid);
        assert!(result.interest_saved > 0.0);
        assert!((result.total_debt - 14_500.0).abs() < 1e-9);
        assert!((result.total_minimum_payments - 405.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_extra_matches_minimum_plan() {
        let result = simulate_debt_payoff(&DebtPayoffInput {
            debts: sample_debts(),
            extra_monthly_payment: 0.0,
        });
        assert_eq!(result.months_with_extra, result.months_to_payoff);
        assert_eq!(result.total_interest_with_extra, result.total_interest_paid);
        assert_eq!(result.interest_saved, 0.0);
    }

    #[test]
    fn test_avalanche_targets_highest_rate_first() {
        let result = simulate_debt_payoff(&DebtPayoffInput {
            debts: sample_debts(),
            extra_monthly_payment: 500.0,
        });
        assert_eq!(result.payoff_order.first().map(String::as_str), Some("Credit card"));
        assert_eq!(result.payoff_order.len(), 3);
    }

    #[test]
    fn test_never_amortizing_debt_hits_cap() {
        // 2%/month interest on 10k exceeds the 50 minimum
        let result = simulate_debt_payoff(&DebtPayoffInput {
            debts: vec![Debt::new("Payday", 10_000.0, 24.0, 50.0)],
            extra_monthly_payment: 0.0,
        });
        assert_eq!(result.months_to_payoff, MAX_PAYOFF_MONTHS);
        assert!(result.payoff_order.is_empty());
    }
}
