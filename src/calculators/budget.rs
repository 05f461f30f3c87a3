//! Monthly budget against the 50/30/20 rule

use serde::{Deserialize, Serialize};

use super::HealthStatus;
use crate::numeric::{non_negative, percent_of};

/// Months of essential outflow an emergency fund should cover
pub const EMERGENCY_FUND_MONTHS: f64 = 6.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetInput {
    pub income: f64,
    /// Rent, utilities and other committed costs
    pub fixed_expenses: f64,
    /// Discretionary spending
    pub variable_expenses: f64,
    pub debt_payments: f64,
    pub investments: f64,
}

/// Shares of income per 50/30/20 bucket (percent)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetRule {
    pub needs_pct: f64,
    pub wants_pct: f64,
    pub savings_pct: f64,
    pub status: HealthStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetResult {
    pub total_expenses: f64,
    pub free_cash_flow: f64,
    /// (investments + positive free cash flow) / income (percent)
    pub savings_rate: f64,
    pub recommended_emergency_fund: f64,
    pub rule: BudgetRule,
}

pub fn analyze_budget(input: &BudgetInput) -> BudgetResult {
    let income = non_negative(input.income);
    let fixed = non_negative(input.fixed_expenses);
    let variable = non_negative(input.variable_expenses);
    let debt = non_negative(input.debt_payments);
    let investments = non_negative(input.investments);

    let total_expenses = fixed + variable + debt + investments;
    let free_cash_flow = income - total_expenses;
    let saved = investments + free_cash_flow.max(0.0);

    let needs_pct = percent_of(fixed + debt, income);
    let wants_pct = percent_of(variable, income);
    let savings_pct = percent_of(saved, income);

    BudgetResult {
        total_expenses,
        free_cash_flow,
        savings_rate: savings_pct,
        recommended_emergency_fund: (fixed + variable + debt) * EMERGENCY_FUND_MONTHS,
        rule: BudgetRule {
            needs_pct,
            wants_pct,
            savings_pct,
            status: classify_rule(needs_pct, wants_pct, savings_pct),
        },
    }
}

fn classify_rule(needs_pct: f64, wants_pct: f64, savings_pct: f64) -> HealthStatus {
    if needs_pct <= 55.0 && wants_pct <= 35.0 && savings_pct >= 15.0 {
        HealthStatus::Good
    } else if needs_pct <= 65.0 && savings_pct >= 10.0 {
        HealthStatus::Attention
    } else {
        HealthStatus::Risk
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> BudgetInput {
        BudgetInput {
            income: 3_000.0,
            fixed_expenses: 1_200.0,
            variable_expenses: 600.0,
            debt_payments: 300.0,
            investments: 300.0,
        }
    }

    #[test]
    fn test_fifty_thirty_twenty_good() {
        let result = analyze_budget(&sample());

        assert_relative_eq!(result.total_expenses, 2_400.0);
        assert_relative_eq!(result.free_cash_flow, 600.0);
        assert_relative_eq!(result.rule.needs_pct, 50.0);
        assert_relative_eq!(result.rule.wants_pct, 20.0);
        assert_relative_eq!(result.rule.savings_pct, 30.0);
        assert_relative_eq!(result.savings_rate, 30.0);
        assert_relative_eq!(result.recommended_emergency_fund, 12_600.0);
        assert_eq!(result.rule.status, HealthStatus::Good);
    }

    #[test]
    fn test_attention_and_risk() {
        // needs 60%, savings 10%
        let attention = analyze_budget(&BudgetInput {
            fixed_expenses: 1_500.0,
            variable_expenses: 900.0,
            investments: 300.0,
            ..sample()
        });
        assert_eq!(attention.rule.status, HealthStatus::Attention);

        let risk = analyze_budget(&BudgetInput {
            fixed_expenses: 2_200.0,
            investments: 0.0,
            ..sample()
        });
        assert_eq!(risk.rule.status, HealthStatus::Risk);
        assert!(risk.free_cash_flow < 0.0);
    }

    #[test]
    fn test_zero_income_yields_zero_percentages() {
        let result = analyze_budget(&BudgetInput { income: 0.0, ..sample() });

        assert_eq!(result.savings_rate, 0.0);
        assert_eq!(result.rule.needs_pct, 0.0);
        assert_eq!(result.rule.wants_pct, 0.0);
        assert_eq!(result.rule.savings_pct, 0.0);
        assert_eq!(result.rule.status, HealthStatus::Risk);
    }
}
