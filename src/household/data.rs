//! Household input records

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::numeric::{clamp_finite, finite_or_zero, non_negative};

/// Bounds for the effective tax rate (percent)
pub const TAX_RATE_BOUNDS: (f64, f64) = (0.0, 60.0);
/// Bounds for the FIRE safe withdrawal rate (percent)
pub const WITHDRAWAL_RATE_BOUNDS: (f64, f64) = (1.0, 10.0);
/// Bounds for the goal horizon (years)
pub const HORIZON_BOUNDS: (f64, f64) = (1.0, 80.0);

/// Consolidated monthly picture of a household, the single input of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaioXInput {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub monthly_savings: f64,
    pub monthly_investments: f64,
    pub monthly_debt_payments: f64,

    pub total_debt: f64,
    pub emergency_fund: f64,
    pub net_worth: f64,

    /// Annual nominal return (percent)
    pub annual_return_rate: f64,
    /// Annual inflation (percent)
    pub inflation_rate: f64,
    /// Effective tax on returns (percent, 0-60)
    pub tax_rate: f64,
    /// Goal horizon in years (1-80)
    pub years_to_goal: f64,

    /// Annual expenses to be funded once financially independent
    pub fire_annual_expenses: f64,
    /// Safe withdrawal rate (percent, 1-10)
    pub fire_withdrawal_rate: f64,
}

impl Default for RaioXInput {
    fn default() -> Self {
        Self {
            monthly_income: 0.0,
            monthly_expenses: 0.0,
            monthly_savings: 0.0,
            monthly_investments: 0.0,
            monthly_debt_payments: 0.0,
            total_debt: 0.0,
            emergency_fund: 0.0,
            net_worth: 0.0,
            annual_return_rate: 7.0,
            inflation_rate: 2.0,
            tax_rate: 28.0,
            years_to_goal: 20.0,
            fire_annual_expenses: 0.0,
            fire_withdrawal_rate: 4.0,
        }
    }
}

impl RaioXInput {
    /// Copy with every field coerced into its valid domain.
    ///
    /// Amounts are floored at 0, return and inflation may stay negative,
    /// tax/withdrawal/horizon are clamped and non-finite values become 0.
    pub fn sanitized(&self) -> Self {
        let clean = Self {
            monthly_income: non_negative(self.monthly_income),
            monthly_expenses: non_negative(self.monthly_expenses),
            monthly_savings: non_negative(self.monthly_savings),
            monthly_investments: non_negative(self.monthly_investments),
            monthly_debt_payments: non_negative(self.monthly_debt_payments),
            total_debt: non_negative(self.total_debt),
            emergency_fund: non_negative(self.emergency_fund),
            net_worth: non_negative(self.net_worth),
            annual_return_rate: finite_or_zero(self.annual_return_rate),
            inflation_rate: finite_or_zero(self.inflation_rate),
            tax_rate: clamp_finite(self.tax_rate, TAX_RATE_BOUNDS.0, TAX_RATE_BOUNDS.1),
            years_to_goal: clamp_finite(self.years_to_goal, HORIZON_BOUNDS.0, HORIZON_BOUNDS.1),
            fire_annual_expenses: non_negative(self.fire_annual_expenses),
            fire_withdrawal_rate: clamp_finite(
                self.fire_withdrawal_rate,
                WITHDRAWAL_RATE_BOUNDS.0,
                WITHDRAWAL_RATE_BOUNDS.1,
            ),
        };

        if clean != *self {
            log::warn!("household input required coercion into valid ranges");
        }
        clean
    }

    /// Combined monthly amount put aside (savings + investments)
    pub fn monthly_contribution(&self) -> f64 {
        self.monthly_savings + self.monthly_investments
    }

    /// Monthly outflow that an emergency fund must cover
    pub fn monthly_need(&self) -> f64 {
        self.monthly_expenses + self.monthly_debt_payments
    }
}

/// A single debt in a payoff plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub name: String,
    pub balance: f64,
    /// Annual interest rate (percent)
    pub annual_rate: f64,
    pub minimum_payment: f64,
}

impl Debt {
    pub fn new(
        name: impl Into<String>,
        balance: f64,
        annual_rate: f64,
        minimum_payment: f64,
    ) -> Self {
        Self {
            name: name.into(),
            balance,
            annual_rate,
            minimum_payment,
        }
    }

    /// Copy with non-negative finite balance, rate and payment
    pub fn sanitized(&self) -> Self {
        Self {
            name: self.name.clone(),
            balance: non_negative(self.balance),
            annual_rate: non_negative(self.annual_rate),
            minimum_payment: non_negative(self.minimum_payment),
        }
    }

    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate / 100.0 / 12.0
    }
}

/// How predictable the household income is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeStability {
    #[default]
    Stable,
    Variable,
    Freelance,
}

impl IncomeStability {
    /// Months of expenses an emergency fund should hold before dependents
    pub fn base_months(&self) -> u32 {
        match self {
            IncomeStability::Stable => 6,
            IncomeStability::Variable => 9,
            IncomeStability::Freelance => 12,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeStability::Stable => "stable",
            IncomeStability::Variable => "variable",
            IncomeStability::Freelance => "freelance",
        }
    }
}

impl fmt::Display for IncomeStability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IncomeStability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stable" => Ok(IncomeStability::Stable),
            "variable" => Ok(IncomeStability::Variable),
            "freelance" => Ok(IncomeStability::Freelance),
            other => Err(format!("Unknown income stability: {}", other)),
        }
    }
}
