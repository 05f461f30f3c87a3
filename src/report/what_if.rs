//! Counterfactual ("what-if") projections

use super::summary::WhatIfScenario;
use crate::assumptions::ScenarioAssumptions;
use crate::calculators::months_to_target;
use crate::household::RaioXInput;
use crate::numeric::years_to_months;
use crate::projection::project_investment;

pub const NO_DEBT: &str = "no_debt";
pub const HIGHER_INCOME: &str = "higher_income";
pub const LIFESTYLE_INFLATION: &str = "lifestyle_inflation";

/// Shared inputs of every what-if run
#[derive(Debug, Clone)]
pub struct WhatIfBase<'a> {
    pub input: &'a RaioXInput,
    pub annual_rate: f64,
    /// Projection the deltas are measured against
    pub base_projection: f64,
    pub fire_target: f64,
}

impl WhatIfBase<'_> {
    fn years_to_fire(&self, contribution: f64, settings: &ScenarioAssumptions) -> Option<f64> {
        months_to_target(
            self.input.net_worth,
            contribution,
            self.annual_rate,
            self.fire_target,
            settings.fire_horizon_years,
        )
        .map(|m| m as f64 / 12.0)
    }

    fn with_contribution(
        &self,
        key: &str,
        label: &str,
        description: String,
        contribution: f64,
        settings: &ScenarioAssumptions,
    ) -> WhatIfScenario {
        let projected = project_investment(
            self.input.net_worth,
            contribution,
            self.annual_rate,
            self.input.years_to_goal,
        )
        .final_balance;

        WhatIfScenario {
            key: key.to_string(),
            label: label.to_string(),
            description,
            projected_net_worth: projected,
            delta: projected - self.base_projection,
            years_to_fire: self.years_to_fire(contribution, settings),
        }
    }
}

/// Build the three what-if scenarios
pub fn build_what_ifs(
    base: &WhatIfBase<'_>,
    settings: &ScenarioAssumptions,
) -> Vec<WhatIfScenario> {
    vec![
        no_debt(base, settings),
        higher_income(base, settings),
        lifestyle_inflation(base, settings),
    ]
}

/// Debt payments redirected into the monthly contribution
fn no_debt(base: &WhatIfBase<'_>, settings: &ScenarioAssumptions) -> WhatIfScenario {
    let input = base.input;
    base.with_contribution(
        NO_DEBT,
        "Debt-free",
        format!(
            "Monthly debt payments of {:.2} are invested instead.",
            input.monthly_debt_payments
        ),
        input.monthly_contribution() + input.monthly_debt_payments,
        settings,
    )
}

/// Part of a higher income redirected into the monthly contribution
fn higher_income(base: &WhatIfBase<'_>, settings: &ScenarioAssumptions) -> WhatIfScenario {
    let input = base.input;
    let boost = input.monthly_income * settings.income_boost;
    base.with_contribution(
        HIGHER_INCOME,
        &format!("+{:.0}% income", settings.income_boost * 100.0),
        format!("An extra {:.2} of monthly income is fully invested.", boost),
        input.monthly_contribution() + boost,
        settings,
    )
}

/// Expenses grow every year and eat into the contribution.
///
/// The projected balance is simulated year by year, while the FIRE estimate
/// uses a single contribution reduced by the expense growth reached at the
/// horizon. The two approximations diverge on long horizons.
fn lifestyle_inflation(base: &WhatIfBase<'_>, settings: &ScenarioAssumptions) -> WhatIfScenario {
    let input = base.input;
    let growth = settings.lifestyle_growth;
    let contribution = input.monthly_contribution();
    let expenses = input.monthly_expenses;

    let total_months = years_to_months(input.years_to_goal);
    let mut balance = input.net_worth;
    let mut month = 0;
    let mut year = 0;
    while month < total_months {
        let chunk = (total_months - month).min(12);
        let extra_expenses = expenses * ((1.0 + growth).powi(year) - 1.0);
        let year_contribution = (contribution - extra_expenses).max(0.0);

        let years = chunk as f64 / 12.0;
        balance =
            project_investment(balance, year_contribution, base.annual_rate, years).final_balance;
        month += chunk;
        year += 1;
    }

    let horizon_growth = expenses * ((1.0 + growth).powf(input.years_to_goal) - 1.0);
    let reduced_contribution = (contribution - horizon_growth).max(0.0);

    WhatIfScenario {
        key: LIFESTYLE_INFLATION.to_string(),
        label: "Lifestyle inflation".to_string(),
        description: format!(
            "Monthly expenses grow {:.0}% a year and the increase comes out of savings.",
            growth * 100.0
        ),
        projected_net_worth: balance,
        delta: balance - base.base_projection,
        years_to_fire: base.years_to_fire(reduced_contribution, settings),
    }
}
