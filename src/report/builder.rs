//! Household report orchestrator

use super::metrics::{build_metrics, composite_score};
use super::recommendations::{build_recommendations, RecommendationInputs};
use super::summary::{
    CashFlowRatios, FireTargets, NetWorthProjections, ProjectionScenario, RaioXSummary,
};
use super::what_if::{build_what_ifs, WhatIfBase};
use crate::assumptions::Assumptions;
use crate::calculators::months_to_target;
use crate::household::RaioXInput;
use crate::numeric::{finite_or_zero, percent_of, safe_div};
use crate::projection::project_investment;

/// Builds a `RaioXSummary` from one household input
#[derive(Debug, Clone, Default)]
pub struct SummaryBuilder {
    assumptions: Assumptions,
}

impl SummaryBuilder {
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Run every calculation and assemble the report
    pub fn build(&self, raw: &RaioXInput) -> RaioXSummary {
        let input = raw.sanitized();
        let settings = &self.assumptions.scenarios;

        let cash_flow = cash_flow_ratios(&input);
        let fire = fire_targets(&input);
        let projections = net_worth_projections(&input);
        let scenarios = self.rate_scenarios(&input, projections.after_tax_return_rate);

        let years_to_fire = months_to_target(
            input.net_worth,
            cash_flow.monthly_contribution,
            projections.after_tax_return_rate,
            fire.fire_target_adjusted,
            settings.fire_horizon_years,
        )
        .map(|months| months as f64 / 12.0);

        let metrics = build_metrics(&cash_flow, fire.fire_progress, &self.assumptions);
        let recommendations = build_recommendations(
            &RecommendationInputs {
                ratios: &cash_flow,
                years_to_goal: input.years_to_goal,
                years_to_fire,
                fire_target: fire.fire_target_adjusted,
            },
            &self.assumptions,
        );
        let score = composite_score(&metrics, &self.assumptions);

        let what_ifs = build_what_ifs(
            &WhatIfBase {
                input: &input,
                annual_rate: projections.after_tax_return_rate,
                base_projection: projections.after_tax,
                fire_target: fire.fire_target_adjusted,
            },
            settings,
        );

        log::debug!(
            "Report: horizon {:.1}y, after-tax {:.3}%, real {:.3}%, score {}, years to FIRE {:?}",
            input.years_to_goal,
            projections.after_tax_return_rate,
            projections.real_return_rate,
            score,
            years_to_fire
        );

        RaioXSummary {
            cash_flow,
            fire,
            projections,
            years_to_fire,
            score,
            metrics,
            scenarios,
            what_ifs,
            recommendations,
        }
    }

    /// Conservative, base and optimistic rates around the after-tax rate
    fn rate_scenarios(&self, input: &RaioXInput, after_tax_rate: f64) -> Vec<ProjectionScenario> {
        let settings = &self.assumptions.scenarios;
        let conservative = (after_tax_rate - settings.rate_spread).max(settings.conservative_floor);
        let rates = [
            ("conservative", "Conservative", conservative),
            ("base", "Base", after_tax_rate),
            ("optimistic", "Optimistic", after_tax_rate + settings.rate_spread),
        ];

        rates
            .iter()
            .map(|&(key, label, rate)| ProjectionScenario {
                key: key.to_string(),
                label: label.to_string(),
                annual_rate: rate,
                final_value: project_investment(
                    input.net_worth,
                    input.monthly_contribution(),
                    rate,
                    input.years_to_goal,
                )
                .final_balance,
            })
            .collect()
    }
}

/// Build a report with the default assumptions
pub fn build_summary(input: &RaioXInput) -> RaioXSummary {
    SummaryBuilder::default().build(input)
}

fn cash_flow_ratios(input: &RaioXInput) -> CashFlowRatios {
    let contribution = input.monthly_contribution();
    CashFlowRatios {
        monthly_free_cash_flow: input.monthly_income
            - input.monthly_expenses
            - input.monthly_debt_payments
            - contribution,
        monthly_contribution: contribution,
        savings_rate: percent_of(contribution, input.monthly_income),
        investment_rate: percent_of(input.monthly_investments, input.monthly_income),
        debt_to_income_ratio: percent_of(input.monthly_debt_payments, input.monthly_income),
        emergency_fund_months: safe_div(input.emergency_fund, input.monthly_need()),
    }
}

fn fire_targets(input: &RaioXInput) -> FireTargets {
    let fire_target_today =
        safe_div(input.fire_annual_expenses, input.fire_withdrawal_rate / 100.0);
    let inflation_factor = (1.0 + input.inflation_rate / 100.0).powf(input.years_to_goal);
    let fire_target_adjusted = finite_or_zero(fire_target_today * inflation_factor);

    FireTargets {
        fire_target_today,
        fire_target_adjusted,
        fire_progress: percent_of(input.net_worth, fire_target_today),
    }
}

fn net_worth_projections(input: &RaioXInput) -> NetWorthProjections {
    let rate = input.annual_return_rate;
    let after_tax_rate = rate * (1.0 - input.tax_rate / 100.0);

    // Fisher deflation; a deflator at or below zero leaves the rate undeflated
    let deflator = 1.0 + input.inflation_rate / 100.0;
    let real_rate = if deflator > 0.0 {
        finite_or_zero(((1.0 + after_tax_rate / 100.0) / deflator - 1.0) * 100.0)
    } else {
        after_tax_rate
    };

    let contribution = input.monthly_contribution();
    let project = |rate: f64| {
        project_investment(input.net_worth, contribution, rate, input.years_to_goal).final_balance
    };

    NetWorthProjections {
        after_tax_return_rate: after_tax_rate,
        real_return_rate: real_rate,
        nominal: project(rate),
        after_tax: project(after_tax_rate),
        real: project(real_rate),
    }
}
