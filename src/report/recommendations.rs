//! Textual recommendations from threshold violations

use super::summary::CashFlowRatios;
use crate::assumptions::Assumptions;

/// Debt-to-income (percent) above which debt reduction is recommended
pub const DEBT_REDUCTION_LIMIT: f64 = 35.0;

/// Facts the recommendations are derived from
#[derive(Debug, Clone)]
pub struct RecommendationInputs<'a> {
    pub ratios: &'a CashFlowRatios,
    pub years_to_goal: f64,
    pub years_to_fire: Option<f64>,
    pub fire_target: f64,
}

pub fn build_recommendations(
    inputs: &RecommendationInputs<'_>,
    assumptions: &Assumptions,
) -> Vec<String> {
    let ratios = inputs.ratios;
    let t = &assumptions.thresholds;
    let mut recommendations = Vec::new();

    if ratios.monthly_free_cash_flow < 0.0 {
        recommendations.push(format!(
            "Monthly cash flow is negative ({:.2}): spending and commitments exceed income. Review expenses before adding new goals.",
            ratios.monthly_free_cash_flow
        ));
    }

    if ratios.savings_rate < t.savings_rate.good {
        recommendations.push(format!(
            "Raise your savings rate from {:.1}% towards at least {:.0}% of income.",
            ratios.savings_rate, t.savings_rate.good
        ));
    }

    if ratios.debt_to_income_ratio > DEBT_REDUCTION_LIMIT {
        recommendations.push(format!(
            "Debt payments take {:.1}% of income. Reduce debt, starting with the highest interest rate.",
            ratios.debt_to_income_ratio
        ));
    }

    if ratios.emergency_fund_months < t.emergency_fund_months.good {
        recommendations.push(format!(
            "Prioritize the emergency fund: it covers {:.1} months, aim for at least {:.0}.",
            ratios.emergency_fund_months, t.emergency_fund_months.good
        ));
    }

    if ratios.investment_rate < t.investment_rate.good {
        recommendations.push(format!(
            "Increase the share of income invested from {:.1}% to {:.0}% or more.",
            ratios.investment_rate, t.investment_rate.good
        ));
    }

    if inputs.fire_target > 0.0 {
        let limit = inputs.years_to_goal + assumptions.scenarios.fire_drift_years;
        match inputs.years_to_fire {
            Some(years) if years > limit => recommendations.push(format!(
                "Financial independence is estimated in {:.1} years, more than {:.0} years past your {:.0}-year goal. Revisit contributions, expected return or target expenses.",
                years, assumptions.scenarios.fire_drift_years, inputs.years_to_goal
            )),
            None => recommendations.push(format!(
                "Financial independence is not reachable within {} years under current assumptions. Revisit contributions, expected return or target expenses.",
                assumptions.scenarios.fire_horizon_years
            )),
            _ => {}
        }
    }

    if recommendations.is_empty() {
        recommendations.push(
            "Your finances are in good shape. Keep the current habits and review the plan once a year."
                .to_string(),
        );
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn healthy() -> CashFlowRatios {
        CashFlowRatios {
            monthly_free_cash_flow: 200.0,
            monthly_contribution: 1_000.0,
            savings_rate: 30.0,
            investment_rate: 20.0,
            debt_to_income_ratio: 10.0,
            emergency_fund_months: 8.0,
        }
    }

    fn run(ratios: &CashFlowRatios, years_to_fire: Option<f64>) -> Vec<String> {
        build_recommendations(
            &RecommendationInputs {
                ratios,
                years_to_goal: 20.0,
                years_to_fire,
                fire_target: 500_000.0,
            },
            &Assumptions::default(),
        )
    }

    #[test]
    fn test_healthy_gets_single_positive_message() {
        let recs = run(&healthy(), Some(18.0));
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("good shape"));
    }

    #[test]
    fn test_each_violation_is_reported() {
        let ratios = CashFlowRatios {
            monthly_free_cash_flow: -150.0,
            savings_rate: 5.0,
            investment_rate: 2.0,
            debt_to_income_ratio: 45.0,
            emergency_fund_months: 1.0,
            ..healthy()
        };
        let recs = run(&ratios, Some(40.0));

        assert_eq!(recs.len(), 6);
        assert!(recs[0].contains("negative"));
        assert!(recs.iter().any(|r| r.contains("Reduce debt")));
        assert!(recs.iter().all(|r| !r.contains("good shape")));
    }

    #[test]
    fn test_fire_drift_boundary() {
        // 25 years is exactly goal + 5: not flagged
        assert_eq!(run(&healthy(), Some(25.0)).len(), 1);
        assert!(run(&healthy(), Some(25.5))[0].contains("Financial independence"));
        assert!(run(&healthy(), None)[0].contains("not reachable"));
    }
}
