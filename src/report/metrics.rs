//! Health metrics and the composite score

use super::summary::{CashFlowRatios, HealthMetric};
use crate::assumptions::Assumptions;
use crate::calculators::HealthStatus;

pub const SAVINGS_RATE: &str = "savings_rate";
pub const INVESTMENT_RATE: &str = "investment_rate";
pub const EMERGENCY_FUND: &str = "emergency_fund";
pub const DEBT_TO_INCOME: &str = "debt_to_income";
pub const FIRE_PROGRESS: &str = "fire_progress";

/// Classify the five report metrics
pub fn build_metrics(
    ratios: &CashFlowRatios,
    fire_progress: f64,
    assumptions: &Assumptions,
) -> Vec<HealthMetric> {
    let t = &assumptions.thresholds;

    vec![
        metric(
            SAVINGS_RATE,
            "Savings rate",
            ratios.savings_rate,
            t.savings_rate.classify(ratios.savings_rate),
            "Share of income saved or invested each month",
        ),
        metric(
            INVESTMENT_RATE,
            "Investment rate",
            ratios.investment_rate,
            t.investment_rate.classify(ratios.investment_rate),
            "Share of income invested each month",
        ),
        metric(
            EMERGENCY_FUND,
            "Emergency fund",
            ratios.emergency_fund_months,
            t.emergency_fund_months.classify(ratios.emergency_fund_months),
            "Months of expenses and debt payments covered by cash reserves",
        ),
        metric(
            DEBT_TO_INCOME,
            "Debt-to-income",
            ratios.debt_to_income_ratio,
            t.debt_to_income.classify(ratios.debt_to_income_ratio),
            "Share of income committed to debt payments",
        ),
        metric(
            FIRE_PROGRESS,
            "FIRE progress",
            fire_progress,
            t.fire_progress.classify(fire_progress),
            "Net worth as a share of the financial-independence target",
        ),
    ]
}

fn metric(key: &str, label: &str, value: f64, status: HealthStatus, helper: &str) -> HealthMetric {
    HealthMetric {
        key: key.to_string(),
        label: label.to_string(),
        value,
        status,
        helper: helper.to_string(),
    }
}

/// Weighted sum of status points, rounded and clamped to 0-100
pub fn composite_score(metrics: &[HealthMetric], assumptions: &Assumptions) -> u8 {
    let w = &assumptions.weights;
    let weighted: f64 = metrics
        .iter()
        .map(|m| {
            let weight = match m.key.as_str() {
                SAVINGS_RATE => w.savings_rate,
                INVESTMENT_RATE => w.investment_rate,
                EMERGENCY_FUND => w.emergency_fund,
                DEBT_TO_INCOME => w.debt_to_income,
                FIRE_PROGRESS => w.fire_progress,
                _ => 0.0,
            };
            assumptions.points.for_status(m.status) * weight
        })
        .sum();

    let score = if weighted.is_finite() { weighted.round() } else { 0.0 };
    score.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratios(savings: f64, investment: f64, emergency: f64, dti: f64) -> CashFlowRatios {
        CashFlowRatios {
            savings_rate: savings,
            investment_rate: investment,
            emergency_fund_months: emergency,
            debt_to_income_ratio: dti,
            ..Default::default()
        }
    }

    #[test]
    fn test_all_good_scores_100() {
        let assumptions = Assumptions::default();
        let metrics = build_metrics(&ratios(25.0, 16.0, 8.0, 10.0), 50.0, &assumptions);

        assert!(metrics.iter().all(|m| m.status == HealthStatus::Good));
        assert_eq!(composite_score(&metrics, &assumptions), 100);
    }

    #[test]
    fn test_all_risk_scores_35() {
        let assumptions = Assumptions::default();
        let metrics = build_metrics(&ratios(0.0, 0.0, 0.0, 60.0), 0.0, &assumptions);

        assert!(metrics.iter().all(|m| m.status == HealthStatus::Risk));
        assert_eq!(composite_score(&metrics, &assumptions), 35);
    }

    #[test]
    fn test_mixed_score() {
        let assumptions = Assumptions::default();
        // savings attention, investment good, emergency risk, dti attention, fire good
        let metrics = build_metrics(&ratios(12.0, 15.0, 1.0, 35.0), 45.0, &assumptions);
        // 65*.25 + 100*.2 + 35*.2 + 65*.2 + 100*.15 = 71.25
        assert_eq!(composite_score(&metrics, &assumptions), 71);
    }

    #[test]
    fn test_metric_order_and_keys() {
        let metrics = build_metrics(&CashFlowRatios::default(), 0.0, &Assumptions::default());
        let keys: Vec<&str> = metrics.iter().map(|m| m.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![SAVINGS_RATE, INVESTMENT_RATE, EMERGENCY_FUND, DEBT_TO_INCOME, FIRE_PROGRESS]
        );
    }
}
