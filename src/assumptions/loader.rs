//! JSON-based assumption loader

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::Assumptions;
use crate::error::{Error, Result};

/// Load assumptions from a JSON file
pub fn load_assumptions(path: &Path) -> Result<Assumptions> {
    let file = File::open(path)?;
    let assumptions: Assumptions = serde_json::from_reader(BufReader::new(file))?;
    validate(&assumptions)?;
    Ok(assumptions)
}

/// Parse assumptions from a JSON string
pub fn parse_assumptions(json: &str) -> Result<Assumptions> {
    let assumptions: Assumptions = serde_json::from_str(json)?;
    validate(&assumptions)?;
    Ok(assumptions)
}

fn validate(assumptions: &Assumptions) -> Result<()> {
    let weights = &assumptions.weights;
    let all = [
        weights.savings_rate,
        weights.investment_rate,
        weights.emergency_fund,
        weights.debt_to_income,
        weights.fire_progress,
    ];
    if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(Error::InvalidInput("score weights must be finite and non-negative".into()));
    }
    if (weights.total() - 1.0).abs() > 1e-6 {
        log::warn!("score weights sum to {:.4}, not 1.0", weights.total());
    }

    let dti = &assumptions.thresholds.debt_to_income;
    if !dti.good.is_finite() || !dti.attention.is_finite() || dti.good > dti.attention {
        return Err(Error::InvalidInput(
            "debt_to_income threshold needs finite bounds with good <= attention".into(),
        ));
    }

    let scenarios = &assumptions.scenarios;
    if !scenarios.rate_spread.is_finite()
        || !scenarios.income_boost.is_finite()
        || !scenarios.lifestyle_growth.is_finite()
    {
        return Err(Error::InvalidInput("scenario settings must be finite".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::HealthStatus;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let assumptions = parse_assumptions(
            r#"{"thresholds": {"savings_rate": {"good": 25.0, "attention": 12.0}},
                "scenarios": {"income_boost": 0.1}}"#,
        )
        .unwrap();

        assert_eq!(assumptions.thresholds.savings_rate.good, 25.0);
        assert_eq!(assumptions.thresholds.investment_rate.good, 15.0);
        assert_eq!(assumptions.scenarios.income_boost, 0.1);
        assert_eq!(assumptions.scenarios.rate_spread, 2.0);
        assert_eq!(assumptions.weights.savings_rate, 0.25);
    }

    #[test]
    fn test_debt_to_income_override_keeps_direction() {
        let json = r#"{"thresholds": {"debt_to_income": {"good": 25, "attention": 35}}}"#;
        let assumptions = parse_assumptions(json).unwrap();
        let dti = assumptions.thresholds.debt_to_income;

        assert_eq!(dti.classify(5.0), HealthStatus::Good);
        assert_eq!(dti.classify(30.0), HealthStatus::Attention);
        assert_eq!(dti.classify(90.0), HealthStatus::Risk);
    }

    #[test]
    fn test_inverted_debt_to_income_rejected() {
        let json = r#"{"thresholds": {"debt_to_income": {"good": 40, "attention": 30}}}"#;
        let err = parse_assumptions(json).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let err = parse_assumptions(r#"{"weights": {"savings_rate": -0.5}}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse_assumptions("{not json"), Err(Error::Json(_))));
    }
}
