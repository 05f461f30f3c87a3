//! Status boundaries for the report health metrics

use serde::{Deserialize, Serialize};

use crate::calculators::HealthStatus;

/// Two-boundary classification where higher values are better:
/// good >= `good`, attention >= `attention`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    pub good: f64,
    pub attention: f64,
}

impl Threshold {
    pub const fn new(good: f64, attention: f64) -> Self {
        Self { good, attention }
    }

    pub fn classify(&self, value: f64) -> HealthStatus {
        if value >= self.good {
            HealthStatus::Good
        } else if value >= self.attention {
            HealthStatus::Attention
        } else {
            HealthStatus::Risk
        }
    }
}

/// Two-boundary classification where lower values are better (debt load):
/// good <= `good`, attention <= `attention`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CeilingThreshold {
    pub good: f64,
    pub attention: f64,
}

impl CeilingThreshold {
    pub const fn new(good: f64, attention: f64) -> Self {
        Self { good, attention }
    }

    pub fn classify(&self, value: f64) -> HealthStatus {
        if value <= self.good {
            HealthStatus::Good
        } else if value <= self.attention {
            HealthStatus::Attention
        } else {
            HealthStatus::Risk
        }
    }
}

/// Threshold per health metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricThresholds {
    /// Savings rate (percent of income)
    pub savings_rate: Threshold,
    /// Investment rate (percent of income)
    pub investment_rate: Threshold,
    /// Emergency fund (months of outflow)
    pub emergency_fund_months: Threshold,
    /// Debt payments (percent of income)
    pub debt_to_income: CeilingThreshold,
    /// Net worth (percent of today's FIRE target)
    pub fire_progress: Threshold,
}

impl Default for MetricThresholds {
    fn default() -> Self {
        Self {
            savings_rate: Threshold::new(20.0, 10.0),
            investment_rate: Threshold::new(15.0, 8.0),
            emergency_fund_months: Threshold::new(6.0, 3.0),
            debt_to_income: CeilingThreshold::new(30.0, 40.0),
            fire_progress: Threshold::new(40.0, 15.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_higher_is_better_boundaries() {
        let t = Threshold::new(20.0, 10.0);
        assert_eq!(t.classify(20.0), HealthStatus::Good);
        assert_eq!(t.classify(19.99), HealthStatus::Attention);
        assert_eq!(t.classify(10.0), HealthStatus::Attention);
        assert_eq!(t.classify(9.99), HealthStatus::Risk);
    }

    #[test]
    fn test_ceiling_boundaries() {
        let t = MetricThresholds::default().debt_to_income;
        assert_eq!(t.classify(30.0), HealthStatus::Good);
        assert_eq!(t.classify(35.0), HealthStatus::Attention);
        assert_eq!(t.classify(40.0), HealthStatus::Attention);
        assert_eq!(t.classify(40.5), HealthStatus::Risk);
    }
}
