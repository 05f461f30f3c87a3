//! Composite score weights and status points

use serde::{Deserialize, Serialize};

use crate::calculators::HealthStatus;

/// Points awarded per metric status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusPoints {
    pub good: f64,
    pub attention: f64,
    pub risk: f64,
}

impl Default for StatusPoints {
    fn default() -> Self {
        Self {
            good: 100.0,
            attention: 65.0,
            risk: 35.0,
        }
    }
}

impl StatusPoints {
    pub fn for_status(&self, status: HealthStatus) -> f64 {
        match status {
            HealthStatus::Good => self.good,
            HealthStatus::Attention => self.attention,
            HealthStatus::Risk => self.risk,
        }
    }
}

/// Weight of each metric in the composite score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub savings_rate: f64,
    pub investment_rate: f64,
    pub emergency_fund: f64,
    pub debt_to_income: f64,
    pub fire_progress: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            savings_rate: 0.25,
            investment_rate: 0.20,
            emergency_fund: 0.20,
            debt_to_income: 0.20,
            fire_progress: 0.15,
        }
    }
}

impl ScoreWeights {
    pub fn total(&self) -> f64 {
        self.savings_rate
            + self.investment_rate
            + self.emergency_fund
            + self.debt_to_income
            + self.fire_progress
    }
}
