//! Report output records

use serde::{Deserialize, Serialize};

use crate::calculators::HealthStatus;

/// Monthly cash-flow ratios (percent unless noted)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CashFlowRatios {
    /// Income left after expenses, debt payments, savings and investments
    pub monthly_free_cash_flow: f64,
    /// Savings + investments put aside each month
    pub monthly_contribution: f64,
    pub savings_rate: f64,
    pub investment_rate: f64,
    pub debt_to_income_ratio: f64,
    /// Months of expenses + debt payments the emergency fund covers
    pub emergency_fund_months: f64,
}

/// Financial-independence targets
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FireTargets {
    /// Capital needed in today's money
    pub fire_target_today: f64,
    /// Capital needed at the goal horizon, inflated
    pub fire_target_adjusted: f64,
    /// Net worth as percent of today's target
    pub fire_progress: f64,
}

/// Net worth projected over the goal horizon
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetWorthProjections {
    pub after_tax_return_rate: f64,
    pub real_return_rate: f64,
    /// At the nominal return rate
    pub nominal: f64,
    pub after_tax: f64,
    /// After tax, in today's money
    pub real: f64,
}

/// A single reported metric with its classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthMetric {
    pub key: String,
    pub label: String,
    pub value: f64,
    pub status: HealthStatus,
    pub helper: String,
}

/// Final projected value under a named return assumption
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionScenario {
    pub key: String,
    pub label: String,
    pub annual_rate: f64,
    pub final_value: f64,
}

/// Counterfactual projection under one altered assumption
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhatIfScenario {
    pub key: String,
    pub label: String,
    pub description: String,
    pub projected_net_worth: f64,
    /// Difference against the after-tax base projection
    pub delta: f64,
    pub years_to_fire: Option<f64>,
}

/// The full household report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaioXSummary {
    #[serde(flatten)]
    pub cash_flow: CashFlowRatios,
    #[serde(flatten)]
    pub fire: FireTargets,
    pub projections: NetWorthProjections,
    /// `None` when FIRE is not reachable within the search horizon
    pub years_to_fire: Option<f64>,
    /// Composite health score, 0-100
    pub score: u8,
    pub metrics: Vec<HealthMetric>,
    pub scenarios: Vec<ProjectionScenario>,
    pub what_ifs: Vec<WhatIfScenario>,
    pub recommendations: Vec<String>,
}

impl RaioXSummary {
    pub fn metric(&self, key: &str) -> Option<&HealthMetric> {
        self.metrics.iter().find(|m| m.key == key)
    }

    pub fn what_if(&self, key: &str) -> Option<&WhatIfScenario> {
        self.what_ifs.iter().find(|w| w.key == key)
    }

    pub fn scenario(&self, key: &str) -> Option<&ProjectionScenario> {
        self.scenarios.iter().find(|s| s.key == key)
    }
}
