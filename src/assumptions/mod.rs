//! Report assumptions: metric thresholds, score weights and scenario settings

mod scoring;
mod thresholds;
pub mod loader;

pub use scoring::{ScoreWeights, StatusPoints};
pub use thresholds::{CeilingThreshold, MetricThresholds, Threshold};

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::calculators::DEFAULT_MAX_YEARS;
use crate::error::Result;

/// Settings for the rate scenarios and what-if projections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioAssumptions {
    /// Percentage points subtracted/added for conservative/optimistic rates
    pub rate_spread: f64,
    /// Lowest conservative rate (percent)
    pub conservative_floor: f64,
    /// Share of monthly income added in the higher-income what-if
    pub income_boost: f64,
    /// Yearly growth of expenses in the lifestyle-inflation what-if
    pub lifestyle_growth: f64,
    /// Years searched when estimating time to FIRE
    pub fire_horizon_years: u32,
    /// Years past the goal after which the FIRE estimate is flagged
    pub fire_drift_years: f64,
}

impl Default for ScenarioAssumptions {
    fn default() -> Self {
        Self {
            rate_spread: 2.0,
            conservative_floor: 0.5,
            income_boost: 0.20,
            lifestyle_growth: 0.03,
            fire_horizon_years: DEFAULT_MAX_YEARS,
            fire_drift_years: 5.0,
        }
    }
}

/// Container for all report assumptions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    pub thresholds: MetricThresholds,
    pub points: StatusPoints,
    pub weights: ScoreWeights,
    pub scenarios: ScenarioAssumptions,
}

impl Assumptions {
    /// Load assumptions from a JSON file; omitted sections keep their defaults
    pub fn from_json_path(path: &Path) -> Result<Self> {
        loader::load_assumptions(path)
    }
}
