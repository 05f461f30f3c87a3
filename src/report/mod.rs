//! Household finance report ("Raio-X"): ratios, FIRE targets, projections,
//! health metrics, composite score, recommendations and what-if scenarios

mod builder;
pub mod metrics;
pub mod recommendations;
mod summary;
pub mod what_if;

pub use builder::{build_summary, SummaryBuilder};
pub use summary::{
    CashFlowRatios, FireTargets, HealthMetric, NetWorthProjections, ProjectionScenario,
    RaioXSummary, WhatIfScenario,
};
