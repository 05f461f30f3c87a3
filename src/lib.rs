//! Finance Engine - deterministic personal-finance analysis
//!
//! This library provides:
//! - Compound-growth projections and time-to-target estimates
//! - Retirement, ROI, budget (50/30/20) and emergency-fund calculators
//! - Avalanche debt payoff simulation
//! - A household report with health metrics, a composite score,
//!   recommendations and what-if scenarios
//!
//! The calculators are pure and never fail on numeric input; only the file
//! loaders return errors.

pub mod assumptions;
pub mod calculators;
pub mod error;
pub mod format;
pub mod household;
pub mod numeric;
pub mod projection;
pub mod report;
pub mod scenario;
pub mod snapshot;

// Re-export commonly used types
pub use assumptions::Assumptions;
pub use calculators::HealthStatus;
pub use error::{Error, Result};
pub use household::{Debt, IncomeStability, RaioXInput};
pub use projection::{project_investment, InvestmentProjector};
pub use report::{build_summary, RaioXSummary, SummaryBuilder};
pub use scenario::ScenarioRunner;
pub use snapshot::{RaioXSnapshot, SnapshotStore};
