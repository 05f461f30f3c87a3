//! Compound-growth projection of an investment balance

mod state;
mod engine;
mod schedule;

pub use state::ProjectionState;
pub use engine::{project_investment, InvestmentProjector, ProjectionConfig};
pub use schedule::{InvestmentProjectionInput, InvestmentProjectionResult, ProjectionRow};
