//! Monthly compound-growth projection engine

use super::schedule::{InvestmentProjectionInput, InvestmentProjectionResult, ProjectionRow};
use super::state::ProjectionState;
use crate::numeric::{finite_or_zero, non_negative, years_to_months};

/// Configuration for a projection run
#[derive(Debug, Clone, Default)]
pub struct ProjectionConfig {
    /// Whether to record a row per simulated month
    pub detailed_output: bool,
}

/// Compounds an initial amount plus recurring monthly contributions at a
/// monthly-compounded annual rate
#[derive(Debug, Clone, Default)]
pub struct InvestmentProjector {
    config: ProjectionConfig,
}

impl InvestmentProjector {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Projector that also records the monthly schedule
    pub fn detailed() -> Self {
        Self::new(ProjectionConfig { detailed_output: true })
    }

    /// Run the projection
    pub fn project(&self, input: &InvestmentProjectionInput) -> InvestmentProjectionResult {
        let initial = non_negative(input.initial_amount);
        let contribution = non_negative(input.monthly_contribution);
        let monthly_rate = finite_or_zero(input.annual_rate) / 100.0 / 12.0;
        let months = years_to_months(input.years);

        let mut state = ProjectionState::new(initial);
        let mut schedule = Vec::new();
        if self.config.detailed_output {
            schedule.reserve(months as usize);
        }

        for _ in 0..months {
            let interest = state.advance_month(contribution, monthly_rate);

            if self.config.detailed_output {
                schedule.push(ProjectionRow {
                    month: state.month,
                    contribution,
                    interest,
                    balance: state.balance,
                    total_contributions: state.total_contributions,
                });
            }
        }

        state.balance = finite_or_zero(state.balance).max(0.0);
        InvestmentProjectionResult {
            final_balance: state.balance,
            total_contributions: state.total_contributions,
            total_interest: state.total_interest(),
            schedule,
        }
    }
}

/// Project without a schedule: `(initial, monthly contribution, annual rate %, years)`
pub fn project_investment(
    initial_amount: f64,
    monthly_contribution: f64,
    annual_rate: f64,
    years: f64,
) -> InvestmentProjectionResult {
    InvestmentProjector::default().project(&InvestmentProjectionInput {
        initial_amount,
        monthly_contribution,
        annual_rate,
        years,
    })
}
