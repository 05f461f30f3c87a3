//! Scenario runner for batch reports
//!
//! Holds one set of assumptions and runs many households, or many variants
//! of one household, in parallel.

use rayon::prelude::*;

use crate::assumptions::Assumptions;
use crate::household::RaioXInput;
use crate::report::{RaioXSummary, SummaryBuilder};

/// Pre-loaded runner for batch reports
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
///
/// // Compare return assumptions for one household
/// let variants: Vec<_> = [4.0, 6.0, 8.0]
///     .iter()
///     .map(|&rate| RaioXInput { annual_return_rate: rate, ..base.clone() })
///     .collect();
/// let reports = runner.run_batch(&variants);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    builder: SummaryBuilder,
}

impl ScenarioRunner {
    /// Runner with default assumptions
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self {
            builder: SummaryBuilder::new(assumptions),
        }
    }

    /// Report for a single household
    pub fn run(&self, input: &RaioXInput) -> RaioXSummary {
        self.builder.build(input)
    }

    /// Reports for many households, in input order
    pub fn run_batch(&self, inputs: &[RaioXInput]) -> Vec<RaioXSummary> {
        log::info!("Running {} household reports", inputs.len());
        inputs.par_iter().map(|input| self.builder.build(input)).collect()
    }

    /// Reports for one household under each of the given modifications
    pub fn run_variants<F>(&self, base: &RaioXInput, variants: &[F]) -> Vec<RaioXSummary>
    where
        F: Fn(&mut RaioXInput) + Sync,
    {
        variants
            .par_iter()
            .map(|apply| {
                let mut input = base.clone();
                apply(&mut input);
                self.builder.build(&input)
            })
            .collect()
    }

    pub fn assumptions(&self) -> &Assumptions {
        self.builder.assumptions()
    }
}
