//! Run household reports for every row of a CSV file
//!
//! Usage: run_batch <households.csv> [output.csv]
//!
//! Input headers are the `RaioXInput` field names; omitted columns take
//! their defaults. Output holds one trimmed summary row per household.

use anyhow::{Context, Result};
use finance_engine::household::load_households_csv;
use finance_engine::snapshot::SnapshotSummary;
use finance_engine::{RaioXSummary, ScenarioRunner};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

/// One output row (csv rows cannot hold nested records)
#[derive(Debug, Serialize)]
struct BatchRow {
    row: usize,
    monthly_income: f64,
    score: u8,
    monthly_free_cash_flow: f64,
    savings_rate: f64,
    debt_to_income_ratio: f64,
    emergency_fund_months: f64,
    fire_progress: f64,
    projected_net_worth: f64,
    projected_net_worth_after_tax: f64,
    projected_net_worth_real: f64,
    years_to_fire: Option<f64>,
    recommendations: usize,
}

impl BatchRow {
    fn new(row: usize, monthly_income: f64, summary: &RaioXSummary) -> Self {
        let trimmed = SnapshotSummary::from(summary);
        Self {
            row,
            monthly_income,
            score: trimmed.score,
            monthly_free_cash_flow: trimmed.monthly_free_cash_flow,
            savings_rate: trimmed.savings_rate,
            debt_to_income_ratio: trimmed.debt_to_income_ratio,
            emergency_fund_months: trimmed.emergency_fund_months,
            fire_progress: trimmed.fire_progress,
            projected_net_worth: trimmed.projected_net_worth,
            projected_net_worth_after_tax: trimmed.projected_net_worth_after_tax,
            projected_net_worth_real: trimmed.projected_net_worth_real,
            years_to_fire: trimmed.years_to_fire,
            recommendations: summary.recommendations.len(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let input_path = args
        .next()
        .map(PathBuf::from)
        .context("usage: run_batch <households.csv> [output.csv]")?;
    let output_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("batch_summary_output.csv"));

    let start = Instant::now();
    let households = load_households_csv(&input_path)
        .with_context(|| format!("failed to load households from {}", input_path.display()))?;
    println!("Loaded {} households in {:?}", households.len(), start.elapsed());

    let runner = ScenarioRunner::new();
    let run_start = Instant::now();
    let summaries = runner.run_batch(&households);
    println!("Reports complete in {:?}", run_start.elapsed());

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("failed to create {}", output_path.display()))?;
    for (idx, (input, summary)) in households.iter().zip(&summaries).enumerate() {
        writer.serialize(BatchRow::new(idx + 1, input.monthly_income, summary))?;
    }
    writer.flush()?;

    let average_score = if summaries.is_empty() {
        0.0
    } else {
        summaries.iter().map(|s| s.score as f64).sum::<f64>() / summaries.len() as f64
    };
    println!("Average score: {:.1}", average_score);
    println!("Results written to: {}", output_path.display());

    Ok(())
}
