//! Finance Engine CLI
//!
//! Command-line interface for household reports and the individual calculators

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use finance_engine::calculators::{
    advise_emergency_fund, analyze_budget, calculate_roi, months_to_target, plan_retirement,
    simulate_debt_payoff, BudgetInput, DebtPayoffInput, EmergencyFundInput, RetirementInput,
    RoiInput,
};
use finance_engine::format::{format_currency, format_number, format_percent, format_years};
use finance_engine::household::{load_debts_csv, load_household};
use finance_engine::projection::{InvestmentProjectionInput, InvestmentProjector, ProjectionConfig};
use finance_engine::{Assumptions, IncomeStability, RaioXSummary, SnapshotStore, SummaryBuilder};

#[derive(Debug, Parser)]
#[command(
    name = "finance_engine",
    version,
    about = "Personal-finance projections, health score and what-if analysis"
)]
struct Cli {
    /// Print results as JSON instead of a formatted table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Full household report from a JSON input file
    Report(ReportArgs),
    /// Compound-growth projection
    Invest {
        #[arg(long, default_value_t = 0.0)]
        initial: f64,
        #[arg(long, default_value_t = 0.0)]
        monthly: f64,
        /// Annual rate (percent)
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: f64,
        /// Print the balance at the end of each year
        #[arg(long)]
        schedule: bool,
    },
    /// Months until a balance reaches a target
    Target {
        #[arg(long, default_value_t = 0.0)]
        initial: f64,
        #[arg(long, default_value_t = 0.0)]
        monthly: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        target: f64,
        #[arg(long, default_value_t = finance_engine::calculators::DEFAULT_MAX_YEARS)]
        max_years: u32,
    },
    /// Retirement capital and required monthly contribution
    Retire {
        #[arg(long)]
        monthly_expenses: f64,
        #[arg(long)]
        years: f64,
        #[arg(long, default_value_t = 2.0)]
        inflation: f64,
        #[arg(long, default_value_t = 4.0)]
        withdrawal: f64,
        #[arg(long, default_value_t = 0.0)]
        capital: f64,
        #[arg(long = "return", default_value_t = 6.0)]
        expected_return: f64,
    },
    /// Return on investment over a holding period
    Roi {
        #[arg(long)]
        cost: f64,
        #[arg(long)]
        value: f64,
        #[arg(long, default_value_t = 0.0)]
        cash_flow: f64,
        #[arg(long)]
        months: f64,
    },
    /// Monthly budget against the 50/30/20 rule
    Budget {
        #[arg(long)]
        income: f64,
        #[arg(long, default_value_t = 0.0)]
        fixed: f64,
        #[arg(long, default_value_t = 0.0)]
        variable: f64,
        #[arg(long, default_value_t = 0.0)]
        debt: f64,
        #[arg(long, default_value_t = 0.0)]
        investments: f64,
    },
    /// Recommended emergency fund
    Emergency {
        #[arg(long)]
        expenses: f64,
        #[arg(long, default_value_t = 0.0)]
        debt: f64,
        #[arg(long, default_value_t = 0.0)]
        fund: f64,
        #[arg(long, default_value_t = 0)]
        dependents: u32,
        /// stable, variable or freelance
        #[arg(long, default_value = "stable")]
        stability: IncomeStability,
    },
    /// Avalanche payoff plan from a CSV debt list
    Debt {
        /// CSV with name,balance,annual_rate,minimum_payment
        #[arg(long)]
        file: PathBuf,
        #[arg(long, default_value_t = 0.0)]
        extra: f64,
    },
}

#[derive(Debug, Args)]
struct ReportArgs {
    /// Household input (JSON)
    #[arg(long)]
    input: PathBuf,
    /// Assumption overrides (JSON)
    #[arg(long)]
    assumptions: Option<PathBuf>,
    /// Append the report to this snapshot history file
    #[arg(long)]
    snapshots: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Report(args) => run_report(&args, cli.json)?,
        Command::Invest { initial, monthly, rate, years, schedule } => {
            let projector = InvestmentProjector::new(ProjectionConfig {
                detailed_output: schedule,
            });
            let result = projector.project(&InvestmentProjectionInput {
                initial_amount: initial,
                monthly_contribution: monthly,
                annual_rate: rate,
                years,
            });
            if cli.json {
                return print_json(&result);
            }
            println!("Final balance:       {:>16}", format_currency(result.final_balance));
            println!("Total contributions: {:>16}", format_currency(result.total_contributions));
            println!("Total interest:      {:>16}", format_currency(result.total_interest));
            for (year, balance) in result.yearly_balances().iter().enumerate() {
                println!("  Year {:>3}: {:>16}", year + 1, format_currency(*balance));
            }
        }
        Command::Target { initial, monthly, rate, target, max_years } => {
            let months = months_to_target(initial, monthly, rate, target, max_years);
            if cli.json {
                return print_json(&months);
            }
            match months {
                Some(m) => println!(
                    "Target reached in {} months ({})",
                    m,
                    format_years(Some(m as f64 / 12.0))
                ),
                None => println!("Target not reachable within {} years", max_years),
            }
        }
        Command::Retire {
            monthly_expenses,
            years,
            inflation,
            withdrawal,
            capital,
            expected_return,
        } => {
            let result = plan_retirement(&RetirementInput {
                monthly_expenses_today: monthly_expenses,
                years_to_retirement: years,
                inflation_rate: inflation,
                withdrawal_rate: withdrawal,
                current_capital: capital,
                expected_return_rate: expected_return,
            });
            if cli.json {
                return print_json(&result);
            }
            let rows = [
                ("Annual need at retirement", result.annual_need_at_retirement),
                ("Target capital", result.target_capital),
                ("Current capital grows to", result.future_value_of_current_capital),
                ("Required monthly", result.required_monthly_contribution),
            ];
            for (label, value) in rows {
                println!("{:<26} {}", format!("{}:", label), format_currency(value));
            }
        }
        Command::Roi { cost, value, cash_flow, months } => {
            let result = calculate_roi(&RoiInput {
                initial_cost: cost,
                current_value: value,
                additional_cash_flow: cash_flow,
                holding_months: months,
            });
            if cli.json {
                return print_json(&result);
            }
            println!("Net gain:       {}", format_currency(result.net_gain));
            println!("ROI:            {}", format_percent(result.roi, 2));
            println!("Annualized ROI: {}", format_percent(result.annualized_roi, 2));
        }
        Command::Budget { income, fixed, variable, debt, investments } => {
            let result = analyze_budget(&BudgetInput {
                income,
                fixed_expenses: fixed,
                variable_expenses: variable,
                debt_payments: debt,
                investments,
            });
            if cli.json {
                return print_json(&result);
            }
            println!("Total expenses:     {}", format_currency(result.total_expenses));
            println!("Free cash flow:     {}", format_currency(result.free_cash_flow));
            println!("Savings rate:       {}", format_percent(result.savings_rate, 1));
            println!("Emergency fund (6m): {}", format_currency(result.recommended_emergency_fund));
            println!(
                "50/30/20: needs {} / wants {} / savings {} -> {}",
                format_percent(result.rule.needs_pct, 0),
                format_percent(result.rule.wants_pct, 0),
                format_percent(result.rule.savings_pct, 0),
                result.rule.status
            );
        }
        Command::Emergency { expenses, debt, fund, dependents, stability } => {
            let result = advise_emergency_fund(&EmergencyFundInput {
                monthly_expenses: expenses,
                monthly_debt_payments: debt,
                current_fund: fund,
                dependents,
                income_stability: stability,
            });
            if cli.json {
                return print_json(&result);
            }
            println!(
                "Recommended: {} months = {}",
                result.recommended_months,
                format_currency(result.recommended_amount)
            );
            println!("Coverage:    {} months", format_number(result.current_coverage, 1));
            println!("Gap:         {}", format_currency(result.gap));
            println!("Status:      {}", result.status);
        }
        Command::Debt { file, extra } => {
            let debts = load_debts_csv(&file)
                .with_context(|| format!("failed to read debts from {}", file.display()))?;
            let result = simulate_debt_payoff(&DebtPayoffInput {
                debts,
                extra_monthly_payment: extra,
            });
            if cli.json {
                return print_json(&result);
            }
            println!("Total debt:        {}", format_currency(result.total_debt));
            println!("Minimum payments:  {}", format_currency(result.total_minimum_payments));
            println!(
                "Minimum only:      {} months, {} interest",
                result.months_to_payoff,
                format_currency(result.total_interest_paid)
            );
            println!(
                "With extra:        {} months, {} interest",
                result.months_with_extra,
                format_currency(result.total_interest_with_extra)
            );
            println!("Interest saved:    {}", format_currency(result.interest_saved));
            if !result.payoff_order.is_empty() {
                println!("Payoff order:      {}", result.payoff_order.join(" -> "));
            }
        }
    }

    Ok(())
}

fn run_report(args: &ReportArgs, json: bool) -> Result<()> {
    let input = load_household(&args.input)
        .with_context(|| format!("failed to read household input {}", args.input.display()))?;
    let assumptions = match &args.assumptions {
        Some(path) => Assumptions::from_json_path(path)
            .with_context(|| format!("failed to read assumptions {}", path.display()))?,
        None => Assumptions::default(),
    };

    let summary = SummaryBuilder::new(assumptions).build(&input);

    if let Some(path) = &args.snapshots {
        let mut store = SnapshotStore::load(path)
            .with_context(|| format!("failed to read snapshots {}", path.display()))?;
        store.record(&input, &summary);
        store.save(path).with_context(|| format!("failed to write snapshots {}", path.display()))?;
        log::info!("Snapshot history now holds {} reports", store.len());
    }

    if json {
        return print_json(&summary);
    }
    print_report(&summary);
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_report(summary: &RaioXSummary) {
    println!("Raio-X financeiro");
    println!("=================\n");
    println!("Score: {}/100\n", summary.score);

    let cf = &summary.cash_flow;
    println!("Free cash flow:    {}", format_currency(cf.monthly_free_cash_flow));
    println!("Monthly saved:     {}", format_currency(cf.monthly_contribution));
    println!("FIRE target today: {}", format_currency(summary.fire.fire_target_today));
    println!("FIRE target (adj): {}", format_currency(summary.fire.fire_target_adjusted));
    println!("Years to FIRE:     {}", format_years(summary.years_to_fire));
    println!();

    println!("{:<18} {:>12} {:>10}", "Metric", "Value", "Status");
    println!("{}", "-".repeat(42));
    for metric in &summary.metrics {
        let value = format_number(metric.value, 1);
        println!("{:<18} {:>12} {:>10}", metric.label, value, metric.status);
    }
    println!();

    let p = &summary.projections;
    println!("Projected net worth");
    println!("  Nominal:   {:>18}", format_currency(p.nominal));
    println!(
        "  After tax: {:>18}  ({})",
        format_currency(p.after_tax),
        format_percent(p.after_tax_return_rate, 2)
    );
    println!(
        "  Real:      {:>18}  ({})",
        format_currency(p.real),
        format_percent(p.real_return_rate, 2)
    );
    for scenario in &summary.scenarios {
        println!(
            "  {:<12} {:>18}  ({})",
            scenario.label,
            format_currency(scenario.final_value),
            format_percent(scenario.annual_rate, 2)
        );
    }
    println!();

    println!("What if");
    for what_if in &summary.what_ifs {
        println!(
            "  {:<20} {:>18}  delta {:>16}  FIRE {}",
            what_if.label,
            format_currency(what_if.projected_net_worth),
            format_currency(what_if.delta),
            format_years(what_if.years_to_fire)
        );
    }
    println!();

    println!("Recommendations");
    for recommendation in &summary.recommendations {
        println!("  - {}", recommendation);
    }
}
