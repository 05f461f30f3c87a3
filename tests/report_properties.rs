//! Properties of the public calculators and the household report

use finance_engine::calculators::{
    advise_emergency_fund, analyze_budget, months_to_target, simulate_debt_payoff, BudgetInput,
    DebtPayoffInput, EmergencyFundInput,
};
use finance_engine::{
    build_summary, project_investment, Debt, HealthStatus, IncomeStability, RaioXInput,
    ScenarioRunner,
};

fn sample_households() -> Vec<RaioXInput> {
    let base = RaioXInput {
        monthly_income: 3_200.0,
        monthly_expenses: 1_900.0,
        monthly_savings: 250.0,
        monthly_investments: 300.0,
        monthly_debt_payments: 400.0,
        total_debt: 18_000.0,
        emergency_fund: 5_000.0,
        net_worth: 30_000.0,
        fire_annual_expenses: 22_000.0,
        ..Default::default()
    };

    vec![
        base.clone(),
        RaioXInput::default(),
        RaioXInput { monthly_income: 0.0, ..base.clone() },
        RaioXInput { monthly_expenses: 5_000.0, ..base.clone() },
        RaioXInput { annual_return_rate: -4.0, inflation_rate: 9.0, ..base.clone() },
        RaioXInput {
            tax_rate: 300.0,
            fire_withdrawal_rate: 50.0,
            years_to_goal: 500.0,
            ..base.clone()
        },
        RaioXInput {
            monthly_income: f64::NAN,
            net_worth: f64::INFINITY,
            annual_return_rate: f64::NEG_INFINITY,
            ..base.clone()
        },
        RaioXInput {
            net_worth: 2_000_000.0,
            monthly_debt_payments: 0.0,
            emergency_fund: 60_000.0,
            ..base
        },
    ]
}

#[test]
fn zero_horizon_identity() {
    for rate in [-3.0, 0.0, 7.5] {
        let result = project_investment(12_345.0, 400.0, rate, 0.0);
        assert_eq!(result.final_balance, 12_345.0);
        assert_eq!(result.total_contributions, 12_345.0);
        assert_eq!(result.total_interest, 0.0);
    }
}

#[test]
fn growth_is_monotonic_in_rate() {
    let balances: Vec<f64> = (0..=20)
        .map(|step| project_investment(1_000.0, 250.0, step as f64 * 0.5, 25.0).final_balance)
        .collect();
    assert!(balances.windows(2).all(|w| w[1] >= w[0]));
}

#[test]
fn target_estimates() {
    assert_eq!(months_to_target(100.0, 0.0, 0.0, 50.0, 80), Some(0));
    assert_eq!(months_to_target(0.0, 0.0, 0.0, 100.0, 80), None);
}

#[test]
fn debt_payoff_monotonic_in_extra() {
    let debts = vec![
        Debt::new("Card", 3_000.0, 21.0, 90.0),
        Debt::new("Student loan", 15_000.0, 4.0, 160.0),
        Debt::new("Car", 9_000.0, 7.5, 230.0),
    ];

    for extra in [0.0, 50.0, 250.0, 1_000.0] {
        let result = simulate_debt_payoff(&DebtPayoffInput {
            debts: debts.clone(),
            extra_monthly_payment: extra,
        });
        assert!(result.months_with_extra <= result.months_to_payoff);
        assert!(result.total_interest_with_extra <= result.total_interest_paid);
        if extra == 0.0 {
            assert_eq!(result.months_with_extra, result.months_to_payoff);
            assert_eq!(result.total_interest_with_extra, result.total_interest_paid);
        }
    }
}

#[test]
fn zero_debt_short_circuit() {
    let result = simulate_debt_payoff(&DebtPayoffInput {
        debts: vec![Debt::new("Closed", 0.0, 15.0, 0.0)],
        extra_monthly_payment: 200.0,
    });
    assert_eq!(result.total_debt, 0.0);
    assert_eq!(result.months_to_payoff, 0);
    assert_eq!(result.total_interest_paid, 0.0);
    assert_eq!(result.months_with_extra, 0);
    assert_eq!(result.total_interest_with_extra, 0.0);
    assert_eq!(result.interest_saved, 0.0);
}

#[test]
fn score_is_bounded_and_reports_are_finite() {
    for input in sample_households() {
        let summary = build_summary(&input);
        assert!(summary.score <= 100);

        let mut values = vec![
            summary.cash_flow.monthly_free_cash_flow,
            summary.cash_flow.savings_rate,
            summary.cash_flow.investment_rate,
            summary.cash_flow.debt_to_income_ratio,
            summary.cash_flow.emergency_fund_months,
            summary.fire.fire_target_today,
            summary.fire.fire_target_adjusted,
            summary.fire.fire_progress,
            summary.projections.nominal,
            summary.projections.after_tax,
            summary.projections.real,
        ];
        values.extend(summary.metrics.iter().map(|m| m.value));
        values.extend(summary.scenarios.iter().map(|s| s.final_value));
        values.extend(summary.what_ifs.iter().map(|w| w.projected_net_worth));
        assert!(values.iter().all(|v| v.is_finite()), "non-finite value in {:?}", input);

        assert_eq!(summary.metrics.len(), 5);
        assert_eq!(summary.scenarios.len(), 3);
        assert_eq!(summary.what_ifs.len(), 3);
        assert!(!summary.recommendations.is_empty());
    }
}

#[test]
fn budget_rule_example() {
    let result = analyze_budget(&BudgetInput {
        income: 3_000.0,
        fixed_expenses: 1_200.0,
        variable_expenses: 600.0,
        debt_payments: 300.0,
        investments: 300.0,
    });
    assert!((result.rule.needs_pct - 50.0).abs() < 1e-9);
    assert!((result.rule.wants_pct - 20.0).abs() < 1e-9);
    assert!((result.rule.savings_pct - 30.0).abs() < 1e-9);
    assert_eq!(result.rule.status, HealthStatus::Good);
}

#[test]
fn emergency_fund_example() {
    let result = advise_emergency_fund(&EmergencyFundInput {
        monthly_expenses: 1_000.0,
        monthly_debt_payments: 200.0,
        current_fund: 3_000.0,
        dependents: 1,
        income_stability: IncomeStability::Stable,
    });
    assert_eq!(result.recommended_months, 7);
    assert!((result.recommended_amount - 8_400.0).abs() < 1e-9);
    assert!((result.current_coverage - 2.5).abs() < 1e-12);
    assert_eq!(result.status, HealthStatus::Risk);
}

#[test]
fn zero_income_ratios_are_zero() {
    let summary = build_summary(&RaioXInput {
        monthly_income: 0.0,
        monthly_savings: 500.0,
        monthly_investments: 500.0,
        monthly_debt_payments: 300.0,
        ..Default::default()
    });
    assert_eq!(summary.cash_flow.savings_rate, 0.0);
    assert_eq!(summary.cash_flow.investment_rate, 0.0);
    assert_eq!(summary.cash_flow.debt_to_income_ratio, 0.0);
    assert_eq!(summary.cash_flow.emergency_fund_months, 0.0);
}

#[test]
fn batch_matches_single_runs() {
    let households = sample_households();
    let runner = ScenarioRunner::new();
    let batch = runner.run_batch(&households);

    for (input, summary) in households.iter().zip(&batch) {
        let single = runner.run(input);
        assert_eq!(single.score, summary.score);
        assert_eq!(single.years_to_fire, summary.years_to_fire);
    }
}
