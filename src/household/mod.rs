//! Household inputs: the consolidated report input, debts and income profile

mod data;
pub mod loader;

pub use data::{
    Debt, IncomeStability, RaioXInput, HORIZON_BOUNDS, TAX_RATE_BOUNDS, WITHDRAWAL_RATE_BOUNDS,
};
pub use loader::{load_debts_csv, load_household, load_households_csv};
