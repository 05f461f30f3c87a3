//! Load household inputs and debt lists from JSON/CSV files

use super::{Debt, RaioXInput};
use crate::error::{Error, Result};
use csv::Reader;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Raw CSV row of a debt list (`name,balance,annual_rate,minimum_payment`)
#[derive(Debug, serde::Deserialize)]
struct DebtCsvRow {
    #[serde(alias = "Name")]
    name: String,
    #[serde(alias = "Balance")]
    balance: f64,
    #[serde(alias = "AnnualRate", alias = "rate")]
    annual_rate: f64,
    #[serde(alias = "MinimumPayment", alias = "minimum")]
    minimum_payment: f64,
}

impl DebtCsvRow {
    fn to_debt(self, line: usize) -> Result<Debt> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::InvalidInput(format!("debt on row {} has no name", line)));
        }
        Ok(Debt::new(name, self.balance, self.annual_rate, self.minimum_payment))
    }
}

/// Load a single household from a JSON file. Missing fields take defaults.
pub fn load_household(path: &Path) -> Result<RaioXInput> {
    let file = File::open(path)?;
    let input = serde_json::from_reader(BufReader::new(file))?;
    Ok(input)
}

/// Load many households from a CSV file whose headers are the
/// `RaioXInput` field names
pub fn load_households_csv(path: &Path) -> Result<Vec<RaioXInput>> {
    let mut reader = Reader::from_path(path)?;
    let mut households = Vec::new();

    for result in reader.deserialize() {
        let input: RaioXInput = result?;
        households.push(input);
    }

    log::info!("Loaded {} households from {}", households.len(), path.display());
    Ok(households)
}

/// Load a debt list from CSV
pub fn load_debts_csv(path: &Path) -> Result<Vec<Debt>> {
    let file = File::open(path)?;
    read_debts(file)
}

/// Parse a debt list from any CSV reader
pub fn read_debts<R: std::io::Read>(source: R) -> Result<Vec<Debt>> {
    let mut reader = Reader::from_reader(source);
    let mut debts = Vec::new();

    for (idx, result) in reader.deserialize::<DebtCsvRow>().enumerate() {
        let row = result?;
        // +2: header line and 1-indexing
        debts.push(row.to_debt(idx + 2)?);
    }

    Ok(debts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_debts() {
        let data = "name,balance,annual_rate,minimum_payment\n\
                    Card,2500,19.9,75\n\
                    Car loan,8000,6.5,210\n";
        let debts = read_debts(data.as_bytes()).unwrap();

        assert_eq!(debts.len(), 2);
        assert_eq!(debts[0].name, "Card");
        assert_eq!(debts[1].annual_rate, 6.5);
    }

    #[test]
    fn test_read_debts_rejects_unnamed_row() {
        let data = "name,balance,annual_rate,minimum_payment\n ,100,5,10\n";
        let err = read_debts(data.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_read_debts_bad_number() {
        let data = "name,balance,annual_rate,minimum_payment\nCard,lots,5,10\n";
        assert!(matches!(read_debts(data.as_bytes()), Err(Error::Csv(_))));
    }
}
