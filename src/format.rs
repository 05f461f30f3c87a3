//! Display formatting (pt-PT conventions)
//!
//! Presentation helpers kept apart from the calculators. Every formatter is
//! built locally from its arguments; there is no shared formatter state.

use crate::numeric::finite_or_zero;

/// Group separator used by pt-PT (no-break space)
const GROUP_SEPARATOR: char = '\u{a0}';
const DECIMAL_SEPARATOR: char = ',';

/// Number formatter for a fixed count of fraction digits
#[derive(Debug, Clone, Copy)]
pub struct NumberFormat {
    pub fraction_digits: usize,
}

impl NumberFormat {
    pub fn new(fraction_digits: usize) -> Self {
        Self { fraction_digits }
    }

    /// Format with pt-PT separators.
    ///
    /// pt-PT only groups thousands once the integer part has five or more
    /// digits, so `1234` stays `1234` while `12345` becomes `12 345`.
    pub fn format(&self, value: f64) -> String {
        let value = finite_or_zero(value);
        let fixed = format!("{:.*}", self.fraction_digits, value.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };

        let mut out = String::new();
        // "-0,00" is not a useful rendering
        if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
            out.push('-');
        }
        out.push_str(&group_digits(int_part));
        if let Some(frac) = frac_part {
            out.push(DECIMAL_SEPARATOR);
            out.push_str(frac);
        }
        out
    }
}

fn group_digits(digits: &str) -> String {
    if digits.len() < 5 {
        return digits.to_string();
    }
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}

/// Format an amount as euros, e.g. `12 345,67 €`
pub fn format_currency(value: f64) -> String {
    format!("{}{}€", NumberFormat::new(2).format(value), GROUP_SEPARATOR)
}

/// Format a value already expressed in percent units, e.g. `25.5` -> `25,5%`
pub fn format_percent(value: f64, fraction_digits: usize) -> String {
    format!("{}%", NumberFormat::new(fraction_digits).format(value))
}

/// Format a plain number with the given fraction digits
pub fn format_number(value: f64, fraction_digits: usize) -> String {
    NumberFormat::new(fraction_digits).format(value)
}

/// Format an optional year estimate, e.g. `12,5 anos` or `—`
pub fn format_years(years: Option<f64>) -> String {
    match years {
        Some(y) => format!("{} anos", NumberFormat::new(1).format(y)),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(1234.5), "1234,50\u{a0}€");
        assert_eq!(format_currency(12345.678), "12\u{a0}345,68\u{a0}€");
        assert_eq!(format_currency(1_234_567.0), "1\u{a0}234\u{a0}567,00\u{a0}€");
        assert_eq!(format_currency(-250.0), "-250,00\u{a0}€");
    }

    #[test]
    fn test_percent_and_number() {
        assert_eq!(format_percent(25.5, 1), "25,5%");
        assert_eq!(format_percent(7.0, 0), "7%");
        assert_eq!(format_number(f64::NAN, 2), "0,00");
        assert_eq!(format_number(-0.001, 2), "0,00");
    }

    #[test]
    fn test_years() {
        assert_eq!(format_years(Some(12.26)), "12,3 anos");
        assert_eq!(format_years(None), "—");
    }
}
