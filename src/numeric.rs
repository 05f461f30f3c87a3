//! Numeric guards shared by every calculator
//!
//! Values entering a calculation are coerced here: non-finite becomes 0,
//! non-negative quantities are floored, rates are clamped into their bounds,
//! and every division returns 0 instead of NaN/Infinity.

/// Replace NaN and +/-Infinity with 0
#[inline]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Finite value floored at 0
#[inline]
pub fn non_negative(value: f64) -> f64 {
    finite_or_zero(value).max(0.0)
}

/// Finite value clamped into `[min, max]`
#[inline]
pub fn clamp_finite(value: f64, min: f64, max: f64) -> f64 {
    finite_or_zero(value).clamp(min, max)
}

/// Division that yields 0 for a zero (or non-finite) denominator or result
#[inline]
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 || !denominator.is_finite() {
        return 0.0;
    }
    finite_or_zero(numerator / denominator)
}

/// Percentage of `part` in `whole` (0 when `whole` is 0)
#[inline]
pub fn percent_of(part: f64, whole: f64) -> f64 {
    safe_div(part, whole) * 100.0
}

/// Whole months in a horizon expressed in (possibly fractional) years.
/// Saturates at `u32::MAX`.
pub fn years_to_months(years: f64) -> u32 {
    // float-to-int `as` saturates
    (non_negative(years) * 12.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finite_becomes_zero() {
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(f64::INFINITY), 0.0);
        assert_eq!(finite_or_zero(-3.5), -3.5);
        assert_eq!(non_negative(-3.5), 0.0);
        assert_eq!(non_negative(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_safe_div_guards_zero_denominator() {
        assert_eq!(safe_div(10.0, 0.0), 0.0);
        assert_eq!(safe_div(10.0, f64::NAN), 0.0);
        assert_eq!(safe_div(10.0, 4.0), 2.5);
        assert_eq!(percent_of(1.0, 0.0), 0.0);
        assert_eq!(percent_of(1.0, 4.0), 25.0);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp_finite(75.0, 0.0, 60.0), 60.0);
        assert_eq!(clamp_finite(f64::NAN, 1.0, 10.0), 1.0);
        assert_eq!(clamp_finite(-4.0, -10.0, 10.0), -4.0);
    }

    #[test]
    fn test_years_to_months_rounds() {
        assert_eq!(years_to_months(0.0), 0);
        assert_eq!(years_to_months(1.5), 18);
        assert_eq!(years_to_months(0.04), 0);
        assert_eq!(years_to_months(-2.0), 0);
        assert_eq!(years_to_months(200.0), 2_400);
        assert_eq!(years_to_months(1e12), u32::MAX);
    }
}
