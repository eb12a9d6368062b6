//! Display formatting for magnitudes
//!
//! Values comfortably readable as plain decimals are shown fixed-point,
//! everything else falls back to exponential notation. Rounding is whatever
//! `core::fmt` does: the exact binary value is rounded to nearest, ties to even.

/// Digits after the decimal point in fixed-point output
pub const FIXED_DECIMALS: usize = 6;

/// Digits after the decimal point of an exponential mantissa
pub const MANTISSA_DIGITS: usize = 4;

const FIXED_LOWER_BOUND: f64 = 1e-3;
const FIXED_UPPER_BOUND: f64 = 1e6;

const LITERAL_LOWER_BOUND: f64 = 1e-7;
const LITERAL_UPPER_BOUND: f64 = 1e21;

/// Render `value` in exponential notation with `digits` mantissa decimals.
///
/// The exponent always carries a sign: `9.2969e+3`, `8.8542e-12`.
pub fn to_exponential(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    sign_exponent(format!("{:.*e}", digits, value))
}

/// Render a value typed by the user, as it is echoed back in the trace.
///
/// Plain shortest decimal for ordinary magnitudes; shortest exponential form
/// (`1e+200`, `2.5e-9`) outside `1e-7 ≤ |value| < 1e21`, so huge and tiny
/// inputs stay readable.
pub fn format_literal(value: f64) -> String {
    let ordinary = (LITERAL_LOWER_BOUND..LITERAL_UPPER_BOUND).contains(&value.abs());
    if ordinary || value == 0.0 || !value.is_finite() {
        value.to_string()
    } else {
        sign_exponent(format!("{value:e}"))
    }
}

fn sign_exponent(raw: String) -> String {
    let unsigned_exponent = raw
        .split_once('e')
        .is_some_and(|(_, exponent)| !exponent.starts_with('-'));

    if unsigned_exponent {
        raw.replacen('e', "e+", 1)
    } else {
        raw
    }
}

/// Whether `value` is displayed in exponential notation
pub fn should_show_scientific(value: f64) -> bool {
    let magnitude = value.abs();
    !(FIXED_LOWER_BOUND..FIXED_UPPER_BOUND).contains(&magnitude)
}

/// Render a magnitude for the primary result display
pub fn format_result(value: f64) -> String {
    if should_show_scientific(value) {
        to_exponential(value, MANTISSA_DIGITS)
    } else {
        format!("{:.*}", FIXED_DECIMALS, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponent_sign() {
        assert_eq!(to_exponential(9296.89720848, 4), "9.2969e+3");
        assert_eq!(to_exponential(8.8541878176e-12, 4), "8.8542e-12");
        assert_eq!(to_exponential(1.0, 4), "1.0000e+0");
        assert_eq!(to_exponential(-2.5e-7, 2), "-2.50e-7");
    }

    #[test]
    fn test_literals() {
        assert_eq!(format_literal(2.1), "2.1");
        assert_eq!(format_literal(1_000_000.0), "1000000");
        assert_eq!(format_literal(-300.0), "-300");
        assert_eq!(format_literal(0.0), "0");
        assert_eq!(format_literal(1e-7), "0.0000001");
        assert_eq!(format_literal(1.5e20), "150000000000000000000");
    }

    #[test]
    fn test_extreme_literals_use_exponent() {
        assert_eq!(format_literal(1e21), "1e+21");
        assert_eq!(format_literal(1e200), "1e+200");
        assert_eq!(format_literal(-2.5e-9), "-2.5e-9");
    }

    #[test]
    fn test_non_finite_passthrough() {
        assert_eq!(to_exponential(f64::NAN, 4), "NaN");
        assert_eq!(to_exponential(f64::INFINITY, 4), "inf");
        assert!(should_show_scientific(f64::NAN));
    }

    #[test]
    fn test_fixed_point_regime() {
        assert_eq!(format_result(0.001), "0.001000");
        assert_eq!(format_result(123.456), "123.456000");
        assert_eq!(format_result(-42.0), "-42.000000");
    }

    #[test]
    fn test_zero_is_exponential() {
        assert!(should_show_scientific(0.0));
        assert_eq!(format_result(0.0), "0.0000e+0");
    }
}
