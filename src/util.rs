//! Numeric helpers shared by the geometry and path code.
//!
//! This module provides:
//! - Decimal quantization for stored coordinates ([`to_fixed`])
//! - Path-data precision and number formatting ([`to_dom_precision`], [`fmt_num`])

/// Quantizes a stored coordinate to two decimals.
///
/// Applied on every resize so repeated scaling cannot accumulate unbounded float drift.
pub fn to_fixed(v: f64) -> f64 {
    (v * 1e2).round() / 1e2
}

/// Rounds a value to the precision used in emitted path data.
pub fn to_dom_precision(v: f64) -> f64 {
    (v * 1e4).round() / 1e4
}

/// Formats a number for path data and attributes: shortest form, no trailing `.0`,
/// and never `-0`.
pub fn fmt_num(v: f64) -> String {
    let v = to_dom_precision(v);
    if v == 0.0 {
        "0".to_string()
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_fixed_keeps_two_decimals() {
        assert_eq!(to_fixed(1.23456), 1.23);
        assert_eq!(to_fixed(-7.005001), -7.01);
        assert_eq!(to_fixed(10.0), 10.0);
    }

    #[test]
    fn fmt_num_drops_trailing_zero_and_negative_zero() {
        assert_eq!(fmt_num(10.0), "10");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(-0.00001), "0");
        assert_eq!(fmt_num(1.5), "1.5");
        assert_eq!(fmt_num(0.123456), "0.1235");
    }
}
