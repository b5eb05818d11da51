//! Numeric parsing, rounding and formatting helpers.
//!
//! Source cells arrive as text. Parsing never fails loudly: invalid or empty
//! input yields `None` and the caller decides whether that is a coercion or
//! an error.

/// Parses a string as `f64`, returning `None` for invalid or empty strings.
///
/// Non-finite results (`NaN`, `inf`) are treated as invalid.
///
/// # Examples
///
/// ```
/// use readmit_common::parse_f64;
///
/// assert_eq!(parse_f64(" 12 "), Some(12.0));
/// assert_eq!(parse_f64("?"), None);
/// assert_eq!(parse_f64(""), None);
/// ```
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a non-negative integer.
///
/// Accepts integral floats such as `"3.0"`, which spreadsheet round-trips
/// tend to produce.
pub fn parse_u32(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = trimmed.parse::<u32>() {
        return Some(parsed);
    }
    let float = parse_f64(trimmed)?;
    if float >= 0.0 && float.fract() == 0.0 && float <= f64::from(u32::MAX) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(float as u32)
    } else {
        None
    }
}

/// Rounds `value` to `decimals` places.
///
/// Rounding applies to the exact binary value, so `2.675` (stored as
/// `2.67499...`) goes down. Exact ties go to the even digit.
///
/// # Examples
///
/// ```
/// use readmit_common::round_to;
///
/// assert_eq!(round_to(33.333_333, 1), 33.3);
/// assert_eq!(round_to(6.25, 1), 6.2);
/// assert_eq!(round_to(2.675, 2), 2.67);
/// ```
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let precision = decimals as usize;
    format!("{value:.precision$}").parse().unwrap_or(value)
}

/// `numerator / denominator * 100`, or `0.0` when the denominator is zero.
pub fn percent(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64 * 100.0
    }
}

/// Formats a floating-point number as a string without trailing zeros.
///
/// # Examples
///
/// ```
/// use readmit_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Formats a number with exactly `decimals` places (`30.0`, `0.01`).
pub fn format_fixed(v: f64, decimals: usize) -> String {
    format!("{v:.decimals$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_f64() {
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("  "), None);
        assert_eq!(parse_f64("3.14"), Some(3.14));
        assert_eq!(parse_f64("  3.14  "), Some(3.14));
        assert_eq!(parse_f64("invalid"), None);
        assert_eq!(parse_f64("NaN"), None);
        assert_eq!(parse_f64("inf"), None);
    }

    #[test]
    fn test_parse_u32() {
        assert_eq!(parse_u32("7"), Some(7));
        assert_eq!(parse_u32("7.0"), Some(7));
        assert_eq!(parse_u32("7.5"), None);
        assert_eq!(parse_u32("-1"), None);
        assert_eq!(parse_u32("?"), None);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(30.0, 1), 30.0);
        assert_eq!(round_to(66.666_666, 1), 66.7);
        assert_eq!(round_to(0.01, 2), 0.01);
    }

    #[test]
    fn test_round_to_ties_and_binary_values() {
        assert_eq!(round_to(6.25, 1), 6.2);
        assert_eq!(round_to(6.75, 1), 6.8);
        assert_eq!(round_to(2.25, 1), 2.2);
        assert_eq!(round_to(-2.25, 1), -2.2);
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(0.375, 2), 0.38);
        assert_eq!(round_to(1.005, 2), 1.0);
        assert_eq!(round_to(2.675, 2), 2.67);
        assert_eq!(round_to(12.5, 0), 12.0);
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(3, 10), 30.0);
        assert_eq!(percent(0, 0), 0.0);
        assert_eq!(percent(5, 0), 0.0);
    }

    #[test]
    fn test_format_numeric() {
        assert_eq!(format_numeric(1.0), "1");
        assert_eq!(format_numeric(1.5), "1.5");
        assert_eq!(format_numeric(1.50), "1.5");
        assert_eq!(format_numeric(0.0), "0");
        assert_eq!(format_numeric(120.0), "120");
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(30.0, 1), "30.0");
        assert_eq!(format_fixed(0.01, 2), "0.01");
    }
}
