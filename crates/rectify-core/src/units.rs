//! Engineering units and SI prefix handling.

use crate::error::{Error, Result};

/// Parse a SPICE-style value with optional SI suffix.
///
/// Supported suffixes:
/// - T (tera, 1e12)
/// - G (giga, 1e9)
/// - MEG (mega, 1e6)
/// - K (kilo, 1e3)
/// - M (milli, 1e-3)
/// - U (micro, 1e-6)
/// - N (nano, 1e-9)
/// - P (pico, 1e-12)
/// - F (femto, 1e-15)
pub fn parse_value(s: &str) -> Result<f64> {
    let trimmed = s.trim().to_uppercase();

    // Try to parse as plain number first
    if let Ok(v) = trimmed.parse::<f64>() {
        return Ok(v);
    }

    // Find where the numeric part ends
    let num_end = trimmed
        .find(|c: char| !c.is_ascii_digit() && c != '.' && c != '-' && c != '+' && c != 'E')
        .unwrap_or(trimmed.len());

    let invalid = || Error::ParseValue(s.trim().to_string());

    if num_end == 0 {
        return Err(invalid());
    }

    let (num_str, suffix) = trimmed.split_at(num_end);
    let value: f64 = num_str.parse().map_err(|_| invalid())?;

    let multiplier = match suffix {
        "T" => 1e12,
        "G" => 1e9,
        "MEG" => 1e6,
        "K" => 1e3,
        "" => 1.0,
        "M" => 1e-3,
        "U" => 1e-6,
        "N" => 1e-9,
        "P" => 1e-12,
        "F" => 1e-15,
        _ => return Err(invalid()),
    };

    Ok(value * multiplier)
}

/// Format a value with an appropriate SI prefix, four decimal places.
pub fn format_value(value: f64) -> String {
    const SCALES: [(f64, &str); 10] = [
        (1e12, "T"),
        (1e9, "G"),
        (1e6, "M"),
        (1e3, "k"),
        (1.0, ""),
        (1e-3, "m"),
        (1e-6, "u"),
        (1e-9, "n"),
        (1e-12, "p"),
        (1e-15, "f"),
    ];

    let abs_value = value.abs();
    if abs_value != 0.0 {
        for (scale, suffix) in SCALES {
            if abs_value >= scale {
                return format!("{:.4}{}", value / scale, suffix);
            }
        }
    }
    // Zero, or smaller than one femto: no prefix applies.
    format!("{:.4}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(parse_value("1.5").unwrap(), 1.5);
        assert_eq!(parse_value("-2.5").unwrap(), -2.5);
        assert_eq!(parse_value("1e-3").unwrap(), 1e-3);
    }

    #[test]
    fn test_parse_with_suffix() {
        fn approx_eq(a: Result<f64>, b: f64) -> bool {
            a.is_ok_and(|v| (v - b).abs() < b.abs() * 1e-10 + 1e-20)
        }

        assert!(approx_eq(parse_value("1k"), 1e3));
        assert!(approx_eq(parse_value("4.7K"), 4.7e3));
        assert!(approx_eq(parse_value("10M"), 10e-3));
        assert!(approx_eq(parse_value("10MEG"), 10e6));
        assert!(approx_eq(parse_value("100n"), 100e-9));
        assert!(approx_eq(parse_value("1u"), 1e-6));
        assert!(approx_eq(parse_value("10p"), 10e-12));
        assert!(approx_eq(parse_value("-650m"), -0.65));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_value("abc").is_err());
        assert!(parse_value("").is_err());
        assert!(parse_value("1.5x").is_err());
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1000.0), "1.0000k");
        assert_eq!(format_value(0.001), "1.0000m");
        assert_eq!(format_value(1e-9), "1.0000n");
        assert_eq!(format_value(0.0241), "24.1000m");
    }
}
