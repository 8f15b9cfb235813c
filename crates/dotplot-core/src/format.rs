// File: crates/dotplot-core/src/format.rs
// Summary: Magnitude-suffixed number formatting (K/M/B) with three significant digits.

const SIGNIFICANT: i32 = 3;

/// Format a value with three significant digits and a K/M/B magnitude suffix.
///
/// `1_500_000.0` -> `"1.50M"`, `999.0` -> `"999"`, `2_300_000_000.0` -> `"2.30B"`.
/// Non-finite input formats as `"0"`.
pub fn format_value(v: f64) -> String {
    if !v.is_finite() || v == 0.0 {
        return "0".to_string();
    }
    let sign = if v < 0.0 { "-" } else { "" };
    let a = v.abs();

    // Round to an integer mantissa in [100, 1000) first so the suffix is
    // chosen from the rounded value (999_999 -> "1.00M", not "1000K").
    let mut exp = a.log10().floor() as i32;
    let mut mantissa = (a / 10f64.powi(exp - (SIGNIFICANT - 1))).round();
    if mantissa >= 10f64.powi(SIGNIFICANT) {
        mantissa /= 10.0;
        exp += 1;
    }

    let (shift, suffix) = match exp {
        e if e >= 9 => (9, "B"),
        e if e >= 6 => (6, "M"),
        e if e >= 3 => (3, "K"),
        _ => (0, ""),
    };
    let e = exp - shift;
    let decimals = (SIGNIFICANT - 1 - e).max(0) as usize;
    let scaled = mantissa * 10f64.powi(e - (SIGNIFICANT - 1));
    format!("{sign}{scaled:.decimals$}{suffix}")
}

/// Signed difference text: `+` for positive, `-` for negative, bare for zero.
pub fn format_signed(v: f64) -> String {
    if v.is_finite() && v > 0.0 {
        format!("+{}", format_value(v))
    } else {
        format_value(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_keep_three_significant_digits() {
        assert_eq!(format_value(12.345), "12.3");
        assert_eq!(format_value(5.0), "5.00");
        assert_eq!(format_value(0.125), "0.125");
    }

    #[test]
    fn rounding_promotes_suffix() {
        assert_eq!(format_value(999_999.0), "1.00M");
        assert_eq!(format_value(999.6), "1.00K");
    }
}
