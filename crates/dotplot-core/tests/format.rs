// File: crates/dotplot-core/tests/format.rs
// Purpose: Magnitude-suffixed number formatting.

use dotplot_core::{format_signed, format_value};

#[test]
fn suffixes_and_significant_digits() {
    assert_eq!(format_value(1_500_000.0), "1.50M");
    assert_eq!(format_value(999.0), "999");
    assert_eq!(format_value(2_300_000_000.0), "2.30B");
    assert_eq!(format_value(1_500.0), "1.50K");
    assert_eq!(format_value(15_000_000.0), "15.0M");
    assert_eq!(format_value(150_000.0), "150K");
}

#[test]
fn zero_negative_and_non_finite() {
    assert_eq!(format_value(0.0), "0");
    assert_eq!(format_value(-1_500_000.0), "-1.50M");
    assert_eq!(format_value(f64::NAN), "0");
    assert_eq!(format_value(f64::INFINITY), "0");
}

#[test]
fn beyond_billions_stays_in_billions() {
    assert_eq!(format_value(1_500_000_000_000.0), "1500B");
}

#[test]
fn signed_difference() {
    assert_eq!(format_signed(50.0), "+50.0");
    assert_eq!(format_signed(-20.0), "-20.0");
    assert_eq!(format_signed(0.0), "0");
    assert_eq!(format_signed(1_200_000.0), "+1.20M");
}
