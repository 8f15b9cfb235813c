// File: crates/dotplot-core/tests/sort.rs
// Purpose: Row ordering policies, stability, and parsing of policy names.

use dotplot_core::{sort_rows, Row, SortPolicy};

fn cats(rows: &[Row]) -> Vec<&str> {
    rows.iter().map(|r| r.category.as_str()).collect()
}

fn sample() -> Vec<Row> {
    vec![
        Row::new("North", 100.0, 150.0),
        Row::new("South", 200.0, 180.0),
        Row::new("East", 50.0, 50.0),
        Row::new("West", 75.0, 160.0),
    ]
}

#[test]
fn original_is_identity_and_input_untouched() {
    let rows = sample();
    let before = rows.clone();
    let out = sort_rows(&rows, SortPolicy::Original);
    assert_eq!(out, before);
    assert_eq!(rows, before);
}

#[test]
fn ascending_and_descending_by_first_value() {
    let rows = sample();
    assert_eq!(cats(&sort_rows(&rows, SortPolicy::Ascending)), ["East", "West", "North", "South"]);
    assert_eq!(cats(&sort_rows(&rows, SortPolicy::Descending)), ["South", "North", "West", "East"]);
}

#[test]
fn difference_is_signed_not_absolute() {
    let rows = sample();
    // differences: North +50, South -20, East 0, West +85
    assert_eq!(
        cats(&sort_rows(&rows, SortPolicy::DifferenceAscending)),
        ["South", "East", "North", "West"]
    );
}

#[test]
fn difference_descending_reverses_ascending_without_ties() {
    let rows = sample();
    let mut asc = sort_rows(&rows, SortPolicy::DifferenceAscending);
    asc.reverse();
    assert_eq!(sort_rows(&rows, SortPolicy::DifferenceDescending), asc);
}

#[test]
fn ties_keep_input_order() {
    let rows = vec![
        Row::new("a", 10.0, 0.0),
        Row::new("b", 5.0, 0.0),
        Row::new("c", 10.0, 0.0),
        Row::new("d", 5.0, 0.0),
    ];
    assert_eq!(cats(&sort_rows(&rows, SortPolicy::Ascending)), ["b", "d", "a", "c"]);
    assert_eq!(cats(&sort_rows(&rows, SortPolicy::Descending)), ["a", "c", "b", "d"]);
}

#[test]
fn ascending_twice_is_idempotent() {
    let rows = sample();
    let once = sort_rows(&rows, SortPolicy::Ascending);
    let twice = sort_rows(&once, SortPolicy::Ascending);
    assert_eq!(once, twice);
}

#[test]
fn non_numeric_values_sort_as_zero() {
    let rows = vec![Row::new("x", 5.0, 0.0), Row::new("nan", f64::NAN, 0.0), Row::new("y", -1.0, 0.0)];
    assert_eq!(cats(&sort_rows(&rows, SortPolicy::Ascending)), ["y", "nan", "x"]);
}

#[test]
fn policy_names_parse_leniently() {
    assert_eq!("original".parse::<SortPolicy>().unwrap(), SortPolicy::Original);
    assert_eq!("DifferenceDescending".parse::<SortPolicy>().unwrap(), SortPolicy::DifferenceDescending);
    assert_eq!("difference-ascending".parse::<SortPolicy>().unwrap(), SortPolicy::DifferenceAscending);
    assert_eq!("DESCENDING".parse::<SortPolicy>().unwrap(), SortPolicy::Descending);
    assert!("sideways".parse::<SortPolicy>().is_err());
    for p in SortPolicy::ALL {
        assert_eq!(p.to_string().parse::<SortPolicy>().unwrap(), p);
    }
}
