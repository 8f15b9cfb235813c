// File: crates/dotplot-core/tests/data.rs
// Purpose: Tabular ingestion, value coercion, measure labels, and the category index.

use dotplot_core::{Cell, CategoryIndex, MeasureLabels, Row, TabularResult};

#[test]
fn missing_and_non_numeric_cells_coerce_to_zero() {
    let row = Row::from_cells(&[Cell::Text("North".into()), Cell::Null, Cell::Text("n/a".into())]);
    assert_eq!(row, Row::new("North", 0.0, 0.0));

    let short = Row::from_cells(&[Cell::Text("Only".into())]);
    assert_eq!(short.value_a, 0.0);
    assert_eq!(short.value_b, 0.0);

    let nan = Row::from_cells(&[Cell::Text("x".into()), Cell::Number(f64::NAN), Cell::Number(f64::INFINITY)]);
    assert_eq!((nan.value_a, nan.value_b), (0.0, 0.0));
}

#[test]
fn numeric_text_is_parsed() {
    let row = Row::from_cells(&[Cell::Number(2024.0), Cell::Text(" 12.5 ".into()), Cell::Number(3.0)]);
    assert_eq!(row.category, "2024");
    assert_eq!(row.value_a, 12.5);
    assert_eq!(row.value_b, 3.0);
}

#[test]
fn measure_labels_use_last_dotted_segment() {
    let headers = vec!["orders.division".to_string(), "orders.revenue_p1".to_string(), "revenue_p2".to_string()];
    let labels = MeasureLabels::from_headers(&headers);
    assert_eq!(labels.a, "revenue_p1");
    assert_eq!(labels.b, "revenue_p2");

    let fallback = MeasureLabels::from_headers(&["division".to_string()]);
    assert_eq!(fallback, MeasureLabels::default());
}

#[test]
fn category_index_collapses_duplicates_in_order() {
    let table = TabularResult::new(
        vec!["c".into(), "a".into(), "b".into()],
        vec![
            vec![Cell::Text("East".into()), Cell::Number(1.0), Cell::Number(2.0)],
            vec![Cell::Text("West".into()), Cell::Number(3.0), Cell::Number(4.0)],
            vec![Cell::Text("East".into()), Cell::Number(5.0), Cell::Number(6.0)],
        ],
    );
    let rows = table.to_rows();
    let idx = CategoryIndex::build(&rows);
    assert_eq!(idx.len(), 2);
    assert_eq!(idx.labels(), ["East".to_string(), "West".to_string()]);
    assert_eq!(idx.position("East"), Some(0));
    assert_eq!(idx.position("West"), Some(1));
    assert_eq!(idx.position("North"), None);
    assert_eq!(idx.max_label_len(), 4);
}
