// File: crates/dotplot-core/src/data.rs
// Summary: Host tabular input, per-category rows, measure labels, and the category index.
// Notes:
// - Rows are derived once per data refresh and never mutated afterwards.
// - Missing or non-numeric cells coerce to 0 so NaN never reaches the scales.

use std::collections::HashMap;

/// One typed cell of the host's query result.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Null,
}

impl Cell {
    /// Numeric value of the cell, coercing anything unusable to 0.
    pub fn as_value(&self) -> f64 {
        let v = match self {
            Cell::Number(n) => *n,
            Cell::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            Cell::Null => 0.0,
        };
        if v.is_finite() { v } else { 0.0 }
    }

    /// Display text for a category cell.
    pub fn as_label(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
            Cell::Null => String::new(),
        }
    }
}

/// Host-supplied result set: headers plus rows of cells (category, period one, period two).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TabularResult {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl TabularResult {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { headers, rows }
    }

    pub fn to_rows(&self) -> Vec<Row> {
        self.rows.iter().map(|cells| Row::from_cells(cells)).collect()
    }

    pub fn measure_labels(&self) -> MeasureLabels {
        MeasureLabels::from_headers(&self.headers)
    }
}

/// One category's pair of values.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub category: String,
    pub value_a: f64,
    pub value_b: f64,
}

impl Row {
    pub fn new(category: impl Into<String>, value_a: f64, value_b: f64) -> Self {
        let clean = |v: f64| if v.is_finite() { v } else { 0.0 };
        Self { category: category.into(), value_a: clean(value_a), value_b: clean(value_b) }
    }

    pub fn from_cells(cells: &[Cell]) -> Self {
        let category = cells.first().map(Cell::as_label).unwrap_or_default();
        let value = |i: usize| cells.get(i).map(Cell::as_value).unwrap_or(0.0);
        Self { category, value_a: value(1), value_b: value(2) }
    }

    /// Signed change from period one to period two.
    #[inline]
    pub fn difference(&self) -> f64 {
        self.value_b - self.value_a
    }
}

/// Which of the two values a marker shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Measure {
    A,
    B,
}

/// Display labels for the two measures, used by the legend and tooltips.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasureLabels {
    pub a: String,
    pub b: String,
}

impl Default for MeasureLabels {
    fn default() -> Self {
        Self { a: "Period 1".to_string(), b: "Period 2".to_string() }
    }
}

impl MeasureLabels {
    /// Headers are dotted-qualified (`orders.revenue_p1`); the last segment is displayed.
    pub fn from_headers(headers: &[String]) -> Self {
        let defaults = Self::default();
        let pick = |i: usize, fallback: String| {
            headers
                .get(i)
                .and_then(|h| h.rsplit('.').next())
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .unwrap_or(fallback)
        };
        Self { a: pick(1, defaults.a), b: pick(2, defaults.b) }
    }

    pub fn get(&self, m: Measure) -> &str {
        match m {
            Measure::A => &self.a,
            Measure::B => &self.b,
        }
    }
}

/// Stable category -> position mapping built from de-duplicated categories in sort order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryIndex {
    labels: Vec<String>,
    positions: HashMap<String, usize>,
}

impl CategoryIndex {
    pub fn build(rows: &[Row]) -> Self {
        let mut idx = Self::default();
        for r in rows {
            if !idx.positions.contains_key(&r.category) {
                idx.positions.insert(r.category.clone(), idx.labels.len());
                idx.labels.push(r.category.clone());
            }
        }
        idx
    }

    pub fn position(&self, category: &str) -> Option<usize> {
        self.positions.get(category).copied()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Longest label in characters; drives the left inset.
    pub fn max_label_len(&self) -> usize {
        self.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0)
    }
}
