// File: crates/dotplot-core/src/sort.rs
// Summary: Row ordering policies. Sorting is stable and never touches the input slice.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::data::Row;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortPolicy {
    #[default]
    Original,
    Ascending,
    Descending,
    DifferenceAscending,
    DifferenceDescending,
}

impl SortPolicy {
    pub const ALL: [SortPolicy; 5] = [
        SortPolicy::Original,
        SortPolicy::Ascending,
        SortPolicy::Descending,
        SortPolicy::DifferenceAscending,
        SortPolicy::DifferenceDescending,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SortPolicy::Original => "original",
            SortPolicy::Ascending => "ascending",
            SortPolicy::Descending => "descending",
            SortPolicy::DifferenceAscending => "differenceAscending",
            SortPolicy::DifferenceDescending => "differenceDescending",
        }
    }
}

impl fmt::Display for SortPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownSortPolicy(pub String);

impl fmt::Display for UnknownSortPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sort policy '{}'", self.0)
    }
}

impl std::error::Error for UnknownSortPolicy {}

impl FromStr for SortPolicy {
    type Err = UnknownSortPolicy;

    /// Case-insensitive; `-`, `_` and spaces are ignored (`difference-descending` works).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        SortPolicy::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(&key))
            .ok_or_else(|| UnknownSortPolicy(s.to_string()))
    }
}

// Keys are computed on demand, never cached on the row.
fn key(policy: SortPolicy, r: &Row) -> f64 {
    let v = match policy {
        SortPolicy::Ascending | SortPolicy::Descending => r.value_a,
        SortPolicy::DifferenceAscending | SortPolicy::DifferenceDescending => r.difference(),
        SortPolicy::Original => 0.0,
    };
    if v.is_finite() { v } else { 0.0 }
}

/// Return a new ordering of `rows` under `policy`. Equal keys keep their input order.
pub fn sort_rows(rows: &[Row], policy: SortPolicy) -> Vec<Row> {
    let mut out = rows.to_vec();
    if policy == SortPolicy::Original {
        return out;
    }
    let descending = matches!(policy, SortPolicy::Descending | SortPolicy::DifferenceDescending);
    // slice::sort_by is stable; reversing an Ordering keeps Equal as Equal.
    out.sort_by(|a, b| {
        let o = key(policy, a).partial_cmp(&key(policy, b)).unwrap_or(Ordering::Equal);
        if descending { o.reverse() } else { o }
    });
    out
}
