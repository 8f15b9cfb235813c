// File: crates/dotplot-core/src/geometry.rs
// Summary: Maps sorted rows to marker positions and connecting segments under a scale pair.

use skia_safe as skia;

use crate::data::{CategoryIndex, Row};
use crate::scale::{Layout, ScalePair};
use crate::settings::Settings;
use crate::types::{PointF, RectF};

pub const MARKER_RADIUS: f32 = 5.0;
pub const SEGMENT_WIDTH: f32 = 2.0;
// Rows within this many pixels past the floor still count as on it (f32 rounding).
const FLOOR_SLACK: f32 = 0.5;

/// Geometry for one row: two markers and the segment joining them.
#[derive(Clone, Debug, PartialEq)]
pub struct RowMarks {
    /// Index into the sorted row list.
    pub row: usize,
    pub category_index: usize,
    pub pos_a: PointF,
    pub pos_b: PointF,
    pub difference: f64,
    pub line_color: skia::Color,
    pub color_a: skia::Color,
    pub color_b: skia::Color,
}

impl RowMarks {
    pub fn midpoint(&self) -> PointF {
        self.pos_a.midpoint(self.pos_b)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Geometry {
    pub clip: RectF,
    pub marks: Vec<RowMarks>,
}

/// Lay out every row under `scales`. Called with the base pair on rebuild and
/// with a derived pair on each zoom/pan frame.
pub fn layout_marks(
    rows: &[Row],
    index: &CategoryIndex,
    scales: &ScalePair,
    layout: &Layout,
    settings: &Settings,
) -> Geometry {
    let floor = layout.mark_floor() + FLOOR_SLACK;
    let marks = rows
        .iter()
        .enumerate()
        .filter_map(|(row, r)| {
            let category_index = index.position(&r.category)?;
            let y = scales.category.map(category_index as f64);
            if !y.is_finite() || y > floor {
                return None;
            }
            let pos_a = PointF::new(scales.value.map(r.value_a), y);
            let pos_b = PointF::new(scales.value.map(r.value_b), y);
            if !(pos_a.is_finite() && pos_b.is_finite()) {
                return None;
            }
            let difference = r.difference();
            Some(RowMarks {
                row,
                category_index,
                pos_a,
                pos_b,
                difference,
                line_color: settings.line_color(difference),
                color_a: settings.dot_color_a,
                color_b: settings.dot_color_b,
            })
        })
        .collect();
    Geometry { clip: layout.plot, marks }
}
