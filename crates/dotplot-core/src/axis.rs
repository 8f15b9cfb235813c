// File: crates/dotplot-core/src/axis.rs
// Summary: Axis label layout for the value (bottom) and category (left) axes.

use crate::data::CategoryIndex;
use crate::format::format_value;
use crate::labels::{is_label_visible, skip_factor, LabelDensity, VALUE_LABEL_FOOTPRINT};
use crate::scale::{Layout, ScalePair};

/// Target number of value-axis ticks before density thinning.
pub const VALUE_TICK_COUNT: usize = 10;
const PX_SLACK: f32 = 0.5;

#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    /// Pixel position along the axis (x for the value axis, y for the category axis).
    pub position: f32,
    pub text: String,
    /// False when thinned out by the skip factor; the tick still gets a grid rule.
    pub visible: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisLabels {
    pub ticks: Vec<AxisTick>,
    pub skip: usize,
}

impl AxisLabels {
    pub fn visible(&self) -> impl Iterator<Item = &AxisTick> {
        self.ticks.iter().filter(|t| t.visible)
    }
}

/// Value-axis ticks over the current (possibly zoomed) domain, inside the plot span.
pub fn value_axis(scales: &ScalePair, layout: &Layout) -> AxisLabels {
    let (lo, hi) = (layout.plot.left - PX_SLACK, layout.plot.right + PX_SLACK);
    let in_plot: Vec<(f32, f64)> = scales
        .value
        .ticks(VALUE_TICK_COUNT)
        .into_iter()
        .map(|v| (scales.value.map(v), v))
        .filter(|(px, _)| *px >= lo && *px <= hi)
        .collect();
    // Ticks are regenerated for every frame, so the skip follows the live count.
    let skip = skip_factor(layout.plot.width(), VALUE_LABEL_FOOTPRINT, in_plot.len());
    let ticks = in_plot
        .into_iter()
        .enumerate()
        .map(|(i, (position, v))| AxisTick { position, text: format_value(v), visible: is_label_visible(i, skip) })
        .collect();
    AxisLabels { ticks, skip }
}

/// One label per unique category, thinned by the zoom-adjusted skip.
pub fn category_axis(
    index: &CategoryIndex,
    scales: &ScalePair,
    layout: &Layout,
    density: &LabelDensity,
    zoom_k: f32,
) -> AxisLabels {
    let skip = density.effective(zoom_k);
    let (lo, hi) = (layout.plot.top - PX_SLACK, layout.mark_floor() + PX_SLACK);
    let ticks = index
        .labels()
        .iter()
        .enumerate()
        .filter_map(|(i, label)| {
            let position = scales.category.map(i as f64);
            (position >= lo && position <= hi).then(|| AxisTick {
                position,
                text: label.clone(),
                visible: is_label_visible(i, skip),
            })
        })
        .collect();
    AxisLabels { ticks, skip }
}
