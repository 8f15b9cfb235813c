// File: crates/dotplot-core/src/labels.rs
// Summary: Axis label density: skip factors that keep labels from overlapping, including under zoom.

/// Estimated vertical footprint of one category label, in pixels.
pub const CATEGORY_LABEL_FOOTPRINT: f32 = 20.0;
/// Estimated horizontal footprint of one value-axis tick label, in pixels.
pub const VALUE_LABEL_FOOTPRINT: f32 = 50.0;

/// Stride at which labels can be drawn without overlap. Always >= 1.
pub fn skip_factor(available_px: f32, label_px: f32, label_count: usize) -> usize {
    let fit = if label_px > 0.0 && available_px.is_finite() {
        (available_px / label_px).floor()
    } else {
        0.0
    };
    let fit = if fit >= 1.0 { fit as usize } else { 1 };
    label_count.div_ceil(fit).max(1)
}

/// Zoomed skip: zooming in by `k` reveals proportionally more labels.
pub fn density_factor(base_skip: usize, zoom_k: f32) -> usize {
    if !(zoom_k.is_finite() && zoom_k > 0.0) {
        return base_skip.max(1);
    }
    ((base_skip as f32 / zoom_k).floor() as usize).max(1)
}

/// Index-modulo visibility test; index 0 is always shown.
#[inline]
pub fn is_label_visible(index: usize, skip: usize) -> bool {
    index % skip.max(1) == 0
}

/// Per-axis density state. The base skip is fixed per layout; the effective skip follows zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelDensity {
    pub footprint: f32,
    pub base_skip: usize,
}

impl LabelDensity {
    pub fn new(available_px: f32, footprint: f32, label_count: usize) -> Self {
        Self { footprint, base_skip: skip_factor(available_px, footprint, label_count) }
    }

    pub fn effective(&self, zoom_k: f32) -> usize {
        density_factor(self.base_skip, zoom_k)
    }
}
