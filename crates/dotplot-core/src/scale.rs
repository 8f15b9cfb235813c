// File: crates/dotplot-core/src/scale.rs
// Summary: Linear value/category scales, base scale derivation, and zoom rescaling.

use crate::data::{CategoryIndex, Row};
use crate::types::{Insets, RectF, Size, BOTTOM_SAFETY_MARGIN};
use crate::view::Transform;

/// Value in data space (revenue, or a fractional category position).
pub type Value = f64;

const EPS: f64 = 1e-12;

/// Monotonic affine map from a numeric domain to a pixel range.
///
/// A degenerate domain (`d0 == d1`) maps every value to the range start,
/// so a single category or an all-zero dataset still lands on a finite pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub d0: Value,
    pub d1: Value,
    pub r0: f32,
    pub r1: f32,
}

impl LinearScale {
    pub fn new(domain: (Value, Value), range: (f32, f32)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        (self.d1 - self.d0).abs() < EPS
    }

    #[inline]
    pub fn domain(&self) -> (Value, Value) {
        (self.d0, self.d1)
    }

    #[inline]
    pub fn range(&self) -> (f32, f32) {
        (self.r0, self.r1)
    }

    #[inline]
    pub fn map(&self, v: Value) -> f32 {
        if self.is_degenerate() {
            return self.r0;
        }
        let t = (v - self.d0) / (self.d1 - self.d0);
        (self.r0 as f64 + t * (self.r1 - self.r0) as f64) as f32
    }

    #[inline]
    pub fn invert(&self, px: f32) -> Value {
        let rspan = (self.r1 - self.r0) as f64;
        if rspan.abs() < EPS {
            return self.d0;
        }
        self.d0 + (px - self.r0) as f64 / rspan * (self.d1 - self.d0)
    }

    /// Copy of this scale whose output is `k * self.map(v) + t`.
    ///
    /// The visible domain is recomputed against the same pixel range, so ticks
    /// follow the zoomed window. A degenerate domain has nothing to stretch, so
    /// its range moves instead.
    pub fn rescale(&self, k: f32, t: f32) -> Self {
        if self.is_degenerate() {
            return Self { r0: k * self.r0 + t, r1: k * self.r1 + t, ..*self };
        }
        let d0 = self.invert((self.r0 - t) / k);
        let d1 = self.invert((self.r1 - t) / k);
        Self { d0, d1, ..*self }
    }

    /// "Nice" tick values (1/2/5 x 10^n steps) covering the current domain.
    pub fn ticks(&self, count: usize) -> Vec<Value> {
        ticks(self.d0, self.d1, count)
    }
}

fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if (stop - start).abs() < EPS || count == 0 {
        return vec![start];
    }
    let (lo, hi, reverse) = if stop < start { (stop, start, true) } else { (start, stop, false) };
    let inc = tick_increment(lo, hi, count);
    if !inc.is_finite() || inc == 0.0 {
        return vec![lo];
    }
    let mut out = Vec::new();
    if inc > 0.0 {
        let i0 = (lo / inc).ceil() as i64;
        let i1 = (hi / inc).floor() as i64;
        for i in i0..=i1 {
            out.push(i as f64 * inc);
        }
    } else {
        let inv = -inc;
        let i0 = (lo * inv).ceil() as i64;
        let i1 = (hi * inv).floor() as i64;
        for i in i0..=i1 {
            out.push(i as f64 / inv);
        }
    }
    if reverse {
        out.reverse();
    }
    out
}

/// Value scale (horizontal) and category scale (vertical).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalePair {
    pub value: LinearScale,
    pub category: LinearScale,
}

impl ScalePair {
    /// Non-destructive zoom: derive a new pair, leaving `self` as the base.
    pub fn transformed(&self, t: &Transform) -> Self {
        Self {
            value: self.value.rescale(t.k, t.x),
            category: self.category.rescale(t.k, t.y),
        }
    }
}

/// Everything derived from data + container size for one render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub size: Size,
    pub insets: Insets,
    /// Inset rectangle; all marks are clipped to it.
    pub plot: RectF,
    pub base: ScalePair,
    pub category_count: usize,
    pub max_value: Value,
}

impl Layout {
    /// Lowest y a mark may sit at before it is considered half-clipped.
    pub fn mark_floor(&self) -> f32 {
        self.plot.bottom - BOTTOM_SAFETY_MARGIN
    }
}

/// Largest observed value, zero-based; negative data never extends the domain.
pub fn max_value(rows: &[Row]) -> Value {
    rows.iter().fold(0.0f64, |m, r| m.max(r.value_a).max(r.value_b))
}

/// Derive the base scale pair from sorted rows and the current container size.
pub fn build_layout(rows: &[Row], index: &CategoryIndex, size: Size) -> Layout {
    let insets = Insets::for_label_len(index.max_label_len());
    let plot = RectF::inset(size, &insets);
    let max_value = max_value(rows);

    let value = LinearScale::new((0.0, max_value), (plot.left, plot.right));
    let cat_max = index.len().saturating_sub(1) as Value;
    let cat_bottom = (plot.bottom - BOTTOM_SAFETY_MARGIN).max(plot.top);
    let category = LinearScale::new((0.0, cat_max), (plot.top, cat_bottom));

    Layout {
        size,
        insets,
        plot,
        base: ScalePair { value, category },
        category_count: index.len(),
        max_value,
    }
}
