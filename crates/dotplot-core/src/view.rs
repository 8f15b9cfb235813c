// File: crates/dotplot-core/src/view.rs
// Summary: Viewport state: container size observation and the bounded zoom/pan transform.
// Notes:
// - Derived scales are always rebuilt from the base pair; a transform is never
//   applied on top of a previously transformed pair.

use crate::scale::{Layout, ScalePair};
use crate::types::{PointF, Size};

pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 5.0;

/// Screen-space affine transform: `p' = k * p + (x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub k: f32,
    pub x: f32,
    pub y: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform { k: 1.0, x: 0.0, y: 0.0 };

    pub const fn new(k: f32, x: f32, y: f32) -> Self {
        Self { k, x, y }
    }

    #[inline]
    pub fn invert_x(&self, x: f32) -> f32 {
        (x - self.x) / self.k
    }

    #[inline]
    pub fn invert_y(&self, y: f32) -> f32 {
        (y - self.y) / self.k
    }

    /// Translate in pre-scale units.
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.k, self.x + self.k * dx, self.y + self.k * dy)
    }

    /// Scale by `factor` keeping the screen point `anchor` fixed. The new
    /// `k` is clamped before the translate is solved, so a gesture past the
    /// zoom limits leaves the anchor where it was.
    pub fn scale_about(&self, factor: f32, anchor: PointF) -> Self {
        let k = (self.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        let ax = self.invert_x(anchor.x);
        let ay = self.invert_y(anchor.y);
        Self::new(k, anchor.x - ax * k, anchor.y - ay * k)
    }

    /// Clamp `k` into [MIN_ZOOM, MAX_ZOOM] and keep the visible window
    /// `[0,0]x[w,h]` inside the same extent of the base layout.
    pub fn constrained(&self, size: Size) -> Self {
        let k = if self.k.is_finite() { self.k.clamp(MIN_ZOOM, MAX_ZOOM) } else { 1.0 };
        let x = if self.x.is_finite() { self.x } else { 0.0 };
        let y = if self.y.is_finite() { self.y } else { 0.0 };
        let t = Self::new(k, x, y);

        let (w, h) = (size.width, size.height);
        let dx0 = t.invert_x(0.0);
        let dx1 = t.invert_x(w) - w;
        let dy0 = t.invert_y(0.0);
        let dy1 = t.invert_y(h) - h;
        t.translate(fit_axis(dx0, dx1), fit_axis(dy0, dy1))
    }
}

// Window larger than the extent (zoomed out): center it. Otherwise pull the
// nearer overhanging edge back inside.
fn fit_axis(d0: f32, d1: f32) -> f32 {
    if d1 > d0 {
        (d0 + d1) / 2.0
    } else {
        let lo = d0.min(0.0);
        if lo != 0.0 { lo } else { d1.max(0.0) }
    }
}

/// Owns container size, the base scale pair, and the current gesture transform.
#[derive(Clone, Debug)]
pub struct ViewportController {
    size: Size,
    base: Option<ScalePair>,
    transform: Transform,
    attached: bool,
}

impl ViewportController {
    pub fn new(size: Size) -> Self {
        Self { size, base: None, transform: Transform::IDENTITY, attached: true }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Record a container size change. Returns true when a full rebuild is due.
    pub fn observe_resize(&mut self, size: Size) -> bool {
        if !self.attached {
            log::debug!("resize to {}x{} after teardown ignored", size.width, size.height);
            return false;
        }
        if size == self.size {
            return false;
        }
        self.size = size;
        true
    }

    /// Stop observing the container.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    /// Install a freshly built base pair; any zoom is reset against the new layout.
    pub fn rebase(&mut self, layout: &Layout) {
        self.base = Some(layout.base);
        self.transform = Transform::IDENTITY;
    }

    /// Set the gesture transform (constrained) and return the derived pair.
    pub fn set_transform(&mut self, proposed: Transform) -> Option<ScalePair> {
        self.transform = proposed.constrained(self.size);
        self.current()
    }

    pub fn zoom_at(&mut self, factor: f32, anchor: PointF) -> Option<ScalePair> {
        self.set_transform(self.transform.scale_about(factor, anchor))
    }

    pub fn pan_by(&mut self, dx: f32, dy: f32) -> Option<ScalePair> {
        let t = self.transform;
        self.set_transform(Transform::new(t.k, t.x + dx, t.y + dy))
    }

    pub fn reset(&mut self) -> Option<ScalePair> {
        self.set_transform(Transform::IDENTITY)
    }

    /// Base pair with the current transform applied; `None` before the first layout.
    pub fn current(&self) -> Option<ScalePair> {
        self.base.map(|b| b.transformed(&self.transform))
    }

    pub fn base(&self) -> Option<ScalePair> {
        self.base
    }
}
