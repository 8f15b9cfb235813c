// File: crates/dotplot-core/src/types.rs
// Summary: Shared types and constants (sizes, insets, points, rectangles).

/// Default container width in pixels.
pub const WIDTH: f32 = 800.0;
/// Default container height in pixels.
pub const HEIGHT: f32 = 600.0;

pub const RIGHT_INSET: f32 = 30.0;
pub const TOP_INSET: f32 = 20.0;
pub const BOTTOM_INSET: f32 = 40.0;
/// Gap kept between the last category and the value axis line.
pub const BOTTOM_SAFETY_MARGIN: f32 = 10.0;

const LEFT_INSET_BASE: f32 = 40.0;
const LEFT_INSET_PER_CHAR: f32 = 8.0;
const LEFT_INSET_MAX: f32 = 100.0;

/// Container size in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Negative or non-finite dimensions collapse to 0.
    pub fn new(width: f32, height: f32) -> Self {
        let clean = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self { width: clean(width), height: clean(height) }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Left inset grows with the widest category label, capped so the plot keeps its room.
    pub fn for_label_len(max_label_chars: usize) -> Self {
        let left = (LEFT_INSET_BASE + LEFT_INSET_PER_CHAR * max_label_chars as f32).min(LEFT_INSET_MAX);
        Self::new(left, RIGHT_INSET, TOP_INSET, BOTTOM_INSET)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::for_label_len(0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn midpoint(self, other: PointF) -> PointF {
        PointF::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Plot rectangle of a container after removing insets. Never inverted.
    pub fn inset(size: Size, insets: &Insets) -> Self {
        let right = (size.width - insets.right).max(insets.left);
        let bottom = (size.height - insets.bottom).max(insets.top);
        Self::from_ltrb(insets.left, insets.top, right, bottom)
    }

    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }

    pub fn contains(&self, p: PointF) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}
