// File: crates/dotplot-core/src/scene.rs
// Summary: Abstract 2D scene API (lines, circles, text, clipping) and a recording backend.

use skia_safe as skia;

use crate::types::{PointF, RectF};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: skia::Color,
    pub align: TextAlign,
}

/// Drawing surface the plot renders into. Backends only need these primitives.
pub trait Scene {
    fn clear(&mut self, background: skia::Color);
    fn push_clip(&mut self, rect: RectF);
    fn pop_clip(&mut self);
    fn line(&mut self, from: PointF, to: PointF, color: skia::Color, width: f32);
    fn circle(&mut self, center: PointF, radius: f32, fill: skia::Color);
    fn rect(&mut self, rect: RectF, fill: skia::Color);
    /// `at` is the text baseline anchor, interpreted per `style.align`.
    fn text(&mut self, text: &str, at: PointF, style: &TextStyle);

    /// Advance width of `text` at `size`. Backends without shaping use a fixed per-glyph estimate.
    fn measure_text(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * 0.6
    }
}

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneOp {
    Clear(skia::Color),
    PushClip(RectF),
    PopClip,
    Line { from: PointF, to: PointF, color: skia::Color, width: f32 },
    Circle { center: PointF, radius: f32, fill: skia::Color },
    Rect { rect: RectF, fill: skia::Color },
    Text { text: String, at: PointF, style: TextStyle },
}

/// Scene that records calls instead of drawing them. Clearing drops earlier ops,
/// so after a redraw the log holds exactly one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingScene {
    pub ops: Vec<SceneOp>,
}

impl RecordingScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = &SceneOp> {
        self.ops.iter().filter(|op| matches!(op, SceneOp::Line { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &SceneOp> {
        self.ops.iter().filter(|op| matches!(op, SceneOp::Circle { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            SceneOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Scene for RecordingScene {
    fn clear(&mut self, background: skia::Color) {
        self.ops.clear();
        self.ops.push(SceneOp::Clear(background));
    }

    fn push_clip(&mut self, rect: RectF) {
        self.ops.push(SceneOp::PushClip(rect));
    }

    fn pop_clip(&mut self) {
        self.ops.push(SceneOp::PopClip);
    }

    fn line(&mut self, from: PointF, to: PointF, color: skia::Color, width: f32) {
        self.ops.push(SceneOp::Line { from, to, color, width });
    }

    fn circle(&mut self, center: PointF, radius: f32, fill: skia::Color) {
        self.ops.push(SceneOp::Circle { center, radius, fill });
    }

    fn rect(&mut self, rect: RectF, fill: skia::Color) {
        self.ops.push(SceneOp::Rect { rect, fill });
    }

    fn text(&mut self, text: &str, at: PointF, style: &TextStyle) {
        self.ops.push(SceneOp::Text { text: text.to_string(), at, style: *style });
    }
}
