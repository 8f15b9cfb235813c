// File: crates/dotplot-core/src/interaction.rs
// Summary: Hover/click targets bound to rendered marks, tooltip content and placement.
// Notes:
// - Each mark registers a hover region the way a scene backend would (circle for
//   markers, stroked path for segments). Segments get a wide invisible region
//   on top of their thin visible stroke.
// - Bindings are replaced wholesale after every redraw, zoom frames included.

use crate::data::{Measure, MeasureLabels, Row};
use crate::format::{format_signed, format_value};
use crate::geometry::{Geometry, MARKER_RADIUS};
use crate::types::{PointF, RectF};

/// Width of the invisible hover path laid over each segment.
pub const SEGMENT_HIT_WIDTH: f32 = 7.0;
/// Tooltip offset from the pointer for marker hovers.
pub const POINTER_OFFSET: PointF = PointF::new(10.0, -12.0);

/// Pointer input in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Move(PointF),
    Leave,
    Click(PointF),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkTarget {
    Marker { row: usize, measure: Measure },
    Segment { row: usize },
}

impl MarkTarget {
    pub fn row(&self) -> usize {
        match *self {
            MarkTarget::Marker { row, .. } | MarkTarget::Segment { row } => row,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HitRegion {
    Circle { center: PointF, radius: f32 },
    Stroke { from: PointF, to: PointF, half_width: f32 },
}

impl HitRegion {
    pub fn contains(&self, p: PointF) -> bool {
        match *self {
            HitRegion::Circle { center, radius } => {
                let (dx, dy) = (p.x - center.x, p.y - center.y);
                dx * dx + dy * dy <= radius * radius
            }
            HitRegion::Stroke { from, to, half_width } => distance_to_segment(p, from, to) <= half_width,
        }
    }
}

fn distance_to_segment(p: PointF, a: PointF, b: PointF) -> f32 {
    let (abx, aby) = (b.x - a.x, b.y - a.y);
    let len2 = abx * abx + aby * aby;
    let t = if len2 > 0.0 { (((p.x - a.x) * abx + (p.y - a.y) * aby) / len2).clamp(0.0, 1.0) } else { 0.0 };
    let (cx, cy) = (a.x + t * abx, a.y + t * aby);
    ((p.x - cx).powi(2) + (p.y - cy).powi(2)).sqrt()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipPlacement {
    /// Anchored just beside the pointer.
    NearPointer,
    /// Centered on the anchor point.
    Centered,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub text: String,
    pub anchor: PointF,
    pub placement: TooltipPlacement,
}

/// Drill-down context handed to the host on click.
#[derive(Clone, Debug, PartialEq)]
pub struct ClickTarget {
    pub category: String,
    pub row: usize,
    /// `None` when the segment was clicked.
    pub measure: Option<Measure>,
}

#[derive(Clone, Debug, PartialEq)]
struct Binding {
    region: HitRegion,
    target: MarkTarget,
    category: String,
    text: String,
}

#[derive(Clone, Debug, Default)]
pub struct InteractionLayer {
    clip: RectF,
    bindings: Vec<Binding>,
    pointer: Option<PointF>,
    hovered: Option<MarkTarget>,
    tooltip: Option<Tooltip>,
}

impl InteractionLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebind hover targets to freshly rendered marks. An active hover is
    /// re-resolved at the last pointer position against the new positions.
    pub fn bind(&mut self, geometry: &Geometry, rows: &[Row], labels: &MeasureLabels) {
        self.clip = geometry.clip;
        self.bindings.clear();
        // Segments first so markers, drawn on top, win overlapping hits.
        for m in &geometry.marks {
            let category = rows.get(m.row).map(|r| r.category.clone()).unwrap_or_default();
            self.bindings.push(Binding {
                region: HitRegion::Stroke { from: m.pos_a, to: m.pos_b, half_width: SEGMENT_HIT_WIDTH * 0.5 },
                target: MarkTarget::Segment { row: m.row },
                category,
                text: format!("Difference: {}", format_signed(m.difference)),
            });
        }
        for m in &geometry.marks {
            let Some(r) = rows.get(m.row) else { continue };
            for (measure, center, value) in [(Measure::A, m.pos_a, r.value_a), (Measure::B, m.pos_b, r.value_b)] {
                self.bindings.push(Binding {
                    region: HitRegion::Circle { center, radius: MARKER_RADIUS },
                    target: MarkTarget::Marker { row: m.row, measure },
                    category: r.category.clone(),
                    text: format!("{}: {}", labels.get(measure), format_value(value)),
                });
            }
        }
        if let (Some(p), Some(_)) = (self.pointer, self.hovered) {
            self.pointer_move(p);
        }
    }

    fn hit_binding(&self, p: PointF) -> Option<&Binding> {
        if !self.clip.contains(p) {
            return None;
        }
        self.bindings.iter().rev().find(|b| b.region.contains(p))
    }

    /// Topmost mark under `p`, if any.
    pub fn hit(&self, p: PointF) -> Option<MarkTarget> {
        self.hit_binding(p).map(|b| b.target)
    }

    pub fn pointer_move(&mut self, p: PointF) -> Option<&Tooltip> {
        self.pointer = Some(p);
        let next = self.hit_binding(p).map(|b| {
            let tooltip = match b.region {
                HitRegion::Stroke { from, to, .. } => Tooltip {
                    text: b.text.clone(),
                    anchor: from.midpoint(to),
                    placement: TooltipPlacement::Centered,
                },
                HitRegion::Circle { .. } => Tooltip {
                    text: b.text.clone(),
                    anchor: PointF::new(p.x + POINTER_OFFSET.x, p.y + POINTER_OFFSET.y),
                    placement: TooltipPlacement::NearPointer,
                },
            };
            (b.target, tooltip)
        });
        match next {
            Some((target, tooltip)) => {
                self.hovered = Some(target);
                self.tooltip = Some(tooltip);
            }
            None => self.hide(),
        }
        self.tooltip.as_ref()
    }

    /// Pointer left the chart: hide at once.
    pub fn pointer_leave(&mut self) {
        self.pointer = None;
        self.hide();
    }

    pub fn click(&self, p: PointF) -> Option<ClickTarget> {
        self.hit_binding(p).map(|b| ClickTarget {
            category: b.category.clone(),
            row: b.target.row(),
            measure: match b.target {
                MarkTarget::Marker { measure, .. } => Some(measure),
                MarkTarget::Segment { .. } => None,
            },
        })
    }

    fn hide(&mut self) {
        self.hovered = None;
        self.tooltip = None;
    }

    pub fn hovered(&self) -> Option<MarkTarget> {
        self.hovered
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }
}
