// File: crates/dotplot-core/src/chart.rs
// Summary: DotPlot component: runs the sort -> scale -> geometry/labels -> interaction
// pipeline on each trigger and draws the resulting frame into a Scene.
// Notes:
// - Data, settings and resize changes rebuild everything from the source rows.
// - Zoom/pan only substitutes a derived scale pair and redraws.
// - All state is threaded through `self`; nothing is global.

use crate::axis::{category_axis, value_axis, AxisLabels};
use crate::data::{CategoryIndex, Measure, MeasureLabels, Row, TabularResult};
use crate::geometry::{layout_marks, Geometry, MARKER_RADIUS, SEGMENT_WIDTH};
use crate::interaction::{ClickTarget, InteractionLayer, PointerEvent, Tooltip, TooltipPlacement};
use crate::labels::{LabelDensity, CATEGORY_LABEL_FOOTPRINT};
use crate::scale::{build_layout, Layout, ScalePair};
use crate::scene::{Scene, TextAlign, TextStyle};
use crate::settings::Settings;
use crate::sort::sort_rows;
use crate::types::{PointF, RectF, Size};
use crate::view::{Transform, ViewportController};

const LABEL_SIZE: f32 = 12.0;
const TOOLTIP_PAD: f32 = 6.0;
const TOOLTIP_HEIGHT: f32 = 22.0;
const LEGEND_GAP: f32 = 16.0;
const AXIS_LINE_WIDTH: f32 = 1.0;

/// Host-supplied drill-down hook, invoked with the clicked mark's context.
pub type DrillDown = Box<dyn FnMut(&ClickTarget)>;

/// Everything needed to paint one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub scales: ScalePair,
    pub zoom: Transform,
    pub geometry: Geometry,
    pub value_axis: AxisLabels,
    pub category_axis: AxisLabels,
}

pub struct DotPlot {
    source: Vec<Row>,
    labels: MeasureLabels,
    settings: Settings,
    viewport: ViewportController,
    sorted: Vec<Row>,
    index: CategoryIndex,
    layout: Layout,
    category_density: LabelDensity,
    frame: Frame,
    interaction: InteractionLayer,
    drill_down: Option<DrillDown>,
}

impl DotPlot {
    pub fn new(size: Size) -> Self {
        let layout = build_layout(&[], &CategoryIndex::default(), size);
        let frame = Frame {
            scales: layout.base,
            zoom: Transform::IDENTITY,
            geometry: Geometry::default(),
            value_axis: AxisLabels::default(),
            category_axis: AxisLabels::default(),
        };
        let mut plot = Self {
            source: Vec::new(),
            labels: MeasureLabels::default(),
            settings: Settings::default(),
            viewport: ViewportController::new(size),
            sorted: Vec::new(),
            index: CategoryIndex::default(),
            layout,
            category_density: LabelDensity::new(0.0, CATEGORY_LABEL_FOOTPRINT, 0),
            frame,
            interaction: InteractionLayer::new(),
            drill_down: None,
        };
        plot.rebuild();
        plot
    }

    pub fn from_table(table: &TabularResult, settings: Settings, size: Size) -> Self {
        let mut plot = Self::new(size);
        plot.source = table.to_rows();
        plot.labels = table.measure_labels();
        plot.settings = settings;
        plot.rebuild();
        plot
    }

    // ---- triggers -----------------------------------------------------------

    /// New query result from the host.
    pub fn set_data(&mut self, table: &TabularResult) {
        self.source = table.to_rows();
        self.labels = table.measure_labels();
        self.rebuild();
    }

    pub fn set_rows(&mut self, rows: Vec<Row>, labels: MeasureLabels) {
        self.source = rows;
        self.labels = labels;
        self.rebuild();
    }

    /// New settings object from the host.
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
        self.rebuild();
    }

    /// Container size notification. Returns true when the plot was rebuilt.
    pub fn resize(&mut self, size: Size) -> bool {
        if !self.viewport.observe_resize(size) {
            return false;
        }
        self.rebuild();
        true
    }

    pub fn set_zoom(&mut self, proposed: Transform) {
        if let Some(scales) = self.viewport.set_transform(proposed) {
            self.redraw(scales);
        }
    }

    pub fn zoom_at(&mut self, factor: f32, anchor: PointF) {
        if let Some(scales) = self.viewport.zoom_at(factor, anchor) {
            self.redraw(scales);
        }
    }

    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        if let Some(scales) = self.viewport.pan_by(dx, dy) {
            self.redraw(scales);
        }
    }

    pub fn reset_zoom(&mut self) {
        if let Some(scales) = self.viewport.reset() {
            self.redraw(scales);
        }
    }

    /// Feed a pointer event. Returns the tooltip to show, if any.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<&Tooltip> {
        match event {
            PointerEvent::Move(p) => self.interaction.pointer_move(p),
            PointerEvent::Leave => {
                self.interaction.pointer_leave();
                None
            }
            PointerEvent::Click(p) => {
                if let Some(target) = self.interaction.click(p) {
                    if let Some(cb) = self.drill_down.as_mut() {
                        cb(&target);
                    }
                }
                self.interaction.tooltip()
            }
        }
    }

    pub fn on_drill_down<F>(&mut self, f: F)
    where
        F: FnMut(&ClickTarget) + 'static,
    {
        self.drill_down = Some(Box::new(f));
    }

    /// Stop reacting to container resizes and drop the drill-down hook.
    pub fn teardown(&mut self) {
        self.viewport.detach();
        self.drill_down = None;
        self.interaction.pointer_leave();
    }

    // ---- pipeline -----------------------------------------------------------

    fn rebuild(&mut self) {
        self.sorted = sort_rows(&self.source, self.settings.sort);
        self.index = CategoryIndex::build(&self.sorted);
        self.layout = build_layout(&self.sorted, &self.index, self.viewport.size());
        let (r0, r1) = self.layout.base.category.range();
        self.category_density = LabelDensity::new((r1 - r0).abs(), CATEGORY_LABEL_FOOTPRINT, self.index.len());
        self.viewport.rebase(&self.layout);
        log::debug!(
            "rebuild: {} rows, {} categories, sort {}, size {}x{}, left inset {}",
            self.sorted.len(),
            self.index.len(),
            self.settings.sort,
            self.layout.size.width,
            self.layout.size.height,
            self.layout.insets.left,
        );
        self.redraw(self.layout.base);
    }

    fn redraw(&mut self, scales: ScalePair) {
        let zoom = self.viewport.transform();
        let geometry = layout_marks(&self.sorted, &self.index, &scales, &self.layout, &self.settings);
        let value_axis = value_axis(&scales, &self.layout);
        let category_axis = category_axis(&self.index, &scales, &self.layout, &self.category_density, zoom.k);
        log::debug!("redraw: k={:.3} tx={:.1} ty={:.1}, {} marks", zoom.k, zoom.x, zoom.y, geometry.marks.len());
        self.interaction.bind(&geometry, &self.sorted, &self.labels);
        self.frame = Frame { scales, zoom, geometry, value_axis, category_axis };
    }

    // ---- accessors ----------------------------------------------------------

    /// Rows in current sort order.
    pub fn rows(&self) -> &[Row] {
        &self.sorted
    }

    pub fn category_index(&self) -> &CategoryIndex {
        &self.index
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn measure_labels(&self) -> &MeasureLabels {
        &self.labels
    }

    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    pub fn interaction(&self) -> &InteractionLayer {
        &self.interaction
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.interaction.tooltip()
    }

    // ---- drawing ------------------------------------------------------------

    /// Paint the current frame. The scene is cleared first, so each call
    /// leaves exactly one complete frame behind.
    pub fn draw(&self, scene: &mut dyn Scene) {
        let theme = &self.settings.theme;
        let plot = self.layout.plot;
        let f = &self.frame;
        scene.clear(theme.background);

        if self.settings.show_grid {
            // Rules at every tick, labelled or thinned.
            scene.push_clip(plot);
            for t in &f.category_axis.ticks {
                scene.line(PointF::new(plot.left, t.position), PointF::new(plot.right, t.position), theme.grid, 1.0);
            }
            for t in &f.value_axis.ticks {
                scene.line(PointF::new(t.position, plot.top), PointF::new(t.position, plot.bottom), theme.grid, 1.0);
            }
            scene.pop_clip();
        }

        self.draw_axes(scene, plot);
        self.draw_legend(scene, plot);

        scene.push_clip(f.geometry.clip);
        for m in &f.geometry.marks {
            scene.line(m.pos_a, m.pos_b, m.line_color, SEGMENT_WIDTH);
            scene.circle(m.pos_a, MARKER_RADIUS, m.color_a);
            scene.circle(m.pos_b, MARKER_RADIUS, m.color_b);
        }
        scene.pop_clip();

        if let Some(tip) = self.interaction.tooltip() {
            self.draw_tooltip(scene, tip);
        }
    }

    fn draw_axes(&self, scene: &mut dyn Scene, plot: RectF) {
        let theme = &self.settings.theme;
        let label = |align| TextStyle { size: LABEL_SIZE, color: theme.axis_label, align };
        scene.line(PointF::new(plot.left, plot.bottom), PointF::new(plot.right, plot.bottom), theme.axis_line, AXIS_LINE_WIDTH);
        scene.line(PointF::new(plot.left, plot.top), PointF::new(plot.left, plot.bottom), theme.axis_line, AXIS_LINE_WIDTH);

        for t in self.frame.value_axis.visible() {
            scene.line(PointF::new(t.position, plot.bottom), PointF::new(t.position, plot.bottom + 4.0), theme.axis_line, AXIS_LINE_WIDTH);
            scene.text(&t.text, PointF::new(t.position, plot.bottom + 18.0), &label(TextAlign::Center));
        }
        for t in self.frame.category_axis.visible() {
            scene.text(&t.text, PointF::new(plot.left - 8.0, t.position + LABEL_SIZE * 0.35), &label(TextAlign::Right));
        }
    }

    fn draw_legend(&self, scene: &mut dyn Scene, plot: RectF) {
        let theme = &self.settings.theme;
        let style = TextStyle { size: LABEL_SIZE, color: theme.axis_label, align: TextAlign::Right };
        let y = (self.layout.insets.top * 0.5).max(LABEL_SIZE * 0.5);
        let mut right = plot.right;
        for (measure, color) in [(Measure::B, self.settings.dot_color_b), (Measure::A, self.settings.dot_color_a)] {
            let text = self.labels.get(measure);
            scene.text(text, PointF::new(right, y + LABEL_SIZE * 0.35), &style);
            let w = scene.measure_text(text, LABEL_SIZE);
            scene.circle(PointF::new(right - w - MARKER_RADIUS - 4.0, y), MARKER_RADIUS, color);
            right -= w + MARKER_RADIUS * 2.0 + 4.0 + LEGEND_GAP;
        }
    }

    fn draw_tooltip(&self, scene: &mut dyn Scene, tip: &Tooltip) {
        let theme = &self.settings.theme;
        let size = self.layout.size;
        let w = scene.measure_text(&tip.text, LABEL_SIZE) + TOOLTIP_PAD * 2.0;
        let (mut left, mut top) = match tip.placement {
            TooltipPlacement::Centered => (tip.anchor.x - w * 0.5, tip.anchor.y - TOOLTIP_HEIGHT * 0.5),
            TooltipPlacement::NearPointer => (tip.anchor.x, tip.anchor.y - TOOLTIP_HEIGHT * 0.5),
        };
        left = left.min(size.width - w).max(0.0);
        top = top.min(size.height - TOOLTIP_HEIGHT).max(0.0);
        let rect = RectF::from_ltrb(left, top, left + w, top + TOOLTIP_HEIGHT);
        scene.rect(rect, theme.tooltip_fill);
        let style = TextStyle { size: LABEL_SIZE, color: theme.tooltip_text, align: TextAlign::Left };
        scene.text(&tip.text, PointF::new(left + TOOLTIP_PAD, top + TOOLTIP_HEIGHT * 0.5 + LABEL_SIZE * 0.35), &style);
    }
}
