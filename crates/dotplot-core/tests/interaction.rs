// File: crates/dotplot-core/tests/interaction.rs
// Purpose: Hover targets, tooltip text/placement under zoom, hide on exit, drill-down clicks.

use std::cell::RefCell;
use std::rc::Rc;

use dotplot_core::interaction::{HitRegion, MarkTarget, TooltipPlacement, SEGMENT_HIT_WIDTH};
use dotplot_core::{ClickTarget, DotPlot, Measure, MeasureLabels, PointF, PointerEvent, Row, Size};

// One row "A": 0 -> 100. Left inset 48, value range [48, 770], row at y = 20.
fn single_row_plot() -> DotPlot {
    let mut plot = DotPlot::new(Size::new(800.0, 600.0));
    plot.set_rows(vec![Row::new("A", 0.0, 100.0)], MeasureLabels::default());
    plot
}

#[test]
fn segment_hit_region_is_wider_than_stroke() {
    let r = HitRegion::Stroke {
        from: PointF::new(0.0, 0.0),
        to: PointF::new(100.0, 0.0),
        half_width: SEGMENT_HIT_WIDTH * 0.5,
    };
    assert!(r.contains(PointF::new(50.0, 3.0)));
    assert!(!r.contains(PointF::new(50.0, 4.0)));
    assert!(!r.contains(PointF::new(105.0, 0.0)));
}

#[test]
fn marker_hover_shows_value_near_pointer() {
    let mut plot = single_row_plot();
    let p = PointF::new(770.0, 21.0);
    let tip = plot.handle_pointer(PointerEvent::Move(p)).cloned().expect("tooltip");
    assert_eq!(tip.text, "Period 2: 100");
    assert_eq!(tip.placement, TooltipPlacement::NearPointer);
    assert_eq!(plot.interaction().hovered(), Some(MarkTarget::Marker { row: 0, measure: Measure::B }));
}

#[test]
fn segment_hover_shows_signed_difference_at_midpoint() {
    let mut plot = single_row_plot();
    let tip = plot.handle_pointer(PointerEvent::Move(PointF::new(400.0, 22.0))).cloned().expect("tooltip");
    assert_eq!(tip.text, "Difference: +100");
    assert_eq!(tip.placement, TooltipPlacement::Centered);
    assert!((tip.anchor.x - 409.0).abs() < 1e-3);
    assert!((tip.anchor.y - 20.0).abs() < 1e-3);
}

#[test]
fn segment_tooltip_tracks_zoomed_endpoints() {
    let mut plot = single_row_plot();
    let pointer = PointF::new(409.0, 20.0);
    plot.handle_pointer(PointerEvent::Move(pointer));
    plot.zoom_at(2.0, pointer);
    plot.pan_by(-50.0, 0.0);

    // Endpoints are now 2*48-459 and 2*770-459; the pointer still sits on the segment.
    let tip = plot.tooltip().expect("tooltip survives redraw");
    assert!((tip.anchor.x - 359.0).abs() < 1e-2, "anchor {:?}", tip.anchor);
}

#[test]
fn leaving_hides_immediately() {
    let mut plot = single_row_plot();
    assert!(plot.handle_pointer(PointerEvent::Move(PointF::new(400.0, 20.0))).is_some());
    assert!(plot.handle_pointer(PointerEvent::Leave).is_none());
    assert!(plot.tooltip().is_none());

    assert!(plot.handle_pointer(PointerEvent::Move(PointF::new(400.0, 20.0))).is_some());
    assert!(plot.handle_pointer(PointerEvent::Move(PointF::new(400.0, 60.0))).is_none());
    assert!(plot.interaction().hovered().is_none());
}

#[test]
fn pointer_outside_plot_does_not_hit() {
    let plot = single_row_plot();
    assert_eq!(plot.interaction().hit(PointF::new(10.0, 20.0)), None);
}

#[test]
fn click_invokes_drill_down_with_context() {
    let mut plot = single_row_plot();
    let seen: Rc<RefCell<Vec<ClickTarget>>> = Rc::default();
    let sink = Rc::clone(&seen);
    plot.on_drill_down(move |t| sink.borrow_mut().push(t.clone()));

    plot.handle_pointer(PointerEvent::Click(PointF::new(770.0, 20.0)));
    plot.handle_pointer(PointerEvent::Click(PointF::new(300.0, 20.0)));
    plot.handle_pointer(PointerEvent::Click(PointF::new(300.0, 300.0)));

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], ClickTarget { category: "A".into(), row: 0, measure: Some(Measure::B) });
    assert_eq!(seen[1], ClickTarget { category: "A".into(), row: 0, measure: None });
}

#[test]
fn bindings_cover_every_rendered_mark() {
    let mut plot = DotPlot::new(Size::new(800.0, 600.0));
    let rows = (0..6).map(|i| Row::new(format!("r{i}"), i as f64, 6.0 - i as f64)).collect();
    plot.set_rows(rows, MeasureLabels::default());
    assert_eq!(plot.interaction().binding_count(), plot.frame().geometry.marks.len() * 3);
}
