// File: crates/dotplot-core/tests/geometry.rs
// Purpose: Row-to-mark mapping, colors by sign, safety-margin skipping, and zoom frames.

use dotplot_core::geometry::layout_marks;
use dotplot_core::scale::build_layout;
use dotplot_core::{sort_rows, CategoryIndex, Row, Settings, Size, SortPolicy, Transform};

#[test]
fn marks_follow_scales_and_sign_colors() {
    let rows = vec![Row::new("up", 10.0, 30.0), Row::new("down", 40.0, 20.0), Row::new("flat", 25.0, 25.0)];
    let idx = CategoryIndex::build(&rows);
    let layout = build_layout(&rows, &idx, Size::new(800.0, 600.0));
    let settings = Settings::default();
    let g = layout_marks(&rows, &idx, &layout.base, &layout, &settings);

    assert_eq!(g.marks.len(), 3);
    assert_eq!(g.clip, layout.plot);
    for m in &g.marks {
        let r = &rows[m.row];
        assert_eq!(m.pos_a.x, layout.base.value.map(r.value_a));
        assert_eq!(m.pos_b.x, layout.base.value.map(r.value_b));
        assert_eq!(m.pos_a.y, m.pos_b.y);
        assert_eq!(m.color_a, settings.dot_color_a);
        assert_eq!(m.color_b, settings.dot_color_b);
    }
    assert_eq!(g.marks[0].line_color, settings.positive_line_color);
    assert_eq!(g.marks[1].line_color, settings.negative_line_color);
    assert_eq!(g.marks[2].line_color, settings.positive_line_color);
}

#[test]
fn duplicate_categories_share_a_row_position() {
    let rows = vec![Row::new("x", 1.0, 2.0), Row::new("y", 3.0, 4.0), Row::new("x", 5.0, 6.0)];
    let idx = CategoryIndex::build(&rows);
    let layout = build_layout(&rows, &idx, Size::new(800.0, 600.0));
    let g = layout_marks(&rows, &idx, &layout.base, &layout, &Settings::default());
    assert_eq!(g.marks.len(), 3);
    assert_eq!(g.marks[0].pos_a.y, g.marks[2].pos_a.y);
    assert_ne!(g.marks[0].pos_a.y, g.marks[1].pos_a.y);
}

#[test]
fn single_row_lands_on_finite_position() {
    let rows = vec![Row::new("solo", 0.0, 0.0)];
    let idx = CategoryIndex::build(&rows);
    let layout = build_layout(&rows, &idx, Size::new(800.0, 600.0));
    let g = layout_marks(&rows, &idx, &layout.base, &layout, &Settings::default());
    assert_eq!(g.marks.len(), 1);
    assert!(g.marks[0].pos_a.is_finite() && g.marks[0].pos_b.is_finite());
}

#[test]
fn zoom_drops_rows_past_the_safety_margin() {
    let rows: Vec<Row> = (0..10).map(|i| Row::new(format!("c{i}"), i as f64, 10.0)).collect();
    let idx = CategoryIndex::build(&rows);
    let layout = build_layout(&rows, &idx, Size::new(800.0, 600.0));
    let settings = Settings::default();

    let base = layout_marks(&rows, &idx, &layout.base, &layout, &settings);
    assert_eq!(base.marks.len(), 10);

    // Category range is [20, 550]; at k=2 only y <= 550 survive: rows 0..=4.
    let zoomed_scales = layout.base.transformed(&Transform::new(2.0, 0.0, 0.0));
    let zoomed = layout_marks(&rows, &idx, &zoomed_scales, &layout, &settings);
    assert_eq!(zoomed.marks.len(), 5);
    assert!(zoomed.marks.iter().all(|m| m.category_index < 5));
}

#[test]
fn same_inputs_give_identical_geometry() {
    let rows = sort_rows(
        &[Row::new("a", 3.0, 1.0), Row::new("b", 2.0, 8.0), Row::new("c", 9.0, 9.0)],
        SortPolicy::DifferenceDescending,
    );
    let idx = CategoryIndex::build(&rows);
    let layout = build_layout(&rows, &idx, Size::new(640.0, 480.0));
    let s = Settings::default();
    let t = Transform::new(1.5, -20.0, -10.0);
    let a = layout_marks(&rows, &idx, &layout.base.transformed(&t), &layout, &s);
    let b = layout_marks(&rows, &idx, &layout.base.transformed(&t), &layout, &s);
    assert_eq!(a, b);
}
