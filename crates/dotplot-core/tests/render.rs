// File: crates/dotplot-core/tests/render.rs
// Purpose: Headless Skia raster output: PNG bytes, PNG file, and RGBA buffer shape.

use dotplot_core::{DotPlot, MeasureLabels, PointF, PointerEvent, Row, Settings, Size, Transform};

fn plot() -> DotPlot {
    let mut plot = DotPlot::new(Size::new(320.0, 200.0));
    plot.set_settings(Settings::default().with_grid(true));
    plot.set_rows(
        vec![Row::new("North", 100.0, 150.0), Row::new("South", 200.0, 180.0), Row::new("East", 50.0, 50.0)],
        MeasureLabels::default(),
    );
    plot
}

#[test]
fn render_png_bytes_and_file() {
    let plot = plot();
    let bytes = plot.render_to_png_bytes().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!((img.width(), img.height()), (320, 200));

    let out = std::path::PathBuf::from("target/test_out/dotplot_smoke.png");
    plot.render_to_png(&out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}

#[test]
fn render_rgba8_buffer() {
    let mut plot = plot();
    plot.set_zoom(Transform::new(1.5, -20.0, -10.0));
    plot.handle_pointer(PointerEvent::Move(PointF::new(160.0, 100.0)));
    let (px, w, h, stride) = plot.render_to_rgba8().expect("rgba render");
    assert_eq!((w, h), (320, 200));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);
    // Opaque white background in the top-left corner.
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}
