// File: crates/dotplot-core/src/raster.rs
// Summary: Skia CPU raster backend: a Scene over a Canvas, plus headless PNG/RGBA output.

use skia_safe as skia;

use crate::chart::DotPlot;
use crate::error::{Error, Result};
use crate::scene::{Scene, TextStyle};
use crate::text::TextShaper;
use crate::types::{PointF, RectF};

/// Scene implementation drawing straight into a Skia canvas.
pub struct SkiaScene<'a> {
    canvas: &'a skia::Canvas,
    shaper: &'a TextShaper,
}

impl<'a> SkiaScene<'a> {
    pub fn new(canvas: &'a skia::Canvas, shaper: &'a TextShaper) -> Self {
        Self { canvas, shaper }
    }
}

fn sk_rect(r: RectF) -> skia::Rect {
    skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom)
}

fn fill(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

impl Scene for SkiaScene<'_> {
    fn clear(&mut self, background: skia::Color) {
        self.canvas.clear(background);
    }

    fn push_clip(&mut self, r: RectF) {
        self.canvas.save();
        self.canvas.clip_rect(sk_rect(r), skia::ClipOp::Intersect, true);
    }

    fn pop_clip(&mut self) {
        self.canvas.restore();
    }

    fn line(&mut self, from: PointF, to: PointF, color: skia::Color, width: f32) {
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(width);
        stroke.set_color(color);
        self.canvas.draw_line((from.x, from.y), (to.x, to.y), &stroke);
    }

    fn circle(&mut self, center: PointF, radius: f32, color: skia::Color) {
        self.canvas.draw_circle((center.x, center.y), radius, &fill(color));
    }

    fn rect(&mut self, r: RectF, color: skia::Color) {
        self.canvas.draw_round_rect(sk_rect(r), 3.0, 3.0, &fill(color));
    }

    fn text(&mut self, text: &str, at: PointF, style: &TextStyle) {
        self.shaper.draw(self.canvas, text, at.x, at.y, style);
    }

    fn measure_text(&self, text: &str, size: f32) -> f32 {
        self.shaper.measure_width(text, size)
    }
}

impl DotPlot {
    fn raster(&self) -> Result<skia::Surface> {
        let size = self.layout().size;
        let (w, h) = ((size.width.round() as i32).max(1), (size.height.round() as i32).max(1));
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or(Error::Surface { width: w, height: h })?;
        let shaper = TextShaper::new();
        let mut scene = SkiaScene::new(surface.canvas(), &shaper);
        self.draw(&mut scene);
        Ok(surface)
    }

    /// Render the current frame and encode it as PNG bytes.
    pub fn render_to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut surface = self.raster()?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(Error::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the current frame to a PNG at `path`, creating parent directories.
    pub fn render_to_png(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Render to unpremultiplied RGBA8. Returns (pixels, width, height, row_bytes).
    pub fn render_to_rgba8(&self) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.raster()?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut px = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut px, row_bytes, (0, 0)) {
            return Err(Error::Readback { width: w, height: h });
        }
        Ok((px, w, h, row_bytes))
    }
}
