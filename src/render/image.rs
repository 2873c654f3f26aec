//! Raster backend: executes a scene on a tiny-skia pixmap and saves it as PNG

use std::io;
use std::path::Path;

use image::RgbaImage;
use tiny_skia::{
    Color, FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform,
};

use super::RenderError;
use super::geometry::{self, shape};
use super::text::FontBook;
use crate::config::Rgb;
use crate::domain::{
    DrawCommand, EllipseCommand, LineCommand, Outline, PolygonCommand, RectCommand, Scene,
    TextCommand,
};

fn paint(color: Rgb) -> Paint<'static> {
    let [r, g, b, a] = color.to_rgba_u8();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

/// Build an ellipse path using cubic bezier curves
fn build_ellipse_path(cx: f32, cy: f32, rx: f32, ry: f32) -> Option<tiny_skia::Path> {
    let kx = rx * shape::BEZIER_K;
    let ky = ry * shape::BEZIER_K;

    let mut pb = PathBuilder::new();

    // Start at top
    pb.move_to(cx, cy - ry);
    pb.cubic_to(cx + kx, cy - ry, cx + rx, cy - ky, cx + rx, cy);
    pb.cubic_to(cx + rx, cy + ky, cx + kx, cy + ry, cx, cy + ry);
    pb.cubic_to(cx - kx, cy + ry, cx - rx, cy + ky, cx - rx, cy);
    pb.cubic_to(cx - rx, cy - ky, cx - kx, cy - ry, cx, cy - ry);

    pb.close();
    pb.finish()
}

/// Build a rectangle path with circular-arc corners (bezier approximated)
fn build_rounded_rect_path(
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
    radius: f32,
) -> Option<tiny_skia::Path> {
    let r = geometry::clamp_radius(radius, max_x - min_x, max_y - min_y);
    if r <= 0.0 {
        let rect = tiny_skia::Rect::from_ltrb(min_x, min_y, max_x, max_y)?;
        return Some(PathBuilder::from_rect(rect));
    }
    let k = r * shape::BEZIER_K;

    let mut pb = PathBuilder::new();
    pb.move_to(min_x + r, min_y);
    pb.line_to(max_x - r, min_y);
    pb.cubic_to(max_x - r + k, min_y, max_x, min_y + r - k, max_x, min_y + r);
    pb.line_to(max_x, max_y - r);
    pb.cubic_to(max_x, max_y - r + k, max_x - r + k, max_y, max_x - r, max_y);
    pb.line_to(min_x + r, max_y);
    pb.cubic_to(min_x + r - k, max_y, min_x, max_y - r + k, min_x, max_y - r);
    pb.line_to(min_x, min_y + r);
    pb.cubic_to(min_x, min_y + r - k, min_x + r - k, min_y, min_x + r, min_y);
    pb.close();
    pb.finish()
}

/// Fill then outline a closed path
fn fill_and_stroke(
    pixmap: &mut Pixmap,
    path: &tiny_skia::Path,
    fill: Option<Rgb>,
    outline: Option<Outline>,
) {
    if let Some(color) = fill {
        pixmap.fill_path(
            path,
            &paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }
    if let Some(outline) = outline
        && outline.width > 0.0
    {
        let stroke = Stroke {
            width: outline.width,
            line_join: LineJoin::Round,
            ..Default::default()
        };
        pixmap.stroke_path(
            path,
            &paint(outline.color),
            &stroke,
            Transform::identity(),
            None,
        );
    }
}

/// Raster canvas owned by a single visual
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Allocate a canvas filled with an opaque background
    pub fn new(width: u32, height: u32, background: Rgb) -> Result<Self, RenderError> {
        let mut pixmap =
            Pixmap::new(width, height).ok_or(RenderError::PixmapAlloc { width, height })?;
        let [r, g, b, a] = background.to_rgba_u8();
        pixmap.fill(Color::from_rgba8(r, g, b, a));
        Ok(Self { pixmap })
    }

    /// Allocate a canvas for `scene` and execute all of its commands
    pub fn from_scene(scene: &Scene, fonts: &FontBook) -> Result<Self, RenderError> {
        let mut canvas = Self::new(scene.width, scene.height, scene.background)?;
        canvas.execute(&scene.commands, fonts)?;
        Ok(canvas)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Execute commands in order. Runs of text rows are rasterised together.
    pub fn execute(
        &mut self,
        commands: &[DrawCommand],
        fonts: &FontBook,
    ) -> Result<(), RenderError> {
        let mut pending: Vec<&TextCommand> = Vec::new();
        for command in commands {
            if let DrawCommand::Text(row) = command {
                pending.push(row);
                continue;
            }
            fonts.draw(&mut self.pixmap, &pending)?;
            pending.clear();
            match command {
                DrawCommand::Rect(rect) => self.draw_rect(rect),
                DrawCommand::Ellipse(ellipse) => self.draw_ellipse(ellipse),
                DrawCommand::Line(line) => self.draw_line(line),
                DrawCommand::Polygon(polygon) => self.draw_polygon(polygon),
                // Queued in `pending`
                DrawCommand::Text(_) => {}
            }
        }
        fonts.draw(&mut self.pixmap, &pending)
    }

    fn draw_rect(&mut self, cmd: &RectCommand) {
        let r = &cmd.rect;
        let (min_x, min_y, max_x, max_y) =
            geometry::normalize_rect(r.left, r.top, r.right, r.bottom);
        let Some(path) = build_rounded_rect_path(min_x, min_y, max_x, max_y, cmd.radius) else {
            return;
        };
        fill_and_stroke(&mut self.pixmap, &path, cmd.fill, cmd.outline);
    }

    fn draw_ellipse(&mut self, cmd: &EllipseCommand) {
        let b = &cmd.bounds;
        let (min_x, min_y, max_x, max_y) =
            geometry::normalize_rect(b.left, b.top, b.right, b.bottom);
        let (cx, cy, rx, ry) = geometry::ellipse_from_bounds(min_x, min_y, max_x, max_y);
        let Some(path) = build_ellipse_path(cx, cy, rx, ry) else {
            return;
        };
        fill_and_stroke(&mut self.pixmap, &path, cmd.fill, cmd.outline);
    }

    fn draw_line(&mut self, cmd: &LineCommand) {
        let mut pb = PathBuilder::new();
        pb.move_to(cmd.from.x, cmd.from.y);
        pb.line_to(cmd.to.x, cmd.to.y);
        let Some(path) = pb.finish() else {
            return;
        };
        let stroke = Stroke {
            width: cmd.width,
            line_cap: LineCap::Butt,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&path, &paint(cmd.color), &stroke, Transform::identity(), None);
    }

    fn draw_polygon(&mut self, cmd: &PolygonCommand) {
        let Some((first, rest)) = cmd.points.split_first() else {
            return;
        };
        let mut pb = PathBuilder::new();
        pb.move_to(first.x, first.y);
        for p in rest {
            pb.line_to(p.x, p.y);
        }
        pb.close();
        let Some(path) = pb.finish() else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &paint(cmd.fill),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    /// RGBA value at a pixel, for inspection
    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        // Pixmap::pixel only checks the flat index, so (width, 0) would wrap to the next row
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let p = self.pixmap.pixel(x, y)?.demultiply();
        Some([p.red(), p.green(), p.blue(), p.alpha()])
    }

    /// Copy out as an RGBA image (the canvas is opaque, so no demultiply is needed)
    pub fn to_rgba_image(&self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.width(), self.height(), self.pixmap.data().to_vec())
    }

    /// Write as an RGB PNG with a physical-resolution chunk
    pub fn save_png(&self, path: &Path, dpi: u32) -> Result<(), RenderError> {
        let rgba = self.to_rgba_image().ok_or(RenderError::PixmapAlloc {
            width: self.width(),
            height: self.height(),
        })?;
        let rgb = image::DynamicImage::ImageRgba8(rgba).to_rgb8();
        let file = std::fs::File::create(path)?;
        write_png(io::BufWriter::new(file), &rgb, dpi)?;
        Ok(())
    }
}

/// Pixels per meter for a dots-per-inch value
fn dpi_to_ppm(dpi: u32) -> u32 {
    (dpi as f64 / 0.0254).round() as u32
}

fn write_png<W: io::Write>(
    w: W,
    image: &image::RgbImage,
    dpi: u32,
) -> Result<(), png::EncodingError> {
    let mut encoder = png::Encoder::new(w, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let ppm = dpi_to_ppm(dpi);
    encoder.set_pixel_dims(Some(png::PixelDimensions {
        xppu: ppm,
        yppu: ppm,
        unit: png::Unit::Meter,
    }));
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())?;
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrow::Arrow;
    use crate::config::{ArrowStyle, FontConfig};
    use crate::domain::{Point, Rect};

    fn no_fonts() -> FontBook {
        FontBook::load(&FontConfig {
            regular_candidates: vec![],
            bold_candidates: vec![],
            mono_candidates: vec![],
            system_fallback: false,
            ..Default::default()
        })
    }

    #[test]
    fn test_background_fill() {
        let canvas = Canvas::new(8, 4, Rgb(244, 248, 255)).unwrap();
        assert_eq!(canvas.pixel(0, 0), Some([244, 248, 255, 255]));
        assert_eq!(canvas.pixel(7, 3), Some([244, 248, 255, 255]));
        assert_eq!(canvas.pixel(8, 0), None);
        assert_eq!(canvas.pixel(0, 4), None);
        assert_eq!(canvas.pixel(3, 9), None);
    }

    #[test]
    fn test_zero_size_canvas_is_error() {
        assert!(matches!(
            Canvas::new(0, 10, Rgb::WHITE),
            Err(RenderError::PixmapAlloc { .. })
        ));
    }

    #[test]
    fn test_scene_commands_paint_in_order() {
        let mut scene = Scene::new(100, 100, Rgb::WHITE);
        scene.push(DrawCommand::fill_rect(Rect::new(0.0, 0.0, 100.0, 50.0), Rgb(255, 0, 0)));
        scene.push(DrawCommand::fill_rect(Rect::new(0.0, 25.0, 100.0, 100.0), Rgb(0, 0, 255)));
        let canvas = Canvas::from_scene(&scene, &no_fonts()).unwrap();
        assert_eq!(canvas.pixel(50, 10), Some([255, 0, 0, 255]));
        assert_eq!(canvas.pixel(50, 40), Some([0, 0, 255, 255]));
        assert_eq!(canvas.pixel(50, 90), Some([0, 0, 255, 255]));
    }

    #[test]
    fn test_arrow_head_is_filled() {
        let style = ArrowStyle {
            color: Rgb(0, 0, 0),
            ..Default::default()
        };
        let arrow = Arrow::styled(Point::new(10.0, 50.0), Point::new(90.0, 50.0), &style);
        let mut scene = Scene::new(100, 100, Rgb::WHITE);
        scene.extend(arrow.commands().unwrap());
        let canvas = Canvas::from_scene(&scene, &no_fonts()).unwrap();
        // Inside the head, off the shaft (half-width is 10 at x=70)
        assert_eq!(canvas.pixel(70, 42), Some([0, 0, 0, 255]));
        // Outside the head's half-width
        assert_eq!(canvas.pixel(80, 30), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_rounded_corner_left_unpainted() {
        let mut scene = Scene::new(100, 100, Rgb::WHITE);
        scene.push(DrawCommand::Rect(RectCommand {
            rect: Rect::new(0.0, 0.0, 100.0, 100.0),
            radius: 30.0,
            fill: Some(Rgb(0, 128, 0)),
            outline: None,
        }));
        let canvas = Canvas::from_scene(&scene, &no_fonts()).unwrap();
        assert_eq!(canvas.pixel(1, 1), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(50, 50), Some([0, 128, 0, 255]));
    }

    #[test]
    fn test_save_png_roundtrip_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let canvas = Canvas::new(40, 20, Rgb(1, 2, 3)).unwrap();
        canvas.save_png(&path, 300).unwrap();

        assert_eq!(image::image_dimensions(&path).unwrap(), (40, 20));
        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.get_pixel(5, 5).0, [1, 2, 3]);
    }

    #[test]
    fn test_dpi_conversion() {
        assert_eq!(dpi_to_ppm(300), 11811);
        assert_eq!(dpi_to_ppm(72), 2835);
    }
}
