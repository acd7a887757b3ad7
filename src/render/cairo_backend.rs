use std::io::Write;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::core::{Rect, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, Font, Renderer, default_font};

const POINTS_PER_INCH: f64 = 72.0;

/// Cairo + Pango + PangoCairo raster backend with PNG serialization.
///
/// Draw operations are infallible at the trait level; Cairo keeps failures
/// sticky on the context, and `save` surfaces them before encoding.
pub struct CairoRenderer {
    surface: ImageSurface,
    context: Context,
    dpi: f64,
    stroke_color: Color,
    fill_color: Color,
    stroke_width: f64,
    font_family: String,
    font_size: f64,
    font_color: Color,
}

impl CairoRenderer {
    pub fn new(viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let surface = ImageSurface::create(
            Format::ARgb32,
            viewport.width as i32,
            viewport.height as i32,
        )
        .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;

        Ok(Self {
            surface,
            context,
            dpi: POINTS_PER_INCH,
            stroke_color: Color::rgb(0.0, 0.0, 0.0),
            fill_color: Color::rgb(1.0, 1.0, 1.0),
            stroke_width: 1.0,
            font_family: default_font().family().to_owned(),
            font_size: 10.0,
            font_color: Color::rgb(0.0, 0.0, 0.0),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    fn font_description(&self) -> FontDescription {
        let mut description = FontDescription::new();
        description.set_family(&self.font_family);
        let pixels = self.font_size * self.dpi / POINTS_PER_INCH;
        description.set_absolute_size(pixels * f64::from(pango::SCALE));
        description
    }

    fn layout_for(&self, body: &str) -> pango::Layout {
        let layout = pangocairo::functions::create_layout(&self.context);
        layout.set_font_description(Some(&self.font_description()));
        layout.set_text(body);
        layout
    }

    fn apply_color(&self, color: Color) {
        self.context
            .set_source_rgba(color.red, color.green, color.blue, color.alpha);
    }
}

impl Renderer for CairoRenderer {
    fn set_dpi(&mut self, dpi: f64) {
        if dpi.is_finite() && dpi > 0.0 {
            self.dpi = dpi;
        }
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = width;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.context.close_path();
    }

    fn stroke(&mut self) {
        self.apply_color(self.stroke_color);
        self.context.set_line_width(self.stroke_width);
        // Errors stay sticky on the context and surface in `save`.
        let _ = self.context.stroke();
    }

    fn fill(&mut self) {
        self.apply_color(self.fill_color);
        let _ = self.context.fill();
    }

    fn fill_stroke(&mut self) {
        self.apply_color(self.fill_color);
        let _ = self.context.fill_preserve();
        self.apply_color(self.stroke_color);
        self.context.set_line_width(self.stroke_width);
        let _ = self.context.stroke();
    }

    fn set_font(&mut self, font: &Font) {
        self.font_family = font.family().to_owned();
    }

    fn set_font_size(&mut self, size: f64) {
        self.font_size = size;
    }

    fn set_font_color(&mut self, color: Color) {
        self.font_color = color;
    }

    fn text(&mut self, body: &str, x: f64, y: f64) {
        let layout = self.layout_for(body);
        let (_, height) = layout.pixel_size();
        self.apply_color(self.font_color);
        self.context.move_to(x, y - f64::from(height));
        pangocairo::functions::show_layout(&self.context, &layout);
    }

    fn measure_text(&mut self, body: &str) -> Rect {
        let layout = self.layout_for(body);
        let (width, height) = layout.pixel_size();
        Rect::new(0.0, 0.0, f64::from(width), f64::from(height))
    }

    fn save(&mut self, out: &mut dyn Write) -> ChartResult<()> {
        self.context
            .status()
            .map_err(|err| map_backend_error("cairo context entered error state", err))?;
        self.surface.flush();

        let mut sink = out;
        self.surface
            .write_to_png(&mut sink)
            .map_err(|err| ChartError::Backend(format!("failed to encode png: {err}")))?;
        Ok(())
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
