mod draw;
mod font;
mod primitives;
mod recording;

pub use draw::{draw_box, stroke_path};
pub use font::{Font, default_font};
pub use primitives::Color;
pub use recording::{DrawOp, RecordingRenderer};

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::CairoRenderer;

use std::io::Write;

use crate::core::Rect;
use crate::error::ChartResult;

/// Contract implemented by any drawing backend.
///
/// The pipeline drives a renderer through explicit state (stroke, fill, and
/// font settings), then path, and text operations, and finally serializes
/// the finished surface into a byte sink. Text measurement must reflect the
/// current font state because label layout depends on it.
///
/// Text anchors: `(x, y)` addresses the left end of the text's bottom edge.
pub trait Renderer {
    fn set_dpi(&mut self, dpi: f64);

    fn set_stroke_color(&mut self, color: Color);

    fn set_fill_color(&mut self, color: Color);

    fn set_stroke_width(&mut self, width: f64);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    fn close_path(&mut self);

    /// Strokes the current path with the current stroke state and clears it.
    fn stroke(&mut self);

    /// Fills the current path with the current fill color and clears it.
    fn fill(&mut self);

    /// Fills, then strokes the current path, then clears it.
    fn fill_stroke(&mut self);

    fn set_font(&mut self, font: &Font);

    fn set_font_size(&mut self, size: f64);

    fn set_font_color(&mut self, color: Color);

    fn text(&mut self, body: &str, x: f64, y: f64);

    /// Pixel bounding box `body` would occupy at the current font state,
    /// anchored at the origin.
    fn measure_text(&mut self, body: &str) -> Rect;

    /// Serializes the finished drawing into `out`.
    fn save(&mut self, out: &mut dyn Write) -> ChartResult<()>;
}
