use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::core::{Rect, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, Font, Renderer};

/// Recorded draw command, serialized in issue order on `save`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawOp {
    SetDpi { dpi: f64 },
    SetStrokeColor { color: Color },
    SetFillColor { color: Color },
    SetStrokeWidth { width: f64 },
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    ClosePath,
    Stroke,
    Fill,
    FillStroke,
    SetFont { family: String },
    SetFontSize { size: f64 },
    SetFontColor { color: Color },
    Text { body: String, x: f64, y: f64 },
}

/// Width of one character cell as a fraction of the font size.
const CHAR_ADVANCE_RATIO: f64 = 0.6;

const DEFAULT_RECORDING_FONT_SIZE: f64 = 10.0;

/// Deterministic headless renderer for tests and byte-comparable output.
///
/// Text measurement uses a fixed character-cell model instead of real glyph
/// metrics so layout decisions reproduce on any machine; `save` serializes
/// the op log as JSON.
#[derive(Debug)]
pub struct RecordingRenderer {
    viewport: Viewport,
    font_size: f64,
    ops: Vec<DrawOp>,
}

impl RecordingRenderer {
    pub fn new(viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        Ok(Self {
            viewport,
            font_size: DEFAULT_RECORDING_FONT_SIZE,
            ops: Vec::new(),
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Commands recorded so far, in issue order.
    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }
}

impl Renderer for RecordingRenderer {
    fn set_dpi(&mut self, dpi: f64) {
        self.ops.push(DrawOp::SetDpi { dpi });
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ops.push(DrawOp::SetStrokeColor { color });
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ops.push(DrawOp::SetFillColor { color });
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.ops.push(DrawOp::SetStrokeWidth { width });
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::LineTo { x, y });
    }

    fn close_path(&mut self) {
        self.ops.push(DrawOp::ClosePath);
    }

    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke);
    }

    fn fill(&mut self) {
        self.ops.push(DrawOp::Fill);
    }

    fn fill_stroke(&mut self) {
        self.ops.push(DrawOp::FillStroke);
    }

    fn set_font(&mut self, font: &Font) {
        self.ops.push(DrawOp::SetFont {
            family: font.family().to_owned(),
        });
    }

    fn set_font_size(&mut self, size: f64) {
        self.font_size = size;
        self.ops.push(DrawOp::SetFontSize { size });
    }

    fn set_font_color(&mut self, color: Color) {
        self.ops.push(DrawOp::SetFontColor { color });
    }

    fn text(&mut self, body: &str, x: f64, y: f64) {
        self.ops.push(DrawOp::Text {
            body: body.to_owned(),
            x,
            y,
        });
    }

    fn measure_text(&mut self, body: &str) -> Rect {
        let width = (body.chars().count() as f64 * self.font_size * CHAR_ADVANCE_RATIO).ceil();
        let height = self.font_size.ceil();
        Rect::new(0.0, 0.0, width, height)
    }

    fn save(&mut self, out: &mut dyn Write) -> ChartResult<()> {
        serde_json::to_writer(&mut *out, &self.ops)
            .map_err(|err| ChartError::Backend(err.to_string()))?;
        out.write_all(b"\n")?;
        Ok(())
    }
}
