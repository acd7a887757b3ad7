use serde::{Deserialize, Serialize};

use crate::core::{
    AnnotationProvider, Range, Rect, Series, SeriesAxis, Style, ValueProvider,
};
use crate::error::ChartResult;
use crate::render::{Renderer, draw_box};

/// One positioned text label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

impl Annotation {
    #[must_use]
    pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
        }
    }
}

/// Horizontal inset between the anchor point and the label box.
const CALLOUT_INSET_PX: f64 = 10.0;

const LABEL_PADDING_PX: f64 = 5.0;

/// Series of positioned text callouts instead of continuous geometry.
///
/// The labels participate in layout: their pixel footprint is measured and
/// reserved so callouts near the range extremes stay inside the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationSeries {
    pub name: String,
    pub style: Style,
    pub y_axis: SeriesAxis,
    pub annotations: Vec<Annotation>,
}

impl AnnotationSeries {
    #[must_use]
    pub fn new(name: impl Into<String>, annotations: Vec<Annotation>) -> Self {
        Self {
            name: name.into(),
            style: Style::default(),
            y_axis: SeriesAxis::default(),
            annotations,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, y_axis: SeriesAxis) -> Self {
        self.y_axis = y_axis;
        self
    }

    /// Label box for one annotation anchored at `(anchor_x, anchor_y)`.
    fn label_box(style: &Style, anchor_x: f64, anchor_y: f64, text_box: Rect) -> Rect {
        let padding = style.padding;
        let half_height = text_box.height() / 2.0;
        Rect {
            top: anchor_y - half_height - padding.top_or(LABEL_PADDING_PX),
            left: anchor_x,
            right: anchor_x
                + CALLOUT_INSET_PX
                + padding.left_or(LABEL_PADDING_PX)
                + text_box.width()
                + padding.right_or(LABEL_PADDING_PX),
            bottom: anchor_y + half_height + padding.bottom_or(LABEL_PADDING_PX),
        }
    }

    fn apply_font(renderer: &mut dyn Renderer, style: &Style) {
        if let Some(font) = &style.font {
            renderer.set_font(font);
        }
        if let Some(size) = style.font_size {
            renderer.set_font_size(size);
        }
    }
}

impl ValueProvider for AnnotationSeries {
    fn len(&self) -> usize {
        self.annotations.len()
    }

    fn value(&self, index: usize) -> (f64, f64) {
        let annotation = &self.annotations[index];
        (annotation.x, annotation.y)
    }
}

impl AnnotationProvider for AnnotationSeries {
    fn measure_annotations(
        &self,
        renderer: &mut dyn Renderer,
        canvas: Rect,
        x_range: &Range,
        y_range: &Range,
        style: &Style,
    ) -> Rect {
        Self::apply_font(renderer, style);

        let mut bounds = canvas;
        for annotation in &self.annotations {
            let anchor_x = canvas.left + x_range.translate(annotation.x);
            let anchor_y = canvas.bottom - y_range.translate(annotation.y);
            let text_box = renderer.measure_text(&annotation.label);
            bounds = bounds.grow(Self::label_box(style, anchor_x, anchor_y, text_box));
        }
        bounds
    }
}

impl Series for AnnotationSeries {
    fn name(&self) -> &str {
        &self.name
    }

    fn y_axis(&self) -> SeriesAxis {
        self.y_axis
    }

    fn style(&self) -> &Style {
        &self.style
    }

    fn as_values(&self) -> Option<&dyn ValueProvider> {
        Some(self)
    }

    fn as_annotations(&self) -> Option<&dyn AnnotationProvider> {
        Some(self)
    }

    fn draw(
        &self,
        renderer: &mut dyn Renderer,
        canvas: Rect,
        x_range: &Range,
        y_range: &Range,
        style: &Style,
    ) -> ChartResult<()> {
        Self::apply_font(renderer, style);
        if let Some(color) = style.font_color {
            renderer.set_font_color(color);
        }

        for annotation in &self.annotations {
            let anchor_x = canvas.left + x_range.translate(annotation.x);
            let anchor_y = canvas.bottom - y_range.translate(annotation.y);
            let text_box = renderer.measure_text(&annotation.label);
            let label_box = Self::label_box(style, anchor_x, anchor_y, text_box);

            draw_box(renderer, label_box, style);
            renderer.text(
                &annotation.label,
                anchor_x + CALLOUT_INSET_PX + style.padding.left_or(LABEL_PADDING_PX),
                anchor_y + text_box.height() / 2.0,
            );
        }
        Ok(())
    }
}
