use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, Range, Rect, Series, SeriesAxis, Style, ValueProvider};
use crate::error::ChartResult;
use crate::render::{Color, Renderer, stroke_path};

/// Continuous polyline through x/y samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub name: String,
    pub style: Style,
    pub y_axis: SeriesAxis,
    pub data: Vec<DataPoint>,
}

impl LineSeries {
    #[must_use]
    pub fn new(name: impl Into<String>, data: Vec<DataPoint>) -> Self {
        Self {
            name: name.into(),
            style: Style::default(),
            y_axis: SeriesAxis::default(),
            data,
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
}

impl ValueProvider for LineSeries {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn value(&self, index: usize) -> (f64, f64) {
        let point = self.data[index];
        (point.x, point.y)
    }
}

impl Series for LineSeries {
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

    fn draw(
        &self,
        renderer: &mut dyn Renderer,
        canvas: Rect,
        x_range: &Range,
        y_range: &Range,
        style: &Style,
    ) -> ChartResult<()> {
        if self.data.len() < 2 {
            return Ok(());
        }

        let points: Vec<(f64, f64)> = self
            .data
            .iter()
            .map(|point| {
                (
                    canvas.left + x_range.translate(point.x),
                    canvas.bottom - y_range.translate(point.y),
                )
            })
            .collect();

        renderer.set_stroke_color(style.stroke_color_or(Color::rgb(0.0, 0.0, 0.0)));
        renderer.set_stroke_width(style.stroke_width_or(1.0));
        stroke_path(renderer, &points);
        Ok(())
    }
}
