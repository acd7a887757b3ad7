use serde::{Deserialize, Serialize};

use crate::core::{BoundedPoint, BoundedValueProvider, Range, Rect, Series, SeriesAxis, Style};
use crate::error::ChartResult;
use crate::render::{Color, Renderer, stroke_path};

/// Band between a lower and an upper y bound per x sample.
///
/// The two envelopes are stroked; the area between them is filled only when
/// the style carries a fill color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandSeries {
    pub name: String,
    pub style: Style,
    pub y_axis: SeriesAxis,
    pub data: Vec<BoundedPoint>,
}

impl BandSeries {
    #[must_use]
    pub fn new(name: impl Into<String>, data: Vec<BoundedPoint>) -> Self {
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

impl BoundedValueProvider for BandSeries {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn bounded_value(&self, index: usize) -> (f64, f64, f64) {
        let point = self.data[index];
        (point.x, point.y_low, point.y_high)
    }
}

impl Series for BandSeries {
    fn name(&self) -> &str {
        &self.name
    }

    fn y_axis(&self) -> SeriesAxis {
        self.y_axis
    }

    fn style(&self) -> &Style {
        &self.style
    }

    fn as_bounded_values(&self) -> Option<&dyn BoundedValueProvider> {
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

        let mut upper = Vec::with_capacity(self.data.len());
        let mut lower = Vec::with_capacity(self.data.len());
        for point in &self.data {
            let x = canvas.left + x_range.translate(point.x);
            upper.push((x, canvas.bottom - y_range.translate(point.y_high)));
            lower.push((x, canvas.bottom - y_range.translate(point.y_low)));
        }

        if let Some(fill) = style.fill_color {
            renderer.set_fill_color(fill);
            let (first_x, first_y) = upper[0];
            renderer.move_to(first_x, first_y);
            for (x, y) in upper.iter().skip(1) {
                renderer.line_to(*x, *y);
            }
            for (x, y) in lower.iter().rev() {
                renderer.line_to(*x, *y);
            }
            renderer.close_path();
            renderer.fill();
        }

        renderer.set_stroke_color(style.stroke_color_or(Color::rgb(0.0, 0.0, 0.0)));
        renderer.set_stroke_width(style.stroke_width_or(1.0));
        stroke_path(renderer, &upper);
        stroke_path(renderer, &lower);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::BandSeries;
    use crate::core::{BoundedPoint, BoundedValueProvider, Series};

    #[test]
    fn band_series_exposes_bounded_values_only() {
        let series = BandSeries::new("envelope", vec![BoundedPoint::new(0.0, 1.0, 3.0)]);

        let bounded = series.as_bounded_values().expect("bounded capability");
        assert_eq!(bounded.bounded_value(0), (0.0, 1.0, 3.0));
        assert!(series.as_values().is_none());
    }
}
