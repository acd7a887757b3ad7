use crate::core::format::ValueFormatter;
use crate::core::geometry::Rect;
use crate::core::range::Range;
use crate::core::style::Style;
use crate::core::types::SeriesAxis;
use crate::error::ChartResult;
use crate::render::Renderer;

/// Simple per-index x/y access.
pub trait ValueProvider {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(x, y)` sample at `index`.
    fn value(&self, index: usize) -> (f64, f64);
}

/// Per-index x plus lower/upper y bounds, for band/range series.
pub trait BoundedValueProvider {
    fn len(&self) -> usize;

    /// `(x, y_low, y_high)` sample at `index`.
    fn bounded_value(&self, index: usize) -> (f64, f64, f64);
}

/// Series that carry their own tick label formatters.
pub trait ValueFormatterProvider {
    /// `(x formatter, y formatter)` for the axes this series projects onto.
    fn value_formatters(&self) -> (ValueFormatter, ValueFormatter);
}

/// Series made of positioned text labels whose footprint must be reserved
/// during layout.
pub trait AnnotationProvider {
    /// Pixel footprint every label of this series would occupy if drawn
    /// against `canvas` with the given ranges, including `canvas` itself.
    fn measure_annotations(
        &self,
        renderer: &mut dyn Renderer,
        canvas: Rect,
        x_range: &Range,
        y_range: &Range,
        style: &Style,
    ) -> Rect;
}

/// A drawable data series.
///
/// Concrete types implement the capability subset they support; the render
/// pipeline probes each capability instead of assuming one base shape.
pub trait Series {
    fn name(&self) -> &str;

    fn y_axis(&self) -> SeriesAxis;

    fn style(&self) -> &Style;

    fn as_values(&self) -> Option<&dyn ValueProvider> {
        None
    }

    fn as_bounded_values(&self) -> Option<&dyn BoundedValueProvider> {
        None
    }

    fn as_formatter_provider(&self) -> Option<&dyn ValueFormatterProvider> {
        None
    }

    fn as_annotations(&self) -> Option<&dyn AnnotationProvider> {
        None
    }

    /// Draws the series inside `canvas` using the resolved ranges. `style`
    /// arrives already merged with the role defaults for this series slot.
    fn draw(
        &self,
        renderer: &mut dyn Renderer,
        canvas: Rect,
        x_range: &Range,
        y_range: &Range,
        style: &Style,
    ) -> ChartResult<()>;
}
