use tracing::trace;

use crate::core::{Rect, SeriesAxis, Style, Tick};
use crate::error::{ChartError, ChartResult};
use crate::render::{Font, Renderer};

use super::axis::Axis;
use super::chart::Chart;
use super::ranges::{AxisFormatters, ResolvedRanges};
use super::style_defaults::DEFAULT_BACKGROUND_PADDING_PX;

/// Tick sets for the three axes, regenerated each layout pass.
#[derive(Debug, Clone, Default)]
pub(super) struct AxisTicks {
    pub x: Vec<Tick>,
    pub y: Vec<Tick>,
    pub y_secondary: Vec<Tick>,
}

impl Chart {
    /// Chart outer bounds: the full surface minus background padding.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let padding = self.background.padding;
        Rect::new(
            padding.top_or(DEFAULT_BACKGROUND_PADDING_PX),
            padding.left_or(DEFAULT_BACKGROUND_PADDING_PX),
            f64::from(self.width_or_default()) - padding.right_or(DEFAULT_BACKGROUND_PADDING_PX),
            f64::from(self.height_or_default()) - padding.bottom_or(DEFAULT_BACKGROUND_PADDING_PX),
        )
    }

    pub(super) fn default_canvas_box(&self) -> Rect {
        self.bounds()
    }

    pub(super) fn has_visible_axes(
        &self,
        x_axis: &Axis,
        y_axis: &Axis,
        y_secondary_axis: &Axis,
    ) -> bool {
        x_axis.style.shown() || y_axis.style.shown() || y_secondary_axis.style.shown()
    }

    pub(super) fn has_annotation_series(&self) -> bool {
        self.series
            .iter()
            .any(|series| series.as_annotations().is_some() && series.style().shown_or_default())
    }

    /// Generates ticks for every visible axis whose range is resolved.
    pub(super) fn axes_ticks(
        &self,
        renderer: &mut dyn Renderer,
        x_axis: &Axis,
        y_axis: &Axis,
        y_secondary_axis: &Axis,
        ranges: &ResolvedRanges,
        formatters: &AxisFormatters,
        defaults: &Style,
    ) -> AxisTicks {
        let mut ticks = AxisTicks::default();
        if x_axis.style.shown() {
            ticks.x = x_axis.resolved_ticks(renderer, &ranges.x, defaults, &formatters.x);
        }
        if y_axis.style.shown() && !ranges.y.is_unset() {
            ticks.y = y_axis.resolved_ticks(renderer, &ranges.y, defaults, &formatters.y);
        }
        if y_secondary_axis.style.shown() && !ranges.y_secondary.is_unset() {
            ticks.y_secondary = y_secondary_axis.resolved_ticks(
                renderer,
                &ranges.y_secondary,
                defaults,
                &formatters.y_secondary,
            );
        }
        ticks
    }

    /// One measure→grow→constrain step of the axis label pass.
    ///
    /// Each visible axis's label footprint grows an outer box; the overflow
    /// past the chart bounds then shrinks the inner canvas by exactly the
    /// room the labels need.
    pub(super) fn axes_adjusted_canvas_box(
        &self,
        renderer: &mut dyn Renderer,
        canvas: Rect,
        x_axis: &Axis,
        y_axis: &Axis,
        y_secondary_axis: &Axis,
        ranges: &ResolvedRanges,
        ticks: &AxisTicks,
        defaults: &Style,
    ) -> ChartResult<Rect> {
        let mut outer = canvas;
        if x_axis.style.shown() {
            outer = outer.grow(x_axis.measure(renderer, canvas, &ranges.x, defaults, &ticks.x));
        }
        if y_axis.style.shown() && !ranges.y.is_unset() {
            outer = outer.grow(y_axis.measure(renderer, canvas, &ranges.y, defaults, &ticks.y));
        }
        if y_secondary_axis.style.shown() && !ranges.y_secondary.is_unset() {
            outer = outer.grow(y_secondary_axis.measure(
                renderer,
                canvas,
                &ranges.y_secondary,
                defaults,
                &ticks.y_secondary,
            ));
        }

        ensure_drawable(canvas.outer_constrain(self.bounds(), outer))
    }

    /// Annotation counterpart of the axis pass: every visible annotation
    /// series reserves the footprint of its labels.
    pub(super) fn annotation_adjusted_canvas_box(
        &self,
        renderer: &mut dyn Renderer,
        canvas: Rect,
        ranges: &ResolvedRanges,
        font: &Font,
    ) -> ChartResult<Rect> {
        let mut outer = canvas;
        for (index, series) in self.series.iter().enumerate() {
            let Some(annotations) = series.as_annotations() else {
                continue;
            };
            if !series.style().shown_or_default() {
                continue;
            }
            let y_range = match series.y_axis() {
                SeriesAxis::Primary => ranges.y,
                SeriesAxis::Secondary => ranges.y_secondary,
            };
            if y_range.is_unset() {
                continue;
            }

            let style = series.style().merge(&self.style_defaults_series(index, font));
            outer = outer.grow(annotations.measure_annotations(
                renderer, canvas, &ranges.x, &y_range, &style,
            ));
            trace!(series = series.name(), "measured annotation footprint");
        }

        ensure_drawable(canvas.outer_constrain(self.bounds(), outer))
    }
}

/// Re-resolves each range's pixel domain against the current canvas box.
pub(super) fn set_range_domains(canvas: Rect, ranges: &mut ResolvedRanges) {
    ranges.x.set_domain(canvas.width());
    ranges.y.set_domain(canvas.height());
    ranges.y_secondary.set_domain(canvas.height());
}

fn ensure_drawable(canvas: Rect) -> ChartResult<Rect> {
    if canvas.width() > 0.0 && canvas.height() > 0.0 {
        Ok(canvas)
    } else {
        Err(ChartError::LayoutCollapse {
            width: canvas.width(),
            height: canvas.height(),
        })
    }
}
