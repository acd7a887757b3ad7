use std::io::Write;

use tracing::{debug, warn};

use crate::core::{AxisKind, Rect, Series, SeriesAxis, Style, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Font, Renderer, default_font, draw_box};

use super::axis::Axis;
use super::layout::{AxisTicks, set_range_domains};
use super::ranges::ResolvedRanges;
use super::style_defaults::{
    COLOR_TEXT, DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, DEFAULT_DPI, DEFAULT_TITLE_FONT_SIZE,
    DEFAULT_TITLE_TOP_PADDING_PX,
};

/// Free-form element drawn after everything else, receiving the final canvas
/// box and the element default style.
pub type Overlay = Box<dyn Fn(&mut dyn Renderer, Rect, &Style) -> ChartResult<()> + Send + Sync>;

/// Number of measure→grow→constrain→re-resolve passes for axis labels.
///
/// A fixed bound, not a convergence loop: the first pass estimates label
/// footprint against the unconstrained box, the second re-measures after the
/// box shrank. Label sets are treated as stable after that.
const AXIS_LAYOUT_PASSES: usize = 2;

/// One renderable chart: configuration, series, and overlay elements.
///
/// Rendering borrows the chart immutably; local corrections (such as forcing
/// the secondary axis kind) apply to private copies and never leak back.
pub struct Chart {
    pub title: String,
    pub title_style: Style,
    /// Surface width in pixels; `0` selects the default.
    pub width: u32,
    /// Surface height in pixels; `0` selects the default.
    pub height: u32,
    /// Dots per inch; `0.0` selects the default.
    pub dpi: f64,
    pub background: Style,
    pub canvas: Style,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub y_axis_secondary: Axis,
    pub font: Option<Font>,
    pub series: Vec<Box<dyn Series>>,
    pub elements: Vec<Overlay>,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: String::new(),
            title_style: Style::default(),
            width: 0,
            height: 0,
            dpi: 0.0,
            background: Style::default(),
            canvas: Style::default(),
            x_axis: Axis::new(AxisKind::X),
            y_axis: Axis::new(AxisKind::YPrimary),
            y_axis_secondary: Axis::new(AxisKind::YSecondary),
            font: None,
            series: Vec::new(),
            elements: Vec::new(),
        }
    }

    pub fn add_series(&mut self, series: impl Series + 'static) {
        self.series.push(Box::new(series));
    }

    pub fn add_element(&mut self, element: Overlay) {
        self.elements.push(element);
    }

    #[must_use]
    pub fn width_or_default(&self) -> u32 {
        if self.width == 0 {
            DEFAULT_CHART_WIDTH
        } else {
            self.width
        }
    }

    #[must_use]
    pub fn height_or_default(&self) -> u32 {
        if self.height == 0 {
            DEFAULT_CHART_HEIGHT
        } else {
            self.height
        }
    }

    #[must_use]
    pub fn dpi_or_default(&self) -> f64 {
        if self.dpi == 0.0 { DEFAULT_DPI } else { self.dpi }
    }

    fn resolved_font(&self) -> Font {
        self.font
            .clone()
            .unwrap_or_else(|| default_font().clone())
    }

    /// Renders the chart and serializes the surface into `out`.
    ///
    /// `provider` receives the effective pixel dimensions and must hand back
    /// a fresh drawing surface; acquisition failures abort before any
    /// drawing. When range validation fails, the already-painted background
    /// is still flushed to `out` as a best-effort partial artifact and the
    /// error is returned.
    pub fn render<R: Renderer>(
        &self,
        provider: impl FnOnce(Viewport) -> ChartResult<R>,
        out: &mut dyn Write,
    ) -> ChartResult<()> {
        if self.series.is_empty() {
            return Err(ChartError::MissingSeries);
        }

        // Callers may hand a mis-tagged secondary axis; correct a private
        // copy instead of their configuration.
        let x_axis = self.x_axis.clone();
        let y_axis = self.y_axis.clone();
        let mut y_secondary_axis = self.y_axis_secondary.clone();
        y_secondary_axis.kind = AxisKind::YSecondary;

        let viewport = Viewport::new(self.width_or_default(), self.height_or_default());
        let mut renderer = provider(viewport)?;
        renderer.set_dpi(self.dpi_or_default());
        let font = self.resolved_font();

        self.draw_background(&mut renderer, viewport);

        let mut ranges = self.resolve_ranges(&x_axis, &y_axis, &y_secondary_axis);
        let formatters = self.resolve_value_formatters(&x_axis, &y_axis, &y_secondary_axis);
        let mut canvas = self.default_canvas_box();
        set_range_domains(canvas, &mut ranges);

        if let Err(err) = self.check_ranges(&ranges, &y_axis, &y_secondary_axis) {
            // Best-effort partial artifact: the background is already on the
            // surface and still reaches the sink; the caller sees the error.
            if let Err(flush_err) = renderer.save(out) {
                warn!(error = %flush_err, "failed to flush partial background");
            }
            return Err(err);
        }

        let axes_defaults = self.style_defaults_axes(&font);
        let mut ticks = AxisTicks::default();
        if self.has_visible_axes(&x_axis, &y_axis, &y_secondary_axis) {
            for pass in 0..AXIS_LAYOUT_PASSES {
                ticks = self.axes_ticks(
                    &mut renderer,
                    &x_axis,
                    &y_axis,
                    &y_secondary_axis,
                    &ranges,
                    &formatters,
                    &axes_defaults,
                );
                canvas = self.axes_adjusted_canvas_box(
                    &mut renderer,
                    canvas,
                    &x_axis,
                    &y_axis,
                    &y_secondary_axis,
                    &ranges,
                    &ticks,
                    &axes_defaults,
                )?;
                set_range_domains(canvas, &mut ranges);
                debug!(
                    pass,
                    width = canvas.width(),
                    height = canvas.height(),
                    "axis layout pass settled"
                );
            }
        }

        if self.has_annotation_series() {
            canvas = self.annotation_adjusted_canvas_box(&mut renderer, canvas, &ranges, &font)?;
            set_range_domains(canvas, &mut ranges);
            ticks = self.axes_ticks(
                &mut renderer,
                &x_axis,
                &y_axis,
                &y_secondary_axis,
                &ranges,
                &formatters,
                &axes_defaults,
            );
        }

        self.draw_canvas(&mut renderer, canvas);

        if x_axis.style.shown() {
            x_axis.draw(&mut renderer, canvas, &ranges.x, &axes_defaults, &ticks.x);
        }
        if y_axis.style.shown() && !ranges.y.is_unset() {
            y_axis.draw(&mut renderer, canvas, &ranges.y, &axes_defaults, &ticks.y);
        }
        if y_secondary_axis.style.shown() && !ranges.y_secondary.is_unset() {
            y_secondary_axis.draw(
                &mut renderer,
                canvas,
                &ranges.y_secondary,
                &axes_defaults,
                &ticks.y_secondary,
            );
        }

        for (index, series) in self.series.iter().enumerate() {
            self.draw_series(&mut renderer, canvas, &ranges, series.as_ref(), index, &font)?;
        }

        self.draw_title(&mut renderer, &font);

        let element_defaults = self.style_defaults_elements(&font);
        for element in &self.elements {
            element(&mut renderer, canvas, &element_defaults)?;
        }

        renderer.save(out)
    }

    fn draw_background(&self, renderer: &mut dyn Renderer, viewport: Viewport) {
        let surface = Rect::new(
            0.0,
            0.0,
            f64::from(viewport.width),
            f64::from(viewport.height),
        );
        draw_box(
            renderer,
            surface,
            &self.background.merge(&self.style_defaults_background()),
        );
    }

    fn draw_canvas(&self, renderer: &mut dyn Renderer, canvas: Rect) {
        draw_box(
            renderer,
            canvas,
            &self.canvas.merge(&self.style_defaults_canvas()),
        );
    }

    fn draw_series(
        &self,
        renderer: &mut dyn Renderer,
        canvas: Rect,
        ranges: &ResolvedRanges,
        series: &dyn Series,
        index: usize,
        font: &Font,
    ) -> ChartResult<()> {
        if !series.style().shown_or_default() {
            return Ok(());
        }
        let y_range = match series.y_axis() {
            SeriesAxis::Primary => &ranges.y,
            SeriesAxis::Secondary => &ranges.y_secondary,
        };
        if y_range.is_unset() {
            return Ok(());
        }

        let style = series.style().merge(&self.style_defaults_series(index, font));
        series.draw(renderer, canvas, &ranges.x, y_range, &style)
    }

    fn draw_title(&self, renderer: &mut dyn Renderer, font: &Font) {
        if self.title.is_empty() || !self.title_style.shown() {
            return;
        }

        let style = self.title_style.merge(&self.style_defaults_title(font));
        renderer.set_font(&style.font_or(font));
        renderer.set_font_size(style.font_size_or(DEFAULT_TITLE_FONT_SIZE));
        renderer.set_font_color(style.font_color_or(COLOR_TEXT));

        let text_box = renderer.measure_text(&self.title);
        let x = (f64::from(self.width_or_default()) - text_box.width()) / 2.0;
        let y = style.padding.top_or(DEFAULT_TITLE_TOP_PADDING_PX) + text_box.height();
        renderer.text(&self.title, x, y);
    }
}
