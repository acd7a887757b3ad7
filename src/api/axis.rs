use crate::core::{AxisKind, Range, Rect, Style, Tick, ValueFormatter};
use crate::render::Renderer;

use super::style_defaults::{
    COLOR_AXIS, COLOR_TEXT, DEFAULT_AXIS_MARGIN_PX, DEFAULT_FONT_SIZE, grid_style_defaults,
};
use super::ticks::generate_ticks;

const TICK_MARK_LENGTH_PX: f64 = 5.0;

/// Configuration for one chart axis.
///
/// Resolution precedence for the axis range: explicit ticks define it, an
/// explicit range is used verbatim, and otherwise it is derived from series
/// data.
#[derive(Clone)]
pub struct Axis {
    pub kind: AxisKind,
    /// Axis visibility plus label styling; hidden unless `show` is set.
    pub style: Style,
    /// Major gridlines across the plot area; hidden unless `show` is set.
    pub grid_style: Style,
    pub range: Option<Range>,
    pub ticks: Option<Vec<Tick>>,
    pub formatter: Option<ValueFormatter>,
}

impl Axis {
    #[must_use]
    pub fn new(kind: AxisKind) -> Self {
        Self {
            kind,
            style: Style::default(),
            grid_style: Style::default(),
            range: None,
            ticks: None,
            formatter: None,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_range(mut self, range: Range) -> Self {
        self.range = Some(range);
        self
    }

    #[must_use]
    pub fn with_ticks(mut self, ticks: Vec<Tick>) -> Self {
        self.ticks = Some(ticks);
        self
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: ValueFormatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    pub(super) fn explicit_ticks(&self) -> Option<&[Tick]> {
        self.ticks.as_deref().filter(|ticks| !ticks.is_empty())
    }

    pub(super) fn explicit_range(&self) -> Option<Range> {
        self.range.filter(|range| !range.is_unset())
    }

    /// Echoes explicit ticks verbatim, otherwise generates them against the
    /// range's current pixel domain.
    pub(super) fn resolved_ticks(
        &self,
        renderer: &mut dyn Renderer,
        range: &Range,
        defaults: &Style,
        formatter: &ValueFormatter,
    ) -> Vec<Tick> {
        if let Some(explicit) = self.explicit_ticks() {
            return explicit.to_vec();
        }
        let style = self.style.merge(defaults);
        generate_ticks(renderer, range, self.kind != AxisKind::X, &style, formatter)
    }

    /// Pixel footprint of this axis's tick labels drawn along its edge of
    /// `canvas`, including `canvas` itself.
    pub(super) fn measure(
        &self,
        renderer: &mut dyn Renderer,
        canvas: Rect,
        range: &Range,
        defaults: &Style,
        ticks: &[Tick],
    ) -> Rect {
        let style = self.style.merge(defaults);
        apply_font(renderer, &style);

        let mut bounds = canvas;
        for tick in ticks {
            let text_box = renderer.measure_text(&tick.label);
            match self.kind {
                AxisKind::X => {
                    let tick_x = canvas.left + range.translate(tick.value);
                    bounds.left = bounds.left.min(tick_x - text_box.width() / 2.0);
                    bounds.right = bounds.right.max(tick_x + text_box.width() / 2.0);
                    bounds.bottom = bounds
                        .bottom
                        .max(canvas.bottom + DEFAULT_AXIS_MARGIN_PX + text_box.height());
                }
                AxisKind::YPrimary => {
                    let tick_y = canvas.bottom - range.translate(tick.value);
                    bounds.left = bounds
                        .left
                        .min(canvas.left - (DEFAULT_AXIS_MARGIN_PX + text_box.width()));
                    bounds.top = bounds.top.min(tick_y - text_box.height() / 2.0);
                    bounds.bottom = bounds.bottom.max(tick_y + text_box.height() / 2.0);
                }
                AxisKind::YSecondary => {
                    let tick_y = canvas.bottom - range.translate(tick.value);
                    bounds.right = bounds
                        .right
                        .max(canvas.right + DEFAULT_AXIS_MARGIN_PX + text_box.width());
                    bounds.top = bounds.top.min(tick_y - text_box.height() / 2.0);
                    bounds.bottom = bounds.bottom.max(tick_y + text_box.height() / 2.0);
                }
            }
        }
        bounds
    }

    /// Draws gridlines, the axis line, tick marks, and tick labels.
    pub(super) fn draw(
        &self,
        renderer: &mut dyn Renderer,
        canvas: Rect,
        range: &Range,
        defaults: &Style,
        ticks: &[Tick],
    ) {
        let style = self.style.merge(defaults);

        if self.grid_style.shown() {
            self.draw_gridlines(renderer, canvas, range, ticks);
        }

        renderer.set_stroke_color(style.stroke_color_or(COLOR_AXIS));
        renderer.set_stroke_width(style.stroke_width_or(1.0));
        match self.kind {
            AxisKind::X => {
                renderer.move_to(canvas.left, canvas.bottom);
                renderer.line_to(canvas.right, canvas.bottom);
            }
            AxisKind::YPrimary => {
                renderer.move_to(canvas.left, canvas.top);
                renderer.line_to(canvas.left, canvas.bottom);
            }
            AxisKind::YSecondary => {
                renderer.move_to(canvas.right, canvas.top);
                renderer.line_to(canvas.right, canvas.bottom);
            }
        }
        renderer.stroke();

        for tick in ticks {
            match self.kind {
                AxisKind::X => {
                    let tick_x = canvas.left + range.translate(tick.value);
                    renderer.move_to(tick_x, canvas.bottom);
                    renderer.line_to(tick_x, canvas.bottom + TICK_MARK_LENGTH_PX);
                }
                AxisKind::YPrimary => {
                    let tick_y = canvas.bottom - range.translate(tick.value);
                    renderer.move_to(canvas.left - TICK_MARK_LENGTH_PX, tick_y);
                    renderer.line_to(canvas.left, tick_y);
                }
                AxisKind::YSecondary => {
                    let tick_y = canvas.bottom - range.translate(tick.value);
                    renderer.move_to(canvas.right, tick_y);
                    renderer.line_to(canvas.right + TICK_MARK_LENGTH_PX, tick_y);
                }
            }
            renderer.stroke();
        }

        apply_font(renderer, &style);
        renderer.set_font_color(style.font_color_or(COLOR_TEXT));
        for tick in ticks {
            let text_box = renderer.measure_text(&tick.label);
            match self.kind {
                AxisKind::X => {
                    let tick_x = canvas.left + range.translate(tick.value);
                    renderer.text(
                        &tick.label,
                        tick_x - text_box.width() / 2.0,
                        canvas.bottom + DEFAULT_AXIS_MARGIN_PX + text_box.height(),
                    );
                }
                AxisKind::YPrimary => {
                    let tick_y = canvas.bottom - range.translate(tick.value);
                    renderer.text(
                        &tick.label,
                        canvas.left - DEFAULT_AXIS_MARGIN_PX - text_box.width(),
                        tick_y + text_box.height() / 2.0,
                    );
                }
                AxisKind::YSecondary => {
                    let tick_y = canvas.bottom - range.translate(tick.value);
                    renderer.text(
                        &tick.label,
                        canvas.right + DEFAULT_AXIS_MARGIN_PX,
                        tick_y + text_box.height() / 2.0,
                    );
                }
            }
        }
    }

    fn draw_gridlines(
        &self,
        renderer: &mut dyn Renderer,
        canvas: Rect,
        range: &Range,
        ticks: &[Tick],
    ) {
        let grid = self.grid_style.merge(&grid_style_defaults());
        renderer.set_stroke_color(grid.stroke_color_or(COLOR_AXIS));
        renderer.set_stroke_width(grid.stroke_width_or(1.0));

        for tick in ticks {
            match self.kind {
                AxisKind::X => {
                    let tick_x = canvas.left + range.translate(tick.value);
                    renderer.move_to(tick_x, canvas.top);
                    renderer.line_to(tick_x, canvas.bottom);
                }
                AxisKind::YPrimary | AxisKind::YSecondary => {
                    let tick_y = canvas.bottom - range.translate(tick.value);
                    renderer.move_to(canvas.left, tick_y);
                    renderer.line_to(canvas.right, tick_y);
                }
            }
            renderer.stroke();
        }
    }
}

fn apply_font(renderer: &mut dyn Renderer, style: &Style) {
    if let Some(font) = &style.font {
        renderer.set_font(font);
    }
    renderer.set_font_size(style.font_size_or(DEFAULT_FONT_SIZE));
}
