use crate::core::Style;
use crate::render::{Color, Font};

use super::chart::Chart;

pub const DEFAULT_CHART_WIDTH: u32 = 1024;
pub const DEFAULT_CHART_HEIGHT: u32 = 400;
pub const DEFAULT_DPI: f64 = 92.0;

pub(super) const DEFAULT_BACKGROUND_PADDING_PX: f64 = 5.0;
pub(super) const DEFAULT_TITLE_TOP_PADDING_PX: f64 = 10.0;
pub(super) const DEFAULT_AXIS_MARGIN_PX: f64 = 10.0;
pub(super) const DEFAULT_FONT_SIZE: f64 = 10.0;
pub(super) const DEFAULT_TITLE_FONT_SIZE: f64 = 18.0;
pub(super) const DEFAULT_SERIES_STROKE_WIDTH: f64 = 1.0;

pub(super) const COLOR_BACKGROUND: Color = Color::rgb(1.0, 1.0, 1.0);
pub(super) const COLOR_CANVAS: Color = Color::rgb(1.0, 1.0, 1.0);
pub(super) const COLOR_TEXT: Color = Color::from_rgb8(51, 51, 51);
pub(super) const COLOR_AXIS: Color = Color::from_rgb8(51, 51, 51);
pub(super) const COLOR_GRID: Color = Color::from_rgb8(239, 239, 239);

const SERIES_PALETTE: [Color; 5] = [
    Color::from_rgb8(0, 116, 217),
    Color::from_rgb8(0, 217, 101),
    Color::from_rgb8(217, 0, 116),
    Color::from_rgb8(0, 217, 210),
    Color::from_rgb8(217, 101, 0),
];

/// Stroke color assigned to a series slot whose style does not override it.
#[must_use]
pub fn series_color(index: usize) -> Color {
    SERIES_PALETTE[index % SERIES_PALETTE.len()]
}

/// Fallbacks for gridlines that opted into visibility without styling.
pub(super) fn grid_style_defaults() -> Style {
    Style {
        stroke_color: Some(COLOR_GRID),
        stroke_width: Some(1.0),
        ..Style::default()
    }
}

impl Chart {
    pub(super) fn style_defaults_background(&self) -> Style {
        Style {
            fill_color: Some(COLOR_BACKGROUND),
            stroke_color: Some(COLOR_BACKGROUND),
            stroke_width: Some(0.0),
            ..Style::default()
        }
    }

    pub(super) fn style_defaults_canvas(&self) -> Style {
        Style {
            fill_color: Some(COLOR_CANVAS),
            stroke_color: Some(COLOR_CANVAS),
            stroke_width: Some(0.0),
            ..Style::default()
        }
    }

    pub(super) fn style_defaults_axes(&self, font: &Font) -> Style {
        Style {
            font: Some(font.clone()),
            font_size: Some(DEFAULT_FONT_SIZE),
            font_color: Some(COLOR_TEXT),
            stroke_color: Some(COLOR_AXIS),
            stroke_width: Some(1.0),
            ..Style::default()
        }
    }

    pub(super) fn style_defaults_series(&self, index: usize, font: &Font) -> Style {
        Style {
            stroke_color: Some(series_color(index)),
            stroke_width: Some(DEFAULT_SERIES_STROKE_WIDTH),
            font: Some(font.clone()),
            font_size: Some(DEFAULT_FONT_SIZE),
            font_color: Some(COLOR_TEXT),
            ..Style::default()
        }
    }

    pub(super) fn style_defaults_title(&self, font: &Font) -> Style {
        Style {
            font: Some(font.clone()),
            font_size: Some(DEFAULT_TITLE_FONT_SIZE),
            font_color: Some(COLOR_TEXT),
            ..Style::default()
        }
    }

    pub(super) fn style_defaults_elements(&self, font: &Font) -> Style {
        Style {
            font: Some(font.clone()),
            ..Style::default()
        }
    }
}
