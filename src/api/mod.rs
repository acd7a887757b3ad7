mod axis;
mod chart;
mod layout;
mod ranges;
mod style_defaults;
mod ticks;

pub use axis::Axis;
pub use chart::{Chart, Overlay};
pub use style_defaults::{
    DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, DEFAULT_DPI, series_color,
};
