pub mod format;
pub mod geometry;
pub mod range;
pub mod rounding;
pub mod series;
pub mod style;
pub mod types;

pub use format::{ValueFormatter, date_value_formatter, float_value_formatter};
pub use geometry::Rect;
pub use range::Range;
pub use series::{
    AnnotationProvider, BoundedValueProvider, Series, ValueFormatterProvider, ValueProvider,
};
pub use style::{Padding, Style};
pub use types::{AxisKind, BoundedPoint, DataPoint, SeriesAxis, Tick, Viewport};
