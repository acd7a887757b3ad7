use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Configuration error: a chart cannot be rendered without series.
    #[error("chart requires at least one series")]
    MissingSeries,

    /// The resolved range for an axis has a zero, infinite, or NaN delta.
    #[error("invalid {axis} range: delta must be finite and non-zero")]
    InvalidRange { axis: &'static str },

    /// Axis and annotation labels consumed more room than the chart bounds
    /// allow, leaving no drawable plot area.
    #[error("canvas box collapsed to {width}x{height} px after label layout")]
    LayoutCollapse { width: f64, height: f64 },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Failure reported by a concrete drawing backend.
    #[error("render backend: {0}")]
    Backend(String),

    /// Failure writing the serialized chart to the output sink.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
