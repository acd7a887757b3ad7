//! plotline: a 2-D data-series chart renderer.
//!
//! The heart of the crate is a layout and range-resolution pipeline: axis
//! ranges are derived from series data or explicit overrides, validated, and
//! the plot area is iteratively reconciled against the space consumed by
//! axis and annotation labels before draw calls are issued in a fixed order
//! to a pluggable rendering backend.
//!
//! Rendering is synchronous and stateless across calls; the lazily-created
//! default font is the only process-wide shared value. Backends implement
//! [`render::Renderer`]; the built-in [`render::RecordingRenderer`] is
//! deterministic and headless, and the optional `cairo-backend` feature adds
//! PNG raster output.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod series;
pub mod telemetry;

pub use api::{Axis, Chart, Overlay};
pub use error::{ChartError, ChartResult};
pub use render::{RecordingRenderer, Renderer};
