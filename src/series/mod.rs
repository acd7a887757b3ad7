mod annotation;
mod band;
mod line;

pub use annotation::{Annotation, AnnotationSeries};
pub use band::BandSeries;
pub use line::LineSeries;
