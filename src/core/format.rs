use std::sync::Arc;

use chrono::{TimeZone, Utc};

/// Pure value-to-label mapping used for tick and annotation labels.
///
/// Axis-level formatters override series-provided ones; a default float
/// formatter backstops axes that specify neither.
pub type ValueFormatter = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

/// Default formatter: two fractional digits.
#[must_use]
pub fn float_value_formatter() -> ValueFormatter {
    Arc::new(|value| format!("{value:.2}"))
}

/// Formats a value as a calendar date, treating it as Unix seconds.
///
/// Values outside chrono's representable span fall back to the raw number so
/// a bad sample never panics the label pass.
#[must_use]
pub fn date_value_formatter() -> ValueFormatter {
    Arc::new(|value| match Utc.timestamp_opt(value as i64, 0).single() {
        Some(timestamp) => timestamp.format("%Y-%m-%d").to_string(),
        None => format!("{value:.0}"),
    })
}
