//! Nice-number rounding for auto-computed axis bounds.
//!
//! Auto-ranged Y axes get their bounds pushed outward to human-friendly
//! endpoints: the granularity is one power of ten below the magnitude of the
//! range delta, so a delta in the hundreds rounds to tens, a delta in the
//! tens rounds to whole units, and sub-unit deltas round to fine fractions.

const MAGNITUDE_CEILING: f64 = 1e10;
const MAGNITUDE_FLOOR: f64 = 1e-10;

/// Rounding granularity for a range delta.
///
/// Returns `0.0` when the delta is degenerate (zero, negative, NaN, or below
/// every magnitude threshold), which disables rounding; range validation
/// reports the axis instead.
#[must_use]
pub fn round_to_for_delta(delta: f64) -> f64 {
    if !delta.is_finite() || delta <= 0.0 {
        return 0.0;
    }

    let mut cursor = MAGNITUDE_CEILING;
    while cursor >= MAGNITUDE_FLOOR {
        if delta >= cursor {
            return cursor / 10.0;
        }
        cursor /= 10.0;
    }
    0.0
}

/// Rounds `value` up to the next multiple of `round_to`.
#[must_use]
pub fn round_up(value: f64, round_to: f64) -> f64 {
    if round_to <= 0.0 {
        return value;
    }
    (value / round_to).ceil() * round_to
}

/// Rounds `value` down to the previous multiple of `round_to`.
#[must_use]
pub fn round_down(value: f64, round_to: f64) -> f64 {
    if round_to <= 0.0 {
        return value;
    }
    (value / round_to).floor() * round_to
}
