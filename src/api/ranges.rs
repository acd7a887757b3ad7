use ordered_float::OrderedFloat;
use tracing::debug;

use crate::core::rounding::{round_down, round_to_for_delta, round_up};
use crate::core::{Range, SeriesAxis, ValueFormatter, float_value_formatter};
use crate::error::{ChartError, ChartResult};

use super::axis::Axis;
use super::chart::Chart;

/// Ranges resolved for the three chart axes, plus which Y axes actually
/// received series data.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct ResolvedRanges {
    pub x: Range,
    pub y: Range,
    pub y_secondary: Range,
    pub has_primary: bool,
    pub has_secondary: bool,
}

/// Label formatters resolved per axis.
#[derive(Clone)]
pub(super) struct AxisFormatters {
    pub x: ValueFormatter,
    pub y: ValueFormatter,
    pub y_secondary: ValueFormatter,
}

/// Running min/max accumulator over folded series values.
#[derive(Debug, Clone, Copy)]
struct Fold {
    min: f64,
    max: f64,
}

impl Fold {
    const EMPTY: Fold = Fold {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    fn add(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    fn is_empty(self) -> bool {
        !(self.min <= self.max)
    }
}

impl Chart {
    /// Scans every shown series and resolves one range per axis.
    ///
    /// Bounded values fold both bounds into their target Y axis; the x
    /// coordinate always folds into the X range. The secondary range stays
    /// unset when nothing projects onto it.
    pub(super) fn resolve_ranges(
        &self,
        x_axis: &Axis,
        y_axis: &Axis,
        y_secondary_axis: &Axis,
    ) -> ResolvedRanges {
        let mut x_fold = Fold::EMPTY;
        let mut y_fold = Fold::EMPTY;
        let mut y_secondary_fold = Fold::EMPTY;
        let mut has_primary = false;
        let mut has_secondary = false;

        for series in &self.series {
            if !series.style().shown_or_default() {
                continue;
            }

            let target = series.y_axis();
            let y_target = match target {
                SeriesAxis::Primary => &mut y_fold,
                SeriesAxis::Secondary => &mut y_secondary_fold,
            };

            let mut folded_any = false;
            if let Some(bounded) = series.as_bounded_values() {
                for index in 0..bounded.len() {
                    let (x, y_low, y_high) = bounded.bounded_value(index);
                    x_fold.add(x);
                    y_target.add(y_low);
                    y_target.add(y_high);
                    folded_any = true;
                }
            } else if let Some(values) = series.as_values() {
                for index in 0..values.len() {
                    let (x, y) = values.value(index);
                    x_fold.add(x);
                    y_target.add(y);
                    folded_any = true;
                }
            }

            if folded_any {
                match target {
                    SeriesAxis::Primary => has_primary = true,
                    SeriesAxis::Secondary => has_secondary = true,
                }
            }
        }

        let resolved = ResolvedRanges {
            x: resolve_axis(x_axis, x_fold, false),
            y: resolve_axis(y_axis, y_fold, true),
            y_secondary: resolve_axis(y_secondary_axis, y_secondary_fold, true),
            has_primary,
            has_secondary,
        };
        debug!(
            x_min = resolved.x.min(),
            x_max = resolved.x.max(),
            y_min = resolved.y.min(),
            y_max = resolved.y.max(),
            has_secondary = resolved.has_secondary,
            "resolved axis ranges"
        );
        resolved
    }

    /// Validates resolved deltas.
    ///
    /// A Y range is only held to the finite/non-zero contract when its axis
    /// received series data or carries an explicit configuration, so a chart
    /// living entirely on one Y axis does not fail on the other.
    pub(super) fn check_ranges(
        &self,
        ranges: &ResolvedRanges,
        y_axis: &Axis,
        y_secondary_axis: &Axis,
    ) -> ChartResult<()> {
        if !valid_delta(ranges.x.delta()) {
            return Err(ChartError::InvalidRange { axis: "x" });
        }
        if (ranges.has_primary || axis_has_explicit(y_axis)) && !valid_delta(ranges.y.delta()) {
            return Err(ChartError::InvalidRange { axis: "y" });
        }
        if (ranges.has_secondary || axis_has_explicit(y_secondary_axis))
            && !valid_delta(ranges.y_secondary.delta())
        {
            return Err(ChartError::InvalidRange { axis: "y-secondary" });
        }
        Ok(())
    }

    /// Resolves one formatter per axis: the last formatter-providing series
    /// wins for its axes, then axis-level formatters override, with a float
    /// formatter as the backstop.
    pub(super) fn resolve_value_formatters(
        &self,
        x_axis: &Axis,
        y_axis: &Axis,
        y_secondary_axis: &Axis,
    ) -> AxisFormatters {
        let mut formatters = AxisFormatters {
            x: float_value_formatter(),
            y: float_value_formatter(),
            y_secondary: float_value_formatter(),
        };

        for series in &self.series {
            if let Some(provider) = series.as_formatter_provider() {
                let (series_x, series_y) = provider.value_formatters();
                formatters.x = series_x;
                match series.y_axis() {
                    SeriesAxis::Primary => formatters.y = series_y,
                    SeriesAxis::Secondary => formatters.y_secondary = series_y,
                }
            }
        }

        if let Some(formatter) = &x_axis.formatter {
            formatters.x = formatter.clone();
        }
        if let Some(formatter) = &y_axis.formatter {
            formatters.y = formatter.clone();
        }
        if let Some(formatter) = &y_secondary_axis.formatter {
            formatters.y_secondary = formatter.clone();
        }
        formatters
    }
}

fn resolve_axis(axis: &Axis, fold: Fold, nice_round: bool) -> Range {
    if let Some(ticks) = axis.explicit_ticks() {
        let min = ticks
            .iter()
            .map(|tick| OrderedFloat(tick.value))
            .min()
            .expect("explicit ticks are non-empty");
        let max = ticks
            .iter()
            .map(|tick| OrderedFloat(tick.value))
            .max()
            .expect("explicit ticks are non-empty");
        return Range::new(min.0, max.0);
    }

    if let Some(range) = axis.explicit_range() {
        return Range::new(range.min(), range.max());
    }

    if fold.is_empty() {
        return Range::unset();
    }

    let range = Range::new(fold.min, fold.max);
    if !nice_round {
        return range;
    }

    let round_to = round_to_for_delta(range.delta());
    if round_to <= 0.0 {
        return range;
    }
    Range::new(
        round_down(fold.min, round_to),
        round_up(fold.max, round_to),
    )
}

fn axis_has_explicit(axis: &Axis) -> bool {
    axis.explicit_ticks().is_some() || axis.explicit_range().is_some()
}

fn valid_delta(delta: f64) -> bool {
    delta.is_finite() && delta != 0.0
}
