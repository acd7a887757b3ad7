use std::sync::Arc;

use plotline::core::{BoundedPoint, DataPoint, Style, date_value_formatter};
use plotline::render::{Color, DrawOp, RecordingRenderer};
use plotline::series::{BandSeries, LineSeries};
use plotline::Chart;

fn render_ops(chart: &Chart) -> Vec<DrawOp> {
    let mut out = Vec::new();
    chart
        .render(RecordingRenderer::new, &mut out)
        .expect("render");
    serde_json::from_slice(&out).expect("op log")
}

fn text_labels(ops: &[DrawOp]) -> Vec<String> {
    ops.iter()
        .filter_map(|op| match op {
            DrawOp::Text { body, .. } => Some(body.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn band_series_ranges_over_both_bounds_and_fills_between_envelopes() {
    let mut chart = Chart::new();
    chart.add_series(
        BandSeries::new(
            "envelope",
            vec![
                BoundedPoint::new(0.0, 10.0, 30.0),
                BoundedPoint::new(1.0, 12.0, 44.0),
            ],
        )
        .with_style(Style {
            show: Some(true),
            fill_color: Some(Color::rgba(0.0, 0.45, 0.85, 0.25)),
            ..Style::default()
        }),
    );
    chart.y_axis.style.show = Some(true);

    let ops = render_ops(&chart);

    // Background, canvas, and the band fill itself.
    let fills = ops
        .iter()
        .filter(|op| matches!(op, DrawOp::Fill))
        .count();
    assert_eq!(fills, 3);

    // Both bounds fed the y range: the topmost label reaches the rounded
    // upper bound of 44, the lowest the rounded lower bound of 10.
    let labels = text_labels(&ops);
    assert!(labels.iter().any(|label| label == "44.00"));
    assert!(labels.iter().any(|label| label == "10.00"));
}

#[test]
fn axis_formatter_overrides_the_default_float_labels() {
    let mut chart = Chart::new();
    chart.add_series(LineSeries::new(
        "load",
        vec![DataPoint::new(0.0, 0.0), DataPoint::new(10.0, 100.0)],
    ));
    chart.x_axis.style.show = Some(true);
    chart.x_axis.formatter = Some(Arc::new(|value| format!("{value:.0}s")));

    let labels = text_labels(&render_ops(&chart));

    assert!(!labels.is_empty());
    assert!(labels.iter().all(|label| label.ends_with('s')));
}

#[test]
fn date_formatter_labels_the_x_axis_with_days() {
    let mut chart = Chart::new();
    chart.add_series(LineSeries::new(
        "daily",
        vec![DataPoint::new(0.0, 1.0), DataPoint::new(86_400.0, 2.0)],
    ));
    chart.x_axis.style.show = Some(true);
    chart.x_axis.formatter = Some(date_value_formatter());

    let labels = text_labels(&render_ops(&chart));

    // X bounds are never nice-rounded, so the first and last ticks land
    // exactly on the two sampled days.
    assert!(labels.iter().any(|label| label == "1970-01-01"));
    assert!(labels.iter().any(|label| label == "1970-01-02"));
}

#[test]
fn default_labels_use_two_fraction_digits() {
    let mut chart = Chart::new();
    chart.add_series(LineSeries::new(
        "load",
        vec![DataPoint::new(0.0, 0.0), DataPoint::new(10.0, 100.0)],
    ));
    chart.x_axis.style.show = Some(true);

    let labels = text_labels(&render_ops(&chart));
    assert!(labels.iter().any(|label| label == "0.00"));
}
