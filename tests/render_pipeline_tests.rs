use plotline::api::series_color;
use plotline::core::{AxisKind, DataPoint, SeriesAxis, Style, Tick};
use plotline::render::{DrawOp, RecordingRenderer};
use plotline::series::LineSeries;
use plotline::{Axis, Chart, ChartError, Renderer};

fn render_bytes(chart: &Chart) -> Vec<u8> {
    let mut out = Vec::new();
    chart
        .render(RecordingRenderer::new, &mut out)
        .expect("render");
    out
}

fn render_ops(chart: &Chart) -> Vec<DrawOp> {
    serde_json::from_slice(&render_bytes(chart)).expect("op log")
}

fn two_point_chart() -> Chart {
    let mut chart = Chart::new();
    chart.add_series(LineSeries::new(
        "load",
        vec![DataPoint::new(0.0, 0.0), DataPoint::new(1.0, 100.0)],
    ));
    chart
}

#[test]
fn zero_series_is_a_configuration_error_with_no_output() {
    let chart = Chart::new();
    let mut out = Vec::new();

    let err = chart
        .render(RecordingRenderer::new, &mut out)
        .expect_err("empty charts must be rejected");

    assert!(matches!(err, ChartError::MissingSeries));
    assert!(out.is_empty());
}

#[test]
fn identical_configurations_render_byte_identically() {
    let build = || {
        let mut chart = two_point_chart();
        chart.title = "deterministic".to_owned();
        chart.title_style.show = Some(true);
        chart.x_axis.style.show = Some(true);
        chart.y_axis.style.show = Some(true);
        chart
    };

    assert_eq!(render_bytes(&build()), render_bytes(&build()));
}

#[test]
fn flat_y_data_fails_validation_after_flushing_the_background() {
    let mut chart = Chart::new();
    chart.add_series(LineSeries::new(
        "flat",
        vec![DataPoint::new(0.0, 5.0), DataPoint::new(1.0, 5.0)],
    ));

    let mut out = Vec::new();
    let err = chart
        .render(RecordingRenderer::new, &mut out)
        .expect_err("flat y data has no drawable range");

    assert!(matches!(err, ChartError::InvalidRange { axis: "y" }));
    // The partial artifact holds exactly the background fill, nothing more.
    let ops: Vec<DrawOp> = serde_json::from_slice(&out).expect("op log");
    assert!(ops.iter().any(|op| matches!(op, DrawOp::Fill)));
    assert!(!ops.iter().any(|op| matches!(op, DrawOp::Text { .. })));
}

#[test]
fn secondary_only_series_renders_without_a_primary_range() {
    let mut chart = Chart::new();
    chart.add_series(
        LineSeries::new(
            "alt",
            vec![DataPoint::new(0.0, 5.0), DataPoint::new(1.0, 15.0)],
        )
        .with_y_axis(SeriesAxis::Secondary),
    );
    chart.y_axis_secondary.style.show = Some(true);

    let ops = render_ops(&chart);

    // Secondary-axis tick labels made it onto the surface.
    assert!(ops.iter().any(|op| matches!(op, DrawOp::Text { .. })));
}

#[test]
fn explicit_ticks_render_verbatim_and_pin_the_range() {
    let mut chart = two_point_chart();
    chart.x_axis = Axis::new(AxisKind::X).with_ticks(vec![
        Tick::new(0.0, "low"),
        Tick::new(50.0, "mid"),
        Tick::new(100.0, "high"),
    ]);
    chart.x_axis.style.show = Some(true);

    let ops = render_ops(&chart);
    let labels: Vec<&str> = ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text { body, .. } => Some(body.as_str()),
            _ => None,
        })
        .collect();

    assert_eq!(labels, vec!["low", "mid", "high"]);
}

#[test]
fn draw_order_is_background_canvas_axes_series_title_overlay() {
    let mut chart = two_point_chart();
    chart.title = "Demo".to_owned();
    chart.title_style.show = Some(true);
    chart.x_axis.style.show = Some(true);
    chart.y_axis.style.show = Some(true);
    chart.add_element(Box::new(|renderer, canvas, _style| {
        renderer.text("overlay-mark", canvas.left, canvas.top);
        Ok(())
    }));

    let ops = render_ops(&chart);

    let fill_indices: Vec<usize> = ops
        .iter()
        .enumerate()
        .filter_map(|(index, op)| matches!(op, DrawOp::Fill).then_some(index))
        .collect();
    assert!(fill_indices.len() >= 2, "background and canvas fills");
    let background_fill = fill_indices[0];
    let canvas_fill = fill_indices[1];

    let text_indices: Vec<(usize, &str)> = ops
        .iter()
        .enumerate()
        .filter_map(|(index, op)| match op {
            DrawOp::Text { body, .. } => Some((index, body.as_str())),
            _ => None,
        })
        .collect();
    let first_axis_label = text_indices.first().expect("axis labels").0;
    let title_index = text_indices
        .iter()
        .find(|(_, body)| *body == "Demo")
        .expect("title text")
        .0;
    let overlay_index = text_indices.last().expect("overlay text");

    let series_stroke = ops
        .iter()
        .enumerate()
        .position(|(index, op)| {
            index > canvas_fill
                && matches!(op, DrawOp::SetStrokeColor { color } if *color == series_color(0))
        })
        .expect("series stroke color");

    assert!(background_fill < canvas_fill);
    assert!(canvas_fill < first_axis_label);
    assert!(first_axis_label < series_stroke);
    assert!(series_stroke < title_index);
    assert!(title_index < overlay_index.0);
    assert_eq!(overlay_index.1, "overlay-mark");
}

#[test]
fn title_is_centered_with_fixed_top_offset() {
    let mut chart = two_point_chart();
    chart.title = "Demo".to_owned();
    chart.title_style.show = Some(true);

    let ops = render_ops(&chart);
    let (x, y) = ops
        .iter()
        .find_map(|op| match op {
            DrawOp::Text { body, x, y } if body == "Demo" => Some((*x, *y)),
            _ => None,
        })
        .expect("title text");

    // Title font defaults to 18 px; the recording backend measures
    // ceil(4 chars * 18 * 0.6) = 44 px wide and 18 px tall.
    assert_eq!(y, 10.0 + 18.0);
    assert_eq!(x, (1024.0 - 44.0) / 2.0);
}

#[test]
fn caller_configuration_survives_rendering_untouched() {
    let mut chart = two_point_chart();
    chart.y_axis_secondary.kind = AxisKind::X; // deliberately mis-tagged
    let _ = render_bytes(&chart);

    assert_eq!(chart.y_axis_secondary.kind, AxisKind::X);
}

#[test]
fn hidden_series_draw_nothing_but_still_count_for_configuration() {
    let mut chart = Chart::new();
    chart.add_series(
        LineSeries::new(
            "ghost",
            vec![DataPoint::new(0.0, 0.0), DataPoint::new(1.0, 1.0)],
        )
        .with_style(Style {
            show: Some(false),
            ..Style::default()
        }),
    );

    // The only series is hidden, so ranging sees no data at all.
    let mut out = Vec::new();
    let err = chart
        .render(RecordingRenderer::new, &mut out)
        .expect_err("no visible data to range");
    assert!(matches!(err, ChartError::InvalidRange { axis: "x" }));
}
