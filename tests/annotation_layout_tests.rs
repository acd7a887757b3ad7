use plotline::core::DataPoint;
use plotline::render::{DrawOp, RecordingRenderer};
use plotline::series::{Annotation, AnnotationSeries, LineSeries};
use plotline::Chart;

fn render_ops(chart: &Chart) -> Vec<DrawOp> {
    let mut out = Vec::new();
    chart
        .render(RecordingRenderer::new, &mut out)
        .expect("render");
    serde_json::from_slice(&out).expect("op log")
}

/// Bounding boxes of filled paths, in draw order.
fn fill_rects(ops: &[DrawOp]) -> Vec<(f64, f64, f64, f64)> {
    let mut rects = Vec::new();
    let mut path: Vec<(f64, f64)> = Vec::new();
    for op in ops {
        match op {
            DrawOp::MoveTo { x, y } => {
                path.clear();
                path.push((*x, *y));
            }
            DrawOp::LineTo { x, y } => path.push((*x, *y)),
            DrawOp::Fill | DrawOp::FillStroke => {
                if !path.is_empty() {
                    let left = path.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
                    let right = path.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
                    let top = path.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
                    let bottom = path.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
                    rects.push((left, top, right, bottom));
                    path.clear();
                }
            }
            _ => {}
        }
    }
    rects
}

fn base_chart() -> Chart {
    let mut chart = Chart::new();
    chart.add_series(LineSeries::new(
        "load",
        vec![DataPoint::new(0.0, 0.0), DataPoint::new(1.0, 100.0)],
    ));
    chart.x_axis.style.show = Some(true);
    chart.y_axis.style.show = Some(true);
    chart
}

#[test]
fn annotation_labels_reserve_extra_canvas_room() {
    let plain = base_chart();
    let plain_canvas = fill_rects(&render_ops(&plain))[1];

    let mut annotated = base_chart();
    annotated.add_series(AnnotationSeries::new(
        "events",
        vec![Annotation::new(1.0, 100.0, "peak event")],
    ));
    let ops = render_ops(&annotated);
    let annotated_canvas = fill_rects(&ops)[1];

    // The label anchors at the range maximum, so the canvas must give up
    // room on the right compared to the annotation-free layout.
    assert!(annotated_canvas.2 < plain_canvas.2);
    assert!(ops.iter().any(
        |op| matches!(op, DrawOp::Text { body, .. } if body == "peak event")
    ));
}

#[test]
fn annotations_alone_still_produce_ranges() {
    let mut chart = Chart::new();
    chart.add_series(AnnotationSeries::new(
        "events",
        vec![
            Annotation::new(0.0, 10.0, "start"),
            Annotation::new(5.0, 20.0, "finish"),
        ],
    ));

    // Annotation positions feed auto-ranging, so this renders without any
    // continuous series.
    let ops = render_ops(&chart);
    let labels: Vec<&str> = ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text { body, .. } => Some(body.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(labels, vec!["start", "finish"]);
}
