use crate::core::{Rect, Style};
use crate::render::{Color, Renderer};

/// Fills and/or strokes `rect` according to the color fields present on
/// `style`. A style with neither fill nor stroke draws nothing.
pub fn draw_box(renderer: &mut dyn Renderer, rect: Rect, style: &Style) {
    let stroke_width = style.stroke_width_or(0.0);
    let has_fill = style.fill_color.is_some();
    let has_stroke = style.stroke_color.is_some() && stroke_width > 0.0;
    if !has_fill && !has_stroke {
        return;
    }

    if let Some(color) = style.fill_color {
        renderer.set_fill_color(color);
    }
    if has_stroke {
        renderer.set_stroke_color(style.stroke_color_or(Color::rgb(0.0, 0.0, 0.0)));
        renderer.set_stroke_width(stroke_width);
    }

    renderer.move_to(rect.left, rect.top);
    renderer.line_to(rect.right, rect.top);
    renderer.line_to(rect.right, rect.bottom);
    renderer.line_to(rect.left, rect.bottom);
    renderer.close_path();

    match (has_fill, has_stroke) {
        (true, true) => renderer.fill_stroke(),
        (true, false) => renderer.fill(),
        (false, true) => renderer.stroke(),
        (false, false) => unreachable!(),
    }
}

/// Strokes a polyline through `points` with the current stroke state.
pub fn stroke_path(renderer: &mut dyn Renderer, points: &[(f64, f64)]) {
    let Some(((first_x, first_y), rest)) = points.split_first() else {
        return;
    };

    renderer.move_to(*first_x, *first_y);
    for (x, y) in rest {
        renderer.line_to(*x, *y);
    }
    renderer.stroke();
}
