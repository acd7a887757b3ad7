use smallvec::SmallVec;

use crate::core::{Range, Style, Tick, ValueFormatter};
use crate::render::Renderer;

use super::style_defaults::DEFAULT_FONT_SIZE;

/// Minimum clear gap between two rendered tick labels.
const MIN_LABEL_GAP_PX: f64 = 6.0;

/// Breathing room added to the sample label footprint when sizing the
/// candidate grid.
const MIN_TICK_SPACING_PX: f64 = 20.0;

const MAX_GENERATED_TICKS: usize = 32;

struct TickCandidate {
    value: f64,
    label: String,
    position: f64,
    half_extent: f64,
}

/// Generates ticks for a resolved range.
///
/// Candidates are evenly spaced across the range, sized off a sample label
/// footprint at the current pixel density; a greedy pass then drops
/// candidates whose rendered labels would overlap. Assumes `range` has both
/// bounds and a positive domain.
pub(super) fn generate_ticks(
    renderer: &mut dyn Renderer,
    range: &Range,
    vertical: bool,
    style: &Style,
    formatter: &ValueFormatter,
) -> Vec<Tick> {
    let delta = range.delta();
    if range.is_unset() || !delta.is_finite() || delta <= 0.0 || range.domain() <= 0.0 {
        return Vec::new();
    }

    if let Some(font) = &style.font {
        renderer.set_font(font);
    }
    renderer.set_font_size(style.font_size_or(DEFAULT_FONT_SIZE));

    let sample_box = renderer.measure_text(&formatter(range.min()));
    let sample_extent = if vertical {
        sample_box.height()
    } else {
        sample_box.width()
    };
    let footprint = sample_extent + MIN_TICK_SPACING_PX;
    let count = ((range.domain() / footprint).floor() as usize).clamp(2, MAX_GENERATED_TICKS);

    let denominator = (count - 1) as f64;
    let mut candidates: SmallVec<[TickCandidate; 8]> = SmallVec::new();
    for index in 0..count {
        let value = range.min() + delta * (index as f64) / denominator;
        let label = formatter(value);
        let text_box = renderer.measure_text(&label);
        let extent = if vertical {
            text_box.height()
        } else {
            text_box.width()
        };
        let half_extent = extent / 2.0;
        // Pixel offset along the axis in ascending screen order.
        let position = if vertical {
            range.domain() - range.translate(value)
        } else {
            range.translate(value)
        };
        candidates.push(TickCandidate {
            value,
            label,
            position,
            half_extent,
        });
    }

    candidates.sort_by(|left, right| left.position.total_cmp(&right.position));
    let selected = thin_by_label_extent(candidates);

    let mut ticks: Vec<Tick> = selected
        .into_iter()
        .map(|candidate| Tick::new(candidate.value, candidate.label))
        .collect();
    ticks.sort_by(|left, right| left.value.total_cmp(&right.value));
    ticks
}

/// Greedy min-spacing pass over position-sorted candidates.
///
/// Keeps the first candidate, then every candidate whose label clears the
/// previously kept one. The trailing range extreme is preferred over a
/// crowded interior label so the axis always ends on a real bound.
fn thin_by_label_extent(
    candidates: SmallVec<[TickCandidate; 8]>,
) -> SmallVec<[TickCandidate; 8]> {
    let total = candidates.len();
    let mut selected: SmallVec<[TickCandidate; 8]> = SmallVec::new();
    let mut dropped_tail: Option<TickCandidate> = None;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let is_tail = index + 1 == total;
        let fits = match selected.last() {
            None => true,
            Some(last) => clears(last, &candidate),
        };
        if fits {
            selected.push(candidate);
        } else if is_tail {
            dropped_tail = Some(candidate);
        }
    }

    if let Some(tail) = dropped_tail {
        if selected.len() == 1 {
            // On a very narrow axis a single extreme label is clearer than
            // overlapping pairs.
            selected[0] = tail;
        } else if clears(&selected[selected.len() - 2], &tail) {
            let last_index = selected.len() - 1;
            selected[last_index] = tail;
        }
    }

    selected
}

fn clears(kept: &TickCandidate, next: &TickCandidate) -> bool {
    next.position - kept.position >= kept.half_extent + next.half_extent + MIN_LABEL_GAP_PX
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::generate_ticks;
    use crate::core::{Range, Style, ValueFormatter, Viewport, float_value_formatter};
    use crate::render::RecordingRenderer;

    fn ranged(min: f64, max: f64, domain: f64) -> Range {
        let mut range = Range::new(min, max);
        range.set_domain(domain);
        range
    }

    #[test]
    fn ticks_span_the_range_in_ascending_order() {
        let mut renderer = RecordingRenderer::new(Viewport::new(800, 400)).expect("renderer");
        let range = ranged(0.0, 100.0, 500.0);

        let ticks = generate_ticks(
            &mut renderer,
            &range,
            false,
            &Style::default(),
            &float_value_formatter(),
        );

        assert!(ticks.len() >= 2);
        assert_eq!(ticks.first().expect("ticks").value, 0.0);
        assert_eq!(ticks.last().expect("ticks").value, 100.0);
        assert!(ticks.windows(2).all(|pair| pair[0].value < pair[1].value));
    }

    #[test]
    fn overlapping_labels_are_dropped() {
        let mut renderer = RecordingRenderer::new(Viewport::new(800, 400)).expect("renderer");
        // Labels like "100.00" measure 36 px; a 70 px domain cannot hold
        // more than two of them clear of each other.
        let range = ranged(0.0, 100.0, 70.0);

        let ticks = generate_ticks(
            &mut renderer,
            &range,
            false,
            &Style::default(),
            &float_value_formatter(),
        );

        assert!(ticks.len() <= 2);
        assert!(!ticks.is_empty());
    }

    #[test]
    fn wide_labels_thin_more_than_narrow_ones() {
        let mut renderer = RecordingRenderer::new(Viewport::new(800, 400)).expect("renderer");
        let range = ranged(0.0, 1_000_000.0, 300.0);
        let wide: ValueFormatter = Arc::new(|value| format!("{value:.4}"));
        let narrow: ValueFormatter = Arc::new(|value| format!("{:.0}", value / 1_000_000.0));

        let mut wide_renderer = RecordingRenderer::new(Viewport::new(800, 400)).expect("renderer");
        let wide_ticks = generate_ticks(&mut wide_renderer, &range, false, &Style::default(), &wide);
        let narrow_ticks = generate_ticks(&mut renderer, &range, false, &Style::default(), &narrow);

        assert!(wide_ticks.len() <= narrow_ticks.len());
    }

    #[test]
    fn degenerate_ranges_produce_no_ticks() {
        let mut renderer = RecordingRenderer::new(Viewport::new(800, 400)).expect("renderer");

        let unset = Range::unset();
        assert!(
            generate_ticks(
                &mut renderer,
                &unset,
                false,
                &Style::default(),
                &float_value_formatter(),
            )
            .is_empty()
        );

        let zero_delta = ranged(5.0, 5.0, 100.0);
        assert!(
            generate_ticks(
                &mut renderer,
                &zero_delta,
                true,
                &Style::default(),
                &float_value_formatter(),
            )
            .is_empty()
        );
    }
}
