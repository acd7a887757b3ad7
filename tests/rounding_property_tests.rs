use plotline::core::rounding::{round_down, round_to_for_delta, round_up};
use proptest::prelude::*;

proptest! {
    // The nice-rounding contract: rounded bounds never shrink the data's
    // true extent (up to float noise on the multiply-back).
    #[test]
    fn rounded_bounds_enclose_the_data(min in -1e6f64..1e6, span in 1e-6f64..1e6) {
        let max = min + span;
        let round_to = round_to_for_delta(max - min);
        let low = round_down(min, round_to);
        let high = round_up(max, round_to);

        let tolerance = 1e-9 * (1.0 + min.abs().max(max.abs()));
        prop_assert!(low <= min + tolerance);
        prop_assert!(high >= max - tolerance);
    }

    #[test]
    fn granularity_grows_with_delta(delta in 1e-6f64..1e6, factor in 10f64..1e4) {
        let fine = round_to_for_delta(delta);
        let coarse = round_to_for_delta(delta * factor);
        prop_assert!(coarse >= fine);
    }

    #[test]
    fn rounded_bounds_are_multiples_of_the_granularity(value in -1e6f64..1e6, delta in 1.0f64..1e4) {
        let round_to = round_to_for_delta(delta);
        prop_assume!(round_to > 0.0);

        let down = round_down(value, round_to);
        let ratio = down / round_to;
        prop_assert!((ratio - ratio.round()).abs() < 1e-6);
    }
}
