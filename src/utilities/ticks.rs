use itertools::Itertools;

/// Number of decimal places tick positions are rounded to.
pub const TICK_DECIMALS: i32 = 3;

/// Generates axis tick positions spanning `lo` to `hi`.
///
/// # Arguments
///
/// * `lo` - First tick position.
/// * `hi` - Last tick position.
/// * `count` - Number of evenly spaced samples to take from `lo` towards `hi`.
///
/// # Remarks
///
/// The result always starts with `lo` and `hi`, followed by the samples
/// `lo + k * step` for `k` in `0..count`, so `hi` itself is never sampled. Every value is rounded to
/// [`TICK_DECIMALS`] places and duplicates are dropped, keeping the first occurrence.
///
/// When `lo == hi`, `hi` is treated as `lo + 1.0` for spacing purposes.
/// Non-finite bounds produce only the (rounded) endpoints.
pub fn ticks(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    let hi = if lo == hi { lo + 1.0 } else { hi };
    let step = (hi - lo) / count.max(1) as f64;

    let samples = if step.is_finite() && step != 0.0 {
        (0..count.max(1)).map(|k| lo + k as f64 * step).collect()
    } else {
        Vec::new()
    };

    [lo, hi]
        .into_iter()
        .chain(samples)
        .map(round_tick)
        .unique_by(|value| value.to_bits())
        .collect()
}

/// Rounds a tick to [`TICK_DECIMALS`] places. Negative zero is folded into zero.
pub fn round_tick(value: f64) -> f64 {
    let scale = 10f64.powi(TICK_DECIMALS);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn unit_range_with_eight_ticks() {
        assert_eq!(
            ticks(0.0, 1.0, 8),
            vec![0.0, 1.0, 0.125, 0.25, 0.375, 0.5, 0.625, 0.75, 0.875]
        );
    }

    #[test]
    fn rounds_to_three_decimals() {
        let result = ticks(1.0, 2.0, 3);
        assert_eq!(result, vec![1.0, 2.0, 1.333, 1.667]);
    }

    #[test]
    fn degenerate_range_yields_two_distinct_values() {
        let result = ticks(5.0, 5.0, 4);
        assert_eq!(result, vec![5.0, 6.0, 5.25, 5.5, 5.75]);
    }

    #[test]
    fn duplicates_after_rounding_are_removed() {
        // All samples collapse onto the endpoints once rounded.
        let result = ticks(0.0, 0.001, 8);
        assert_eq!(result, vec![0.0, 0.001]);
    }

    #[test]
    fn sample_count_ignores_step_rounding() {
        // (hi - lo) / step is slightly above 15 here.
        let result = ticks(-0.928, 1.698, 15);
        assert_eq!(
            result,
            vec![
                -0.928, 1.698, -0.753, -0.578, -0.403, -0.228, -0.053, 0.122, 0.297, 0.473,
                0.648, 0.823, 0.998, 1.173, 1.348, 1.523
            ]
        );
    }

    #[rstest]
    #[case(0.244, 0.279, 15)]
    #[case(0.799, 1.421, 19)]
    #[case(0.646, 9.706000000000001, 7)]
    fn never_more_than_count_samples(#[case] lo: f64, #[case] hi: f64, #[case] count: usize) {
        assert!(ticks(lo, hi, count).len() <= count + 2);
    }

    #[test]
    fn zero_count_is_treated_as_one() {
        assert_eq!(ticks(2.0, 4.0, 0), vec![2.0, 4.0]);
    }

    #[test]
    fn infinite_bounds_skip_samples() {
        let result = ticks(1.0, f64::INFINITY, 8);
        assert_eq!(result, vec![1.0, f64::INFINITY]);
    }

    #[test]
    fn nan_bounds_do_not_panic() {
        let result = ticks(f64::NAN, 3.0, 8);
        assert_eq!(result.len(), 2);
        assert!(result[0].is_nan());
        assert_eq!(result[1], 3.0);
    }

    #[test]
    fn negative_zero_is_folded() {
        assert_eq!(round_tick(-0.0001).to_bits(), 0.0f64.to_bits());
    }

    #[rstest]
    #[case(0.0, 1.0, 1)]
    #[case(0.0, 1.0, 8)]
    #[case(-3.5, 12.25, 7)]
    #[case(1.0, 1000.0, 10)]
    #[case(0.125, 0.5, 3)]
    #[case(-10.0, -2.0, 16)]
    fn always_contains_endpoints_and_stays_bounded(
        #[case] lo: f64,
        #[case] hi: f64,
        #[case] count: usize,
    ) {
        let result = ticks(lo, hi, count);
        assert_eq!(result[0], lo);
        assert_eq!(result[1], hi);
        assert!(result.len() <= count + 2);

        let distinct = result.iter().map(|value| value.to_bits()).unique().count();
        assert_eq!(distinct, result.len());
        assert!(result.iter().all(|&value| value >= lo && value <= hi));
    }
}
