/// Expands sorted `(x, y)` samples into a step-post polyline.
///
/// Each sample holds its `y` until the next sample's `x`, where the curve jumps:
/// `(x0, y0), (x1, y0), (x1, y1), (x2, y1), ...`.
pub fn step_post_path(x: &[f64], y: &[f64]) -> Vec<(f64, f64)> {
    let len = x.len().min(y.len());
    let mut path = Vec::with_capacity(len.saturating_mul(2));

    for i in 0..len {
        if i > 0 {
            path.push((x[i], y[i - 1]));
        }
        path.push((x[i], y[i]));
    }

    path
}

/// Clamps the x coordinates of a staircase into `[lo, hi]`.
///
/// Clamping the vertices of a non-decreasing step function keeps its visible shape
/// while preventing segments from leaving the plotting area. Vertices with a NaN
/// coordinate are dropped.
pub fn clip_staircase(path: &[(f64, f64)], lo: f64, hi: f64) -> Vec<(f64, f64)> {
    path.iter()
        .filter(|(x, y)| !x.is_nan() && !y.is_nan())
        .map(|&(x, y)| (x.clamp(lo, hi), y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_steps() {
        let path = step_post_path(&[1.0, 2.0, 4.0], &[0.0, 1.0 / 3.0, 2.0 / 3.0]);
        assert_eq!(
            path,
            vec![
                (1.0, 0.0),
                (2.0, 0.0),
                (2.0, 1.0 / 3.0),
                (4.0, 1.0 / 3.0),
                (4.0, 2.0 / 3.0)
            ]
        );
    }

    #[test]
    fn staircase_is_monotone() {
        let path = step_post_path(&[1.0, 1.0, 2.0, 7.0], &[0.0, 0.25, 0.5, 0.75]);
        assert!(path.windows(2).all(|w| w[0].0 <= w[1].0 && w[0].1 <= w[1].1));
    }

    #[test]
    fn empty_and_single_inputs() {
        assert!(step_post_path(&[], &[]).is_empty());
        assert_eq!(step_post_path(&[5.0], &[0.0]), vec![(5.0, 0.0)]);
    }

    #[test]
    fn clip_clamps_sentinels_into_window() {
        let path = step_post_path(&[-1e6, 2.0, 1e6], &[0.0, 0.25, 0.5]);
        let clipped = clip_staircase(&path, 1.0, 3.0);
        assert_eq!(
            clipped,
            vec![(1.0, 0.0), (2.0, 0.0), (2.0, 0.25), (3.0, 0.25), (3.0, 0.5)]
        );
    }

    #[test]
    fn clip_drops_nan() {
        let clipped = clip_staircase(&[(1.0, 0.0), (f64::NAN, 0.5)], 0.0, 2.0);
        assert_eq!(clipped, vec![(1.0, 0.0)]);
    }
}
