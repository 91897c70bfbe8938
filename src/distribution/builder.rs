//! Builds empirical cumulative distributions from processed data.
//!
//! Each solver column is sorted ascending and paired with a shared y sequence
//! `y[i] = i / n`. Read with step-post interpolation, `y` is the fraction of
//! instances strictly below the next sample, so the curve is a non-decreasing
//! staircase starting at 0.

use crate::transform::processed_matrix::ProcessedMatrix;
use derive_new::new;

/// The sorted samples of a single solver.
#[derive(Debug, Clone, PartialEq, new)]
pub struct DistributionSeries {
    /// Display name of the solver.
    pub label: String,

    /// Column of the solver in the input table.
    pub column: usize,

    /// Samples sorted ascending. NaN sorts last.
    pub x: Vec<f64>,
}

/// Distributions of all solvers, sharing one y sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    y: Vec<f64>,
    series: Vec<DistributionSeries>,
}

impl Profile {
    /// Fractions paired with every series' samples.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn series(&self) -> &[DistributionSeries] {
        &self.series
    }

    /// Number of instances in every series.
    pub fn instances(&self) -> usize {
        self.y.len()
    }

    /// `(x, y)` pairs of a series.
    pub fn points<'a>(&'a self, series: &'a DistributionSeries) -> impl Iterator<Item = (f64, f64)> + 'a {
        series.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// Sorts every column of `processed` and pairs it with the shared y sequence.
///
/// # Arguments
/// * `processed` - Output of the transformation pipeline
/// * `labels` - One display name per column
///
/// # Remarks
///
/// Missing labels fall back to `"solver N"`; extra labels are ignored.
pub fn build_profile(processed: &ProcessedMatrix, labels: &[String]) -> Profile {
    let data = processed.data();

    let series = (0..data.cols())
        .map(|column| {
            let label = labels
                .get(column)
                .cloned()
                .unwrap_or_else(|| format!("solver {}", column + 1));
            DistributionSeries::new(label, column, sorted_column(data.column(column)))
        })
        .collect();

    Profile {
        y: empirical_fractions(data.rows()),
        series,
    }
}

/// Sorts values ascending using IEEE total order, so NaN ends up last.
pub fn sorted_column(mut values: Vec<f64>) -> Vec<f64> {
    values.sort_by(f64::total_cmp);
    values
}

/// `[0/n, 1/n, ..., (n-1)/n]`.
pub fn empirical_fractions(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64 / n as f64).collect()
}
