//! The data transformation pipeline.
//!
//! Stages run in a fixed order, each taking the previous stage's output by reference
//! and returning a new value:
//!
//! 1. [`shift_matrix`]
//! 2. [`normalize_by_row_minimum`] (ratio plots only), with limits scaled by [`RowLimits::scaled`]
//! 3. [`resolve_axis`]
//! 4. [`AxisRange::widen_if_degenerate`]
//! 5. [`remap_out_of_bounds`], which tests the shifted values against the limits as given
//!
//! [`transform`] chains them together.

use super::{
    config::{TransformConfig, OUT_OF_BOUNDS_OFFSET},
    errors::{TransformError, TransformWarning},
    processed_matrix::ProcessedMatrix,
};
use crate::{table::data_table::Table, utilities::matrix::Matrix};
use tracing::{debug, warn};

type Result<T> = core::result::Result<T, TransformError>;

/// Matrix divided row-wise by its minima.
#[derive(Debug, Clone, PartialEq)]
pub struct RatioNormalized {
    pub data: Matrix,

    /// Minimum of each row before division.
    pub baselines: Vec<f64>,
}

/// Per-row limits expressed in plotted units. Only used to resolve the axis range.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLimits {
    lower: Vec<Option<f64>>,
    upper: Vec<Option<f64>>,
}

/// A resolved x axis range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub x_min: f64,
    pub x_max: f64,
}

/// Result of [`remap_out_of_bounds`].
#[derive(Debug, Clone, PartialEq)]
pub struct Remapped {
    pub data: Matrix,
    pub clamped_low: usize,
    pub clamped_high: usize,
}

/// Runs the full pipeline over a table.
///
/// # Arguments
/// * `table` - Parsed observations
/// * `config` - Transformation parameters
///
/// # Returns
/// * `Ok(ProcessedMatrix)` - Values ready for building distributions, plus the axis range
/// * `Err(TransformError::EmptyDataset)` - If the table has no rows
///
/// # Remarks
///
/// With ratio normalization, a row whose minimum is zero divides by zero and yields
/// `inf`/`NaN`. Those values are carried through untouched.
pub fn transform(table: &Table, config: &TransformConfig) -> Result<ProcessedMatrix> {
    if table.is_empty() {
        return Err(TransformError::EmptyDataset);
    }

    if let (Some(lower), Some(upper)) = (config.x_lower_limit, config.x_upper_limit) {
        if lower > upper {
            debug!(lower, upper, "Lower limit exceeds upper limit, keeping both as given");
        }
    }

    let shifted = shift_matrix(table.data(), config.effective_shift());
    let normalized = config.as_ratio.then(|| normalize_by_row_minimum(&shifted));

    let (data, limits) = match &normalized {
        Some(normalized) => {
            let limits = RowLimits::scaled(
                config.x_lower_limit,
                config.x_upper_limit,
                &normalized.baselines,
            );
            (&normalized.data, limits)
        }
        None => {
            let limits = RowLimits::unscaled(config.x_lower_limit, config.x_upper_limit, shifted.rows());
            (&shifted, limits)
        }
    };

    let (axis, warning) = resolve_axis(data, config, &limits).widen_if_degenerate();
    if let Some(warning) = warning {
        warn!("{}", warning);
    }

    let remapped = remap_out_of_bounds(
        data,
        &shifted,
        config.x_lower_limit,
        config.x_upper_limit,
        axis,
    );
    debug!(
        x_min = axis.x_min,
        x_max = axis.x_max,
        clamped_low = remapped.clamped_low,
        clamped_high = remapped.clamped_high,
        "Transformed performance data"
    );

    Ok(ProcessedMatrix {
        data: remapped.data,
        x_min: axis.x_min,
        x_max: axis.x_max,
        baselines: normalized.map(|normalized| normalized.baselines),
        clamped_low: remapped.clamped_low,
        clamped_high: remapped.clamped_high,
        warnings: warning.into_iter().collect(),
    })
}

/// Adds `shift` to every value.
pub fn shift_matrix(data: &Matrix, shift: f64) -> Matrix {
    data.map_cells(|_, _, value| value + shift)
}

/// Divides every row by its minimum value.
///
/// The smallest entry of each row becomes 1.0. A zero minimum is not guarded
/// against and produces `inf`/`NaN`.
pub fn normalize_by_row_minimum(data: &Matrix) -> RatioNormalized {
    let baselines = data.row_minima();
    let normalized = data.map_cells(|row, _, value| value / baselines[row]);

    RatioNormalized {
        data: normalized,
        baselines,
    }
}

impl RowLimits {
    /// Same limits for every row.
    pub fn unscaled(lower: Option<f64>, upper: Option<f64>, rows: usize) -> Self {
        Self {
            lower: vec![lower; rows],
            upper: vec![upper; rows],
        }
    }

    /// Limits divided by each row's baseline, for ratio plots.
    pub fn scaled(lower: Option<f64>, upper: Option<f64>, baselines: &[f64]) -> Self {
        Self {
            lower: baselines
                .iter()
                .map(|baseline| lower.map(|limit| limit / baseline))
                .collect(),
            upper: baselines
                .iter()
                .map(|baseline| upper.map(|limit| limit / baseline))
                .collect(),
        }
    }

    /// Smallest lower limit over all rows.
    pub fn loosest_lower(&self) -> Option<f64> {
        self.lower.iter().flatten().copied().reduce(f64::min)
    }

    /// Largest upper limit over all rows.
    pub fn loosest_upper(&self) -> Option<f64> {
        self.upper.iter().flatten().copied().reduce(f64::max)
    }
}

/// Resolves the visible x range.
///
/// A [`Derived`] `x_min` becomes `max(lower_limit, min(data))` and a derived `x_max`
/// becomes `min(upper_limit, max(data))`. Missing limits do not constrain the range.
///
/// [`Derived`]: super::bound::Bound::Derived
pub fn resolve_axis(data: &Matrix, config: &TransformConfig, limits: &RowLimits) -> AxisRange {
    let x_min = config.x_min.resolve(|| {
        match (limits.loosest_lower(), data.min()) {
            (Some(limit), Some(min)) => limit.max(min),
            (None, Some(min)) => min,
            (Some(limit), None) => limit,
            (None, None) => 0.0,
        }
    });

    let x_max = config.x_max.resolve(|| {
        match (limits.loosest_upper(), data.max()) {
            (Some(limit), Some(max)) => limit.min(max),
            (None, Some(max)) => max,
            (Some(limit), None) => limit,
            (None, None) => 0.0,
        }
    });

    AxisRange { x_min, x_max }
}

impl AxisRange {
    /// Moves `x_max` to `x_min + 1.0` when the range has zero width.
    pub fn widen_if_degenerate(self) -> (Self, Option<TransformWarning>) {
        if self.x_min == self.x_max {
            let widened = AxisRange {
                x_min: self.x_min,
                x_max: self.x_min + 1.0,
            };
            let warning = TransformWarning::DegenerateRange { value: self.x_min };
            (widened, Some(warning))
        } else {
            (self, None)
        }
    }
}

/// Pushes samples that cross the limits far outside the visible range.
///
/// # Arguments
/// * `data` - Values being plotted, possibly ratio normalized
/// * `shifted` - The same cells before normalization, tested against the limits
/// * `lower` / `upper` - Limits in input units
/// * `axis` - Resolved range the sentinels are placed around
///
/// # Remarks
///
/// A cell whose shifted value is at or above `upper` becomes `x_max + 1e6`. Otherwise,
/// if it is at or below `lower`, it becomes `x_min - 1e6`. Testing the shifted value keeps
/// the comparison independent of the sign of the row baseline. Samples stay in their
/// columns so distribution fractions are unaffected.
pub fn remap_out_of_bounds(
    data: &Matrix,
    shifted: &Matrix,
    lower: Option<f64>,
    upper: Option<f64>,
    axis: AxisRange,
) -> Remapped {
    let mut clamped_low = 0;
    let mut clamped_high = 0;

    let remapped = data.map_cells(|row, col, value| {
        let input = shifted.get(row, col);
        if upper.is_some_and(|limit| input >= limit) {
            clamped_high += 1;
            axis.x_max + OUT_OF_BOUNDS_OFFSET
        } else if lower.is_some_and(|limit| input <= limit) {
            clamped_low += 1;
            axis.x_min - OUT_OF_BOUNDS_OFFSET
        } else {
            value
        }
    });

    Remapped {
        data: remapped,
        clamped_low,
        clamped_high,
    }
}
