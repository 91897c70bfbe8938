use super::{config::OUT_OF_BOUNDS_OFFSET, errors::TransformWarning};
use crate::utilities::matrix::Matrix;

/// Output of the transformation pipeline.
///
/// Holds the shifted/normalized/clamped observations (same shape as the input table)
/// together with the resolved x axis range.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedMatrix {
    pub(crate) data: Matrix,
    pub(crate) x_min: f64,
    pub(crate) x_max: f64,
    pub(crate) baselines: Option<Vec<f64>>,
    pub(crate) clamped_low: usize,
    pub(crate) clamped_high: usize,
    pub(crate) warnings: Vec<TransformWarning>,
}

impl ProcessedMatrix {
    /// Processed values, `data[instance][solver]`.
    pub fn data(&self) -> &Matrix {
        &self.data
    }

    /// Left end of the visible x range.
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    /// Right end of the visible x range. Never equal to [`Self::x_min`].
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Row minima used as ratio denominators, if ratio normalization ran.
    pub fn baselines(&self) -> Option<&[f64]> {
        self.baselines.as_deref()
    }

    /// Number of cells pushed below the visible range.
    pub fn clamped_low(&self) -> usize {
        self.clamped_low
    }

    /// Number of cells pushed above the visible range.
    pub fn clamped_high(&self) -> usize {
        self.clamped_high
    }

    /// Problems the pipeline corrected on its own.
    pub fn warnings(&self) -> &[TransformWarning] {
        &self.warnings
    }

    /// Value clamped samples below the range were replaced with.
    pub fn low_sentinel(&self) -> f64 {
        self.x_min - OUT_OF_BOUNDS_OFFSET
    }

    /// Value clamped samples above the range were replaced with.
    pub fn high_sentinel(&self) -> f64 {
        self.x_max + OUT_OF_BOUNDS_OFFSET
    }

    /// Returns true if `value` lies inside `[x_min, x_max]`.
    pub fn is_visible(&self, value: f64) -> bool {
        value >= self.x_min && value <= self.x_max
    }
}
