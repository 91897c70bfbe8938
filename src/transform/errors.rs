use thiserror::Error;

/// Errors that stop the transformation pipeline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// The table parsed fine but contains no instances.
    #[error("Table contains no data rows, there is nothing to profile")]
    EmptyDataset,
}

/// Conditions the pipeline corrected on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformWarning {
    /// The resolved axis range had zero width; `x_max` was moved to `x_min + 1.0`.
    DegenerateRange { value: f64 },
}

impl core::fmt::Display for TransformWarning {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TransformWarning::DegenerateRange { value } => write!(
                f,
                "x axis range collapsed to {value}, widened to [{value}, {}]",
                value + 1.0
            ),
        }
    }
}
