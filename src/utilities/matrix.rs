/// Dense, row-major matrix of `f64` observations.
///
/// # Remarks
///
/// The matrix is never mutated once built; every transformation returns a new
/// [`Matrix`]. Rows correspond to instances and columns to solvers.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl Matrix {
    /// Wraps row-major storage of `rows * cols` values.
    pub(crate) fn from_row_major(rows: usize, cols: usize, values: Vec<f64>) -> Self {
        debug_assert_eq!(rows * cols, values.len());
        Self { rows, cols, values }
    }

    /// Builds a matrix from a list of rows.
    ///
    /// Returns [`None`] if the rows are not all of the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != cols) {
            return None;
        }

        let num_rows = rows.len();
        let values = rows.into_iter().flatten().collect();
        Some(Self::from_row_major(num_rows, cols, values))
    }

    /// An empty matrix with a fixed number of columns.
    pub fn empty(cols: usize) -> Self {
        Self::from_row_major(0, cols, Vec::new())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Value at the given row and column.
    ///
    /// # Panics
    ///
    /// If the index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows && col < self.cols);
        self.values[row * self.cols + col]
    }

    /// All values of a single row.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.values[start..start + self.cols]
    }

    /// Iterates over the rows of the matrix.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact panics on 0, an empty row set is all we can yield there.
        self.values.chunks_exact(self.cols.max(1)).take(self.rows)
    }

    /// Copies a single column out of the matrix.
    pub fn column(&self, col: usize) -> Vec<f64> {
        self.iter_rows().map(|row| row[col]).collect()
    }

    /// Returns a new matrix with `func(row, col, value)` applied to every cell.
    pub fn map_cells(&self, mut func: impl FnMut(usize, usize, f64) -> f64) -> Self {
        let cols = self.cols;
        let values = self
            .values
            .iter()
            .enumerate()
            .map(|(index, &value)| func(index / cols, index % cols, value))
            .collect();

        Self::from_row_major(self.rows, self.cols, values)
    }

    /// Smallest value in the matrix. NaN values are skipped.
    ///
    /// Returns [`None`] for an empty matrix or one consisting only of NaN.
    pub fn min(&self) -> Option<f64> {
        self.values
            .iter()
            .copied()
            .filter(|value| !value.is_nan())
            .reduce(f64::min)
    }

    /// Largest value in the matrix. NaN values are skipped.
    ///
    /// Returns [`None`] for an empty matrix or one consisting only of NaN.
    pub fn max(&self) -> Option<f64> {
        self.values
            .iter()
            .copied()
            .filter(|value| !value.is_nan())
            .reduce(f64::max)
    }

    /// Minimum of every row. NaN values are skipped.
    pub fn row_minima(&self) -> Vec<f64> {
        self.iter_rows()
            .map(|row| row.iter().copied().fold(f64::INFINITY, f64::min))
            .collect()
    }

    /// Raw row-major storage.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}
