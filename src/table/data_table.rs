use crate::utilities::matrix::Matrix;

/// A parsed performance table.
///
/// Rows are problem instances, columns are solvers. The column order decides
/// plot order and which style each solver gets.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    instance_names: Vec<String>,
    solver_names: Vec<String>,
    data: Matrix,
}

impl Table {
    /// Creates a new table.
    ///
    /// Returns [`None`] if the names do not match the shape of `data`.
    pub fn new(instance_names: Vec<String>, solver_names: Vec<String>, data: Matrix) -> Option<Self> {
        if instance_names.len() != data.rows() || solver_names.len() != data.cols() {
            return None;
        }

        Some(Self {
            instance_names,
            solver_names,
            data,
        })
    }

    /// Creates a table whose shape the caller has already checked.
    pub(crate) fn from_parts(
        instance_names: Vec<String>,
        solver_names: Vec<String>,
        data: Matrix,
    ) -> Self {
        debug_assert_eq!(instance_names.len(), data.rows());
        debug_assert_eq!(solver_names.len(), data.cols());
        Self {
            instance_names,
            solver_names,
            data,
        }
    }

    /// Names of the instances (row labels). Need not be unique.
    pub fn instance_names(&self) -> &[String] {
        &self.instance_names
    }

    /// Names of the solvers (column labels), in plot order.
    pub fn solver_names(&self) -> &[String] {
        &self.solver_names
    }

    /// Raw observations, `data[instance][solver]`.
    pub fn data(&self) -> &Matrix {
        &self.data
    }

    /// Returns true if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.data.rows() == 0
    }
}
