use thiserror::Error;

/// Errors that can occur while reading a performance table.
///
/// All of these are fatal; reading stops at the first one.
#[derive(Debug, Error)]
pub enum TableError {
    /// Failed to read from the underlying source.
    #[error("Failed to read table: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to read a delimited record.
    #[error("Failed to read delimited record: {0}")]
    Csv(#[from] csv::Error),

    /// A text delimiter has to be exactly one byte.
    #[error("Delimiter `{0}` is not a single byte")]
    InvalidDelimiter(String),

    /// The source contained no header line.
    #[error("Table has no header line")]
    MissingHeader,

    /// The header line names no solvers.
    #[error("Table header on line {line} names no solvers")]
    NoSolvers { line: usize },

    /// A data line has the wrong number of fields.
    #[error("Line {line} has {found} fields, expected {expected} (instance name + one per solver)")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A field could not be parsed as a floating point number.
    #[error("Line {line}, column {column}: `{field}` is not a number")]
    InvalidNumber {
        line: usize,
        column: usize,
        field: String,
    },
}
