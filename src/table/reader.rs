//! Reads delimited performance tables.
//!
//! The expected layout is:
//!
//! ```text
//! instance  solver1  solver2  ...
//! inst1     1.5      2.0      ...
//! inst2     0.3      0.7      ...
//! ```
//!
//! With [`HeaderLayout::SolversOnly`] the header has no label for the instance
//! column and every header field names a solver.
//!
//! Whitespace separated tables are split line by line. Tables with a byte delimiter
//! go through the [`csv`] crate, so quoted fields are supported.

use super::{
    data_table::Table, delimiter::Delimiter, errors::TableError, header_layout::HeaderLayout,
};
use crate::utilities::matrix::Matrix;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

type Result<T> = core::result::Result<T, TableError>;

/// A non-blank line of the source, split into fields.
struct Record {
    /// 1-based line number.
    line: usize,
    fields: Vec<String>,
}

/// Reads a table from a file on disk.
///
/// # Arguments
/// * `path` - Path to the delimited text file
/// * `delimiter` - Field separator
/// * `layout` - How the header maps onto the columns
pub fn read_table_from_path(
    path: &Path,
    delimiter: &Delimiter,
    layout: HeaderLayout,
) -> Result<Table> {
    let file = File::open(path)?;
    read_table(BufReader::new(file), delimiter, layout)
}

/// Reads a table from any buffered source.
///
/// # Arguments
/// * `reader` - Source of the table text
/// * `delimiter` - Field separator
/// * `layout` - How the header maps onto the columns
///
/// # Returns
/// * `Ok(Table)` - The parsed table; it may have zero rows, see [`Table::is_empty`]
/// * `Err(TableError)` - On I/O failure, a malformed header, a row with the wrong
///   number of fields or a non-numeric field. Reading stops at the first error.
pub fn read_table<R: BufRead>(
    reader: R,
    delimiter: &Delimiter,
    layout: HeaderLayout,
) -> Result<Table> {
    let mut records = records(reader, delimiter);

    let header = match records.next() {
        Some(record) => record?,
        None => return Err(TableError::MissingHeader),
    };

    let solver_names = layout.solver_names(header.fields);
    if solver_names.is_empty() {
        return Err(TableError::NoSolvers { line: header.line });
    }

    let expected = solver_names.len() + 1;
    let mut instance_names = Vec::new();
    let mut values = Vec::new();

    for record in records {
        let Record { line, mut fields } = record?;
        if fields.len() != expected {
            return Err(TableError::FieldCount {
                line,
                expected,
                found: fields.len(),
            });
        }

        for (column, field) in fields.iter().enumerate().skip(1) {
            let value = field
                .parse::<f64>()
                .map_err(|_| TableError::InvalidNumber {
                    line,
                    column: column + 1,
                    field: field.clone(),
                })?;
            values.push(value);
        }

        instance_names.push(std::mem::take(&mut fields[0]));
    }

    debug!(
        rows = instance_names.len(),
        solvers = solver_names.len(),
        ?layout,
        "Read performance table"
    );

    let data = Matrix::from_row_major(instance_names.len(), solver_names.len(), values);
    Ok(Table::from_parts(instance_names, solver_names, data))
}

/// Lazily splits the source into non-blank records.
fn records<'a, R: BufRead + 'a>(
    reader: R,
    delimiter: &Delimiter,
) -> Box<dyn Iterator<Item = Result<Record>> + 'a> {
    match *delimiter {
        Delimiter::Whitespace => Box::new(reader.lines().enumerate().filter_map(
            |(index, line)| match line {
                Ok(line) => {
                    let fields: Vec<String> =
                        line.split_whitespace().map(str::to_string).collect();
                    (!fields.is_empty()).then_some(Ok(Record {
                        line: index + 1,
                        fields,
                    }))
                }
                Err(e) => Some(Err(e.into())),
            },
        )),
        Delimiter::Byte(byte) => {
            let reader = csv::ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .trim(csv::Trim::All)
                .delimiter(byte)
                .from_reader(reader);

            Box::new(reader.into_records().filter_map(|result| match result {
                Ok(record) => {
                    if record.iter().all(str::is_empty) {
                        return None;
                    }
                    let line = record.position().map_or(0, |position| position.line() as usize);
                    Some(Ok(Record {
                        line,
                        fields: record.iter().map(str::to_string).collect(),
                    }))
                }
                Err(e) => Some(Err(e.into())),
            }))
        }
    }
}
