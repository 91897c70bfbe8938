use super::errors::TableError;

/// Field separator used when splitting table lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Delimiter {
    /// Split on runs of whitespace.
    #[default]
    Whitespace,

    /// Split on a single byte, e.g. `b','`, with CSV quoting rules. Fields are trimmed.
    Byte(u8),
}

impl Delimiter {
    /// Creates a delimiter from an optional user supplied string.
    /// [`None`] or an empty string mean whitespace splitting.
    ///
    /// # Returns
    /// * `Ok(Delimiter)` - For no delimiter or a single byte one
    /// * `Err(TableError::InvalidDelimiter)` - If the text is longer than one byte
    pub fn from_option(delimiter: Option<&str>) -> Result<Self, TableError> {
        match delimiter {
            None | Some("") => Ok(Delimiter::Whitespace),
            Some(text) => match text.as_bytes() {
                [byte] => Ok(Delimiter::Byte(*byte)),
                _ => Err(TableError::InvalidDelimiter(text.to_string())),
            },
        }
    }
}
