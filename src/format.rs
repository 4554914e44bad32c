//! Dialect descriptors and the grid model

/// A parsed table: rows of string cells.
///
/// Rectangular after a successful decode. The grid is a plain value owned
/// by the caller; neither half of the codec keeps a reference to it after
/// a call returns.
pub type Grid = Vec<Vec<String>>;

/// Describes one tabular-text dialect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFormat {
    /// Character separating cells within a row
    pub delimiter: char,
    /// Character wrapping cells that need escaping; `None` disables all
    /// quote processing for the dialect (cells pass through verbatim)
    pub quote: Option<char>,
    /// Literal string separating rows; no separator is written after the
    /// final row
    pub row_separator: String,
    /// Whether zero-length rows are silently dropped during decoding
    /// instead of being validated against the column count
    pub tolerate_empty_rows: bool,
}

impl TableFormat {
    /// Comma-delimited dialect: `,` between cells, `"` quoting, CRLF rows
    pub fn csv() -> Self {
        Self {
            delimiter: ',',
            quote: Some('"'),
            row_separator: "\r\n".to_string(),
            tolerate_empty_rows: false,
        }
    }

    /// Tab-delimited dialect: tab between cells, no quote processing,
    /// LF rows
    pub fn tsv() -> Self {
        Self {
            delimiter: '\t',
            quote: None,
            row_separator: "\n".to_string(),
            tolerate_empty_rows: false,
        }
    }

    /// Set whether zero-length rows are dropped while decoding
    pub fn tolerate_empty_rows(mut self, tolerate: bool) -> Self {
        self.tolerate_empty_rows = tolerate;
        self
    }
}
