//! Tabular text decoder

use crate::format::{Grid, TableFormat};
use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

/// Default buffer capacity (in bytes) for decoding from a reader
pub const DEFAULT_READ_BUFFER_SIZE: usize = 4096;

/// Error type for decoding tabular text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A row's field count disagrees with the first row's.
    /// Carries the 1-based raw row number at which the mismatch was
    /// detected.
    MalformedTable { row: usize },

    /// I/O failure while draining a reader or file; string input never
    /// produces this
    Io(String),
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::MalformedTable { row } => {
                write!(
                    f,
                    "Invalid tabular data; column count does not match first column at row {}.",
                    row
                )
            }
            DecodeError::Io(msg) => {
                write!(f, "I/O error: {}", msg)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<std::io::Error> for DecodeError {
    fn from(err: std::io::Error) -> Self {
        DecodeError::Io(err.to_string())
    }
}

/// Decodes delimiter-separated text into a grid of cells.
///
/// Holds only its dialect and a read-buffer-size hint, so one instance
/// can be shared across threads; every call parses with its own local
/// state.
pub struct Decoder {
    format: TableFormat,
    read_buffer_size: usize,
}

impl Decoder {
    /// Create a decoder for the given dialect
    pub fn new(format: TableFormat) -> Self {
        Self {
            format,
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
        }
    }

    /// Set the buffer capacity used when decoding from a reader.
    /// A performance hint only; it never changes the parse result.
    pub fn with_read_buffer_size(mut self, size: usize) -> Self {
        self.read_buffer_size = size;
        self
    }

    /// The dialect this decoder parses
    pub fn format(&self) -> &TableFormat {
        &self.format
    }

    /// Decode tabular text into a grid.
    ///
    /// Rows are split on the dialect's literal row separator, then each
    /// row is split into fields (quote-aware when the dialect carries a
    /// quote character). The field count of the first retained row fixes
    /// the column count for the whole grid; any later row that disagrees
    /// fails the entire call with [`DecodeError::MalformedTable`]. A
    /// zero-length row is dropped when the dialect tolerates empty rows,
    /// otherwise it counts as a one-field row holding the empty string.
    pub fn decode(&self, input: &str) -> Result<Grid, DecodeError> {
        let mut grid: Grid = Vec::new();
        let mut expected_columns: Option<usize> = None;
        let mut row_number = 0usize;

        for raw_row in input.split(self.format.row_separator.as_str()) {
            row_number += 1;

            if raw_row.is_empty() && self.format.tolerate_empty_rows {
                // Dropped rows are excluded from error row numbering
                row_number -= 1;
                continue;
            }

            let fields = match self.format.quote {
                Some(quote) => self.split_quoted(raw_row, quote),
                None => raw_row
                    .split(self.format.delimiter)
                    .map(str::to_string)
                    .collect(),
            };

            let expected = *expected_columns.get_or_insert(fields.len());
            if fields.len() != expected {
                return Err(DecodeError::MalformedTable { row: row_number });
            }

            grid.push(fields);
        }

        Ok(grid)
    }

    /// Decode tabular text from a reader.
    ///
    /// The reader is drained through a buffer of the configured capacity
    /// before parsing; input that is not valid UTF-8 fails with
    /// [`DecodeError::Io`].
    pub fn decode_from_reader<R: Read>(&self, reader: R) -> Result<Grid, DecodeError> {
        let mut input = String::new();
        let mut reader = BufReader::with_capacity(self.read_buffer_size, reader);
        reader.read_to_string(&mut input)?;
        self.decode(&input)
    }

    /// Decode tabular text from a file
    pub fn decode_from_file(&self, path: &Path) -> Result<Grid, DecodeError> {
        let input = fs::read_to_string(path)?;
        self.decode(&input)
    }

    /// Quote-aware field split: an explicit outside/inside automaton
    /// consuming one character at a time. A quote opens a quoted region
    /// only as the very first character of a field; inside the region a
    /// doubled quote collapses to one literal quote and a lone quote
    /// closes the region. Delimiters inside the region are literal text.
    fn split_quoted(&self, raw_row: &str, quote: char) -> Vec<String> {
        let mut fields = Vec::new();
        let mut field = String::new();
        let mut state = QuoteState::Outside;
        let mut field_start = true;

        let mut chars = raw_row.chars().peekable();
        while let Some(c) = chars.next() {
            match state {
                QuoteState::Outside => {
                    if c == self.format.delimiter {
                        fields.push(std::mem::take(&mut field));
                        field_start = true;
                    } else if c == quote && field_start {
                        // Opening quote, not part of the field text
                        state = QuoteState::Inside;
                        field_start = false;
                    } else {
                        // A quote past the first position is literal
                        field.push(c);
                        field_start = false;
                    }
                }
                QuoteState::Inside => {
                    if c == quote {
                        if chars.peek() == Some(&quote) {
                            // Doubled quote: one literal quote, stay inside
                            chars.next();
                            field.push(quote);
                        } else {
                            // Closing quote, not part of the field text
                            state = QuoteState::Outside;
                        }
                    } else {
                        field.push(c);
                    }
                }
            }
        }

        // An unterminated quoted region keeps whatever was accumulated
        fields.push(field);
        fields
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    Outside,
    Inside,
}
