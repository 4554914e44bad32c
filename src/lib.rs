//! # tabcodec
//!
//! Codec for delimiter-separated tabular text (the CSV/TSV family).
//!
//! The crate parses text into a rectangular grid of string cells and
//! serializes a grid back to text. Cells are kept literal: no trimming,
//! no type coercion, whitespace preserved exactly.
//!
//! ## Dialects
//!
//! A [`TableFormat`] describes one dialect: the cell delimiter, an
//! optional quote character, the row separator, and whether blank rows
//! are tolerated while parsing. Two dialects are built in:
//!
//! ```text
//! CSV:  ','  cells, '"' quoting,       "\r\n" rows
//! TSV:  '\t' cells, no quote handling, "\n"   rows
//! ```
//!
//! ## Quoting
//!
//! When a dialect carries a quote character, a cell containing the
//! delimiter or the quote character is wrapped and embedded quotes are
//! doubled:
//!
//! ```text
//! cell:     A big, "big, test!
//! written:  "A big, ""big, test!"
//! ```
//!
//! A dialect without a quote character (like the built-in TSV) performs
//! no quote processing in either direction; quote characters in cells
//! are ordinary text.
//!
//! ## Example
//!
//! ```rust
//! use tabcodec::{Decoder, Encoder, TableFormat};
//!
//! let decoder = Decoder::new(TableFormat::csv());
//! let grid = decoder.decode("name,note\r\n\"Smith, J\",ok")?;
//! assert_eq!(grid[1][0], "Smith, J");
//!
//! let encoder = Encoder::new(TableFormat::csv());
//! assert_eq!(encoder.encode(&grid), "name,note\r\n\"Smith, J\",ok");
//! # Ok::<(), tabcodec::DecodeError>(())
//! ```
//!
//! ## Rectangularity
//!
//! On decode, the field count of the first retained row fixes the column
//! count; a row that disagrees fails the whole call with the offending
//! 1-based row number. On encode, each row is written with its own field
//! count and nothing is validated.

pub mod decoder;
pub mod encoder;
pub mod format;

pub use decoder::{DecodeError, Decoder, DEFAULT_READ_BUFFER_SIZE};
pub use encoder::Encoder;
pub use format::{Grid, TableFormat};
