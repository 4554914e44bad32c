//! Tabular text encoder

use crate::format::TableFormat;
use std::io::Write;
use std::path::Path;

/// Serializes a grid of cells into delimiter-separated text.
///
/// Stateless apart from its dialect; safe to share across threads.
pub struct Encoder {
    format: TableFormat,
}

impl Encoder {
    /// Create an encoder for the given dialect
    pub fn new(format: TableFormat) -> Self {
        Self { format }
    }

    /// The dialect this encoder writes
    pub fn format(&self) -> &TableFormat {
        &self.format
    }

    /// Encode rows of cells to a string.
    ///
    /// Accepts anything row-shaped over string-like cells, so a
    /// [`Grid`](crate::Grid) and a fixed-size 2-D array both serialize
    /// directly. Rows are joined with the row separator; nothing follows
    /// the final row. Each row is written with its own field count, so a
    /// non-rectangular input passes through unchecked.
    pub fn encode<R, C>(&self, rows: &[R]) -> String
    where
        R: AsRef<[C]>,
        C: AsRef<str>,
    {
        let mut output = String::new();

        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                output.push_str(&self.format.row_separator);
            }
            self.encode_row(&mut output, row.as_ref());
        }

        output
    }

    /// Encode rows directly to a writer
    pub fn encode_to_writer<R, C, W>(&self, rows: &[R], mut writer: W) -> std::io::Result<()>
    where
        R: AsRef<[C]>,
        C: AsRef<str>,
        W: Write,
    {
        writer.write_all(self.encode(rows).as_bytes())
    }

    /// Encode rows to a file
    pub fn encode_to_file<R, C>(&self, rows: &[R], path: &Path) -> std::io::Result<()>
    where
        R: AsRef<[C]>,
        C: AsRef<str>,
    {
        std::fs::write(path, self.encode(rows))
    }

    fn encode_row<C: AsRef<str>>(&self, output: &mut String, row: &[C]) {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                output.push(self.format.delimiter);
            }
            self.encode_cell(output, cell.as_ref());
        }
    }

    /// A cell is quoted iff the dialect has a quote character and the
    /// cell contains the delimiter or the quote character itself.
    /// Whitespace alone never triggers quoting.
    fn encode_cell(&self, output: &mut String, cell: &str) {
        match self.format.quote {
            Some(quote) if cell.contains(self.format.delimiter) || cell.contains(quote) => {
                output.push(quote);
                for c in cell.chars() {
                    if c == quote {
                        output.push(quote);
                    }
                    output.push(c);
                }
                output.push(quote);
            }
            _ => output.push_str(cell),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::Decoder;
    use crate::format::Grid;

    fn grid(rows: &[&[&str]]) -> Grid {
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_encode_csv() {
        let input = grid(&[&["foo", "bar", "baz"], &["wibble", "wobble", "spong"]]);

        let encoder = Encoder::new(TableFormat::csv());
        let output = encoder.encode(&input);

        assert_eq!(output, "foo,bar,baz\r\nwibble,wobble,spong");
    }

    #[test]
    fn test_encode_csv_with_quotes() {
        let input = grid(&[
            &["foo", "bar", "baz"],
            &["wibble", "wobble", "spong"],
            &["  foo", "\"bar\"", "baz,bork"],
        ]);

        let encoder = Encoder::new(TableFormat::csv());
        let output = encoder.encode(&input);

        // Leading whitespace alone never triggers quoting, so the first
        // cell of the last row stays bare
        assert_eq!(
            output,
            "foo,bar,baz\r\n\
             wibble,wobble,spong\r\n\
             \x20 foo,\"\"\"bar\"\"\",\"baz,bork\""
        );
    }

    #[test]
    fn test_encode_tsv_never_quotes() {
        let input = grid(&[
            &["foo", "bar", "baz"],
            &["wibble", "  wobble  ", "spong"],
            &["  foo", "\"bar\"", "baz,bork"],
        ]);

        let encoder = Encoder::new(TableFormat::tsv());
        let output = encoder.encode(&input);

        assert_eq!(
            output,
            "foo\tbar\tbaz\n\
             wibble\t  wobble  \tspong\n\
             \x20 foo\t\"bar\"\tbaz,bork"
        );
    }

    #[test]
    fn test_encode_from_2d_array() {
        let input = [["foo", "bar", "baz"], ["wibble", "wobble", "spong"]];

        let csv = Encoder::new(TableFormat::csv()).encode(&input);
        assert_eq!(csv, "foo,bar,baz\r\nwibble,wobble,spong");

        let tsv = Encoder::new(TableFormat::tsv()).encode(&input);
        assert_eq!(tsv, "foo\tbar\tbaz\nwibble\twobble\tspong");
    }

    #[test]
    fn test_encode_no_trailing_row_separator() {
        let input = grid(&[&["a"], &["b"]]);

        let encoder = Encoder::new(TableFormat::csv());
        assert_eq!(encoder.encode(&input), "a\r\nb");
    }

    #[test]
    fn test_encode_empty_grid() {
        let encoder = Encoder::new(TableFormat::csv());
        assert_eq!(encoder.encode::<Vec<String>, String>(&[]), "");
    }

    #[test]
    fn test_encode_non_rectangular_rows_pass_through() {
        // Write trusts the caller's grid: each row keeps its own width
        let input = grid(&[&["a", "b"], &["c"]]);

        let encoder = Encoder::new(TableFormat::csv());
        assert_eq!(encoder.encode(&input), "a,b\r\nc");
    }

    #[test]
    fn test_round_trip_csv() {
        let original = grid(&[
            &["foo", "bar", "baz"],
            &["A big, \"big, test!", "    wobble   ", ""],
        ]);

        let encoder = Encoder::new(TableFormat::csv());
        let decoder = Decoder::new(TableFormat::csv());
        let rendered = encoder.encode(&original);
        let parsed = decoder.decode(&rendered).unwrap();

        assert_eq!(parsed, original);
    }

    #[test]
    fn test_round_trip_tsv_without_quote_characters() {
        let original = grid(&[&["foo", "  wobble  "], &["baz,bork", "spong"]]);

        let encoder = Encoder::new(TableFormat::tsv());
        let decoder = Decoder::new(TableFormat::tsv());
        let rendered = encoder.encode(&original);
        let parsed = decoder.decode(&rendered).unwrap();

        assert_eq!(parsed, original);
    }

    #[test]
    fn test_round_trip_preserves_whitespace() {
        let original = grid(&[&["    wobble   ", "x"]]);

        let encoder = Encoder::new(TableFormat::csv());
        let decoder = Decoder::new(TableFormat::csv());
        let rendered = encoder.encode(&original);

        // Whitespace alone does not trigger quoting, and nothing trims it
        assert_eq!(rendered, "    wobble   ,x");
        assert_eq!(decoder.decode(&rendered).unwrap(), original);
    }

    #[test]
    fn test_quote_escaping_symmetry() {
        let cell = "A big, \"big, test!\"";
        let input = grid(&[&[cell]]);

        let encoder = Encoder::new(TableFormat::csv());
        let rendered = encoder.encode(&input);
        assert_eq!(rendered, "\"A big, \"\"big, test!\"\"\"");

        let decoder = Decoder::new(TableFormat::csv());
        let parsed = decoder.decode(&rendered).unwrap();
        assert_eq!(parsed[0][0], cell);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.csv");

        let original = grid(&[&["foo", "baz,bork"], &["\"bar\"", "spong"]]);

        let encoder = Encoder::new(TableFormat::csv());
        encoder.encode_to_file(&original, &path).unwrap();

        let decoder = Decoder::new(TableFormat::csv());
        let parsed = decoder.decode_from_file(&path).unwrap();

        assert_eq!(parsed, original);
    }

    #[test]
    fn test_encode_to_writer() {
        let input = grid(&[&["a", "b"], &["c", "d"]]);

        let encoder = Encoder::new(TableFormat::csv());
        let mut buffer = Vec::new();
        encoder.encode_to_writer(&input, &mut buffer).unwrap();

        assert_eq!(buffer, b"a,b\r\nc,d");
    }
}
