//! tabcodec CLI
//!
//! Convert and validate delimiter-separated tabular text.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tabcodec::{Decoder, Encoder, TableFormat};

#[derive(Parser, Debug)]
#[command(name = "tabcodec")]
#[command(version)]
#[command(about = "Tabular text (CSV/TSV) conversion tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Dialect {
    /// Comma-delimited, quote-escaped, CRLF rows
    Csv,
    /// Tab-delimited, no quoting, LF rows
    Tsv,
}

impl Dialect {
    fn format(self, tolerate_empty_rows: bool) -> TableFormat {
        let format = match self {
            Dialect::Csv => TableFormat::csv(),
            Dialect::Tsv => TableFormat::tsv(),
        };
        format.tolerate_empty_rows(tolerate_empty_rows)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert between tabular dialects
    Convert {
        /// Input dialect
        #[arg(long, value_enum)]
        from: Dialect,

        /// Output dialect
        #[arg(long, value_enum)]
        to: Dialect,

        /// Input file (default: stdin)
        input: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Drop blank input rows instead of failing on them
        #[arg(long)]
        tolerate_empty_rows: bool,
    },

    /// Validate a file against a dialect and report its shape
    Check {
        /// Dialect to validate against
        #[arg(long, value_enum, default_value = "csv")]
        format: Dialect,

        /// Input file (default: stdin)
        input: Option<PathBuf>,

        /// Drop blank input rows instead of failing on them
        #[arg(long)]
        tolerate_empty_rows: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            from,
            to,
            input,
            output,
            tolerate_empty_rows,
        } => {
            convert(from, to, input, output, tolerate_empty_rows)?;
        }
        Commands::Check {
            format,
            input,
            tolerate_empty_rows,
            verbose,
        } => {
            check(format, input, tolerate_empty_rows, verbose)?;
        }
    }

    Ok(())
}

fn read_input(input: Option<PathBuf>) -> Result<String> {
    if let Some(path) = input {
        fs::read_to_string(&path).with_context(|| format!("Failed to read: {}", path.display()))
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}

fn convert(
    from: Dialect,
    to: Dialect,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    tolerate_empty_rows: bool,
) -> Result<()> {
    let text = read_input(input)?;

    let decoder = Decoder::new(from.format(tolerate_empty_rows));
    let grid = decoder.decode(&text)?;

    let encoder = Encoder::new(to.format(false));
    let rendered = encoder.encode(&grid);

    if let Some(output_path) = output {
        fs::write(&output_path, rendered)
            .with_context(|| format!("Failed to write: {}", output_path.display()))?;
    } else {
        print!("{}", rendered);
    }

    Ok(())
}

fn check(
    format: Dialect,
    input: Option<PathBuf>,
    tolerate_empty_rows: bool,
    verbose: bool,
) -> Result<()> {
    let text = read_input(input)?;

    let decoder = Decoder::new(format.format(tolerate_empty_rows));
    let grid = decoder.decode(&text)?;

    if verbose {
        for (i, row) in grid.iter().enumerate() {
            println!("row {}: {} fields", i + 1, row.len());
        }
    }

    let columns = grid.first().map(|row| row.len()).unwrap_or(0);
    println!("{} rows, {} columns", grid.len(), columns);

    Ok(())
}
