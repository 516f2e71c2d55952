//! CSV writing operations.

use std::{fs::File, io::{BufWriter, Write}, path::Path};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerWriter, prelude::CsvWriter};

/// Write a DataFrame as CSV to any writer (e.g. stdout).
pub(crate) fn write_csv_to<W: Write>(df: &mut DataFrame, writer: W) -> Result<()> {
    CsvWriter::new(writer)
        .include_header(true)
        .finish(df)
        .context("[io::csv::write] Failed to write CSV")
}

/// Write a DataFrame to a CSV file, creating or truncating it.
pub(crate) fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("[io::csv::write] Cannot create {}", path.display()))?;
    write_csv_to(df, BufWriter::new(file))
        .with_context(|| format!("[io::csv::write] Cannot export {}", path.display()))
}

/// Render a DataFrame as CSV text.
pub(crate) fn write_csv_string(df: &mut DataFrame) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv_to(df, &mut buffer)?;
    String::from_utf8(buffer).context("[io::csv::write] CSV output is not valid UTF-8")
}
