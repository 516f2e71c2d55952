use std::io::Write;

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerWriter, prelude::JsonWriter};

/// Writes a DataFrame as a JSON array of row objects.
pub(crate) fn write_json_to<W: Write>(df: &mut DataFrame, writer: W) -> Result<()> {
    JsonWriter::new(writer)
        .with_json_format(polars::io::json::JsonFormat::Json)
        .finish(df)
        .context("[io::json] Failed to write JSON")
}
