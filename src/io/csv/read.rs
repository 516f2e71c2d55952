//! CSV reading operations.

use std::{io::Cursor, sync::Arc};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerReader, prelude::{CsvReadOptions, CsvReader, DataType, Field, Schema, SchemaRef}};

use crate::dataset::columns;

/// Read a county DataFrame from CSV bytes.
pub(crate) fn read_csv_bytes(bytes: &[u8]) -> Result<DataFrame> {
    let cursor = Cursor::new(bytes);

    // Force text columns to be read as strings to preserve leading zeros
    let options = CsvReadOptions::default()
        .with_has_header(true)
        .with_schema_overwrite(Some(county_csv_schema()));

    CsvReader::new(cursor)
        .with_options(options)
        .finish()
        .context("[io::csv::read] Failed to read CSV from bytes")
}

/// Schema overwrite for county CSV files.
fn county_csv_schema() -> SchemaRef {
    Arc::new(Schema::from_iter([
        Field::new(columns::STATE.into(), DataType::String),
        Field::new(columns::REGION.into(), DataType::String),
        Field::new(columns::COUNTY.into(), DataType::String),
        Field::new(columns::FIPS.into(), DataType::String),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_leading_zeros_in_fips() {
        let df = read_csv_bytes(b"state,fips,population\nAlabama,01001,55869\n").unwrap();
        let fips = df.column("fips").unwrap();
        assert_eq!(fips.dtype(), &DataType::String);
        assert_eq!(fips.str().unwrap().get(0), Some("01001"));
    }

    #[test]
    fn empty_region_is_null() {
        let df = read_csv_bytes(b"state,region,population\nAlaska,,731545\nOhio,Midwest,11689100\n").unwrap();
        let region = df.column("region").unwrap().str().unwrap().clone();
        assert_eq!(region.get(0), None);
        assert_eq!(region.get(1), Some("Midwest"));
    }
}
