use std::{io::Write, path::Path};

use anyhow::{Result, ensure};
use polars::{frame::DataFrame, prelude::NamedFrom, series::Series};

use crate::{dataset::columns, io, objective::ScoringParams};

/// A prepared county table with `opportunity_score` and `high_opportunity`
/// added for one parameter set.
#[derive(Debug, Clone)]
pub struct ScoredDataset {
    data: DataFrame,
    params: ScoringParams,
    affluence_cutoff: f64,
}

impl ScoredDataset {
    pub(crate) fn new(data: DataFrame, params: ScoringParams, affluence_cutoff: f64) -> Self {
        Self { data, params, affluence_cutoff }
    }

    /// The scored table, in source row order.
    #[inline] pub fn data(&self) -> &DataFrame { &self.data }

    /// Parameters the scores were computed with.
    #[inline] pub fn params(&self) -> &ScoringParams { &self.params }

    /// Affluence cutoff of the full dataset this table was derived from.
    #[inline] pub fn affluence_cutoff(&self) -> f64 { self.affluence_cutoff }

    #[inline] pub fn len(&self) -> usize { self.data.height() }

    #[inline] pub fn is_empty(&self) -> bool { self.data.height() == 0 }

    /// Opportunity scores in row order.
    pub fn scores(&self) -> Result<Vec<f64>> {
        columns::f64_values(&self.data, columns::OPPORTUNITY_SCORE)
    }

    /// High-opportunity flags in row order.
    pub fn high_opportunity(&self) -> Result<Vec<bool>> {
        columns::bool_values(&self.data, columns::HIGH_OPPORTUNITY)
    }

    /// Rows where `mask` is true, keeping parameters and cutoff.
    pub(crate) fn retain(&self, mask: &[bool]) -> Result<Self> {
        ensure!(mask.len() == self.len(),
            "[view] Mask has {} entries, expected {}", mask.len(), self.len());
        let mask = Series::new("mask".into(), mask);
        let data = self.data.filter(mask.bool()?)?;
        Ok(Self { data, params: self.params, affluence_cutoff: self.affluence_cutoff })
    }

    /// Export the full table (every input and derived column, row order
    /// preserved) to a CSV file.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        io::csv::write_csv(&mut self.data.clone(), path)
    }

    /// Export the full table as CSV to any writer.
    pub fn write_csv_to<W: Write>(&self, writer: W) -> Result<()> {
        io::csv::write_csv_to(&mut self.data.clone(), writer)
    }

    /// Export the full table as a JSON array of row objects.
    pub fn write_json_to<W: Write>(&self, writer: W) -> Result<()> {
        io::json::write_json_to(&mut self.data.clone(), writer)
    }

    /// Export the full table as a CSV string.
    pub fn to_csv_string(&self) -> Result<String> {
        io::csv::write_csv_string(&mut self.data.clone())
    }
}
