use std::io::Write;

use anyhow::{Context, Result};
use polars::prelude::*;

use crate::{dataset::columns, io, view::ScoredDataset};

/// Columns shown in the ranked table, in display order, when present.
const RANKED_COLUMNS: [&str; 9] = [
    columns::STATE,
    columns::COUNTY,
    columns::OPPORTUNITY_SCORE,
    columns::MEDIAN_INCOME,
    columns::PCT_COLLEGE,
    columns::DIVERSITY,
    columns::MEDIAN_AGE,
    columns::POPULATION,
    columns::AFFLUENT,
];

impl ScoredDataset {
    /// The `n` highest-scoring counties with a 1-based `rank` column. Ties keep
    /// source order.
    pub fn top(&self, n: usize) -> Result<DataFrame> {
        let sorted = self.data().sort(
            [columns::OPPORTUNITY_SCORE],
            SortMultipleOptions::default()
                .with_order_descending(true)
                .with_maintain_order(true),
        ).context("[view::rank] Failed to sort by opportunity_score")?;

        let head = sorted.head(Some(n));
        let present: Vec<&str> = RANKED_COLUMNS.iter().copied()
            .filter(|name| head.column(name).is_ok())
            .collect();
        let head = head.select(present)?;

        let rank: Vec<u32> = (1..=head.height() as u32).collect();
        let mut ranked = vec![Column::new("rank".into(), rank)];
        ranked.extend(head.get_columns().iter().cloned());
        Ok(DataFrame::new(ranked)?)
    }

    /// Write the ranked table as CSV.
    pub fn write_top_csv<W: Write>(&self, n: usize, writer: W) -> Result<()> {
        io::csv::write_csv_to(&mut self.top(n)?, writer)
    }

    /// Write the ranked table as a JSON array.
    pub fn write_top_json<W: Write>(&self, n: usize, writer: W) -> Result<()> {
        io::json::write_json_to(&mut self.top(n)?, writer)
    }
}
