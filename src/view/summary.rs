use anyhow::Result;
use serde::Serialize;

use crate::{common, dataset::columns, view::ScoredDataset};

/// Headline metrics of a view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ViewSummary {
    pub counties: usize,
    pub total_population: i64,
    /// Mean opportunity score; `None` for an empty view.
    pub mean_score: Option<f64>,
    pub affluent_counties: usize,
    pub high_opportunity_counties: usize,
}

impl ScoredDataset {
    pub fn summary(&self) -> Result<ViewSummary> {
        let population = columns::i64_values(self.data(), columns::POPULATION)?;
        let affluent = columns::bool_values(self.data(), columns::AFFLUENT)?;

        Ok(ViewSummary {
            counties: self.len(),
            total_population: population.iter().sum(),
            mean_score: common::mean(&self.scores()?),
            affluent_counties: affluent.iter().filter(|&&a| a).count(),
            high_opportunity_counties: self.high_opportunity()?.iter().filter(|&&h| h).count(),
        })
    }
}
