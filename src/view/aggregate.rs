use std::{collections::BTreeMap, io::Write};

use anyhow::Result;
use polars::{frame::DataFrame, prelude::Column};
use serde::Serialize;

use crate::{common, dataset::columns, io, types::state_name_to_abbr, view::ScoredDataset};

/// Mean opportunity score of one state's counties in a view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StateScore {
    pub state: String,
    /// USPS abbreviation; `None` for names outside the lookup table.
    pub state_abbr: Option<String>,
    pub counties: usize,
    pub mean_score: f64,
}

/// Distribution of opportunity scores within one region (box-plot data).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegionStats {
    pub region: String,
    pub counties: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
}

impl ScoredDataset {
    /// Scores grouped by a text column, keys sorted; null keys dropped.
    fn scores_by(&self, key: &str) -> Result<BTreeMap<String, Vec<f64>>> {
        let keys = columns::str_values(self.data(), key)?;
        let scores = self.scores()?;

        let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
        for (key, score) in keys.into_iter().zip(scores) {
            if let Some(key) = key {
                groups.entry(key).or_default().push(score);
            }
        }
        Ok(groups)
    }

    /// Per-state mean score, sorted by state name.
    pub fn state_scores(&self) -> Result<Vec<StateScore>> {
        Ok(self.scores_by(columns::STATE)?.into_iter()
            .filter_map(|(state, scores)| {
                let mean_score = common::mean(&scores)?;
                Some(StateScore {
                    state_abbr: state_name_to_abbr(&state).map(str::to_string),
                    counties: scores.len(),
                    state,
                    mean_score,
                })
            })
            .collect())
    }

    /// Per-state mean scores as a table (`state, state_abbr, counties, opportunity_score`).
    pub fn state_scores_frame(&self) -> Result<DataFrame> {
        let states = self.state_scores()?;
        Ok(DataFrame::new(vec![
            Column::new(columns::STATE.into(), states.iter().map(|s| s.state.clone()).collect::<Vec<_>>()),
            Column::new(columns::STATE_ABBR.into(), states.iter().map(|s| s.state_abbr.clone()).collect::<Vec<_>>()),
            Column::new("counties".into(), states.iter().map(|s| s.counties as u64).collect::<Vec<_>>()),
            Column::new(columns::OPPORTUNITY_SCORE.into(), states.iter().map(|s| s.mean_score).collect::<Vec<_>>()),
        ])?)
    }

    /// Score distribution per region, sorted by region name. Counties without
    /// a region are left out.
    pub fn region_distribution(&self) -> Result<Vec<RegionStats>> {
        Ok(self.scores_by(columns::REGION)?.into_iter()
            .filter_map(|(region, mut scores)| {
                let mean = common::mean(&scores)?;
                scores.sort_by(f64::total_cmp);
                Some(RegionStats {
                    region,
                    counties: scores.len(),
                    min: scores[0],
                    q1: common::quantile_sorted(&scores, 0.25),
                    median: common::quantile_sorted(&scores, 0.5),
                    q3: common::quantile_sorted(&scores, 0.75),
                    max: scores[scores.len() - 1],
                    mean,
                })
            })
            .collect())
    }

    /// Write the per-state table as CSV.
    pub fn write_state_scores_csv<W: Write>(&self, writer: W) -> Result<()> {
        io::csv::write_csv_to(&mut self.state_scores_frame()?, writer)
    }

    /// Write the per-state table as a JSON array.
    pub fn write_state_scores_json<W: Write>(&self, writer: W) -> Result<()> {
        io::json::write_json_to(&mut self.state_scores_frame()?, writer)
    }
}
