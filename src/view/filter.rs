use anyhow::Result;
use polars::frame::DataFrame;
use serde::{Deserialize, Serialize};

use crate::{
    dataset::columns,
    types::{normalize_state_name, state_abbr_to_name},
    view::ScoredDataset,
};

/// Which counties to show by affluence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AffluenceFilter {
    #[default]
    All,
    #[serde(rename = "affluent", alias = "affluent-only")]
    AffluentOnly,
    #[serde(rename = "non-affluent", alias = "non-affluent-only")]
    NonAffluentOnly,
}

impl AffluenceFilter {
    fn admits(&self, affluent: bool) -> bool {
        match self {
            AffluenceFilter::All => true,
            AffluenceFilter::AffluentOnly => affluent,
            AffluenceFilter::NonAffluentOnly => !affluent,
        }
    }
}

/// Analyst's current view over the scored table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewFilter {
    /// Regions to keep; empty keeps every county, including those without a region.
    pub regions: Vec<String>,
    /// Drill-down state, by full name or USPS abbreviation.
    pub state: Option<String>,
    /// Minimum opportunity score (inclusive).
    pub min_score: f64,
    pub affluence: AffluenceFilter,
    /// Keep only high-opportunity counties.
    pub high_opportunity_only: bool,
}

impl ViewFilter {
    /// True if the filter keeps every row.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
            && self.state.is_none()
            && self.min_score <= 0.0
            && self.affluence == AffluenceFilter::All
            && !self.high_opportunity_only
    }

    /// Full state name the drill-down refers to.
    pub fn state_name(&self) -> Option<String> {
        self.state.as_deref().map(|state| {
            state_abbr_to_name(state)
                .map(str::to_string)
                .unwrap_or_else(|| normalize_state_name(state))
        })
    }

    /// Row mask for the parameter-independent part of the filter (regions and state).
    pub(crate) fn geographic_mask(&self, data: &DataFrame) -> Result<Vec<bool>> {
        let mut mask = vec![true; data.height()];

        if !self.regions.is_empty() {
            let regions = columns::str_values(data, columns::REGION)?;
            for (keep, region) in mask.iter_mut().zip(&regions) {
                *keep &= region.as_deref()
                    .is_some_and(|r| self.regions.iter().any(|wanted| wanted.trim() == r.trim()));
            }
        }

        if let Some(state) = self.state_name() {
            let states = columns::str_values(data, columns::STATE)?;
            for (keep, name) in mask.iter_mut().zip(&states) {
                *keep &= name.as_deref().is_some_and(|n| n.eq_ignore_ascii_case(&state));
            }
        }

        Ok(mask)
    }

    /// Row mask for the score-dependent part of the filter.
    pub(crate) fn score_mask(&self, data: &DataFrame) -> Result<Vec<bool>> {
        let scores = columns::f64_values(data, columns::OPPORTUNITY_SCORE)?;
        let affluent = columns::bool_values(data, columns::AFFLUENT)?;
        let high = columns::bool_values(data, columns::HIGH_OPPORTUNITY)?;

        Ok((0..data.height())
            .map(|row| {
                scores[row] >= self.min_score
                    && self.affluence.admits(affluent[row])
                    && (!self.high_opportunity_only || high[row])
            })
            .collect())
    }
}

impl ScoredDataset {
    /// Rows of this table passing `filter`. Scores are not recomputed.
    pub fn filter(&self, filter: &ViewFilter) -> Result<ScoredDataset> {
        let geographic = filter.geographic_mask(self.data())?;
        let score = filter.score_mask(self.data())?;
        let mask: Vec<bool> = geographic.iter().zip(&score).map(|(&a, &b)| a && b).collect();
        self.retain(&mask)
    }

    /// Rows passing only the score-dependent part of `filter`.
    pub(crate) fn filter_by_score(&self, filter: &ViewFilter) -> Result<ScoredDataset> {
        let mask = filter.score_mask(self.data())?;
        self.retain(&mask)
    }
}
