//! Opportunity scoring: a weighted average of normalized factors plus a
//! two-threshold classification.
//!
//! This is a pure function of a prepared dataset and a parameter set. The
//! factor maxima are taken over whatever dataset is passed in, so scoring a
//! subset scores it relative to itself.

use anyhow::{Context, Result};
use log::{debug, warn};
use polars::prelude::{NamedFrom, Series};

use crate::{
    common,
    dataset::{PreparedDataset, columns},
    objective::{Factor, ScoringParams},
    view::ScoredDataset,
};

/// Scores prepared county tables for a fixed parameter set.
///
/// In the simplest form, this represents:
///
/// ```text
/// score = 100 * sum_i weight_i * factor_i / sum_i weight_i
/// ```
///
/// and falls back to 0 when the weights do not sum to a positive number.
#[derive(Clone, Debug, Default)]
pub struct OpportunityScorer {
    params: ScoringParams,
}

impl OpportunityScorer {
    pub fn new(params: ScoringParams) -> Self { Self { params } }

    #[inline] pub fn params(&self) -> &ScoringParams { &self.params }

    /// Normalized factor values for every row, indexed like `Factor::ALL`.
    pub(crate) fn factors(&self, dataset: &PreparedDataset) -> Result<Vec<Vec<f64>>> {
        Factor::ALL.iter()
            .map(|factor| {
                let values = dataset.f64_column(factor.column())
                    .with_context(|| format!("[objective] Cannot read factor {factor}"))?;
                Ok(factor.normalize(&values))
            })
            .collect()
    }

    /// Composite 0–100 score per row, rounded to one decimal.
    pub(crate) fn composite(&self, factors: &[Vec<f64>], rows: usize) -> Vec<f64> {
        let weights = &self.params.weights;
        let total_weight = weights.total();

        if !(total_weight > 0.0 && total_weight.is_finite()) {
            warn!("[objective] total weight is {total_weight}; scoring every county 0");
            return vec![0.0; rows];
        }

        (0..rows)
            .map(|row| {
                let weighted_sum: f64 = Factor::ALL.iter().zip(factors)
                    .map(|(&factor, values)| values[row] * weights.get(factor))
                    .sum();
                let score = common::round1(weighted_sum / total_weight * 100.0);
                if score.is_finite() { score } else { 0.0 }
            })
            .collect()
    }

    /// High-opportunity flag per row: both thresholds met, boundaries inclusive.
    pub(crate) fn classify(&self, median_income: &[f64], growth_demo: &[f64]) -> Vec<bool> {
        let thresholds = &self.params.thresholds;
        median_income.iter().zip(growth_demo)
            .map(|(&income, &growth)| {
                income >= thresholds.income_threshold && growth >= thresholds.growth_demo_min
            })
            .collect()
    }

    /// Score `dataset`, returning a new table with `opportunity_score` and
    /// `high_opportunity` added. The input is left untouched.
    pub fn score(&self, dataset: &PreparedDataset) -> Result<ScoredDataset> {
        let rows = dataset.len();
        let factors = self.factors(dataset)?;
        let scores = self.composite(&factors, rows);
        let high = self.classify(
            &dataset.f64_column(columns::MEDIAN_INCOME)?,
            &dataset.f64_column(columns::GROWTH_DEMO_SCORE)?,
        );

        let mut data = dataset.data().clone();
        data.replace_or_add(columns::OPPORTUNITY_SCORE.into(), Series::new(columns::OPPORTUNITY_SCORE.into(), scores))
            .context("[objective] Failed to add opportunity_score")?;
        data.replace_or_add(columns::HIGH_OPPORTUNITY.into(), Series::new(columns::HIGH_OPPORTUNITY.into(), high))
            .context("[objective] Failed to add high_opportunity")?;

        debug!("[objective] scored {rows} counties with {}", self.params);

        Ok(ScoredDataset::new(data, self.params, dataset.affluence_cutoff()))
    }
}

impl PreparedDataset {
    /// Score this dataset with `params`. Shorthand for [`OpportunityScorer::score`].
    pub fn score(&self, params: &ScoringParams) -> Result<ScoredDataset> {
        OpportunityScorer::new(*params).score(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::{Thresholds, Weights};

    fn dataset() -> PreparedDataset {
        PreparedDataset::from_csv_str(
            "state,region,population,median_income,pct_college,pct_white,median_age,pct_over_65\n\
             Colorado,West,9999,100000,50,60,30,10\n\
             Kansas,Midwest,99,50000,25,80,40,20\n\
             Maine,Northeast,0,25000,0,100,55,30\n",
        ).unwrap()
    }

    fn params(weights: Weights) -> ScoringParams {
        ScoringParams::new(weights, Thresholds::default())
    }

    #[test]
    fn record_at_every_maximum_scores_100() {
        let scorer = OpportunityScorer::new(params(Weights::new(35.0, 25.0, 15.0, 15.0, 10.0)));
        let dataset = dataset();
        let factors = scorer.factors(&dataset).unwrap();
        let scores = scorer.composite(&factors, dataset.len());
        assert_eq!(scores[0], 100.0);
    }

    #[test]
    fn composite_is_weighted_average() {
        // Only the income factor counts: 0.5 for the second row.
        let scorer = OpportunityScorer::new(params(Weights::new(10.0, 0.0, 0.0, 0.0, 0.0)));
        let dataset = dataset();
        let scores = scorer.composite(&scorer.factors(&dataset).unwrap(), dataset.len());
        assert_eq!(scores, vec![100.0, 50.0, 25.0]);

        // Income and age equally: (0.5 + 0.5) / 2 for the second row.
        let scorer = OpportunityScorer::new(params(Weights::new(1.0, 0.0, 0.0, 0.0, 1.0)));
        let scores = scorer.composite(&scorer.factors(&dataset).unwrap(), dataset.len());
        assert_eq!(scores, vec![100.0, 50.0, 12.5]);
    }

    #[test]
    fn zero_weights_score_zero() {
        let scorer = OpportunityScorer::new(params(Weights::new(0.0, 0.0, 0.0, 0.0, 0.0)));
        let dataset = dataset();
        let scores = scorer.composite(&scorer.factors(&dataset).unwrap(), dataset.len());
        assert_eq!(scores, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn cancelling_weights_score_zero() {
        let scorer = OpportunityScorer::new(params(Weights::new(10.0, -10.0, 0.0, 0.0, 0.0)));
        let dataset = dataset();
        let scores = scorer.composite(&scorer.factors(&dataset).unwrap(), dataset.len());
        assert_eq!(scores, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn classification_includes_boundaries() {
        let scorer = OpportunityScorer::new(ScoringParams::new(
            Weights::default(),
            Thresholds { income_threshold: 50_000.0, growth_demo_min: 60.0 },
        ));
        let flags = scorer.classify(&[50_000.0, 49_999.0, 80_000.0], &[60.0, 90.0, 59.9]);
        assert_eq!(flags, vec![true, false, false]);
    }

    #[test]
    fn scoring_leaves_input_untouched() {
        let dataset = dataset();
        let before = dataset.data().clone();
        let scored = dataset.score(&ScoringParams::default()).unwrap();
        assert!(dataset.data().equals_missing(&before));
        assert!(dataset.data().column(columns::OPPORTUNITY_SCORE).is_err());
        assert_eq!(scored.len(), 3);
    }
}
