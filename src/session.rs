use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    dataset::PreparedDataset,
    objective::{OpportunityScorer, ScoringParams},
    view::{ScoredDataset, ViewFilter},
};

/// Record set the factor maxima are taken over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationScope {
    /// Score the full dataset, then filter. Scores stay put while the view changes.
    #[default]
    Dataset,
    /// Score only the counties in the selected regions / state.
    View,
}

/// One analyst's working state: parameters, current view and display settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub params: ScoringParams,
    pub filter: ViewFilter,
    pub scope: NormalizationScope,
    /// Row count of the ranked table.
    pub top_n: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            params: ScoringParams::default(),
            filter: ViewFilter::default(),
            scope: NormalizationScope::default(),
            top_n: 25,
        }
    }
}

impl Session {
    /// Load a session from a JSON file. Missing fields take their defaults.
    pub fn read_from_json(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("[session] Failed to read {}", path.display()))?;
        let session = Self::from_json_str(&text)
            .with_context(|| format!("[session] Failed to parse {}", path.display()))?;
        info!("[session] loaded session from {}", path.display());
        Ok(session)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Score `dataset` and apply the view filter, honoring the normalization scope.
    pub fn evaluate(&self, dataset: &PreparedDataset) -> Result<ScoredDataset> {
        let scorer = OpportunityScorer::new(self.params);

        let view = match self.scope {
            NormalizationScope::Dataset => scorer.score(dataset)?.filter(&self.filter)?,
            NormalizationScope::View => {
                let mask = self.filter.geographic_mask(dataset.data())?;
                let subset = dataset.subset(&mask)?;
                debug!("[session] scoring {} of {} counties in view", subset.len(), dataset.len());
                scorer.score(&subset)?.filter_by_score(&self.filter)?
            }
        };

        debug!("[session] view holds {} counties", view.len());
        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dataset::columns,
        objective::{Thresholds, Weights},
    };

    fn dataset() -> PreparedDataset {
        PreparedDataset::from_csv_str(
            "state,region,population,median_income,pct_college,pct_white,median_age,pct_over_65\n\
             California,West,1000,100000,40,50,36,14\n\
             Oregon,West,1000,50000,35,80,40,18\n\
             Ohio,Midwest,1000,40000,30,80,39,17\n",
        ).unwrap()
    }

    fn income_only() -> ScoringParams {
        ScoringParams::new(Weights::new(1.0, 0.0, 0.0, 0.0, 0.0), Thresholds::default())
    }

    #[test]
    fn default_session() {
        let session = Session::default();
        assert_eq!(session.scope, NormalizationScope::Dataset);
        assert_eq!(session.top_n, 25);
        assert!(session.filter.is_empty());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let session = Session::from_json_str(r#"{
            "scope": "view",
            "filter": { "regions": ["Midwest"], "affluence": "non-affluent" }
        }"#).unwrap();
        assert_eq!(session.scope, NormalizationScope::View);
        assert_eq!(session.filter.regions, vec!["Midwest"]);
        assert_eq!(session.filter.affluence, crate::view::AffluenceFilter::NonAffluentOnly);
        assert_eq!(session.params, ScoringParams::default());
        assert_eq!(session.top_n, 25);
    }

    #[test]
    fn json_round_trip() {
        let mut session = Session::default();
        session.params.weights.income = 50.0;
        session.filter.state = Some("OH".into());
        session.top_n = 5;
        let json = session.to_json_string().unwrap();
        assert_eq!(Session::from_json_str(&json).unwrap(), session);
    }

    #[test]
    fn unknown_scope_is_rejected() {
        assert!(Session::from_json_str(r#"{"scope": "galaxy"}"#).is_err());
    }

    #[test]
    fn scope_changes_normalization() {
        let dataset = dataset();
        let mut session = Session {
            params: income_only(),
            filter: ViewFilter { regions: vec!["Midwest".into()], ..Default::default() },
            ..Default::default()
        };

        // Relative to the national maximum of 100000.
        let view = session.evaluate(&dataset).unwrap();
        assert_eq!(view.scores().unwrap(), vec![40.0]);

        // Relative to the Midwest alone.
        session.scope = NormalizationScope::View;
        let view = session.evaluate(&dataset).unwrap();
        assert_eq!(view.scores().unwrap(), vec![100.0]);
    }

    #[test]
    fn view_scope_applies_score_filters_after_rescoring() {
        let session = Session {
            params: income_only(),
            filter: ViewFilter { regions: vec!["West".into()], min_score: 60.0, ..Default::default() },
            scope: NormalizationScope::View,
            ..Default::default()
        };
        let view = session.evaluate(&dataset()).unwrap();
        let states = columns::str_values(view.data(), columns::STATE).unwrap();
        assert_eq!(states, vec![Some("California".to_string())]);
    }

    #[test]
    fn view_scope_keeps_full_table_affluence() {
        let dataset = dataset();
        let session = Session {
            filter: ViewFilter { regions: vec!["Midwest".into()], ..Default::default() },
            scope: NormalizationScope::View,
            ..Default::default()
        };
        let view = session.evaluate(&dataset).unwrap();
        assert_eq!(view.affluence_cutoff(), dataset.affluence_cutoff());
        assert_eq!(columns::bool_values(view.data(), columns::AFFLUENT).unwrap(), vec![false]);
    }

    #[test]
    fn reads_session_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, r#"{"top_n": 10}"#).unwrap();
        assert_eq!(Session::read_from_json(&path).unwrap().top_n, 10);
        assert!(Session::read_from_json(&dir.path().join("missing.json")).is_err());
    }
}
