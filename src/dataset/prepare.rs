use std::path::Path;

use anyhow::{Context, Result, bail, ensure};
use log::{debug, info, warn};
use polars::{frame::DataFrame, prelude::*, series::Series};

use crate::{
    common,
    dataset::columns::{self, *},
    io,
    types::{GeoId, GeoType, normalize_state_name, state_name_to_abbr},
};

/// Quantile of `median_income` at and above which a county counts as affluent.
const AFFLUENCE_QUANTILE: f64 = 0.75;

/// County table with every parameter-independent field derived.
///
/// Built once per load and never mutated afterwards; scoring produces new
/// tables layered over it. The affluence cutoff is fixed here, over the full
/// table, and carried unchanged into any subset.
#[derive(Debug, Clone)]
pub struct PreparedDataset {
    data: DataFrame,
    affluence_cutoff: f64,
    checksum: Option<String>,
}

impl PreparedDataset {
    /// Load and prepare a county CSV file.
    pub fn read_from_csv(path: &Path) -> Result<Self> {
        let (bytes, checksum) = common::read_with_sha256(path)?;
        let dataset = Self::from_csv_bytes(&bytes, checksum)
            .with_context(|| format!("[dataset::prepare] Failed to load {}", path.display()))?;
        info!("[dataset] loaded {} counties from {}", dataset.len(), path.display());
        Ok(dataset)
    }

    /// Prepare a county table from CSV text (for tests and embedding).
    pub fn from_csv_str(csv: &str) -> Result<Self> {
        Self::from_csv_bytes(csv.as_bytes(), common::sha256_bytes(csv.as_bytes()))
    }

    pub(crate) fn from_csv_bytes(bytes: &[u8], checksum: String) -> Result<Self> {
        let raw = io::csv::read_csv_bytes(bytes)?;
        let mut dataset = Self::from_dataframe(raw)?;
        dataset.checksum = Some(checksum);
        Ok(dataset)
    }

    /// Derive the prepared table from a raw county DataFrame.
    /// Fails if a required column is absent or holds null / unparsable values.
    pub fn from_dataframe(raw: DataFrame) -> Result<Self> {
        let missing: Vec<&str> = columns::REQUIRED.iter().copied()
            .filter(|name| raw.column(name).is_err())
            .collect();
        if !missing.is_empty() {
            bail!("[dataset::prepare] Missing required column(s): {}", missing.join(", "));
        }
        ensure!(raw.height() > 0, "[dataset::prepare] County table contains no records");

        let population = columns::i64_values(&raw, POPULATION)?;
        let median_income = columns::f64_values(&raw, MEDIAN_INCOME)?;
        let pct_college = columns::f64_values(&raw, PCT_COLLEGE)?;
        let pct_white = columns::f64_values(&raw, PCT_WHITE)?;
        let median_age = columns::f64_values(&raw, MEDIAN_AGE)?;
        let pct_over_65 = columns::f64_values(&raw, PCT_OVER_65)?;

        if let Some(row) = population.iter().position(|&p| p < 0) {
            bail!("[dataset::prepare] Negative population at row {}", row + 1);
        }
        if let Some(row) = median_income.iter().position(|&v| v < 0.0) {
            bail!("[dataset::prepare] Negative median_income at row {}", row + 1);
        }
        for (name, values) in columns::PERCENTAGES.iter().zip([&pct_college, &pct_white, &pct_over_65]) {
            let out_of_range = values.iter().filter(|&&v| !(0.0..=100.0).contains(&v)).count();
            if out_of_range > 0 {
                warn!("[dataset] {out_of_range} value(s) of {name} fall outside 0..=100");
            }
        }

        let states = columns::str_values(&raw, STATE)?.into_iter().enumerate()
            .map(|(row, state)| state
                .map(|s| normalize_state_name(&s))
                .filter(|s| !s.is_empty())
                .with_context(|| format!("[dataset::prepare] Missing state name at row {}", row + 1)))
            .collect::<Result<Vec<_>>>()?;
        let regions = columns::str_values(&raw, REGION)?;

        let diversity: Vec<f64> = pct_white.iter().map(|&w| 100.0 - w).collect();

        let affluence_cutoff = common::quantile(&median_income, AFFLUENCE_QUANTILE)
            .context("[dataset::prepare] Cannot compute affluence cutoff")?;
        let affluent: Vec<bool> = median_income.iter().map(|&v| v >= affluence_cutoff).collect();

        let growth_demo: Vec<f64> = median_age.iter().zip(&pct_over_65)
            .map(|(&age, &over_65)| growth_demo_score(age, over_65))
            .collect();

        let state_abbr: Vec<Option<&'static str>> = states.iter()
            .map(|state| {
                let abbr = state_name_to_abbr(state);
                if abbr.is_none() { debug!("[dataset] no abbreviation for state {state:?}"); }
                abbr
            })
            .collect();

        let county_ids: Vec<Option<GeoId>> = if raw.column(FIPS).is_ok() {
            columns::str_values(&raw, FIPS)?.iter()
                .map(|code| code.as_deref().and_then(|c| GeoId::new(GeoType::County, c)))
                .collect()
        } else {
            vec![None; raw.height()]
        };
        let county_fips: Vec<Option<String>> = county_ids.iter()
            .map(|id| id.as_ref().map(|id| id.id().to_string()))
            .collect();
        let state_fips: Vec<Option<String>> = county_ids.iter()
            .map(|id| id.as_ref().map(|id| id.to_parent(GeoType::State).id().to_string()))
            .collect();

        let mut data = raw;
        for column in [
            Column::new(STATE.into(), states),
            Column::new(REGION.into(), regions),
            Column::new(POPULATION.into(), population),
            Column::new(MEDIAN_INCOME.into(), median_income),
            Column::new(PCT_COLLEGE.into(), pct_college),
            Column::new(PCT_WHITE.into(), pct_white),
            Column::new(MEDIAN_AGE.into(), median_age),
            Column::new(PCT_OVER_65.into(), pct_over_65),
            Column::new(DIVERSITY.into(), diversity),
            Column::new(AFFLUENT.into(), affluent),
            Column::new(GROWTH_DEMO_SCORE.into(), growth_demo),
            Column::new(STATE_ABBR.into(), state_abbr),
            Column::new(COUNTY_FIPS.into(), county_fips),
            Column::new(STATE_FIPS.into(), state_fips),
        ] {
            let name = column.name().clone();
            data.replace_or_add(name.clone(), column.take_materialized_series())
                .with_context(|| format!("[dataset::prepare] Failed to set column {name}"))?;
        }

        debug!("[dataset] affluence cutoff {affluence_cutoff}");

        Ok(Self { data, affluence_cutoff, checksum: None })
    }

    /// The prepared table.
    #[inline] pub fn data(&self) -> &DataFrame { &self.data }

    /// Number of county records.
    #[inline] pub fn len(&self) -> usize { self.data.height() }

    #[inline] pub fn is_empty(&self) -> bool { self.data.height() == 0 }

    /// Median income at the 75th percentile of the full loaded table.
    #[inline] pub fn affluence_cutoff(&self) -> f64 { self.affluence_cutoff }

    /// Hex SHA-256 of the source bytes, when loaded from CSV.
    #[inline] pub fn checksum(&self) -> Option<&str> { self.checksum.as_deref() }

    /// Distinct non-null regions, in order of first appearance.
    pub fn regions(&self) -> Result<Vec<String>> {
        Ok(distinct(columns::str_values(&self.data, REGION)?.into_iter().flatten()))
    }

    /// Distinct state names, in order of first appearance.
    pub fn states(&self) -> Result<Vec<String>> {
        Ok(distinct(columns::str_values(&self.data, STATE)?.into_iter().flatten()))
    }

    /// Rows where `mask` is true. Derived fields, including `affluent`, are
    /// kept as computed over the full table.
    pub fn subset(&self, mask: &[bool]) -> Result<Self> {
        ensure!(mask.len() == self.len(),
            "[dataset::prepare] Mask has {} entries, expected {}", mask.len(), self.len());

        let mask = Series::new("mask".into(), mask);
        let data = self.data.filter(mask.bool()?)?;

        Ok(Self { data, affluence_cutoff: self.affluence_cutoff, checksum: self.checksum.clone() })
    }

    pub(crate) fn f64_column(&self, name: &str) -> Result<Vec<f64>> {
        columns::f64_values(&self.data, name)
    }
}

/// Youth proxy: up to 50 points from median age, up to 50 from share under 65.
pub(crate) fn growth_demo_score(median_age: f64, pct_over_65: f64) -> f64 {
    let age_points = (50.0 - median_age).clamp(0.0, 20.0) / 20.0 * 50.0;
    let senior_points = (100.0 - pct_over_65) / 100.0 * 50.0;
    common::round1(age_points + senior_points)
}

fn distinct(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    values.filter(|v| seen.insert(v.clone())).collect()
}
