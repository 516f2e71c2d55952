use std::fmt;

use crate::{common, dataset::columns};

/// One of the five normalized signals combined into the opportunity score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Factor {
    Income,
    Education,
    Diversity,
    Size,
    Age,
}

impl Factor {
    pub const ALL: [Factor; 5] = [
        Factor::Income,
        Factor::Education,
        Factor::Diversity,
        Factor::Size,
        Factor::Age,
    ];

    /// Column of the prepared table this factor is derived from.
    pub fn column(&self) -> &'static str {
        match self {
            Factor::Income => columns::MEDIAN_INCOME,
            Factor::Education => columns::PCT_COLLEGE,
            Factor::Diversity => columns::DIVERSITY,
            Factor::Size => columns::POPULATION,
            Factor::Age => columns::MEDIAN_AGE,
        }
    }

    /// Short name for display purposes.
    pub fn short_name(&self) -> &'static str {
        match self {
            Factor::Income => "Income",
            Factor::Education => "Education",
            Factor::Diversity => "Diversity",
            Factor::Size => "PopulationSize",
            Factor::Age => "YoungerAge",
        }
    }

    /// Normalize raw column values to [0, 1].
    ///
    /// Income, education and diversity are relative to the largest value in
    /// `values`; size is relative on a `ln(1 + x)` scale; age is absolute.
    /// A zero or non-finite denominator yields 0 for every row.
    pub(crate) fn normalize(&self, values: &[f64]) -> Vec<f64> {
        match self {
            Factor::Income | Factor::Education | Factor::Diversity => relative_to_max(values, |v| v),
            Factor::Size => relative_to_max(values, f64::ln_1p),
            Factor::Age => values.iter()
                .map(|&age| (50.0 - age).clamp(0.0, 20.0) / 20.0)
                .collect(),
        }
    }
}

fn relative_to_max(values: &[f64], scale: impl Fn(f64) -> f64) -> Vec<f64> {
    match common::max_value(values).map(&scale) {
        Some(denominator) if denominator != 0.0 && denominator.is_finite() => values.iter()
            .map(|&v| (scale(v) / denominator).clamp(0.0, 1.0))
            .collect(),
        _ => vec![0.0; values.len()],
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(column='{}')", self.short_name(), self.column())
    }
}
