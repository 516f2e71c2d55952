use std::fmt;

use anyhow::{Result, ensure};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::objective::Factor;

/// Relative importance of each factor. Conventionally 0–100 each; only the
/// ratios matter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub income: f64,
    pub education: f64,
    pub diversity: f64,
    pub size: f64,
    pub age: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self { income: 35.0, education: 25.0, diversity: 15.0, size: 15.0, age: 10.0 }
    }
}

impl Weights {
    pub fn new(income: f64, education: f64, diversity: f64, size: f64, age: f64) -> Self {
        Self { income, education, diversity, size, age }
    }

    /// Weight attached to `factor`.
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Income => self.income,
            Factor::Education => self.education,
            Factor::Diversity => self.diversity,
            Factor::Size => self.size,
            Factor::Age => self.age,
        }
    }

    pub fn set(&mut self, factor: Factor, weight: f64) {
        match factor {
            Factor::Income => self.income = weight,
            Factor::Education => self.education = weight,
            Factor::Diversity => self.diversity = weight,
            Factor::Size => self.size = weight,
            Factor::Age => self.age = weight,
        }
    }

    /// Sum of all five weights.
    pub fn total(&self) -> f64 {
        Factor::ALL.iter().map(|&factor| self.get(factor)).sum()
    }
}

/// Independent cutoffs for the high-opportunity classification.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Minimum median income (currency units).
    pub income_threshold: f64,
    /// Minimum growth-demographic score (0–100).
    pub growth_demo_min: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { income_threshold: 60_000.0, growth_demo_min: 50.0 }
    }
}

/// Full parameter set accepted by the scorer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringParams {
    pub weights: Weights,
    pub thresholds: Thresholds,
}

impl ScoringParams {
    pub fn new(weights: Weights, thresholds: Thresholds) -> Self {
        Self { weights, thresholds }
    }

    /// Check the parameter set at the acceptance boundary.
    ///
    /// Negative or non-finite weights, a negative income threshold and a
    /// growth minimum outside 0–100 are rejected. All-zero weights are
    /// accepted; they score every county 0.
    pub fn validate(&self) -> Result<()> {
        for factor in Factor::ALL {
            let weight = self.weights.get(factor);
            ensure!(weight.is_finite() && weight >= 0.0,
                "[objective::params] Weight for {} must be a non-negative number, got {}",
                factor.short_name(), weight);
        }

        let Thresholds { income_threshold, growth_demo_min } = self.thresholds;
        ensure!(income_threshold.is_finite() && income_threshold >= 0.0,
            "[objective::params] income_threshold must be non-negative, got {}", income_threshold);
        ensure!((0.0..=100.0).contains(&growth_demo_min),
            "[objective::params] growth_demo_min must be within 0..=100, got {}", growth_demo_min);

        if self.weights.total() == 0.0 {
            warn!("[objective] all weights are zero; every opportunity score will be 0");
        }
        Ok(())
    }
}

impl fmt::Display for ScoringParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ScoringParams {{")?;
        for factor in Factor::ALL {
            writeln!(f, "  {:>14}: weight={}", factor.short_name(), self.weights.get(factor))?;
        }
        writeln!(f, "  income_threshold={}", self.thresholds.income_threshold)?;
        writeln!(f, "  growth_demo_min={}", self.thresholds.growth_demo_min)?;
        write!(f, "}}")
    }
}
