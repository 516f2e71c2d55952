//! Column names of the county table, and typed extraction helpers.

use anyhow::{Context, Result, ensure};
use polars::{frame::DataFrame, prelude::DataType};

// Raw input columns.
pub const STATE: &str = "state";
pub const REGION: &str = "region";
pub const COUNTY: &str = "county";
pub const FIPS: &str = "fips";
pub const POPULATION: &str = "population";
pub const MEDIAN_INCOME: &str = "median_income";
pub const PCT_COLLEGE: &str = "pct_college";
pub const PCT_WHITE: &str = "pct_white";
pub const MEDIAN_AGE: &str = "median_age";
pub const PCT_OVER_65: &str = "pct_over_65";

// Derived at load time.
pub const DIVERSITY: &str = "diversity";
pub const AFFLUENT: &str = "affluent";
pub const GROWTH_DEMO_SCORE: &str = "growth_demo_score";
pub const STATE_ABBR: &str = "state_abbr";
pub const COUNTY_FIPS: &str = "county_fips";
pub const STATE_FIPS: &str = "state_fips";

// Derived per parameter set.
pub const OPPORTUNITY_SCORE: &str = "opportunity_score";
pub const HIGH_OPPORTUNITY: &str = "high_opportunity";

/// Columns every county file must carry.
pub const REQUIRED: [&str; 8] = [
    STATE,
    REGION,
    POPULATION,
    MEDIAN_INCOME,
    PCT_COLLEGE,
    PCT_WHITE,
    MEDIAN_AGE,
    PCT_OVER_65,
];

/// Numeric percentage columns expected in 0..=100.
pub(crate) const PERCENTAGES: [&str; 3] = [PCT_COLLEGE, PCT_WHITE, PCT_OVER_65];

/// Read a column as finite `f64` values, failing on nulls, NaN, infinities
/// or unparsable entries.
pub(crate) fn f64_values(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let column = df.column(name)
        .with_context(|| format!("[dataset::columns] Missing column {name:?}"))?
        .cast(&DataType::Float64)
        .with_context(|| format!("[dataset::columns] Column {name:?} is not numeric"))?;

    column.f64()?.into_iter().enumerate()
        .map(|(row, value)| value.filter(|v| v.is_finite()).with_context(|| {
            format!("[dataset::columns] Missing or unparsable value in column {name:?} at row {}", row + 1)
        }))
        .collect()
}

/// Read a column as non-null `i64` values. Fractional values fail like
/// unparsable ones rather than being truncated.
pub(crate) fn i64_values(df: &DataFrame, name: &str) -> Result<Vec<i64>> {
    f64_values(df, name)?.into_iter().enumerate()
        .map(|(row, value)| {
            ensure!(value.fract() == 0.0,
                "[dataset::columns] Non-integer value {value} in column {name:?} at row {}", row + 1);
            Ok(value as i64)
        })
        .collect()
}

/// Read a column as nullable text values.
pub(crate) fn str_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df.column(name)
        .with_context(|| format!("[dataset::columns] Missing column {name:?}"))?
        .cast(&DataType::String)
        .with_context(|| format!("[dataset::columns] Column {name:?} cannot be read as text"))?;

    Ok(column.str()?.into_iter()
        .map(|value| value.map(str::to_string))
        .collect())
}

/// Read a boolean column; nulls read as `false`.
pub(crate) fn bool_values(df: &DataFrame, name: &str) -> Result<Vec<bool>> {
    let column = df.column(name)
        .with_context(|| format!("[dataset::columns] Missing column {name:?}"))?;

    Ok(column.bool()
        .with_context(|| format!("[dataset::columns] Column {name:?} is not boolean"))?
        .into_iter()
        .map(|value| value.unwrap_or(false))
        .collect())
}

#[cfg(test)]
mod tests {
    use polars::prelude::*;

    use super::*;

    #[test]
    fn non_finite_values_are_rejected() {
        let df = df!("median_income" => [50_000.0, f64::NAN]).unwrap();
        let err = f64_values(&df, "median_income").unwrap_err();
        assert!(format!("{err:#}").contains("row 2"));

        let df = df!("median_age" => [f64::INFINITY]).unwrap();
        assert!(f64_values(&df, "median_age").is_err());
    }

    #[test]
    fn fractional_integers_are_rejected() {
        let df = df!("population" => [1000.0, 1000.9]).unwrap();
        let err = i64_values(&df, "population").unwrap_err();
        assert!(format!("{err:#}").contains("row 2"));

        let df = df!("population" => [1000.0, 25.0]).unwrap();
        assert_eq!(i64_values(&df, "population").unwrap(), vec![1000, 25]);

        let df = df!("population" => [7i64, 0]).unwrap();
        assert_eq!(i64_values(&df, "population").unwrap(), vec![7, 0]);
    }
}
