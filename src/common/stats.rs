//! Small numeric helpers shared by preparation, scoring and aggregation.

/// Round to one decimal place, ties to even.
#[inline]
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Largest value, ignoring NaNs. `None` for an empty slice.
pub(crate) fn max_value(values: &[f64]) -> Option<f64> {
    values.iter().copied()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
}

/// Quantile `q` in [0, 1] of `values` with linear interpolation between
/// order statistics (position `q * (n - 1)` in the ascending sort).
pub(crate) fn quantile(values: &[f64], q: f64) -> Option<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() { return None; }
    sorted.sort_by(f64::total_cmp);
    Some(quantile_sorted(&sorted, q))
}

/// Same as [`quantile`] on values already sorted ascending and NaN-free.
pub(crate) fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    debug_assert!(!sorted.is_empty(), "quantile of empty slice");
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Arithmetic mean. `None` for an empty slice.
pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() { None } else { Some(values.iter().sum::<f64>() / values.len() as f64) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_half_to_even() {
        assert_eq!(round1(72.349), 72.3);
        assert_eq!(round1(72.35000001), 72.4);
        assert_eq!(round1(0.25), 0.2);
        assert_eq!(round1(0.75), 0.8);
        assert_eq!(round1(100.0), 100.0);
    }

    #[test]
    fn quantile_interpolates() {
        let values = [10.0, 40.0, 20.0, 30.0];
        // position 0.75 * 3 = 2.25 -> 30 + 0.25 * (40 - 30)
        assert_eq!(quantile(&values, 0.75), Some(32.5));
        assert_eq!(quantile(&values, 0.0), Some(10.0));
        assert_eq!(quantile(&values, 1.0), Some(40.0));
        assert_eq!(quantile(&values, 0.5), Some(25.0));
    }

    #[test]
    fn quantile_of_empty_is_none() {
        assert_eq!(quantile(&[], 0.75), None);
        assert_eq!(quantile(&[f64::NAN], 0.75), None);
    }

    #[test]
    fn max_and_mean() {
        assert_eq!(max_value(&[3.0, f64::NAN, 7.5, -1.0]), Some(7.5));
        assert_eq!(max_value(&[]), None);
        assert_eq!(mean(&[1.0, 2.0, 6.0]), Some(3.0));
        assert_eq!(mean(&[]), None);
    }
}
