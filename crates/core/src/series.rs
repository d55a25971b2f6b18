//! Numeric series helpers shared by the metric and indicator libraries.
//!
//! Series are plain `f64` vectors aligned with the bars they were computed
//! from. NaN marks an undefined position (warm-up window, first return).

use serde::{Deserialize, Serialize};

/// Arithmetic mean, NaN for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator), NaN below two values.
#[must_use]
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    (ss / (values.len() - 1) as f64).sqrt()
}

/// Applies `f` over every full trailing window.
///
/// Positions before the first full window, and windows holding any NaN,
/// yield NaN.
pub fn rolling<F>(values: &[f64], window: usize, f: F) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64,
{
    let mut out = vec![f64::NAN; values.len()];
    if window == 0 {
        return out;
    }
    for end in window..=values.len() {
        let slice = &values[end - window..end];
        if slice.iter().any(|v| v.is_nan()) {
            continue;
        }
        out[end - 1] = f(slice);
    }
    out
}

/// Rolling arithmetic mean over `window` values.
#[must_use]
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    rolling(values, window, mean)
}

/// Rolling sample standard deviation over `window` values.
#[must_use]
pub fn rolling_std(values: &[f64], window: usize) -> Vec<f64> {
    rolling(values, window, sample_std)
}

/// Percentage change between consecutive values; the first entry is NaN.
#[must_use]
pub fn pct_change(values: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    if values.is_empty() {
        return out;
    }
    out.push(f64::NAN);
    for pair in values.windows(2) {
        out.push((pair[1] - pair[0]) / pair[0]);
    }
    out
}

/// A named derived column, one value per input bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesColumn {
    pub name: String,
    pub values: Vec<f64>,
}

/// Ordered set of derived columns sharing the row index of a price table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesTable {
    pub columns: Vec<SeriesColumn>,
}

impl SeriesTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column, replacing an existing one with the same name.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<f64>) {
        let name = name.into();
        if let Some(existing) = self.columns.iter_mut().find(|c| c.name == name) {
            existing.values = values;
        } else {
            self.columns.push(SeriesColumn { name, values });
        }
    }

    /// Looks up a column by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Column names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Merges another table's columns into this one.
    pub fn extend(&mut self, other: SeriesTable) {
        for column in other.columns {
            self.insert(column.name, column.values);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_is_nan() {
        assert!(mean(&[]).is_nan());
        assert!((mean(&[1.0, 2.0, 3.0]) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn sample_std_uses_n_minus_one() {
        // deviations 1, 0, 1 -> ss = 2, / 2 -> 1
        assert!((sample_std(&[1.0, 2.0, 3.0]) - 1.0).abs() < 1e-12);
        assert!(sample_std(&[5.0]).is_nan());
    }

    #[test]
    fn rolling_mean_warms_up_with_nan() {
        let out = rolling_mean(&[1.0, 2.0, 3.0, 4.0], 2);
        assert!(out[0].is_nan());
        assert_eq!(&out[1..], &[1.5, 2.5, 3.5]);
    }

    #[test]
    fn rolling_skips_windows_with_nan() {
        let out = rolling_mean(&[f64::NAN, 2.0, 4.0, 6.0], 2);
        assert!(out[0].is_nan());
        assert!(out[1].is_nan());
        assert_eq!(&out[2..], &[3.0, 5.0]);
    }

    #[test]
    fn rolling_longer_than_input_is_all_nan() {
        let out = rolling_std(&[1.0, 2.0], 5);
        assert!(out.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn pct_change_first_value_undefined() {
        let out = pct_change(&[100.0, 110.0, 99.0]);
        assert!(out[0].is_nan());
        assert!((out[1] - 0.1).abs() < 1e-12);
        assert!((out[2] + 0.1).abs() < 1e-12);
        assert!(pct_change(&[]).is_empty());
    }

    #[test]
    fn table_insert_replaces_same_name() {
        let mut table = SeriesTable::new();
        table.insert("RSI", vec![1.0]);
        table.insert("SMA_50", vec![2.0]);
        table.insert("RSI", vec![3.0]);
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["RSI", "SMA_50"]);
        assert_eq!(table.get("RSI"), Some(&[3.0][..]));
        assert!(table.get("MACD").is_none());
    }
}
