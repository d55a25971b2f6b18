//! Pearson and Spearman correlation between daily sentiment and returns.
//!
//! Both p-values are two-sided and come from Student's t with n - 2 degrees
//! of freedom: t = r * sqrt((n - 2) / (1 - r^2)).

use news_alpha_core::{AlignedObservation, CorrelationResult};
use statrs::distribution::{ContinuousCDF, StudentsT};
use tracing::debug;

/// Calculates ranks for a slice of values, handling ties with average rank.
///
/// # Arguments
/// * `values` - Slice of values to rank
///
/// # Returns
/// Vector of ranks (1-based, with ties averaged)
#[must_use]
pub fn calculate_ranks(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut indexed: Vec<(usize, f64)> = values.iter().copied().enumerate().collect();
    indexed.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        let mut j = i + 1;
        while j < n && indexed[j].1 == indexed[i].1 {
            j += 1;
        }

        // positions i..j hold ranks (i+1)..=j
        let avg_rank = (i + 1 + j) as f64 / 2.0;
        for item in &indexed[i..j] {
            ranks[item.0] = avg_rank;
        }

        i = j;
    }

    ranks
}

/// Pearson correlation coefficient and two-sided p-value.
///
/// Returns NaN for both when the inputs differ in length, hold fewer than
/// two points, or either series is constant.
#[must_use]
pub fn pearson(x: &[f64], y: &[f64]) -> (f64, f64) {
    let r = pearson_r(x, y);
    (r, correlation_p_value(r, x.len()))
}

/// Spearman rank correlation and two-sided p-value.
#[must_use]
pub fn spearman(x: &[f64], y: &[f64]) -> (f64, f64) {
    if x.len() != y.len() {
        return (f64::NAN, f64::NAN);
    }
    pearson(&calculate_ranks(x), &calculate_ranks(y))
}

fn pearson_r(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.len() < 2 {
        return f64::NAN;
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;

    for (xi, yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return f64::NAN;
    }

    (covariance / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0)
}

/// Two-sided p-value for H0: no correlation.
///
/// Two points always lie on a line, so n = 2 gives p = 1. A perfect
/// correlation with n > 2 gives p = 0.
fn correlation_p_value(r: f64, n: usize) -> f64 {
    if r.is_nan() || n < 2 {
        return f64::NAN;
    }
    if n == 2 {
        return 1.0;
    }

    let df = n as f64 - 2.0;
    let denom = 1.0 - r * r;
    if denom <= 0.0 {
        return 0.0;
    }
    let t_stat = r * (df / denom).sqrt();

    match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => (2.0 * dist.sf(t_stat.abs())).clamp(0.0, 1.0),
        Err(_) => f64::NAN,
    }
}

/// Correlates `mean_sentiment` with `pct_change` across observations.
///
/// Only complete pairs are used. With fewer than two pairs every statistic
/// is NaN, while `n_observations` still reports the real pair count.
#[must_use]
pub fn calculate_correlation(observations: &[AlignedObservation]) -> CorrelationResult {
    let (sentiment, returns): (Vec<f64>, Vec<f64>) = observations
        .iter()
        .filter_map(AlignedObservation::complete_pair)
        .unzip();

    let n = sentiment.len();
    if n < 2 {
        debug!(
            complete_pairs = n,
            "too few complete pairs, correlation undefined"
        );
        return CorrelationResult::undefined(n);
    }

    let (pearson_r, pearson_p) = pearson(&sentiment, &returns);
    let (spearman_r, spearman_p) = spearman(&sentiment, &returns);

    CorrelationResult {
        pearson_r,
        pearson_p,
        spearman_r,
        spearman_p,
        n_observations: n,
    }
}
