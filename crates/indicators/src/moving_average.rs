use news_alpha_core::series::rolling_mean;

/// Simple moving average over `period` values.
#[must_use]
pub fn sma(values: &[f64], period: usize) -> Vec<f64> {
    rolling_mean(values, period)
}

/// Exponential moving average with `alpha = 2 / (period + 1)`, seeded with
/// the first value (no warm-up NaNs).
#[must_use]
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    let alpha = 2.0 / (period as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;

    for &value in values {
        let next = match prev {
            Some(p) => alpha * value + (1.0 - alpha) * p,
            None => value,
        };
        out.push(next);
        prev = Some(next);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sma_averages_trailing_window() {
        let out = sma(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
        assert!(out[0].is_nan() && out[1].is_nan());
        assert_eq!(&out[2..], &[2.0, 3.0, 4.0]);
    }

    #[test]
    fn ema_is_seeded_with_first_value() {
        // alpha = 2 / 4 = 0.5
        let out = ema(&[10.0, 20.0, 30.0], 3);
        assert_eq!(out, vec![10.0, 15.0, 22.5]);
    }

    #[test]
    fn ema_of_empty_is_empty() {
        assert!(ema(&[], 12).is_empty());
    }
}
