use serde::{Deserialize, Serialize};

use crate::moving_average::ema;

/// MACD line, its signal line, and their difference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Macd {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

/// Moving Average Convergence Divergence from non-adjusted EMAs.
#[must_use]
pub fn macd(values: &[f64], fast: usize, slow: usize, signal: usize) -> Macd {
    let fast_ema = ema(values, fast);
    let slow_ema = ema(values, slow);
    let line: Vec<f64> = fast_ema.iter().zip(&slow_ema).map(|(f, s)| f - s).collect();
    let signal_line = ema(&line, signal);
    let histogram = line.iter().zip(&signal_line).map(|(m, s)| m - s).collect();

    Macd {
        macd: line,
        signal: signal_line,
        histogram,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_prices_give_flat_macd() {
        let out = macd(&[42.0; 30], 12, 26, 9);
        assert!(out.macd.iter().all(|v| v.abs() < 1e-12));
        assert!(out.signal.iter().all(|v| v.abs() < 1e-12));
        assert!(out.histogram.iter().all(|v| v.abs() < 1e-12));
    }

    #[test]
    fn uptrend_has_positive_macd() {
        let prices: Vec<f64> = (1..=40).map(f64::from).collect();
        let out = macd(&prices, 12, 26, 9);
        assert_eq!(out.macd[0], 0.0);
        assert!(out.macd[39] > 0.0);
        assert!(out.histogram[39].is_finite());
    }

    #[test]
    fn histogram_is_line_minus_signal() {
        let prices = [10.0, 11.0, 9.5, 12.0, 12.5, 11.0];
        let out = macd(&prices, 2, 4, 3);
        for i in 0..prices.len() {
            assert!((out.histogram[i] - (out.macd[i] - out.signal[i])).abs() < 1e-12);
        }
    }
}
