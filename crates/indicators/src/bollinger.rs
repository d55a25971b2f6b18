use news_alpha_core::series::{rolling_mean, rolling_std};
use serde::{Deserialize, Serialize};

/// Upper, middle, and lower Bollinger bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerBands {
    pub upper: Vec<f64>,
    pub middle: Vec<f64>,
    pub lower: Vec<f64>,
}

/// Bollinger bands: SMA over `period` plus/minus `std_dev` rolling sample
/// standard deviations.
#[must_use]
pub fn bollinger_bands(values: &[f64], period: usize, std_dev: f64) -> BollingerBands {
    let middle = rolling_mean(values, period);
    let spread = rolling_std(values, period);

    let upper = middle.iter().zip(&spread).map(|(m, s)| m + s * std_dev).collect();
    let lower = middle.iter().zip(&spread).map(|(m, s)| m - s * std_dev).collect();

    BollingerBands {
        upper,
        middle,
        lower,
    }
}
