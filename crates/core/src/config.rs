use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data: DataConfig,
    pub analysis: AnalysisConfig,
    pub indicators: IndicatorConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// News CSV to analyze
    pub news_path: Option<PathBuf>,
    /// Directory holding one price CSV per symbol
    pub price_dir: Option<PathBuf>,
    /// File name inside `price_dir`; `{symbol}` is replaced by the ticker
    pub price_file_pattern: String,
    /// Symbols for batch loads
    pub symbols: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Restrict news and prices to this ticker
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// Indicators to compute, e.g. `SMA_50`, `RSI`, `MACD`, `BB`
    pub enabled: Vec<String>,
    pub rsi_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub bollinger_period: usize,
    pub bollinger_std_dev: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Metrics to compute: `returns`, `volatility`, `sharpe`, `drawdown`
    pub enabled: Vec<String>,
    pub volatility_window: usize,
    /// Annual risk-free rate
    pub risk_free_rate: f64,
    pub sharpe_window: usize,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            news_path: None,
            price_dir: None,
            price_file_pattern: "{symbol}_historical_data.csv".to_string(),
            symbols: Vec::new(),
        }
    }
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            enabled: vec!["SMA_50".to_string(), "RSI".to_string(), "MACD".to_string()],
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            bollinger_period: 20,
            bollinger_std_dev: 2.0,
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: vec!["returns".to_string(), "volatility".to_string()],
            volatility_window: 30,
            risk_free_rate: 0.02,
            sharpe_window: 252,
        }
    }
}
