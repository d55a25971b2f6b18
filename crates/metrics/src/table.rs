use anyhow::{anyhow, Result};
use news_alpha_core::{MetricsConfig, PriceBar, SeriesTable};
use serde::{Deserialize, Serialize};

use crate::returns::daily_returns;
use crate::risk::{drawdown, rolling_sharpe, rolling_volatility};

/// A metric column that can be added to a price table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Returns,
    Volatility,
    Sharpe,
    Drawdown,
}

impl std::str::FromStr for Metric {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "returns" | "daily_returns" => Ok(Metric::Returns),
            "volatility" => Ok(Metric::Volatility),
            "sharpe" | "sharpe_ratio" => Ok(Metric::Sharpe),
            "drawdown" | "max_drawdown" => Ok(Metric::Drawdown),
            _ => Err(anyhow!(
                "Unknown metric: '{}'. Valid metrics: returns, volatility, sharpe, drawdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Metric::Returns => write!(f, "returns"),
            Metric::Volatility => write!(f, "volatility"),
            Metric::Sharpe => write!(f, "sharpe"),
            Metric::Drawdown => write!(f, "drawdown"),
        }
    }
}

/// Parses metric names, rejecting unknown ones.
///
/// # Errors
///
/// Returns an error naming the first unknown metric.
pub fn parse_metrics<S: AsRef<str>>(names: &[S]) -> Result<Vec<Metric>> {
    names.iter().map(|n| n.as_ref().parse()).collect()
}

/// Computes the requested metrics over the bars' closes.
///
/// Columns: `Daily_Return`, `Volatility_<window>d`, `Sharpe_Ratio`, `Drawdown`,
/// in that fixed order regardless of the order requested.
#[must_use]
pub fn add_financial_metrics(
    bars: &[PriceBar],
    metrics: &[Metric],
    config: &MetricsConfig,
) -> SeriesTable {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let mut table = SeriesTable::new();

    if metrics.contains(&Metric::Returns) {
        table.insert("Daily_Return", daily_returns(&closes));
    }
    if metrics.contains(&Metric::Volatility) {
        table.insert(
            format!("Volatility_{}d", config.volatility_window),
            rolling_volatility(&closes, config.volatility_window),
        );
    }
    if metrics.contains(&Metric::Sharpe) {
        table.insert(
            "Sharpe_Ratio",
            rolling_sharpe(&closes, config.risk_free_rate, config.sharpe_window),
        );
    }
    if metrics.contains(&Metric::Drawdown) {
        table.insert("Drawdown", drawdown(&closes));
    }

    table
}
