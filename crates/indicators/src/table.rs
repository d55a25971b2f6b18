use anyhow::{anyhow, Context, Result};
use news_alpha_core::{IndicatorConfig, PriceBar, SeriesTable};
use serde::{Deserialize, Serialize};

use crate::bollinger::bollinger_bands;
use crate::macd::macd;
use crate::moving_average::{ema, sma};
use crate::rsi::rsi;

/// An indicator that can be added to a price table.
///
/// Moving averages carry their period in the name, e.g. `SMA_50`, `EMA_12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Indicator {
    Sma(usize),
    Ema(usize),
    Rsi,
    Macd,
    Bollinger,
}

impl std::str::FromStr for Indicator {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let upper = s.trim().to_uppercase();
        match upper.as_str() {
            "RSI" => return Ok(Indicator::Rsi),
            "MACD" => return Ok(Indicator::Macd),
            "BB" | "BOLLINGER" => return Ok(Indicator::Bollinger),
            _ => {}
        }

        let (kind, period) = upper.split_once('_').ok_or_else(|| unknown(s))?;
        let period: usize = period
            .parse()
            .with_context(|| format!("Invalid period in indicator '{s}'"))?;
        if period == 0 {
            return Err(anyhow!("Indicator period must be positive: '{}'", s));
        }
        match kind {
            "SMA" => Ok(Indicator::Sma(period)),
            "EMA" => Ok(Indicator::Ema(period)),
            _ => Err(unknown(s)),
        }
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Indicator::Sma(p) => write!(f, "SMA_{p}"),
            Indicator::Ema(p) => write!(f, "EMA_{p}"),
            Indicator::Rsi => write!(f, "RSI"),
            Indicator::Macd => write!(f, "MACD"),
            Indicator::Bollinger => write!(f, "BB"),
        }
    }
}

fn unknown(s: &str) -> anyhow::Error {
    anyhow!(
        "Unknown indicator: '{}'. Valid indicators: SMA_<n>, EMA_<n>, RSI, MACD, BB",
        s
    )
}

/// Parses indicator names, rejecting unknown ones.
///
/// # Errors
///
/// Returns an error naming the first unknown or malformed indicator.
pub fn parse_indicators<S: AsRef<str>>(names: &[S]) -> Result<Vec<Indicator>> {
    names.iter().map(|n| n.as_ref().parse()).collect()
}

/// Computes the requested indicators over the bars' closes, in request order.
///
/// MACD adds `MACD`, `MACD_signal`, `MACD_hist`; Bollinger adds `BB_upper`,
/// `BB_middle`, `BB_lower`.
#[must_use]
pub fn add_technical_indicators(
    bars: &[PriceBar],
    indicators: &[Indicator],
    config: &IndicatorConfig,
) -> SeriesTable {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let mut table = SeriesTable::new();

    for indicator in indicators {
        match *indicator {
            Indicator::Sma(period) => table.insert(indicator.to_string(), sma(&closes, period)),
            Indicator::Ema(period) => table.insert(indicator.to_string(), ema(&closes, period)),
            Indicator::Rsi => table.insert("RSI", rsi(&closes, config.rsi_period)),
            Indicator::Macd => {
                let m = macd(&closes, config.macd_fast, config.macd_slow, config.macd_signal);
                table.insert("MACD", m.macd);
                table.insert("MACD_signal", m.signal);
                table.insert("MACD_hist", m.histogram);
            }
            Indicator::Bollinger => {
                let bb = bollinger_bands(
                    &closes,
                    config.bollinger_period,
                    config.bollinger_std_dev,
                );
                table.insert("BB_upper", bb.upper);
                table.insert("BB_middle", bb.middle);
                table.insert("BB_lower", bb.lower);
            }
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bars(n: usize) -> Vec<PriceBar> {
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        (0..n)
            .map(|i| {
                let close = 100.0 + i as f64;
                PriceBar::new(
                    start.checked_add_days(chrono::Days::new(i as u64)),
                    "QQQ",
                    close,
                    close,
                    close,
                    close,
                    10,
                )
            })
            .collect()
    }

    #[test]
    fn indicator_names_parse() {
        assert_eq!("SMA_50".parse::<Indicator>().unwrap(), Indicator::Sma(50));
        assert_eq!("ema_26".parse::<Indicator>().unwrap(), Indicator::Ema(26));
        assert_eq!("Bollinger".parse::<Indicator>().unwrap(), Indicator::Bollinger);
        assert_eq!("BB".parse::<Indicator>().unwrap(), Indicator::Bollinger);
        assert!("SMA_x".parse::<Indicator>().is_err());
        assert!("SMA_0".parse::<Indicator>().is_err());
        assert!("VWAP".parse::<Indicator>().is_err());
        assert!("WMA_10".parse::<Indicator>().is_err());
    }

    #[test]
    fn display_round_trips_names() {
        for name in ["SMA_200", "EMA_12", "RSI", "MACD", "BB"] {
            assert_eq!(name.parse::<Indicator>().unwrap().to_string(), name);
        }
    }

    #[test]
    fn default_set_produces_expected_columns() {
        let config = IndicatorConfig::default();
        let indicators = parse_indicators(&config.enabled).unwrap();
        let table = add_technical_indicators(&bars(60), &indicators, &config);

        assert_eq!(
            table.names().collect::<Vec<_>>(),
            vec!["SMA_50", "RSI", "MACD", "MACD_signal", "MACD_hist"]
        );
        let sma50 = table.get("SMA_50").unwrap();
        assert!(sma50[48].is_nan());
        // closes 100..=149 -> mean 124.5
        assert!((sma50[49] - 124.5).abs() < 1e-9);
        assert_eq!(sma50.len(), 60);
    }

    #[test]
    fn bollinger_adds_three_bands() {
        let config = IndicatorConfig::default();
        let table = add_technical_indicators(&bars(25), &[Indicator::Bollinger], &config);
        assert_eq!(
            table.names().collect::<Vec<_>>(),
            vec!["BB_upper", "BB_middle", "BB_lower"]
        );
        assert!(!table.get("BB_middle").unwrap()[19].is_nan());
    }
}
