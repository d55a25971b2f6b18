//! Daily OHLCV CSV loader.
//!
//! Expected columns: `Date, Open, High, Low, Close, Volume`. Extra columns
//! such as `Adj Close`, `Dividends`, or `Stock Splits` are ignored.

use std::path::Path;

use news_alpha_core::PriceBar;
use serde::Deserialize;
use tracing::{info, warn};

use crate::dates::parse_date;
use crate::error::{ensure_exists, DataError, Result};

#[derive(Debug, Deserialize)]
struct RawPriceRow {
    #[serde(rename = "Date", alias = "date")]
    date: String,
    #[serde(rename = "Open", alias = "open")]
    open: String,
    #[serde(rename = "High", alias = "high")]
    high: String,
    #[serde(rename = "Low", alias = "low")]
    low: String,
    #[serde(rename = "Close", alias = "close")]
    close: String,
    #[serde(rename = "Volume", alias = "volume")]
    volume: String,
}

/// Loads daily bars for `symbol`, sorted ascending by date.
///
/// Malformed dates become `None` and sort last. Malformed prices are fatal
/// because the whole series would be unreliable.
///
/// # Errors
///
/// Returns `FileNotFound` if the file is missing, `Csv` for structural CSV
/// problems, and `Parse` for a non-numeric price or volume.
pub fn load_prices(path: impl AsRef<Path>, symbol: &str) -> Result<Vec<PriceBar>> {
    let path = path.as_ref();
    ensure_exists(path)?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut bars = Vec::new();
    let mut malformed_dates = 0usize;

    for (idx, row) in reader.deserialize::<RawPriceRow>().enumerate() {
        let row = row?;
        let line = idx as u64 + 2;
        let field = |name: &'static str, value: &str| -> Result<f64> {
            value.parse::<f64>().map_err(|_| DataError::Parse {
                path: path.to_path_buf(),
                line,
                field: name,
                value: value.to_string(),
            })
        };

        let date = parse_date(&row.date);
        if date.is_none() {
            malformed_dates += 1;
        }

        let volume = field("Volume", &row.volume)?;
        if !volume.is_finite() || volume < 0.0 {
            return Err(DataError::Parse {
                path: path.to_path_buf(),
                line,
                field: "Volume",
                value: row.volume,
            });
        }

        bars.push(PriceBar::new(
            date,
            symbol,
            field("Open", &row.open)?,
            field("High", &row.high)?,
            field("Low", &row.low)?,
            field("Close", &row.close)?,
            volume.round() as u64,
        ));
    }

    bars.sort_by_key(|bar| (bar.date.is_none(), bar.date));

    if malformed_dates > 0 {
        warn!(
            symbol,
            malformed_dates, "price rows with unparseable dates will be excluded from date joins"
        );
    }
    info!(symbol, path = %path.display(), rows = bars.len(), "loaded prices");
    Ok(bars)
}
