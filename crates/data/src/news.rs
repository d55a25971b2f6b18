//! News headline CSV loader.
//!
//! Expected columns: `headline`, `publisher`, `date`, and optionally `stock`
//! and `url`. Other columns are ignored.

use std::path::Path;

use news_alpha_core::NewsRecord;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::dates::parse_timestamp;
use crate::error::{ensure_exists, Result};

#[derive(Debug, Deserialize)]
struct RawNewsRow {
    #[serde(default)]
    headline: Option<String>,
    #[serde(default)]
    publisher: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default, alias = "symbol", alias = "ticker")]
    stock: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

/// Loads unscored news records from a CSV file.
///
/// Dates are parsed as UTC. A malformed or empty date becomes `None`
/// rather than an error, so the row is kept but never joins on a date.
///
/// # Errors
///
/// Returns `FileNotFound` if the file is missing and `Csv` if the file is
/// not valid CSV.
pub fn load_news(path: impl AsRef<Path>) -> Result<Vec<NewsRecord>> {
    let path = path.as_ref();
    ensure_exists(path)?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_path(path)?;

    let mut records = Vec::new();
    let mut malformed_dates = 0usize;

    for (idx, row) in reader.deserialize::<RawNewsRow>().enumerate() {
        let row = row?;
        let timestamp = row.date.as_deref().and_then(parse_timestamp);
        if timestamp.is_none() {
            malformed_dates += 1;
            debug!(line = idx + 2, value = ?row.date, "unparseable news date");
        }

        let mut record = NewsRecord::new(
            timestamp,
            row.headline.unwrap_or_default(),
            row.publisher.unwrap_or_default(),
        );
        if let Some(stock) = non_empty(row.stock) {
            record = record.with_symbol(stock);
        }
        if let Some(url) = non_empty(row.url) {
            record = record.with_url(url);
        }
        records.push(record);
    }

    if malformed_dates > 0 {
        warn!(
            path = %path.display(),
            malformed_dates,
            "news rows with unparseable dates will be excluded from date joins"
        );
    }
    info!(path = %path.display(), rows = records.len(), "loaded news");
    Ok(records)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
