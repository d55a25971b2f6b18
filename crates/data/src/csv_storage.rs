use std::fs::File;
use std::path::Path;

use csv::Writer;
use news_alpha_core::{AlignedObservation, PriceBar, SeriesTable};
use tracing::info;

use crate::error::Result;

pub struct CsvStorage;

impl CsvStorage {
    /// Writes the joined sentiment/return table.
    ///
    /// Format: date,stock_date,symbol,mean_sentiment,sentiment_stddev,headline_count,pct_change,close
    ///
    /// Undefined values (NaN, missing return) are written as empty fields.
    ///
    /// # Errors
    /// Returns error if file cannot be created or writing fails
    pub fn write_observations(path: impl AsRef<Path>, rows: &[AlignedObservation]) -> Result<()> {
        let path = path.as_ref();
        let mut writer = Writer::from_writer(File::create(path)?);

        writer.write_record([
            "date",
            "stock_date",
            "symbol",
            "mean_sentiment",
            "sentiment_stddev",
            "headline_count",
            "pct_change",
            "close",
        ])?;

        for row in rows {
            writer.write_record(&[
                row.date.to_string(),
                row.stock_date.to_string(),
                row.symbol.clone(),
                format_f64(row.mean_sentiment),
                format_f64(row.sentiment_stddev),
                row.headline_count.to_string(),
                row.pct_change.map(format_f64).unwrap_or_default(),
                format_f64(row.close),
            ])?;
        }

        writer.flush()?;
        info!(path = %path.display(), rows = rows.len(), "wrote aligned observations");
        Ok(())
    }

    /// Writes price bars followed by one column per derived series.
    ///
    /// Format: Date,Symbol,Open,High,Low,Close,Volume,<series...>
    ///
    /// # Errors
    /// Returns error if file cannot be created or writing fails
    pub fn write_series_table(
        path: impl AsRef<Path>,
        bars: &[PriceBar],
        table: &SeriesTable,
    ) -> Result<()> {
        let path = path.as_ref();
        let mut writer = Writer::from_writer(File::create(path)?);

        let mut header: Vec<&str> = vec!["Date", "Symbol", "Open", "High", "Low", "Close", "Volume"];
        header.extend(table.names());
        writer.write_record(&header)?;

        for (i, bar) in bars.iter().enumerate() {
            let mut record = vec![
                bar.date.map(|d| d.to_string()).unwrap_or_default(),
                bar.symbol.clone(),
                format_f64(bar.open),
                format_f64(bar.high),
                format_f64(bar.low),
                format_f64(bar.close),
                bar.volume.to_string(),
            ];
            record.extend(
                table
                    .columns
                    .iter()
                    .map(|c| c.values.get(i).copied().map(format_f64).unwrap_or_default()),
            );
            writer.write_record(&record)?;
        }

        writer.flush()?;
        info!(path = %path.display(), rows = bars.len(), columns = table.columns.len(), "wrote series table");
        Ok(())
    }
}

fn format_f64(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}
