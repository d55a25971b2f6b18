//! Data model shared by the loader, scorer, and correlation engine.
//!
//! Dates use a `None` sentinel when the source value could not be parsed.
//! Such rows stay in the tables but never take part in a date join.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single news headline, optionally tagged with the ticker it refers to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsRecord {
    /// Publication time in UTC, `None` when the source date was malformed
    pub timestamp: Option<DateTime<Utc>>,
    /// Headline text
    pub headline: String,
    /// Publisher name
    pub publisher: String,
    /// Ticker the headline is associated with
    pub symbol: Option<String>,
    /// Link to the article
    pub url: Option<String>,
    /// Sentiment score in [-1, 1], 0.0 until scored
    pub sentiment: f64,
}

impl NewsRecord {
    /// Creates an unscored news record.
    pub fn new(
        timestamp: Option<DateTime<Utc>>,
        headline: impl Into<String>,
        publisher: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            headline: headline.into(),
            publisher: publisher.into(),
            symbol: None,
            url: None,
            sentiment: 0.0,
        }
    }

    /// Builder method to tag the record with a ticker.
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Builder method to add the article URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Returns a copy carrying the given sentiment score.
    #[must_use]
    pub fn with_sentiment(mut self, score: f64) -> Self {
        self.sentiment = score;
        self
    }

    /// Calendar date of publication (UTC), time-of-day dropped.
    #[must_use]
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        self.timestamp.map(|ts| ts.date_naive())
    }

    /// Returns true if the record is about `symbol`, or carries no ticker at all.
    #[must_use]
    pub fn concerns(&self, symbol: &str) -> bool {
        self.symbol
            .as_deref()
            .map_or(true, |s| s.eq_ignore_ascii_case(symbol))
    }
}

/// One daily OHLCV bar for a symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Trading day, `None` when the source date was malformed
    pub date: Option<NaiveDate>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    pub symbol: String,
}

impl PriceBar {
    /// Creates a bar from its parts.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        date: Option<NaiveDate>,
        symbol: impl Into<String>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
            symbol: symbol.into(),
        }
    }
}

/// Sentiment aggregated over every headline published on one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySentiment {
    pub date: NaiveDate,
    /// Arithmetic mean of headline scores
    #[serde(deserialize_with = "crate::serde_nan::deserialize")]
    pub mean_sentiment: f64,
    /// Sample standard deviation, NaN for a single headline
    #[serde(deserialize_with = "crate::serde_nan::deserialize")]
    pub sentiment_stddev: f64,
    /// Number of headlines, always at least 1
    pub headline_count: usize,
}

/// Close-to-close return for one bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReturn {
    pub date: Option<NaiveDate>,
    pub symbol: String,
    pub close: f64,
    /// `None` for the first bar of each symbol
    pub pct_change: Option<f64>,
}

/// A day present in both the sentiment and the return series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedObservation {
    /// Join key (news calendar date)
    pub date: NaiveDate,
    /// Date as carried by the price table
    pub stock_date: NaiveDate,
    pub symbol: String,
    #[serde(deserialize_with = "crate::serde_nan::deserialize")]
    pub mean_sentiment: f64,
    #[serde(deserialize_with = "crate::serde_nan::deserialize")]
    pub sentiment_stddev: f64,
    pub headline_count: usize,
    pub pct_change: Option<f64>,
    #[serde(deserialize_with = "crate::serde_nan::deserialize")]
    pub close: f64,
}

impl AlignedObservation {
    /// Returns the (sentiment, return) pair when both values are defined.
    #[must_use]
    pub fn complete_pair(&self) -> Option<(f64, f64)> {
        let ret = self.pct_change.filter(|r| !r.is_nan())?;
        if self.mean_sentiment.is_nan() {
            return None;
        }
        Some((self.mean_sentiment, ret))
    }
}

/// Row-level join of a headline with the price bar of the same calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedRow {
    pub date: NaiveDate,
    pub news: NewsRecord,
    pub price: PriceBar,
}

/// Pearson and Spearman correlation between daily sentiment and returns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    /// Pearson correlation coefficient [-1, 1]
    #[serde(deserialize_with = "crate::serde_nan::deserialize")]
    pub pearson_r: f64,
    /// Two-sided p-value for `pearson_r`
    #[serde(deserialize_with = "crate::serde_nan::deserialize")]
    pub pearson_p: f64,
    /// Spearman rank correlation [-1, 1]
    #[serde(deserialize_with = "crate::serde_nan::deserialize")]
    pub spearman_r: f64,
    /// Two-sided p-value for `spearman_r`
    #[serde(deserialize_with = "crate::serde_nan::deserialize")]
    pub spearman_p: f64,
    /// Number of complete (sentiment, return) pairs used
    pub n_observations: usize,
}

impl CorrelationResult {
    /// All statistics undefined, as reported for fewer than two pairs.
    #[must_use]
    pub fn undefined(n_observations: usize) -> Self {
        Self {
            pearson_r: f64::NAN,
            pearson_p: f64::NAN,
            spearman_r: f64::NAN,
            spearman_p: f64::NAN,
            n_observations,
        }
    }

    /// Returns true if the Pearson correlation is significant at alpha = 0.05.
    #[must_use]
    pub fn is_significant(&self) -> bool {
        self.pearson_p < 0.05
    }

    /// Returns true if every statistic is NaN.
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        self.pearson_r.is_nan()
            && self.pearson_p.is_nan()
            && self.spearman_r.is_nan()
            && self.spearman_p.is_nan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn observation(sentiment: f64, ret: Option<f64>) -> AlignedObservation {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        AlignedObservation {
            date,
            stock_date: date,
            symbol: "AAPL".to_string(),
            mean_sentiment: sentiment,
            sentiment_stddev: f64::NAN,
            headline_count: 1,
            pct_change: ret,
            close: 100.0,
        }
    }

    #[test]
    fn calendar_date_drops_time_of_day() {
        let record = NewsRecord::new(
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 23, 59, 59).unwrap()),
            "Late headline",
            "Wire",
        );
        assert_eq!(
            record.calendar_date(),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
    }

    #[test]
    fn calendar_date_is_none_for_malformed_timestamp() {
        let record = NewsRecord::new(None, "Undated", "Wire");
        assert!(record.calendar_date().is_none());
    }

    #[test]
    fn concerns_matches_case_insensitively_and_untagged() {
        let tagged = NewsRecord::new(None, "h", "p").with_symbol("aapl");
        let untagged = NewsRecord::new(None, "h", "p");
        assert!(tagged.concerns("AAPL"));
        assert!(!tagged.concerns("MSFT"));
        assert!(untagged.concerns("MSFT"));
    }

    #[test]
    fn complete_pair_requires_both_values() {
        assert_eq!(observation(0.2, Some(0.01)).complete_pair(), Some((0.2, 0.01)));
        assert!(observation(0.2, None).complete_pair().is_none());
        assert!(observation(0.2, Some(f64::NAN)).complete_pair().is_none());
        assert!(observation(f64::NAN, Some(0.01)).complete_pair().is_none());
    }

    #[test]
    fn undefined_result_keeps_count() {
        let result = CorrelationResult::undefined(1);
        assert!(result.is_undefined());
        assert_eq!(result.n_observations, 1);
        assert!(!result.is_significant());
    }

    #[test]
    fn undefined_statistics_read_back_from_json() {
        let json = serde_json::to_string(&CorrelationResult::undefined(1)).unwrap();
        assert!(json.contains("\"pearson_r\":null"));

        let back: CorrelationResult = serde_json::from_str(&json).unwrap();
        assert!(back.is_undefined());
        assert_eq!(back.n_observations, 1);
    }

    #[test]
    fn single_headline_observation_reads_back_from_json() {
        let json = serde_json::to_string(&observation(0.4, None)).unwrap();

        let back: AlignedObservation = serde_json::from_str(&json).unwrap();
        assert!(back.sentiment_stddev.is_nan());
        assert_eq!(back.mean_sentiment, 0.4);
        assert!(back.pct_change.is_none());
    }
}
