//! Sentiment impact summary.
//!
//! Combines the merge, the correlation, and bucketed return statistics into
//! a single report that also carries the joined table.

#![allow(clippy::format_push_string)]

use news_alpha_core::{series, AlignedObservation, AnalysisConfig, CorrelationResult, NewsRecord, PriceBar};
use news_alpha_sentiment::{score_records, SentimentScorer};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::correlation::calculate_correlation;
use crate::merge::merge_sentiment_and_returns;

/// Full result of a sentiment impact analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentImpactReport {
    /// Ticker the analysis was scoped to, if any
    pub symbol: Option<String>,
    /// Correlation between daily mean sentiment and daily return
    pub correlation: CorrelationResult,
    /// Number of aligned days
    pub total_days: usize,
    /// Days with mean sentiment above zero
    pub positive_sentiment_days: usize,
    /// Days with mean sentiment below zero
    pub negative_sentiment_days: usize,
    /// Mean return over positive days, NaN if none
    #[serde(deserialize_with = "news_alpha_core::serde_nan::deserialize")]
    pub avg_return_positive_sentiment: f64,
    /// Mean return over negative days, NaN if none
    #[serde(deserialize_with = "news_alpha_core::serde_nan::deserialize")]
    pub avg_return_negative_sentiment: f64,
    /// The joined sentiment/return table
    pub observations: Vec<AlignedObservation>,
}

impl SentimentImpactReport {
    /// Builds the summary from an already merged table.
    #[must_use]
    pub fn from_observations(symbol: Option<String>, observations: Vec<AlignedObservation>) -> Self {
        let correlation = calculate_correlation(&observations);

        let positive: Vec<&AlignedObservation> =
            observations.iter().filter(|o| o.mean_sentiment > 0.0).collect();
        let negative: Vec<&AlignedObservation> =
            observations.iter().filter(|o| o.mean_sentiment < 0.0).collect();

        Self {
            symbol,
            correlation,
            total_days: observations.len(),
            positive_sentiment_days: positive.len(),
            negative_sentiment_days: negative.len(),
            avg_return_positive_sentiment: mean_return(&positive),
            avg_return_negative_sentiment: mean_return(&negative),
            observations,
        }
    }

    /// Days with exactly zero mean sentiment, counted in neither bucket.
    #[must_use]
    pub fn neutral_sentiment_days(&self) -> usize {
        self.total_days - self.positive_sentiment_days - self.negative_sentiment_days
    }

    /// Converts the report to a human-readable text format.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut output = String::new();
        let c = &self.correlation;

        output.push_str(&format!(
            "=== Sentiment Impact Report: {} ===\n\n",
            self.symbol.as_deref().unwrap_or("all symbols")
        ));

        if let (Some(first), Some(last)) = (self.observations.first(), self.observations.last()) {
            output.push_str(&format!("Period: {} to {}\n", first.date, last.date));
        }
        output.push_str(&format!("Aligned days: {}\n", self.total_days));
        output.push_str(&format!("Complete pairs: {}\n\n", c.n_observations));

        output.push_str("--- Correlation (sentiment vs daily return) ---\n");
        output.push_str(&format!(
            "Pearson:  r = {}  p = {}\n",
            fmt_stat(c.pearson_r),
            fmt_stat(c.pearson_p)
        ));
        output.push_str(&format!(
            "Spearman: r = {}  p = {}\n",
            fmt_stat(c.spearman_r),
            fmt_stat(c.spearman_p)
        ));
        if c.is_undefined() {
            output.push_str("Not enough complete pairs to estimate correlation.\n");
        } else if c.is_significant() {
            output.push_str("Pearson correlation is significant at alpha = 0.05.\n");
        } else {
            output.push_str("Pearson correlation is not significant at alpha = 0.05.\n");
        }

        output.push_str("\n--- Returns by sentiment ---\n");
        output.push_str(&format!(
            "Positive days: {:>5}  mean return: {}\n",
            self.positive_sentiment_days,
            fmt_pct(self.avg_return_positive_sentiment)
        ));
        output.push_str(&format!(
            "Negative days: {:>5}  mean return: {}\n",
            self.negative_sentiment_days,
            fmt_pct(self.avg_return_negative_sentiment)
        ));
        output.push_str(&format!(
            "Neutral days:  {:>5}\n",
            self.neutral_sentiment_days()
        ));

        output
    }
}

fn mean_return(days: &[&AlignedObservation]) -> f64 {
    let returns: Vec<f64> = days
        .iter()
        .filter_map(|o| o.pct_change)
        .filter(|r| !r.is_nan())
        .collect();
    series::mean(&returns)
}

fn fmt_stat(value: f64) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else {
        format!("{value:.4}")
    }
}

fn fmt_pct(value: f64) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else {
        format!("{:+.3}%", value * 100.0)
    }
}

/// Runs the full sentiment impact analysis.
///
/// The analyzer holds no state between calls; the same inputs always
/// produce the same report.
#[derive(Debug, Clone, Default)]
pub struct SentimentImpactAnalyzer {
    symbol: Option<String>,
}

impl SentimentImpactAnalyzer {
    /// Analyzes all news against all prices.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the analysis to one ticker: price bars of other symbols and
    /// news tagged with other symbols are ignored; untagged news is kept.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    #[must_use]
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self {
            symbol: config.symbol.clone(),
        }
    }

    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Analyzes already scored news against daily prices.
    #[must_use]
    pub fn analyze(&self, news: &[NewsRecord], prices: &[PriceBar]) -> SentimentImpactReport {
        let observations = match self.symbol.as_deref() {
            Some(symbol) => {
                let news: Vec<NewsRecord> =
                    news.iter().filter(|n| n.concerns(symbol)).cloned().collect();
                let prices: Vec<PriceBar> = prices
                    .iter()
                    .filter(|p| p.symbol.eq_ignore_ascii_case(symbol))
                    .cloned()
                    .collect();
                merge_sentiment_and_returns(&news, &prices)
            }
            None => merge_sentiment_and_returns(news, prices),
        };

        let report = SentimentImpactReport::from_observations(self.symbol.clone(), observations);
        info!(
            symbol = self.symbol.as_deref().unwrap_or("*"),
            days = report.total_days,
            pairs = report.correlation.n_observations,
            pearson_r = report.correlation.pearson_r,
            spearman_r = report.correlation.spearman_r,
            "sentiment impact analysis complete"
        );
        report
    }

    /// Scores the headlines with `scorer`, then analyzes them.
    ///
    /// The caller's records are not modified.
    #[must_use]
    pub fn analyze_with_scorer<S>(
        &self,
        scorer: &S,
        news: &[NewsRecord],
        prices: &[PriceBar],
    ) -> SentimentImpactReport
    where
        S: SentimentScorer + ?Sized,
    {
        let scored = score_records(scorer, news);
        self.analyze(&scored, prices)
    }
}
