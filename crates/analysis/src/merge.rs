use std::collections::HashMap;

use chrono::NaiveDate;
use news_alpha_core::{AlignedObservation, DailyReturn, NewsRecord, PriceBar};
use news_alpha_metrics::daily_return_records;
use tracing::debug;

use crate::aggregation::daily_sentiment;

/// Joins daily sentiment with daily returns on calendar date.
///
/// Sentiment is aggregated first, then each day is matched to the price
/// bars of the same date. Returns are computed over the full price series
/// before the join, so a surviving day's return still refers to the
/// previous trading day even when that day had no news.
#[must_use]
pub fn merge_sentiment_and_returns(
    news: &[NewsRecord],
    prices: &[PriceBar],
) -> Vec<AlignedObservation> {
    let daily = daily_sentiment(news);
    let returns = daily_return_records(prices);

    let mut by_date: HashMap<NaiveDate, Vec<&DailyReturn>> = HashMap::new();
    for ret in &returns {
        if let Some(date) = ret.date {
            by_date.entry(date).or_default().push(ret);
        }
    }

    let merged: Vec<AlignedObservation> = daily
        .iter()
        .flat_map(|day| {
            by_date
                .get(&day.date)
                .into_iter()
                .flatten()
                .filter_map(move |ret| {
                    Some(AlignedObservation {
                        date: day.date,
                        stock_date: ret.date?,
                        symbol: ret.symbol.clone(),
                        mean_sentiment: day.mean_sentiment,
                        sentiment_stddev: day.sentiment_stddev,
                        headline_count: day.headline_count,
                        pct_change: ret.pct_change,
                        close: ret.close,
                    })
                })
        })
        .collect();

    debug!(
        sentiment_days = daily.len(),
        price_days = returns.len(),
        merged_days = merged.len(),
        "merged sentiment with returns"
    );
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn scored(day: u32, score: f64) -> NewsRecord {
        NewsRecord::new(
            Some(Utc.with_ymd_and_hms(2024, 6, day, 14, 0, 0).unwrap()),
            "headline",
            "Wire",
        )
        .with_sentiment(score)
    }

    fn bar(day: u32, close: f64) -> PriceBar {
        PriceBar::new(
            NaiveDate::from_ymd_opt(2024, 6, day),
            "AAPL",
            close,
            close,
            close,
            close,
            100,
        )
    }

    #[test]
    fn return_spans_days_without_news() {
        let news = vec![scored(3, 0.2), scored(5, -0.4), scored(5, 0.0)];
        let prices = vec![bar(3, 100.0), bar(4, 110.0), bar(5, 99.0)];

        let merged = merge_sentiment_and_returns(&news, &prices);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].date, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        assert!(merged[0].pct_change.is_none());
        assert_eq!(merged[1].headline_count, 2);
        assert!((merged[1].mean_sentiment + 0.2).abs() < 1e-12);
        // 99 vs 110 on the 4th, not vs 100 on the 3rd
        assert!((merged[1].pct_change.unwrap() + 0.1).abs() < 1e-12);
        assert_eq!(merged[1].close, 99.0);
        assert_eq!(merged[1].stock_date, merged[1].date);
    }

    #[test]
    fn news_only_days_are_dropped() {
        let news = vec![scored(1, 0.5), scored(2, 0.5)];
        let prices = vec![bar(3, 100.0)];
        assert!(merge_sentiment_and_returns(&news, &prices).is_empty());
    }
}
