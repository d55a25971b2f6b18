use std::collections::BTreeMap;

use chrono::NaiveDate;
use news_alpha_core::{series, DailySentiment, NewsRecord};

/// Aggregates headline scores into one record per calendar date, ascending.
///
/// The grouping key is the UTC calendar date of each timestamp. Records
/// without a timestamp are skipped. The standard deviation is the sample
/// statistic, so a day with a single headline reports NaN.
#[must_use]
pub fn daily_sentiment(news: &[NewsRecord]) -> Vec<DailySentiment> {
    let mut groups: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
    for record in news {
        if let Some(date) = record.calendar_date() {
            groups.entry(date).or_default().push(record.sentiment);
        }
    }

    groups
        .into_iter()
        .map(|(date, scores)| DailySentiment {
            date,
            mean_sentiment: series::mean(&scores),
            sentiment_stddev: series::sample_std(&scores),
            headline_count: scores.len(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn scored(day: u32, hour: u32, score: f64) -> NewsRecord {
        NewsRecord::new(
            Some(Utc.with_ymd_and_hms(2024, 5, day, hour, 0, 0).unwrap()),
            "headline",
            "Wire",
        )
        .with_sentiment(score)
    }

    #[test]
    fn three_headlines_on_one_day() {
        let news = vec![scored(2, 8, 0.5), scored(2, 12, -0.5), scored(2, 20, 0.2)];

        let daily = daily_sentiment(&news);

        assert_eq!(daily.len(), 1);
        assert!((daily[0].mean_sentiment - 0.0667).abs() < 1e-4);
        assert_eq!(daily[0].headline_count, 3);
        let expected_sd = series::sample_std(&[0.5, -0.5, 0.2]);
        assert!((daily[0].sentiment_stddev - expected_sd).abs() < 1e-12);
    }

    #[test]
    fn single_headline_has_undefined_stddev() {
        let daily = daily_sentiment(&[scored(3, 9, 0.4)]);
        assert_eq!(daily[0].headline_count, 1);
        assert!(daily[0].sentiment_stddev.is_nan());
        assert!((daily[0].mean_sentiment - 0.4).abs() < 1e-12);
    }

    #[test]
    fn days_are_sorted_and_undated_rows_skipped() {
        let news = vec![
            scored(9, 9, 0.1),
            NewsRecord::new(None, "undated", "Wire").with_sentiment(1.0),
            scored(4, 9, -0.3),
        ];

        let daily = daily_sentiment(&news);

        let dates: Vec<u32> = daily.iter().map(|d| chrono::Datelike::day(&d.date)).collect();
        assert_eq!(dates, vec![4, 9]);
        assert_eq!(daily.iter().map(|d| d.headline_count).sum::<usize>(), 2);
    }
}
