use std::collections::HashMap;

use chrono::NaiveDate;
use news_alpha_core::{AlignedRow, NewsRecord, PriceBar};
use tracing::debug;

/// Row-level inner join of news and price bars on calendar date.
///
/// Each headline is paired with every bar of the same date, in news order
/// then price order. Rows whose date is missing on either side never match,
/// and dates present on only one side (weekends, holidays) are dropped
/// without any fill.
#[must_use]
pub fn align_dates(news: &[NewsRecord], prices: &[PriceBar]) -> Vec<AlignedRow> {
    let by_date = index_by_date(prices);

    let rows: Vec<AlignedRow> = news
        .iter()
        .filter_map(|record| Some((record.calendar_date()?, record)))
        .flat_map(|(date, record)| {
            by_date
                .get(&date)
                .into_iter()
                .flatten()
                .map(move |bar| AlignedRow {
                    date,
                    news: record.clone(),
                    price: (*bar).clone(),
                })
        })
        .collect();

    debug!(
        news_rows = news.len(),
        price_rows = prices.len(),
        aligned_rows = rows.len(),
        "aligned news with prices"
    );
    rows
}

fn index_by_date(prices: &[PriceBar]) -> HashMap<NaiveDate, Vec<&PriceBar>> {
    let mut index: HashMap<NaiveDate, Vec<&PriceBar>> = HashMap::new();
    for bar in prices {
        if let Some(date) = bar.date {
            index.entry(date).or_default().push(bar);
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeSet;

    fn ymd(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, d).unwrap()
    }

    fn news_at(day: u32, hour: u32, headline: &str) -> NewsRecord {
        NewsRecord::new(
            Some(Utc.with_ymd_and_hms(2024, 4, day, hour, 15, 0).unwrap()),
            headline,
            "Wire",
        )
    }

    fn bar(day: u32, close: f64) -> PriceBar {
        PriceBar::new(Some(ymd(day)), "AAPL", close, close, close, close, 100)
    }

    #[test]
    fn join_keeps_only_shared_dates() {
        // 6 and 7 April 2024 are a weekend
        let news = vec![
            news_at(5, 9, "fri"),
            news_at(6, 9, "sat"),
            news_at(7, 9, "sun"),
            news_at(8, 9, "mon"),
        ];
        let prices = vec![bar(4, 1.0), bar(5, 2.0), bar(8, 3.0)];

        let rows = align_dates(&news, &prices);

        let dates: BTreeSet<NaiveDate> = rows.iter().map(|r| r.date).collect();
        assert_eq!(dates, BTreeSet::from([ymd(5), ymd(8)]));
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn time_of_day_is_ignored() {
        let news = vec![news_at(5, 0, "early"), news_at(5, 23, "late")];
        let prices = vec![bar(5, 10.0)];

        let rows = align_dates(&news, &prices);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].news.headline, "early");
        assert_eq!(rows[1].news.headline, "late");
        assert!(rows.iter().all(|r| r.price.close == 10.0));
    }

    #[test]
    fn missing_dates_never_match() {
        let news = vec![NewsRecord::new(None, "undated", "Wire"), news_at(5, 9, "dated")];
        let prices = vec![
            PriceBar::new(None, "AAPL", 1.0, 1.0, 1.0, 1.0, 1),
            bar(5, 2.0),
        ];

        let rows = align_dates(&news, &prices);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].news.headline, "dated");
        assert_eq!(rows[0].price.date, Some(ymd(5)));
    }

    #[test]
    fn empty_inputs_give_empty_join() {
        assert!(align_dates(&[], &[bar(5, 1.0)]).is_empty());
        assert!(align_dates(&[news_at(5, 1, "x")], &[]).is_empty());
    }
}
