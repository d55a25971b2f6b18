use std::collections::HashMap;

use news_alpha_core::{series, DailyReturn, PriceBar};

/// Close-to-close percentage change; the first value is NaN.
#[must_use]
pub fn daily_returns(closes: &[f64]) -> Vec<f64> {
    series::pct_change(closes)
}

/// Per-bar returns keyed by date, computed separately for each symbol.
///
/// Bars are taken in the order given (the loader sorts them by date); the
/// first bar of every symbol has no return.
#[must_use]
pub fn daily_return_records(bars: &[PriceBar]) -> Vec<DailyReturn> {
    let mut previous: HashMap<&str, f64> = HashMap::new();

    bars.iter()
        .map(|bar| {
            let pct_change = previous
                .insert(bar.symbol.as_str(), bar.close)
                .map(|prev| (bar.close - prev) / prev)
                .filter(|r| !r.is_nan());
            DailyReturn {
                date: bar.date,
                symbol: bar.symbol.clone(),
                close: bar.close,
                pct_change,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bar(day: u32, symbol: &str, close: f64) -> PriceBar {
        PriceBar::new(
            NaiveDate::from_ymd_opt(2024, 2, day),
            symbol,
            close,
            close,
            close,
            close,
            1_000,
        )
    }

    #[test]
    fn first_return_is_undefined() {
        let returns = daily_returns(&[50.0, 55.0, 44.0]);
        assert!(returns[0].is_nan());
        assert!((returns[1] - 0.1).abs() < 1e-12);
        assert!((returns[2] + 0.2).abs() < 1e-12);
    }

    #[test]
    fn records_restart_for_each_symbol() {
        let bars = vec![
            bar(1, "AAPL", 100.0),
            bar(1, "MSFT", 200.0),
            bar(2, "AAPL", 110.0),
            bar(2, "MSFT", 190.0),
        ];

        let records = daily_return_records(&bars);

        assert!(records[0].pct_change.is_none());
        assert!(records[1].pct_change.is_none());
        assert!((records[2].pct_change.unwrap() - 0.1).abs() < 1e-12);
        assert!((records[3].pct_change.unwrap() + 0.05).abs() < 1e-12);
        assert_eq!(records[3].symbol, "MSFT");
        assert_eq!(records[3].date, NaiveDate::from_ymd_opt(2024, 2, 2));
    }

    #[test]
    fn records_of_empty_input_are_empty() {
        assert!(daily_return_records(&[]).is_empty());
    }
}
