use news_alpha_core::series::{rolling_mean, rolling_std};

use crate::returns::daily_returns;

/// Trading days per year, used to annualise daily figures.
pub const TRADING_DAYS: f64 = 252.0;

/// Rolling annualised volatility: sample std of daily returns over
/// `window` days, times sqrt(252).
#[must_use]
pub fn rolling_volatility(closes: &[f64], window: usize) -> Vec<f64> {
    rolling_std(&daily_returns(closes), window)
        .into_iter()
        .map(|sd| sd * TRADING_DAYS.sqrt())
        .collect()
}

/// Rolling annualised Sharpe ratio of daily excess returns.
///
/// `risk_free_rate` is annual and spread evenly over 252 days. A window with
/// zero dispersion has no defined ratio and yields NaN.
#[must_use]
pub fn rolling_sharpe(closes: &[f64], risk_free_rate: f64, window: usize) -> Vec<f64> {
    let daily_rf = risk_free_rate / TRADING_DAYS;
    let excess: Vec<f64> = daily_returns(closes).iter().map(|r| r - daily_rf).collect();

    rolling_mean(&excess, window)
        .into_iter()
        .zip(rolling_std(&excess, window))
        .map(|(mean, sd)| {
            if sd.is_nan() || sd <= f64::EPSILON {
                f64::NAN
            } else {
                mean / sd * TRADING_DAYS.sqrt()
            }
        })
        .collect()
}

/// Drawdown of the compounded return index from its running peak.
///
/// The index compounds `1 + r` over defined returns only, so it starts at
/// the first return rather than at the first close; the first value is NaN.
#[must_use]
pub fn drawdown(closes: &[f64]) -> Vec<f64> {
    let mut wealth = 1.0;
    let mut peak = f64::NAN;

    daily_returns(closes)
        .into_iter()
        .map(|r| {
            if r.is_nan() {
                return f64::NAN;
            }
            wealth *= 1.0 + r;
            peak = if peak.is_nan() { wealth } else { peak.max(wealth) };
            (wealth - peak) / peak
        })
        .collect()
}

/// Deepest drawdown as a non-positive fraction, NaN when undefined.
#[must_use]
pub fn max_drawdown(closes: &[f64]) -> f64 {
    drawdown(closes)
        .into_iter()
        .filter(|d| !d.is_nan())
        .fold(f64::NAN, f64::min)
}
