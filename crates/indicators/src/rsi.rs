use news_alpha_core::series::rolling_mean;

/// Relative Strength Index (0-100) from simple rolling means of gains and
/// losses.
///
/// The first price change is undefined and counts as neither gain nor loss,
/// so the first value appears at index `period - 1`. A window with no losses
/// reads 100; a window with no movement at all is NaN.
#[must_use]
pub fn rsi(values: &[f64], period: usize) -> Vec<f64> {
    let mut gains = Vec::with_capacity(values.len());
    let mut losses = Vec::with_capacity(values.len());

    for i in 0..values.len() {
        let delta = if i == 0 { 0.0 } else { values[i] - values[i - 1] };
        gains.push(if delta > 0.0 { delta } else { 0.0 });
        losses.push(if delta < 0.0 { -delta } else { 0.0 });
    }

    rolling_mean(&gains, period)
        .into_iter()
        .zip(rolling_mean(&losses, period))
        .map(|(gain, loss)| 100.0 - 100.0 / (1.0 + gain / loss))
        .collect()
}
