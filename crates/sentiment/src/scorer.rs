use news_alpha_core::NewsRecord;
use serde_json::Value;

/// Maps text to a polarity score in `[-1, 1]`.
pub trait SentimentScorer {
    /// Scores a piece of text. Implementations must stay within `[-1, 1]`.
    fn score(&self, text: &str) -> f64;

    /// Scores optional text; `None` is neutral.
    fn score_optional(&self, text: Option<&str>) -> f64 {
        text.map_or(0.0, |t| self.score(t))
    }

    /// Scores a loosely typed value; only strings are scored, everything
    /// else (null, numbers, booleans, arrays, objects) is neutral.
    fn score_value(&self, value: &Value) -> f64 {
        match value {
            Value::String(text) => self.score(text),
            _ => 0.0,
        }
    }
}

/// Returns scored copies of `records`; the inputs are left untouched.
pub fn score_records<S>(scorer: &S, records: &[NewsRecord]) -> Vec<NewsRecord>
where
    S: SentimentScorer + ?Sized,
{
    let scored: Vec<NewsRecord> = records
        .iter()
        .map(|r| {
            let score = scorer.score(&r.headline);
            r.clone().with_sentiment(score)
        })
        .collect();
    tracing::debug!(rows = scored.len(), "scored headlines");
    scored
}
