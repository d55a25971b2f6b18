//! Sentiment scoring for news headlines.
//!
//! Scorers are plain values owned by the caller and passed to whatever runs
//! the pipeline. Every score lies in `[-1, 1]`; anything that is not text
//! scores exactly `0.0`.

mod scorer;
mod vader;

pub use scorer::{score_records, SentimentScorer};
pub use vader::VaderScorer;
