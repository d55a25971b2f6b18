//! Sentiment/return correlation engine.
//!
//! Aligns news and prices on calendar date, aggregates headline sentiment
//! per day, joins it with daily returns, and reports Pearson and Spearman
//! correlation together with bucketed return statistics. Every function
//! borrows its inputs and is idempotent.

mod aggregation;
mod alignment;
mod correlation;
mod impact;
mod merge;

pub use aggregation::daily_sentiment;
pub use alignment::align_dates;
pub use correlation::{calculate_correlation, calculate_ranks, pearson, spearman};
pub use impact::{SentimentImpactAnalyzer, SentimentImpactReport};
pub use merge::merge_sentiment_and_returns;
