use vader_sentiment::SentimentIntensityAnalyzer;

use crate::scorer::SentimentScorer;

/// VADER polarity model returning the `compound` score.
///
/// The lexicon is built once in [`VaderScorer::new`]; construct one scorer
/// and reuse it for the whole batch.
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for VaderScorer {
    fn score(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }
        let scores = self.analyzer.polarity_scores(text);
        let compound = scores.get("compound").copied().unwrap_or(0.0);
        if compound.is_nan() {
            return 0.0;
        }
        compound.clamp(-1.0, 1.0)
    }
}
