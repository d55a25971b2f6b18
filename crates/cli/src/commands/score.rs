//! Score CLI command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use news_alpha_data::load_news;
use news_alpha_sentiment::{SentimentScorer, VaderScorer};

use super::OutputFormat;

/// Arguments for the score command.
#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Headline to score; may be repeated
    #[arg(long = "text", num_args = 1.., required_unless_present = "news")]
    pub texts: Vec<String>,

    /// Score every headline in a news CSV instead
    #[arg(long)]
    pub news: Option<PathBuf>,

    /// Output format: text, json (default: text)
    #[arg(long, default_value = "text")]
    pub format: String,
}

/// Runs the score command.
///
/// # Errors
/// Returns an error if the format is unknown or the news file cannot be read.
pub fn run_score(args: ScoreArgs) -> Result<()> {
    let format = OutputFormat::parse(&args.format)?;

    let mut headlines = args.texts;
    if let Some(path) = &args.news {
        let news = load_news(path)
            .with_context(|| format!("Failed to load news from {}", path.display()))?;
        headlines.extend(news.into_iter().map(|n| n.headline));
    }

    let scorer = VaderScorer::new();
    let scored: Vec<(String, f64)> = headlines
        .into_iter()
        .map(|text| {
            let score = scorer.score(&text);
            (text, score)
        })
        .collect();

    match format {
        OutputFormat::Text => {
            for (text, score) in &scored {
                println!("{score:+.4}  {text}");
            }
        }
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = scored
                .iter()
                .map(|(text, score)| serde_json::json!({ "headline": text, "sentiment": score }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }

    Ok(())
}
