//! Analyze CLI command.
//!
//! Loads news and prices, scores every headline with VADER, and reports how
//! daily sentiment correlates with daily returns for each requested ticker.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Args;

use news_alpha_analysis::{SentimentImpactAnalyzer, SentimentImpactReport};
use news_alpha_core::{AppConfig, PriceBar};
use news_alpha_data::{load_news, load_prices, CsvStorage, PriceDirectory};
use news_alpha_sentiment::{score_records, VaderScorer};

use super::{symbol_from_path, OutputFormat};

/// Arguments for the analyze command.
#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// News CSV with headline, publisher, date and stock columns
    /// (default: data.news_path from config)
    #[arg(long)]
    pub news: Option<PathBuf>,

    /// Price CSV for a single ticker
    #[arg(long, conflicts_with = "price_dir")]
    pub prices: Option<PathBuf>,

    /// Directory of per-ticker price CSVs (default: data.price_dir from config)
    #[arg(long)]
    pub price_dir: Option<PathBuf>,

    /// Ticker to analyze (default: analysis.symbol, then data.symbols)
    #[arg(long)]
    pub symbol: Option<String>,

    /// Output format: text, json (default: text)
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Write the joined sentiment/return table to this CSV
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Runs the analyze command.
///
/// # Errors
/// Returns an error if an input cannot be loaded, no ticker can be
/// determined for a directory load, or the output cannot be written.
pub fn run_analyze(args: AnalyzeArgs, config: &AppConfig) -> Result<()> {
    let format = OutputFormat::parse(&args.format)?;

    let news_path = args
        .news
        .clone()
        .or_else(|| config.data.news_path.clone())
        .ok_or_else(|| anyhow!("News file must be set via --news or data.news_path"))?;
    let symbol = args.symbol.clone().or_else(|| config.analysis.symbol.clone());

    let news = load_news(&news_path)
        .with_context(|| format!("Failed to load news from {}", news_path.display()))?;
    tracing::info!(path = %news_path.display(), rows = news.len(), "loaded headlines");

    let scorer = VaderScorer::new();
    let scored = score_records(&scorer, &news);

    let price_sets = load_price_sets(&args, symbol.as_deref(), config)?;
    if price_sets.is_empty() {
        tracing::warn!("No price data found for any requested symbol");
        return Ok(());
    }

    let reports: Vec<SentimentImpactReport> = price_sets
        .iter()
        .map(|(symbol, bars)| {
            SentimentImpactAnalyzer::new()
                .with_symbol(symbol.as_str())
                .analyze(&scored, bars)
        })
        .collect();

    if let Some(output) = &args.output {
        let observations: Vec<_> = reports
            .iter()
            .flat_map(|r| r.observations.iter().cloned())
            .collect();
        CsvStorage::write_observations(output, &observations)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        tracing::info!(path = %output.display(), rows = observations.len(), "wrote joined table");
    }

    match format {
        OutputFormat::Text => {
            for report in &reports {
                println!("{}", report.to_text());
            }
        }
        OutputFormat::Json => {
            let json = match reports.as_slice() {
                [single] => serde_json::to_string_pretty(single)?,
                many => serde_json::to_string_pretty(many)?,
            };
            println!("{json}");
        }
    }

    Ok(())
}

/// Resolves the price source into one bar set per ticker.
///
/// A single `--prices` file yields one set. A directory yields the given
/// ticker, or every configured ticker whose file exists.
fn load_price_sets(
    args: &AnalyzeArgs,
    symbol: Option<&str>,
    config: &AppConfig,
) -> Result<Vec<(String, Vec<PriceBar>)>> {
    if let Some(path) = &args.prices {
        let symbol = symbol
            .map(str::to_string)
            .or_else(|| symbol_from_path(path))
            .ok_or_else(|| anyhow!("Cannot infer ticker from {}; pass --symbol", path.display()))?;
        let bars = load_prices(path, &symbol)
            .with_context(|| format!("Failed to load prices from {}", path.display()))?;
        return Ok(vec![(symbol, bars)]);
    }

    let mut data = config.data.clone();
    if let Some(dir) = &args.price_dir {
        data.price_dir = Some(dir.clone());
    }
    let directory = PriceDirectory::from_config(&data)
        .context("Price source must be set via --prices, --price-dir or data.price_dir")?;

    if symbol.is_none() && !data.symbols.is_empty() {
        tracing::info!(
            dir = %directory.dir().display(),
            symbols = data.symbols.len(),
            "analyzing configured symbols"
        );
        return Ok(directory.load_many(&data.symbols)?);
    }

    let bars = directory.load(symbol)?;
    // load() has already rejected a missing symbol
    let symbol = symbol.unwrap_or_default().trim().to_string();
    Ok(vec![(symbol, bars)])
}
