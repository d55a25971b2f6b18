//! Indicators CLI command.
//!
//! Appends technical indicator and financial metric columns to a price table
//! and writes the result as CSV.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Args;

use news_alpha_core::AppConfig;
use news_alpha_data::{load_prices, CsvStorage, PriceDirectory};
use news_alpha_indicators::{add_technical_indicators, parse_indicators};
use news_alpha_metrics::{add_financial_metrics, parse_metrics};

use super::{split_list, symbol_from_path};

/// Arguments for the indicators command.
#[derive(Args, Debug, Clone)]
pub struct IndicatorsArgs {
    /// Price CSV for a single ticker
    #[arg(long, conflicts_with = "price_dir")]
    pub prices: Option<PathBuf>,

    /// Directory of per-ticker price CSVs (default: data.price_dir from config)
    #[arg(long)]
    pub price_dir: Option<PathBuf>,

    /// Ticker; required with a price directory
    #[arg(long)]
    pub symbol: Option<String>,

    /// Comma-separated indicators, e.g. SMA_50,EMA_12,RSI,MACD,BB
    /// (default: indicators.enabled from config)
    #[arg(long)]
    pub indicators: Option<String>,

    /// Comma-separated metrics: returns, volatility, sharpe, drawdown
    /// (default: metrics.enabled from config)
    #[arg(long)]
    pub metrics: Option<String>,

    /// Output CSV file path
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Runs the indicators command.
///
/// # Errors
/// Returns an error if a name is unknown, the prices cannot be loaded, or
/// the output cannot be written.
pub fn run_indicators(args: IndicatorsArgs, config: &AppConfig) -> Result<()> {
    let indicator_names = args
        .indicators
        .as_deref()
        .map(split_list)
        .unwrap_or_else(|| config.indicators.enabled.clone());
    let metric_names = args
        .metrics
        .as_deref()
        .map(split_list)
        .unwrap_or_else(|| config.metrics.enabled.clone());

    let indicators = parse_indicators(&indicator_names)?;
    let metrics = parse_metrics(&metric_names)?;

    let bars = match &args.prices {
        Some(path) => {
            let symbol = args
                .symbol
                .clone()
                .or_else(|| symbol_from_path(path))
                .ok_or_else(|| {
                    anyhow!("Cannot infer ticker from {}; pass --symbol", path.display())
                })?;
            load_prices(path, &symbol)
                .with_context(|| format!("Failed to load prices from {}", path.display()))?
        }
        None => {
            let mut data = config.data.clone();
            if let Some(dir) = &args.price_dir {
                data.price_dir = Some(dir.clone());
            }
            PriceDirectory::from_config(&data)
                .context("Price source must be set via --prices, --price-dir or data.price_dir")?
                .load(args.symbol.as_deref())?
        }
    };

    tracing::info!(
        indicators = indicators.len(),
        metrics = metrics.len(),
        rows = bars.len(),
        "computing derived columns"
    );

    let mut table = add_technical_indicators(&bars, &indicators, &config.indicators);
    table.extend(add_financial_metrics(&bars, &metrics, &config.metrics));

    CsvStorage::write_series_table(&args.output, &bars, &table)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!(
        "Wrote {} rows with columns [{}] to {}",
        bars.len(),
        table.names().collect::<Vec<_>>().join(", "),
        args.output.display()
    );

    Ok(())
}
