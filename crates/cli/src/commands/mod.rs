//! CLI commands for the news sentiment analyzer.

pub mod analyze;
pub mod indicators;
pub mod score;

pub use analyze::{run_analyze, AnalyzeArgs};
pub use indicators::{run_indicators, IndicatorsArgs};
pub use score::{run_score, ScoreArgs};

use std::path::Path;

use anyhow::{anyhow, Result};

/// Output format for reports printed to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Parses an output format from string.
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!(
                "Unknown format: '{}'. Valid formats: text, json",
                s
            )),
        }
    }
}

/// Ticker implied by a price file name: `TSLA_historical_data.csv` -> `TSLA`.
pub(crate) fn symbol_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .and_then(|s| s.split('_').next())
        .filter(|s| !s.is_empty())
        .map(str::to_uppercase)
}

/// Splits a comma-separated list, dropping blanks.
pub(crate) fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
