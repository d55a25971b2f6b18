//! Per-symbol price files laid out in one directory.

use std::path::{Path, PathBuf};

use news_alpha_core::{DataConfig, PriceBar};
use tracing::warn;

use crate::error::{DataError, Result};
use crate::prices::load_prices;

const DEFAULT_PATTERN: &str = "{symbol}_historical_data.csv";

/// A directory of price CSVs, one file per ticker.
#[derive(Debug, Clone)]
pub struct PriceDirectory {
    dir: PathBuf,
    file_pattern: String,
}

impl PriceDirectory {
    /// Uses the default `{symbol}_historical_data.csv` naming.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            file_pattern: DEFAULT_PATTERN.to_string(),
        }
    }

    /// Builder method to set the file name pattern; `{symbol}` is replaced
    /// by the ticker.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.file_pattern = pattern.into();
        self
    }

    /// Builds a directory from configuration.
    ///
    /// # Errors
    ///
    /// Returns `MissingConfiguration` if `data.price_dir` is unset.
    pub fn from_config(config: &DataConfig) -> Result<Self> {
        let dir = config.price_dir.clone().ok_or_else(|| {
            DataError::MissingConfiguration("data.price_dir is not set".to_string())
        })?;
        Ok(Self::new(dir).with_pattern(config.price_file_pattern.clone()))
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `symbol`'s bars.
    #[must_use]
    pub fn path_for(&self, symbol: &str) -> PathBuf {
        self.dir.join(self.file_pattern.replace("{symbol}", symbol))
    }

    /// Loads a single symbol.
    ///
    /// # Errors
    ///
    /// Returns `MissingConfiguration` when `symbol` is `None` or blank,
    /// `FileNotFound` when the symbol has no file, and any parse error from
    /// the file itself.
    pub fn load(&self, symbol: Option<&str>) -> Result<Vec<PriceBar>> {
        let symbol = symbol.map(str::trim).filter(|s| !s.is_empty()).ok_or_else(|| {
            DataError::MissingConfiguration(
                "a symbol is required to load prices from a directory".to_string(),
            )
        })?;
        load_prices(self.path_for(symbol), symbol)
    }

    /// Loads several symbols, skipping any whose file is missing.
    ///
    /// A missing file is logged and the batch continues; any other error is
    /// returned because it means a present file is broken.
    ///
    /// # Errors
    ///
    /// Returns the first non-`FileNotFound` error encountered.
    pub fn load_many<S: AsRef<str>>(&self, symbols: &[S]) -> Result<Vec<(String, Vec<PriceBar>)>> {
        let mut loaded = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            let symbol = symbol.as_ref();
            match self.load(Some(symbol)) {
                Ok(bars) => loaded.push((symbol.to_string(), bars)),
                Err(DataError::FileNotFound { path }) => {
                    warn!(symbol, path = %path.display(), "price file not found, skipping symbol");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(loaded)
    }
}
