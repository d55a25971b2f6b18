use std::path::Path;

use crate::config::AppConfig;
use anyhow::{bail, Result};
use figment::{
    providers::{Env, Format, Json, Toml},
    Figment,
};

const ENV_PREFIX: &str = "NEWS_ALPHA_";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from `config/Config.toml`, `config/Config.json`,
    /// and `NEWS_ALPHA_*` environment variables. Missing files fall back to
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration source cannot be parsed or a
    /// value is out of range.
    pub fn load() -> Result<AppConfig> {
        Self::load_from("config/Config.toml")
    }

    /// Loads configuration from a specific TOML file merged with the
    /// environment. Nested keys use `__`, e.g. `NEWS_ALPHA_ANALYSIS__SYMBOL`.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration source cannot be parsed or a
    /// value is out of range.
    pub fn load_from(path: impl AsRef<Path>) -> Result<AppConfig> {
        let config: AppConfig = Figment::new()
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .join(Json::file("config/Config.json"))
            .extract()?;

        Self::validate(&config)?;
        tracing::debug!(path = %path.as_ref().display(), "configuration loaded");
        Ok(config)
    }

    fn validate(config: &AppConfig) -> Result<()> {
        let ind = &config.indicators;
        let met = &config.metrics;
        let windows = [
            ("indicators.rsi_period", ind.rsi_period),
            ("indicators.macd_fast", ind.macd_fast),
            ("indicators.macd_slow", ind.macd_slow),
            ("indicators.macd_signal", ind.macd_signal),
            ("indicators.bollinger_period", ind.bollinger_period),
            ("metrics.volatility_window", met.volatility_window),
            ("metrics.sharpe_window", met.sharpe_window),
        ];
        for (key, value) in windows {
            if value == 0 {
                bail!("{key} must be greater than zero");
            }
        }
        if !config.data.price_file_pattern.contains("{symbol}") {
            bail!(
                "data.price_file_pattern must contain '{{symbol}}', got '{}'",
                config.data.price_file_pattern
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_apply_without_files() {
        Jail::expect_with(|_jail| {
            let config = ConfigLoader::load_from("missing.toml").map_err(|e| e.to_string())?;
            assert_eq!(config.indicators.rsi_period, 14);
            assert_eq!(config.metrics.volatility_window, 30);
            assert_eq!(config.data.price_file_pattern, "{symbol}_historical_data.csv");
            assert!(config.analysis.symbol.is_none());
            Ok(())
        });
    }

    #[test]
    fn toml_and_env_override_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "Config.toml",
                r#"
                [metrics]
                risk_free_rate = 0.05
                enabled = ["returns", "sharpe"]

                [indicators]
                rsi_period = 10
                "#,
            )?;
            jail.set_env("NEWS_ALPHA_ANALYSIS__SYMBOL", "NVDA");

            let config = ConfigLoader::load_from("Config.toml").map_err(|e| e.to_string())?;
            assert!((config.metrics.risk_free_rate - 0.05).abs() < 1e-12);
            assert_eq!(config.metrics.enabled, vec!["returns", "sharpe"]);
            assert_eq!(config.metrics.sharpe_window, 252);
            assert_eq!(config.indicators.rsi_period, 10);
            assert_eq!(config.analysis.symbol.as_deref(), Some("NVDA"));
            Ok(())
        });
    }

    #[test]
    fn zero_window_is_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("Config.toml", "[metrics]\nvolatility_window = 0\n")?;
            let err = ConfigLoader::load_from("Config.toml").unwrap_err();
            assert!(err.to_string().contains("metrics.volatility_window"));
            Ok(())
        });
    }

    #[test]
    fn pattern_without_placeholder_is_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("Config.toml", "[data]\nprice_file_pattern = \"prices.csv\"\n")?;
            assert!(ConfigLoader::load_from("Config.toml").is_err());
            Ok(())
        });
    }
}
