pub mod config;
pub mod config_loader;
pub mod models;
pub mod serde_nan;
pub mod series;

pub use config::{AnalysisConfig, AppConfig, DataConfig, IndicatorConfig, MetricsConfig};
pub use config_loader::ConfigLoader;
pub use models::{
    AlignedObservation, AlignedRow, CorrelationResult, DailyReturn, DailySentiment, NewsRecord,
    PriceBar,
};
pub use series::{SeriesColumn, SeriesTable};
