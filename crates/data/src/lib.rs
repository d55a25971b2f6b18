//! Loader collaborators: read news and price CSVs into typed tables and
//! write derived tables back out.

pub mod csv_storage;
pub mod dates;
pub mod directory;
pub mod error;
pub mod news;
pub mod prices;

pub use csv_storage::CsvStorage;
pub use directory::PriceDirectory;
pub use error::{DataError, Result};
pub use news::load_news;
pub use prices::load_prices;
