//! Return and risk metrics over a close-price series.
//!
//! Every series function returns one value per input bar, NaN where the
//! metric is undefined.

mod returns;
mod risk;
mod table;

pub use returns::{daily_return_records, daily_returns};
pub use risk::{drawdown, max_drawdown, rolling_sharpe, rolling_volatility, TRADING_DAYS};
pub use table::{add_financial_metrics, parse_metrics, Metric};
