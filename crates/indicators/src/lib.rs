//! Technical indicators over a close-price series.
//!
//! Each indicator has exactly one formula. Outputs line up with the input
//! and hold NaN until the indicator's window is full.

mod bollinger;
mod macd;
mod moving_average;
mod rsi;
mod table;

pub use bollinger::{bollinger_bands, BollingerBands};
pub use macd::{macd, Macd};
pub use moving_average::{ema, sma};
pub use rsi::rsi;
pub use table::{add_technical_indicators, parse_indicators, Indicator};
