//! Market data boundary: price series, sources and a time-bounded fetch
//!
//! Nothing in the calculation core depends on this module. Callers render
//! [`MarketSnapshot::Unavailable`] as a neutral message.

mod series;
mod source;
mod fetch;

pub use series::{PricePoint, PriceSeries};
pub use source::{CsvPriceSource, MarketDataSource, StaticPriceSource};
pub use fetch::{fetch_bounded, fetch_with_timeout, MarketSnapshot, DEFAULT_FETCH_TIMEOUT, NO_DATA_MESSAGE};
