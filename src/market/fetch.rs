//! Time-bounded fetch that degrades to "no data" instead of failing

use super::series::{PricePoint, PriceSeries};
use super::source::MarketDataSource;
use crate::error::{AdvisorError, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Default wait for a market data source
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Message shown when no price data could be obtained
pub const NO_DATA_MESSAGE: &str = "No ETF data available at the moment.";

/// Outcome of a market data request as seen by the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MarketSnapshot {
    Available {
        symbol: String,
        latest_close: f64,
        as_of: NaiveDate,
        series: PriceSeries,
    },
    Unavailable {
        symbol: String,
        reason: String,
    },
}

impl MarketSnapshot {
    fn from_series(series: PriceSeries) -> Self {
        let latest = series.latest().copied();
        match latest {
            Some(PricePoint { date, close }) => MarketSnapshot::Available {
                symbol: series.symbol.clone(),
                latest_close: close,
                as_of: date,
                series,
            },
            None => MarketSnapshot::Unavailable {
                symbol: series.symbol,
                reason: "empty price series".to_string(),
            },
        }
    }

    fn unavailable(symbol: &str, err: &AdvisorError) -> Self {
        log::warn!("Market data for {} unavailable: {}", symbol, err);
        MarketSnapshot::Unavailable {
            symbol: symbol.to_string(),
            reason: err.to_string(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, MarketSnapshot::Available { .. })
    }
}

/// Fetch `symbol` from `source` on the blocking pool, waiting at most `timeout`.
///
/// A source that panics surfaces as [`AdvisorError::MarketData`]; an overrun
/// as [`AdvisorError::Timeout`].
pub async fn fetch_bounded(
    source: Arc<dyn MarketDataSource>,
    symbol: &str,
    timeout: Duration,
) -> Result<PriceSeries> {
    let owned_symbol = symbol.to_string();
    let task = tokio::task::spawn_blocking(move || source.fetch(&owned_symbol));

    match tokio::time::timeout(timeout, task).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_err)) => Err(AdvisorError::MarketData(format!(
            "source worker failed: {}",
            join_err
        ))),
        Err(_) => Err(AdvisorError::Timeout(timeout)),
    }
}

/// Blocking wrapper around [`fetch_bounded`] for synchronous callers.
///
/// Errors, empty series and timeouts all become
/// [`MarketSnapshot::Unavailable`]. A source that overruns keeps running on
/// the blocking pool; its result is dropped. Must not be called from inside
/// a tokio runtime.
pub fn fetch_with_timeout(
    source: Arc<dyn MarketDataSource>,
    symbol: &str,
    timeout: Duration,
) -> MarketSnapshot {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => return MarketSnapshot::unavailable(symbol, &AdvisorError::Io(e)),
    };

    let result = runtime.block_on(fetch_bounded(source, symbol, timeout));
    // Don't wait on a source that is still running past the deadline
    runtime.shutdown_background();

    match result {
        Ok(series) => MarketSnapshot::from_series(series),
        Err(err) => MarketSnapshot::unavailable(symbol, &err),
    }
}
