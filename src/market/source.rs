//! Market data sources

use super::series::PriceSeries;
use crate::error::{AdvisorError, Result};
use std::collections::HashMap;
use std::fs::File;
use std::path::PathBuf;

/// Anything that can return a closing-price history for a symbol
pub trait MarketDataSource: Send + Sync {
    fn fetch(&self, symbol: &str) -> Result<PriceSeries>;
}

/// Price history read from a local `Date,Close` CSV export
#[derive(Debug, Clone)]
pub struct CsvPriceSource {
    path: PathBuf,
}

impl CsvPriceSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MarketDataSource for CsvPriceSource {
    fn fetch(&self, symbol: &str) -> Result<PriceSeries> {
        let file = File::open(&self.path).map_err(|e| {
            AdvisorError::MarketData(format!("{}: {}", self.path.display(), e))
        })?;
        let series = PriceSeries::from_csv_reader(symbol, file)?;
        log::debug!(
            "Read {} closes for {} from {}",
            series.points.len(),
            symbol,
            self.path.display()
        );
        Ok(series)
    }
}

/// In-memory series keyed by symbol
#[derive(Debug, Clone, Default)]
pub struct StaticPriceSource {
    series: HashMap<String, PriceSeries>,
}

impl StaticPriceSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, series: PriceSeries) -> Self {
        self.series.insert(series.symbol.clone(), series);
        self
    }
}

impl MarketDataSource for StaticPriceSource {
    fn fetch(&self, symbol: &str) -> Result<PriceSeries> {
        self.series
            .get(symbol)
            .cloned()
            .ok_or_else(|| AdvisorError::MarketData(format!("no data for {}", symbol)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::PricePoint;
    use chrono::NaiveDate;

    #[test]
    fn test_static_source_lookup() {
        let series = PriceSeries::new(
            "ABC",
            vec![PricePoint {
                date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
                close: 10.0,
            }],
        );
        let source = StaticPriceSource::new().with_series(series.clone());
        assert_eq!(source.fetch("ABC").unwrap(), series);
        assert!(matches!(source.fetch("XYZ"), Err(AdvisorError::MarketData(_))));
    }

    #[test]
    fn test_csv_source_missing_file() {
        let source = CsvPriceSource::new("no/such/prices.csv");
        assert!(matches!(source.fetch("ABC"), Err(AdvisorError::MarketData(_))));
    }

    #[test]
    fn test_csv_source_reads_sample() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/samples/niftybees.csv");
        let series = CsvPriceSource::new(path).fetch("NIFTYBEES.NS").unwrap();
        assert_eq!(series.symbol, "NIFTYBEES.NS");
        assert_eq!(series.points.len(), 21);
        assert_eq!(series.latest().unwrap().close, 282.69);
    }
}
