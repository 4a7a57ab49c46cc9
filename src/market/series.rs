//! Daily closing-price series

use crate::error::{AdvisorError, Result};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Closing price on one trading day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Close")]
    pub close: f64,
}

/// Closing prices for one symbol, sorted by date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub symbol: String,
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series, sorting points by date
    pub fn new(symbol: impl Into<String>, mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        Self {
            symbol: symbol.into(),
            points,
        }
    }

    /// Parse `Date,Close` CSV rows with ISO dates. Rows with a non-finite
    /// close are rejected.
    pub fn from_csv_reader<R: Read>(symbol: impl Into<String>, reader: R) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(reader);
        let mut points = Vec::new();

        for result in reader.deserialize() {
            let point: PricePoint = result?;
            if !point.close.is_finite() {
                return Err(AdvisorError::Parse(format!(
                    "non-finite close on {}",
                    point.date
                )));
            }
            points.push(point);
        }

        Ok(Self::new(symbol, points))
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn latest(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Points within `days` calendar days of the latest point
    pub fn trailing(&self, days: i64) -> PriceSeries {
        let points = match self.latest() {
            Some(last) => {
                let cutoff = last.date - Duration::days(days);
                self.points.iter().copied().filter(|p| p.date >= cutoff).collect()
            }
            None => Vec::new(),
        };
        PriceSeries {
            symbol: self.symbol.clone(),
            points,
        }
    }

    /// Percent change from first to last close
    pub fn change_percent(&self) -> Option<f64> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        if first.close == 0.0 {
            return None;
        }
        Some((last.close / first.close - 1.0) * 100.0)
    }
}
