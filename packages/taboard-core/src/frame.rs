//! Provider-shaped price table: one date index, `High` and `Close` columns.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{IndicatorError, Result};
use crate::series::PriceSeries;

/// One row as emitted by the market-data provider. Extra columns are ignored.
#[derive(Debug, Deserialize)]
struct PriceRecord {
    #[serde(alias = "Date", alias = "DATE")]
    date: NaiveDate,
    #[serde(default, alias = "High", alias = "HIGH")]
    high: Option<f64>,
    #[serde(default, alias = "Close", alias = "CLOSE")]
    close: Option<f64>,
}

/// Date-indexed high and close columns sharing one index.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceFrame {
    high: PriceSeries,
    close: PriceSeries,
}

impl PriceFrame {
    pub fn new(index: Vec<NaiveDate>, high: Vec<f64>, close: Vec<f64>) -> Result<Self> {
        Ok(Self {
            high: PriceSeries::new(index.clone(), high)?,
            close: PriceSeries::new(index, close)?,
        })
    }

    /// Parses a JSON array of `{"date", "high", "close", ...}` records.
    ///
    /// Records must already be in ascending date order; the frame does not
    /// sort on the provider's behalf.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let records: Vec<PriceRecord> = serde_json::from_str(s)?;
        let mut index = Vec::with_capacity(records.len());
        let mut high = Vec::with_capacity(records.len());
        let mut close = Vec::with_capacity(records.len());
        for r in records {
            index.push(r.date);
            high.push(r.high.ok_or(IndicatorError::MissingColumn("high"))?);
            close.push(r.close.ok_or(IndicatorError::MissingColumn("close"))?);
        }
        Self::new(index, high, close)
    }

    pub fn len(&self) -> usize {
        self.close.len()
    }

    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    pub fn index(&self) -> &[NaiveDate] {
        self.close.index()
    }

    pub fn high(&self) -> &PriceSeries {
        &self.high
    }

    pub fn close(&self) -> &PriceSeries {
        &self.close
    }
}
