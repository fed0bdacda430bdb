//! Date-indexed input and output series.
//!
//! `PriceSeries` is what callers hand to the indicators; `DerivedSeries` is
//! what they get back. Both share the same index domain, so output position
//! `i` always describes the observation at input position `i`.

use chrono::NaiveDate;

use crate::error::{IndicatorError, Result};

/// Ordered, immutable price observations keyed by strictly increasing dates.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    index: Vec<NaiveDate>,
    values: Vec<f64>,
}

impl PriceSeries {
    /// Builds a series, validating length, ordering and finiteness.
    pub fn new(index: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self> {
        if index.len() != values.len() {
            return Err(IndicatorError::invalid_series(format!(
                "index has {} dates but {} values were given",
                index.len(),
                values.len()
            )));
        }
        if let Some(pos) = index.windows(2).position(|w| w[0] >= w[1]) {
            return Err(IndicatorError::invalid_series(format!(
                "dates must strictly increase: {} is followed by {}",
                index[pos],
                index[pos + 1]
            )));
        }
        if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
            return Err(IndicatorError::invalid_series(format!(
                "non-finite observation {} on {}",
                values[pos], index[pos]
            )));
        }
        Ok(Self { index, values })
    }

    /// Builds a series over consecutive days starting at 1970-01-01.
    ///
    /// For callers that only have raw values; indicator math never looks at
    /// the dates.
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        let index = NaiveDate::default()
            .iter_days()
            .take(values.len())
            .collect();
        Self::new(index, values)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn index(&self) -> &[NaiveDate] {
        &self.index
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, i: usize) -> Option<f64> {
        self.values.get(i).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.index.iter().copied().zip(self.values.iter().copied())
    }
}

/// Rejects NaN and infinities in a raw slice.
pub(crate) fn ensure_finite(values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(pos) => Err(IndicatorError::invalid_series(format!(
            "non-finite observation {} at position {pos}",
            values[pos]
        ))),
        None => Ok(()),
    }
}

/// Indicator output aligned to the source series.
///
/// Warm-up positions are `None`. Nothing is dropped; use [`DerivedSeries::dense`]
/// when only defined rows are wanted.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedSeries {
    index: Vec<NaiveDate>,
    values: Vec<Option<f64>>,
}

impl DerivedSeries {
    pub(crate) fn new(index: Vec<NaiveDate>, values: Vec<Option<f64>>) -> Self {
        debug_assert_eq!(index.len(), values.len());
        Self { index, values }
    }

    pub(crate) fn aligned_to(source: &PriceSeries, values: Vec<Option<f64>>) -> Self {
        Self::new(source.index().to_vec(), values)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn index(&self) -> &[NaiveDate] {
        &self.index
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Value at position `i`; `None` when out of range or undefined.
    pub fn get(&self, i: usize) -> Option<f64> {
        self.values.get(i).copied().flatten()
    }

    /// Position of the first defined value.
    pub fn first_defined(&self) -> Option<usize> {
        self.values.iter().position(Option::is_some)
    }

    pub fn defined_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, Option<f64>)> + '_ {
        self.index.iter().copied().zip(self.values.iter().copied())
    }

    /// Defined rows only, in index order.
    pub fn dense(&self) -> Vec<(NaiveDate, f64)> {
        self.iter().filter_map(|(d, v)| v.map(|v| (d, v))).collect()
    }

    /// Values with undefined positions written as NaN.
    pub fn to_nan_vec(&self) -> Vec<f64> {
        self.values.iter().map(|v| v.unwrap_or(f64::NAN)).collect()
    }
}
