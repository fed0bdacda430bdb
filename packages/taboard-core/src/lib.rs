//! taboard-core: technical-analysis indicators over daily price series.
//!
//! SMA, EMA, MACD, Parabolic SAR and Bollinger bands as pure functions over
//! an ordered series. Warm-up positions are `None`, never zero. Fetching
//! prices and drawing charts are left to the caller.

pub mod config;
pub mod error;
pub mod frame;
pub mod indicators;
pub mod report;
pub mod series;

pub mod ffi;

pub use config::{BollingerConfig, IndicatorConfig, MacdConfig, PsarConfig};
pub use error::{IndicatorError, Result};
pub use frame::PriceFrame;
pub use indicators::{
    bollinger, bollinger_values, ema, ema_over_defined, ema_values, macd, macd_values, psar,
    psar_values, sma, sma_values, Bands, MacdLines,
};
pub use report::{IndicatorReport, ReportRow};
pub use series::{DerivedSeries, PriceSeries};
