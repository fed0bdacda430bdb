//! Every configured indicator over one price frame, row-aligned by date.
//!
//! The report is what the presentation layer consumes: one row per trading
//! day, `null` wherever an indicator is still warming up.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::config::IndicatorConfig;
use crate::error::{IndicatorError, Result};
use crate::frame::PriceFrame;
use crate::indicators::{bollinger_values, ema_values, macd_values, psar_values, sma_values};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub date: NaiveDate,
    pub high: f64,
    pub close: f64,
    pub sma: Option<f64>,
    pub ema: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub macd_histogram: Option<f64>,
    pub psar: f64,
    pub bollinger_upper: Option<f64>,
    pub bollinger_lower: Option<f64>,
}

impl ReportRow {
    /// True once every windowed indicator has left its warm-up.
    pub fn is_complete(&self) -> bool {
        self.sma.is_some()
            && self.ema.is_some()
            && self.macd_histogram.is_some()
            && self.bollinger_upper.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorReport {
    pub config: IndicatorConfig,
    pub rows: Vec<ReportRow>,
}

impl IndicatorReport {
    pub fn compute(frame: &PriceFrame, config: IndicatorConfig) -> Result<Self> {
        config.validate()?;
        if frame.is_empty() {
            return Err(IndicatorError::EmptyInput("report"));
        }

        let close = frame.close().values();
        let high = frame.high().values();
        let sma = sma_values(close, config.sma_window)?;
        let ema = ema_values(close, config.ema_window)?;
        let macd = macd_values(close, config.macd)?;
        let psar = psar_values(high, config.psar)?;
        let bands = bollinger_values(close, config.bollinger)?;

        let rows: Vec<ReportRow> = frame
            .index()
            .iter()
            .enumerate()
            .map(|(i, &date)| ReportRow {
                date,
                high: high[i],
                close: close[i],
                sma: sma[i],
                ema: ema[i],
                macd: macd.macd[i],
                macd_signal: macd.signal[i],
                macd_histogram: macd.histogram[i],
                psar: psar[i],
                bollinger_upper: bands.upper[i],
                bollinger_lower: bands.lower[i],
            })
            .collect();

        let report = Self { config, rows };
        debug!(
            rows = report.rows.len(),
            complete = report.complete_rows().count(),
            "indicator report computed"
        );
        Ok(report)
    }

    /// Rows where every indicator is defined; leading warm-up rows dropped.
    pub fn complete_rows(&self) -> impl Iterator<Item = &ReportRow> {
        self.rows.iter().filter(|r| r.is_complete())
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
