//! Indicator parameters.
//!
//! Every section has the conventional defaults, so a partial JSON document
//! (or `{}`) is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};

/// Full parameter set for one report run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub sma_window: usize,
    pub ema_window: usize,
    pub macd: MacdConfig,
    pub psar: PsarConfig,
    pub bollinger: BollingerConfig,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            sma_window: 20,
            ema_window: 20,
            macd: MacdConfig::default(),
            psar: PsarConfig::default(),
            bollinger: BollingerConfig::default(),
        }
    }
}

impl IndicatorConfig {
    /// Parses and validates a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        validate_window("sma_window", self.sma_window)?;
        validate_window("ema_window", self.ema_window)?;
        self.macd.validate()?;
        self.psar.validate()?;
        self.bollinger.validate()
    }
}

/// MACD windows (fast EMA, slow EMA, signal EMA of the MACD line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacdConfig {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

impl Default for MacdConfig {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }
}

impl MacdConfig {
    pub fn validate(&self) -> Result<()> {
        validate_window("macd.fast", self.fast)?;
        validate_window("macd.slow", self.slow)?;
        validate_window("macd.signal", self.signal)
    }
}

/// Parabolic SAR acceleration factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PsarConfig {
    /// Initial (and reset) acceleration factor.
    pub af: f64,
    /// Cap applied when the factor doubles on a reversal.
    pub af_max: f64,
}

impl Default for PsarConfig {
    fn default() -> Self {
        Self {
            af: 0.02,
            af_max: 0.2,
        }
    }
}

impl PsarConfig {
    /// `af` must lie in `(0, af_max]`.
    pub fn validate(&self) -> Result<()> {
        if !self.af_max.is_finite() || self.af_max <= 0.0 {
            return Err(IndicatorError::invalid_config(
                "psar.af_max",
                format!("must be a positive finite number, got {}", self.af_max),
            ));
        }
        if !self.af.is_finite() || self.af <= 0.0 || self.af > self.af_max {
            return Err(IndicatorError::invalid_config(
                "psar.af",
                format!("must lie in (0, {}], got {}", self.af_max, self.af),
            ));
        }
        Ok(())
    }
}

/// Bollinger band window and width in standard deviations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BollingerConfig {
    pub window: usize,
    pub k: f64,
}

impl Default for BollingerConfig {
    fn default() -> Self {
        Self { window: 20, k: 2.0 }
    }
}

impl BollingerConfig {
    pub fn validate(&self) -> Result<()> {
        // sample std needs two observations
        if self.window < 2 {
            return Err(IndicatorError::invalid_config(
                "bollinger.window",
                format!("must be >= 2, got {}", self.window),
            ));
        }
        if !self.k.is_finite() || self.k < 0.0 {
            return Err(IndicatorError::invalid_config(
                "bollinger.k",
                format!("must be a non-negative finite number, got {}", self.k),
            ));
        }
        Ok(())
    }
}

pub(crate) fn validate_window(param: &'static str, window: usize) -> Result<()> {
    if window == 0 {
        return Err(IndicatorError::invalid_config(param, format!("must be >= 1, got {window}")));
    }
    Ok(())
}
