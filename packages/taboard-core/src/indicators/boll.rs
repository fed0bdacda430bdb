//! 布林带指标
//!
//! 以收盘价本身为中轨, `upper/lower = value ± k * std`。
//! std 为样本标准差 (n - 1), 每个窗口先求均值再求离差平方和。

use tracing::debug;

use super::Bands;
use crate::config::BollingerConfig;
use crate::error::{IndicatorError, Result};
use crate::series::{ensure_finite, DerivedSeries, PriceSeries};

pub fn bollinger(series: &PriceSeries, cfg: BollingerConfig) -> Result<Bands<DerivedSeries>> {
    Ok(bollinger_values(series.values(), cfg)?.aligned_to(series))
}

pub fn bollinger_values(values: &[f64], cfg: BollingerConfig) -> Result<Bands<Vec<Option<f64>>>> {
    cfg.validate()?;
    if values.is_empty() {
        return Err(IndicatorError::EmptyInput("bollinger"));
    }
    ensure_finite(values)?;

    let std = rolling_sample_std(values, cfg.window);
    let upper = values
        .iter()
        .zip(&std)
        .map(|(v, s)| s.map(|s| v + cfg.k * s))
        .collect();
    let lower = values
        .iter()
        .zip(&std)
        .map(|(v, s)| s.map(|s| v - cfg.k * s))
        .collect();
    Ok(Bands { upper, lower })
}

fn rolling_sample_std(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window > values.len() {
        debug!(window, len = values.len(), "bollinger: window exceeds series, output undefined");
        return out;
    }

    let n = window as f64;
    for (slot, w) in out[window - 1..].iter_mut().zip(values.windows(window)) {
        let mean = w.iter().sum::<f64>() / n;
        let m2: f64 = w.iter().map(|x| (x - mean) * (x - mean)).sum();
        *slot = Some((m2 / (n - 1.0)).sqrt());
    }
    out
}
