//! 移动平均线指标: SMA / EMA
//!
//! SMA 使用 running_sum, O(1) 增量计算。
//! EMA 以前 `window` 个值的简单均值作为种子, 之后递推。

use tracing::debug;

use crate::config::validate_window;
use crate::error::{IndicatorError, Result};
use crate::series::{ensure_finite, DerivedSeries, PriceSeries};

pub fn sma(series: &PriceSeries, window: usize) -> Result<DerivedSeries> {
    let values = sma_values(series.values(), window)?;
    Ok(DerivedSeries::aligned_to(series, values))
}

/// 简单移动平均
///
/// 前 `window - 1` 个位置为 `None`; 窗口大于序列长度时全部为 `None`。
pub fn sma_values(values: &[f64], window: usize) -> Result<Vec<Option<f64>>> {
    validate_window("window", window)?;
    if values.is_empty() {
        return Err(IndicatorError::EmptyInput("sma"));
    }
    ensure_finite(values)?;

    let mut out = vec![None; values.len()];
    if window > values.len() {
        debug!(window, len = values.len(), "sma: window exceeds series, output undefined");
        return Ok(out);
    }

    let n = window as f64;
    let mut sum = 0.0;
    for (i, &v) in values.iter().enumerate() {
        sum += v;
        if i >= window {
            sum -= values[i - window];
        }
        if i + 1 >= window {
            out[i] = Some(sum / n);
        }
    }
    Ok(out)
}

pub fn ema(series: &PriceSeries, window: usize) -> Result<DerivedSeries> {
    let values = ema_values(series.values(), window)?;
    Ok(DerivedSeries::aligned_to(series, values))
}

/// 指数移动平均, `alpha = 2 / (window + 1)`
///
/// 第一个有效值在 `window - 1`, 等于前 `window` 个值的均值。
/// `window >= values.len()` 时全部为 `None`。
pub fn ema_values(values: &[f64], window: usize) -> Result<Vec<Option<f64>>> {
    let wrapped: Vec<Option<f64>> = values.iter().copied().map(Some).collect();
    ema_over_defined(&wrapped, window)
}

/// 跳过 `None` 的 EMA
///
/// `None` 输入不计入预热, 也不推进递推, 对应输出为 `None`。
/// 有效输入个数必须大于 `window`, 否则全部为 `None`。
pub fn ema_over_defined(values: &[Option<f64>], window: usize) -> Result<Vec<Option<f64>>> {
    validate_window("window", window)?;
    if values.is_empty() {
        return Err(IndicatorError::EmptyInput("ema"));
    }
    if let Some(pos) = values.iter().position(|v| v.is_some_and(|v| !v.is_finite())) {
        return Err(IndicatorError::invalid_series(format!(
            "non-finite observation at position {pos}"
        )));
    }

    let mut out = vec![None; values.len()];
    let defined = values.iter().flatten().count();
    if window >= defined {
        debug!(window, defined, "ema: not enough observations, output undefined");
        return Ok(out);
    }

    let alpha = ema_alpha(window);
    let mut seen = 0usize;
    let mut seed_sum = 0.0;
    let mut prev = f64::NAN;
    for (slot, v) in out.iter_mut().zip(values) {
        let Some(v) = *v else { continue };
        seen += 1;
        if seen < window {
            seed_sum += v;
            continue;
        }
        prev = if seen == window {
            (seed_sum + v) / window as f64
        } else {
            prev + alpha * (v - prev)
        };
        *slot = Some(prev);
    }
    Ok(out)
}

pub fn ema_alpha(window: usize) -> f64 {
    2.0 / (window as f64 + 1.0)
}
