//! MACD (移动平均收敛散度)
//!
//! MACD = EMA(fast) - EMA(slow)
//! Signal = EMA(MACD, signal), 只在有效的 MACD 值上预热
//! Histogram = MACD - Signal

use tracing::{debug, warn};

use super::ma::{ema_over_defined, ema_values};
use super::{combine, MacdLines};
use crate::config::MacdConfig;
use crate::error::{IndicatorError, Result};
use crate::series::{DerivedSeries, PriceSeries};

pub fn macd(series: &PriceSeries, cfg: MacdConfig) -> Result<MacdLines<DerivedSeries>> {
    Ok(macd_values(series.values(), cfg)?.aligned_to(series))
}

/// 三条线与输入等长, 保留前面的 `None`
pub fn macd_values(values: &[f64], cfg: MacdConfig) -> Result<MacdLines<Vec<Option<f64>>>> {
    cfg.validate()?;
    if values.is_empty() {
        return Err(IndicatorError::EmptyInput("macd"));
    }
    if cfg.fast >= cfg.slow {
        warn!(fast = cfg.fast, slow = cfg.slow, "macd: fast window is not shorter than slow window");
    }

    let fast = ema_values(values, cfg.fast)?;
    let slow = ema_values(values, cfg.slow)?;
    let macd = combine(&fast, &slow, |f, s| f - s);
    let signal = ema_over_defined(&macd, cfg.signal)?;
    let histogram = combine(&macd, &signal, |m, s| m - s);

    debug!(
        len = values.len(),
        defined = histogram.iter().flatten().count(),
        "macd computed"
    );
    Ok(MacdLines {
        macd,
        signal,
        histogram,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rising(n: usize) -> Vec<f64> {
        (0..n).map(|i| 100.0 + i as f64 * 0.5).collect()
    }

    #[test]
    fn macd_line_is_fast_minus_slow() {
        let values: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 * 0.3).sin() * 5.0).collect();
        let cfg = MacdConfig::default();
        let lines = macd_values(&values, cfg).unwrap();
        let fast = ema_values(&values, 12).unwrap();
        let slow = ema_values(&values, 26).unwrap();

        for i in 0..values.len() {
            match (fast[i], slow[i]) {
                (Some(f), Some(s)) => assert_eq!(lines.macd[i], Some(f - s)),
                _ => assert_eq!(lines.macd[i], None),
            }
        }
        assert_eq!(lines.macd.iter().position(Option::is_some), Some(25));
    }

    #[test]
    fn signal_warms_up_on_defined_macd_values() {
        let values = rising(40);
        let lines = macd_values(&values, MacdConfig::default()).unwrap();
        // MACD defined from 25, signal needs 9 of those
        assert_eq!(lines.signal.iter().position(Option::is_some), Some(33));

        let seed = lines.macd[25..34].iter().flatten().sum::<f64>() / 9.0;
        assert!((lines.signal[33].unwrap() - seed).abs() < 1e-12);
    }

    #[test]
    fn histogram_is_macd_minus_signal() {
        let values = rising(50);
        let lines = macd_values(&values, MacdConfig::default()).unwrap();
        for i in 0..values.len() {
            match (lines.macd[i], lines.signal[i]) {
                (Some(m), Some(s)) => assert_eq!(lines.histogram[i], Some(m - s)),
                _ => assert_eq!(lines.histogram[i], None),
            }
        }
    }

    #[test]
    fn uptrend_gives_positive_macd() {
        let lines = macd_values(&rising(60), MacdConfig::default()).unwrap();
        assert!(lines.macd[59].unwrap() > 0.0);
    }

    #[test]
    fn short_series_is_all_undefined() {
        let lines = macd_values(&rising(20), MacdConfig::default()).unwrap();
        assert!(lines.macd.iter().all(Option::is_none));
        assert!(lines.signal.iter().all(Option::is_none));
        assert!(lines.histogram.iter().all(Option::is_none));
    }

    #[test]
    fn small_windows_cross_over_after_reversal() {
        let prices = [
            100.0, 98.0, 96.0, 94.0, 92.0, 90.0, 92.0, 94.0, 96.0, 98.0, 100.0, 102.0, 104.0,
        ];
        let cfg = MacdConfig { fast: 3, slow: 6, signal: 3 };
        let lines = macd_values(&prices, cfg).unwrap();
        let last = prices.len() - 1;
        assert!(lines.histogram[last].unwrap() > 0.0);
    }

    #[test]
    fn rejects_zero_windows() {
        let cfg = MacdConfig { fast: 0, slow: 26, signal: 9 };
        assert!(matches!(
            macd_values(&[1.0; 40], cfg),
            Err(IndicatorError::InvalidConfig { param: "macd.fast", .. })
        ));
    }
}
