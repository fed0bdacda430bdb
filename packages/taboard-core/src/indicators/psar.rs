//! 抛物线转向 (PSAR), 仅使用最高价
//!
//! 不是经典的多空双向 SAR: 相邻两个最高价穿越上一个 SAR 视为反转,
//! 且 SAR 逐步只升不降。

use tracing::debug;

use crate::config::PsarConfig;
use crate::error::{IndicatorError, Result};
use crate::series::{ensure_finite, DerivedSeries, PriceSeries};

pub fn psar(high: &PriceSeries, cfg: PsarConfig) -> Result<DerivedSeries> {
    let values = psar_values(high.values(), cfg)?;
    Ok(DerivedSeries::aligned_to(
        high,
        values.into_iter().map(Some).collect(),
    ))
}

/// 每个位置都有值, 第一个等于 `high[0]`
pub fn psar_values(high: &[f64], cfg: PsarConfig) -> Result<Vec<f64>> {
    cfg.validate()?;
    let Some(&first) = high.first() else {
        return Err(IndicatorError::EmptyInput("psar"));
    };
    ensure_finite(high)?;

    let mut state = SarState::seed(first, cfg.af);
    let mut out = Vec::with_capacity(high.len());
    out.push(state.sar);
    let mut reversals = 0usize;
    for w in high.windows(2) {
        if state.advance(w[0], w[1], cfg) {
            reversals += 1;
        }
        out.push(state.sar);
    }

    debug!(len = high.len(), reversals, "psar computed");
    Ok(out)
}

/// 递推状态, 每次调用重新初始化
#[derive(Debug, Clone, Copy)]
struct SarState {
    sar: f64,
    extreme: f64,
    step: f64,
}

impl SarState {
    fn seed(high: f64, af: f64) -> Self {
        Self {
            sar: high,
            extreme: high,
            step: af,
        }
    }

    /// 前进一步, 返回是否发生反转
    fn advance(&mut self, prev_high: f64, high: f64, cfg: PsarConfig) -> bool {
        let prev_sar = self.sar;
        if high > self.extreme {
            self.extreme = high;
        }

        let candidate = prev_sar + self.step * (self.extreme - prev_sar);

        let reversed = (prev_high < prev_sar && high > prev_sar)
            || (prev_high > prev_sar && high < prev_sar);
        if reversed {
            self.step = cfg.af_max.min(self.step * 2.0);
            self.extreme = self.extreme.min(high);
        }

        self.sar = candidate.max(prev_sar);
        if self.extreme == self.sar {
            self.step = cfg.af;
        }
        reversed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(high: &[f64]) -> Vec<f64> {
        psar_values(high, PsarConfig::default()).unwrap()
    }

    fn assert_seq(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            assert!((a - e).abs() < 1e-12, "psar[{i}] = {a}, expected {e}");
        }
    }

    #[test]
    fn uptrend_without_reversal() {
        let out = run(&[10.0, 10.5, 10.2, 11.0, 11.5]);
        assert_seq(&out, &[10.0, 10.01, 10.0198, 10.039404, 10.06861592]);
    }

    #[test]
    fn reversals_double_the_step_up_to_cap() {
        let out = run(&[10.0, 9.0, 11.0, 8.0, 12.0, 7.0, 13.0]);
        assert_seq(
            &out,
            &[
                10.0,
                10.0,
                10.02,
                10.0592,
                10.214464,
                10.50014976,
                10.50014976 + 0.2 * (13.0 - 10.50014976),
            ],
        );
    }

    #[test]
    fn floor_holds_when_extreme_drops_below_sar() {
        let out = run(&[10.0, 9.0, 11.0, 8.0, 12.0, 7.0, 6.0]);
        assert_eq!(out[6], out[5]);
    }

    #[test]
    fn never_decreases_step_to_step() {
        let high: Vec<f64> = (0..200)
            .map(|i| 50.0 + (i as f64 * 0.7).sin() * 8.0 + (i as f64 * 0.13).cos() * 3.0)
            .collect();
        let out = run(&high);
        assert_eq!(out.len(), high.len());
        assert_eq!(out[0], high[0]);
        for w in out.windows(2) {
            assert!(w[1] >= w[0]);
        }
    }

    #[test]
    fn constant_series_stays_constant() {
        let out = run(&[100.0; 30]);
        assert!(out.iter().all(|v| *v == 100.0));
    }

    #[test]
    fn single_observation_seeds_output() {
        assert_eq!(run(&[42.0]), vec![42.0]);
    }

    #[test]
    fn extreme_touching_sar_resets_step() {
        let cfg = PsarConfig::default();
        let mut state = SarState::seed(10.0, cfg.af);
        state.step = 0.16;
        // high below extreme, extreme equals sar after the floor
        assert!(!state.advance(10.0, 9.0, cfg));
        assert_eq!(state.sar, 10.0);
        assert_eq!(state.step, cfg.af);
    }

    #[test]
    fn identical_inputs_give_bit_identical_output() {
        let high = [10.0, 9.5, 11.2, 10.8, 12.4, 9.9, 13.1, 12.7];
        let a = run(&high);
        let b = run(&high);
        let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn rejects_non_finite_highs() {
        assert!(matches!(
            psar_values(&[10.0, f64::NAN, 11.0], PsarConfig::default()),
            Err(IndicatorError::InvalidSeries(_))
        ));
    }

    #[test]
    fn rejects_empty_input_and_bad_factors() {
        assert!(matches!(
            psar_values(&[], PsarConfig::default()),
            Err(IndicatorError::EmptyInput("psar"))
        ));
        let bad = PsarConfig { af: 0.5, af_max: 0.2 };
        assert!(matches!(
            psar_values(&[1.0, 2.0], bad),
            Err(IndicatorError::InvalidConfig { .. })
        ));
    }
}
