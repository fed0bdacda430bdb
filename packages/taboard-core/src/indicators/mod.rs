//! 技术指标模块
//!
//! 每个指标两种入口: `*_values` 作用于原始切片, 按位置返回 `Option<f64>`;
//! 另一个作用于 [`PriceSeries`], 返回带日期索引的 [`DerivedSeries`]。

pub mod boll;
pub mod ma;
pub mod macd;
pub mod psar;

pub use boll::{bollinger, bollinger_values};
pub use ma::{ema, ema_over_defined, ema_values, sma, sma_values};
pub use macd::{macd, macd_values};
pub use psar::{psar, psar_values};

use crate::series::{DerivedSeries, PriceSeries};

/// MACD 结果
#[derive(Debug, Clone, PartialEq)]
pub struct MacdLines<S> {
    pub macd: S,
    pub signal: S,
    pub histogram: S,
}

impl MacdLines<Vec<Option<f64>>> {
    pub fn aligned_to(self, source: &PriceSeries) -> MacdLines<DerivedSeries> {
        MacdLines {
            macd: DerivedSeries::aligned_to(source, self.macd),
            signal: DerivedSeries::aligned_to(source, self.signal),
            histogram: DerivedSeries::aligned_to(source, self.histogram),
        }
    }
}

/// 布林带上下轨
#[derive(Debug, Clone, PartialEq)]
pub struct Bands<S> {
    pub upper: S,
    pub lower: S,
}

impl Bands<Vec<Option<f64>>> {
    pub fn aligned_to(self, source: &PriceSeries) -> Bands<DerivedSeries> {
        Bands {
            upper: DerivedSeries::aligned_to(source, self.upper),
            lower: DerivedSeries::aligned_to(source, self.lower),
        }
    }
}

/// 逐位置合并, 任一侧为 `None` 则为 `None`
pub(crate) fn combine(
    a: &[Option<f64>],
    b: &[Option<f64>],
    f: impl Fn(f64, f64) -> f64,
) -> Vec<Option<f64>> {
    a.iter()
        .zip(b)
        .map(|(x, y)| match (x, y) {
            (Some(x), Some(y)) => Some(f(*x, *y)),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_propagates_undefined() {
        let a = [None, Some(3.0), Some(5.0)];
        let b = [Some(1.0), None, Some(2.0)];
        assert_eq!(combine(&a, &b, |x, y| x - y), vec![None, None, Some(3.0)]);
    }

    #[test]
    fn series_wrappers_keep_the_date_index() {
        let src = PriceSeries::from_values((1..=30).map(f64::from).collect()).unwrap();
        let cfg = crate::config::MacdConfig { fast: 3, slow: 5, signal: 2 };
        let lines = macd(&src, cfg).unwrap();
        assert_eq!(lines.macd.index(), src.index());
        assert_eq!(lines.histogram.len(), src.len());

        let bands = bollinger(&src, crate::config::BollingerConfig::default()).unwrap();
        assert_eq!(bands.upper.index(), src.index());
        assert_eq!(bands.upper.first_defined(), Some(19));
    }
}
