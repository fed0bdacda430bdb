//! Minimal C ABI over the slice-level indicator functions.
//!
//! Every call takes an input pointer/length pair and caller-owned output
//! buffers of the same length. Undefined positions are written as NaN.
//! Input and output buffers must not overlap.

use std::os::raw::c_int;

use tracing::debug;

use crate::config::{BollingerConfig, MacdConfig, PsarConfig};
use crate::error::IndicatorError;
use crate::indicators::{bollinger_values, ema_values, macd_values, psar_values, sma_values};

pub const TABOARD_OK: c_int = 0;
pub const TABOARD_ERR_NULL: c_int = -1;
pub const TABOARD_ERR_EMPTY: c_int = -2;
pub const TABOARD_ERR_CONFIG: c_int = -3;
pub const TABOARD_ERR_SERIES: c_int = -4;

type FfiResult<T> = Result<T, c_int>;

unsafe fn input<'a>(ptr: *const f64, len: usize) -> FfiResult<&'a [f64]> {
    if len == 0 {
        return Err(TABOARD_ERR_EMPTY);
    }
    if ptr.is_null() {
        return Err(TABOARD_ERR_NULL);
    }
    Ok(core::slice::from_raw_parts(ptr, len))
}

unsafe fn output<'a>(ptr: *mut f64, len: usize) -> FfiResult<&'a mut [f64]> {
    if ptr.is_null() {
        return Err(TABOARD_ERR_NULL);
    }
    Ok(core::slice::from_raw_parts_mut(ptr, len))
}

fn status(err: IndicatorError) -> c_int {
    debug!(error = %err, "ffi call rejected");
    match err {
        IndicatorError::EmptyInput(_) => TABOARD_ERR_EMPTY,
        IndicatorError::InvalidConfig { .. } => TABOARD_ERR_CONFIG,
        _ => TABOARD_ERR_SERIES,
    }
}

fn write_nan(dst: &mut [f64], src: &[Option<f64>]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d = s.unwrap_or(f64::NAN);
    }
}

fn run(f: impl FnOnce() -> FfiResult<()>) -> c_int {
    match f() {
        Ok(()) => TABOARD_OK,
        Err(code) => code,
    }
}

/// # Safety
/// `values` must point to `len` readable doubles and `out` to `len` writable ones.
#[no_mangle]
pub unsafe extern "C" fn taboard_sma(
    values: *const f64,
    len: usize,
    window: usize,
    out: *mut f64,
) -> c_int {
    run(|| {
        let values = input(values, len)?;
        let out = output(out, len)?;
        let res = sma_values(values, window).map_err(status)?;
        write_nan(out, &res);
        Ok(())
    })
}

/// # Safety
/// Same contract as [`taboard_sma`].
#[no_mangle]
pub unsafe extern "C" fn taboard_ema(
    values: *const f64,
    len: usize,
    window: usize,
    out: *mut f64,
) -> c_int {
    run(|| {
        let values = input(values, len)?;
        let out = output(out, len)?;
        let res = ema_values(values, window).map_err(status)?;
        write_nan(out, &res);
        Ok(())
    })
}

/// # Safety
/// `values` must point to `len` readable doubles; each output pointer to `len`
/// writable ones.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn taboard_macd(
    values: *const f64,
    len: usize,
    fast: usize,
    slow: usize,
    signal: usize,
    out_macd: *mut f64,
    out_signal: *mut f64,
    out_histogram: *mut f64,
) -> c_int {
    run(|| {
        let values = input(values, len)?;
        let out_macd = output(out_macd, len)?;
        let out_signal = output(out_signal, len)?;
        let out_histogram = output(out_histogram, len)?;
        let lines = macd_values(values, MacdConfig { fast, slow, signal }).map_err(status)?;
        write_nan(out_macd, &lines.macd);
        write_nan(out_signal, &lines.signal);
        write_nan(out_histogram, &lines.histogram);
        Ok(())
    })
}

/// # Safety
/// `high` must point to `len` readable doubles and `out` to `len` writable ones.
#[no_mangle]
pub unsafe extern "C" fn taboard_psar(
    high: *const f64,
    len: usize,
    af: f64,
    af_max: f64,
    out: *mut f64,
) -> c_int {
    run(|| {
        let high = input(high, len)?;
        let out = output(out, len)?;
        let res = psar_values(high, PsarConfig { af, af_max }).map_err(status)?;
        out.copy_from_slice(&res);
        Ok(())
    })
}

/// # Safety
/// `values` must point to `len` readable doubles; both outputs to `len`
/// writable ones.
#[no_mangle]
pub unsafe extern "C" fn taboard_bollinger(
    values: *const f64,
    len: usize,
    window: usize,
    k: f64,
    out_upper: *mut f64,
    out_lower: *mut f64,
) -> c_int {
    run(|| {
        let values = input(values, len)?;
        let out_upper = output(out_upper, len)?;
        let out_lower = output(out_lower, len)?;
        let bands = bollinger_values(values, BollingerConfig { window, k }).map_err(status)?;
        write_nan(out_upper, &bands.upper);
        write_nan(out_lower, &bands.lower);
        Ok(())
    })
}
