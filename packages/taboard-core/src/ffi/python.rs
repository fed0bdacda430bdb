use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::{BollingerConfig, MacdConfig, PsarConfig};
use crate::error::IndicatorError;
use crate::indicators;

fn to_py_err(e: IndicatorError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn to_vec(arr: &PyReadonlyArray1<'_, f64>) -> Vec<f64> {
    arr.as_array().iter().copied().collect()
}

fn nan_array(py: Python<'_>, values: Vec<Option<f64>>) -> Bound<'_, PyArray1<f64>> {
    values
        .into_iter()
        .map(|v| v.unwrap_or(f64::NAN))
        .collect::<Vec<f64>>()
        .into_pyarray_bound(py)
}

#[pyfunction]
fn sma<'py>(
    py: Python<'py>,
    close: PyReadonlyArray1<'py, f64>,
    window: usize,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let out = indicators::sma_values(&to_vec(&close), window).map_err(to_py_err)?;
    Ok(nan_array(py, out))
}

#[pyfunction]
fn ema<'py>(
    py: Python<'py>,
    close: PyReadonlyArray1<'py, f64>,
    window: usize,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let out = indicators::ema_values(&to_vec(&close), window).map_err(to_py_err)?;
    Ok(nan_array(py, out))
}

#[pyfunction]
#[pyo3(signature = (close, fast = 12, slow = 26, signal = 9))]
#[allow(clippy::type_complexity)]
fn macd<'py>(
    py: Python<'py>,
    close: PyReadonlyArray1<'py, f64>,
    fast: usize,
    slow: usize,
    signal: usize,
) -> PyResult<(
    Bound<'py, PyArray1<f64>>,
    Bound<'py, PyArray1<f64>>,
    Bound<'py, PyArray1<f64>>,
)> {
    let lines = indicators::macd_values(&to_vec(&close), MacdConfig { fast, slow, signal })
        .map_err(to_py_err)?;
    Ok((
        nan_array(py, lines.macd),
        nan_array(py, lines.signal),
        nan_array(py, lines.histogram),
    ))
}

#[pyfunction]
#[pyo3(signature = (high, af = 0.02, af_max = 0.2))]
fn psar<'py>(
    py: Python<'py>,
    high: PyReadonlyArray1<'py, f64>,
    af: f64,
    af_max: f64,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let out = indicators::psar_values(&to_vec(&high), PsarConfig { af, af_max })
        .map_err(to_py_err)?;
    Ok(out.into_pyarray_bound(py))
}

#[pyfunction]
#[pyo3(signature = (close, window = 20, k = 2.0))]
fn bollinger<'py>(
    py: Python<'py>,
    close: PyReadonlyArray1<'py, f64>,
    window: usize,
    k: f64,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>)> {
    let bands = indicators::bollinger_values(&to_vec(&close), BollingerConfig { window, k })
        .map_err(to_py_err)?;
    Ok((nan_array(py, bands.upper), nan_array(py, bands.lower)))
}

#[pymodule]
fn taboard_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(sma, m)?)?;
    m.add_function(wrap_pyfunction!(ema, m)?)?;
    m.add_function(wrap_pyfunction!(macd, m)?)?;
    m.add_function(wrap_pyfunction!(psar, m)?)?;
    m.add_function(wrap_pyfunction!(bollinger, m)?)?;
    Ok(())
}
