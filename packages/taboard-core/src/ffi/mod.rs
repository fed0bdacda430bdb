//! FFI module.
//!
//! - `c`: minimal C ABI (stable surface for other languages)
//! - `python`: PyO3 extension module (feature: `ffi-python`)

pub mod c;

#[cfg(feature = "ffi-python")]
pub mod python;
