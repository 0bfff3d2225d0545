#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

pub mod arithmetic;
pub mod curves;
pub mod template;

mod curve;
mod emit;
mod error;
mod params;

pub use crate::{
    curve::{CurveSpec, Formula, Term},
    curves::{CURVES, P256, P384, P521},
    emit::{DEFAULT_OUT_DIR, Emitter, EmitterConfig, RUSTFMT_ARGS, RUSTFMT_ENV},
    error::{Error, Result},
    params::{GeneratedParameterSet, WRAP_COLUMNS},
};
pub use num_bigint;

use std::path::PathBuf;
use tracing::info;

/// Validate and emit every curve in `curves`, in order.
///
/// Stops at the first error. Files written for earlier curves are left in
/// place.
pub fn generate(curves: &[CurveSpec], emitter: &Emitter) -> Result<Vec<PathBuf>> {
    curves
        .iter()
        .map(|curve| {
            let params = curve.validate()?;
            info!(curve = curve.name, bits = params.bits, "validated");
            emitter.emit(&params)
        })
        .collect()
}
