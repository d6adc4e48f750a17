//! Native side of the LAPACK binding layer.
//!
//! This crate provides:
//! - the native integer width (`BlasInt`) and checked narrowing from `i64`
//! - Fortran symbol naming for every (routine, scalar type) pair
//! - pivot array width adaptation between the caller and the library
//! - the raw `extern "C"` declarations of the wrapped routines (`fortran` feature)

mod int;
mod symbols;

#[cfg(feature = "fortran")]
pub mod ffi;

pub use int::{AbiError, BlasInt, FortranStrlen, PivotsOut, narrow, narrow_pivots};
pub use symbols::{Routine, ScalarKind, Symbol, fortran_symbol};
