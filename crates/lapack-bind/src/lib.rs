//! Typed bindings over LAPACK's symmetric equilibration and factor/solve
//! routines.
//!
//! Callers work with slices, `i64` sizes and [`Uplo`]; the layer checks that
//! every size fits the native integer width, translates options to their
//! character codes, allocates the workspace, calls the native routine and
//! maps its status. A negative status is an [`Error::IllegalArgument`]; a
//! positive one is returned as `Ok(info)` because it describes the data
//! (an indefinite minor, a zero row, a singular factor).
//!
//! All operations are generic over [`Scalar`] (`f32`, `f64`, `Complex32`,
//! `Complex64`) and available both as [`Lapack`] methods and as free
//! functions over [`DefaultBackend`].
//!
//! ```
//! use lapack_bind::{Uplo, potrf, potrs};
//!
//! let mut a = vec![4.0f64, 2.0, 2.0, 5.0];
//! let mut b = vec![6.0, 7.0];
//! assert_eq!(potrf(Uplo::Lower, 2, &mut a, 2)?, 0);
//! assert_eq!(potrs(Uplo::Lower, 2, 1, &a, 2, &mut b, 2)?, 0);
//! assert!((b[0] - 1.0).abs() < 1e-12 && (b[1] - 1.0).abs() < 1e-12);
//! # Ok::<(), lapack_bind::Error>(())
//! ```

pub mod api;
pub mod backend;
pub mod config;
pub mod dense;
mod dims;
pub mod error;
pub mod ops;
pub mod options;
pub mod scalar;
pub mod workspace;

pub use api::{posv, potrf, potrs, syequb, sysv_aa, sytrf_aa, sytrs_aa};
#[cfg(feature = "fortran")]
pub use backend::FortranBackend;
pub use backend::{
    AnyBackend, Backend, DefaultBackend, NativeRoutines, ReferenceBackend, default_backend,
};
pub use config::{BackendKind, BindingConfig};
pub use dense::{AasenFactor, Equilibration};
pub use error::{Error, Result};
pub use ops::Lapack;
pub use options::Uplo;
pub use scalar::{RealOf, Scalar};

pub use lapack_abi::{BlasInt, Routine, ScalarKind, Symbol};
pub use num_complex::{Complex32, Complex64};
