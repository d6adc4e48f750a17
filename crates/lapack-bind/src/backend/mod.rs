//! Native routine providers.
//!
//! The typed operations are written once against [`NativeRoutines`]; the
//! routines themselves come from a backend:
//!
//! - **Reference** (always built): pure-Rust routines speaking the native
//!   calling convention. Needs no system library.
//! - **Fortran** (`--features fortran`): the linked LAPACK, called through
//!   the `extern "C"` declarations of `lapack-abi`.
//!
//! [`AnyBackend`] picks one of them at runtime from a [`BindingConfig`].
//!
//! [`BindingConfig`]: crate::config::BindingConfig

#[cfg(feature = "fortran")]
pub mod fortran;
pub mod reference;
pub mod traits;

use std::ffi::c_char;

use lapack_abi::BlasInt;
use num_complex::{Complex32, Complex64};
use tracing::debug;

use crate::config::BackendKind;
use crate::error::Result;
use crate::scalar::RealOf;

#[cfg(feature = "fortran")]
pub use fortran::FortranBackend;
pub use reference::ReferenceBackend;
pub use traits::*;

/// Backend used by the crate-level functions.
#[cfg(feature = "fortran")]
pub type DefaultBackend = FortranBackend;

/// Backend used by the crate-level functions.
#[cfg(not(feature = "fortran"))]
pub type DefaultBackend = ReferenceBackend;

/// Returns the default backend based on enabled features.
///
/// With `--features fortran`: the linked LAPACK. Without: the reference
/// routines.
pub fn default_backend() -> DefaultBackend {
    DefaultBackend::default()
}

/// A backend chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyBackend {
    Reference(ReferenceBackend),
    #[cfg(feature = "fortran")]
    Fortran(FortranBackend),
}

impl AnyBackend {
    /// Instantiates `kind`, failing if it was not compiled into this build.
    pub fn from_kind(kind: BackendKind) -> Result<Self> {
        let backend = match kind {
            BackendKind::Reference => AnyBackend::Reference(ReferenceBackend),
            #[cfg(feature = "fortran")]
            BackendKind::Fortran => AnyBackend::Fortran(FortranBackend),
            #[cfg(not(feature = "fortran"))]
            BackendKind::Fortran => {
                return Err(crate::error::Error::BackendUnavailable(
                    kind.name().to_string(),
                ));
            }
        };
        debug!(backend = backend.name(), "selected backend");
        Ok(backend)
    }

    pub fn kind(&self) -> BackendKind {
        match self {
            AnyBackend::Reference(_) => BackendKind::Reference,
            #[cfg(feature = "fortran")]
            AnyBackend::Fortran(_) => BackendKind::Fortran,
        }
    }
}

impl Default for AnyBackend {
    fn default() -> Self {
        #[cfg(feature = "fortran")]
        let backend = AnyBackend::Fortran(FortranBackend);
        #[cfg(not(feature = "fortran"))]
        let backend = AnyBackend::Reference(ReferenceBackend);
        backend
    }
}

impl Backend for AnyBackend {
    fn name(&self) -> &'static str {
        match self {
            AnyBackend::Reference(b) => b.name(),
            #[cfg(feature = "fortran")]
            AnyBackend::Fortran(b) => b.name(),
        }
    }
}

/// Forwards one routine to whichever backend is selected.
macro_rules! dispatch {
    ($self:ident, $t:ty, $method:ident($($arg:ident),+)) => {
        match $self {
            AnyBackend::Reference(b) => unsafe {
                <ReferenceBackend as NativeRoutines<$t>>::$method(b, $($arg),+)
            },
            #[cfg(feature = "fortran")]
            AnyBackend::Fortran(b) => unsafe {
                <FortranBackend as NativeRoutines<$t>>::$method(b, $($arg),+)
            },
        }
    };
}

macro_rules! any_backend_routines {
    ($($t:ty),+) => {$(
        impl NativeRoutines<$t> for AnyBackend {
            unsafe fn syequb(
                &self,
                uplo: *const c_char,
                n: *const BlasInt,
                a: *const $t,
                lda: *const BlasInt,
                s: *mut RealOf<$t>,
                scond: *mut RealOf<$t>,
                amax: *mut RealOf<$t>,
                work: *mut $t,
                info: *mut BlasInt,
            ) {
                dispatch!(self, $t, syequb(uplo, n, a, lda, s, scond, amax, work, info))
            }

            unsafe fn sytrf_aa(
                &self,
                uplo: *const c_char,
                n: *const BlasInt,
                a: *mut $t,
                lda: *const BlasInt,
                ipiv: *mut BlasInt,
                work: *mut $t,
                lwork: *const BlasInt,
                info: *mut BlasInt,
            ) {
                dispatch!(self, $t, sytrf_aa(uplo, n, a, lda, ipiv, work, lwork, info))
            }

            unsafe fn sytrs_aa(
                &self,
                uplo: *const c_char,
                n: *const BlasInt,
                nrhs: *const BlasInt,
                a: *const $t,
                lda: *const BlasInt,
                ipiv: *const BlasInt,
                b: *mut $t,
                ldb: *const BlasInt,
                work: *mut $t,
                lwork: *const BlasInt,
                info: *mut BlasInt,
            ) {
                dispatch!(self, $t, sytrs_aa(uplo, n, nrhs, a, lda, ipiv, b, ldb, work, lwork, info))
            }

            unsafe fn sysv_aa(
                &self,
                uplo: *const c_char,
                n: *const BlasInt,
                nrhs: *const BlasInt,
                a: *mut $t,
                lda: *const BlasInt,
                ipiv: *mut BlasInt,
                b: *mut $t,
                ldb: *const BlasInt,
                work: *mut $t,
                lwork: *const BlasInt,
                info: *mut BlasInt,
            ) {
                dispatch!(self, $t, sysv_aa(uplo, n, nrhs, a, lda, ipiv, b, ldb, work, lwork, info))
            }

            unsafe fn potrf(
                &self,
                uplo: *const c_char,
                n: *const BlasInt,
                a: *mut $t,
                lda: *const BlasInt,
                info: *mut BlasInt,
            ) {
                dispatch!(self, $t, potrf(uplo, n, a, lda, info))
            }

            unsafe fn potrs(
                &self,
                uplo: *const c_char,
                n: *const BlasInt,
                nrhs: *const BlasInt,
                a: *const $t,
                lda: *const BlasInt,
                b: *mut $t,
                ldb: *const BlasInt,
                info: *mut BlasInt,
            ) {
                dispatch!(self, $t, potrs(uplo, n, nrhs, a, lda, b, ldb, info))
            }

            unsafe fn posv(
                &self,
                uplo: *const c_char,
                n: *const BlasInt,
                nrhs: *const BlasInt,
                a: *mut $t,
                lda: *const BlasInt,
                b: *mut $t,
                ldb: *const BlasInt,
                info: *mut BlasInt,
            ) {
                dispatch!(self, $t, posv(uplo, n, nrhs, a, lda, b, ldb, info))
            }
        }
    )+};
}

any_backend_routines!(f32, f64, Complex32, Complex64);
