//! Backend trait definitions for the native routines.
//!
//! [`NativeRoutines`] mirrors the Fortran calling convention one method per
//! routine: every argument by pointer, workspace pointer plus `lwork`, and
//! the trailing `info`. The typed operations in `ops` are written once
//! against this trait; a backend supplies the routines for each scalar type.

use std::ffi::c_char;

use lapack_abi::BlasInt;

use crate::scalar::{RealOf, Scalar};

/// Common identity of every backend.
pub trait Backend: Send + Sync {
    /// Human-readable name of this backend.
    fn name(&self) -> &'static str;
}

/// The native routines for scalar type `T`.
///
/// # Safety
///
/// Callers uphold the native contract: every pointer is valid for the
/// extents implied by the integer arguments, and `info` is writable. When the
/// integer arguments are themselves illegal the routine sets `info` to the
/// negated argument position without dereferencing any buffer.
pub trait NativeRoutines<T: Scalar>: Backend {
    /// Equilibration scale factors of a symmetric matrix.
    #[allow(clippy::too_many_arguments)]
    unsafe fn syequb(
        &self,
        uplo: *const c_char,
        n: *const BlasInt,
        a: *const T,
        lda: *const BlasInt,
        s: *mut RealOf<T>,
        scond: *mut RealOf<T>,
        amax: *mut RealOf<T>,
        work: *mut T,
        info: *mut BlasInt,
    );

    /// Aasen factorization `P A P^T = L T L^T`.
    #[allow(clippy::too_many_arguments)]
    unsafe fn sytrf_aa(
        &self,
        uplo: *const c_char,
        n: *const BlasInt,
        a: *mut T,
        lda: *const BlasInt,
        ipiv: *mut BlasInt,
        work: *mut T,
        lwork: *const BlasInt,
        info: *mut BlasInt,
    );

    /// Solve with an Aasen factorization.
    #[allow(clippy::too_many_arguments)]
    unsafe fn sytrs_aa(
        &self,
        uplo: *const c_char,
        n: *const BlasInt,
        nrhs: *const BlasInt,
        a: *const T,
        lda: *const BlasInt,
        ipiv: *const BlasInt,
        b: *mut T,
        ldb: *const BlasInt,
        work: *mut T,
        lwork: *const BlasInt,
        info: *mut BlasInt,
    );

    /// Factor and solve in one call.
    #[allow(clippy::too_many_arguments)]
    unsafe fn sysv_aa(
        &self,
        uplo: *const c_char,
        n: *const BlasInt,
        nrhs: *const BlasInt,
        a: *mut T,
        lda: *const BlasInt,
        ipiv: *mut BlasInt,
        b: *mut T,
        ldb: *const BlasInt,
        work: *mut T,
        lwork: *const BlasInt,
        info: *mut BlasInt,
    );

    /// Cholesky factorization.
    unsafe fn potrf(
        &self,
        uplo: *const c_char,
        n: *const BlasInt,
        a: *mut T,
        lda: *const BlasInt,
        info: *mut BlasInt,
    );

    #[allow(clippy::too_many_arguments)]
    unsafe fn potrs(
        &self,
        uplo: *const c_char,
        n: *const BlasInt,
        nrhs: *const BlasInt,
        a: *const T,
        lda: *const BlasInt,
        b: *mut T,
        ldb: *const BlasInt,
        info: *mut BlasInt,
    );

    #[allow(clippy::too_many_arguments)]
    unsafe fn posv(
        &self,
        uplo: *const c_char,
        n: *const BlasInt,
        nrhs: *const BlasInt,
        a: *mut T,
        lda: *const BlasInt,
        b: *mut T,
        ldb: *const BlasInt,
        info: *mut BlasInt,
    );
}
