//! Backend calling the linked Fortran LAPACK (`--features fortran`).
//!
//! One `NativeRoutines` impl per scalar type names the native symbols and
//! reinterprets `Complex<f32>` / `Complex<f64>` buffers as the `[re, im]`
//! pairs of the Fortran `COMPLEX` layout. With `strlen-end` the hidden
//! length of the single character argument is appended to every call.

use std::ffi::c_char;

use lapack_abi::BlasInt;
use lapack_abi::ffi::{self, c_double_complex, c_float_complex};
use num_complex::{Complex32, Complex64};

// links the LAPACK provider
use nalgebra_lapack as _;

use super::traits::{Backend, NativeRoutines};

/// Backend dispatching to the system LAPACK.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FortranBackend;

impl Backend for FortranBackend {
    fn name(&self) -> &'static str {
        "fortran"
    }
}

/// Invokes a native routine, appending the hidden `CHARACTER` length when the
/// library expects one.
macro_rules! native {
    ($routine:path, $($arg:expr),+ $(,)?) => {{
        #[cfg(feature = "strlen-end")]
        unsafe {
            $routine($($arg),+, 1)
        };
        #[cfg(not(feature = "strlen-end"))]
        unsafe {
            $routine($($arg),+)
        };
    }};
}

macro_rules! fortran_routines {
    (
        $t:ty, native = $n:ty, real = $r:ty,
        $syequb:ident, $sytrf_aa:ident, $sytrs_aa:ident, $sysv_aa:ident,
        $potrf:ident, $potrs:ident, $posv:ident
    ) => {
        impl NativeRoutines<$t> for FortranBackend {
            unsafe fn syequb(
                &self,
                uplo: *const c_char,
                n: *const BlasInt,
                a: *const $t,
                lda: *const BlasInt,
                s: *mut $r,
                scond: *mut $r,
                amax: *mut $r,
                work: *mut $t,
                info: *mut BlasInt,
            ) {
                native!(
                    ffi::$syequb,
                    uplo,
                    n,
                    a as *const $n,
                    lda,
                    s,
                    scond,
                    amax,
                    work as *mut $n,
                    info,
                );
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
                native!(
                    ffi::$sytrf_aa,
                    uplo,
                    n,
                    a as *mut $n,
                    lda,
                    ipiv,
                    work as *mut $n,
                    lwork,
                    info,
                );
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
                native!(
                    ffi::$sytrs_aa,
                    uplo,
                    n,
                    nrhs,
                    a as *const $n,
                    lda,
                    ipiv,
                    b as *mut $n,
                    ldb,
                    work as *mut $n,
                    lwork,
                    info,
                );
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
                native!(
                    ffi::$sysv_aa,
                    uplo,
                    n,
                    nrhs,
                    a as *mut $n,
                    lda,
                    ipiv,
                    b as *mut $n,
                    ldb,
                    work as *mut $n,
                    lwork,
                    info,
                );
            }

            unsafe fn potrf(
                &self,
                uplo: *const c_char,
                n: *const BlasInt,
                a: *mut $t,
                lda: *const BlasInt,
                info: *mut BlasInt,
            ) {
                native!(ffi::$potrf, uplo, n, a as *mut $n, lda, info);
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
                native!(
                    ffi::$potrs,
                    uplo,
                    n,
                    nrhs,
                    a as *const $n,
                    lda,
                    b as *mut $n,
                    ldb,
                    info,
                );
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
                native!(
                    ffi::$posv,
                    uplo,
                    n,
                    nrhs,
                    a as *mut $n,
                    lda,
                    b as *mut $n,
                    ldb,
                    info,
                );
            }
        }
    };
}

fortran_routines!(
    f32, native = f32, real = f32,
    ssyequb_, ssytrf_aa_, ssytrs_aa_, ssysv_aa_, spotrf_, spotrs_, sposv_
);
fortran_routines!(
    f64, native = f64, real = f64,
    dsyequb_, dsytrf_aa_, dsytrs_aa_, dsysv_aa_, dpotrf_, dpotrs_, dposv_
);
fortran_routines!(
    Complex32, native = c_float_complex, real = f32,
    csyequb_, csytrf_aa_, csytrs_aa_, csysv_aa_, cpotrf_, cpotrs_, cposv_
);
fortran_routines!(
    Complex64, native = c_double_complex, real = f64,
    zsyequb_, zsytrf_aa_, zsytrs_aa_, zsysv_aa_, zpotrf_, zpotrs_, zposv_
);
