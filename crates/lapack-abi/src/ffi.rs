//! Raw declarations of the wrapped LAPACK routines.
//!
//! Every argument is passed by reference, as the Fortran convention
//! requires. Complex buffers use the `[re, im]` pair layout of Fortran
//! `COMPLEX`. With the `strlen-end` feature each routine takes one hidden
//! `CHARACTER` length after its regular arguments.

use std::ffi::{c_char, c_double, c_float};

use crate::BlasInt;
#[cfg(feature = "strlen-end")]
use crate::FortranStrlen;

/// A complex number with 32-bit parts.
#[allow(non_camel_case_types)]
pub type c_float_complex = [c_float; 2];

/// A complex number with 64-bit parts.
#[allow(non_camel_case_types)]
pub type c_double_complex = [c_double; 2];

unsafe extern "C" {
    // single

    pub fn ssyequb_(
        uplo: *const c_char,
        n: *const BlasInt,
        a: *const c_float,
        lda: *const BlasInt,
        s: *mut c_float,
        scond: *mut c_float,
        amax: *mut c_float,
        work: *mut c_float,
        info: *mut BlasInt,
        #[cfg(feature = "strlen-end")]
        uplo_len: FortranStrlen,
    );

    pub fn ssytrf_aa_(
        uplo: *const c_char,
        n: *const BlasInt,
        a: *mut c_float,
        lda: *const BlasInt,
        ipiv: *mut BlasInt,
        work: *mut c_float,
        lwork: *const BlasInt,
        info: *mut BlasInt,
        #[cfg(feature = "strlen-end")]
        uplo_len: FortranStrlen,
    );

    pub fn ssytrs_aa_(
        uplo: *const c_char,
        n: *const BlasInt,
        nrhs: *const BlasInt,
        a: *const c_float,
        lda: *const BlasInt,
        ipiv: *const BlasInt,
        b: *mut c_float,
        ldb: *const BlasInt,
        work: *mut c_float,
        lwork: *const BlasInt,
        info: *mut BlasInt,
        #[cfg(feature = "strlen-end")]
        uplo_len: FortranStrlen,
    );

    pub fn ssysv_aa_(
        uplo: *const c_char,
        n: *const BlasInt,
        nrhs: *const BlasInt,
        a: *mut c_float,
        lda: *const BlasInt,
        ipiv: *mut BlasInt,
        b: *mut c_float,
        ldb: *const BlasInt,
        work: *mut c_float,
        lwork: *const BlasInt,
        info: *mut BlasInt,
        #[cfg(feature = "strlen-end")]
        uplo_len: FortranStrlen,
    );

    pub fn spotrf_(
        uplo: *const c_char,
        n: *const BlasInt,
        a: *mut c_float,
        lda: *const BlasInt,
        info: *mut BlasInt,
        #[cfg(feature = "strlen-end")]
        uplo_len: FortranStrlen,
    );

    pub fn spotrs_(
        uplo: *const c_char,
        n: *const BlasInt,
        nrhs: *const BlasInt,
        a: *const c_float,
        lda: *const BlasInt,
        b: *mut c_float,
        ldb: *const BlasInt,
        info: *mut BlasInt,
        #[cfg(feature = "strlen-end")]
        uplo_len: FortranStrlen,
    );

    pub fn sposv_(
        uplo: *const c_char,
        n: *const BlasInt,
        nrhs: *const BlasInt,
        a: *mut c_float,
        lda: *const BlasInt,
        b: *mut c_float,
        ldb: *const BlasInt,
        info: *mut BlasInt,
        #[cfg(feature = "strlen-end")]
        uplo_len: FortranStrlen,
    );

    // double

    pub fn dsyequb_(
        uplo: *const c_char,
        n: *const BlasInt,
        a: *const c_double,
        lda: *const BlasInt,
        s: *mut c_double,
        scond: *mut c_double,
        amax: *mut c_double,
        work: *mut c_double,
        info: *mut BlasInt,
        #[cfg(feature = "strlen-end")]
        uplo_len: FortranStrlen,
    );

    pub fn dsytrf_aa_(
        uplo: *const c_char,
        n: *const BlasInt,
        a: *mut c_double,
        lda: *const BlasInt,
        ipiv: *mut BlasInt,
        work: *mut c_double,
        lwork: *const BlasInt,
        info: *mut BlasInt,
        #[cfg(feature = "strlen-end")]
        uplo_len: FortranStrlen,
    );

    pub fn dsytrs_aa_(
        uplo: *const c_char,
        n: *const BlasInt,
        nrhs: *const BlasInt,
        a: *const c_double,
        lda: *const BlasInt,
        ipiv: *const BlasInt,
        b: *mut c_double,
        ldb: *const BlasInt,
        work: *mut c_double,
        lwork: *const BlasInt,
        info: *mut BlasInt,
        #[cfg(feature = "strlen-end")]
        uplo_len: FortranStrlen,
    );

    pub fn dsysv_aa_(
        uplo: *const c_char,
        n: *const BlasInt,
        nrhs: *const BlasInt,
        a: *mut c_double,
        lda: *const BlasInt,
        ipiv: *mut BlasInt,
        b: *mut c_double,
        ldb: *const BlasInt,
        work: *mut c_double,
        lwork: *const BlasInt,
        info: *mut BlasInt,
        #[cfg(feature = "strlen-end")]
        uplo_len: FortranStrlen,
    );

    pub fn dpotrf_(
        uplo: *const c_char,
        n: *const BlasInt,
        a: *mut c_double,
        lda: *const BlasInt,
        info: *mut BlasInt,
        #[cfg(feature = "strlen-end")]
        uplo_len: FortranStrlen,
    );

    pub fn dpotrs_(
        uplo: *const c_char,
        n: *const BlasInt,
        nrhs: *const BlasInt,
        a: *const c_double,
        lda: *const BlasInt,
        b: *mut c_double,
        ldb: *const BlasInt,
        info: *mut BlasInt,
        #[cfg(feature = "strlen-end")]
        uplo_len: FortranStrlen,
    );

    pub fn dposv_(
        uplo: *const c_char,
        n: *const BlasInt,
        nrhs: *const BlasInt,
        a: *mut c_double,
        lda: *const BlasInt,
        b: *mut c_double,
        ldb: *const BlasInt,
        info: *mut BlasInt,
        #[cfg(feature = "strlen-end")]
        uplo_len: FortranStrlen,
    );

    // complex single

    pub fn csyequb_(
        uplo: *const c_char,
        n: *const BlasInt,
        a: *const c_float_complex,
        lda: *const BlasInt,
        s: *mut c_float,
        scond: *mut c_float,
        amax: *mut c_float,
        work: *mut c_float_complex,
        info: *mut BlasInt,
        #[cfg(feature = "strlen-end")]
        uplo_len: FortranStrlen,
    );

    pub fn csytrf_aa_(
        uplo: *const c_char,
        n: *const BlasInt,
        a: *mut c_float_complex,
        lda: *const BlasInt,
        ipiv: *mut BlasInt,
        work: *mut c_float_complex,
        lwork: *const BlasInt,
        info: *mut BlasInt,
        #[cfg(feature = "strlen-end")]
        uplo_len: FortranStrlen,
    );

    pub fn csytrs_aa_(
        uplo: *const c_char,
        n: *const BlasInt,
        nrhs: *const BlasInt,
        a: *const c_float_complex,
        lda: *const BlasInt,
        ipiv: *const BlasInt,
        b: *mut c_float_complex,
        ldb: *const BlasInt,
        work: *mut c_float_complex,
        lwork: *const BlasInt,
        info: *mut BlasInt,
        #[cfg(feature = "strlen-end")]
        uplo_len: FortranStrlen,
    );

    pub fn csysv_aa_(
        uplo: *const c_char,
        n: *const BlasInt,
        nrhs: *const BlasInt,
        a: *mut c_float_complex,
        lda: *const BlasInt,
        ipiv: *mut BlasInt,
        b: *mut c_float_complex,
        ldb: *const BlasInt,
        work: *mut c_float_complex,
        lwork: *const BlasInt,
        info: *mut BlasInt,
        #[cfg(feature = "strlen-end")]
        uplo_len: FortranStrlen,
    );

    pub fn cpotrf_(
        uplo: *const c_char,
        n: *const BlasInt,
        a: *mut c_float_complex,
        lda: *const BlasInt,
        info: *mut BlasInt,
        #[cfg(feature = "strlen-end")]
        uplo_len: FortranStrlen,
    );

    pub fn cpotrs_(
        uplo: *const c_char,
        n: *const BlasInt,
        nrhs: *const BlasInt,
        a: *const c_float_complex,
        lda: *const BlasInt,
        b: *mut c_float_complex,
        ldb: *const BlasInt,
        info: *mut BlasInt,
        #[cfg(feature = "strlen-end")]
        uplo_len: FortranStrlen,
    );

    pub fn cposv_(
        uplo: *const c_char,
        n: *const BlasInt,
        nrhs: *const BlasInt,
        a: *mut c_float_complex,
        lda: *const BlasInt,
        b: *mut c_float_complex,
        ldb: *const BlasInt,
        info: *mut BlasInt,
        #[cfg(feature = "strlen-end")]
        uplo_len: FortranStrlen,
    );

    // complex double

    pub fn zsyequb_(
        uplo: *const c_char,
        n: *const BlasInt,
        a: *const c_double_complex,
        lda: *const BlasInt,
        s: *mut c_double,
        scond: *mut c_double,
        amax: *mut c_double,
        work: *mut c_double_complex,
        info: *mut BlasInt,
        #[cfg(feature = "strlen-end")]
        uplo_len: FortranStrlen,
    );

    pub fn zsytrf_aa_(
        uplo: *const c_char,
        n: *const BlasInt,
        a: *mut c_double_complex,
        lda: *const BlasInt,
        ipiv: *mut BlasInt,
        work: *mut c_double_complex,
        lwork: *const BlasInt,
        info: *mut BlasInt,
        #[cfg(feature = "strlen-end")]
        uplo_len: FortranStrlen,
    );

    pub fn zsytrs_aa_(
        uplo: *const c_char,
        n: *const BlasInt,
        nrhs: *const BlasInt,
        a: *const c_double_complex,
        lda: *const BlasInt,
        ipiv: *const BlasInt,
        b: *mut c_double_complex,
        ldb: *const BlasInt,
        work: *mut c_double_complex,
        lwork: *const BlasInt,
        info: *mut BlasInt,
        #[cfg(feature = "strlen-end")]
        uplo_len: FortranStrlen,
    );

    pub fn zsysv_aa_(
        uplo: *const c_char,
        n: *const BlasInt,
        nrhs: *const BlasInt,
        a: *mut c_double_complex,
        lda: *const BlasInt,
        ipiv: *mut BlasInt,
        b: *mut c_double_complex,
        ldb: *const BlasInt,
        work: *mut c_double_complex,
        lwork: *const BlasInt,
        info: *mut BlasInt,
        #[cfg(feature = "strlen-end")]
        uplo_len: FortranStrlen,
    );

    pub fn zpotrf_(
        uplo: *const c_char,
        n: *const BlasInt,
        a: *mut c_double_complex,
        lda: *const BlasInt,
        info: *mut BlasInt,
        #[cfg(feature = "strlen-end")]
        uplo_len: FortranStrlen,
    );

    pub fn zpotrs_(
        uplo: *const c_char,
        n: *const BlasInt,
        nrhs: *const BlasInt,
        a: *const c_double_complex,
        lda: *const BlasInt,
        b: *mut c_double_complex,
        ldb: *const BlasInt,
        info: *mut BlasInt,
        #[cfg(feature = "strlen-end")]
        uplo_len: FortranStrlen,
    );

    pub fn zposv_(
        uplo: *const c_char,
        n: *const BlasInt,
        nrhs: *const BlasInt,
        a: *mut c_double_complex,
        lda: *const BlasInt,
        b: *mut c_double_complex,
        ldb: *const BlasInt,
        info: *mut BlasInt,
        #[cfg(feature = "strlen-end")]
        uplo_len: FortranStrlen,
    );

}
