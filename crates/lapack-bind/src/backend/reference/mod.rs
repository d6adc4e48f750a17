//! Pure-Rust implementation of the native routines.
//!
//! Speaks the same raw-pointer convention as the Fortran library, including
//! its argument checking: the first illegal argument at position `i` sets
//! `info = -i` and no buffer is touched. Workspace queries (`lwork = -1`)
//! report the required size in `work[0]`. The algorithms are unblocked.

mod aasen;
mod cholesky;
mod equilibrate;

use std::ffi::c_char;

use lapack_abi::BlasInt;

use super::traits::{Backend, NativeRoutines};
use crate::scalar::{RealOf, Scalar};

/// Backend implemented in Rust; needs no system LAPACK.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReferenceBackend;

impl Backend for ReferenceBackend {
    fn name(&self) -> &'static str {
        "reference"
    }
}

/// Decodes a triangle selector: `Some(true)` for lower.
fn triangle(code: c_char) -> Option<bool> {
    match code as u8 {
        b'L' | b'l' => Some(true),
        b'U' | b'u' => Some(false),
        _ => None,
    }
}

/// Argument validation in native order; the first failure wins.
struct Check(BlasInt);

impl Check {
    fn new() -> Self {
        Check(0)
    }

    fn require(&mut self, position: BlasInt, ok: bool) -> &mut Self {
        if self.0 == 0 && !ok {
            self.0 = -position;
        }
        self
    }

    fn status(&self) -> BlasInt {
        self.0
    }
}

fn to_usize(value: BlasInt) -> usize {
    usize::try_from(value).unwrap_or(0)
}

/// Elements spanned by a `rows x cols` matrix with leading dimension `ld`.
fn span(rows: usize, cols: usize, ld: usize) -> usize {
    if rows == 0 || cols == 0 {
        0
    } else {
        ld * (cols - 1) + rows
    }
}

unsafe fn view<'a, T>(ptr: *const T, len: usize) -> &'a [T] {
    if len == 0 {
        &[]
    } else {
        unsafe { std::slice::from_raw_parts(ptr, len) }
    }
}

unsafe fn view_mut<'a, T>(ptr: *mut T, len: usize) -> &'a mut [T] {
    if len == 0 {
        &mut []
    } else {
        unsafe { std::slice::from_raw_parts_mut(ptr, len) }
    }
}

/// Native pivots as 1-based `usize` indices in `1..=n`.
unsafe fn pivots(ptr: *const BlasInt, n: usize) -> Vec<usize> {
    unsafe { view(ptr, n) }
        .iter()
        .map(|&p| to_usize(p).clamp(1, n))
        .collect()
}

unsafe fn write_pivots(ptr: *mut BlasInt, ipiv: &[usize]) {
    let out = unsafe { view_mut(ptr, ipiv.len()) };
    for (dst, &src) in out.iter_mut().zip(ipiv) {
        *dst = BlasInt::try_from(src).unwrap_or(BlasInt::MAX);
    }
}

fn sytrf_aa_min(n: usize) -> usize {
    (2 * n).max(1)
}

fn sytrs_aa_min(n: usize) -> usize {
    (3 * n).saturating_sub(2).max(1)
}

unsafe fn report_size<T: Scalar>(work: *mut T, len: usize) {
    unsafe { *work = T::from_parts(len as f64, 0.0) };
}

impl<T: Scalar> NativeRoutines<T> for ReferenceBackend {
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
    ) {
        let (uplo, n, lda) = unsafe { (*uplo, *n, *lda) };
        let lower = triangle(uplo);
        let status = Check::new()
            .require(1, lower.is_some())
            .require(2, n >= 0)
            .require(4, lda >= n.max(1))
            .status();
        unsafe { *info = status };
        let Some(lower) = lower else { return };
        if status != 0 {
            return;
        }

        let (n, lda) = (to_usize(n), to_usize(lda));
        let a = unsafe { view(a, span(n, n, lda)) };
        let s = unsafe { view_mut(s, n) };
        let work = unsafe { view_mut(work, 2 * n) };
        let (scaling, status) = equilibrate::syequb(lower, n, a, lda, s, work);
        unsafe {
            *scond = scaling.scond;
            *amax = scaling.amax;
            *info = status as BlasInt;
        }
    }

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
    ) {
        let (uplo, n, lda, lwork) = unsafe { (*uplo, *n, *lda, *lwork) };
        let lower = triangle(uplo);
        let minimum = sytrf_aa_min(to_usize(n));
        let status = Check::new()
            .require(1, lower.is_some())
            .require(2, n >= 0)
            .require(4, lda >= n.max(1))
            .require(7, lwork == -1 || to_usize(lwork) >= minimum)
            .status();
        unsafe { *info = status };
        let Some(lower) = lower else { return };
        if status != 0 {
            return;
        }
        if lwork == -1 {
            unsafe { report_size(work, minimum) };
            return;
        }

        let (n, lda) = (to_usize(n), to_usize(lda));
        let a = unsafe { view_mut(a, span(n, n, lda)) };
        let work = unsafe { view_mut(work, to_usize(lwork)) };
        let mut piv = vec![0usize; n];
        aasen::sytrf_aa(lower, n, a, lda, &mut piv, work);
        unsafe { write_pivots(ipiv, &piv) };
    }

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
    ) {
        let (uplo, n, nrhs, lda, ldb, lwork) =
            unsafe { (*uplo, *n, *nrhs, *lda, *ldb, *lwork) };
        let lower = triangle(uplo);
        let minimum = sytrs_aa_min(to_usize(n));
        let status = Check::new()
            .require(1, lower.is_some())
            .require(2, n >= 0)
            .require(3, nrhs >= 0)
            .require(5, lda >= n.max(1))
            .require(8, ldb >= n.max(1))
            .require(10, lwork == -1 || to_usize(lwork) >= minimum)
            .status();
        unsafe { *info = status };
        let Some(lower) = lower else { return };
        if status != 0 {
            return;
        }
        if lwork == -1 {
            unsafe { report_size(work, minimum) };
            return;
        }

        let (n, nrhs, lda, ldb) = (to_usize(n), to_usize(nrhs), to_usize(lda), to_usize(ldb));
        let a = unsafe { view(a, span(n, n, lda)) };
        let b = unsafe { view_mut(b, span(n, nrhs, ldb)) };
        let work = unsafe { view_mut(work, to_usize(lwork)) };
        let piv = unsafe { pivots(ipiv, n) };
        let status = aasen::sytrs_aa(lower, n, nrhs, a, lda, &piv, b, ldb, work);
        unsafe { *info = status as BlasInt };
    }

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
    ) {
        let (uplo, n, nrhs, lda, ldb, lwork) =
            unsafe { (*uplo, *n, *nrhs, *lda, *ldb, *lwork) };
        let lower = triangle(uplo);
        let minimum = sytrf_aa_min(to_usize(n)).max(sytrs_aa_min(to_usize(n)));
        let status = Check::new()
            .require(1, lower.is_some())
            .require(2, n >= 0)
            .require(3, nrhs >= 0)
            .require(5, lda >= n.max(1))
            .require(8, ldb >= n.max(1))
            .require(10, lwork == -1 || to_usize(lwork) >= minimum)
            .status();
        unsafe { *info = status };
        let Some(lower) = lower else { return };
        if status != 0 {
            return;
        }
        if lwork == -1 {
            unsafe { report_size(work, minimum) };
            return;
        }

        let (n, nrhs, lda, ldb) = (to_usize(n), to_usize(nrhs), to_usize(lda), to_usize(ldb));
        let a = unsafe { view_mut(a, span(n, n, lda)) };
        let b = unsafe { view_mut(b, span(n, nrhs, ldb)) };
        let work = unsafe { view_mut(work, to_usize(lwork)) };
        let mut piv = vec![0usize; n];
        aasen::sytrf_aa(lower, n, a, lda, &mut piv, work);
        unsafe { write_pivots(ipiv, &piv) };
        let status = aasen::sytrs_aa(lower, n, nrhs, a, lda, &piv, b, ldb, work);
        unsafe { *info = status as BlasInt };
    }

    unsafe fn potrf(
        &self,
        uplo: *const c_char,
        n: *const BlasInt,
        a: *mut T,
        lda: *const BlasInt,
        info: *mut BlasInt,
    ) {
        let (uplo, n, lda) = unsafe { (*uplo, *n, *lda) };
        let lower = triangle(uplo);
        let status = Check::new()
            .require(1, lower.is_some())
            .require(2, n >= 0)
            .require(4, lda >= n.max(1))
            .status();
        unsafe { *info = status };
        let Some(lower) = lower else { return };
        if status != 0 {
            return;
        }

        let (n, lda) = (to_usize(n), to_usize(lda));
        let a = unsafe { view_mut(a, span(n, n, lda)) };
        let status = cholesky::potrf(lower, n, a, lda);
        unsafe { *info = status as BlasInt };
    }

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
    ) {
        let (uplo, n, nrhs, lda, ldb) = unsafe { (*uplo, *n, *nrhs, *lda, *ldb) };
        let lower = triangle(uplo);
        let status = Check::new()
            .require(1, lower.is_some())
            .require(2, n >= 0)
            .require(3, nrhs >= 0)
            .require(5, lda >= n.max(1))
            .require(7, ldb >= n.max(1))
            .status();
        unsafe { *info = status };
        let Some(lower) = lower else { return };
        if status != 0 {
            return;
        }

        let (n, nrhs, lda, ldb) = (to_usize(n), to_usize(nrhs), to_usize(lda), to_usize(ldb));
        let a = unsafe { view(a, span(n, n, lda)) };
        let b = unsafe { view_mut(b, span(n, nrhs, ldb)) };
        cholesky::potrs(lower, n, nrhs, a, lda, b, ldb);
    }

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
    ) {
        let (uplo, n, nrhs, lda, ldb) = unsafe { (*uplo, *n, *nrhs, *lda, *ldb) };
        let lower = triangle(uplo);
        let status = Check::new()
            .require(1, lower.is_some())
            .require(2, n >= 0)
            .require(3, nrhs >= 0)
            .require(5, lda >= n.max(1))
            .require(7, ldb >= n.max(1))
            .status();
        unsafe { *info = status };
        let Some(lower) = lower else { return };
        if status != 0 {
            return;
        }

        let (n, nrhs, lda, ldb) = (to_usize(n), to_usize(nrhs), to_usize(lda), to_usize(ldb));
        let a = unsafe { view_mut(a, span(n, n, lda)) };
        let b = unsafe { view_mut(b, span(n, nrhs, ldb)) };
        let status = cholesky::potrf(lower, n, a, lda);
        if status == 0 {
            cholesky::potrs(lower, n, nrhs, a, lda, b, ldb);
        }
        unsafe { *info = status as BlasInt };
    }
}
