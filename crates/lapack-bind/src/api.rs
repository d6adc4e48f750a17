//! Crate-level functions over the default backend.
//!
//! Each forwards to the [`Lapack`] method of the same name on a handle
//! built from [`DefaultBackend`] with no workspace limit.

use crate::backend::{DefaultBackend, NativeRoutines};
use crate::error::Result;
use crate::ops::Lapack;
use crate::options::Uplo;
use crate::scalar::{RealOf, Scalar};

fn lapack() -> Lapack<DefaultBackend> {
    Lapack::default()
}

/// See [`Lapack::syequb`].
#[allow(clippy::too_many_arguments)]
pub fn syequb<T: Scalar>(
    uplo: Uplo,
    n: i64,
    a: &[T],
    lda: i64,
    s: &mut [RealOf<T>],
    scond: &mut RealOf<T>,
    amax: &mut RealOf<T>,
) -> Result<i64>
where
    DefaultBackend: NativeRoutines<T>,
{
    lapack().syequb(uplo, n, a, lda, s, scond, amax)
}

/// See [`Lapack::sytrf_aa`].
pub fn sytrf_aa<T: Scalar>(uplo: Uplo, n: i64, a: &mut [T], lda: i64, ipiv: &mut [i64]) -> Result<i64>
where
    DefaultBackend: NativeRoutines<T>,
{
    lapack().sytrf_aa(uplo, n, a, lda, ipiv)
}

/// See [`Lapack::sytrs_aa`].
#[allow(clippy::too_many_arguments)]
pub fn sytrs_aa<T: Scalar>(
    uplo: Uplo,
    n: i64,
    nrhs: i64,
    a: &[T],
    lda: i64,
    ipiv: &[i64],
    b: &mut [T],
    ldb: i64,
) -> Result<i64>
where
    DefaultBackend: NativeRoutines<T>,
{
    lapack().sytrs_aa(uplo, n, nrhs, a, lda, ipiv, b, ldb)
}

/// See [`Lapack::sysv_aa`].
#[allow(clippy::too_many_arguments)]
pub fn sysv_aa<T: Scalar>(
    uplo: Uplo,
    n: i64,
    nrhs: i64,
    a: &mut [T],
    lda: i64,
    ipiv: &mut [i64],
    b: &mut [T],
    ldb: i64,
) -> Result<i64>
where
    DefaultBackend: NativeRoutines<T>,
{
    lapack().sysv_aa(uplo, n, nrhs, a, lda, ipiv, b, ldb)
}

/// See [`Lapack::potrf`].
pub fn potrf<T: Scalar>(uplo: Uplo, n: i64, a: &mut [T], lda: i64) -> Result<i64>
where
    DefaultBackend: NativeRoutines<T>,
{
    lapack().potrf(uplo, n, a, lda)
}

/// See [`Lapack::potrs`].
pub fn potrs<T: Scalar>(
    uplo: Uplo,
    n: i64,
    nrhs: i64,
    a: &[T],
    lda: i64,
    b: &mut [T],
    ldb: i64,
) -> Result<i64>
where
    DefaultBackend: NativeRoutines<T>,
{
    lapack().potrs(uplo, n, nrhs, a, lda, b, ldb)
}

/// See [`Lapack::posv`].
pub fn posv<T: Scalar>(
    uplo: Uplo,
    n: i64,
    nrhs: i64,
    a: &mut [T],
    lda: i64,
    b: &mut [T],
    ldb: i64,
) -> Result<i64>
where
    DefaultBackend: NativeRoutines<T>,
{
    lapack().posv(uplo, n, nrhs, a, lda, b, ldb)
}
