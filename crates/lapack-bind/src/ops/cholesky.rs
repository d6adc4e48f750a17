//! Cholesky factorization and solves: `potrf`, `potrs`, `posv`.
//!
//! Complex matrices are Hermitian positive definite.

use lapack_abi::{BlasInt, Routine, narrow};
use tracing::trace;

use super::{Lapack, finish};
use crate::backend::{Backend, NativeRoutines};
use crate::dims::check_matrix;
use crate::error::Result;
use crate::options::Uplo;
use crate::scalar::Scalar;

impl<B: Backend> Lapack<B> {
    /// Factors `A = U^H U` or `A = L L^H` in place.
    ///
    /// Returns `Ok(i)` with `i > 0` when the leading minor of order `i` is not
    /// positive definite; the factorization is then incomplete.
    pub fn potrf<T: Scalar>(&self, uplo: Uplo, n: i64, a: &mut [T], lda: i64) -> Result<i64>
    where
        B: NativeRoutines<T>,
    {
        let symbol = Routine::Potrf.symbol(T::KIND);
        let n_native = narrow("n", n)?;
        let lda_native = narrow("lda", lda)?;
        let uplo_code = uplo.triangle_code()?;
        check_matrix("a", a.len(), n, n, lda)?;

        trace!(%symbol, n, lda, "calling native routine");
        let mut info: BlasInt = 0;
        // SAFETY: `a` was checked for the forwarded `n` and `lda`; the other
        // pointers are locals.
        unsafe {
            NativeRoutines::<T>::potrf(
                &self.backend,
                &uplo_code,
                &n_native,
                a.as_mut_ptr(),
                &lda_native,
                &mut info,
            )
        };
        finish(symbol, info)
    }

    /// Solves `A X = B` using the factor from [`Lapack::potrf`]. `B` is
    /// overwritten with `X`.
    #[allow(clippy::too_many_arguments)]
    pub fn potrs<T: Scalar>(
        &self,
        uplo: Uplo,
        n: i64,
        nrhs: i64,
        a: &[T],
        lda: i64,
        b: &mut [T],
        ldb: i64,
    ) -> Result<i64>
    where
        B: NativeRoutines<T>,
    {
        let symbol = Routine::Potrs.symbol(T::KIND);
        let n_native = narrow("n", n)?;
        let nrhs_native = narrow("nrhs", nrhs)?;
        let lda_native = narrow("lda", lda)?;
        let ldb_native = narrow("ldb", ldb)?;
        let uplo_code = uplo.triangle_code()?;
        check_matrix("a", a.len(), n, n, lda)?;
        check_matrix("b", b.len(), n, nrhs, ldb)?;

        trace!(%symbol, n, nrhs, lda, ldb, "calling native routine");
        let mut info: BlasInt = 0;
        // SAFETY: `a` and `b` were checked for the forwarded extents; the
        // other pointers are locals.
        unsafe {
            NativeRoutines::<T>::potrs(
                &self.backend,
                &uplo_code,
                &n_native,
                &nrhs_native,
                a.as_ptr(),
                &lda_native,
                b.as_mut_ptr(),
                &ldb_native,
                &mut info,
            )
        };
        finish(symbol, info)
    }

    /// Factors `A` and solves `A X = B` in one call.
    ///
    /// Returns `Ok(i)` with `i > 0` when the leading minor of order `i` is not
    /// positive definite; no solution is computed.
    #[allow(clippy::too_many_arguments)]
    pub fn posv<T: Scalar>(
        &self,
        uplo: Uplo,
        n: i64,
        nrhs: i64,
        a: &mut [T],
        lda: i64,
        b: &mut [T],
        ldb: i64,
    ) -> Result<i64>
    where
        B: NativeRoutines<T>,
    {
        let symbol = Routine::Posv.symbol(T::KIND);
        let n_native = narrow("n", n)?;
        let nrhs_native = narrow("nrhs", nrhs)?;
        let lda_native = narrow("lda", lda)?;
        let ldb_native = narrow("ldb", ldb)?;
        let uplo_code = uplo.triangle_code()?;
        check_matrix("a", a.len(), n, n, lda)?;
        check_matrix("b", b.len(), n, nrhs, ldb)?;

        trace!(%symbol, n, nrhs, lda, ldb, "calling native routine");
        let mut info: BlasInt = 0;
        // SAFETY: `a` and `b` were checked for the forwarded extents; the
        // other pointers are locals.
        unsafe {
            NativeRoutines::<T>::posv(
                &self.backend,
                &uplo_code,
                &n_native,
                &nrhs_native,
                a.as_mut_ptr(),
                &lda_native,
                b.as_mut_ptr(),
                &ldb_native,
                &mut info,
            )
        };
        finish(symbol, info)
    }
}
