//! Aasen's symmetric indefinite factorization: `sytrf_aa`, `sytrs_aa`,
//! `sysv_aa`.
//!
//! Complex matrices are symmetric (`A = A^T`), not Hermitian.

use lapack_abi::{BlasInt, PivotsOut, Routine, narrow};
use tracing::trace;

use super::{Lapack, finish};
use crate::backend::{Backend, NativeRoutines};
use crate::dims::{check_matrix, check_vector, pivots_in, used_len};
use crate::error::Result;
use crate::options::Uplo;
use crate::scalar::Scalar;
use crate::workspace;

/// `lwork` value asking a routine for its optimal workspace size.
const QUERY: BlasInt = -1;

impl<B: Backend> Lapack<B> {
    /// Factors `P A P^T = L T L^T` in place, with `T` symmetric tridiagonal.
    ///
    /// `ipiv[..n]` receives the 1-based row interchanges. The workspace size
    /// is obtained from the routine itself.
    pub fn sytrf_aa<T: Scalar>(
        &self,
        uplo: Uplo,
        n: i64,
        a: &mut [T],
        lda: i64,
        ipiv: &mut [i64],
    ) -> Result<i64>
    where
        B: NativeRoutines<T>,
    {
        let symbol = Routine::SytrfAa.symbol(T::KIND);
        let n_native = narrow("n", n)?;
        let lda_native = narrow("lda", lda)?;
        let uplo_code = uplo.triangle_code()?;
        check_matrix("a", a.len(), n, n, lda)?;
        check_vector("ipiv", ipiv.len(), n)?;
        let minimum = workspace::sytrf_aa_min(n)?;
        let mut pivots = PivotsOut::new(&mut ipiv[..used_len(n)]);

        let mut query = [T::zero()];
        let mut info: BlasInt = 0;
        trace!(%symbol, n, lda, "querying workspace");
        // SAFETY: `a` and `ipiv` were checked for the forwarded `n` and `lda`;
        // a query writes only `query[0]`. Scalars and `info` are locals.
        unsafe {
            NativeRoutines::<T>::sytrf_aa(
                &self.backend,
                &uplo_code,
                &n_native,
                a.as_mut_ptr(),
                &lda_native,
                pivots.as_mut_ptr(),
                query.as_mut_ptr(),
                &QUERY,
                &mut info,
            )
        };
        if info < 0 {
            return finish(symbol, info);
        }

        let mut work = self.workspace::<T>(workspace::from_query(query[0], minimum))?;
        let lwork = work.lwork()?;
        trace!(%symbol, n, lda, lwork, "calling native routine");
        // SAFETY: as for the query; `work` holds `lwork` elements.
        unsafe {
            NativeRoutines::<T>::sytrf_aa(
                &self.backend,
                &uplo_code,
                &n_native,
                a.as_mut_ptr(),
                &lda_native,
                pivots.as_mut_ptr(),
                work.as_mut_ptr(),
                &lwork,
                &mut info,
            )
        };
        if info >= 0 {
            pivots.finish();
        }
        finish(symbol, info)
    }

    /// Solves `A X = B` using the factor and pivots from
    /// [`Lapack::sytrf_aa`]. `B` is overwritten with `X`.
    ///
    /// Returns `Ok(i)` with `i > 0` when the tridiagonal factor is exactly
    /// singular at pivot `i`; `B` is then not a solution.
    #[allow(clippy::too_many_arguments)]
    pub fn sytrs_aa<T: Scalar>(
        &self,
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
        B: NativeRoutines<T>,
    {
        let symbol = Routine::SytrsAa.symbol(T::KIND);
        let n_native = narrow("n", n)?;
        let nrhs_native = narrow("nrhs", nrhs)?;
        let lda_native = narrow("lda", lda)?;
        let ldb_native = narrow("ldb", ldb)?;
        let uplo_code = uplo.triangle_code()?;
        check_matrix("a", a.len(), n, n, lda)?;
        check_matrix("b", b.len(), n, nrhs, ldb)?;
        let pivots = pivots_in(ipiv, n)?;

        let mut work = self.workspace::<T>(workspace::sytrs_aa_len(n)?)?;
        let lwork = work.lwork()?;
        trace!(%symbol, n, nrhs, lda, ldb, lwork, "calling native routine");
        let mut info: BlasInt = 0;
        // SAFETY: `a` and `b` were checked for the forwarded extents and
        // `pivots` holds `n` entries in range; `work` holds `lwork` elements.
        unsafe {
            NativeRoutines::<T>::sytrs_aa(
                &self.backend,
                &uplo_code,
                &n_native,
                &nrhs_native,
                a.as_ptr(),
                &lda_native,
                pivots.as_ptr(),
                b.as_mut_ptr(),
                &ldb_native,
                work.as_mut_ptr(),
                &lwork,
                &mut info,
            )
        };
        finish(symbol, info)
    }

    /// Factors `A` and solves `A X = B` in one call.
    ///
    /// On return `a` and `ipiv` hold the factorization as from
    /// [`Lapack::sytrf_aa`]. Returns `Ok(i)` with `i > 0` when the tridiagonal
    /// factor is exactly singular at pivot `i`; no solution is computed.
    #[allow(clippy::too_many_arguments)]
    pub fn sysv_aa<T: Scalar>(
        &self,
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
        B: NativeRoutines<T>,
    {
        let symbol = Routine::SysvAa.symbol(T::KIND);
        let n_native = narrow("n", n)?;
        let nrhs_native = narrow("nrhs", nrhs)?;
        let lda_native = narrow("lda", lda)?;
        let ldb_native = narrow("ldb", ldb)?;
        let uplo_code = uplo.triangle_code()?;
        check_matrix("a", a.len(), n, n, lda)?;
        check_matrix("b", b.len(), n, nrhs, ldb)?;
        check_vector("ipiv", ipiv.len(), n)?;
        let minimum = workspace::sysv_aa_min(n)?;
        let mut pivots = PivotsOut::new(&mut ipiv[..used_len(n)]);

        let mut query = [T::zero()];
        let mut info: BlasInt = 0;
        trace!(%symbol, n, nrhs, lda, ldb, "querying workspace");
        // SAFETY: `a`, `b` and `ipiv` were checked for the forwarded extents;
        // a query writes only `query[0]`. Scalars and `info` are locals.
        unsafe {
            NativeRoutines::<T>::sysv_aa(
                &self.backend,
                &uplo_code,
                &n_native,
                &nrhs_native,
                a.as_mut_ptr(),
                &lda_native,
                pivots.as_mut_ptr(),
                b.as_mut_ptr(),
                &ldb_native,
                query.as_mut_ptr(),
                &QUERY,
                &mut info,
            )
        };
        if info < 0 {
            return finish(symbol, info);
        }

        let mut work = self.workspace::<T>(workspace::from_query(query[0], minimum))?;
        let lwork = work.lwork()?;
        trace!(%symbol, n, nrhs, lda, ldb, lwork, "calling native routine");
        // SAFETY: as for the query; `work` holds `lwork` elements.
        unsafe {
            NativeRoutines::<T>::sysv_aa(
                &self.backend,
                &uplo_code,
                &n_native,
                &nrhs_native,
                a.as_mut_ptr(),
                &lda_native,
                pivots.as_mut_ptr(),
                b.as_mut_ptr(),
                &ldb_native,
                work.as_mut_ptr(),
                &lwork,
                &mut info,
            )
        };
        if info >= 0 {
            pivots.finish();
        }
        finish(symbol, info)
    }
}
