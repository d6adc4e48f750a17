//! Symmetric equilibration: `syequb`.

use lapack_abi::{BlasInt, Routine, narrow};
use tracing::trace;

use super::{Lapack, finish};
use crate::backend::{Backend, NativeRoutines};
use crate::dims::{check_matrix, check_vector};
use crate::error::Result;
use crate::options::Uplo;
use crate::scalar::{RealOf, Scalar};
use crate::workspace;

impl<B: Backend> Lapack<B> {
    /// Computes scale factors `s` such that `diag(s) A diag(s)` has entries of
    /// magnitude at most one and rows of comparable norm.
    ///
    /// `scond` receives `min(s) / max(s)` and `amax` the largest entry of `A`
    /// in magnitude. Returns `Ok(i)` with `i > 0` when the `i`-th scale
    /// factor cannot be formed; `s` must then not be used. The reference
    /// backend reports this when row `i` of the stored matrix is exactly
    /// zero. A linked LAPACK may report it for a nonpositive diagonal entry
    /// instead, so the cause depends on the backend.
    #[allow(clippy::too_many_arguments)]
    pub fn syequb<T: Scalar>(
        &self,
        uplo: Uplo,
        n: i64,
        a: &[T],
        lda: i64,
        s: &mut [RealOf<T>],
        scond: &mut RealOf<T>,
        amax: &mut RealOf<T>,
    ) -> Result<i64>
    where
        B: NativeRoutines<T>,
    {
        let symbol = Routine::Syequb.symbol(T::KIND);
        let n_native = narrow("n", n)?;
        let lda_native = narrow("lda", lda)?;
        let uplo_code = uplo.triangle_code()?;
        check_matrix("a", a.len(), n, n, lda)?;
        check_vector("s", s.len(), n)?;

        let mut work = self.workspace::<T>(workspace::syequb_len(n)?)?;
        trace!(%symbol, n, lda, work = work.len(), "calling native routine");
        let mut info: BlasInt = 0;
        // SAFETY: `a` and `s` were checked for the forwarded `n` and `lda`,
        // `work` holds `2n` elements and the remaining pointers are borrows
        // or locals.
        unsafe {
            NativeRoutines::<T>::syequb(
                &self.backend,
                &uplo_code,
                &n_native,
                a.as_ptr(),
                &lda_native,
                s.as_mut_ptr(),
                scond,
                amax,
                work.as_mut_ptr(),
                &mut info,
            )
        };
        finish(symbol, info)
    }
}
