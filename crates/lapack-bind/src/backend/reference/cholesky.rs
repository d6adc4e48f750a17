//! Unblocked Cholesky factorization and triangular solves.
//!
//! Complex matrices are Hermitian: `A = U^H U` or `A = L L^H`.

use nalgebra::ComplexField;
use num_traits::Zero;

use crate::scalar::{RealOf, Scalar};

/// Factors the stored triangle of `a` in place. Returns 0, or `j + 1` when
/// the leading minor of order `j + 1` is not positive definite; the failing
/// diagonal entry is left holding its reduced value.
pub(super) fn potrf<T: Scalar>(lower: bool, n: usize, a: &mut [T], lda: usize) -> usize {
    let at = |i: usize, j: usize| i + j * lda;

    for j in 0..n {
        let mut ajj: RealOf<T> = a[at(j, j)].real();
        for k in 0..j {
            let ljk = if lower { a[at(j, k)] } else { a[at(k, j)] };
            ajj -= ljk.modulus_squared();
        }
        if !(ajj > RealOf::<T>::zero()) {
            a[at(j, j)] = T::from_real(ajj);
            return j + 1;
        }
        let ajj = ajj.sqrt();
        a[at(j, j)] = T::from_real(ajj.clone());
        let pivot = T::from_real(ajj);

        for i in j + 1..n {
            if lower {
                let mut sum = a[at(i, j)];
                for k in 0..j {
                    sum -= a[at(i, k)] * a[at(j, k)].conjugate();
                }
                a[at(i, j)] = sum / pivot;
            } else {
                let mut sum = a[at(j, i)];
                for k in 0..j {
                    sum -= a[at(k, j)].conjugate() * a[at(k, i)];
                }
                a[at(j, i)] = sum / pivot;
            }
        }
    }
    0
}

/// Solves `A X = B` with a factor produced by [`potrf`].
pub(super) fn potrs<T: Scalar>(
    lower: bool,
    n: usize,
    nrhs: usize,
    a: &[T],
    lda: usize,
    b: &mut [T],
    ldb: usize,
) {
    if n == 0 || nrhs == 0 {
        return;
    }
    let at = |i: usize, j: usize| i + j * lda;

    for c in 0..nrhs {
        let x = &mut b[c * ldb..c * ldb + n];
        if lower {
            // L y = b
            for i in 0..n {
                let mut sum = x[i];
                for k in 0..i {
                    sum -= a[at(i, k)] * x[k];
                }
                x[i] = sum / a[at(i, i)];
            }
            // L^H x = y
            for i in (0..n).rev() {
                let mut sum = x[i];
                for k in i + 1..n {
                    sum -= a[at(k, i)].conjugate() * x[k];
                }
                x[i] = sum / a[at(i, i)];
            }
        } else {
            // U^H y = b
            for i in 0..n {
                let mut sum = x[i];
                for k in 0..i {
                    sum -= a[at(k, i)].conjugate() * x[k];
                }
                x[i] = sum / a[at(i, i)];
            }
            // U x = y
            for i in (0..n).rev() {
                let mut sum = x[i];
                for k in i + 1..n {
                    sum -= a[at(i, k)] * x[k];
                }
                x[i] = sum / a[at(i, i)];
            }
        }
    }
}
