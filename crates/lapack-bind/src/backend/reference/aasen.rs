//! Aasen's factorization of a symmetric matrix.
//!
//! `P A P^T = L T L^T` with `L` unit lower triangular whose first column is
//! `e_1` and `T` symmetric tridiagonal. Complex matrices are symmetric, not
//! Hermitian: nothing is conjugated.
//!
//! Storage in the caller's triangle (shown for `Lower`; `Upper` is the
//! transpose): the diagonal holds `T`'s diagonal, the first subdiagonal holds
//! `T`'s off-diagonal, and `L(r, c)` for `r > c >= 1` sits at `(r, c - 1)`.

use crate::scalar::Scalar;

/// Position of the lower-triangle entry `(i, j)`, `i >= j`, in the stored
/// triangle.
fn stored(lower: bool, lda: usize, i: usize, j: usize) -> usize {
    if lower { i + j * lda } else { j + i * lda }
}

/// Factors the stored triangle of `a` in place, writing 1-based pivots into
/// `ipiv` and using `work[..2n]` as scratch.
pub(super) fn sytrf_aa<T: Scalar>(
    lower: bool,
    n: usize,
    a: &mut [T],
    lda: usize,
    ipiv: &mut [usize],
    work: &mut [T],
) {
    if n == 0 {
        return;
    }

    // full symmetric copy, permuted as pivots are chosen
    let mut full = vec![T::zero(); n * n];
    for j in 0..n {
        for i in j..n {
            let value = a[stored(lower, lda, i, j)];
            full[i + j * n] = value;
            full[j + i * n] = value;
        }
    }
    let mut l = vec![T::zero(); n * n];
    l[0] = T::one();
    let mut alpha = vec![T::zero(); n];
    let mut beta = vec![T::zero(); n.saturating_sub(1)];
    let (h, v) = work[..2 * n].split_at_mut(n);
    ipiv[0] = 1;

    for j in 0..n {
        // column j of H = T L^T above the diagonal
        for k in 0..j {
            let mut hk = alpha[k] * l[j + k * n] + beta[k] * l[j + (k + 1) * n];
            if k > 0 {
                hk += beta[k - 1] * l[j + (k - 1) * n];
            }
            h[k] = hk;
        }
        let mut hjj = full[j + j * n];
        for k in 0..j {
            hjj -= l[j + k * n] * h[k];
        }
        h[j] = hjj;
        alpha[j] = if j > 0 {
            hjj - beta[j - 1] * l[j + (j - 1) * n]
        } else {
            hjj
        };

        if j + 1 == n {
            break;
        }

        for i in j + 1..n {
            let mut vi = full[i + j * n];
            for k in 0..=j {
                vi -= l[i + k * n] * h[k];
            }
            v[i] = vi;
        }

        let mut p = j + 1;
        for i in j + 2..n {
            if v[i].norm1() > v[p].norm1() {
                p = i;
            }
        }
        if p != j + 1 {
            let q = j + 1;
            v.swap(q, p);
            for k in 0..=j {
                l.swap(q + k * n, p + k * n);
            }
            for k in 0..n {
                full.swap(q + k * n, p + k * n);
            }
            for k in 0..n {
                full.swap(k + q * n, k + p * n);
            }
        }
        ipiv[j + 1] = p + 1;

        let pivot = v[j + 1];
        beta[j] = pivot;
        l[(j + 1) + (j + 1) * n] = T::one();
        for i in j + 2..n {
            l[i + (j + 1) * n] = if pivot.is_zero() {
                T::zero()
            } else {
                v[i] / pivot
            };
        }
    }

    for k in 0..n {
        a[stored(lower, lda, k, k)] = alpha[k];
        if k + 1 < n {
            a[stored(lower, lda, k + 1, k)] = beta[k];
        }
    }
    for c in 1..n {
        for r in c + 1..n {
            a[stored(lower, lda, r, c - 1)] = l[r + c * n];
        }
    }
}

/// Solves `A X = B` with a factor from [`sytrf_aa`], using `work[..3n-2]`
/// for the tridiagonal solve. Returns 0, or `i + 1` when the `i`-th pivot
/// of the tridiagonal elimination is exactly zero.
#[allow(clippy::too_many_arguments)]
pub(super) fn sytrs_aa<T: Scalar>(
    lower: bool,
    n: usize,
    nrhs: usize,
    a: &[T],
    lda: usize,
    ipiv: &[usize],
    b: &mut [T],
    ldb: usize,
    work: &mut [T],
) -> usize {
    if n == 0 || nrhs == 0 {
        return 0;
    }
    let swap_rows = |b: &mut [T], r: usize, s: usize| {
        for c in 0..nrhs {
            b.swap(r + c * ldb, s + c * ldb);
        }
    };

    // P b
    for (k, &p) in ipiv.iter().enumerate().take(n) {
        if p - 1 != k {
            swap_rows(b, k, p - 1);
        }
    }

    // L y = P b
    for c in 1..n {
        for r in c + 1..n {
            let lrc = a[stored(lower, lda, r, c - 1)];
            for col in 0..nrhs {
                let bc = b[c + col * ldb];
                b[r + col * ldb] -= lrc * bc;
            }
        }
    }

    // T z = y
    let (dl, rest) = work[..3 * n - 2].split_at_mut(n - 1);
    let (d, du) = rest.split_at_mut(n);
    for k in 0..n {
        d[k] = a[stored(lower, lda, k, k)];
        if k + 1 < n {
            let off = a[stored(lower, lda, k + 1, k)];
            dl[k] = off;
            du[k] = off;
        }
    }
    let info = gtsv(n, nrhs, dl, d, du, b, ldb);
    if info != 0 {
        return info;
    }

    // L^T x = z
    for c in (1..n).rev() {
        for r in c + 1..n {
            let lrc = a[stored(lower, lda, r, c - 1)];
            for col in 0..nrhs {
                let br = b[r + col * ldb];
                b[c + col * ldb] -= lrc * br;
            }
        }
    }

    // P^T x
    for (k, &p) in ipiv.iter().enumerate().take(n).rev() {
        if p - 1 != k {
            swap_rows(b, k, p - 1);
        }
    }
    0
}

/// Tridiagonal solve by Gaussian elimination with partial pivoting. `dl`
/// is reused for the fill-in of the second superdiagonal.
fn gtsv<T: Scalar>(
    n: usize,
    nrhs: usize,
    dl: &mut [T],
    d: &mut [T],
    du: &mut [T],
    b: &mut [T],
    ldb: usize,
) -> usize {
    for i in 0..n - 1 {
        if d[i].norm1() >= dl[i].norm1() {
            if d[i].is_zero() {
                return i + 1;
            }
            let fact = dl[i] / d[i];
            d[i + 1] -= fact * du[i];
            for c in 0..nrhs {
                let bi = b[i + c * ldb];
                b[i + 1 + c * ldb] -= fact * bi;
            }
            dl[i] = T::zero();
        } else {
            let fact = d[i] / dl[i];
            d[i] = dl[i];
            let temp = d[i + 1];
            d[i + 1] = du[i] - fact * temp;
            if i + 2 < n {
                dl[i] = du[i + 1];
                du[i + 1] = -fact * dl[i];
            } else {
                dl[i] = T::zero();
            }
            du[i] = temp;
            for c in 0..nrhs {
                let bi = b[i + c * ldb];
                let bn = b[i + 1 + c * ldb];
                b[i + c * ldb] = bn;
                b[i + 1 + c * ldb] = bi - fact * bn;
            }
        }
    }
    if d[n - 1].is_zero() {
        return n;
    }

    for c in 0..nrhs {
        let x = &mut b[c * ldb..c * ldb + n];
        x[n - 1] /= d[n - 1];
        if n > 1 {
            x[n - 2] = (x[n - 2] - du[n - 2] * x[n - 1]) / d[n - 2];
        }
        for i in (0..n.saturating_sub(2)).rev() {
            x[i] = (x[i] - du[i] * x[i + 1] - dl[i] * x[i + 2]) / d[i];
        }
    }
    0
}
