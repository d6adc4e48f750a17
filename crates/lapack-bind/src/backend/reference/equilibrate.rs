//! Symmetric equilibration.
//!
//! Each scale factor is the reciprocal square root of the largest entry in
//! its row, rounded to a power of two so scaling is exact.

use crate::scalar::{RealOf, Scalar};

pub(super) struct Scaling<R> {
    pub scond: R,
    pub amax: R,
}

/// Computes `s` from the stored triangle of `a`, using `work[..n]` for the
/// row maxima. Returns the scaling summary and the status: 0, or `i + 1`
/// for the first row `i` that is entirely zero.
pub(super) fn syequb<T: Scalar>(
    lower: bool,
    n: usize,
    a: &[T],
    lda: usize,
    s: &mut [RealOf<T>],
    work: &mut [T],
) -> (Scaling<RealOf<T>>, usize) {
    let rowmax = &mut work[..n];
    rowmax.fill(T::zero());
    let mut amax = 0.0f64;

    for j in 0..n {
        let rows = if lower { j..n } else { 0..j + 1 };
        for i in rows {
            let v = T::real_to_f64(a[i + j * lda].norm1());
            amax = amax.max(v);
            for k in [i, j] {
                if v > T::real_to_f64(rowmax[k].real()) {
                    rowmax[k] = T::from_real(T::real_from_f64(v));
                }
            }
        }
    }

    let mut scaling = Scaling {
        scond: T::real_from_f64(1.0),
        amax: T::real_from_f64(amax),
    };

    let maxima: Vec<f64> = rowmax.iter().map(|m| T::real_to_f64(m.real())).collect();
    if let Some(zero_row) = maxima.iter().position(|&m| m == 0.0) {
        scaling.scond = T::real_from_f64(0.0);
        return (scaling, zero_row + 1);
    }

    let safe_min = T::real_to_f64(T::safe_min());
    let mut smin = f64::INFINITY;
    let mut smax = 0.0f64;
    for (si, m) in s.iter_mut().zip(&maxima) {
        let scale = (1.0 / m.sqrt()).log2().round().exp2();
        smin = smin.min(scale);
        smax = smax.max(scale);
        *si = T::real_from_f64(scale);
    }
    if n > 0 {
        scaling.scond = T::real_from_f64(smin.max(safe_min) / smax.min(1.0 / safe_min));
    }
    (scaling, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_scaling_is_exact() {
        let a = [4.0f64, 0.0, 0.0, 0.0, 16.0, 0.0, 0.0, 0.0, 0.25];
        let mut s = [0.0; 3];
        let mut work = [0.0; 6];
        let (scaling, info) = syequb(false, 3, &a, 3, &mut s, &mut work);
        assert_eq!(info, 0);
        assert_eq!(s, [0.5, 0.25, 2.0]);
        assert_eq!(scaling.scond, 0.125);
        assert_eq!(scaling.amax, 16.0);
    }

    #[test]
    fn off_diagonal_entries_count_for_both_rows() {
        // only the lower triangle is read
        let a = [1.0f32, 64.0, 99.0, 1.0];
        let mut s = [0.0; 2];
        let mut work = [0.0; 4];
        let (scaling, info) = syequb(true, 2, &a, 2, &mut s, &mut work);
        assert_eq!(info, 0);
        assert_eq!(s, [0.125, 0.125]);
        assert_eq!(scaling.amax, 64.0);
    }

    #[test]
    fn zero_row_is_reported() {
        let a = [1.0f64, 0.0, 0.0, 0.0];
        let mut s = [0.0; 2];
        let mut work = [0.0; 4];
        let (_, info) = syequb(true, 2, &a, 2, &mut s, &mut work);
        assert_eq!(info, 2);
    }
}
