//! Per-call scratch workspace and its sizing formulas.

use lapack_abi::BlasInt;
use tracing::trace;

use crate::error::{Error, Result};
use crate::scalar::Scalar;

/// Scratch buffer owned by a single native call.
///
/// Always holds at least one element, since native routines take the
/// address of `work[0]` even when they need no scratch space.
pub struct Workspace<T> {
    buf: Vec<T>,
}

impl<T: Scalar> Workspace<T> {
    /// Allocates `len` zeroed elements (at least one), honoring an optional
    /// element limit. A length that does not fit the native `lwork` is
    /// rejected before anything is allocated.
    pub fn new(len: i64, limit: Option<usize>) -> Result<Self> {
        let len = len.max(1);
        lapack_abi::narrow("lwork", len)?;
        let len = usize::try_from(len).map_err(|_| overflow(len))?;
        if let Some(limit) = limit {
            if len > limit {
                return Err(Error::WorkspaceTooLarge {
                    requested: len,
                    limit,
                });
            }
        }
        trace!(len, kind = ?T::KIND, "allocating workspace");
        Ok(Self {
            buf: vec![T::zero(); len],
        })
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Length in the native integer width, for the `lwork` argument.
    pub fn lwork(&self) -> Result<BlasInt> {
        let len = i64::try_from(self.buf.len()).map_err(|_| overflow(i64::MAX))?;
        Ok(lapack_abi::narrow("lwork", len)?)
    }

    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }
}

fn overflow(value: i64) -> Error {
    Error::DimensionOverflow {
        name: "lwork",
        value,
        bits: BlasInt::BITS,
    }
}

/// `syequb`: `2n` elements.
pub fn syequb_len(n: i64) -> Result<i64> {
    let len = n.checked_mul(2).ok_or_else(|| overflow(n))?;
    Ok(len.max(1))
}

/// `sytrs_aa`: `max(1, 3n - 2)` elements.
pub fn sytrs_aa_len(n: i64) -> Result<i64> {
    let len = n
        .checked_mul(3)
        .and_then(|v| v.checked_sub(2))
        .ok_or_else(|| overflow(n))?;
    Ok(len.max(1))
}

/// Minimum accepted by `sytrf_aa`: `max(1, 2n)`.
pub fn sytrf_aa_min(n: i64) -> Result<i64> {
    syequb_len(n)
}

/// Minimum accepted by `sysv_aa`: `max(1, 2n, 3n - 2)`.
pub fn sysv_aa_min(n: i64) -> Result<i64> {
    Ok(sytrf_aa_min(n)?.max(sytrs_aa_len(n)?))
}

/// Reads the optimal size a workspace query left in `work[0]`, never going
/// below `minimum`.
pub fn from_query<T: Scalar>(work0: T, minimum: i64) -> i64 {
    let (optimal, _) = work0.to_parts();
    if optimal.is_finite() && optimal > minimum as f64 {
        if optimal >= i64::MAX as f64 {
            i64::MAX
        } else {
            optimal.ceil() as i64
        }
    } else {
        minimum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;
    use proptest::prelude::*;

    #[test]
    fn solve_workspace_is_clamped_to_one() {
        assert_eq!(sytrs_aa_len(0), Ok(1));
        assert_eq!(sytrs_aa_len(1), Ok(1));
        assert_eq!(sytrs_aa_len(-3), Ok(1));
        assert_eq!(sytrs_aa_len(4), Ok(10));
    }

    #[test]
    fn equilibration_workspace() {
        assert_eq!(syequb_len(0), Ok(1));
        assert_eq!(syequb_len(5), Ok(10));
        assert!(syequb_len(i64::MAX).is_err());
    }

    #[test]
    fn sysv_minimum_covers_both_phases() {
        assert_eq!(sysv_aa_min(0), Ok(1));
        assert_eq!(sysv_aa_min(1), Ok(2));
        assert_eq!(sysv_aa_min(2), Ok(4));
        assert_eq!(sysv_aa_min(10), Ok(28));
    }

    #[test]
    fn query_result_is_rounded_up_and_clamped() {
        assert_eq!(from_query(12.2f64, 4), 13);
        assert_eq!(from_query(2.0f64, 4), 4);
        assert_eq!(from_query(Complex64::new(64.0, 0.0), 8), 64);
        assert_eq!(from_query(f64::NAN, 8), 8);
    }

    #[test]
    fn workspace_is_never_empty() {
        let mut work = Workspace::<f64>::new(0, None).expect("allocates");
        assert_eq!(work.len(), 1);
        assert_eq!(work.lwork(), Ok(1));
        assert!(!work.as_mut_ptr().is_null());
    }

    #[test]
    fn workspace_limit_is_enforced() {
        let err = Workspace::<f32>::new(100, Some(64)).err();
        assert_eq!(
            err,
            Some(Error::WorkspaceTooLarge {
                requested: 100,
                limit: 64
            })
        );
    }

    #[cfg(not(feature = "ilp64"))]
    #[test]
    fn oversized_workspace_is_rejected_before_allocation() {
        let len = i64::from(i32::MAX) + 1;
        let err = Workspace::<Complex64>::new(len, None).err();
        assert_eq!(
            err,
            Some(Error::DimensionOverflow {
                name: "lwork",
                value: len,
                bits: 32
            })
        );
    }

    proptest! {
        #[test]
        fn solve_workspace_matches_formula(n in 1i64..1_000_000) {
            prop_assert_eq!(sytrs_aa_len(n).unwrap(), 3 * n - 2);
        }

        #[test]
        fn workspace_sizes_are_positive(n in -1_000i64..1_000_000) {
            prop_assert!(syequb_len(n).unwrap() >= 1);
            prop_assert!(sytrs_aa_len(n).unwrap() >= 1);
            prop_assert!(sysv_aa_min(n).unwrap() >= sytrf_aa_min(n).unwrap());
        }
    }
}
