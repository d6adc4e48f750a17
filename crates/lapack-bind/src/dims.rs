//! Buffer extent checks.
//!
//! Buffers arrive as slices, so the layer can verify they are large enough
//! for the dimensions it forwards. Dimensions that are themselves illegal
//! (negative extents, `ld < max(1, rows)`) are not checked here: they are
//! forwarded so the native routine reports them through `info`, which it
//! does before touching any buffer.

use std::borrow::Cow;

use lapack_abi::{BlasInt, narrow_pivots};

use crate::error::{Error, Result};

/// Elements spanned by a `rows x cols` column-major matrix with leading
/// dimension `ld`. `None` when the dimensions are illegal, `Some(None)` when
/// the span is not addressable.
pub(crate) fn matrix_span(rows: i64, cols: i64, ld: i64) -> Option<Option<usize>> {
    if rows < 0 || cols < 0 || ld < rows.max(1) {
        return None;
    }
    if rows == 0 || cols == 0 {
        return Some(Some(0));
    }
    let span = ld
        .checked_mul(cols - 1)
        .and_then(|v| v.checked_add(rows))
        .and_then(|v| usize::try_from(v).ok());
    Some(span)
}

pub(crate) fn check_matrix(
    name: &'static str,
    len: usize,
    rows: i64,
    cols: i64,
    ld: i64,
) -> Result<()> {
    match matrix_span(rows, cols, ld) {
        None => Ok(()),
        Some(Some(required)) if len >= required => Ok(()),
        Some(required) => Err(Error::BufferTooSmall {
            name,
            len,
            required: required.unwrap_or(usize::MAX),
        }),
    }
}

pub(crate) fn check_vector(name: &'static str, len: usize, n: i64) -> Result<()> {
    let Ok(required) = usize::try_from(n) else {
        return Ok(());
    };
    if len < required {
        return Err(Error::BufferTooSmall {
            name,
            len,
            required,
        });
    }
    Ok(())
}

/// Number of leading elements the native routine reads from a length-`n` array.
pub(crate) fn used_len(n: i64) -> usize {
    usize::try_from(n).unwrap_or(0)
}

/// Pivots consumed by a solve, validated and converted to the native width.
pub(crate) fn pivots_in(ipiv: &[i64], n: i64) -> Result<Cow<'_, [BlasInt]>> {
    check_vector("ipiv", ipiv.len(), n)?;
    Ok(narrow_pivots(&ipiv[..used_len(n)], n)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_of_padded_matrix() {
        assert_eq!(matrix_span(3, 4, 5), Some(Some(18)));
        assert_eq!(matrix_span(0, 4, 1), Some(Some(0)));
        assert_eq!(matrix_span(3, 0, 3), Some(Some(0)));
    }

    #[test]
    fn illegal_dimensions_are_left_to_the_native_routine() {
        assert_eq!(matrix_span(-1, 3, 3), None);
        assert_eq!(matrix_span(4, 4, 3), None);
        assert_eq!(matrix_span(0, 0, 0), None);
        assert!(check_matrix("a", 0, 4, 4, 3).is_ok());
    }

    #[test]
    fn short_buffers_are_rejected() {
        assert_eq!(
            check_matrix("a", 8, 3, 3, 3),
            Err(Error::BufferTooSmall {
                name: "a",
                len: 8,
                required: 9
            })
        );
        assert!(check_matrix("a", 9, 3, 3, 3).is_ok());
        assert!(check_vector("s", 2, 3).is_err());
        assert!(check_vector("s", 0, -5).is_ok());
    }

    #[test]
    fn unaddressable_span_is_reported() {
        let err = check_matrix("b", 16, 2, i64::MAX, i64::MAX / 2).expect_err("overflows");
        assert_eq!(
            err,
            Error::BufferTooSmall {
                name: "b",
                len: 16,
                required: usize::MAX
            }
        );
    }

    #[test]
    fn pivots_in_checks_length_and_range() {
        assert!(pivots_in(&[1, 2], 3).is_err());
        assert!(matches!(
            pivots_in(&[1, 5, 3], 3),
            Err(Error::InvalidPivot { index: 1, .. })
        ));
        let pivots = pivots_in(&[2, 2, 3, 99], 3).expect("extra entries are ignored");
        assert_eq!(pivots.len(), 3);
        assert!(pivots_in(&[], -1).expect("nothing read").is_empty());
    }
}
