use std::borrow::Cow;

use thiserror::Error;

/// Integer type of the linked LAPACK (`lapack_int`).
#[cfg(not(feature = "ilp64"))]
pub type BlasInt = i32;

/// Integer type of the linked LAPACK (`lapack_int`).
#[cfg(feature = "ilp64")]
pub type BlasInt = i64;

/// Hidden length argument gfortran appends for each `CHARACTER` argument.
pub type FortranStrlen = usize;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AbiError {
    #[error("{name} = {value} does not fit in a {bits}-bit LAPACK integer")]
    Overflow {
        name: &'static str,
        value: i64,
        bits: u32,
    },

    #[error("ipiv[{index}] = {value} is outside 1..={n}")]
    PivotOutOfRange { index: usize, value: i64, n: i64 },
}

/// Range-checked conversion of a caller size to the native integer width.
pub fn narrow(name: &'static str, value: i64) -> Result<BlasInt, AbiError> {
    BlasInt::try_from(value).map_err(|_| AbiError::Overflow {
        name,
        value,
        bits: BlasInt::BITS,
    })
}

/// Validates 1-based pivot indices against the matrix order `n` and returns
/// them in the native width.
///
/// Borrows the caller's array when the widths agree; otherwise produces a
/// converted copy. The copy is read-only input for the native routine and is
/// never written back.
pub fn narrow_pivots(ipiv: &[i64], n: i64) -> Result<Cow<'_, [BlasInt]>, AbiError> {
    for (index, &value) in ipiv.iter().enumerate() {
        if value < 1 || value > n {
            return Err(AbiError::PivotOutOfRange { index, value, n });
        }
    }
    to_native(ipiv)
}

#[cfg(feature = "ilp64")]
fn to_native(ipiv: &[i64]) -> Result<Cow<'_, [BlasInt]>, AbiError> {
    Ok(Cow::Borrowed(ipiv))
}

#[cfg(not(feature = "ilp64"))]
fn to_native(ipiv: &[i64]) -> Result<Cow<'_, [BlasInt]>, AbiError> {
    ipiv.iter()
        .map(|&p| narrow("ipiv", p))
        .collect::<Result<Vec<_>, _>>()
        .map(Cow::Owned)
}

/// Pivot output buffer for routines that write `ipiv`.
///
/// The native routine writes into a native-width buffer; [`PivotsOut::finish`]
/// widens the result back into the caller's array.
pub struct PivotsOut<'a> {
    caller: &'a mut [i64],
    #[cfg(not(feature = "ilp64"))]
    native: Vec<BlasInt>,
}

impl<'a> PivotsOut<'a> {
    pub fn new(caller: &'a mut [i64]) -> Self {
        Self {
            #[cfg(not(feature = "ilp64"))]
            native: vec![0; caller.len()],
            caller,
        }
    }

    pub fn len(&self) -> usize {
        self.caller.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caller.is_empty()
    }

    #[cfg(feature = "ilp64")]
    pub fn as_mut_ptr(&mut self) -> *mut BlasInt {
        self.caller.as_mut_ptr()
    }

    #[cfg(not(feature = "ilp64"))]
    pub fn as_mut_ptr(&mut self) -> *mut BlasInt {
        self.native.as_mut_ptr()
    }

    #[cfg(feature = "ilp64")]
    pub fn finish(self) {}

    #[cfg(not(feature = "ilp64"))]
    pub fn finish(self) {
        for (dst, &src) in self.caller.iter_mut().zip(&self.native) {
            *dst = i64::from(src);
        }
    }
}
