//! Enumerated options and their native character codes.

use std::ffi::c_char;

use crate::error::{Error, Result};

/// Which part of a matrix is referenced.
///
/// The symmetric and Hermitian routines take `Upper` or `Lower` only;
/// `General` (the whole matrix) is rejected before any native call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Uplo {
    Upper,
    Lower,
    General,
}

impl Uplo {
    pub fn as_char(self) -> char {
        match self {
            Uplo::Upper => 'U',
            Uplo::Lower => 'L',
            Uplo::General => 'G',
        }
    }

    /// Parses a LAPACK option character (case-insensitive).
    pub fn from_char(code: char) -> Result<Self> {
        match code.to_ascii_uppercase() {
            'U' => Ok(Uplo::Upper),
            'L' => Ok(Uplo::Lower),
            'G' => Ok(Uplo::General),
            _ => Err(Error::InvalidOption {
                name: "uplo",
                option: code,
            }),
        }
    }

    /// Character code for a triangle selector argument.
    pub(crate) fn triangle_code(self) -> Result<c_char> {
        match self {
            Uplo::Upper => Ok(b'U' as c_char),
            Uplo::Lower => Ok(b'L' as c_char),
            Uplo::General => Err(Error::InvalidOption {
                name: "uplo",
                option: self.as_char(),
            }),
        }
    }
}

impl TryFrom<char> for Uplo {
    type Error = Error;

    fn try_from(code: char) -> Result<Self> {
        Uplo::from_char(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_codes() {
        assert_eq!(Uplo::Upper.triangle_code(), Ok(b'U' as c_char));
        assert_eq!(Uplo::Lower.triangle_code(), Ok(b'L' as c_char));
    }

    #[test]
    fn general_is_not_a_triangle() {
        assert_eq!(
            Uplo::General.triangle_code(),
            Err(Error::InvalidOption {
                name: "uplo",
                option: 'G'
            })
        );
    }

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!(Uplo::from_char('u'), Ok(Uplo::Upper));
        assert_eq!(Uplo::try_from('L'), Ok(Uplo::Lower));
        assert!(Uplo::from_char('X').is_err());
        for uplo in [Uplo::Upper, Uplo::Lower, Uplo::General] {
            assert_eq!(Uplo::from_char(uplo.as_char()), Ok(uplo));
        }
    }
}
