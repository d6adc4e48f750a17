//! Error types for lapack-bind

use lapack_abi::{AbiError, Symbol};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the binding layer.
///
/// Positive native statuses are not errors; they are returned as `Ok(info)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{name} = {value} does not fit in a {bits}-bit LAPACK integer")]
    DimensionOverflow {
        name: &'static str,
        value: i64,
        bits: u32,
    },

    #[error("invalid option {option:?} for {name}")]
    InvalidOption { name: &'static str, option: char },

    #[error("buffer {name} holds {len} elements but {required} are required")]
    BufferTooSmall {
        name: &'static str,
        len: usize,
        required: usize,
    },

    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("{name} has {rows} rows, expected {expected}")]
    RowMismatch {
        name: &'static str,
        rows: usize,
        expected: usize,
    },

    #[error("ipiv[{index}] = {value} is outside 1..={n}")]
    InvalidPivot { index: usize, value: i64, n: i64 },

    #[error("workspace of {requested} elements exceeds the configured limit of {limit}")]
    WorkspaceTooLarge { requested: usize, limit: usize },

    #[error("{symbol} reported an illegal argument (info = {info})")]
    IllegalArgument { symbol: Symbol, info: i64 },

    #[error("backend {0} is not available in this build")]
    BackendUnavailable(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Whether the layer rejected the call before reaching the native routine.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Error::DimensionOverflow { .. }
                | Error::InvalidOption { .. }
                | Error::BufferTooSmall { .. }
                | Error::NotSquare { .. }
                | Error::RowMismatch { .. }
                | Error::InvalidPivot { .. }
                | Error::WorkspaceTooLarge { .. }
        )
    }

    /// Whether the native routine rejected an argument (negative `info`).
    pub fn is_illegal_argument(&self) -> bool {
        matches!(self, Error::IllegalArgument { .. })
    }

    /// The 1-based position of the rejected argument, for native rejections.
    pub fn argument_position(&self) -> Option<i64> {
        match self {
            Error::IllegalArgument { info, .. } => Some(-info),
            _ => None,
        }
    }
}

impl From<AbiError> for Error {
    fn from(err: AbiError) -> Self {
        match err {
            AbiError::Overflow { name, value, bits } => {
                Error::DimensionOverflow { name, value, bits }
            }
            AbiError::PivotOutOfRange { index, value, n } => {
                Error::InvalidPivot { index, value, n }
            }
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}
