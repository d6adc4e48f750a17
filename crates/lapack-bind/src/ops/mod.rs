//! Typed operations over a native backend.
//!
//! Every operation follows the same sequence before and after the native
//! call:
//!
//! 1. narrow each `i64` size to `BlasInt` (overflow is an error, nothing is called)
//! 2. translate the triangle selector to its character code
//! 3. check buffer extents and pivot ranges
//! 4. size and allocate the workspace (querying the routine where it sizes its own)
//! 5. call the routine
//! 6. map the status: negative is [`Error::IllegalArgument`], otherwise it is returned
//!
//! Positive statuses are data, not errors; their meaning is documented on
//! each operation.

mod aasen;
mod cholesky;
mod equilibrate;

use std::cmp::Ordering;

use lapack_abi::{BlasInt, Routine, Symbol};
use tracing::debug;

use crate::backend::{AnyBackend, Backend, DefaultBackend};
use crate::config::BindingConfig;
use crate::error::{Error, Result};
use crate::scalar::Scalar;
use crate::workspace::Workspace;

/// Handle to a native backend.
///
/// Holds no mutable state: one handle can serve any number of threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lapack<B = DefaultBackend> {
    backend: B,
    max_workspace: Option<usize>,
}

impl<B: Backend> Lapack<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            max_workspace: None,
        }
    }

    /// Caps every workspace allocation at `limit` elements.
    pub fn with_max_workspace(mut self, limit: usize) -> Self {
        self.max_workspace = Some(limit);
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn max_workspace(&self) -> Option<usize> {
        self.max_workspace
    }

    fn workspace<T: Scalar>(&self, len: i64) -> Result<Workspace<T>> {
        Workspace::new(len, self.max_workspace)
    }
}

impl Lapack<AnyBackend> {
    /// Builds a handle over the backend named in `config`.
    pub fn from_config(config: &BindingConfig) -> Result<Self> {
        let backend = AnyBackend::from_kind(config.backend)?;
        Ok(Self {
            backend,
            max_workspace: config.max_workspace,
        })
    }
}

/// What a positive status means for `routine`.
///
/// For `syequb` only the failed scale factor is named: the reference
/// backend reports a zero row, a linked LAPACK may instead report a
/// nonpositive diagonal entry.
fn positive_status(routine: Routine) -> &'static str {
    match routine {
        Routine::Syequb => "scale factor could not be formed",
        Routine::SytrsAa | Routine::SysvAa => "tridiagonal factor is exactly singular",
        Routine::Potrf | Routine::Posv => "leading minor is not positive definite",
        Routine::SytrfAa | Routine::Potrs => "unexpected positive status",
    }
}

/// Maps a native status to the operation result.
pub(crate) fn finish(symbol: Symbol, info: BlasInt) -> Result<i64> {
    let info = i64::from(info);
    match info.cmp(&0) {
        Ordering::Less => {
            debug!(%symbol, info, "native routine rejected an argument");
            Err(Error::IllegalArgument { symbol, info })
        }
        Ordering::Greater => {
            debug!(%symbol, info, condition = positive_status(symbol.routine), "native routine returned a positive status");
            Ok(info)
        }
        Ordering::Equal => Ok(0),
    }
}
