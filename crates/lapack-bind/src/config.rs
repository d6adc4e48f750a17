//! Binding layer configuration.
//!
//! Selects the native backend and bounds workspace allocations. Loadable
//! from JSON or from the environment:
//!
//! - `LAPACK_BIND_BACKEND`: `reference` or `fortran`
//! - `LAPACK_BIND_MAX_WORKSPACE`: element limit for a single workspace

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

pub const BACKEND_ENV: &str = "LAPACK_BIND_BACKEND";
pub const MAX_WORKSPACE_ENV: &str = "LAPACK_BIND_MAX_WORKSPACE";

/// Native routine provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Pure-Rust routines with the native calling convention (always available)
    Reference,
    /// The linked Fortran LAPACK (requires `--features fortran`)
    Fortran,
}

impl Default for BackendKind {
    fn default() -> Self {
        if cfg!(feature = "fortran") {
            BackendKind::Fortran
        } else {
            BackendKind::Reference
        }
    }
}

impl BackendKind {
    pub fn name(&self) -> &'static str {
        match self {
            BackendKind::Reference => "reference",
            BackendKind::Fortran => "fortran",
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "reference" => Ok(BackendKind::Reference),
            "fortran" => Ok(BackendKind::Fortran),
            other => Err(Error::Config(format!("unknown backend {other:?}"))),
        }
    }

    /// Whether this backend was compiled into the build.
    pub fn is_available(&self) -> bool {
        match self {
            BackendKind::Reference => true,
            BackendKind::Fortran => cfg!(feature = "fortran"),
        }
    }
}

/// Complete binding layer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BindingConfig {
    /// Native routine provider
    pub backend: BackendKind,
    /// Upper bound on a single workspace, in elements (unbounded when `None`)
    pub max_workspace: Option<usize>,
}

impl BindingConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: BindingConfig = serde_json::from_str(text)?;
        debug!(backend = config.backend.name(), max_workspace = ?config.max_workspace, "loaded configuration");
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads `LAPACK_BIND_BACKEND` and `LAPACK_BIND_MAX_WORKSPACE`; unset
    /// variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = BindingConfig::default();
        if let Some(name) = lookup(BACKEND_ENV) {
            config.backend = BackendKind::from_name(&name)?;
        }
        if let Some(limit) = lookup(MAX_WORKSPACE_ENV) {
            let limit = limit.trim().parse::<usize>().map_err(|err| {
                Error::Config(format!("{MAX_WORKSPACE_ENV}={limit:?}: {err}"))
            })?;
            config.max_workspace = Some(limit);
        }
        debug!(backend = config.backend.name(), max_workspace = ?config.max_workspace, "configuration from environment");
        Ok(config)
    }

    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_max_workspace(mut self, limit: usize) -> Self {
        self.max_workspace = Some(limit);
        self
    }
}
