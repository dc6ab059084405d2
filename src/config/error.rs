//! Configuration error taxonomy.

use thiserror::Error;

use super::bind::BindError;

/// Error raised by the configuration subsystem.
///
/// Every variant except [`ConfigError::InvalidArgument`] carries the
/// colon-delimited path of the most specific key or section that failed;
/// [`ConfigError::path`] exposes it for display at the top level. Re-wrapping
/// by a higher layer preserves the original path and keeps the inner error
/// reachable through `std::error::Error::source`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The caller passed a blank key or section name. A usage defect rather
    /// than a configuration-data defect — carries the offending argument
    /// name, not a configuration path.
    #[error("{0} must not be null or empty")]
    InvalidArgument(&'static str),

    /// The requested key or section does not exist in the source.
    #[error("configuration key or section '{path}' not found")]
    NotFound { path: String },

    /// The key exists but its value is blank. Required lookups only; the
    /// defaulted lookup accepts stored blanks.
    #[error("configuration key '{path}' has an empty value")]
    EmptyValue { path: String },

    /// A bound record's domain invariant is violated.
    #[error("{message}")]
    Validation { message: String, path: String },

    /// Structural binding hit an unexpected conversion problem.
    #[error("error binding configuration section '{path}': {cause}")]
    Bind {
        path: String,
        #[source]
        cause: BindError,
    },

    /// A lower-level error re-wrapped with section-specific corrective
    /// guidance by a typed accessor.
    #[error("{message}")]
    Guidance {
        message: String,
        path: String,
        #[source]
        cause: Box<ConfigError>,
    },
}

impl ConfigError {
    /// The configuration path that failed, when one applies.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument(_) => None,
            Self::NotFound { path }
            | Self::EmptyValue { path }
            | Self::Validation { path, .. }
            | Self::Bind { path, .. }
            | Self::Guidance { path, .. } => Some(path),
        }
    }

    /// Wrap `self` in a guidance error. The original path wins; only when it
    /// is absent or empty does `fallback_path` take its place.
    pub(crate) fn into_guidance(self, fallback_path: &str, message: String) -> ConfigError {
        let path = self
            .path()
            .filter(|p| !p.is_empty())
            .unwrap_or(fallback_path)
            .to_string();
        ConfigError::Guidance {
            message,
            path,
            cause: Box::new(self),
        }
    }
}
