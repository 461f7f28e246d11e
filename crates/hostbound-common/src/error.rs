//! Unified error types for the hostbound workspace.
//!
//! Each higher-level crate defines its own domain-specific error enum that
//! wraps these common variants when appropriate. Note what is *not* here: a
//! failed container-detection heuristic is never an error — it folds into a
//! negative signal.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum HostboundError {
    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Both cgroup generations were present but unparsable, or both absent.
    #[error("{resource} limit could not be determined from cgroup v2 or v1")]
    LimitUnknown {
        /// Resource whose limit could not be read ("cpu" or "memory").
        resource: &'static str,
    },

    /// The cgroup reports no ceiling at all; an unlimited quota is not a
    /// usable budget and callers must not treat it as one.
    #[error("cgroup reports an unlimited {resource} ceiling; refusing to guess a budget")]
    UnboundedLimit {
        /// Resource with the unlimited ceiling.
        resource: &'static str,
    },

    /// A host pseudo-file exists but lacks the expected field.
    #[error("field {field:?} missing or malformed in {path}")]
    HostInfoMissing {
        /// Pseudo-file that was scanned.
        path: PathBuf,
        /// Field that was expected.
        field: &'static str,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, HostboundError>;
