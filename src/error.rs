//! Error types for the `gq` client.
//!
//! Every failure in `gq` is fatal: the pipeline stops at the failing step and
//! the binary exits with a non-zero status. The types here exist so each step
//! can report *what* went wrong, not to drive any recovery.
//!
//! - [`ConfigError`]: usage problems (no query, malformed header pair)
//! - [`GqError`]: the top-level error returned by [`crate::run`]
//!
//! # Example
//!
//! ```rust
//! use gq::{ConfigError, GqError};
//!
//! let error: GqError = ConfigError::MissingQuery.into();
//! assert_eq!(error.to_string(), "a query must be provided");
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

use crate::clients::HttpError;

/// Usage errors detected while building the configuration or the payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither an inline query nor a query file was supplied.
    #[error("a query must be provided")]
    MissingQuery,

    /// A header argument was not of the form `KEY=VALUE`.
    #[error("expected KEY=VALUE got '{input}'")]
    InvalidHeader {
        /// The raw argument that was provided.
        input: String,
    },
}

/// Top-level error for a single `gq` invocation.
///
/// The variants follow the pipeline: configuration, reading query or
/// variables files, decoding variables, and finally the HTTP exchange.
#[derive(Debug, Error)]
pub enum GqError {
    /// Invalid usage.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A query or variables file could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Variables were not a JSON object.
    #[error("invalid JSON variables in {source_label}: {source}")]
    Parse {
        /// Where the variables came from (`--vars` or a file path).
        source_label: String,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// Building, sending or streaming the HTTP exchange failed.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl GqError {
    /// The process exit status for this error.
    ///
    /// All failures share one status; callers should not rely on any finer
    /// distinction.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        ExitCode::FAILURE
    }
}
