//! HTTP-specific error types.
//!
//! - [`HttpError::InvalidHeader`]: a caller header is not valid HTTP
//! - [`HttpError::Network`]: the request could not be built or sent
//! - [`HttpError::BodyStream`]: the response body failed mid-stream
//! - [`HttpError::Output`]: writing diagnostics or the body failed
//!
//! None of these are retried.

use thiserror::Error;

/// Unified error type for the request dispatcher and output writer.
///
/// # Example
///
/// ```rust
/// use gq::clients::HttpError;
///
/// let error = HttpError::InvalidHeader {
///     name: "Bad Name".to_string(),
///     reason: "invalid HTTP header name".to_string(),
/// };
/// assert_eq!(error.to_string(), "invalid header 'Bad Name': invalid HTTP header name");
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// A configured header name or value cannot be sent.
    #[error("invalid header '{name}': {reason}")]
    InvalidHeader {
        /// The header name as configured.
        name: String,
        /// Why the header was rejected.
        reason: String,
    },

    /// Building or sending the request failed (bad URL, DNS, refused, TLS).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The connection failed while the body was being read.
    #[error("error reading response body: {0}")]
    BodyStream(#[source] reqwest::Error),

    /// Writing to the output or diagnostic stream failed.
    #[error("error writing output: {0}")]
    Output(#[from] std::io::Error),
}
