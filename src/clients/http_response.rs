//! Output writer.
//!
//! Writes the optional verbose diagnostics (status line and headers) and then
//! copies the response body to the output stream chunk by chunk, so large
//! responses are never held in memory.

use std::io::Write;

use reqwest::header::HeaderMap;
use reqwest::{Response, StatusCode, Version};

use crate::clients::errors::HttpError;

/// Writes the status line and headers of `response`, followed by a blank line.
///
/// # Errors
///
/// Returns [`HttpError::Output`] if writing to `out` fails.
pub fn write_diagnostics<W: Write>(response: &Response, out: &mut W) -> Result<(), HttpError> {
    write_head(response.version(), response.status(), response.headers(), out)
}

/// Writes a response head in `HTTP/1.1 200 OK` / `Name: value` form.
///
/// Each value of a repeated header is written on its own line. Names are
/// rendered in canonical form (`content-type` becomes `Content-Type`).
///
/// # Errors
///
/// Returns [`HttpError::Output`] if writing to `out` fails.
///
/// # Example
///
/// ```rust
/// use gq::clients::write_head;
/// use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
/// use reqwest::{StatusCode, Version};
///
/// let mut headers = HeaderMap::new();
/// headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
///
/// let mut out = Vec::new();
/// write_head(Version::HTTP_11, StatusCode::OK, &headers, &mut out).unwrap();
/// assert_eq!(out, b"HTTP/1.1 200 OK\nContent-Type: application/json\n\n");
/// ```
pub fn write_head<W: Write>(
    version: Version,
    status: StatusCode,
    headers: &HeaderMap,
    out: &mut W,
) -> Result<(), HttpError> {
    writeln!(out, "{version:?} {status}")?;
    for (name, value) in headers {
        out.write_all(canonical_header_name(name.as_str()).as_bytes())?;
        out.write_all(b": ")?;
        out.write_all(value.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

/// Copies the response body to `out` until end of stream.
///
/// Returns the number of bytes written. On failure, whatever was already
/// written stays written.
///
/// # Errors
///
/// - [`HttpError::BodyStream`] if the connection fails mid-body
/// - [`HttpError::Output`] if writing to `out` fails
pub async fn stream_body<W: Write>(mut response: Response, out: &mut W) -> Result<u64, HttpError> {
    let mut written: u64 = 0;
    while let Some(chunk) = response.chunk().await.map_err(HttpError::BodyStream)? {
        tracing::trace!("copying {} byte chunk", chunk.len());
        out.write_all(&chunk)?;
        out.flush()?;
        written += chunk.len() as u64;
    }
    tracing::debug!("copied {written} bytes of response body");
    Ok(written)
}

/// Canonicalizes a header name: the first letter and every letter after a
/// hyphen are upper case, the rest lower case.
///
/// Names containing characters outside `[A-Za-z0-9-]` are returned unchanged.
#[must_use]
pub fn canonical_header_name(name: &str) -> String {
    if !name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
        return name.to_string();
    }

    let mut upper = true;
    name.chars()
        .map(|c| {
            let mapped = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            mapped
        })
        .collect()
}
