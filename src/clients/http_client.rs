//! Request dispatcher.
//!
//! This module provides [`HttpClient`], which sends one GraphQL request as an
//! HTTP POST and hands back the unread response.

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};

use crate::clients::errors::HttpError;
use crate::config::Config;

/// Crate version from Cargo.toml.
pub const GQ_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for posting a GraphQL request to a single endpoint.
///
/// The client handles:
/// - A default `User-Agent` header
/// - Caller headers, which replace any default of the same name
/// - Posting the serialized payload as-is
///
/// No `Content-Type` is set; pass one through the headers if the server
/// needs it. Transport settings are the `reqwest` defaults: no timeout, the
/// standard redirect policy, and no retries.
///
/// # Example
///
/// ```rust,ignore
/// use gq::{Config, HttpClient};
/// use gq::clients::GraphqlRequest;
///
/// let config = Config::builder().query("{ ping }").build();
/// let client = HttpClient::new(&config)?;
/// let body = GraphqlRequest::from_config(&config)?.to_body()?;
/// let response = client.send(body).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Endpoint the request is posted to.
    url: String,
    /// Headers applied to the request.
    headers: HeaderMap,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a client for the endpoint and headers in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidHeader`] if a configured header name or
    /// value is not valid HTTP, and [`HttpError::Network`] if the underlying
    /// client cannot be initialised.
    pub fn new(config: &Config) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            url: config.url().to_string(),
            headers: Self::build_headers(config.headers())?,
        })
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the headers that will be sent.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Posts the serialized payload `body` and returns the response with its
    /// body unread.
    ///
    /// Any status code is a successful exchange; GraphQL servers report
    /// errors in the body, and the body is what the caller prints.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the URL is invalid or the request
    /// cannot be delivered.
    pub async fn send(&self, body: Vec<u8>) -> Result<reqwest::Response, HttpError> {
        tracing::debug!("POST {} ({} bytes)", self.url, body.len());

        let response = self
            .client
            .post(&self.url)
            .headers(self.headers.clone())
            .body(body)
            .send()
            .await?;

        tracing::debug!(
            "received {:?} {} from {}",
            response.version(),
            response.status(),
            self.url
        );
        Ok(response)
    }

    /// Builds the header map: defaults first, then caller headers replacing them.
    fn build_headers(extra: &HashMap<String, String>) -> Result<HeaderMap, HttpError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("gq/", env!("CARGO_PKG_VERSION"))),
        );

        for (name, value) in extra {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| HttpError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| HttpError::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }
}
