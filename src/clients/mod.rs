//! HTTP layer for GraphQL requests.
//!
//! This module covers everything between a resolved [`Config`](crate::Config)
//! and the bytes on standard output:
//!
//! - [`GraphqlRequest`]: the `{query, variables}` payload and its resolution
//! - [`HttpClient`]: posts the payload to the endpoint
//! - [`write_diagnostics`] / [`stream_body`]: the output writer
//! - [`HttpError`]: failures of the exchange
//!
//! # Example
//!
//! ```rust,ignore
//! use gq::Config;
//! use gq::clients::{stream_body, GraphqlRequest, HttpClient};
//!
//! let config = Config::builder().query("{ ping }").build();
//! let body = GraphqlRequest::from_config(&config)?.to_body()?;
//! let response = HttpClient::new(&config)?.send(body).await?;
//! stream_body(response, &mut std::io::stdout().lock()).await?;
//! ```
//!
//! # Retry Behavior
//!
//! There is none. Every failure is returned to the caller as-is, and any
//! HTTP status, including 4xx and 5xx, counts as a response to print.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::HttpError;
pub use http_client::{HttpClient, GQ_VERSION};
pub use http_request::{resolve_query, resolve_variables, GraphqlRequest, Variables};
pub use http_response::{canonical_header_name, stream_body, write_diagnostics, write_head};
