//! # gq
//!
//! A command-line client that sends one GraphQL query to an HTTP endpoint and
//! prints the raw response body to standard output.
//!
//! ## Overview
//!
//! A run is a single linear pass:
//!
//! 1. [`cli::Cli`] parses flags into an immutable [`Config`]
//! 2. [`clients::GraphqlRequest`] resolves the query and variables and
//!    serializes `{"query": ..., "variables": ...}`
//! 3. [`HttpClient`] POSTs the body with the configured headers
//! 4. [`clients::write_diagnostics`] optionally writes the status line and
//!    headers to stderr, then [`clients::stream_body`] copies the body to
//!    stdout
//!
//! Every failure is fatal; [`run`] returns the first one as a [`GqError`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use gq::Config;
//!
//! let config = Config::builder()
//!     .url("http://127.0.0.1:3000/graphql")
//!     .query("{ ping }")
//!     .header("Content-Type", "application/json")
//!     .build();
//!
//! gq::run(&config, &mut std::io::stdout(), &mut std::io::stderr()).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is built once and passed explicitly
//! - **Raw output**: the response body is streamed through unmodified
//! - **No retries**: any HTTP status is printed, any transport error is fatal

pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod logging;

use std::io::Write;

pub use clients::{GraphqlRequest, HttpClient, HttpError};
pub use config::{Config, ConfigBuilder, HeaderPair, DEFAULT_URL};
pub use error::{ConfigError, GqError};

/// Runs one query described by `config`.
///
/// The payload is resolved before any network I/O, so a missing query or
/// broken variables never reach the endpoint. With `config.verbose()` the
/// response head is written to `diagnostics` before any body byte is written
/// to `output`.
///
/// Returns the number of body bytes written.
///
/// # Errors
///
/// Returns the first [`GqError`] raised by any step. Bytes already written to
/// `output` are not rolled back.
pub async fn run<O, D>(config: &Config, output: &mut O, diagnostics: &mut D) -> Result<u64, GqError>
where
    O: Write,
    D: Write,
{
    let body = GraphqlRequest::from_config(config)?.to_body()?;
    let client = HttpClient::new(config)?;
    let response = client.send(body).await?;

    if config.verbose() {
        clients::write_diagnostics(&response, diagnostics)?;
    }

    Ok(clients::stream_body(response, output).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_run_without_query_makes_no_request() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let config = Config::builder().url(mock_server.uri()).build();
        let (mut out, mut err) = (Vec::new(), Vec::new());

        let result = run(&config, &mut out, &mut err).await;
        assert!(matches!(result, Err(GqError::Config(ConfigError::MissingQuery))));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_run_streams_body_and_skips_diagnostics_when_quiet() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("x-request-id", "req-1")
                    .set_body_string(r#"{"data":{"ping":"pong"}}"#),
            )
            .mount(&mock_server)
            .await;

        let config = Config::builder()
            .url(mock_server.uri())
            .query("{ ping }")
            .build();
        let (mut out, mut err) = (Vec::new(), Vec::new());

        let written = run(&config, &mut out, &mut err).await.unwrap();
        assert_eq!(out, br#"{"data":{"ping":"pong"}}"#);
        assert_eq!(written, out.len() as u64);
        assert!(err.is_empty());
    }

    #[tokio::test]
    async fn test_run_verbose_writes_head_to_diagnostics() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("x-request-id", "req-1")
                    .set_body_string("{}"),
            )
            .mount(&mock_server)
            .await;

        let config = Config::builder()
            .url(mock_server.uri())
            .query("{ ping }")
            .verbose(true)
            .build();
        let (mut out, mut err) = (Vec::new(), Vec::new());

        run(&config, &mut out, &mut err).await.unwrap();

        let diagnostics = String::from_utf8(err).unwrap();
        assert!(diagnostics.starts_with("HTTP/1.1 200 OK\n"));
        assert!(diagnostics.contains("X-Request-Id: req-1\n"));
        assert!(diagnostics.ends_with("\n\n"));
        assert_eq!(out, b"{}");
    }
}
