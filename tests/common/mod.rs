//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Responds with the request body, unchanged.
pub struct EchoBody;

impl Respond for EchoBody {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_bytes(request.body.clone())
    }
}

/// Starts a mock server that echoes every POST body back.
pub async fn echo_server() -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(EchoBody)
        .mount(&mock_server)
        .await;
    mock_server
}

/// Writes `contents` to a fresh temporary file.
pub fn temp_file(contents: &str) -> NamedTempFile {
    temp_file_bytes(contents.as_bytes())
}

/// Writes raw `contents` to a fresh temporary file.
pub fn temp_file_bytes(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file
}
