//! Configuration for a single `gq` invocation.
//!
//! This module provides the immutable [`Config`] value that every step of the
//! pipeline reads from, and the [`ConfigBuilder`] used to construct it.
//!
//! # Overview
//!
//! - [`Config`]: endpoint, query and variables sources, headers, verbosity
//! - [`ConfigBuilder`]: a builder for constructing [`Config`] instances
//! - [`HeaderPair`]: a validated `KEY=VALUE` header argument
//!
//! # Example
//!
//! ```rust
//! use gq::Config;
//!
//! let config = Config::builder()
//!     .url("https://api.example.com/graphql")
//!     .query("{ viewer { login } }")
//!     .header("Authorization", "Bearer token")
//!     .verbose(true)
//!     .build();
//!
//! assert_eq!(config.url(), "https://api.example.com/graphql");
//! assert!(config.verbose());
//! ```

mod newtypes;

pub use newtypes::HeaderPair;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Endpoint used when neither `--url` nor `GQ_URL` is given.
pub const DEFAULT_URL: &str = "http://127.0.0.1:3000/graphql";

/// Configuration for one GraphQL request.
///
/// Built once by the argument resolver and then only read. Empty strings
/// passed to the builder are treated as "not supplied", so an inline query of
/// `""` falls through to the query file.
///
/// Precedence between the inline and file sources is applied when the payload
/// is built (see [`crate::clients::GraphqlRequest::from_config`]); the config
/// keeps both so that the decision stays in one place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    url: String,
    query: Option<String>,
    query_file: Option<PathBuf>,
    vars: Option<String>,
    vars_file: Option<PathBuf>,
    headers: HashMap<String, String>,
    verbose: bool,
}

impl Config {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the inline query text, if non-empty.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns the query file path, if given.
    #[must_use]
    pub fn query_file(&self) -> Option<&Path> {
        self.query_file.as_deref()
    }

    /// Returns the inline JSON variables, if non-empty.
    #[must_use]
    pub fn vars(&self) -> Option<&str> {
        self.vars.as_deref()
    }

    /// Returns the variables file path, if given.
    #[must_use]
    pub fn vars_file(&self) -> Option<&Path> {
        self.vars_file.as_deref()
    }

    /// Returns the extra headers to send.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Returns whether response status and headers go to the diagnostic stream.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Default for Config {
    fn default() -> Self {
        ConfigBuilder::new().build()
    }
}

/// Builder for constructing [`Config`] instances.
///
/// # Defaults
///
/// - `url`: [`DEFAULT_URL`]
/// - `query`, `query_file`, `vars`, `vars_file`: `None`
/// - `headers`: empty
/// - `verbose`: `false`
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    url: Option<String>,
    query: Option<String>,
    query_file: Option<PathBuf>,
    vars: Option<String>,
    vars_file: Option<PathBuf>,
    headers: HashMap<String, String>,
    verbose: bool,
}

impl ConfigBuilder {
    /// Creates a new builder with all fields unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the endpoint URL. An empty string keeps the default.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = non_empty(url.into());
        self
    }

    /// Sets the inline query text.
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = non_empty(query.into());
        self
    }

    /// Sets the file to read the query from.
    #[must_use]
    pub fn query_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.query_file = non_empty_path(path.into());
        self
    }

    /// Sets the inline JSON variables.
    #[must_use]
    pub fn vars(mut self, vars: impl Into<String>) -> Self {
        self.vars = non_empty(vars.into());
        self
    }

    /// Sets the file to read JSON variables from.
    #[must_use]
    pub fn vars_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.vars_file = non_empty_path(path.into());
        self
    }

    /// Adds a header. A later header with the same name replaces the earlier one.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Adds every header pair, in order.
    #[must_use]
    pub fn headers(mut self, pairs: impl IntoIterator<Item = HeaderPair>) -> Self {
        for pair in pairs {
            let (name, value) = pair.into_parts();
            self.headers.insert(name, value);
        }
        self
    }

    /// Enables or disables verbose diagnostics.
    #[must_use]
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Builds the [`Config`].
    #[must_use]
    pub fn build(self) -> Config {
        Config {
            url: self.url.unwrap_or_else(|| DEFAULT_URL.to_string()),
            query: self.query,
            query_file: self.query_file,
            vars: self.vars,
            vars_file: self.vars_file,
            headers: self.headers,
            verbose: self.verbose,
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn non_empty_path(path: PathBuf) -> Option<PathBuf> {
    if path.as_os_str().is_empty() {
        None
    } else {
        Some(path)
    }
}
