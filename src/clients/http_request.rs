//! GraphQL request payload.
//!
//! This module resolves the effective query and variables from a [`Config`]
//! and serializes them into the JSON body that is POSTed to the endpoint.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::Config;
use crate::error::{ConfigError, GqError};

/// JSON object of GraphQL variables.
pub type Variables = Map<String, Value>;

/// The body of a GraphQL-over-HTTP POST request.
///
/// `variables` is always serialized, as `null` when absent, because some
/// servers expect the key to be present.
///
/// # Example
///
/// ```rust
/// use gq::clients::GraphqlRequest;
///
/// let request = GraphqlRequest::new("{ ping }", None);
/// assert_eq!(
///     String::from_utf8(request.to_body().unwrap()).unwrap(),
///     r#"{"query":"{ ping }","variables":null}"#
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphqlRequest {
    /// The GraphQL document.
    pub query: String,
    /// Variables referenced by the document, if any.
    pub variables: Option<Variables>,
}

impl GraphqlRequest {
    /// Creates a request from an already resolved query and variables.
    #[must_use]
    pub fn new(query: impl Into<String>, variables: Option<Variables>) -> Self {
        Self {
            query: query.into(),
            variables,
        }
    }

    /// Resolves the query and variables described by `config`.
    ///
    /// The query is resolved first, so a missing query is reported even when
    /// the variables are also broken.
    ///
    /// # Errors
    ///
    /// See [`resolve_query`] and [`resolve_variables`].
    pub fn from_config(config: &Config) -> Result<Self, GqError> {
        let query = resolve_query(config)?;
        let variables = resolve_variables(config)?;
        Ok(Self::new(query, variables))
    }

    /// Serializes the request to its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns [`GqError::Parse`] if serialization fails, which can only
    /// happen for non-string map keys and is not expected in practice.
    pub fn to_body(&self) -> Result<Vec<u8>, GqError> {
        serde_json::to_vec(self).map_err(|source| GqError::Parse {
            source_label: "request body".to_string(),
            source,
        })
    }
}

/// Returns the query text: inline text wins over the query file.
///
/// # Errors
///
/// - [`ConfigError::MissingQuery`] if neither source is supplied
/// - [`GqError::Read`] if the query file cannot be read
///
/// Bytes in the query file that are not valid UTF-8 are replaced with
/// U+FFFD rather than rejected.
pub fn resolve_query(config: &Config) -> Result<String, GqError> {
    if let Some(query) = config.query() {
        tracing::debug!("using inline query");
        return Ok(query.to_string());
    }
    if let Some(path) = config.query_file() {
        tracing::debug!("reading query from {}", path.display());
        let query = read_file(path)?;
        return Ok(String::from_utf8_lossy(&query).into_owned());
    }
    Err(ConfigError::MissingQuery.into())
}

/// Returns the variables: inline JSON wins over the variables file.
///
/// Absent variables are not an error. A JSON `null` is treated as absent.
///
/// # Errors
///
/// - [`GqError::Read`] if the variables file cannot be read
/// - [`GqError::Parse`] if the JSON is invalid, not an object, or not UTF-8
pub fn resolve_variables(config: &Config) -> Result<Option<Variables>, GqError> {
    if let Some(vars) = config.vars() {
        tracing::debug!("using inline variables");
        return parse_variables(vars.as_bytes(), "--vars");
    }
    if let Some(path) = config.vars_file() {
        tracing::debug!("reading variables from {}", path.display());
        let vars = read_file(path)?;
        return parse_variables(&vars, &path.display().to_string());
    }
    Ok(None)
}

fn parse_variables(json: &[u8], source_label: &str) -> Result<Option<Variables>, GqError> {
    serde_json::from_slice(json).map_err(|source| GqError::Parse {
        source_label: source_label.to_string(),
        source,
    })
}

fn read_file(path: &Path) -> Result<Vec<u8>, GqError> {
    fs::read(path).map_err(|source| GqError::Read {
        path: path.to_path_buf(),
        source,
    })
}
