//! Validated newtype wrappers for configuration values.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// A single `KEY=VALUE` header argument.
///
/// The input is split on the first `=`, so the value may itself contain `=`
/// and may be empty. The name must be non-empty.
///
/// # Example
///
/// ```rust
/// use gq::HeaderPair;
///
/// let pair: HeaderPair = "Authorization=Bearer a=b".parse().unwrap();
/// assert_eq!(pair.name(), "Authorization");
/// assert_eq!(pair.value(), "Bearer a=b");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderPair {
    name: String,
    value: String,
}

impl HeaderPair {
    /// Creates a header pair from an already split name and value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHeader`] if the name is empty.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        let value = value.into();
        if name.is_empty() {
            return Err(ConfigError::InvalidHeader {
                input: format!("={value}"),
            });
        }
        Ok(Self { name, value })
    }

    /// Returns the header name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the header value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consumes the pair, returning `(name, value)`.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.name, self.value)
    }
}

impl FromStr for HeaderPair {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = s.split_once('=').ok_or_else(|| ConfigError::InvalidHeader {
            input: s.to_string(),
        })?;
        Self::new(name, value)
    }
}

impl fmt::Display for HeaderPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_pair_parses_key_value() {
        let pair: HeaderPair = "X-Api-Key=secret".parse().unwrap();
        assert_eq!(pair.name(), "X-Api-Key");
        assert_eq!(pair.value(), "secret");
    }

    #[test]
    fn test_header_pair_splits_on_first_equals() {
        let pair: HeaderPair = "Cookie=a=1; b=2".parse().unwrap();
        assert_eq!(pair.name(), "Cookie");
        assert_eq!(pair.value(), "a=1; b=2");
    }

    #[test]
    fn test_header_pair_allows_empty_value() {
        let pair: HeaderPair = "X-Empty=".parse().unwrap();
        assert_eq!(pair.value(), "");
    }

    #[test]
    fn test_header_pair_rejects_missing_separator() {
        let result = "Authorization".parse::<HeaderPair>();
        assert_eq!(
            result,
            Err(ConfigError::InvalidHeader {
                input: "Authorization".to_string()
            })
        );
    }

    #[test]
    fn test_header_pair_rejects_empty_name() {
        let result = "=value".parse::<HeaderPair>();
        assert_eq!(
            result,
            Err(ConfigError::InvalidHeader {
                input: "=value".to_string()
            })
        );
    }

    #[test]
    fn test_header_pair_display_round_trips_input() {
        let pair: HeaderPair = "Accept=application/json".parse().unwrap();
        assert_eq!(pair.to_string(), "Accept=application/json");
    }
}
