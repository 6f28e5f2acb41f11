//! Command-line flags.
//!
//! [`Cli`] defines the flags with `clap` and converts them into a [`Config`].
//! Malformed input (unknown flag, missing value, header without `=`) is
//! rejected by `clap` with a usage message and a non-zero exit.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, HeaderPair, DEFAULT_URL};

/// Perform a GraphQL query and print the raw response body.
#[derive(Debug, Parser)]
#[command(name = "gq", version, about)]
pub struct Cli {
    /// GraphQL endpoint URL
    #[arg(long, env = "GQ_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// File containing a GraphQL query
    #[arg(long = "query_file", value_name = "PATH")]
    pub query_file: Option<PathBuf>,

    /// GraphQL query (overrides --query_file)
    #[arg(short, long)]
    pub query: Option<String>,

    /// JSON file containing variables for the query
    #[arg(long = "vars_file", value_name = "PATH")]
    pub vars_file: Option<PathBuf>,

    /// JSON-encoded variables for the query (overrides --vars_file)
    #[arg(long, value_name = "JSON")]
    pub vars: Option<String>,

    /// Header to send with the request; repeat for more
    #[arg(short = 'H', long = "headers", value_name = "KEY=VALUE")]
    pub headers: Vec<HeaderPair>,

    /// Show the response status and headers on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Converts the parsed flags into an immutable [`Config`].
    #[must_use]
    pub fn into_config(self) -> Config {
        let mut builder = Config::builder()
            .url(self.url)
            .headers(self.headers)
            .verbose(self.verbose);

        if let Some(query) = self.query {
            builder = builder.query(query);
        }
        if let Some(path) = self.query_file {
            builder = builder.query_file(path);
        }
        if let Some(vars) = self.vars {
            builder = builder.vars(vars);
        }
        if let Some(path) = self.vars_file {
            builder = builder.vars_file(path);
        }

        builder.build()
    }
}
