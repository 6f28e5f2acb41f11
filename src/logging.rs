//! Diagnostic logging setup.
//!
//! Log output always goes to stderr so that stdout carries nothing but the
//! response body. The level is controlled by the `GQ_LOG` environment variable
//! using `tracing_subscriber::EnvFilter` directives.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const GQ_LOG: &str = "GQ_LOG";

/// Filter used when `GQ_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Builds the filter from the value of `GQ_LOG`, if any.
#[must_use]
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global stderr subscriber.
///
/// Does nothing if a subscriber is already installed.
pub fn init_logging() {
    let directives = std::env::var(GQ_LOG).ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
