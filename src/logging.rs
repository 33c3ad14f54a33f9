//! Logging configuration for rtq.
//!
//! Logs go to stderr so that stdout stays clean for the query text and for
//! results written with `--output -`.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "info";

/// Builds the env filter, falling back to [`DEFAULT_FILTER`].
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initializes logging to stderr.
pub fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
