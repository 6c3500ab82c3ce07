//! Diagnostic logging setup for the binary

use tracing_subscriber::{EnvFilter, fmt};

/// Log level used when `RUST_LOG` is unset. Stdout carries the report, so
/// diagnostics stay quiet and go to stderr.
const DEFAULT_FILTER: &str = "warn";

pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
