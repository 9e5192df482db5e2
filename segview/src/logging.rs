//! Diagnostic logging setup
//!
//! Logs go to stderr so stdout carries only the benchmark output.

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "warn";

fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global fmt subscriber
///
/// Returns `false` when a subscriber was already installed.
pub fn init() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
