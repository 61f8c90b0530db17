//! Logging infrastructure.
//!
//! Structured stdout logging via tracing, configured once at CLI startup.
//! The default level is `info`, raised to `debug` by the verbose flag;
//! `RUST_LOG` overrides both.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Must be called at most once per process; later calls would panic in
/// the subscriber registry, so only the CLI entry point calls this.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
