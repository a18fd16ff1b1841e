//! Logging setup for the `hog` binary.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Default filter when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize a stderr fmt subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("global subscriber already set");
    }
}
