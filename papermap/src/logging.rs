//! Logging initialization.
//!
//! Structured logging via `tracing`, filtered through the `RUST_LOG`
//! environment variable. Events go to stderr so the CLI can keep stdout
//! clean for its JSON output.

use std::io;

use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `default_directive` applies when `RUST_LOG` is unset (e.g. `"info"`).
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(default_directive: &str) -> Result<(), TryInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish()
        .try_init()
}
