//! Logging infrastructure.
//!
//! The crate logs through the `tracing` ecosystem; the binary calls
//! [`init_tracing`] once at startup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// Respects the `RUST_LOG` environment variable; falls back to `debug`
/// when `verbose` is set, `info` otherwise. Should be called once at
/// application startup.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
