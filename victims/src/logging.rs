//! Development-time tracing.
//!
//! Diagnostics cover the store lifecycle: `debug` events when the record
//! file is read or written (path, record count, missing file) and when an
//! add or remove is rejected, and `info` events for each record added or
//! removed. Product output (confirmations, rejections, the listing) is
//! printed by [`crate::cli`], never logged. Everything here goes to stderr.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn`, so store events stay quiet unless
/// asked for.
///
/// # Example
/// ```bash
/// RUST_LOG=victims=info victims add Jane Doe 34 2020-05-01
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
