//! Tracing initialization for the latency monitor binaries.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize tracing for a binary.
///
/// Log levels come from the RUST_LOG environment variable, defaulting to
/// INFO. Setting LOG_FORMAT=json swaps the human-readable layer for JSON
/// output suitable for structured log collection.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json")) {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    }
}
