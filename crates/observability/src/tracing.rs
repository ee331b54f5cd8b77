//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Install the process-wide tracing subscriber.
///
/// JSON lines with timestamps; the filter defaults to `info` and is
/// overridable via `RUST_LOG` (e.g. `RUST_LOG=depotstock_app=debug`).
/// Repeated calls lose the `try_init` race and are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
