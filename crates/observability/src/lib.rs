//! Tracing/logging setup shared by depot binaries and tests.

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call from every entry point; only the first call installs the
/// subscriber.
pub fn init() {
    tracing::init();
}
