//! Tracing infrastructure for development diagnostics
//!
//! Configure via the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=lattice::store=debug` - module-level filtering

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize a console tracing subscriber.
///
/// Respects RUST_LOG for filtering and defaults to `warn`. Safe to call more
/// than once; later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
