//! Diagnostic logging.
//!
//! Configure via the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - config loading and CLI decisions
//! - `RUST_LOG=caretsplit::split=trace` - per-call split path and selection

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Install a stderr subscriber filtered by RUST_LOG (default `warn`).
/// Stdout stays reserved for split output.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    // Already installed when called twice.
    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}
