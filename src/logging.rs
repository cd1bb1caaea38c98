//! Tracing setup for pipeline diagnostics.
//!
//! All diagnostics (skipped lines, unreadable input, unwritable output) go to
//! stdout; they are informational only and never affect the exit status.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset, which keeps skipped-line
/// and file-error diagnostics visible. Output: stdout, compact format.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stdout).compact())
        .init();
}
