//! Diagnostic tracing for the game core.
//!
//! Events go to stderr so they never mix with the console game on stdout.
//! Controlled by `RUST_LOG`; defaults to `warn` if unset.
//!
//! # Example
//! ```bash
//! RUST_LOG=connect_four=debug connect-four
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
