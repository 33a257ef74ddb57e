//! Diagnostic tracing for puzzle-audit.
//!
//! The report goes to stdout; tracing output goes to stderr so the two never
//! interleave in a redirected report. Verbosity comes from `RUST_LOG` and
//! defaults to `warn`, which surfaces per-file failures only.
//!
//! ```bash
//! RUST_LOG=puzzle_audit=debug puzzle-audit --show-all
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // `try_init` so a second call (e.g. from tests) is a no-op instead of a panic.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
