//! Stderr diagnostics for the lesson binaries.
//!
//! Lesson output goes to stdout; tracing output goes to stderr so the two
//! never interleave on the same stream.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber, honouring `RUST_LOG`.
///
/// Safe to call multiple times; only the first call installs anything.
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Install the global subscriber with `default` as the fallback filter.
pub fn init_with_filter(default: &str) {
    INIT_LOGGING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(true)
            .try_init();
    });
}
