//! Diagnostic logging setup
//!
//! Diagnostics go to stderr so tables printed on stdout stay clean. The
//! filter is read from `EXP_LOG` (same syntax as `RUST_LOG`).

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "EXP_LOG";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber; later calls are ignored
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
