//! Diagnostic logging via `tracing`.
//!
//! Log events go to stderr so they never mix with command output. The level is
//! controlled by the `GET_LOG` environment variable:
//!
//! ```bash
//! GET_LOG=debug get open myrepo
//! ```

use std::io::IsTerminal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the `EnvFilter` directives.
pub const LOG_ENV: &str = "GET_LOG";

/// Install the global subscriber. Safe to call more than once; later calls
/// are no-ops.
pub fn init() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time(),
        )
        .try_init();
}
