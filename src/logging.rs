// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console diagnostics for the command-line front-end.

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Installs a coloured stderr subscriber. `RUST_LOG` takes precedence;
/// otherwise warnings and errors are shown, or everything down to debug
/// when `verbose` is set. Later calls are no-ops.
pub fn init_logging(verbose: bool) {
    INIT.call_once(|| {
        let default = if verbose { "morse_kit=debug" } else { "warn" };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

        let _ = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .with_env_filter(filter)
            .try_init();
    });
}

/// True when the active subscriber shows the crate's error-level events.
pub fn errors_reach_log() -> bool {
    tracing::enabled!(target: "morse_kit", Level::ERROR)
}
