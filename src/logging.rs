// SPDX-License-Identifier: MPL-2.0
//! Log output for the binary.
//!
//! Logs go to stderr so stdout only ever carries the rendered card. The
//! filter comes from `NEWSDECK_LOG` (same syntax as `RUST_LOG`); without it
//! only warnings are shown, or debug output with `--verbose`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const ENV_LOG: &str = "NEWSDECK_LOG";

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "newsdeck=debug,warn";

/// Builds the filter: `NEWSDECK_LOG` wins, then the verbosity flag.
#[must_use]
pub fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            VERBOSE_FILTER
        } else {
            DEFAULT_FILTER
        })
    })
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
