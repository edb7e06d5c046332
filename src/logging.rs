// SPDX-License-Identifier: MPL-2.0
//! Structured logging setup.
//!
//! Filter precedence: `--log` flag, then `RUST_LOG`, then [`DEFAULT_FILTER`].

use tracing_subscriber::EnvFilter;

/// Filter used when neither the CLI nor the environment provides one.
pub const DEFAULT_FILTER: &str = "vertical_cor=info";

/// Builds the filter from an optional CLI directive.
///
/// Invalid directives are reported on stderr and replaced by the default.
#[must_use]
pub fn build_filter(cli_directive: Option<&str>) -> EnvFilter {
    if let Some(directive) = cli_directive {
        match EnvFilter::try_new(directive) {
            Ok(filter) => return filter,
            Err(err) => eprintln!("Ignoring invalid --log filter '{directive}': {err}"),
        }
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global `fmt` subscriber. Safe to call once per process;
/// later calls are ignored.
pub fn init(cli_directive: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(cli_directive))
        .with_target(true)
        .try_init();
}
