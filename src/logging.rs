//! Tracing setup
//!
//! Logs go to stderr so they never interleave with the menu on stdout.
//! `RUST_LOG` overrides the default filter.

use tracing_subscriber::EnvFilter;

/// Quiet unless something goes wrong; the menu is the primary output
const DEFAULT_FILTER: &str = "warn";
const DEBUG_FILTER: &str = "debug";

pub fn filter(debug: bool) -> EnvFilter {
    let default = if debug { DEBUG_FILTER } else { DEFAULT_FILTER };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global fmt subscriber. Fails if one is already installed.
pub fn init(debug: bool) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(debug))
        .with_writer(std::io::stderr)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}
