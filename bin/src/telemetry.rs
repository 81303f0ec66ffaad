//! Logging setup.

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Log level used for a `-v` count.
const fn verbosity_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber, logging to stderr.
///
/// The filter comes from `RUST_LOG`, then the configured filter, then the
/// verbosity count.
pub(crate) fn init(verbose: u8, configured: Option<&str>) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let directive = configured.unwrap_or_else(|| verbosity_level(verbose));
            EnvFilter::try_new(directive)
                .with_context(|| format!("Invalid log filter '{directive}'"))?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
