//! Process-level setup: logging

use anyhow::Result;
use clap::ArgMatches;
use tracing::Level;

use super::global_count;

/// Map `-v` occurrences to a log level. Quiet by default so command output
/// stays clean.
pub const fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn verbosity(matches: &ArgMatches) -> u8 {
    global_count(matches, "verbose")
}

/// Initialize tracing subscriber for logging
///
/// Configures the tracing subscriber with:
/// - Environment filter (`RUST_LOG`), with a floor set by `-v`
/// - Stderr output (to avoid mixing with stdout)
///
/// # Errors
/// Returns an error if the subscriber initialization fails
pub fn init_tracing(verbosity: u8) -> Result<()> {
    let result = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(level_for(verbosity).into()),
        )
        .with_writer(std::io::stderr)
        .try_init();
    result.map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
}
