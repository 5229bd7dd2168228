//! Logging setup.
//!
//! Standard output carries only tokens, so every log line goes to stderr.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{DrvError, Result};

/// Builds the level filter.
///
/// `--verbose` forces `debug`; otherwise `RUST_LOG` is honoured and the
/// fallback is `warn`, which still reports truncated lexemes.
pub fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

/// Initialize the logging system.
///
/// # Arguments
/// * `verbose` - Whether to enable debug logging
/// * `no_color` - Whether to disable colored output
pub fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter(verbose))
        .with(layer)
        .try_init()
        .map_err(|e| DrvError::Logging(e.to_string()))
}
