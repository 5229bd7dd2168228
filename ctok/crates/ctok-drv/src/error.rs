//! Error handling module for the ctok driver.
//!
//! Driver failures are typed with `thiserror`; the binary entry point wraps
//! them in `anyhow` for context.

use std::path::PathBuf;

use ctok_lex::LexError;
use thiserror::Error;

/// Main error type for the ctok driver.
#[derive(Error, Debug)]
pub enum DrvError {
    /// The configuration file is missing, malformed or out of range.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An input file could not be opened or read.
    #[error("Cannot read input {}: {source}", path.display())]
    Input {
        /// The input that failed.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// Scanning failed while reading input or writing tokens.
    #[error("Scan failed: {0}")]
    Lex(#[from] LexError),

    /// The tracing subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    /// Writing auxiliary output (statistics, configuration) failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DrvError {
    /// Returns true if the reader of standard output went away.
    ///
    /// A closed pipe (`ctok big.c | head`) ends the run normally.
    pub fn is_output_closed(&self) -> bool {
        match self {
            DrvError::Lex(LexError::Output(e)) | DrvError::Io(e) => {
                e.kind() == std::io::ErrorKind::BrokenPipe
            },
            _ => false,
        }
    }
}

/// Result type alias using DrvError.
pub type Result<T> = std::result::Result<T, DrvError>;
