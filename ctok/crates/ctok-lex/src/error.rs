//! Error types for the ctok scanner.

use thiserror::Error;

use crate::token::TokenKind;

/// Error type for scanning operations.
///
/// Unrecognized characters are not errors; they become `UNKNOWN` tokens.
/// A scan only fails when the input or output stream fails, or when a
/// lexeme overflows under [`OverflowPolicy::Reject`](crate::OverflowPolicy).
#[derive(Debug, Error)]
pub enum LexError {
    /// Reading the input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The token sink failed to accept a token.
    #[error("output error: {0}")]
    Output(#[source] std::io::Error),

    /// A lexeme was longer than the configured limit.
    #[error("{kind} lexeme at byte {offset} is {len} bytes long (limit {limit})")]
    LexemeTooLong {
        /// Kind the lexeme would have been emitted as.
        kind: TokenKind,
        /// Full length of the lexeme in the input.
        len: usize,
        /// Configured maximum lexeme length.
        limit: usize,
        /// Byte offset where the lexeme starts.
        offset: u64,
    },

    /// The configured lexeme limit is too small to hold every keyword.
    #[error("maximum lexeme length {limit} is below the minimum of {min}")]
    InvalidLimit {
        /// The rejected limit.
        limit: usize,
        /// Smallest accepted limit.
        min: usize,
    },
}

/// Result type alias for scanning operations.
pub type Result<T> = std::result::Result<T, LexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexeme_too_long_display() {
        let err = LexError::LexemeTooLong {
            kind: TokenKind::Number,
            len: 2000,
            limit: 1023,
            offset: 7,
        };
        assert_eq!(
            err.to_string(),
            "NUMBER lexeme at byte 7 is 2000 bytes long (limit 1023)"
        );
    }

    #[test]
    fn test_invalid_limit_display() {
        let err = LexError::InvalidLimit { limit: 2, min: 6 };
        assert_eq!(err.to_string(), "maximum lexeme length 2 is below the minimum of 6");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: LexError = io_err.into();
        assert!(matches!(err, LexError::Io(_)));
    }

    #[test]
    fn test_output_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = LexError::Output(io_err);
        assert_eq!(err.to_string(), "output error: pipe closed");
    }
}
