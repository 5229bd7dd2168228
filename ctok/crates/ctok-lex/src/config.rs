//! Scanner configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LexError, Result};
use crate::token::Keyword;

/// Default maximum lexeme length in bytes.
///
/// Matches a 1024-byte buffer with one byte reserved for a terminator.
pub const DEFAULT_MAX_LEXEME_LEN: usize = 1023;

/// What the scanner does with an identifier or number longer than
/// [`LexerConfig::max_lexeme_len`].
///
/// Whatever the policy, every byte of the run is consumed from the input,
/// so the next token always starts after the over-long lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Keep the first `max_lexeme_len` bytes and emit the token.
    #[default]
    Truncate,
    /// Fail the scan with [`LexError::LexemeTooLong`].
    Reject,
    /// Ignore the limit and keep the whole lexeme.
    Grow,
}

impl OverflowPolicy {
    /// Returns the name used on the command line and in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            OverflowPolicy::Truncate => "truncate",
            OverflowPolicy::Reject => "reject",
            OverflowPolicy::Grow => "grow",
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverflowPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "truncate" => Ok(OverflowPolicy::Truncate),
            "reject" => Ok(OverflowPolicy::Reject),
            "grow" => Ok(OverflowPolicy::Grow),
            other => Err(format!(
                "unknown overflow policy '{}' (expected truncate, reject or grow)",
                other
            )),
        }
    }
}

/// Scanner settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexerConfig {
    /// Maximum number of bytes kept in one lexeme.
    #[serde(default = "default_max_lexeme_len")]
    pub max_lexeme_len: usize,

    /// Handling of lexemes longer than `max_lexeme_len`.
    #[serde(default)]
    pub overflow: OverflowPolicy,
}

fn default_max_lexeme_len() -> usize {
    DEFAULT_MAX_LEXEME_LEN
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            max_lexeme_len: DEFAULT_MAX_LEXEME_LEN,
            overflow: OverflowPolicy::Truncate,
        }
    }
}

impl LexerConfig {
    /// Smallest accepted `max_lexeme_len`.
    ///
    /// A truncated lexeme must never be mistaken for a keyword, so the limit
    /// has to fit the longest one.
    pub const MIN_LEXEME_LEN: usize = Keyword::MAX_LEN;

    /// Checks that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::InvalidLimit`] if `max_lexeme_len` is below
    /// [`LexerConfig::MIN_LEXEME_LEN`]. The limit is not checked under
    /// [`OverflowPolicy::Grow`].
    pub fn validate(&self) -> Result<()> {
        if self.overflow != OverflowPolicy::Grow && self.max_lexeme_len < Self::MIN_LEXEME_LEN {
            return Err(LexError::InvalidLimit {
                limit: self.max_lexeme_len,
                min: Self::MIN_LEXEME_LEN,
            });
        }
        Ok(())
    }

    /// Returns the buffer limit, or `None` when lexemes may grow unbounded.
    pub(crate) fn limit(&self) -> Option<usize> {
        match self.overflow {
            OverflowPolicy::Grow => None,
            OverflowPolicy::Truncate | OverflowPolicy::Reject => Some(self.max_lexeme_len),
        }
    }
}
