//! ctok-lex - Streaming scanner for a small C-like language
//!
//! This crate turns a byte stream into a stream of classified tokens. It
//! reads its input one byte at a time with a single byte of pushback, so it
//! can scan pipes and files of any size without loading them.
//!
//! # Example Usage
//!
//! ```
//! use ctok_lex::{Lexer, TextSink, TokenKind};
//!
//! // Iterate through tokens
//! let kinds: Vec<TokenKind> = Lexer::from_source("int x = 42;")
//!     .map(|token| token.unwrap().kind())
//!     .collect();
//! assert_eq!(kinds[0], TokenKind::Keyword);
//!
//! // Or write them out in the line format
//! let mut sink = TextSink::new(Vec::new());
//! Lexer::from_source("x1_2").run(&mut sink).unwrap();
//! assert_eq!(sink.into_inner(), b"<IDENTIFIER, x1_2>\n");
//! ```
//!
//! # Module Structure
//!
//! - [`classify`] - Byte class predicates and the dispatch class
//! - [`cursor`] - Byte cursor with one byte of pushback
//! - [`token`] - Token, token kind and keyword definitions
//! - [`lexer`] - The dispatch loop and the multi-byte scanners
//! - [`sink`] - Token emission
//! - [`config`] - Lexeme length limit and overflow policy
//!
//! # Token Categories
//!
//! - **Keywords**: `int`, `float`, `char`, `if`, `else`, `while`, `return`
//! - **Identifiers**: `[A-Za-z_][A-Za-z0-9_]*` that are not keywords
//! - **Numbers**: `[0-9]+`
//! - **Operators**: `+`, `-`, `*`, `/`, `=` (always one byte; `==` is two tokens)
//! - **Punctuation**: `(`, `)`, `{`, `}`, `;`, `,`
//! - **Unknown**: any other byte, one token per byte
//!
//! Space, tab, newline, carriage return, form feed and vertical tab separate
//! tokens and are never emitted.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod sink;
pub mod summary;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use classify::{classify, CharClass};
pub use config::{LexerConfig, OverflowPolicy, DEFAULT_MAX_LEXEME_LEN};
pub use cursor::Cursor;
pub use error::{LexError, Result};
pub use lexer::Lexer;
pub use sink::{TextSink, TokenSink};
pub use summary::ScanSummary;
pub use token::{Keyword, Token, TokenKind};

/// Scans an in-memory string with the default configuration.
///
/// # Example
///
/// ```
/// use ctok_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("@").unwrap();
/// assert_eq!(tokens.len(), 1);
/// assert_eq!(tokens[0].kind(), TokenKind::Unknown);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Lexer::from_source(source).collect()
}
