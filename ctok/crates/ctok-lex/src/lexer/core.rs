//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use std::io::BufRead;
use std::iter::FusedIterator;

use tracing::{debug, trace, warn};

use crate::classify::{classify, CharClass};
use crate::config::{LexerConfig, OverflowPolicy};
use crate::cursor::Cursor;
use crate::error::{LexError, Result};
use crate::sink::TokenSink;
use crate::summary::ScanSummary;
use crate::token::{Token, TokenKind};

use super::buffer::LexemeBuffer;

/// Lexer for the ctok language.
///
/// The lexer reads a byte stream and produces one classified token per
/// lexeme. Its only state between tokens is the cursor with its single byte
/// of pushback; it keeps no memory of earlier tokens.
///
/// # Example
///
/// ```
/// use ctok_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::from_source("int x = 42;");
///
/// let token = lexer.next_token().unwrap().unwrap();
/// assert_eq!(token.kind(), TokenKind::Keyword);
/// assert_eq!(token.lexeme(), b"int");
/// ```
pub struct Lexer<R> {
    /// Byte cursor for stream traversal.
    pub(crate) cursor: Cursor<R>,

    /// Lexeme limits.
    pub(crate) config: LexerConfig,

    /// Byte offset where the current token starts.
    pub(crate) token_start: u64,

    /// Counters for the tokens emitted so far.
    pub(crate) summary: ScanSummary,

    /// Set once the iterator has returned end of stream or an error.
    finished: bool,
}

impl<'a> Lexer<&'a [u8]> {
    /// Creates a lexer over an in-memory string with the default configuration.
    pub fn from_source(source: &'a str) -> Self {
        Self::new(source.as_bytes())
    }
}

impl<R: BufRead> Lexer<R> {
    /// Creates a new lexer with the default configuration.
    pub fn new(reader: R) -> Self {
        Self {
            cursor: Cursor::new(reader),
            config: LexerConfig::default(),
            token_start: 0,
            summary: ScanSummary::new(),
            finished: false,
        }
    }

    /// Creates a new lexer with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::InvalidLimit`] if the configuration does not
    /// validate.
    pub fn with_config(reader: R, config: LexerConfig) -> Result<Self> {
        config.validate()?;
        let mut lexer = Self::new(reader);
        lexer.config = config;
        Ok(lexer)
    }

    /// Returns the next token, or `None` at end of stream.
    ///
    /// Whitespace is skipped. Letters and digits start multi-byte scans;
    /// every other byte becomes a one-byte token.
    ///
    /// # Errors
    ///
    /// Fails if the input cannot be read, or if a lexeme overflows under
    /// [`OverflowPolicy::Reject`].
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        loop {
            self.token_start = self.cursor.offset();
            let Some(byte) = self.cursor.advance()? else {
                return Ok(None);
            };

            let token = match classify(byte) {
                CharClass::Whitespace => continue,
                CharClass::Letter => self.lex_identifier(byte)?,
                CharClass::Digit => self.lex_number(byte)?,
                CharClass::Operator => Token::single(TokenKind::Operator, byte),
                CharClass::Punctuation => Token::single(TokenKind::Punctuation, byte),
                CharClass::Unknown => Token::single(TokenKind::Unknown, byte),
            };

            trace!(
                kind = %token.kind(),
                lexeme = %token.text(),
                offset = self.token_start,
                "token"
            );
            self.summary.record(token.kind());
            return Ok(Some(token));
        }
    }

    /// Scans the whole input, handing every token to `sink`.
    ///
    /// Calls [`TokenSink::finish`] after the last token and returns the
    /// counters for this lexer.
    ///
    /// # Errors
    ///
    /// Stops at the first read, write or overflow error. Read failures are
    /// [`LexError::Io`]; failures reported by the sink are
    /// [`LexError::Output`].
    pub fn run<S: TokenSink + ?Sized>(&mut self, sink: &mut S) -> Result<ScanSummary> {
        debug!(
            max_lexeme_len = self.config.max_lexeme_len,
            overflow = %self.config.overflow,
            "scan started"
        );

        while let Some(token) = self.next_token()? {
            sink.emit(token).map_err(LexError::Output)?;
        }
        sink.finish().map_err(LexError::Output)?;

        let summary = self.summary();
        debug!(
            tokens = summary.total(),
            bytes = summary.bytes(),
            truncated = summary.truncated(),
            "scan finished"
        );
        Ok(summary)
    }

    /// Returns the counters for the tokens scanned so far.
    pub fn summary(&self) -> ScanSummary {
        self.summary.with_bytes(self.cursor.offset())
    }

    /// Returns the number of input bytes consumed.
    pub fn position(&self) -> u64 {
        self.cursor.offset()
    }

    /// Returns the byte offset where the most recent token started.
    pub fn token_start(&self) -> u64 {
        self.token_start
    }

    /// Consumes the lexer, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.cursor.into_inner()
    }

    /// Consumes the maximal run of bytes accepted by `accept`, starting with
    /// the already-consumed `first`. The byte that ends the run is pushed
    /// back.
    pub(crate) fn scan_run(&mut self, first: u8, accept: fn(u8) -> bool) -> Result<LexemeBuffer> {
        let mut buffer = LexemeBuffer::new(self.config.limit());
        buffer.push(first);

        while let Some(byte) = self.cursor.advance()? {
            if !accept(byte) {
                self.cursor.unread(byte);
                break;
            }
            buffer.push(byte);
        }

        Ok(buffer)
    }

    /// Applies the overflow policy to a completed run.
    pub(crate) fn finish_lexeme(&mut self, buffer: LexemeBuffer, kind: TokenKind) -> Result<Vec<u8>> {
        if buffer.is_truncated() {
            let limit = self.config.max_lexeme_len;
            match self.config.overflow {
                OverflowPolicy::Reject => {
                    return Err(LexError::LexemeTooLong {
                        kind,
                        len: buffer.len(),
                        limit,
                        offset: self.token_start,
                    });
                },
                OverflowPolicy::Truncate | OverflowPolicy::Grow => {
                    warn!(
                        %kind,
                        len = buffer.len(),
                        limit,
                        offset = self.token_start,
                        "lexeme truncated"
                    );
                    self.summary.record_truncation();
                },
            }
        }
        Ok(buffer.into_bytes())
    }
}

impl<R: BufRead> Iterator for Lexer<R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.finished = true;
                None
            },
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            },
        }
    }
}

impl<R: BufRead> FusedIterator for Lexer<R> {}
