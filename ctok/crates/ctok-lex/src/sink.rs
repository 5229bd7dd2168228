//! Token emission.
//!
//! The scanner hands every token to a [`TokenSink`] exactly once, in source
//! order. [`TextSink`] produces the line format
//!
//! ```text
//! <KIND, LEXEME>
//! ```
//!
//! with the lexeme bytes written verbatim. Lexemes are not escaped, so a
//! `,` or `>` inside a lexeme is indistinguishable from the delimiters.

use std::io::{self, Write};

use crate::token::Token;

/// Receiver of scanned tokens.
pub trait TokenSink {
    /// Accepts the next token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be written; the scan stops.
    fn emit(&mut self, token: Token) -> io::Result<()>;

    /// Called once after the last token of a run.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl TokenSink for Vec<Token> {
    fn emit(&mut self, token: Token) -> io::Result<()> {
        self.push(token);
        Ok(())
    }
}

/// Writes tokens as `<KIND, LEXEME>` lines.
///
/// # Example
///
/// ```
/// use ctok_lex::{Lexer, TextSink};
///
/// let mut sink = TextSink::new(Vec::new());
/// Lexer::from_source("x = 1;").run(&mut sink).unwrap();
///
/// let out = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(out, "<IDENTIFIER, x>\n<OPERATOR, =>\n<NUMBER, 1>\n<PUNCTUATION, ;>\n");
/// ```
pub struct TextSink<W> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    /// Creates a sink writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consumes the sink, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TokenSink for TextSink<W> {
    fn emit(&mut self, token: Token) -> io::Result<()> {
        self.writer.write_all(b"<")?;
        self.writer.write_all(token.kind().as_str().as_bytes())?;
        self.writer.write_all(b", ")?;
        self.writer.write_all(token.lexeme())?;
        self.writer.write_all(b">\n")
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
