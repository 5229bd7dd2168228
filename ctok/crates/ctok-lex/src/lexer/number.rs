//! Number literal lexing.
//!
//! Only decimal integer literals exist: no sign, decimal point, exponent or
//! base prefix.

use std::io::BufRead;

use crate::classify::is_digit;
use crate::error::Result;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<R: BufRead> Lexer<R> {
    /// Lexes a number whose first digit has been consumed.
    ///
    /// The lexeme is kept as text; no numeric value is computed, so there is
    /// no overflow beyond the lexeme length limit.
    ///
    /// # Returns
    ///
    /// A `NUMBER` token.
    pub(crate) fn lex_number(&mut self, first: u8) -> Result<Token> {
        let buffer = self.scan_run(first, is_digit)?;
        let lexeme = self.finish_lexeme(buffer, TokenKind::Number)?;
        Ok(Token::new(TokenKind::Number, lexeme))
    }
}
