//! Identifier and keyword lexing.

use std::io::BufRead;

use crate::classify::is_ident_continue;
use crate::error::Result;
use crate::token::{Keyword, Token, TokenKind};
use crate::Lexer;

impl<R: BufRead> Lexer<R> {
    /// Lexes an identifier or keyword whose first byte has been consumed.
    ///
    /// Identifiers start with a letter or underscore, followed by letters,
    /// digits or underscores. The whole run is then looked up in the keyword
    /// table. A run that overflowed the lexeme limit is always an identifier,
    /// since every keyword fits the minimum limit.
    ///
    /// # Returns
    ///
    /// A `KEYWORD` or `IDENTIFIER` token.
    pub(crate) fn lex_identifier(&mut self, first: u8) -> Result<Token> {
        let buffer = self.scan_run(first, is_ident_continue)?;

        let kind = match Keyword::from_lexeme(buffer.as_bytes()) {
            Some(_) if !buffer.is_truncated() => TokenKind::Keyword,
            _ => TokenKind::Identifier,
        };

        let lexeme = self.finish_lexeme(buffer, kind)?;
        Ok(Token::new(kind, lexeme))
    }
}
