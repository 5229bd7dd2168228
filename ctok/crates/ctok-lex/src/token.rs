//! Token definitions for the ctok scanner.
//!
//! A [`Token`] is a `(kind, lexeme)` pair. The lexeme holds the exact bytes
//! consumed from the input, so a token built from invalid UTF-8 still
//! round-trips to the output unchanged.

use std::borrow::Cow;
use std::fmt;

/// The closed set of token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// One of the reserved words, see [`Keyword`].
    Keyword,
    /// A letter followed by letters and digits that is not a keyword.
    Identifier,
    /// A run of decimal digits.
    Number,
    /// One of `+ - * / =`.
    Operator,
    /// One of `( ) { } ; ,`.
    Punctuation,
    /// Any other single byte.
    Unknown,
}

impl TokenKind {
    /// Number of token kinds.
    pub const COUNT: usize = 6;

    /// All kinds, in output tag order.
    pub const ALL: [TokenKind; Self::COUNT] = [
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::Number,
        TokenKind::Operator,
        TokenKind::Punctuation,
        TokenKind::Unknown,
    ];

    /// Returns the tag written in the `<KIND, LEXEME>` output line.
    ///
    /// # Example
    ///
    /// ```
    /// use ctok_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::Punctuation.as_str(), "PUNCTUATION");
    /// ```
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Punctuation => "PUNCTUATION",
            TokenKind::Unknown => "UNKNOWN",
        }
    }

    /// Position of this kind in [`TokenKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The reserved words of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `int`
    Int,
    /// `float`
    Float,
    /// `char`
    Char,
    /// `if`
    If,
    /// `else`
    Else,
    /// `while`
    While,
    /// `return`
    Return,
}

impl Keyword {
    /// All keywords.
    pub const ALL: [Keyword; 7] = [
        Keyword::Int,
        Keyword::Float,
        Keyword::Char,
        Keyword::If,
        Keyword::Else,
        Keyword::While,
        Keyword::Return,
    ];

    /// Length in bytes of the longest keyword.
    pub const MAX_LEN: usize = 6;

    /// Returns the source spelling of the keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Int => "int",
            Keyword::Float => "float",
            Keyword::Char => "char",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::While => "while",
            Keyword::Return => "return",
        }
    }

    /// Looks up a complete lexeme in the keyword table.
    ///
    /// Matching is exact and case-sensitive; prefixes do not match.
    ///
    /// # Example
    ///
    /// ```
    /// use ctok_lex::Keyword;
    ///
    /// assert_eq!(Keyword::from_lexeme(b"while"), Some(Keyword::While));
    /// assert_eq!(Keyword::from_lexeme(b"While"), None);
    /// assert_eq!(Keyword::from_lexeme(b"integer"), None);
    /// ```
    pub fn from_lexeme(lexeme: &[u8]) -> Option<Keyword> {
        match lexeme {
            b"int" => Some(Keyword::Int),
            b"float" => Some(Keyword::Float),
            b"char" => Some(Keyword::Char),
            b"if" => Some(Keyword::If),
            b"else" => Some(Keyword::Else),
            b"while" => Some(Keyword::While),
            b"return" => Some(Keyword::Return),
            _ => None,
        }
    }
}

/// A classified lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    lexeme: Vec<u8>,
}

impl Token {
    /// Creates a token from a kind and the bytes it was scanned from.
    ///
    /// # Example
    ///
    /// ```
    /// use ctok_lex::{Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::Number, "42");
    /// assert_eq!(token.to_string(), "<NUMBER, 42>");
    /// ```
    pub fn new(kind: TokenKind, lexeme: impl Into<Vec<u8>>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    /// Creates a one-byte token.
    pub fn single(kind: TokenKind, byte: u8) -> Self {
        Self {
            kind,
            lexeme: vec![byte],
        }
    }

    /// Returns the kind of this token.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the raw lexeme bytes.
    pub fn lexeme(&self) -> &[u8] {
        &self.lexeme
    }

    /// Returns the lexeme as text, replacing invalid UTF-8 sequences.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.lexeme)
    }

    /// Returns the keyword this token spells, if it is a keyword.
    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword => Keyword::from_lexeme(&self.lexeme),
            _ => None,
        }
    }

    /// Consumes the token, returning its lexeme bytes.
    pub fn into_lexeme(self) -> Vec<u8> {
        self.lexeme
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.kind, self.text())
    }
}
