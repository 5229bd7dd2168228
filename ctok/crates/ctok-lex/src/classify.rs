//! Character classification for the ctok scanner.
//!
//! Every predicate here works on a single raw input byte. End-of-stream is
//! not a byte; the cursor reports it as `None` before classification runs.
//! Non-ASCII bytes never match any class and fall through to
//! [`CharClass::Unknown`].

/// Checks if a byte can start an identifier.
///
/// Valid start bytes are ASCII letters `a-z`, `A-Z` and the underscore.
///
/// # Example
///
/// ```
/// use ctok_lex::classify::is_letter;
///
/// assert!(is_letter(b'a'));
/// assert!(is_letter(b'Z'));
/// assert!(is_letter(b'_'));
/// assert!(!is_letter(b'1'));
/// assert!(!is_letter(0xCE)); // first byte of 'α'
/// ```
#[inline]
pub fn is_letter(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

/// Checks if a byte is an ASCII decimal digit.
///
/// # Example
///
/// ```
/// use ctok_lex::classify::is_digit;
///
/// assert!(is_digit(b'0'));
/// assert!(is_digit(b'9'));
/// assert!(!is_digit(b'a'));
/// ```
#[inline]
pub fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

/// Checks if a byte may continue an identifier that has already started.
#[inline]
pub fn is_ident_continue(c: u8) -> bool {
    is_letter(c) || is_digit(c)
}

/// Checks if a byte is one of the operator characters `+ - * / =`.
#[inline]
pub fn is_operator_char(c: u8) -> bool {
    matches!(c, b'+' | b'-' | b'*' | b'/' | b'=')
}

/// Checks if a byte is one of the punctuation characters `( ) { } ; ,`.
#[inline]
pub fn is_punctuation_char(c: u8) -> bool {
    matches!(c, b'(' | b')' | b'{' | b'}' | b';' | b',')
}

/// Checks if a byte is whitespace the scanner skips.
///
/// The set is space, tab, newline, carriage return, form feed and vertical
/// tab. Note that `u8::is_ascii_whitespace` excludes vertical tab, so it is
/// not used here.
///
/// # Example
///
/// ```
/// use ctok_lex::classify::is_whitespace;
///
/// assert!(is_whitespace(b' '));
/// assert!(is_whitespace(0x0B)); // vertical tab
/// assert!(!is_whitespace(b'x'));
/// ```
#[inline]
pub fn is_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r' | 0x0C | 0x0B)
}

/// The class of a single input byte, as seen by the dispatch loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Skipped between tokens.
    Whitespace,
    /// Starts an identifier or keyword.
    Letter,
    /// Starts a number.
    Digit,
    /// A one-byte operator.
    Operator,
    /// A one-byte punctuation mark.
    Punctuation,
    /// Anything else, emitted as a one-byte `UNKNOWN` token.
    Unknown,
}

/// Classifies a single input byte.
///
/// The classes are mutually exclusive, so the order of the checks below
/// does not change the result.
///
/// # Example
///
/// ```
/// use ctok_lex::classify::{classify, CharClass};
///
/// assert_eq!(classify(b'\t'), CharClass::Whitespace);
/// assert_eq!(classify(b'x'), CharClass::Letter);
/// assert_eq!(classify(b'7'), CharClass::Digit);
/// assert_eq!(classify(b'='), CharClass::Operator);
/// assert_eq!(classify(b';'), CharClass::Punctuation);
/// assert_eq!(classify(b'@'), CharClass::Unknown);
/// ```
pub fn classify(c: u8) -> CharClass {
    if is_whitespace(c) {
        CharClass::Whitespace
    } else if is_letter(c) {
        CharClass::Letter
    } else if is_digit(c) {
        CharClass::Digit
    } else if is_operator_char(c) {
        CharClass::Operator
    } else if is_punctuation_char(c) {
        CharClass::Punctuation
    } else {
        CharClass::Unknown
    }
}
