//! Byte cursor for traversing a source stream.
//!
//! This module provides the `Cursor` struct which reads an input stream one
//! byte at a time and supports a single byte of pushback. It never holds
//! more of the input than the underlying reader buffers, so it works over
//! pipes and other unbounded streams.

use std::io::{self, BufRead};

/// A cursor over a buffered byte stream with one byte of pushback.
///
/// # Example
///
/// ```
/// use ctok_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("ab".as_bytes());
///
/// assert_eq!(cursor.advance().unwrap(), Some(b'a'));
/// assert_eq!(cursor.advance().unwrap(), Some(b'b'));
/// cursor.unread(b'b');
/// assert_eq!(cursor.advance().unwrap(), Some(b'b'));
/// assert_eq!(cursor.advance().unwrap(), None);
/// ```
pub struct Cursor<R> {
    /// The stream being traversed.
    reader: R,

    /// A byte returned by [`Cursor::unread`], served before the stream.
    pushback: Option<u8>,

    /// Number of bytes consumed so far.
    offset: u64,
}

impl<R: BufRead> Cursor<R> {
    /// Creates a new cursor reading from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pushback: None,
            offset: 0,
        }
    }

    /// Consumes and returns the next byte, or `None` at end of stream.
    ///
    /// Reads interrupted by a signal are retried.
    ///
    /// # Errors
    ///
    /// Returns any other error reported by the underlying reader.
    pub fn advance(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.pushback.take() {
            self.offset += 1;
            return Ok(Some(byte));
        }

        let next = self.fill()?;
        if next.is_some() {
            self.reader.consume(1);
            self.offset += 1;
        }
        Ok(next)
    }

    /// Returns the next byte without consuming it.
    ///
    /// # Example
    ///
    /// ```
    /// use ctok_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("x".as_bytes());
    /// assert_eq!(cursor.peek().unwrap(), Some(b'x'));
    /// assert_eq!(cursor.peek().unwrap(), Some(b'x'));
    /// assert_eq!(cursor.offset(), 0);
    /// ```
    pub fn peek(&mut self) -> io::Result<Option<u8>> {
        match self.pushback {
            Some(byte) => Ok(Some(byte)),
            None => self.fill(),
        }
    }

    /// Returns a just-consumed byte to the stream.
    ///
    /// The next call to [`advance`](Self::advance) or [`peek`](Self::peek)
    /// sees `byte` again. Only one byte of pushback is supported; the caller
    /// must consume it before unreading another.
    pub fn unread(&mut self, byte: u8) {
        debug_assert!(self.pushback.is_none(), "pushback slot already occupied");
        self.pushback = Some(byte);
        self.offset = self.offset.saturating_sub(1);
    }

    /// Returns true if no bytes remain.
    pub fn is_at_end(&mut self) -> io::Result<bool> {
        Ok(self.peek()?.is_none())
    }

    /// Returns the number of bytes consumed so far.
    ///
    /// Unread bytes do not count as consumed.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Consumes the cursor, returning the underlying reader.
    ///
    /// A byte sitting in the pushback slot is lost.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn fill(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}
