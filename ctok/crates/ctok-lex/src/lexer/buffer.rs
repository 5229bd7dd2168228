//! Lexeme storage with an optional length limit.

/// Accumulates the bytes of one lexeme.
///
/// Bytes pushed past the limit are counted but not stored, so the scanner
/// can keep consuming a run after the buffer is full and still report the
/// run's real length.
pub(crate) struct LexemeBuffer {
    bytes: Vec<u8>,
    limit: Option<usize>,
    len: usize,
}

impl LexemeBuffer {
    pub(crate) fn new(limit: Option<usize>) -> Self {
        Self {
            bytes: Vec::with_capacity(16),
            limit,
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, byte: u8) {
        self.len += 1;
        if self.limit.map_or(true, |limit| self.bytes.len() < limit) {
            self.bytes.push(byte);
        }
    }

    /// Length of the run in the input, including dropped bytes.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_truncated(&self) -> bool {
        self.len > self.bytes.len()
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
