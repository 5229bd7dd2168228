//! Per-run scan counters.

use std::fmt;

use crate::token::TokenKind;

/// Counters collected while scanning one or more inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    counts: [usize; TokenKind::COUNT],
    truncated: usize,
    bytes: u64,
}

impl ScanSummary {
    /// Creates an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tokens of the given kind.
    pub fn count(&self, kind: TokenKind) -> usize {
        self.counts[kind.index()]
    }

    /// Number of tokens of all kinds.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Number of lexemes cut short by the length limit.
    pub fn truncated(&self) -> usize {
        self.truncated
    }

    /// Number of input bytes consumed.
    pub fn bytes(&self) -> u64 {
        self.bytes
    }

    /// Iterates over `(kind, count)` pairs in output tag order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenKind, usize)> + '_ {
        TokenKind::ALL.iter().map(move |kind| (*kind, self.count(*kind)))
    }

    /// Adds the counters of `other` to this summary.
    pub fn merge(&mut self, other: &ScanSummary) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *mine += theirs;
        }
        self.truncated += other.truncated;
        self.bytes += other.bytes;
    }

    pub(crate) fn record(&mut self, kind: TokenKind) {
        self.counts[kind.index()] += 1;
    }

    pub(crate) fn record_truncation(&mut self) {
        self.truncated += 1;
    }

    pub(crate) fn with_bytes(mut self, bytes: u64) -> Self {
        self.bytes = bytes;
        self
    }
}

impl fmt::Display for ScanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} tokens (", self.total())?;
        for (i, (kind, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} {}", kind, count)?;
        }
        write!(f, "), {} bytes, {} truncated", self.bytes, self.truncated)
    }
}
