//! Output formats for scanned tokens.

use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};

use clap::ValueEnum;
use ctok_lex::{ScanSummary, Token, TokenSink};
use serde::{Deserialize, Serialize};

/// How tokens are written to standard output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<KIND, LEXEME>` lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    lexeme: Cow<'a, str>,
}

/// Writes tokens as JSON lines: `{"kind":"NUMBER","lexeme":"42"}`.
///
/// JSON strings must be valid UTF-8, so lexemes that are not are written
/// with replacement characters.
pub struct JsonLinesSink<W> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    /// Creates a sink writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TokenSink for JsonLinesSink<W> {
    fn emit(&mut self, token: Token) -> io::Result<()> {
        let record = TokenRecord {
            kind: token.kind().as_str(),
            lexeme: token.text(),
        };
        serde_json::to_writer(&mut self.writer, &record)?;
        self.writer.write_all(b"\n")
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Writes a per-kind token table followed by a totals line.
pub fn write_stats<W: Write>(mut writer: W, summary: &ScanSummary) -> io::Result<()> {
    for (kind, count) in summary.iter() {
        writeln!(writer, "{:<12} {}", kind.as_str(), count)?;
    }
    writeln!(
        writer,
        "{:<12} {} tokens, {} bytes, {} truncated",
        "total",
        summary.total(),
        summary.bytes(),
        summary.truncated()
    )
}
