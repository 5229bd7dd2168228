//! ctok-drv - Scanner Driver
//!
//! Resolves configuration, sets up logging and runs the scanner over each
//! input, writing tokens to standard output.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use ctok_lex::{LexError, Lexer, ScanSummary, TextSink, TokenSink};
use tracing::debug;

pub use cli::Cli;
pub use config::Config;
pub use error::{DrvError, Result};
pub use output::{JsonLinesSink, OutputFormat};

/// One source to scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// The process's standard input.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl Input {
    /// Interprets a command-line argument; `-` names standard input.
    pub fn from_arg(path: PathBuf) -> Self {
        if path == Path::new("-") {
            Input::Stdin
        } else {
            Input::File(path)
        }
    }

    /// Name used in log messages.
    pub fn name(&self) -> Cow<'_, str> {
        match self {
            Input::Stdin => Cow::Borrowed("<stdin>"),
            Input::File(path) => path.to_string_lossy(),
        }
    }
}

/// A scanning session: a configuration and the inputs to run it over.
pub struct Session {
    config: Config,
    inputs: Vec<Input>,
}

impl Session {
    /// Creates a session. With no inputs, standard input is scanned.
    pub fn new(config: Config, mut inputs: Vec<Input>) -> Self {
        if inputs.is_empty() {
            inputs.push(Input::Stdin);
        }
        Self { config, inputs }
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the inputs in scan order.
    pub fn inputs(&self) -> &[Input] {
        &self.inputs
    }

    /// Scans every input in order, writing tokens to `out` in the configured
    /// format. Returns the combined counters.
    pub fn run<W: Write>(&self, out: W) -> Result<ScanSummary> {
        match self.config.output.format {
            OutputFormat::Text => self.run_with(&mut TextSink::new(out)),
            OutputFormat::Json => self.run_with(&mut JsonLinesSink::new(out)),
        }
    }

    /// Scans every input in order into `sink`.
    ///
    /// If the sink reports a closed pipe, scanning stops and the counters
    /// gathered up to that point are returned.
    pub fn run_with<S: TokenSink>(&self, sink: &mut S) -> Result<ScanSummary> {
        let mut total = ScanSummary::new();
        for input in &self.inputs {
            let summary = match input {
                Input::Stdin => self.scan(io::stdin().lock(), input, sink),
                Input::File(path) => {
                    let file = File::open(path).map_err(|source| DrvError::Input {
                        path: path.clone(),
                        source,
                    })?;
                    self.scan(BufReader::new(file), input, sink)
                },
            }?;
            total.merge(summary.counts());
            if let Scanned::OutputClosed(_) = summary {
                debug!(input = %input.name(), "output closed, stopping");
                break;
            }
        }
        Ok(total)
    }

    /// Scans one reader with a fresh lexer.
    ///
    /// Read failures on a file input are reported as [`DrvError::Input`]
    /// naming the file.
    fn scan<R: BufRead, S: TokenSink>(
        &self,
        reader: R,
        input: &Input,
        sink: &mut S,
    ) -> Result<Scanned> {
        debug!(input = %input.name(), "scanning");
        let mut lexer = Lexer::with_config(reader, self.config.lexer)?;
        match lexer.run(sink) {
            Ok(summary) => {
                debug!(input = %input.name(), tokens = summary.total(), "done");
                Ok(Scanned::Complete(summary))
            },
            Err(LexError::Output(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
                Ok(Scanned::OutputClosed(lexer.summary()))
            },
            Err(LexError::Io(source)) => match input {
                Input::File(path) => Err(DrvError::Input {
                    path: path.clone(),
                    source,
                }),
                Input::Stdin => Err(LexError::Io(source).into()),
            },
            Err(e) => Err(e.into()),
        }
    }
}

/// How the scan of one input ended.
enum Scanned {
    /// The input was read to end of stream.
    Complete(ScanSummary),
    /// The output was closed before the input was exhausted.
    OutputClosed(ScanSummary),
}

impl Scanned {
    fn counts(&self) -> &ScanSummary {
        match self {
            Scanned::Complete(summary) | Scanned::OutputClosed(summary) => summary,
        }
    }
}

/// Writes `text` to standard output, treating a closed pipe as success.
fn print_stdout(text: &str) -> Result<()> {
    let mut out = io::stdout().lock();
    let written = out
        .write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(DrvError::from);
    match written {
        Err(e) if e.is_output_closed() => Ok(()),
        other => other,
    }
}

/// Load configuration from an explicit file or the default locations.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Entry point of the `ctok` binary.
///
/// Parses arguments, initializes logging, resolves configuration and runs
/// a [`Session`] against standard output.
pub fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.no_color)?;

    let mut config = load_config(cli.config.as_deref())?;
    cli.apply_to(&mut config);
    config.validate()?;

    if cli.print_config {
        print_stdout(&config.to_toml()?)?;
        return Ok(());
    }

    let session = Session::new(config, cli.inputs());
    let summary = session.run(io::stdout().lock())?;

    if session.config().output.stats {
        output::write_stats(io::stderr().lock(), &summary)?;
    }

    Ok(())
}
