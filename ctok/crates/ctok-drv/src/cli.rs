//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;
use ctok_lex::OverflowPolicy;

use crate::config::Config;
use crate::output::OutputFormat;
use crate::Input;

/// ctok - tokenize C-like source into `<KIND, LEXEME>` lines
///
/// Reads standard input, or each named file in order, and writes one line
/// per token to standard output.
#[derive(Parser, Debug)]
#[command(name = "ctok")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize C-like source into <KIND, LEXEME> lines", long_about = None)]
pub struct Cli {
    /// Input files (`-` for standard input; standard input when omitted)
    pub inputs: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "CTOK_VERBOSE")]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "CTOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable color in log output
    #[arg(long, env = "CTOK_NO_COLOR")]
    pub no_color: bool,

    /// Token output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Maximum lexeme length in bytes
    #[arg(long, value_name = "BYTES")]
    pub max_lexeme_len: Option<usize>,

    /// What to do with longer lexemes (truncate, reject, grow)
    #[arg(long, value_name = "POLICY")]
    pub overflow: Option<OverflowPolicy>,

    /// Print a token summary to stderr when done
    #[arg(long)]
    pub stats: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Overrides configuration values with the flags that were given.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(max_lexeme_len) = self.max_lexeme_len {
            config.lexer.max_lexeme_len = max_lexeme_len;
        }
        if let Some(overflow) = self.overflow {
            config.lexer.overflow = overflow;
        }
        if self.stats {
            config.output.stats = true;
        }
    }

    /// Returns the inputs to scan, in order.
    pub fn inputs(&self) -> Vec<Input> {
        self.inputs.iter().cloned().map(Input::from_arg).collect()
    }
}
