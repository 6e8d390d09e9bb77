//! Command line argument parsing for the Quern CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Quern - a small, composable text analysis pipeline
#[derive(Parser, Debug, Clone)]
#[command(name = "quern")]
#[command(about = "A small, composable text analysis pipeline")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct QuernArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl QuernArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Count the unique words (or n-grams) in a text file
    Count(CountArgs),
}

/// Arguments for the count command
#[derive(Parser, Debug, Clone)]
pub struct CountArgs {
    /// The input text file to be processed
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Text file containing the stop words, one per line
    #[arg(short = 's', long = "stop-words", value_name = "FILE")]
    pub stop_words: Option<PathBuf>,

    /// Ignore case when comparing stop words
    #[arg(long)]
    pub ignore_case: bool,

    /// The minimum length for a token to be included in the count
    #[arg(short = 'm', long = "min-length", value_name = "N")]
    pub min_length: Option<usize>,

    /// Number of entries to report
    #[arg(short = 'k', long = "top", default_value = "10", value_name = "K")]
    pub top: usize,

    /// N-gram sizes; when given, n-grams are counted instead of words
    #[arg(
        short = 'n',
        long = "ngrams",
        value_name = "N",
        value_delimiter = ','
    )]
    pub ngrams: Vec<usize>,

    /// Read buffer capacity of the tokenizer, in characters
    #[arg(long = "buffer-size", default_value = "1024", value_name = "N")]
    pub buffer_size: usize,
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}
