//! Command implementations for the Quern CLI.

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::analysis::counter::{WordCount, WordCounter};
use crate::analysis::token_filter::{
    Filter, FilterExt, LowercaseFilter, MinLengthFilter, NGramFilter, StopWordFilter,
};
use crate::analysis::tokenizer::{BasicTokenizer, TokenizerExt};
use crate::cli::args::{Command, CountArgs, QuernArgs};
use crate::cli::output::{CountEntry, CountResults, output_count_results};
use crate::error::{QuernError, Result};

/// Execute a CLI command.
pub fn execute_command(args: QuernArgs) -> Result<()> {
    match &args.command {
        Command::Count(count_args) => count_words(count_args.clone(), &args),
    }
}

/// Count the unique words (or n-grams) in the input file and report the top
/// entries with their counts.
pub fn count_words(args: CountArgs, cli_args: &QuernArgs) -> Result<()> {
    validate_count_args(&args)?;

    if cli_args.verbosity() > 1 {
        println!("Counting words in: {}", args.input.display());
    }

    let start = Instant::now();
    let text = fs::read_to_string(&args.input)?;

    let tokenizer = BasicTokenizer::with_buffer_size(args.buffer_size)?;
    let filter = build_token_filter(&args)?;
    let tokens = filter.apply(tokenizer.tokenize_str(&text)?)?;

    let counter = WordCounter::new();
    let entries = if args.ngrams.is_empty() {
        to_entries(counter.top_count(tokens, args.top)?)
    } else {
        let ngram_filter = NGramFilter::new(args.ngrams.iter().copied())?;
        let grams = ngram_filter.apply(tokens)?;
        counter
            .top_count(grams, args.top)?
            .into_iter()
            .map(|entry| CountEntry {
                word: entry.word.to_string(),
                count: entry.count,
            })
            .collect()
    };

    let results = CountResults {
        entries,
        duration_ms: start.elapsed().as_millis() as u64,
    };

    output_count_results(&results, cli_args)?;

    if cli_args.verbosity() > 0 {
        println!("Command completed in {} ms.", results.duration_ms);
    }

    Ok(())
}

/// Ensure command parameters are valid before running.
fn validate_count_args(args: &CountArgs) -> Result<()> {
    require_file(&args.input, "Input file")?;
    if let Some(stop_words) = &args.stop_words {
        require_file(stop_words, "Stop word file")?;
    }
    if let Some(min_length) = args.min_length
        && min_length < 1
    {
        return Err(QuernError::invalid_argument("min-length must be 1 or more"));
    }

    Ok(())
}

fn require_file(path: &Path, label: &str) -> Result<()> {
    if !path.is_file() {
        return Err(QuernError::invalid_argument(format!(
            "{} '{}' does not exist",
            label,
            path.display()
        )));
    }
    Ok(())
}

/// Assemble the token filter chain: lowercase, then the optional stop-word
/// and minimum-length stages.
fn build_token_filter(args: &CountArgs) -> Result<Box<dyn Filter<In = String, Out = String>>> {
    let mut filter: Box<dyn Filter<In = String, Out = String>> = Box::new(LowercaseFilter::new());

    if let Some(path) = &args.stop_words {
        let stop_words = load_stop_words(path)?;
        filter = Box::new(filter.chain(StopWordFilter::new(stop_words, args.ignore_case)));
    }

    if let Some(min_length) = args.min_length {
        filter = Box::new(filter.chain(MinLengthFilter::new(min_length)));
    }

    Ok(filter)
}

/// Load a stop word list from a file, one word per line.
fn load_stop_words(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect())
}

fn to_entries(top: Vec<WordCount<String>>) -> Vec<CountEntry> {
    top.into_iter()
        .map(|entry| CountEntry {
            word: entry.word,
            count: entry.count,
        })
        .collect()
}
