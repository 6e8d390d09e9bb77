//! Integration tests for the count command against real files.

use std::fs;

use quern::cli::args::{Command, CountArgs, OutputFormat, QuernArgs};
use quern::cli::commands::execute_command;
use quern::error::{QuernError, Result};
use tempfile::TempDir;

fn quiet_args(command: Command) -> QuernArgs {
    QuernArgs {
        verbose: 0,
        quiet: true,
        output_format: OutputFormat::Human,
        pretty: false,
        command,
    }
}

fn count_args(input: &std::path::Path) -> CountArgs {
    CountArgs {
        input: input.to_path_buf(),
        stop_words: None,
        ignore_case: false,
        min_length: None,
        top: 10,
        ngrams: Vec::new(),
        buffer_size: 1024,
    }
}

#[test]
fn test_count_command_runs_on_real_file() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "The cat sat on the mat.")?;

    let args = quiet_args(Command::Count(count_args(&input)));
    execute_command(args)
}

#[test]
fn test_count_command_with_stop_words_and_min_length() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    let stop = dir.path().join("stop.txt");
    fs::write(&input, "The cat sat on the mat.")?;
    fs::write(&stop, "the\non\n")?;

    let mut count = count_args(&input);
    count.stop_words = Some(stop);
    count.ignore_case = true;
    count.min_length = Some(3);

    execute_command(quiet_args(Command::Count(count)))
}

#[test]
fn test_count_command_with_ngrams_json() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "one two three two one")?;

    let mut count = count_args(&input);
    count.ngrams = vec![1, 2];

    let mut args = quiet_args(Command::Count(count));
    args.output_format = OutputFormat::Json;

    execute_command(args)
}

#[test]
fn test_missing_input_file_reported() {
    let dir = TempDir::new().unwrap();
    let args = quiet_args(Command::Count(count_args(&dir.path().join("nope.txt"))));

    let result = execute_command(args);
    assert!(matches!(result, Err(QuernError::InvalidArgument(_))));
}

#[test]
fn test_missing_stop_word_file_reported() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "words").unwrap();

    let mut count = count_args(&input);
    count.stop_words = Some(dir.path().join("missing-stop.txt"));

    let result = execute_command(quiet_args(Command::Count(count)));
    assert!(matches!(result, Err(QuernError::InvalidArgument(_))));
}

#[test]
fn test_zero_min_length_rejected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "words").unwrap();

    let mut count = count_args(&input);
    count.min_length = Some(0);

    let result = execute_command(quiet_args(Command::Count(count)));
    assert!(matches!(result, Err(QuernError::InvalidArgument(_))));
}

#[test]
fn test_zero_top_rejected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "words").unwrap();

    let mut count = count_args(&input);
    count.top = 0;

    let result = execute_command(quiet_args(Command::Count(count)));
    assert!(matches!(result, Err(QuernError::OutOfRange(_))));
}

#[test]
fn test_zero_buffer_size_rejected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "words").unwrap();

    let mut count = count_args(&input);
    count.buffer_size = 0;

    let result = execute_command(quiet_args(Command::Count(count)));
    assert!(matches!(result, Err(QuernError::OutOfRange(_))));
}

#[test]
fn test_zero_ngram_size_rejected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "words").unwrap();

    let mut count = count_args(&input);
    count.ngrams = vec![0];

    let result = execute_command(quiet_args(Command::Count(count)));
    assert!(matches!(result, Err(QuernError::OutOfRange(_))));
}
