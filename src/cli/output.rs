//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{OutputFormat, QuernArgs};
use crate::error::Result;

/// A single reported entry: a rendered word (or n-gram) and its count.
#[derive(Debug, Clone, Serialize)]
pub struct CountEntry {
    pub word: String,
    pub count: usize,
}

/// Result structure for the count command.
#[derive(Debug, Clone, Serialize)]
pub struct CountResults {
    pub entries: Vec<CountEntry>,
    pub duration_ms: u64,
}

/// Render count results in the selected output format.
pub fn output_count_results(results: &CountResults, args: &QuernArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(results),
        OutputFormat::Json => output_json(results, args),
        OutputFormat::Csv => output_csv(results),
    }
}

/// Output in human-readable format: one `word - count` line per entry.
fn output_human(results: &CountResults) -> Result<()> {
    for entry in &results.entries {
        println!("{} - {}", entry.word, entry.count);
    }
    Ok(())
}

/// Output as a JSON document.
fn output_json(results: &CountResults, args: &QuernArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(results)?
    } else {
        serde_json::to_string(results)?
    };
    println!("{json}");
    Ok(())
}

/// Output as CSV with a header row.
fn output_csv(results: &CountResults) -> Result<()> {
    println!("word,count");
    for entry in &results.entries {
        println!("{},{}", csv_escape(&entry.word), entry.count);
    }
    Ok(())
}

/// Quote a CSV field when it contains a delimiter, quote, or newline.
fn csv_escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
