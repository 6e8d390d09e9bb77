//! Example demonstrating word counting over a filtered token stream.

use quern::prelude::*;

fn main() -> Result<()> {
    let text = "It was the best of times, it was the worst of times, \
                it was the age of wisdom, it was the age of foolishness.";

    println!("=== Word Counting Example ===\n");
    println!("Input: {text}\n");

    // Tokenize, normalize case, and drop common English stop words.
    let tokenizer = BasicTokenizer::new();
    let filter = LowercaseFilter::new().chain(StopWordFilter::english());

    let counter = WordCounter::new();
    let top = counter.top_count(filter.apply(tokenizer.tokenize_str(text)?)?, 5)?;

    println!("Top {} words:", top.len());
    for entry in &top {
        println!("  {} - {}", entry.word, entry.count);
    }

    Ok(())
}
