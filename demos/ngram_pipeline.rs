//! Example demonstrating n-gram expansion of a token stream.

use quern::prelude::*;

fn main() -> Result<()> {
    let text = "the cat sat on the mat";

    println!("=== N-gram Pipeline Example ===\n");
    println!("Input: {text}\n");

    let tokenizer = BasicTokenizer::new();

    // Expand the token stream into unigrams, bigrams and trigrams.
    let ngrams = NGramFilter::new([1, 2, 3])?;
    println!("All n-grams (sizes {:?}):", ngrams.sizes());
    for gram in ngrams.apply(tokenizer.tokenize_str(text)?)? {
        println!("  [{}] {}", gram.len(), gram);
    }

    // Count the most frequent bigrams.
    let bigrams = NGramFilter::new([2])?;
    let counter = WordCounter::new();
    let top = counter.top_count(bigrams.apply(tokenizer.tokenize_str(text)?)?, 3)?;

    println!("\nTop bigrams:");
    for entry in &top {
        println!("  {} - {}", entry.word, entry.count);
    }

    Ok(())
}
