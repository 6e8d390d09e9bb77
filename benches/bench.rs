//! Criterion benchmarks for the Quern analysis pipeline.
//!
//! Covers the stages that dominate real workloads:
//! - Tokenization of raw text
//! - Filter chains over token streams
//! - N-gram expansion
//! - Frequency counting with top-K selection

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use quern::prelude::*;
use std::hint::black_box;

/// Generate deterministic word-soup text for benchmarking.
fn generate_text(word_count: usize) -> String {
    let words = [
        "stream", "token", "filter", "window", "gram", "count", "chain", "buffer", "lazy",
        "analysis", "frequency", "classifier", "boundary", "pipeline", "capacity", "overflow",
    ];

    let mut text = String::with_capacity(word_count * 8);
    for i in 0..word_count {
        let word = words[(i * 7 + 13) % words.len()];
        text.push_str(word);
        if i % 11 == 0 {
            text.push_str(", ");
        } else {
            text.push(' ');
        }
    }

    text
}

fn bench_tokenizer(c: &mut Criterion) {
    let text = generate_text(10_000);
    let tokenizer = BasicTokenizer::new();

    let mut group = c.benchmark_group("tokenizer");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("basic_10k_words", |b| {
        b.iter(|| {
            let tokens: Vec<String> = tokenizer
                .tokenize_str(black_box(&text))
                .unwrap()
                .collect();
            black_box(tokens)
        })
    });
    group.finish();
}

fn bench_filter_chain(c: &mut Criterion) {
    let text = generate_text(10_000);
    let tokenizer = BasicTokenizer::new();
    let filter = LowercaseFilter::new()
        .chain(StopWordFilter::english())
        .chain(MinLengthFilter::new(4));

    let mut group = c.benchmark_group("filter_chain");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("lowercase_stop_minlen", |b| {
        b.iter(|| {
            let tokens: Vec<String> = filter
                .apply(tokenizer.tokenize_str(black_box(&text)).unwrap())
                .unwrap()
                .collect();
            black_box(tokens)
        })
    });
    group.finish();
}

fn bench_ngram_filter(c: &mut Criterion) {
    let text = generate_text(10_000);
    let tokenizer = BasicTokenizer::new();
    let ngrams = NGramFilter::new([1, 2, 3]).unwrap();

    let mut group = c.benchmark_group("ngram_filter");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("sizes_1_2_3", |b| {
        b.iter(|| {
            let grams: Vec<NGram<String>> = ngrams
                .apply(tokenizer.tokenize_str(black_box(&text)).unwrap())
                .unwrap()
                .collect();
            black_box(grams)
        })
    });
    group.finish();
}

fn bench_word_counter(c: &mut Criterion) {
    let text = generate_text(10_000);
    let tokenizer = BasicTokenizer::new();
    let counter = WordCounter::new();

    let mut group = c.benchmark_group("word_counter");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("top_10", |b| {
        b.iter(|| {
            let top = counter
                .top_count(tokenizer.tokenize_str(black_box(&text)).unwrap(), 10)
                .unwrap();
            black_box(top)
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_tokenizer,
    bench_filter_chain,
    bench_ngram_filter,
    bench_word_counter
);
criterion_main!(benches);
