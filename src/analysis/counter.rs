//! Frequency counting for finite streams.
//!
//! [`WordCounter`] aggregates a finite stream of hashable values into
//! occurrence counts and extracts the top-K most frequent entries.
//!
//! # Examples
//!
//! ```
//! use quern::analysis::counter::WordCounter;
//!
//! let counter = WordCounter::new();
//! let words = ["1", "2", "3", "2", "3", "3"].map(String::from);
//!
//! let counts = counter.count(words.clone());
//! assert_eq!(counts.get("3"), Some(&3));
//!
//! let top = counter.top_count(words, 2).unwrap();
//! assert_eq!(top[0].word, "3");
//! assert_eq!(top[0].count, 3);
//! assert_eq!(top[1].word, "2");
//! assert_eq!(top[1].count, 2);
//! ```

use std::collections::hash_map::Entry;
use std::hash::Hash;

use ahash::AHashMap;
use serde::Serialize;

use crate::error::{QuernError, Result};

/// A word and the number of times it appears in a stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WordCount<T> {
    /// The counted word.
    pub word: T,

    /// How many times it occurred.
    pub count: usize,
}

impl<T> WordCount<T> {
    /// Create a new word/count pair.
    pub fn new(word: T, count: usize) -> Self {
        WordCount { word, count }
    }
}

/// A counter for the unique values in a finite stream.
#[derive(Clone, Debug, Default)]
pub struct WordCounter;

impl WordCounter {
    /// Create a new word counter.
    pub fn new() -> Self {
        WordCounter
    }

    /// Count each distinct value in `words`, consuming the stream fully.
    pub fn count<T, I>(&self, words: I) -> AHashMap<T, usize>
    where
        T: Eq + Hash,
        I: IntoIterator<Item = T>,
    {
        let mut counts = AHashMap::new();
        for word in words {
            *counts.entry(word).or_insert(0) += 1;
        }

        counts
    }

    /// The `max_words` most frequent values in `words`, strictly descending
    /// by count. Ties are broken by first appearance in the stream.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error if `max_words` is zero.
    pub fn top_count<T, I>(&self, words: I, max_words: usize) -> Result<Vec<WordCount<T>>>
    where
        T: Eq + Hash,
        I: IntoIterator<Item = T>,
    {
        if max_words == 0 {
            return Err(QuernError::out_of_range(
                "max_words must be greater than zero",
            ));
        }

        // Aggregate into first-appearance slots so the later stable sort
        // keeps stream order among equal counts.
        let mut slots: AHashMap<T, usize> = AHashMap::new();
        let mut counts: Vec<usize> = Vec::new();
        for word in words {
            match slots.entry(word) {
                Entry::Occupied(entry) => counts[*entry.get()] += 1,
                Entry::Vacant(entry) => {
                    entry.insert(counts.len());
                    counts.push(1);
                }
            }
        }

        let mut slotted: Vec<(usize, T)> =
            slots.into_iter().map(|(word, slot)| (slot, word)).collect();
        slotted.sort_unstable_by_key(|(slot, _)| *slot);

        let mut entries: Vec<WordCount<T>> = slotted
            .into_iter()
            .map(|(slot, word)| WordCount::new(word, counts[slot]))
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries.truncate(max_words);

        Ok(entries)
    }
}
