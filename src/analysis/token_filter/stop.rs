//! Stop word filter implementation.
//!
//! This module provides a filter that removes words present in a fixed
//! exclusion set. A default English stop word list is included; custom
//! lists and a case-insensitive comparison mode are supported.
//!
//! # Examples
//!
//! ```
//! use quern::analysis::stream::IntoStream;
//! use quern::analysis::token_filter::{Filter, StopWordFilter};
//!
//! let filter = StopWordFilter::new(["the", "of"], false);
//! let tokens = vec!["the".to_string(), "best".to_string(), "of".to_string(), "times".to_string()];
//!
//! let output: Vec<String> = filter.apply(tokens.into_stream()).unwrap().collect();
//! assert_eq!(output, vec!["best", "times"]);
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::stream::Stream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default English stop words list.
///
/// Common English words that are typically filtered out before counting.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that excludes words that are in a stop word list.
///
/// The comparison mode is fixed at construction: case-sensitive by default,
/// or case-insensitive, in which case the exclusion set is normalized to
/// lowercase once and incoming tokens are folded before the lookup.
/// Cardinality-reducing, order-preserving.
#[derive(Clone, Debug)]
pub struct StopWordFilter {
    /// The set of words to exclude.
    stop_words: Arc<HashSet<String>>,

    /// Whether comparisons ignore case.
    ignore_case: bool,
}

impl StopWordFilter {
    /// Create a new stop word filter from a list of words.
    ///
    /// With `ignore_case` set, membership tests fold both the list and the
    /// incoming tokens to lowercase.
    pub fn new<I, S>(words: I, ignore_case: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words: HashSet<String> = words
            .into_iter()
            .map(|word| {
                let word: String = word.into();
                if ignore_case { word.to_lowercase() } else { word }
            })
            .collect();

        StopWordFilter {
            stop_words: Arc::new(stop_words),
            ignore_case,
        }
    }

    /// Create a new stop word filter with the default English stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use quern::analysis::token_filter::StopWordFilter;
    ///
    /// let filter = StopWordFilter::english();
    /// assert!(filter.is_stop_word("the"));
    /// assert!(!filter.is_stop_word("hello"));
    /// ```
    pub fn english() -> Self {
        StopWordFilter {
            stop_words: Arc::new(DEFAULT_ENGLISH_STOP_WORDS_SET.clone()),
            ignore_case: false,
        }
    }

    /// Check whether `word` would be excluded by this filter.
    pub fn is_stop_word(&self, word: &str) -> bool {
        if self.ignore_case {
            self.stop_words.contains(&word.to_lowercase())
        } else {
            self.stop_words.contains(word)
        }
    }

    /// The number of words in the exclusion set.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check whether the exclusion set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Filter for StopWordFilter {
    type In = String;
    type Out = String;

    fn apply<'a>(&self, input: Stream<'a, String>) -> Result<Stream<'a, String>> {
        let stop_words = Arc::clone(&self.stop_words);
        let ignore_case = self.ignore_case;

        Ok(Box::new(input.filter(move |token| {
            if ignore_case {
                !stop_words.contains(&token.to_lowercase())
            } else {
                !stop_words.contains(token.as_str())
            }
        })))
    }

    fn name(&self) -> &'static str {
        "stop_word"
    }
}
