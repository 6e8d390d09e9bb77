//! N-gram expansion filter implementation.
//!
//! [`NGramFilter`] expands a token stream into trailing n-grams: for every
//! incoming token it emits one n-gram per configured size whose window is
//! already full enough, smallest size first. A single sliding window sized
//! to the largest configured size backs the expansion.
//!
//! # Examples
//!
//! ```
//! use quern::analysis::stream::IntoStream;
//! use quern::analysis::token_filter::{Filter, NGramFilter};
//!
//! let filter = NGramFilter::new([1, 3]).unwrap();
//! let tokens = vec!["cat".to_string(), "sat".to_string(), "mat".to_string()];
//!
//! let grams: Vec<String> = filter
//!     .apply(tokens.into_stream())
//!     .unwrap()
//!     .map(|gram| gram.to_string())
//!     .collect();
//!
//! assert_eq!(grams, vec!["cat", "sat", "mat", "cat sat mat"]);
//! ```

use std::collections::VecDeque;
use std::marker::PhantomData;

use crate::analysis::ngram::NGram;
use crate::analysis::stream::Stream;
use crate::analysis::token_filter::Filter;
use crate::error::{QuernError, Result};
use crate::util::sliding_window::SlidingWindow;

/// A filter that generates trailing n-grams from a source stream.
///
/// Configured sizes are sorted ascending and deduplicated at construction,
/// so per input token the emitted n-grams come smallest first. Sizes larger
/// than the number of tokens seen so far simply wait until the window fills
/// enough before first emitting.
#[derive(Clone, Debug)]
pub struct NGramFilter<T> {
    /// The gram sizes to generate, ascending and distinct.
    sizes: Vec<usize>,

    _marker: PhantomData<fn() -> T>,
}

impl<T> NGramFilter<T> {
    /// Create a new n-gram filter for the given sizes.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if `sizes` yields no elements, or
    /// an out-of-range error if any size is zero.
    pub fn new<I: IntoIterator<Item = usize>>(sizes: I) -> Result<Self> {
        let mut sizes: Vec<usize> = sizes.into_iter().collect();
        if sizes.is_empty() {
            return Err(QuernError::invalid_argument(
                "at least one n-gram size is required",
            ));
        }
        if sizes.contains(&0) {
            return Err(QuernError::out_of_range(
                "n-gram sizes must be greater than zero",
            ));
        }

        // Sort so the smallest grams are emitted first; duplicates collapse.
        sizes.sort_unstable();
        sizes.dedup();

        Ok(NGramFilter {
            sizes,
            _marker: PhantomData,
        })
    }

    /// The configured gram sizes, ascending and distinct.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// The largest configured gram size.
    pub fn max_size(&self) -> usize {
        // sizes is sorted and non-empty by construction
        self.sizes[self.sizes.len() - 1]
    }
}

impl<T> Filter for NGramFilter<T>
where
    T: Clone + 'static,
{
    type In = T;
    type Out = NGram<T>;

    fn apply<'a>(&self, input: Stream<'a, T>) -> Result<Stream<'a, NGram<T>>> {
        // Each traversal gets its own window, so the stream carries no
        // state shared with the filter or with other traversals.
        Ok(Box::new(NGramStream {
            input,
            sizes: self.sizes.clone(),
            window: SlidingWindow::new(self.max_size())?,
            pending: VecDeque::new(),
        }))
    }

    fn name(&self) -> &'static str {
        "ngram"
    }
}

/// Lazy n-gram stream over a token stream.
struct NGramStream<'a, T> {
    input: Stream<'a, T>,
    sizes: Vec<usize>,
    window: SlidingWindow<T>,
    /// N-grams produced by the latest input token, drained before the next
    /// upstream pull.
    pending: VecDeque<NGram<T>>,
}

impl<T: Clone> Iterator for NGramStream<'_, T> {
    type Item = NGram<T>;

    fn next(&mut self) -> Option<NGram<T>> {
        loop {
            if let Some(gram) = self.pending.pop_front() {
                return Some(gram);
            }

            let token = self.input.next()?;
            self.window.append(token);

            for &size in &self.sizes {
                if self.window.len() >= size {
                    let start = self.window.len() - size;
                    let gram = NGram::from_window(&self.window, start, Some(size))
                        .expect("window holds at least `size` elements");
                    self.pending.push_back(gram);
                }
            }
        }
    }
}
