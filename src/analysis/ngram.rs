//! The n-gram value type.
//!
//! An [`NGram`] is an immutable, non-empty ordered tuple of elements drawn
//! from a token stream. Identity is structural: two n-grams are equal iff
//! they have the same arity and element-wise equal contents in the same
//! order, and equal n-grams hash equal, so n-grams can be used directly as
//! map and set keys.
//!
//! # Examples
//!
//! ```
//! use quern::analysis::ngram::NGram;
//!
//! let bigram = NGram::new(["cat", "sat"]).unwrap();
//! assert_eq!(bigram.len(), 2);
//! assert_eq!(bigram[0], "cat");
//! assert_eq!(bigram.to_string(), "cat sat");
//!
//! let same = NGram::new(["cat", "sat"]).unwrap();
//! let reversed = NGram::new(["sat", "cat"]).unwrap();
//! assert_eq!(bigram, same);
//! assert_ne!(bigram, reversed);
//! ```

use std::fmt;
use std::ops::Index;

use serde::Serialize;

use crate::error::{QuernError, Result};
use crate::util::sliding_window::SlidingWindow;

/// An immutable, non-empty ordered sequence of grams.
///
/// Constructed by copying elements out of a source; never mutated after
/// construction. Equality and hashing are derived and therefore element-wise,
/// order-sensitive and arity-sensitive.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct NGram<T> {
    grams: Box<[T]>,
}

impl<T> NGram<T> {
    /// Create an n-gram from one or more elements.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if `grams` yields no elements.
    pub fn new<I: IntoIterator<Item = T>>(grams: I) -> Result<Self> {
        let grams: Vec<T> = grams.into_iter().collect();
        if grams.is_empty() {
            return Err(QuernError::invalid_argument(
                "an n-gram requires at least one element",
            ));
        }

        Ok(NGram {
            grams: grams.into_boxed_slice(),
        })
    }

    /// The arity of this n-gram.
    pub fn len(&self) -> usize {
        self.grams.len()
    }

    /// Always false; n-grams are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.grams.is_empty()
    }

    /// Get the gram at the given position.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.grams.get(index)
    }

    /// Iterate over the grams in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.grams.iter()
    }
}

impl<T: Clone> NGram<T> {
    /// Create an n-gram by copying the contiguous logical range
    /// `[start, start + count)` out of a sliding window.
    ///
    /// A `count` of `None` takes the rest of the window from `start`.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error if the requested range exceeds the
    /// window's extent, or an invalid-argument error if the range is empty.
    pub fn from_window(
        window: &SlidingWindow<T>,
        start: usize,
        count: Option<usize>,
    ) -> Result<Self> {
        let len = window.len();
        let count = count.unwrap_or_else(|| len.saturating_sub(start));

        if start + count > len {
            return Err(QuernError::out_of_range(format!(
                "range [{}, {}) exceeds the window size {}",
                start,
                start + count,
                len
            )));
        }

        if count == 0 {
            return Err(QuernError::invalid_argument(
                "an n-gram requires at least one element",
            ));
        }

        // Defensive copy out of the window.
        let mut grams = Vec::with_capacity(count);
        for index in start..start + count {
            grams.push(window.get(index)?.clone());
        }

        Ok(NGram {
            grams: grams.into_boxed_slice(),
        })
    }
}

impl<T> Index<usize> for NGram<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.grams[index]
    }
}

impl<'a, T> IntoIterator for &'a NGram<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.grams.iter()
    }
}

impl<T: fmt::Display> fmt::Display for NGram<T> {
    /// Renders the grams joined by single spaces, in order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, gram) in self.grams.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{gram}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use super::*;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_empty_rejected() {
        let result = NGram::<String>::new([]);
        assert!(matches!(result, Err(QuernError::InvalidArgument(_))));
    }

    #[test]
    fn test_len_matches_element_count() {
        let gram = NGram::new(["a", "b", "c"]).unwrap();
        assert_eq!(gram.len(), 3);
        assert!(!gram.is_empty());
    }

    #[test]
    fn test_indexed_access() {
        let gram = NGram::new(["cat", "sat", "mat"]).unwrap();
        assert_eq!(gram[1], "sat");
        assert_eq!(gram.get(2), Some(&"mat"));
        assert_eq!(gram.get(3), None);
    }

    #[test]
    fn test_structural_equality_and_hash() {
        let left = NGram::new(["cat", "sat"]).unwrap();
        let right = NGram::new(["cat", "sat"]).unwrap();

        assert_eq!(left, right);
        assert_eq!(hash_of(&left), hash_of(&right));
    }

    #[test]
    fn test_order_sensitivity() {
        let forward = NGram::new(["cat", "sat"]).unwrap();
        let backward = NGram::new(["sat", "cat"]).unwrap();

        assert_ne!(forward, backward);
    }

    #[test]
    fn test_arity_sensitivity() {
        let unigram = NGram::new(["cat"]).unwrap();
        let bigram = NGram::new(["cat", "cat"]).unwrap();

        assert_ne!(unigram, bigram);
    }

    #[test]
    fn test_usable_as_map_key() {
        use std::collections::HashMap;

        let mut counts = HashMap::new();
        *counts.entry(NGram::new(["a", "b"]).unwrap()).or_insert(0) += 1;
        *counts.entry(NGram::new(["a", "b"]).unwrap()).or_insert(0) += 1;

        assert_eq!(counts.len(), 1);
        assert_eq!(counts[&NGram::new(["a", "b"]).unwrap()], 2);
    }

    #[test]
    fn test_display_joins_with_spaces() {
        let gram = NGram::new(["the", "quick", "fox"]).unwrap();
        assert_eq!(gram.to_string(), "the quick fox");

        let unigram = NGram::new(["alone"]).unwrap();
        assert_eq!(unigram.to_string(), "alone");
    }

    #[test]
    fn test_from_window_copies_range() {
        let mut window = SlidingWindow::new(3).unwrap();
        window.extend(["a", "b", "c"]);

        let gram = NGram::from_window(&window, 1, Some(2)).unwrap();
        assert_eq!(gram[0], "b");
        assert_eq!(gram[1], "c");
    }

    #[test]
    fn test_from_window_defaults_to_rest() {
        let mut window = SlidingWindow::new(4).unwrap();
        window.extend(["a", "b", "c", "d"]);

        let gram = NGram::from_window(&window, 1, None).unwrap();
        assert_eq!(gram.len(), 3);
        assert_eq!(gram.to_string(), "b c d");
    }

    #[test]
    fn test_from_window_is_defensive_copy() {
        let mut window = SlidingWindow::new(2).unwrap();
        window.extend(["a", "b"]);

        let gram = NGram::from_window(&window, 0, None).unwrap();
        window.append("c"); // evicts "a"

        assert_eq!(gram.to_string(), "a b");
    }

    #[test]
    fn test_from_window_range_violations() {
        let mut window = SlidingWindow::new(3).unwrap();
        window.extend(["a", "b"]);

        assert!(matches!(
            NGram::from_window(&window, 1, Some(2)),
            Err(QuernError::OutOfRange(_))
        ));
        assert!(matches!(
            NGram::from_window(&window, 3, None),
            Err(QuernError::OutOfRange(_))
        ));
        assert!(matches!(
            NGram::from_window(&window, 2, None),
            Err(QuernError::InvalidArgument(_))
        ));
    }
}
