//! Minimum-length filter implementation.

use crate::analysis::stream::Stream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes tokens that are too short.
///
/// Tokens whose character count is strictly less than the threshold are
/// dropped; a token exactly at the threshold passes. Order is preserved.
///
/// # Examples
///
/// ```
/// use quern::analysis::stream::IntoStream;
/// use quern::analysis::token_filter::{Filter, MinLengthFilter};
///
/// let filter = MinLengthFilter::new(4);
/// let tokens = vec!["one".to_string(), "three".to_string(), "four".to_string()];
///
/// let output: Vec<String> = filter.apply(tokens.into_stream()).unwrap().collect();
/// assert_eq!(output, vec!["three", "four"]);
/// ```
#[derive(Clone, Debug)]
pub struct MinLengthFilter {
    /// The minimum character count a token must have to pass.
    min_length: usize,
}

impl MinLengthFilter {
    /// Create a new filter allowing tokens of at least `min_length`
    /// characters.
    pub fn new(min_length: usize) -> Self {
        MinLengthFilter { min_length }
    }

    /// The minimum character count a token must have to pass.
    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl Filter for MinLengthFilter {
    type In = String;
    type Out = String;

    fn apply<'a>(&self, input: Stream<'a, String>) -> Result<Stream<'a, String>> {
        let min_length = self.min_length;
        Ok(Box::new(
            input.filter(move |token| token.chars().count() >= min_length),
        ))
    }

    fn name(&self) -> &'static str {
        "min_length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::stream::IntoStream;

    fn apply(filter: &MinLengthFilter, tokens: &[&str]) -> Vec<String> {
        let tokens: Vec<String> = tokens.iter().map(|s| s.to_string()).collect();
        filter.apply(tokens.into_stream()).unwrap().collect()
    }

    #[test]
    fn test_drops_short_tokens() {
        let filter = MinLengthFilter::new(4);
        let output = apply(&filter, &["one", "two", "three", "four"]);
        assert_eq!(output, vec!["three", "four"]);
    }

    #[test]
    fn test_boundary_length_passes() {
        let filter = MinLengthFilter::new(3);
        let output = apply(&filter, &["ab", "abc", "abcd"]);
        assert_eq!(output, vec!["abc", "abcd"]);
    }

    #[test]
    fn test_length_is_character_count() {
        // Multi-byte characters count once each.
        let filter = MinLengthFilter::new(4);
        let output = apply(&filter, &["café", "naïf", "œuf"]);
        assert_eq!(output, vec!["café", "naïf"]);
    }

    #[test]
    fn test_zero_threshold_passes_everything() {
        let filter = MinLengthFilter::new(0);
        let output = apply(&filter, &["", "a"]);
        assert_eq!(output, vec!["", "a"]);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(MinLengthFilter::new(1).name(), "min_length");
    }
}
