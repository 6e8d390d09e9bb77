//! Lowercase filter implementation.

use crate::analysis::stream::Stream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts every token to lowercase.
///
/// One output per input, order preserved; case folding is Unicode-aware.
///
/// # Examples
///
/// ```
/// use quern::analysis::stream::IntoStream;
/// use quern::analysis::token_filter::{Filter, LowercaseFilter};
///
/// let filter = LowercaseFilter::new();
/// let tokens = vec!["Hello".to_string(), "WORLD".to_string()];
///
/// let output: Vec<String> = filter.apply(tokens.into_stream()).unwrap().collect();
/// assert_eq!(output, vec!["hello", "world"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    type In = String;
    type Out = String;

    fn apply<'a>(&self, input: Stream<'a, String>) -> Result<Stream<'a, String>> {
        Ok(Box::new(input.map(|token| token.to_lowercase())))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
