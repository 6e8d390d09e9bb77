//! Basic word tokenizer implementation.

use crate::analysis::stream::{CharStream, TokenStream};
use crate::analysis::tokenizer::{CharClassifier, CharacterTokenizer, Tokenizer};
use crate::error::Result;

/// Classifier treating a character as part of a token iff it is neither
/// whitespace nor punctuation.
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicClassifier;

impl CharClassifier for BasicClassifier {
    fn is_token_char(&self, c: char) -> bool {
        !c.is_whitespace() && !c.is_ascii_punctuation()
    }
}

/// A tokenizer that splits tokens on whitespace boundaries or punctuation
/// marks.
///
/// # Examples
///
/// ```
/// use quern::analysis::tokenizer::{BasicTokenizer, TokenizerExt};
///
/// let tokenizer = BasicTokenizer::new();
/// let tokens: Vec<String> = tokenizer.tokenize_str("Hello, world!").unwrap().collect();
///
/// assert_eq!(tokens, vec!["Hello", "world"]);
/// ```
#[derive(Clone, Debug)]
pub struct BasicTokenizer {
    inner: CharacterTokenizer<BasicClassifier>,
}

impl BasicTokenizer {
    /// Create a new basic tokenizer with the default read-buffer capacity.
    pub fn new() -> Self {
        BasicTokenizer {
            inner: CharacterTokenizer::new(BasicClassifier),
        }
    }

    /// Create a new basic tokenizer with the given read-buffer capacity.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error if `buffer_size` is zero.
    pub fn with_buffer_size(buffer_size: usize) -> Result<Self> {
        Ok(BasicTokenizer {
            inner: CharacterTokenizer::with_buffer_size(BasicClassifier, buffer_size)?,
        })
    }
}

impl Default for BasicTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for BasicTokenizer {
    fn tokenize<'a>(&self, source: CharStream<'a>) -> Result<TokenStream<'a>> {
        self.inner.tokenize(source)
    }

    fn name(&self) -> &'static str {
        "basic"
    }
}
