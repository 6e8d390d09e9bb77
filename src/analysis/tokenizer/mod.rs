//! Tokenizer implementations for text analysis.

use crate::analysis::stream::{CharStream, TokenStream};
use crate::error::Result;

/// Trait for tokenizers that convert a character source into tokens.
///
/// The produced stream is lazy and single pass: the source is consumed as
/// the stream is pulled, and is not restartable once consumed.
pub trait Tokenizer {
    /// Tokenize the given character source into a stream of tokens.
    fn tokenize<'a>(&self, source: CharStream<'a>) -> Result<TokenStream<'a>>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Convenience extensions for [`Tokenizer`] implementations.
pub trait TokenizerExt: Tokenizer {
    /// Tokenize a string slice by wrapping it in a character stream.
    fn tokenize_str<'a>(&self, text: &'a str) -> Result<TokenStream<'a>> {
        self.tokenize(Box::new(text.chars()))
    }
}

impl<T: Tokenizer + ?Sized> TokenizerExt for T {}

/// Trait for the single capability a character tokenizer needs: deciding
/// whether a character belongs to a token.
///
/// Token characters are accumulated; non-token characters act as token
/// boundaries. Implemented for any `Fn(char) -> bool`, so a plain closure
/// can serve as a classifier.
pub trait CharClassifier {
    /// Check whether `c` is a token character.
    fn is_token_char(&self, c: char) -> bool;
}

impl<F> CharClassifier for F
where
    F: Fn(char) -> bool,
{
    fn is_token_char(&self, c: char) -> bool {
        self(c)
    }
}

// Individual tokenizer modules
pub mod basic;
pub mod character;

// Re-export all tokenizers for convenient access
pub use basic::{BasicClassifier, BasicTokenizer};
pub use character::CharacterTokenizer;
