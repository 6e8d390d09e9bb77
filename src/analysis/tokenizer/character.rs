//! Character-boundary tokenizer implementation.
//!
//! [`CharacterTokenizer`] splits a character source into tokens at the
//! boundaries chosen by a [`CharClassifier`]: a maximal run of token
//! characters becomes one token, every non-token character is a separator.
//! The source is read in fixed-size chunks into a buffer owned by the
//! tokenizer, and tokens are produced lazily as the output stream is
//! pulled.
//!
//! # Examples
//!
//! ```
//! use quern::analysis::tokenizer::{CharacterTokenizer, TokenizerExt};
//!
//! // A classifier can be a plain closure.
//! let tokenizer = CharacterTokenizer::new(|c: char| c.is_alphanumeric());
//! let tokens: Vec<String> = tokenizer.tokenize_str("one-two three").unwrap().collect();
//!
//! assert_eq!(tokens, vec!["one", "two", "three"]);
//! ```

use crate::analysis::stream::{CharStream, TokenStream};
use crate::analysis::tokenizer::{CharClassifier, Tokenizer};
use crate::error::{QuernError, Result};

/// Default capacity of the read buffer, in characters.
pub const DEFAULT_BUFFER_SIZE: usize = 1024;

/// A tokenizer that splits a character source at classifier-chosen
/// boundaries.
///
/// The tokenizer pulls the source in `buffer_size`-character chunks; each
/// chunk is scanned once, appending token characters to an accumulation
/// buffer and flushing the accumulation as a token at every non-token
/// character. Any non-empty accumulation left at end of input is flushed as
/// the final token.
#[derive(Clone, Debug)]
pub struct CharacterTokenizer<C> {
    /// Decides which characters belong to tokens.
    classifier: C,

    /// Capacity of the chunked read buffer.
    buffer_size: usize,
}

impl<C: CharClassifier> CharacterTokenizer<C> {
    /// Create a new tokenizer with the default read-buffer capacity.
    pub fn new(classifier: C) -> Self {
        CharacterTokenizer {
            classifier,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    /// Create a new tokenizer with the given read-buffer capacity.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error if `buffer_size` is zero.
    pub fn with_buffer_size(classifier: C, buffer_size: usize) -> Result<Self> {
        if buffer_size == 0 {
            return Err(QuernError::out_of_range(
                "tokenizer buffer size must be greater than zero",
            ));
        }

        Ok(CharacterTokenizer {
            classifier,
            buffer_size,
        })
    }

    /// The capacity of the read buffer, in characters.
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }
}

impl<C> Tokenizer for CharacterTokenizer<C>
where
    C: CharClassifier + Clone + 'static,
{
    fn tokenize<'a>(&self, source: CharStream<'a>) -> Result<TokenStream<'a>> {
        Ok(Box::new(Tokens {
            source,
            classifier: self.classifier.clone(),
            buffer_size: self.buffer_size,
            chunk: Vec::with_capacity(self.buffer_size),
            pos: 0,
            accum: String::new(),
            done: false,
        }))
    }

    fn name(&self) -> &'static str {
        "character"
    }
}

/// Lazy token stream over a chunked character source.
struct Tokens<'a, C> {
    source: CharStream<'a>,
    classifier: C,
    buffer_size: usize,
    /// The chunked read buffer, refilled from the source batch by batch.
    chunk: Vec<char>,
    /// Scan position within `chunk`.
    pos: usize,
    /// Accumulation buffer for the token currently being built.
    accum: String,
    done: bool,
}

impl<C: CharClassifier> Iterator for Tokens<'_, C> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }

        loop {
            while self.pos < self.chunk.len() {
                let c = self.chunk[self.pos];
                self.pos += 1;

                if self.classifier.is_token_char(c) {
                    self.accum.push(c);
                } else if !self.accum.is_empty() {
                    // Boundary found - flush the accumulated token.
                    return Some(std::mem::take(&mut self.accum));
                }
            }

            // Chunk exhausted - pull the next batch from the source.
            self.chunk.clear();
            self.chunk.extend(self.source.by_ref().take(self.buffer_size));
            self.pos = 0;

            if self.chunk.is_empty() {
                // End of input - flush any remaining accumulation.
                self.done = true;
                if self.accum.is_empty() {
                    return None;
                }
                return Some(std::mem::take(&mut self.accum));
            }
        }
    }
}
