//! Stream types for the analysis pipeline.
//!
//! Pipeline stages exchange boxed iterators. A stream is consumed exactly
//! once; re-traversal requires building a fresh pipeline over a fresh
//! source.

/// A lazy stream of pipeline elements.
pub type Stream<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

/// A stream of string tokens produced by a tokenizer.
pub type TokenStream<'a> = Stream<'a, String>;

/// A sequential, forward-only character source.
pub type CharStream<'a> = Box<dyn Iterator<Item = char> + 'a>;

/// Trait for types that can be turned into a stream.
pub trait IntoStream<T> {
    /// Convert this value into a stream.
    fn into_stream(self) -> Stream<'static, T>;
}

impl<T: 'static> IntoStream<T> for Vec<T> {
    fn into_stream(self) -> Stream<'static, T> {
        Box::new(self.into_iter())
    }
}
