//! Stream filter implementations for token transformation.
//!
//! A [`Filter`] maps an input stream to an output stream lazily, preserving
//! or altering cardinality and element order per its own policy. Filters
//! compose sequentially through [`FilterChain`] (or the
//! [`FilterExt::chain`] combinator) without materializing intermediate
//! streams.

use crate::analysis::stream::Stream;
use crate::error::Result;

/// Trait for filters that transform streams.
///
/// `apply` wraps the upstream iterator and returns a lazy downstream one:
/// consuming one output element drives exactly the upstream pulls needed to
/// produce it. Implementations capture whatever configuration they need, so
/// the returned stream lives as long as its input.
pub trait Filter {
    /// The element type this filter consumes.
    type In;

    /// The element type this filter produces.
    type Out;

    /// Apply this filter to a stream.
    fn apply<'a>(&self, input: Stream<'a, Self::In>) -> Result<Stream<'a, Self::Out>>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

impl<F: Filter + ?Sized> Filter for Box<F> {
    type In = F::In;
    type Out = F::Out;

    fn apply<'a>(&self, input: Stream<'a, Self::In>) -> Result<Stream<'a, Self::Out>> {
        (**self).apply(input)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Combinator extensions for [`Filter`] implementations.
pub trait FilterExt: Filter + Sized {
    /// Chain two filters together into a new filter that feeds this
    /// filter's output into `sink`.
    fn chain<B>(self, sink: B) -> FilterChain<Self, B>
    where
        B: Filter<In = Self::Out>,
    {
        FilterChain::new(self, sink)
    }
}

impl<F: Filter> FilterExt for F {}

// Individual filter modules
pub mod chain;
pub mod lowercase;
pub mod min_length;
pub mod ngram;
pub mod stop;

// Re-export all filters for convenient access
pub use chain::FilterChain;
pub use lowercase::LowercaseFilter;
pub use min_length::MinLengthFilter;
pub use ngram::NGramFilter;
pub use stop::StopWordFilter;
