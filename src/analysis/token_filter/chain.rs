//! Sequential composition of two filters.

use crate::analysis::stream::Stream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter adapter that chains a source filter into a sink filter.
///
/// Consuming one output element of the chain pulls exactly the elements
/// from the source and sink needed to produce it; the intermediate stream
/// is never materialized. Composition is associative:
/// `a.chain(b).chain(c)` and `a.chain(b.chain(c))` produce identical
/// streams over any input.
///
/// # Examples
///
/// ```
/// use quern::analysis::stream::IntoStream;
/// use quern::analysis::token_filter::{Filter, FilterExt, LowercaseFilter, MinLengthFilter};
///
/// let filter = LowercaseFilter::new().chain(MinLengthFilter::new(4));
/// let tokens = vec!["The".to_string(), "QUICK".to_string(), "fox".to_string()];
///
/// let output: Vec<String> = filter.apply(tokens.into_stream()).unwrap().collect();
/// assert_eq!(output, vec!["quick"]);
/// ```
#[derive(Clone, Debug)]
pub struct FilterChain<A, B> {
    source: A,
    sink: B,
}

impl<A, B> FilterChain<A, B>
where
    A: Filter,
    B: Filter<In = A::Out>,
{
    /// Chain `source` into `sink`.
    pub fn new(source: A, sink: B) -> Self {
        FilterChain { source, sink }
    }
}

impl<A, B> Filter for FilterChain<A, B>
where
    A: Filter,
    B: Filter<In = A::Out>,
{
    type In = A::In;
    type Out = B::Out;

    fn apply<'a>(&self, input: Stream<'a, Self::In>) -> Result<Stream<'a, Self::Out>> {
        self.sink.apply(self.source.apply(input)?)
    }

    fn name(&self) -> &'static str {
        "chain"
    }
}
