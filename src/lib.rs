//! # Quern
//!
//! A small, composable text analysis pipeline for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Lazy, pull-based stream processing end to end
//! - Pluggable character classification for tokenization
//! - Chainable stream filters (lowercase, minimum length, stop words)
//! - Sliding-window n-gram expansion
//! - Frequency counting with top-K selection
//!
//! ## Pipeline
//!
//! ```text
//! character source -> Tokenizer -> Filter chain -> [NGramFilter] -> WordCounter
//! ```
//!
//! Every stage pulls from its predecessor on demand; nothing is buffered
//! beyond what a stage's own algorithm requires.

pub mod analysis;
pub mod cli;
pub mod error;
pub mod util;

pub mod prelude {
    //! Commonly used types, re-exported for convenience.

    pub use crate::analysis::counter::{WordCount, WordCounter};
    pub use crate::analysis::ngram::NGram;
    pub use crate::analysis::stream::{CharStream, IntoStream, Stream, TokenStream};
    pub use crate::analysis::token_filter::{
        Filter, FilterChain, FilterExt, LowercaseFilter, MinLengthFilter, NGramFilter,
        StopWordFilter,
    };
    pub use crate::analysis::tokenizer::{
        BasicTokenizer, CharClassifier, CharacterTokenizer, Tokenizer, TokenizerExt,
    };
    pub use crate::error::{QuernError, Result};
    pub use crate::util::sliding_window::SlidingWindow;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
