//! Error types for the Quern library.
//!
//! All failures surface through the [`QuernError`] enum. Contract violations
//! are raised synchronously at the point of violation; recovery policy is
//! left to the caller.
//!
//! # Examples
//!
//! ```
//! use quern::error::{QuernError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(QuernError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Quern operations.
///
/// This enum represents all possible errors that can occur in the Quern
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum QuernError {
    /// I/O errors (reading input or stop-word files, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A required input is missing or unusable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A numeric parameter is outside its valid domain
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// An operation the receiver does not support
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with QuernError.
pub type Result<T> = std::result::Result<T, QuernError>;

impl QuernError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        QuernError::InvalidArgument(msg.into())
    }

    /// Create a new out of range error.
    pub fn out_of_range<S: Into<String>>(msg: S) -> Self {
        QuernError::OutOfRange(msg.into())
    }

    /// Create a new unsupported operation error.
    pub fn unsupported_operation<S: Into<String>>(msg: S) -> Self {
        QuernError::UnsupportedOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        QuernError::Other(msg.into())
    }
}
