//! Error types for reclimit-core.
//!
//! Exhausting a budget is not an error: a limited call degrades to its
//! default value. Errors only arise when a bound itself cannot be built.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LimitError {
    /// The input could not be turned into an integer bound.
    #[error("Invalid bound '{input}': {reason}")]
    InvalidBound { input: String, reason: String },
}
