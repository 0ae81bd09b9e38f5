//! Error types for predicate compilation.

use thiserror::Error;

/// Errors raised while validating or compiling a where-predicate.
///
/// These are always detected before any SQL is sent to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredicateError {
    /// The predicate does not have a well-formed shape.
    #[error("invalid predicate shape: {0}")]
    InvalidShape(String),
}

impl PredicateError {
    pub(crate) fn shape(message: impl Into<String>) -> Self {
        Self::InvalidShape(message.into())
    }
}

/// Result type alias for predicate operations.
pub type Result<T> = std::result::Result<T, PredicateError>;
