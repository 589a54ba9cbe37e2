//! Error types for projection construction.

use thiserror::Error;

/// Result type for projection operations.
pub type ProjectionResult<T> = Result<T, ProjectionError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// No declared constructor accepts the argument types.
    #[error("no constructor found for {target} with parameters: {signature}")]
    NoMatchingConstructor { target: String, signature: String },

    /// No constructor declares exactly this parameter list.
    #[error("{target} declares no constructor {signature}")]
    NoSuchConstructor { target: String, signature: String },

    /// A raw argument array does not have the shape the constructor needs.
    #[error("argument count mismatch: expected {expected}, got {actual}")]
    ArityMismatch { expected: usize, actual: usize },

    /// The constructor itself rejected the arguments.
    #[error("failed to construct {target}: {message}")]
    Invocation { target: String, message: String },
}

impl ProjectionError {
    pub fn invocation(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invocation {
            target: target.into(),
            message: message.into(),
        }
    }
}
