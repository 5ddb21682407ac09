use thiserror::Error;

/// Errors produced by the algorithms in this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The input graph or a parameter violated a precondition.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl GraphError {
    /// Creates an [`GraphError::InvalidInput`] with the given message.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        GraphError::InvalidInput(msg.into())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;
