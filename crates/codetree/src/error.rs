//! Error types for codetree

use thiserror::Error;

/// Result type alias for codetree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for rendering and node construction
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying sink failed while a tree was being written
    #[error("Sink error: {0}")]
    Io(#[from] std::io::Error),

    /// Buffered output was not valid UTF-8
    #[error("Encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// A node was constructed from invalid parts
    #[error("Validation error: {0}")]
    Validation(String),
}

impl Error {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this error came from the sink
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
