use thiserror::Error;

/// Unified error type for release-checkout operations
#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Submodule error: {0}")]
    Submodule(String),

    #[error("Reference error: {0}")]
    Ref(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-checkout
pub type Result<T> = std::result::Result<T, CheckoutError>;

impl CheckoutError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        CheckoutError::Config(msg.into())
    }

    /// Create a submodule error with context
    pub fn submodule(msg: impl Into<String>) -> Self {
        CheckoutError::Submodule(msg.into())
    }

    /// Create a reference error with context
    pub fn reference(msg: impl Into<String>) -> Self {
        CheckoutError::Ref(msg.into())
    }
}
