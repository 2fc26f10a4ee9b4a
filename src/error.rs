// file: src/error.rs
// version: 1.0.0
// guid: a85dea5c-92e6-4158-b69f-65c8b90ecc58

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, WeaveError>;

/// Error types for the weave tool
#[derive(Error, Debug)]
pub enum WeaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Certification failed: {0}")]
    Certification(String),

    #[error("Merge error: {0}")]
    Merge(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl WeaveError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a new certification error
    pub fn certification(msg: impl Into<String>) -> Self {
        Self::Certification(msg.into())
    }

    /// Create a new merge error
    pub fn merge(msg: impl Into<String>) -> Self {
        Self::Merge(msg.into())
    }

    /// Create a new store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// Create a new other error
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
