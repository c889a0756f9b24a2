//! Error types for tfbridge

/// Error type for framework operations
#[derive(Debug, thiserror::Error)]
pub enum TfError {
    #[error("Resource type not found: {0}")]
    ResourceNotFound(String),

    #[error("Data source type not found: {0}")]
    DataSourceNotFound(String),

    #[error("Provider not configured")]
    ProviderNotConfigured,

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Type mismatch for attribute '{attribute}': expected {expected}, got {actual}")]
    TypeMismatch {
        attribute: String,
        expected: String,
        actual: String,
    },

    #[error("{0}")]
    Custom(String),
}

/// Result type alias for framework operations
pub type Result<T> = std::result::Result<T, TfError>;

impl From<String> for TfError {
    fn from(s: String) -> Self {
        TfError::Custom(s)
    }
}

impl From<&str> for TfError {
    fn from(s: &str) -> Self {
        TfError::Custom(s.to_string())
    }
}
