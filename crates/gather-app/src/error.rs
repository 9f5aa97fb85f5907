//! App-level errors for the local stores.

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Errors from the profile and group stores.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Rejected input, e.g. an empty group name.
    #[error("{0}")]
    InvalidInput(String),

    /// I/O error reading or writing a store file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Store file could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
