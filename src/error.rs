//! Error types for the Floodgate library.

use thiserror::Error;

/// Main error type for flood control operations.
#[derive(Error, Debug)]
pub enum FloodError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transient failures from a history storage backend.
    ///
    /// Retryable. `check` surfaces this to the caller instead of folding it
    /// into an allow or deny decision. The in-memory limiter never produces
    /// it; the variant exists for storage-backed implementations.
    #[error("Storage error: {0}")]
    Storage(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for flood control operations.
pub type Result<T> = std::result::Result<T, FloodError>;
