//! Error types for PackSort

use thiserror::Error;

/// Main error type for PackSort operations
#[derive(Debug, Error)]
pub enum PackSortError {
    /// A dimension or the mass was non-finite or not strictly positive
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for PackSort operations
pub type Result<T> = std::result::Result<T, PackSortError>;
