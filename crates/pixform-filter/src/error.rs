//! Error types for pixform-filter

use thiserror::Error;

/// Errors that can occur during filtering
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixform_core::Error),

    /// Unsupported pixel format for this operation
    #[error("unsupported format: expected {expected}, got {actual} channels")]
    UnsupportedFormat {
        expected: &'static str,
        actual: u32,
    },

    /// Malformed kernel definition
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
