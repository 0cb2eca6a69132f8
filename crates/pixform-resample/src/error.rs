//! Error types for pixform-resample

use thiserror::Error;

/// Errors that can occur during resampling
#[derive(Debug, Error)]
pub enum ResampleError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixform_core::Error),

    /// Source or target dimensions are unusable
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Source buffer's declared dimensions do not match its storage
    #[error("corrupt buffer: expected {expected} bytes for declared dimensions, found {actual}")]
    CorruptBuffer { expected: usize, actual: usize },
}

/// Result type for resample operations
pub type ResampleResult<T> = Result<T, ResampleError>;
