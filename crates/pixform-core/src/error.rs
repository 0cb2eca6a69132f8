//! Error types for pixform-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Pixform core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions (zero width or height)
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Declared dimensions disagree with the backing storage size
    #[error("corrupt buffer: expected {expected} bytes for declared dimensions, found {actual}")]
    CorruptBuffer { expected: usize, actual: usize },

    /// Channel count outside the supported 1..=4 range
    #[error("invalid channel count: {0}")]
    InvalidChannelCount(u32),

    /// Pixel coordinates outside the buffer
    #[error("pixel out of bounds: ({x}, {y}) in {width}x{height}")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Incompatible buffer shapes for a two-image operation
    #[error("incompatible buffer sizes: {0}x{1} vs {2}x{3}")]
    IncompatibleSizes(u32, u32, u32, u32),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for pixform-core operations
pub type Result<T> = std::result::Result<T, Error>;
