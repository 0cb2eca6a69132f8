//! Pixform - Pixel buffer resampling and filtering for Rust
//!
//! # Overview
//!
//! Pixform provides a small set of image processing operations over an
//! explicit interleaved pixel buffer:
//!
//! - Bilinear resampling (downscale and upscale)
//! - Convolution filters and Sobel edge maps
//! - Image I/O (binary PNM; PNG behind a feature)
//!
//! # Example
//!
//! ```
//! use pixform::{PixelBuffer, PixelFormat};
//! use pixform::resample::resample;
//!
//! // Halve a 640x480 RGB image
//! let src = PixelBuffer::new(640, 480, PixelFormat::Rgb).unwrap();
//! let dst = resample(&src, 2.0, 2.0).unwrap();
//! assert_eq!((dst.width(), dst.height()), (320, 240));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pixform_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixform_filter as filter;
pub use pixform_io as io;
pub use pixform_resample as resample;
