//! pixform-core - Basic data structures for image processing
//!
//! This crate provides the fundamental data structures used throughout
//! the pixform image processing workspace:
//!
//! - [`PixelBuffer`] / [`PixelBufferMut`] - The main image container
//!   (immutable / mutable)
//! - [`PixelFormat`] - Fixed channel layouts (gray, gray+alpha, RGB, RGBA)
//! - [`Error`] / [`Result`] - The shared error type
//!
//! Pixel data is interleaved 8-bit, row-major, with no row padding; the
//! byte offset of channel `c` of pixel `(x, y)` is
//! `(y * width + x) * channels + c`.

pub mod buffer;
pub mod error;
pub mod format;

pub use buffer::{PixelBuffer, PixelBufferMut};
pub use error::{Error, Result};
pub use format::PixelFormat;
