//! pixform-filter - Convolution filters and edge detection for pixform
//!
//! This crate provides:
//!
//! - [`Kernel`] - owned 2D convolution kernels
//! - [`convolve_gray`] / [`box_blur`] - dense grayscale convolution
//! - [`sobel_edge`] / [`sobel_edge_map`] - Sobel edge maps
//!
//! All operations work on single-channel grayscale buffers; color input
//! is rejected rather than converted.

mod convolve;
mod edge;
mod error;
mod kernel;

pub use convolve::{box_blur, convolve_gray};
pub use edge::{EdgeOrientation, sobel_edge, sobel_edge_map};
pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;
