//! Convolution kernels

use crate::error::{FilterError, FilterResult};

/// A 2D convolution kernel with f32 weights
///
/// Weights are stored row-major. The kernel center is at
/// `(width / 2, height / 2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    width: u32,
    height: u32,
    values: Vec<f32>,
}

impl Kernel {
    /// Create a kernel from row-major weights.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if a dimension is 0 or
    /// `values.len() != width * height`.
    pub fn new(width: u32, height: u32, values: Vec<f32>) -> FilterResult<Self> {
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "kernel dimensions must be positive, got {width}x{height}"
            )));
        }
        let expected = (width as usize) * (height as usize);
        if values.len() != expected {
            return Err(FilterError::InvalidKernel(format!(
                "{width}x{height} kernel needs {expected} weights, got {}",
                values.len()
            )));
        }
        Ok(Kernel {
            width,
            height,
            values,
        })
    }

    /// Create a normalized box (averaging) kernel of `size x size`.
    pub fn box_kernel(size: u32) -> FilterResult<Self> {
        if size == 0 {
            return Err(FilterError::InvalidKernel(
                "box kernel size must be positive".to_string(),
            ));
        }
        let n = (size as usize) * (size as usize);
        Kernel::new(size, size, vec![1.0 / n as f32; n])
    }

    /// Get the kernel width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the kernel height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the center column.
    #[inline]
    pub fn center_x(&self) -> u32 {
        self.width / 2
    }

    /// Get the center row.
    #[inline]
    pub fn center_y(&self) -> u32 {
        self.height / 2
    }

    /// Get the weight at `(kx, ky)`, or `None` out of bounds.
    #[inline]
    pub fn get(&self, kx: u32, ky: u32) -> Option<f32> {
        if kx >= self.width || ky >= self.height {
            return None;
        }
        Some(self.values[(ky as usize) * (self.width as usize) + (kx as usize)])
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f32 {
        self.values.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_new() {
        let k = Kernel::new(3, 3, vec![0.0; 9]).unwrap();
        assert_eq!(k.width(), 3);
        assert_eq!(k.center_x(), 1);
        assert_eq!(k.center_y(), 1);
    }

    #[test]
    fn test_kernel_new_invalid() {
        assert!(matches!(
            Kernel::new(0, 3, vec![]),
            Err(FilterError::InvalidKernel(_))
        ));
        assert!(matches!(
            Kernel::new(3, 3, vec![0.0; 8]),
            Err(FilterError::InvalidKernel(_))
        ));
    }

    #[test]
    fn test_kernel_get() {
        let k = Kernel::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(k.get(0, 0), Some(1.0));
        assert_eq!(k.get(1, 1), Some(4.0));
        assert_eq!(k.get(2, 0), None);
    }

    #[test]
    fn test_box_kernel_normalized() {
        let k = Kernel::box_kernel(3).unwrap();
        assert!((k.sum() - 1.0).abs() < 1e-6);
        assert!(Kernel::box_kernel(0).is_err());
    }
}
