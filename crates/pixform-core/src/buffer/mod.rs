//! The main image container
//!
//! [`PixelBuffer`] is the fundamental image type in pixform. It stores
//! interleaved 8-bit channel data in a single contiguous row-major
//! allocation, addressed by the index function
//! `(y * width + x) * channels + c`.
//!
//! # Pixel layout
//!
//! - Channel data is stored as bytes, one byte per channel
//! - Rows are contiguous with no padding; the row stride is
//!   `width * channels` bytes
//! - Channels are interleaved per pixel (e.g. `R G B R G B ...`)
//!
//! # Ownership model
//!
//! `PixelBuffer` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to [`PixelBufferMut`] via
//! [`PixelBuffer::try_into_mut`] or [`PixelBuffer::to_mut`], then convert
//! back with `Into<PixelBuffer>`.

mod access;

use crate::error::{Error, Result};
use crate::format::PixelFormat;
use std::sync::Arc;

/// Internal buffer data
#[derive(Debug)]
struct BufferData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Channel layout
    format: PixelFormat,
    /// Interleaved channel data, row-major
    data: Vec<u8>,
}

impl BufferData {
    /// Bytes required by the declared dimensions.
    fn expected_len(width: u32, height: u32, format: PixelFormat) -> usize {
        (width as usize) * (height as usize) * format.bytes_per_pixel()
    }
}

/// Rectangular grid of multi-channel 8-bit pixels
///
/// `PixelBuffer` is immutable and reference counted via `Arc`, so
/// `clone()` is cheap and shares the underlying data.
///
/// # Examples
///
/// ```
/// use pixform_core::{PixelBuffer, PixelFormat};
///
/// let buf = PixelBuffer::new(640, 480, PixelFormat::Rgb).unwrap();
/// assert_eq!(buf.width(), 640);
/// assert_eq!(buf.height(), 480);
/// assert_eq!(buf.data().len(), 640 * 480 * 3);
/// ```
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    inner: Arc<BufferData>,
}

impl PixelBuffer {
    /// Create a new buffer with the given dimensions and format.
    ///
    /// The channel data is initialized to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if width or height is 0.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let data = vec![0u8; BufferData::expected_len(width, height, format)];
        Ok(PixelBuffer {
            inner: Arc::new(BufferData {
                width,
                height,
                format,
                data,
            }),
        })
    }

    /// Create a buffer from existing interleaved channel data.
    ///
    /// The data must be row-major with no padding, exactly
    /// `width * height * channels` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if width or height is 0, and
    /// [`Error::CorruptBuffer`] if `data.len()` does not match the
    /// declared dimensions.
    pub fn from_vec(width: u32, height: u32, format: PixelFormat, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let expected = BufferData::expected_len(width, height, format);
        if data.len() != expected {
            return Err(Error::CorruptBuffer {
                expected,
                actual: data.len(),
            });
        }

        Ok(PixelBuffer {
            inner: Arc::new(BufferData {
                width,
                height,
                format,
                data,
            }),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the channel layout.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.inner.format
    }

    /// Get the number of channels per pixel.
    #[inline]
    pub fn channels(&self) -> u32 {
        self.inner.format.channels()
    }

    /// Get raw access to the interleaved channel data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Bytes per row.
    #[inline]
    pub fn row_stride(&self) -> usize {
        (self.inner.width as usize) * self.inner.format.bytes_per_pixel()
    }

    /// Byte offset of channel `c` of the pixel at `(x, y)`.
    ///
    /// This is the index function the whole workspace addresses pixel
    /// data with: `(y * width + x) * channels + c`. Coordinates are not
    /// bounds checked here; callers that need checking use the pixel
    /// accessors.
    #[inline]
    pub fn index(&self, x: u32, y: u32, c: u32) -> usize {
        ((y as usize) * (self.inner.width as usize) + (x as usize))
            * self.inner.format.bytes_per_pixel()
            + (c as usize)
    }

    /// Get the data for a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.row_stride();
        let start = (y as usize) * stride;
        &self.inner.data[start..start + stride]
    }

    /// Re-check the construction invariant against the backing storage.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CorruptBuffer`] if the declared dimensions no
    /// longer match the stored byte count.
    pub fn validate(&self) -> Result<()> {
        let expected =
            BufferData::expected_len(self.inner.width, self.inner.height, self.inner.format);
        if self.inner.data.len() != expected {
            return Err(Error::CorruptBuffer {
                expected,
                actual: self.inner.data.len(),
            });
        }
        Ok(())
    }

    /// Check if two buffers have the same width, height, and format.
    pub fn sizes_equal(&self, other: &PixelBuffer) -> bool {
        self.inner.width == other.inner.width
            && self.inner.height == other.inner.height
            && self.inner.format == other.inner.format
    }

    /// Get the number of strong references to this buffer.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Create a new zeroed buffer with the same dimensions and format.
    pub fn create_template(&self) -> Self {
        let data =
            vec![0u8; BufferData::expected_len(self.inner.width, self.inner.height, self.inner.format)];
        PixelBuffer {
            inner: Arc::new(BufferData {
                width: self.inner.width,
                height: self.inner.height,
                format: self.inner.format,
                data,
            }),
        }
    }

    /// Create a deep copy of this buffer.
    ///
    /// Unlike `clone()` which shares data via `Arc`, this creates a
    /// completely independent copy.
    pub fn deep_clone(&self) -> Self {
        PixelBuffer {
            inner: Arc::new(BufferData {
                width: self.inner.width,
                height: self.inner.height,
                format: self.inner.format,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Try to get mutable access to the pixel data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<PixelBufferMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixelBufferMut { inner: data }),
            Err(arc) => Err(PixelBuffer { inner: arc }),
        }
    }

    /// Create a mutable copy of this buffer.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> PixelBufferMut {
        PixelBufferMut {
            inner: BufferData {
                width: self.inner.width,
                height: self.inner.height,
                format: self.inner.format,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable pixel buffer
///
/// Allows modification of pixel data. Convert back to an immutable
/// [`PixelBuffer`] using `Into<PixelBuffer>`. The type system enforces
/// exclusive access: a `PixelBufferMut` is never shared.
#[derive(Debug)]
pub struct PixelBufferMut {
    inner: BufferData,
}

impl PixelBufferMut {
    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the channel layout.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.inner.format
    }

    /// Get the number of channels per pixel.
    #[inline]
    pub fn channels(&self) -> u32 {
        self.inner.format.channels()
    }

    /// Get raw access to the interleaved channel data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable access to the interleaved channel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Bytes per row.
    #[inline]
    pub fn row_stride(&self) -> usize {
        (self.inner.width as usize) * self.inner.format.bytes_per_pixel()
    }

    /// Byte offset of channel `c` of the pixel at `(x, y)`.
    #[inline]
    pub fn index(&self, x: u32, y: u32, c: u32) -> usize {
        ((y as usize) * (self.inner.width as usize) + (x as usize))
            * self.inner.format.bytes_per_pixel()
            + (c as usize)
    }

    /// Get mutable access to a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let stride = self.row_stride();
        let start = (y as usize) * stride;
        &mut self.inner.data[start..start + stride]
    }

    /// Set every channel of every pixel to `value`.
    pub fn fill(&mut self, value: u8) {
        self.inner.data.fill(value);
    }
}

impl From<PixelBufferMut> for PixelBuffer {
    fn from(buf_mut: PixelBufferMut) -> Self {
        PixelBuffer {
            inner: Arc::new(buf_mut.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_creation() {
        let buf = PixelBuffer::new(100, 200, PixelFormat::Rgb).unwrap();
        assert_eq!(buf.width(), 100);
        assert_eq!(buf.height(), 200);
        assert_eq!(buf.format(), PixelFormat::Rgb);
        assert_eq!(buf.channels(), 3);
        assert_eq!(buf.data().len(), 100 * 200 * 3);
        assert!(buf.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_buffer_creation_invalid() {
        assert!(matches!(
            PixelBuffer::new(0, 100, PixelFormat::Gray),
            Err(Error::InvalidDimensions { .. })
        ));
        assert!(matches!(
            PixelBuffer::new(100, 0, PixelFormat::Gray),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_from_vec() {
        let data = vec![7u8; 4 * 3 * 2];
        let buf = PixelBuffer::from_vec(4, 3, PixelFormat::GrayAlpha, data).unwrap();
        assert_eq!(buf.width(), 4);
        assert_eq!(buf.height(), 3);
        assert_eq!(buf.pixel(0, 0), Some(&[7u8, 7][..]));
    }

    #[test]
    fn test_from_vec_corrupt() {
        // 10 bytes cannot back a 2x2 RGB image (needs 12)
        let err = PixelBuffer::from_vec(2, 2, PixelFormat::Rgb, vec![0u8; 10]).unwrap_err();
        assert!(matches!(
            err,
            Error::CorruptBuffer {
                expected: 12,
                actual: 10
            }
        ));
    }

    #[test]
    fn test_index_function() {
        let buf = PixelBuffer::new(5, 4, PixelFormat::Rgb).unwrap();
        assert_eq!(buf.index(0, 0, 0), 0);
        assert_eq!(buf.index(1, 0, 0), 3);
        assert_eq!(buf.index(0, 1, 0), 15);
        assert_eq!(buf.index(2, 3, 1), (3 * 5 + 2) * 3 + 1);
    }

    #[test]
    fn test_row_access() {
        let mut data = vec![0u8; 3 * 2];
        data[3..].copy_from_slice(&[1, 2, 3]);
        let buf = PixelBuffer::from_vec(3, 2, PixelFormat::Gray, data).unwrap();
        assert_eq!(buf.row(0), &[0, 0, 0]);
        assert_eq!(buf.row(1), &[1, 2, 3]);
        assert_eq!(buf.row_stride(), 3);
    }

    #[test]
    fn test_clone_shares_data() {
        let buf1 = PixelBuffer::new(10, 10, PixelFormat::Gray).unwrap();
        let buf2 = buf1.clone();
        assert_eq!(buf1.ref_count(), 2);
        assert_eq!(buf1.data().as_ptr(), buf2.data().as_ptr());
    }

    #[test]
    fn test_deep_clone() {
        let buf1 = PixelBuffer::new(10, 10, PixelFormat::Gray).unwrap();
        let buf2 = buf1.deep_clone();
        assert_eq!(buf1.ref_count(), 1);
        assert_eq!(buf2.ref_count(), 1);
        assert_ne!(buf1.data().as_ptr(), buf2.data().as_ptr());
    }

    #[test]
    fn test_try_into_mut() {
        let buf = PixelBuffer::new(4, 4, PixelFormat::Gray).unwrap();
        let mut buf_mut = buf.try_into_mut().unwrap();
        buf_mut.fill(42);
        let buf: PixelBuffer = buf_mut.into();
        assert!(buf.data().iter().all(|&b| b == 42));
    }

    #[test]
    fn test_try_into_mut_fails_when_shared() {
        let buf1 = PixelBuffer::new(4, 4, PixelFormat::Gray).unwrap();
        let _buf2 = buf1.clone();
        assert!(buf1.try_into_mut().is_err());
    }

    #[test]
    fn test_create_template() {
        let data: Vec<u8> = (0..12).collect();
        let src = PixelBuffer::from_vec(2, 2, PixelFormat::Rgb, data).unwrap();
        let tmpl = src.create_template();
        assert!(tmpl.sizes_equal(&src));
        assert!(tmpl.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_sizes_equal() {
        let a = PixelBuffer::new(10, 20, PixelFormat::Rgb).unwrap();
        let b = PixelBuffer::new(10, 20, PixelFormat::Rgb).unwrap();
        let c = PixelBuffer::new(10, 20, PixelFormat::Gray).unwrap();
        let d = PixelBuffer::new(20, 10, PixelFormat::Rgb).unwrap();
        assert!(a.sizes_equal(&b));
        assert!(!a.sizes_equal(&c));
        assert!(!a.sizes_equal(&d));
    }

    #[test]
    fn test_validate() {
        let buf = PixelBuffer::new(6, 6, PixelFormat::Rgba).unwrap();
        assert!(buf.validate().is_ok());
    }
}
