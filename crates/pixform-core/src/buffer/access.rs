//! Pixel access functions
//!
//! Checked accessors return `Option` / `Result`; the unchecked variants
//! panic on out-of-bounds coordinates and exist for inner loops that have
//! already validated their ranges.

use super::{PixelBuffer, PixelBufferMut};
use crate::error::{Error, Result};

impl PixelBuffer {
    /// Get the channel slice of the pixel at `(x, y)`.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.pixel_unchecked(x, y))
    }

    /// Get the channel slice of the pixel at `(x, y)` without bounds
    /// checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn pixel_unchecked(&self, x: u32, y: u32) -> &[u8] {
        let start = self.index(x, y, 0);
        &self.data()[start..start + self.format().bytes_per_pixel()]
    }

    /// Get a single channel value at `(x, y)`.
    ///
    /// Returns `None` if the coordinates or channel are out of bounds.
    pub fn channel(&self, x: u32, y: u32, c: u32) -> Option<u8> {
        if c >= self.channels() {
            return None;
        }
        self.pixel(x, y).map(|px| px[c as usize])
    }
}

impl PixelBufferMut {
    /// Get the channel slice of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let start = self.index(x, y, 0);
        Some(&self.data()[start..start + self.format().bytes_per_pixel()])
    }

    /// Set the pixel at `(x, y)` from a channel slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates are outside the
    /// buffer, and [`Error::InvalidParameter`] if `px` does not have one
    /// value per channel.
    pub fn set_pixel(&mut self, x: u32, y: u32, px: &[u8]) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        if px.len() != self.format().bytes_per_pixel() {
            return Err(Error::InvalidParameter(format!(
                "expected {} channel values, got {}",
                self.channels(),
                px.len()
            )));
        }
        self.set_pixel_unchecked(x, y, px);
        Ok(())
    }

    /// Set the pixel at `(x, y)` without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds or `px` has the wrong
    /// length.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, px: &[u8]) {
        let start = self.index(x, y, 0);
        let bpp = self.format().bytes_per_pixel();
        self.data_mut()[start..start + bpp].copy_from_slice(px);
    }
}
