//! Pixel formats
//!
//! A [`PixelFormat`] fixes the number of interleaved 8-bit channels each
//! pixel carries. The conventional format for photographic input is
//! [`PixelFormat::Rgb`]; every operation in the workspace is written
//! against the channel count rather than a specific layout, so the same
//! code paths serve all four formats.

use crate::error::{Error, Result};

/// Fixed channel layout of a pixel buffer
///
/// The discriminant is the channel count, so `format as u32` and
/// [`PixelFormat::channels`] agree by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelFormat {
    /// Single-channel grayscale
    Gray = 1,
    /// Grayscale with alpha
    GrayAlpha = 2,
    /// Three-channel color
    Rgb = 3,
    /// Three-channel color with alpha
    Rgba = 4,
}

impl PixelFormat {
    /// Create a `PixelFormat` from a raw channel count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChannelCount`] if `channels` is not 1, 2,
    /// 3, or 4.
    pub fn from_channels(channels: u32) -> Result<Self> {
        match channels {
            1 => Ok(PixelFormat::Gray),
            2 => Ok(PixelFormat::GrayAlpha),
            3 => Ok(PixelFormat::Rgb),
            4 => Ok(PixelFormat::Rgba),
            _ => Err(Error::InvalidChannelCount(channels)),
        }
    }

    /// Get the number of channels per pixel.
    #[inline]
    pub fn channels(self) -> u32 {
        self as u32
    }

    /// Bytes occupied by one pixel.
    #[inline]
    pub fn bytes_per_pixel(self) -> usize {
        self as usize
    }

    /// Check whether the last channel is an alpha channel.
    pub fn has_alpha(self) -> bool {
        matches!(self, PixelFormat::GrayAlpha | PixelFormat::Rgba)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_channels() {
        assert_eq!(PixelFormat::from_channels(1).unwrap(), PixelFormat::Gray);
        assert_eq!(PixelFormat::from_channels(3).unwrap(), PixelFormat::Rgb);
        assert_eq!(PixelFormat::from_channels(4).unwrap(), PixelFormat::Rgba);
        assert!(PixelFormat::from_channels(0).is_err());
        assert!(PixelFormat::from_channels(5).is_err());
    }

    #[test]
    fn test_channel_counts() {
        assert_eq!(PixelFormat::Gray.channels(), 1);
        assert_eq!(PixelFormat::GrayAlpha.channels(), 2);
        assert_eq!(PixelFormat::Rgb.channels(), 3);
        assert_eq!(PixelFormat::Rgba.channels(), 4);
        assert_eq!(PixelFormat::Rgb.bytes_per_pixel(), 3);
    }

    #[test]
    fn test_has_alpha() {
        assert!(!PixelFormat::Gray.has_alpha());
        assert!(PixelFormat::GrayAlpha.has_alpha());
        assert!(!PixelFormat::Rgb.has_alpha());
        assert!(PixelFormat::Rgba.has_alpha());
    }
}
