//! pixform-test - Regression test support for pixform
//!
//! Provides a small regression harness plus deterministic synthetic
//! images, so tests do not depend on on-disk fixtures.
//!
//! # Usage
//!
//! ```
//! use pixform_test::{RegParams, gradient};
//! use pixform_core::PixelFormat;
//!
//! let mut rp = RegParams::new("example");
//! let img = gradient(8, 8, PixelFormat::Gray);
//! rp.compare_values(8.0, img.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: set to "display" to run without failing comparisons

mod params;

pub use params::{RegParams, RegTestMode};

use pixform_core::{PixelBuffer, PixelFormat};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Build a diagonal gradient image.
///
/// Channel `c` of pixel `(x, y)` is `(x + y + c) mod 256`, which gives
/// every channel a distinct smooth ramp.
///
/// # Panics
///
/// Panics if `width` or `height` is 0.
pub fn gradient(width: u32, height: u32, format: PixelFormat) -> PixelBuffer {
    let bpp = format.bytes_per_pixel();
    let mut data = Vec::with_capacity((width as usize) * (height as usize) * bpp);
    for y in 0..height {
        for x in 0..width {
            for c in 0..bpp {
                data.push(((x as usize + y as usize + c) % 256) as u8);
            }
        }
    }
    PixelBuffer::from_vec(width, height, format, data).expect("gradient dimensions are valid")
}

/// Build a single-channel checkerboard image.
///
/// Tiles of `tile x tile` pixels alternate between `lo` and `hi`.
///
/// # Panics
///
/// Panics if `width`, `height`, or `tile` is 0.
pub fn checkerboard(width: u32, height: u32, tile: u32, lo: u8, hi: u8) -> PixelBuffer {
    assert!(tile > 0, "tile size must be positive");
    let mut data = Vec::with_capacity((width as usize) * (height as usize));
    for y in 0..height {
        for x in 0..width {
            let on = ((x / tile) + (y / tile)) % 2 == 0;
            data.push(if on { hi } else { lo });
        }
    }
    PixelBuffer::from_vec(width, height, PixelFormat::Gray, data)
        .expect("checkerboard dimensions are valid")
}

/// Build an image of uniformly random channel values.
///
/// Seeded, so the same `seed` always reproduces the same image.
///
/// # Panics
///
/// Panics if `width` or `height` is 0.
pub fn random_buffer(width: u32, height: u32, format: PixelFormat, seed: u64) -> PixelBuffer {
    let mut rng = StdRng::seed_from_u64(seed);
    let len = (width as usize) * (height as usize) * format.bytes_per_pixel();
    let data: Vec<u8> = (0..len).map(|_| rng.random()).collect();
    PixelBuffer::from_vec(width, height, format, data).expect("random dimensions are valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_values() {
        let img = gradient(4, 4, PixelFormat::Rgb);
        assert_eq!(img.pixel(0, 0), Some(&[0, 1, 2][..]));
        assert_eq!(img.pixel(2, 1), Some(&[3, 4, 5][..]));
    }

    #[test]
    fn test_checkerboard_tiles() {
        let img = checkerboard(4, 4, 2, 10, 250);
        assert_eq!(img.channel(0, 0, 0), Some(250));
        assert_eq!(img.channel(1, 1, 0), Some(250));
        assert_eq!(img.channel(2, 0, 0), Some(10));
        assert_eq!(img.channel(2, 2, 0), Some(250));
    }

    #[test]
    fn test_random_buffer_deterministic() {
        let a = random_buffer(8, 8, PixelFormat::Rgba, 99);
        let b = random_buffer(8, 8, PixelFormat::Rgba, 99);
        let c = random_buffer(8, 8, PixelFormat::Rgba, 100);
        assert_eq!(a.data(), b.data());
        assert_ne!(a.data(), c.data());
    }
}
