//! Edge detection
//!
//! Sobel gradient filtering for grayscale images. The full edge map is
//! the equal-weight blend of the two absolute gradient images: each
//! gradient is computed in f32, its absolute value saturated to `u8`,
//! and the two saturated maps are then averaged with weights 0.5/0.5.
//!
//! Gradients use reflect-101 border handling (the sample at -1 mirrors
//! the sample at +1), so edge responses do not leak in from replicated
//! borders.

use crate::convolve::check_gray;
use crate::error::FilterResult;
use pixform_core::{PixelBuffer, PixelFormat};

/// Horizontal-gradient kernel: responds to vertical edges.
const SOBEL_X: [f32; 9] = [
    -1.0, 0.0, 1.0, //
    -2.0, 0.0, 2.0, //
    -1.0, 0.0, 1.0,
];

/// Vertical-gradient kernel: responds to horizontal edges.
const SOBEL_Y: [f32; 9] = [
    1.0, 2.0, 1.0, //
    0.0, 0.0, 0.0, //
    -1.0, -2.0, -1.0,
];

/// Edge detection orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOrientation {
    /// Detect horizontal edges only
    Horizontal,
    /// Detect vertical edges only
    Vertical,
    /// Detect all edges (blend of both gradients)
    All,
}

/// Compute a Sobel edge map for the requested orientation.
///
/// # Arguments
/// * `src` - Input single-channel grayscale image
/// * `orientation` - Which edges to detect
///
/// # Errors
///
/// Returns [`crate::FilterError::UnsupportedFormat`] for non-grayscale
/// input. No color-to-gray conversion is attempted.
pub fn sobel_edge(src: &PixelBuffer, orientation: EdgeOrientation) -> FilterResult<PixelBuffer> {
    check_gray(src)?;

    let result = match orientation {
        EdgeOrientation::Vertical => gradient_abs(src, &SOBEL_X),
        EdgeOrientation::Horizontal => gradient_abs(src, &SOBEL_Y),
        EdgeOrientation::All => {
            let gx = gradient_abs(src, &SOBEL_X);
            let gy = gradient_abs(src, &SOBEL_Y);
            gx.iter()
                .zip(&gy)
                .map(|(&a, &b)| (0.5 * a as f32 + 0.5 * b as f32).round() as u8)
                .collect()
        }
    };

    // Same shape as a validated source, so construction cannot fail
    Ok(PixelBuffer::from_vec(src.width(), src.height(), PixelFormat::Gray, result).unwrap())
}

/// Compute the full Sobel edge map (both orientations blended).
pub fn sobel_edge_map(src: &PixelBuffer) -> FilterResult<PixelBuffer> {
    sobel_edge(src, EdgeOrientation::All)
}

/// Absolute 3x3 gradient response, saturated to `u8` per pixel.
fn gradient_abs(src: &PixelBuffer, kernel: &[f32; 9]) -> Vec<u8> {
    let w = src.width();
    let h = src.height();
    let sdata = src.data();
    let mut out = Vec::with_capacity((w as usize) * (h as usize));

    for y in 0..h {
        for x in 0..w {
            let mut sum = 0.0f32;
            for ky in 0..3i64 {
                for kx in 0..3i64 {
                    let sx = reflect_101(x as i64 + kx - 1, w);
                    let sy = reflect_101(y as i64 + ky - 1, h);
                    let value = sdata[(sy as usize) * (w as usize) + (sx as usize)] as f32;
                    sum += value * kernel[(ky * 3 + kx) as usize];
                }
            }
            out.push(sum.abs().min(255.0) as u8);
        }
    }

    out
}

/// Map an index to `[0, len)` by mirroring without repeating the edge
/// sample: for len 5, indices -2.. map as 2 1 | 0 1 2 3 4 | 3 2.
fn reflect_101(i: i64, len: u32) -> u32 {
    if len == 1 {
        return 0;
    }
    let period = 2 * (len as i64) - 2;
    let r = i.rem_euclid(period);
    if r < len as i64 {
        r as u32
    } else {
        (period - r) as u32
    }
}
