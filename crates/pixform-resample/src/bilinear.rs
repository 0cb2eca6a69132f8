//! Bilinear resampling
//!
//! Resamples a pixel buffer to a new size by inverse coordinate mapping:
//! each destination pixel is mapped back to a continuous position in the
//! source grid and blended from its four surrounding samples, weighted by
//! proximity along each axis.
//!
//! # Scale semantics
//!
//! [`resample`] derives the target dimensions by truncating
//! `source / scale` per axis, then recomputes the effective mapping ratio
//! from the truncated dimensions. When truncation loses part of the
//! requested scale (e.g. width 10 at scale 3), the effective ratio
//! (10/3) is what drives the coordinate mapping, not the caller's factor.
//! Callers that want exact control over the output size use
//! [`resample_to_size`] directly.

use crate::error::{ResampleError, ResampleResult};
use pixform_core::PixelBuffer;

/// Resample an image by the given scale factors.
///
/// A factor greater than 1 shrinks the image along that axis; a factor
/// between 0 and 1 enlarges it. Target dimensions are
/// `trunc(source / scale)` per axis.
///
/// # Arguments
/// * `src` - Input image
/// * `scale_x` - Horizontal scale divisor (e.g. 2.0 = half width)
/// * `scale_y` - Vertical scale divisor
///
/// # Errors
///
/// Returns [`ResampleError::InvalidDimensions`] if either factor is
/// non-positive or non-finite, or if truncation collapses a target
/// dimension to zero (e.g. a 3x3 source at scale 4). Returns
/// [`ResampleError::CorruptBuffer`] if the source's declared dimensions
/// do not match its backing storage.
///
/// # Examples
///
/// ```
/// use pixform_core::{PixelBuffer, PixelFormat};
/// use pixform_resample::resample;
///
/// let src = PixelBuffer::new(64, 48, PixelFormat::Rgb).unwrap();
/// let dst = resample(&src, 2.0, 2.0).unwrap();
/// assert_eq!((dst.width(), dst.height()), (32, 24));
/// ```
pub fn resample(src: &PixelBuffer, scale_x: f32, scale_y: f32) -> ResampleResult<PixelBuffer> {
    check_source(src)?;

    if !scale_x.is_finite() || !scale_y.is_finite() || scale_x <= 0.0 || scale_y <= 0.0 {
        return Err(ResampleError::InvalidDimensions(format!(
            "scale factors must be positive and finite, got ({scale_x}, {scale_y})"
        )));
    }

    let new_width = (src.width() as f32 / scale_x) as u32;
    let new_height = (src.height() as f32 / scale_y) as u32;
    if new_width == 0 || new_height == 0 {
        return Err(ResampleError::InvalidDimensions(format!(
            "{}x{} source collapses to {new_width}x{new_height} at scale ({scale_x}, {scale_y})",
            src.width(),
            src.height()
        )));
    }

    Ok(resample_unchecked(src, new_width, new_height))
}

/// Resample an image to explicit target dimensions.
///
/// # Arguments
/// * `src` - Input image
/// * `new_width` - Target width (must be >= 1)
/// * `new_height` - Target height (must be >= 1)
///
/// # Errors
///
/// Returns [`ResampleError::InvalidDimensions`] if either target
/// dimension is zero, and [`ResampleError::CorruptBuffer`] for a source
/// whose declared dimensions do not match its backing storage.
pub fn resample_to_size(
    src: &PixelBuffer,
    new_width: u32,
    new_height: u32,
) -> ResampleResult<PixelBuffer> {
    check_source(src)?;

    if new_width == 0 || new_height == 0 {
        return Err(ResampleError::InvalidDimensions(format!(
            "target dimensions must be at least 1x1, got {new_width}x{new_height}"
        )));
    }

    Ok(resample_unchecked(src, new_width, new_height))
}

/// Verify the source buffer invariant before any pixel work.
fn check_source(src: &PixelBuffer) -> ResampleResult<()> {
    match src.validate() {
        Ok(()) => Ok(()),
        Err(pixform_core::Error::CorruptBuffer { expected, actual }) => {
            Err(ResampleError::CorruptBuffer { expected, actual })
        }
        Err(e) => Err(ResampleError::Core(e)),
    }
}

/// Inner loop over destination pixels.
///
/// Preconditions (established by the public entry points): the source is
/// valid and non-empty, and `new_width >= 1`, `new_height >= 1`.
///
/// The mapping ratio `src / new` keeps every sample position in
/// `[0, src)`, so the floor coordinates `x1`/`y1` are always in bounds
/// and only `x2`/`y2` need clamping at the far edge. Each output channel
/// is a convex combination of the four neighbor values (weights are
/// non-negative and sum to 1), so the blend stays within the neighbors'
/// min/max and the truncation to `u8` cannot overflow.
fn resample_unchecked(src: &PixelBuffer, new_width: u32, new_height: u32) -> PixelBuffer {
    let width = src.width();
    let height = src.height();
    let bpp = src.format().bytes_per_pixel();

    let x_ratio = width as f32 / new_width as f32;
    let y_ratio = height as f32 / new_height as f32;

    // Freshly created, so sole ownership is guaranteed
    let mut out = PixelBuffer::new(new_width, new_height, src.format())
        .expect("target dimensions already validated")
        .try_into_mut()
        .unwrap();

    let sdata = src.data();
    let ddata = out.data_mut();
    let src_stride = (width as usize) * bpp;
    let dst_stride = (new_width as usize) * bpp;

    for y in 0..new_height {
        let src_y = y as f32 * y_ratio;
        let y1 = src_y as u32;
        let y2 = (y1 + 1).min(height - 1);
        let dy = src_y - y1 as f32;

        for x in 0..new_width {
            let src_x = x as f32 * x_ratio;
            let x1 = src_x as u32;
            let x2 = (x1 + 1).min(width - 1);
            let dx = src_x - x1 as f32;

            let w11 = (1.0 - dx) * (1.0 - dy);
            let w21 = dx * (1.0 - dy);
            let w12 = (1.0 - dx) * dy;
            let w22 = dx * dy;

            let q11 = (y1 as usize) * src_stride + (x1 as usize) * bpp;
            let q21 = (y1 as usize) * src_stride + (x2 as usize) * bpp;
            let q12 = (y2 as usize) * src_stride + (x1 as usize) * bpp;
            let q22 = (y2 as usize) * src_stride + (x2 as usize) * bpp;
            let d = (y as usize) * dst_stride + (x as usize) * bpp;

            for c in 0..bpp {
                let value = w11 * sdata[q11 + c] as f32
                    + w21 * sdata[q21 + c] as f32
                    + w12 * sdata[q12 + c] as f32
                    + w22 * sdata[q22 + c] as f32;
                // Truncate, not round
                ddata[d + c] = value as u8;
            }
        }
    }

    out.into()
}
