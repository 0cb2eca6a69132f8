//! Convolution operations
//!
//! Implements dense image convolution with arbitrary kernels.

use crate::error::{FilterError, FilterResult};
use crate::kernel::Kernel;
use pixform_core::{PixelBuffer, PixelFormat};

/// Convolve a grayscale image with a kernel
///
/// Uses replicate (clamp) border handling: pixels outside the image
/// boundary are treated as having the same value as the nearest edge
/// pixel. The result is rounded and clamped to `u8`.
pub fn convolve_gray(src: &PixelBuffer, kernel: &Kernel) -> FilterResult<PixelBuffer> {
    check_gray(src)?;

    let w = src.width();
    let h = src.height();
    let kw = kernel.width();
    let kh = kernel.height();
    let kcx = kernel.center_x() as i64;
    let kcy = kernel.center_y() as i64;

    // Freshly created, so sole ownership is guaranteed
    let mut out = PixelBuffer::new(w, h, PixelFormat::Gray)
        .expect("source dimensions are valid")
        .try_into_mut()
        .unwrap();
    let sdata = src.data();
    let ddata = out.data_mut();

    for y in 0..h {
        for x in 0..w {
            let mut sum = 0.0f32;

            for ky in 0..kh {
                for kx in 0..kw {
                    let sx = x as i64 + (kx as i64 - kcx);
                    let sy = y as i64 + (ky as i64 - kcy);

                    // Clamp to image boundaries (replicate border)
                    let sx = sx.clamp(0, w as i64 - 1) as usize;
                    let sy = sy.clamp(0, h as i64 - 1) as usize;

                    let value = sdata[sy * (w as usize) + sx] as f32;
                    let k = kernel.get(kx, ky).unwrap_or(0.0);
                    sum += value * k;
                }
            }

            ddata[(y as usize) * (w as usize) + (x as usize)] =
                sum.round().clamp(0.0, 255.0) as u8;
        }
    }

    Ok(out.into())
}

/// Apply box (average) blur to a grayscale image
pub fn box_blur(src: &PixelBuffer, radius: u32) -> FilterResult<PixelBuffer> {
    let size = 2 * radius + 1;
    let kernel = Kernel::box_kernel(size)?;
    convolve_gray(src, &kernel)
}

pub(crate) fn check_gray(src: &PixelBuffer) -> FilterResult<()> {
    if src.format() != PixelFormat::Gray {
        return Err(FilterError::UnsupportedFormat {
            expected: "single-channel grayscale",
            actual: src.channels(),
        });
    }
    Ok(())
}
