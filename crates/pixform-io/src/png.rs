//! PNG format support
//!
//! Decodes and encodes 8-bit PNG images via the `png` crate. Indexed
//! and sub-8-bit images are expanded by the decoder's default
//! transformations; 16-bit images are rejected.

use crate::error::{IoError, IoResult};
use pixform_core::{PixelBuffer, PixelFormat};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image from a reader.
///
/// # Errors
///
/// [`IoError::DecodeError`] for malformed PNG data and
/// [`IoError::UnsupportedFormat`] for bit depths other than 8.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<PixelBuffer> {
    let decoder = png::Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;

    let (color, bit_depth) = reader.output_color_type();
    if bit_depth != png::BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "PNG bit depth {bit_depth:?} (only 8-bit is supported)"
        )));
    }
    let format = match color {
        png::ColorType::Grayscale => PixelFormat::Gray,
        png::ColorType::GrayscaleAlpha => PixelFormat::GrayAlpha,
        png::ColorType::Rgb => PixelFormat::Rgb,
        png::ColorType::Rgba => PixelFormat::Rgba,
        png::ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "indexed PNG without palette expansion".to_string(),
            ));
        }
    };

    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };
    let mut data =
        vec![0u8; (width as usize) * (height as usize) * format.bytes_per_pixel()];
    reader
        .next_frame(&mut data)
        .map_err(|e| IoError::DecodeError(e.to_string()))?;

    Ok(PixelBuffer::from_vec(width, height, format, data)?)
}

/// Write a buffer as an 8-bit PNG to a writer.
pub fn write_png<W: Write>(buf: &PixelBuffer, writer: W) -> IoResult<()> {
    let color = match buf.format() {
        PixelFormat::Gray => png::ColorType::Grayscale,
        PixelFormat::GrayAlpha => png::ColorType::GrayscaleAlpha,
        PixelFormat::Rgb => png::ColorType::Rgb,
        PixelFormat::Rgba => png::ColorType::Rgba,
    };

    let mut encoder = png::Encoder::new(writer, buf.width(), buf.height());
    encoder.set_color(color);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    writer
        .write_image_data(buf.data())
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn roundtrip(src: &PixelBuffer) -> PixelBuffer {
        let mut bytes = Vec::new();
        write_png(src, &mut bytes).unwrap();
        read_png(Cursor::new(bytes)).unwrap()
    }

    #[test]
    fn test_roundtrip_gray() {
        let src = PixelBuffer::from_vec(
            3,
            2,
            PixelFormat::Gray,
            vec![0, 64, 128, 192, 255, 32],
        )
        .unwrap();
        let back = roundtrip(&src);
        assert!(back.sizes_equal(&src));
        assert_eq!(back.data(), src.data());
    }

    #[test]
    fn test_roundtrip_rgba() {
        let data: Vec<u8> = (0..2 * 2 * 4).map(|i| (i * 17) as u8).collect();
        let src = PixelBuffer::from_vec(2, 2, PixelFormat::Rgba, data).unwrap();
        let back = roundtrip(&src);
        assert_eq!(back.format(), PixelFormat::Rgba);
        assert_eq!(back.data(), src.data());
    }

    #[test]
    fn test_read_rejects_garbage() {
        let bytes = b"\x89PNG\r\n\x1a\nnot actually a png";
        assert!(matches!(
            read_png(Cursor::new(&bytes[..])),
            Err(IoError::DecodeError(_))
        ));
    }
}
