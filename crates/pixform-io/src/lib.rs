//! pixform-io - Image I/O for pixform
//!
//! Reads and writes [`PixelBuffer`]s:
//!
//! - Binary PNM (PGM/PPM) via the `pnm` feature (default)
//! - PNG via the `png-format` feature (default)
//!
//! [`read_image`] identifies the format from the file's magic bytes;
//! [`write_image`] takes the format explicitly.

mod error;
mod format;
#[cfg(feature = "pnm")]
pub mod pnm;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::ImageFileFormat;

use pixform_core::PixelBuffer;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Read an image from a file path, detecting the format from its magic
/// bytes.
///
/// # Errors
///
/// [`IoError::UnsupportedFormat`] if the magic bytes match no enabled
/// format, plus any codec error for the detected format.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let magic = reader.fill_buf()?;
    let format = ImageFileFormat::detect(magic).ok_or_else(|| {
        IoError::UnsupportedFormat("unrecognized magic bytes".to_string())
    })?;

    match format {
        ImageFileFormat::Pnm => read_pnm_dispatch(reader),
        ImageFileFormat::Png => read_png_dispatch(reader),
    }
}

/// Write an image to a file path in the requested format.
pub fn write_image<P: AsRef<Path>>(
    buf: &PixelBuffer,
    path: P,
    format: ImageFileFormat,
) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    match format {
        ImageFileFormat::Pnm => write_pnm_dispatch(buf, &mut writer)?,
        ImageFileFormat::Png => write_png_dispatch(buf, &mut writer)?,
    }

    writer.flush()?;
    Ok(())
}

#[cfg(feature = "pnm")]
fn read_pnm_dispatch<R: BufRead>(reader: R) -> IoResult<PixelBuffer> {
    pnm::read_pnm(reader)
}

#[cfg(not(feature = "pnm"))]
fn read_pnm_dispatch<R: BufRead>(_reader: R) -> IoResult<PixelBuffer> {
    Err(IoError::UnsupportedFormat(
        "PNM support not enabled (enable the pnm feature)".to_string(),
    ))
}

#[cfg(feature = "pnm")]
fn write_pnm_dispatch<W: Write>(buf: &PixelBuffer, writer: W) -> IoResult<()> {
    pnm::write_pnm(buf, writer)
}

#[cfg(not(feature = "pnm"))]
fn write_pnm_dispatch<W: Write>(_buf: &PixelBuffer, _writer: W) -> IoResult<()> {
    Err(IoError::UnsupportedFormat(
        "PNM support not enabled (enable the pnm feature)".to_string(),
    ))
}

#[cfg(feature = "png-format")]
fn read_png_dispatch<R: BufRead + std::io::Seek>(reader: R) -> IoResult<PixelBuffer> {
    png::read_png(reader)
}

#[cfg(not(feature = "png-format"))]
fn read_png_dispatch<R: BufRead + std::io::Seek>(_reader: R) -> IoResult<PixelBuffer> {
    Err(IoError::UnsupportedFormat(
        "PNG support not enabled (enable the png-format feature)".to_string(),
    ))
}

#[cfg(feature = "png-format")]
fn write_png_dispatch<W: Write>(buf: &PixelBuffer, writer: W) -> IoResult<()> {
    png::write_png(buf, writer)
}

#[cfg(not(feature = "png-format"))]
fn write_png_dispatch<W: Write>(_buf: &PixelBuffer, _writer: W) -> IoResult<()> {
    Err(IoError::UnsupportedFormat(
        "PNG support not enabled (enable the png-format feature)".to_string(),
    ))
}

#[cfg(all(test, feature = "pnm"))]
mod tests {
    use super::*;
    use pixform_core::PixelFormat;

    fn temp_path(name: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("pixform-io-{}-{}", std::process::id(), name));
        path
    }

    #[test]
    fn test_file_roundtrip_pnm() {
        let src =
            PixelBuffer::from_vec(2, 2, PixelFormat::Gray, vec![1, 2, 3, 4]).unwrap();
        let path = temp_path("roundtrip.pnm");

        write_image(&src, &path, ImageFileFormat::Pnm).unwrap();
        let back = read_image(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(back.sizes_equal(&src));
        assert_eq!(back.data(), src.data());
    }

    #[test]
    fn test_read_unrecognized_format() {
        let path = temp_path("garbage.bin");
        std::fs::write(&path, b"GIF89a.....").unwrap();
        let result = read_image(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(IoError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_image(temp_path("does-not-exist.pnm"));
        assert!(matches!(result, Err(IoError::Io(_))));
    }
}
