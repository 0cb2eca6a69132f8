//! PNM (Portable Any Map) format support
//!
//! Reads and writes PGM (P5 binary) and PPM (P6 binary) with
//! `maxval <= 255`. ASCII variants (P1/P2/P3), PBM (P4), and PAM (P7)
//! are rejected as unsupported. Header comments (`#` to end of line)
//! are honored.

use crate::error::{IoError, IoResult};
use pixform_core::{PixelBuffer, PixelFormat};
use std::io::{BufRead, Write};

/// Read a binary PNM image (P5/P6) from a reader.
///
/// # Arguments
/// * `reader` - A buffered reader positioned at the PNM magic
///
/// # Returns
/// A [`PixelFormat::Gray`] buffer for PGM, [`PixelFormat::Rgb`] for PPM.
///
/// # Errors
///
/// [`IoError::UnsupportedFormat`] for PNM variants other than binary
/// P5/P6 or `maxval > 255`; [`IoError::InvalidData`] for malformed
/// headers; [`IoError::Io`] for truncated raster data.
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<PixelBuffer> {
    let magic = read_token(&mut reader)?;
    let format = match magic.as_str() {
        "P5" => PixelFormat::Gray,
        "P6" => PixelFormat::Rgb,
        "P1" | "P2" | "P3" | "P4" | "P7" => {
            return Err(IoError::UnsupportedFormat(format!(
                "PNM type {magic} (only binary P5/P6 are supported)"
            )));
        }
        other => {
            return Err(IoError::InvalidData(format!(
                "not a PNM header: '{other}'"
            )));
        }
    };

    let width = read_header_value(&mut reader)?;
    let height = read_header_value(&mut reader)?;
    let maxval = read_header_value(&mut reader)?;
    if maxval == 0 || maxval > 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "PNM maxval {maxval} (only 1..=255 is supported)"
        )));
    }

    // The single whitespace byte terminating the maxval token has been
    // consumed; the raster begins immediately.
    let len = (width as usize) * (height as usize) * format.bytes_per_pixel();
    let mut data = vec![0u8; len];
    reader.read_exact(&mut data)?;

    Ok(PixelBuffer::from_vec(width, height, format, data)?)
}

/// Write a buffer as binary PNM to a writer.
///
/// Chooses P5 ([`PixelFormat::Gray`]) or P6 ([`PixelFormat::Rgb`]) based
/// on the buffer format; alpha-carrying formats have no binary PNM
/// representation and are rejected.
pub fn write_pnm<W: Write>(buf: &PixelBuffer, mut writer: W) -> IoResult<()> {
    let magic = match buf.format() {
        PixelFormat::Gray => "P5",
        PixelFormat::Rgb => "P6",
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "{} channels cannot be written as binary PNM",
                other.channels()
            )));
        }
    };

    write!(writer, "{magic}\n{} {}\n255\n", buf.width(), buf.height())?;
    writer.write_all(buf.data())?;
    Ok(())
}

/// Read one whitespace-delimited header token, skipping comments.
fn read_token<R: BufRead>(reader: &mut R) -> IoResult<String> {
    let mut token = String::new();
    loop {
        let mut byte = [0u8; 1];
        reader.read_exact(&mut byte)?;
        match byte[0] {
            b'#' if token.is_empty() => skip_comment(reader)?,
            b if b.is_ascii_whitespace() => {
                if !token.is_empty() {
                    break;
                }
            }
            b => token.push(b as char),
        }
    }
    Ok(token)
}

/// Consume the rest of a comment line.
fn skip_comment<R: BufRead>(reader: &mut R) -> IoResult<()> {
    let mut byte = [0u8; 1];
    loop {
        reader.read_exact(&mut byte)?;
        if byte[0] == b'\n' {
            return Ok(());
        }
    }
}

/// Read and parse one numeric header field.
fn read_header_value<R: BufRead>(reader: &mut R) -> IoResult<u32> {
    let token = read_token(reader)?;
    token
        .parse::<u32>()
        .map_err(|_| IoError::InvalidData(format!("invalid PNM header value '{token}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_pgm() {
        let bytes = b"P5\n3 2\n255\n\x01\x02\x03\x04\x05\x06";
        let buf = read_pnm(Cursor::new(&bytes[..])).unwrap();
        assert_eq!((buf.width(), buf.height()), (3, 2));
        assert_eq!(buf.format(), PixelFormat::Gray);
        assert_eq!(buf.data(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_read_ppm_with_comments() {
        let bytes = b"P6\n# a comment\n2 1\n# another\n255\n\x0a\x0b\x0c\x0d\x0e\x0f";
        let buf = read_pnm(Cursor::new(&bytes[..])).unwrap();
        assert_eq!((buf.width(), buf.height()), (2, 1));
        assert_eq!(buf.format(), PixelFormat::Rgb);
        assert_eq!(buf.pixel(1, 0), Some(&[0x0d, 0x0e, 0x0f][..]));
    }

    #[test]
    fn test_read_rejects_ascii_variants() {
        let bytes = b"P2\n2 2\n255\n1 2 3 4\n";
        assert!(matches!(
            read_pnm(Cursor::new(&bytes[..])),
            Err(IoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_read_rejects_wide_maxval() {
        let bytes = b"P5\n1 1\n65535\n\x00\x00";
        assert!(matches!(
            read_pnm(Cursor::new(&bytes[..])),
            Err(IoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_read_rejects_garbage() {
        let bytes = b"Px\n1 1\n255\n\x00";
        assert!(matches!(
            read_pnm(Cursor::new(&bytes[..])),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_read_truncated_raster() {
        let bytes = b"P5\n4 4\n255\n\x01\x02";
        assert!(matches!(
            read_pnm(Cursor::new(&bytes[..])),
            Err(IoError::Io(_))
        ));
    }

    #[test]
    fn test_roundtrip_gray() {
        let src =
            PixelBuffer::from_vec(2, 2, PixelFormat::Gray, vec![9, 8, 7, 6]).unwrap();
        let mut bytes = Vec::new();
        write_pnm(&src, &mut bytes).unwrap();
        assert!(bytes.starts_with(b"P5\n2 2\n255\n"));

        let back = read_pnm(Cursor::new(bytes)).unwrap();
        assert!(back.sizes_equal(&src));
        assert_eq!(back.data(), src.data());
    }

    #[test]
    fn test_roundtrip_rgb() {
        let data: Vec<u8> = (0..2 * 3 * 3).collect();
        let src = PixelBuffer::from_vec(2, 3, PixelFormat::Rgb, data).unwrap();
        let mut bytes = Vec::new();
        write_pnm(&src, &mut bytes).unwrap();

        let back = read_pnm(Cursor::new(bytes)).unwrap();
        assert_eq!(back.data(), src.data());
    }

    #[test]
    fn test_write_rejects_alpha() {
        let src = PixelBuffer::new(2, 2, PixelFormat::Rgba).unwrap();
        let mut bytes = Vec::new();
        assert!(matches!(
            write_pnm(&src, &mut bytes),
            Err(IoError::UnsupportedFormat(_))
        ));
    }
}
