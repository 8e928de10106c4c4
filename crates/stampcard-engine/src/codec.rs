//! Raster byte-stream codecs.
//!
//! One lossless output format (PNG, what the preview and the download both
//! use) and a permissive decode path for user-supplied background photos.

use std::fmt;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::pixmap::Pixmap;

/// Error returned by [`encode_png`].
#[derive(Debug, Clone)]
pub struct EncodeError(pub String);

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "png encode error: {}", self.0)
    }
}

impl std::error::Error for EncodeError {}

/// Error returned by [`decode_image`].
#[derive(Debug, Clone)]
pub enum DecodeError {
    /// The bytes do not start with any known image signature.
    NotAnImage,
    /// The bytes look like an image but failed to decode.
    Malformed(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::NotAnImage => write!(f, "not an image"),
            DecodeError::Malformed(msg) => write!(f, "image decode error: {msg}"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Encodes a pixmap as PNG bytes.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(
            pixmap.data(),
            pixmap.width(),
            pixmap.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| EncodeError(e.to_string()))?;
    Ok(out)
}

/// Decodes image bytes into a straight-alpha `RGBA8` pixmap.
///
/// The content type is sniffed from the byte signature before any decoding
/// happens, so a file that merely claims to be an image (by extension or
/// otherwise) is rejected up front as [`DecodeError::NotAnImage`].
pub fn decode_image(bytes: &[u8]) -> Result<Pixmap, DecodeError> {
    let format = image::guess_format(bytes).map_err(|_| DecodeError::NotAnImage)?;
    let decoded = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| DecodeError::Malformed(e.to_string()))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Pixmap::from_rgba8(width, height, rgba.into_raw())
        .ok_or_else(|| DecodeError::Malformed("decoded buffer size mismatch".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    #[test]
    fn encode_produces_png_signature() {
        let mut pm = Pixmap::new(3, 2);
        pm.fill(Color::rgb(1, 2, 3));
        let bytes = encode_png(&pm).unwrap();
        assert_eq!(&bytes[..8], &PNG_MAGIC);
    }

    #[test]
    fn decode_rejects_non_image_bytes() {
        assert!(matches!(decode_image(b"hello world"), Err(DecodeError::NotAnImage)));
        assert!(matches!(decode_image(b""), Err(DecodeError::NotAnImage)));
    }

    #[test]
    fn decode_rejects_truncated_image() {
        let mut pm = Pixmap::new(4, 4);
        pm.fill(Color::WHITE);
        let bytes = encode_png(&pm).unwrap();
        // Valid signature, broken body.
        assert!(matches!(decode_image(&bytes[..12]), Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn encode_decode_preserves_pixels() {
        let mut pm = Pixmap::new(2, 2);
        pm.fill(Color::rgb(200, 100, 50));
        pm.set_pixel(1, 1, [5, 6, 7, 255]);
        let back = decode_image(&encode_png(&pm).unwrap()).unwrap();
        assert_eq!(back.width(), 2);
        assert_eq!(back.height(), 2);
        assert_eq!(back.pixel(0, 0).unwrap(), [200, 100, 50, 255]);
        assert_eq!(back.pixel(1, 1).unwrap(), [5, 6, 7, 255]);
    }
}
