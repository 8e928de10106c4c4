//! Background photo loading.
//!
//! Decoding is exposed as futures so callers can overlap it with other
//! work; the session blocks on them via `pollster` when it loads
//! synchronously. Either way the result is a plain decoded pixmap, never
//! partial state: the background slot is only touched on success.

use std::fmt;
use std::path::Path;

use crate::codec::{self, DecodeError};
use crate::pixmap::Pixmap;

/// Error returned by the background decode futures.
#[derive(Debug)]
pub enum BackgroundError {
    Io(std::io::Error),
    /// The file content is not any known image format.
    NotAnImage,
    Decode(String),
}

impl fmt::Display for BackgroundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackgroundError::Io(e) => write!(f, "could not read file: {e}"),
            BackgroundError::NotAnImage => write!(f, "not an image"),
            BackgroundError::Decode(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for BackgroundError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BackgroundError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DecodeError> for BackgroundError {
    fn from(e: DecodeError) -> Self {
        match e {
            DecodeError::NotAnImage => BackgroundError::NotAnImage,
            DecodeError::Malformed(msg) => BackgroundError::Decode(msg),
        }
    }
}

/// Decodes in-memory bytes into a background pixmap.
pub async fn decode_bytes(bytes: &[u8]) -> Result<Pixmap, BackgroundError> {
    Ok(codec::decode_image(bytes)?)
}

/// Reads and decodes an image file.
pub async fn decode_file(path: &Path) -> Result<Pixmap, BackgroundError> {
    let bytes = std::fs::read(path).map_err(BackgroundError::Io)?;
    decode_bytes(&bytes).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    #[test]
    fn text_bytes_are_not_an_image() {
        let result = pollster::block_on(decode_bytes(b"just some text"));
        assert!(matches!(result, Err(BackgroundError::NotAnImage)));
    }

    #[test]
    fn png_bytes_decode() {
        let mut pm = Pixmap::new(2, 3);
        pm.fill(Color::rgb(9, 9, 9));
        let bytes = codec::encode_png(&pm).unwrap();
        let decoded = pollster::block_on(decode_bytes(&bytes)).unwrap();
        assert_eq!(decoded.width(), 2);
        assert_eq!(decoded.height(), 3);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = pollster::block_on(decode_file(Path::new("/no/such/file.png")));
        assert!(matches!(result, Err(BackgroundError::Io(_))));
    }
}
