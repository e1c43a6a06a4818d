//! Design image intake.
//!
//! The presentation layer reads a picked file and hands the core an opaque
//! image payload: a `data:` URI embedding the file bytes. This module
//! performs the validation the upload form promises (size ceiling,
//! PNG/JPEG/GIF only) and builds that URI. The payload is stored verbatim
//! from then on; nothing in the core ever decodes it again.

use std::path::Path;

use base64::prelude::*;
use image::ImageFormat;
use thiserror::Error;

use redline_core::constants::MAX_UPLOAD_BYTES;

/// Errors from validating or encoding an uploaded image.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The file could not be read.
    #[error("Failed to read image file: {0}")]
    Io(#[from] std::io::Error),

    /// The payload exceeds the upload ceiling.
    #[error("Image too large: {size} bytes (limit {limit})")]
    FileTooLarge { size: usize, limit: usize },

    /// The bytes are not a recognized PNG, JPEG, or GIF image.
    #[error("Unsupported image format (PNG, JPEG and GIF are accepted)")]
    UnsupportedFormat,
}

/// Validates raw image bytes and encodes them as a data URI.
pub fn encode_image_payload(bytes: &[u8]) -> Result<String, UploadError> {
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(UploadError::FileTooLarge {
            size: bytes.len(),
            limit: MAX_UPLOAD_BYTES,
        });
    }

    let mime = match image::guess_format(bytes) {
        Ok(ImageFormat::Png) => "image/png",
        Ok(ImageFormat::Jpeg) => "image/jpeg",
        Ok(ImageFormat::Gif) => "image/gif",
        _ => return Err(UploadError::UnsupportedFormat),
    };

    Ok(format!("data:{};base64,{}", mime, BASE64_STANDARD.encode(bytes)))
}

/// Reads an image file and encodes it as a data URI payload.
pub fn read_image_payload(path: impl AsRef<Path>) -> Result<String, UploadError> {
    let bytes = std::fs::read(path.as_ref())?;
    encode_image_payload(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    const GIF_SIGNATURE: &[u8] = b"GIF89a";

    #[test]
    fn test_png_bytes_become_png_data_uri() {
        let payload = encode_image_payload(PNG_SIGNATURE).unwrap();
        assert!(payload.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_gif_bytes_become_gif_data_uri() {
        let payload = encode_image_payload(GIF_SIGNATURE).unwrap();
        assert!(payload.starts_with("data:image/gif;base64,"));
    }

    #[test]
    fn test_unrecognized_bytes_are_rejected() {
        let err = encode_image_payload(b"plain text, not an image").unwrap_err();
        assert!(matches!(err, UploadError::UnsupportedFormat));
    }

    #[test]
    fn test_oversized_payload_is_rejected_before_sniffing() {
        let bytes = vec![0u8; MAX_UPLOAD_BYTES + 1];
        let err = encode_image_payload(&bytes).unwrap_err();
        assert!(matches!(err, UploadError::FileTooLarge { .. }));
    }

    #[test]
    fn test_read_image_payload_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        std::fs::write(&path, PNG_SIGNATURE).unwrap();

        let payload = read_image_payload(&path).unwrap();
        assert!(payload.starts_with("data:image/png;base64,"));

        let err = read_image_payload(dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, UploadError::Io(_)));
    }
}
