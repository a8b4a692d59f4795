//! Sprite sheet decoding through the `image` crate.

use std::io::Cursor;

use image::ImageReader;

use super::{DecodeError, PixelGrid};

/// Decode an image file from bytes into an RGBA pixel grid.
///
/// The format is guessed from the file contents. Indexed PNGs are expanded
/// to RGBA through their embedded palette, so pixel colors can be matched
/// against the text palette afterward.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format cannot be recognized.
/// Returns `DecodeError::CorruptedFile` if decoding fails.
pub fn decode_image(bytes: &[u8]) -> Result<PixelGrid, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    Ok(PixelGrid::from_rgba_image(img.into_rgba8()))
}
