//! Core types for image decoding.

use thiserror::Error;

use crate::palette::PaletteColor;

/// Bytes per RGBA8 pixel.
pub const RGBA_CHANNELS: usize = 4;

/// Error types for image decoding operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// Pixel buffer length does not match the dimensions.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },
}

/// A decoded image with RGBA pixel data.
///
/// The converter never writes to a grid; it only reads colors out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    /// Length should be width * height * 4.
    pub pixels: Vec<u8>,
}

impl PixelGrid {
    /// Create a new PixelGrid, checking the buffer against the dimensions.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, DecodeError> {
        let expected = expected_len(width, height);
        if pixels.len() != expected {
            return Err(DecodeError::InvalidPixelData {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a grid from row-major RGB colors, with every pixel fully opaque.
    pub fn from_colors(
        width: u32,
        height: u32,
        colors: &[PaletteColor],
    ) -> Result<Self, DecodeError> {
        let pixels = colors
            .iter()
            .flat_map(|c| [c.r, c.g, c.b, u8::MAX])
            .collect();
        Self::new(width, height, pixels)
    }

    /// Create a PixelGrid from an image::RgbaImage.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an image::RgbaImage for further processing.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// RGBA value at `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn rgba(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * RGBA_CHANNELS;
        let px = self.pixels.get(offset..offset + RGBA_CHANNELS)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Color at `(x, y)` with alpha discarded.
    #[inline]
    pub fn color(&self, x: u32, y: u32) -> Option<PaletteColor> {
        self.rgba(x, y).map(PaletteColor::from_rgba)
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check if this is an empty image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}

pub(crate) fn expected_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * RGBA_CHANNELS
}
