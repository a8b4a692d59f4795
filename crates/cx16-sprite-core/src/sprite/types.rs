//! Core types for sprite packing.

use thiserror::Error;

use crate::nibble::NibbleError;
use crate::warning::Warning;

use super::TileGrid;

/// Side length of a square sprite when none is given.
pub const DEFAULT_SPRITE_SIZE: u32 = 32;

/// Index written for pixels whose color is not in the palette.
pub const UNMATCHED_INDEX: u8 = 0;

/// Errors that stop sprite packing. None of them leave partial output behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    /// Sprite size must be a positive even number of pixels.
    #[error("Invalid sprite size {0}: must be a positive even number")]
    InvalidSpriteSize(u32),

    /// Pixel data length doesn't match expected dimensions.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Packed data length doesn't match expected dimensions.
    #[error("Invalid packed data: expected {expected} bytes (width * height / 2), got {actual}")]
    InvalidPackedData { expected: usize, actual: usize },

    /// A pixel resolved to a palette index that does not fit in a nibble,
    /// or a packed index has no palette entry.
    #[error("Color index {index} at pixel ({x}, {y}) cannot be stored in 4bpp")]
    IndexOutOfRange { index: usize, x: u32, y: u32 },

    /// The traversal visited a pixel outside the image.
    #[error("Pixel ({x}, {y}) is outside the image")]
    PixelOutOfBounds { x: u32, y: u32 },

    /// The traversal produced more bytes than the output holds.
    #[error("Sprite data overflowed its {capacity} byte buffer")]
    BufferOverflow { capacity: usize },

    /// A packed byte could not be formed.
    #[error("Sprite encoding failed: {0}")]
    Encoding(#[from] NibbleError),
}

/// Result of packing a sprite sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedSprite {
    /// 4bpp sprite data, `width * height / 2` bytes, in VERA sprite order.
    pub bytes: Vec<u8>,
    /// Number of pixels whose color had no palette entry.
    pub unmatched_colors: usize,
    /// Tile layout used for the traversal.
    pub tiles: TileGrid,
}

impl PackedSprite {
    /// Non-fatal conditions found while packing, in the order they arise.
    pub fn warnings(&self) -> Vec<Warning> {
        let mut warnings = Vec::new();
        if !self.tiles.covers_image() {
            warnings.push(Warning::SpriteSizeMismatch {
                width: self.tiles.width,
                height: self.tiles.height,
                sprite_size: self.tiles.sprite_size,
            });
        }
        if self.unmatched_colors > 0 {
            warnings.push(Warning::UnmatchedColors {
                count: self.unmatched_colors,
            });
        }
        warnings
    }

    /// Number of sprites in the output.
    pub fn sprite_count(&self) -> u32 {
        self.tiles.tile_count()
    }
}

/// Output length for a `width` x `height` sheet at 4bpp.
pub fn packed_len(width: u32, height: u32) -> usize {
    width as usize * height as usize / 2
}
