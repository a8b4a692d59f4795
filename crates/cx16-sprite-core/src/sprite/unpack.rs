//! Expanding 4bpp sprite data back into colors.
//!
//! Used to preview packed sheets and to check that packing kept every color.

use crate::nibble::unpack_nibbles;
use crate::palette::{PaletteColor, PaletteTable};

use super::{packed_len, PackError, TileGrid};

/// Expand packed sprite data into a row-major grid of colors.
///
/// Walks the sheet in the same order as [`pack_sprite`](super::pack_sprite)
/// and maps each nibble back through `palette`. Pixels outside whole sprites
/// are left black.
///
/// # Errors
///
/// Returns `PackError::InvalidPackedData` if `bytes` is not
/// `width * height / 2` long.
/// Returns `PackError::IndexOutOfRange` if a nibble has no palette entry.
pub fn unpack_sprite(
    bytes: &[u8],
    width: u32,
    height: u32,
    sprite_size: u32,
    palette: &PaletteTable,
) -> Result<Vec<PaletteColor>, PackError> {
    let tiles = TileGrid::new(width, height, sprite_size)?;

    let expected = packed_len(width, height);
    if bytes.len() != expected {
        return Err(PackError::InvalidPackedData {
            expected,
            actual: bytes.len(),
        });
    }

    let mut colors = vec![PaletteColor::default(); width as usize * height as usize];
    for ((x, y), &byte) in tiles.pairs().zip(bytes) {
        let (high, low) = unpack_nibbles(byte);
        for (px, index) in [(x, high), (x + 1, low)] {
            let color = palette
                .get(usize::from(index))
                .ok_or(PackError::IndexOutOfRange {
                    index: usize::from(index),
                    x: px,
                    y,
                })?;
            let slot = colors
                .get_mut(y as usize * width as usize + px as usize)
                .ok_or(PackError::PixelOutOfBounds { x: px, y })?;
            *slot = color;
        }
    }
    Ok(colors)
}
