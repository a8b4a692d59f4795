//! 4bpp sprite packing.
//!
//! Every pair of horizontally adjacent pixels becomes one byte: the left
//! pixel's palette index in the high nibble, the right pixel's in the low
//! nibble. Pixels are matched against the palette by exact RGB value with
//! alpha ignored.

use crate::decode::{expected_len, PixelGrid};
use crate::nibble::{pack_nibbles, NIBBLE_MAX};
use crate::palette::{PaletteLookup, PaletteTable};

use super::{packed_len, PackError, PackedSprite, TileGrid, UNMATCHED_INDEX};

/// Pack a sprite sheet into VERA 4bpp sprite data.
///
/// # Arguments
///
/// * `grid` - Decoded sheet
/// * `palette` - Palette whose positions are the color indices
/// * `sprite_size` - Side length of one square sprite
///
/// # Returns
///
/// A `PackedSprite` holding `width * height / 2` bytes. Pixels with no palette
/// match are written as index 0 and counted in `unmatched_colors`. When the
/// sheet is not a whole number of sprites, only whole sprites are packed and
/// the remaining bytes stay zero.
///
/// # Errors
///
/// Returns `PackError::InvalidSpriteSize` for a zero or odd sprite size.
/// Returns `PackError::InvalidPixelData` if the pixel buffer does not match
/// the dimensions.
/// Returns `PackError::IndexOutOfRange` if a pixel matches a palette entry
/// past the 16th.
///
/// # Example
///
/// ```ignore
/// use cx16_sprite_core::sprite::pack_sprite;
///
/// let packed = pack_sprite(&grid, &palette, 32)?;
/// std::fs::write("SPRITES.BIN", &packed.bytes)?;
/// ```
pub fn pack_sprite(
    grid: &PixelGrid,
    palette: &PaletteTable,
    sprite_size: u32,
) -> Result<PackedSprite, PackError> {
    let tiles = TileGrid::new(grid.width, grid.height, sprite_size)?;

    let expected = expected_len(grid.width, grid.height);
    if grid.pixels.len() != expected {
        return Err(PackError::InvalidPixelData {
            expected,
            actual: grid.pixels.len(),
        });
    }

    let lookup = palette.lookup();
    let capacity = packed_len(grid.width, grid.height);
    let mut bytes = vec![0u8; capacity];
    let mut unmatched_colors = 0;

    for (byte_index, (x, y)) in tiles.pairs().enumerate() {
        let high = resolve_index(grid, &lookup, x, y)?;
        let low = resolve_index(grid, &lookup, x + 1, y)?;
        unmatched_colors += usize::from(high.is_none()) + usize::from(low.is_none());

        let byte = pack_nibbles(
            i64::from(high.unwrap_or(UNMATCHED_INDEX)),
            i64::from(low.unwrap_or(UNMATCHED_INDEX)),
        )?;

        let slot = bytes
            .get_mut(byte_index)
            .ok_or(PackError::BufferOverflow { capacity })?;
        *slot = byte;
    }

    Ok(PackedSprite {
        bytes,
        unmatched_colors,
        tiles,
    })
}

/// Palette index for the pixel at `(x, y)`, or `None` if its color is not in
/// the palette.
fn resolve_index(
    grid: &PixelGrid,
    lookup: &PaletteLookup,
    x: u32,
    y: u32,
) -> Result<Option<u8>, PackError> {
    let color = grid
        .color(x, y)
        .ok_or(PackError::PixelOutOfBounds { x, y })?;

    match lookup.get(color) {
        Some(index) => match u8::try_from(index) {
            Ok(nibble) if nibble <= NIBBLE_MAX => Ok(Some(nibble)),
            _ => Err(PackError::IndexOutOfRange { index, x, y }),
        },
        None => Ok(None),
    }
}
