//! Tile layout and traversal order.
//!
//! VERA expects each sprite's pixels to be contiguous in memory, so a sheet
//! holding several sprites is not written in plain scanline order. Sprites
//! are visited left to right and top to bottom, and within a sprite every
//! row is emitted as pairs of pixels. Both packing and unpacking walk the
//! sheet through [`TileGrid::pairs`], so they always agree on byte order.

use super::PackError;

/// Square tiles laid over a sheet.
///
/// Only whole tiles are covered: a sheet that is not a multiple of the
/// sprite size loses its trailing partial rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    /// Sheet width in pixels.
    pub width: u32,
    /// Sheet height in pixels.
    pub height: u32,
    /// Side length of one sprite.
    pub sprite_size: u32,
    /// Whole sprites per row.
    pub columns: u32,
    /// Whole sprites per column.
    pub rows: u32,
}

impl TileGrid {
    /// Lay tiles of `sprite_size` over a `width` x `height` sheet.
    ///
    /// # Errors
    ///
    /// Returns `PackError::InvalidSpriteSize` if `sprite_size` is zero or odd.
    pub fn new(width: u32, height: u32, sprite_size: u32) -> Result<Self, PackError> {
        if sprite_size == 0 || sprite_size % 2 != 0 {
            return Err(PackError::InvalidSpriteSize(sprite_size));
        }
        Ok(Self {
            width,
            height,
            sprite_size,
            columns: width / sprite_size,
            rows: height / sprite_size,
        })
    }

    /// Check whether the tiles cover every pixel of the sheet.
    pub fn covers_image(&self) -> bool {
        self.width % self.sprite_size == 0 && self.height % self.sprite_size == 0
    }

    pub fn tile_count(&self) -> u32 {
        self.columns * self.rows
    }

    /// Coordinates of every high-nibble pixel, in output byte order.
    ///
    /// The low-nibble pixel of each pair is the one at `x + 1`.
    pub fn pairs(&self) -> impl Iterator<Item = (u32, u32)> {
        let size = self.sprite_size;
        let columns = self.columns;
        (0..self.rows).flat_map(move |row| {
            (0..columns).flat_map(move |col| {
                (0..size).flat_map(move |dy| {
                    (0..size)
                        .step_by(2)
                        .map(move |dx| (col * size + dx, row * size + dy))
                })
            })
        })
    }
}
