//! 4bpp sprite packing for VERA.
//!
//! This module provides functionality for:
//! - Laying square sprite tiles over a sheet and walking them in VERA order
//! - Packing pixel pairs into palette-index nibbles
//! - Unpacking sprite data back into colors
//!
//! # Output layout
//!
//! Sprites are emitted one after another, left to right then top to bottom.
//! Inside a sprite each row is written top to bottom, two pixels per byte:
//!
//! ```text
//! byte = (index of pixel x) << 4 | (index of pixel x + 1)
//! ```

mod pack;
mod tiles;
mod types;
mod unpack;

pub use pack::pack_sprite;
pub use tiles::TileGrid;
pub use types::{packed_len, PackError, PackedSprite, DEFAULT_SPRITE_SIZE, UNMATCHED_INDEX};
pub use unpack::unpack_sprite;
