//! Palette handling.
//!
//! This module provides functionality for:
//! - Reading GIMP-style text palettes into an ordered [`PaletteTable`]
//! - Encoding a table into VERA's 12-bit palette layout
//! - Exact-match color lookup used by the sprite packer
//!
//! A palette table is built once per conversion and only read afterward.

mod encode;
mod parse;
mod types;

pub use encode::{decode_palette, encode_color, encode_palette, EncodedPalette, BYTES_PER_COLOR};
pub use parse::parse_palette;
pub use types::{PaletteColor, PaletteError, PaletteLookup, PaletteTable, MAX_4BPP_COLORS};
