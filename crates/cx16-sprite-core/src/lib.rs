//! CX16 Sprite Core - sprite sheet conversion for the Commander X16
//!
//! This crate turns an indexed-color sprite sheet and a text palette into the
//! binary formats VERA loads directly into video memory:
//!
//! - 4bpp sprite data, two palette indices per byte, one sprite after another
//! - 12-bit palette data, two bytes per color
//!
//! # Module Structure
//!
//! - `palette` - Palette tables, text palette parsing and 12-bit encoding
//! - `sprite` - Tile traversal, 4bpp packing and unpacking
//! - `decode` - Sprite sheet decoding into an RGBA pixel grid
//! - `convert` - The combined pipeline with warning collection
//! - `nibble` - Range-checked byte and nibble helpers
//!
//! # Usage
//!
//! ```ignore
//! use cx16_sprite_core::{convert_sources, ConvertOptions};
//!
//! let palette = std::fs::read_to_string("sprites.gpl")?;
//! let sheet = std::fs::read("sprites.png")?;
//! let result = convert_sources(&palette, &sheet, &ConvertOptions::default())?;
//! for warning in &result.warnings {
//!     eprintln!("Warning: {}", warning);
//! }
//! std::fs::write("SPRITES.BIN", &result.sprite.bytes)?;
//! ```

pub mod convert;
pub mod decode;
pub mod nibble;
pub mod palette;
pub mod sprite;
pub mod warning;

pub use convert::{convert, convert_sources, Conversion, ConvertError, ConvertOptions};
pub use decode::{decode_image, DecodeError, PixelGrid};
pub use palette::{
    decode_palette, encode_palette, parse_palette, EncodedPalette, PaletteColor, PaletteError,
    PaletteTable,
};
pub use sprite::{pack_sprite, unpack_sprite, PackError, PackedSprite, DEFAULT_SPRITE_SIZE};
pub use warning::Warning;
