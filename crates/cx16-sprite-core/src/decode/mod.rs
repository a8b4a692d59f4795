//! Image decoding for sprite sheets.
//!
//! This module provides functionality for:
//! - Decoding PNG (and BMP/GIF) sprite sheets with the `image` crate
//! - Holding the decoded pixels as an RGBA [`PixelGrid`]
//!
//! # Examples
//!
//! ```ignore
//! use cx16_sprite_core::decode::decode_image;
//!
//! let png_bytes = std::fs::read("sheet.png").unwrap();
//! let grid = decode_image(&png_bytes).unwrap();
//! println!("Decoded {}x{} sheet", grid.width, grid.height);
//! ```

mod load;
mod types;

pub use load::decode_image;
pub use types::{DecodeError, PixelGrid, RGBA_CHANNELS};
pub(crate) use types::expected_len;
