//! Non-fatal conditions reported by the conversion pipelines.

use std::fmt;

/// A condition worth telling the user about that does not stop a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// The image is not a whole number of sprites wide or tall.
    /// Trailing partial rows and columns are skipped.
    SpriteSizeMismatch {
        width: u32,
        height: u32,
        sprite_size: u32,
    },

    /// The palette has more colors than 4bpp can address.
    OversizedPalette { count: usize },

    /// Pixels whose color has no exact palette match.
    /// Each of them was packed as color index 0.
    UnmatchedColors { count: usize },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::SpriteSizeMismatch {
                width,
                height,
                sprite_size,
            } => write!(
                f,
                "image ({}x{}) does not conform to sprite size {}",
                width, height, sprite_size
            ),
            Warning::OversizedPalette { count } => write!(
                f,
                "{} colors found in palette. Max is 16 for 4bpp",
                count
            ),
            Warning::UnmatchedColors { count } => write!(
                f,
                "{} pixels had colors that weren't in the palette",
                count
            ),
        }
    }
}
