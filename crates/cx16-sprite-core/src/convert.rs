//! The conversion pipeline.
//!
//! Runs palette encoding and sprite packing over one palette table and one
//! sheet, collecting every warning in the order it arises. Nothing is written
//! anywhere: the caller decides what to persist once the whole conversion has
//! succeeded, so a fatal error never leaves a half-written file behind.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::{decode_image, DecodeError, PixelGrid};
use crate::palette::{encode_palette, parse_palette, EncodedPalette, PaletteError, PaletteTable};
use crate::sprite::{pack_sprite, PackError, PackedSprite, DEFAULT_SPRITE_SIZE};
use crate::warning::Warning;

/// Errors that abort a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Pack(#[from] PackError),
}

/// Settings for one conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Side length of one square sprite, in pixels.
    pub sprite_size: u32,
    /// Whether to produce palette bytes as well as sprite bytes.
    pub encode_palette: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            sprite_size: DEFAULT_SPRITE_SIZE,
            encode_palette: true,
        }
    }
}

/// Everything produced by a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Encoded palette, present when `ConvertOptions::encode_palette` is set.
    pub palette: Option<EncodedPalette>,
    /// Packed sprite data.
    pub sprite: PackedSprite,
    /// Palette warnings first, then sprite warnings.
    pub warnings: Vec<Warning>,
}

/// Convert an already decoded sheet with an already parsed palette.
///
/// The palette is encoded first (when requested), then the sheet is packed
/// using the same table for color lookup.
pub fn convert(
    grid: &PixelGrid,
    palette: &PaletteTable,
    options: &ConvertOptions,
) -> Result<Conversion, ConvertError> {
    let mut warnings = Vec::new();

    let encoded = if options.encode_palette {
        let encoded = encode_palette(palette)?;
        warnings.extend(encoded.warnings());
        Some(encoded)
    } else {
        None
    };

    let sprite = pack_sprite(grid, palette, options.sprite_size)?;
    warnings.extend(sprite.warnings());

    Ok(Conversion {
        palette: encoded,
        sprite,
        warnings,
    })
}

/// Convert from palette text and encoded image bytes.
///
/// # Errors
///
/// Returns `ConvertError::Palette` if the palette text holds an out-of-range
/// component, `ConvertError::Decode` if the image cannot be decoded, and
/// `ConvertError::Pack` if packing fails.
pub fn convert_sources(
    palette_text: &str,
    image_bytes: &[u8],
    options: &ConvertOptions,
) -> Result<Conversion, ConvertError> {
    let palette = parse_palette(palette_text)?;
    let grid = decode_image(image_bytes)?;
    convert(&grid, &palette, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteColor;
    use image::codecs::png::PngEncoder;
    use image::{ExtendedColorType, ImageEncoder};

    fn rgb(r: u8, g: u8, b: u8) -> PaletteColor {
        PaletteColor::new(r, g, b)
    }

    fn three_color_palette() -> PaletteTable {
        PaletteTable::new(vec![rgb(0, 0, 0), rgb(255, 0, 0), rgb(0, 255, 0)])
    }

    #[test]
    fn test_default_options() {
        let options = ConvertOptions::default();
        assert_eq!(options.sprite_size, 32);
        assert!(options.encode_palette);
    }

    #[test]
    fn test_convert_clean() {
        let palette = three_color_palette();
        let grid = PixelGrid::from_colors(
            2,
            2,
            &[rgb(255, 0, 0), rgb(0, 255, 0), rgb(0, 0, 0), rgb(255, 0, 0)],
        )
        .unwrap();
        let options = ConvertOptions {
            sprite_size: 2,
            encode_palette: true,
        };

        let result = convert(&grid, &palette, &options).unwrap();
        assert_eq!(result.sprite.bytes, vec![0x12, 0x01]);
        assert_eq!(
            result.palette.map(|p| p.bytes),
            Some(vec![0x00, 0x00, 0x00, 0x0F, 0xF0, 0x00])
        );
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_convert_without_palette_output() {
        let palette = three_color_palette();
        let grid = PixelGrid::from_colors(2, 2, &[rgb(0, 255, 0); 4]).unwrap();
        let options = ConvertOptions {
            sprite_size: 2,
            encode_palette: false,
        };

        let result = convert(&grid, &palette, &options).unwrap();
        assert!(result.palette.is_none());
        // The palette is still used for lookups
        assert_eq!(result.sprite.bytes, vec![0x22, 0x22]);
    }

    #[test]
    fn test_convert_collects_warnings_in_order() {
        let palette: PaletteTable = (0..17u8).map(|i| rgb(i, 0, 0)).collect();
        let grid = PixelGrid::from_colors(4, 2, &[rgb(1, 2, 3); 8]).unwrap();

        let result = convert(&grid, &palette, &ConvertOptions::default()).unwrap();
        assert_eq!(
            result.warnings,
            vec![
                Warning::OversizedPalette { count: 17 },
                Warning::SpriteSizeMismatch {
                    width: 4,
                    height: 2,
                    sprite_size: 32
                },
            ]
        );
        assert_eq!(result.sprite.bytes.len(), 4);
        assert_eq!(result.palette.map(|p| p.bytes.len()), Some(34));
    }

    #[test]
    fn test_convert_fatal_error_produces_nothing() {
        let palette: PaletteTable = (0..17u8).map(|i| rgb(i, 0, 0)).collect();
        let grid = PixelGrid::from_colors(2, 2, &[rgb(16, 0, 0); 4]).unwrap();
        let options = ConvertOptions {
            sprite_size: 2,
            encode_palette: true,
        };

        let result = convert(&grid, &palette, &options);
        assert!(matches!(
            result,
            Err(ConvertError::Pack(PackError::IndexOutOfRange { index: 16, .. }))
        ));
    }

    #[test]
    fn test_convert_sources() {
        let mut png = Vec::new();
        #[rustfmt::skip]
        let pixels = [
            255, 0, 0,   0, 0, 0,
            1, 1, 1,     0, 255, 0,
        ];
        PngEncoder::new(&mut png)
            .write_image(&pixels, 2, 2, ExtendedColorType::Rgb8)
            .unwrap();
        let palette_text = "GIMP Palette\n0 0 0 Black\n255 0 0 Red\n0 255 0 Green\n";
        let options = ConvertOptions {
            sprite_size: 2,
            encode_palette: false,
        };

        let result = convert_sources(palette_text, &png, &options).unwrap();
        assert_eq!(result.sprite.bytes, vec![0x10, 0x02]);
        assert_eq!(result.warnings, vec![Warning::UnmatchedColors { count: 1 }]);
    }

    #[test]
    fn test_convert_sources_bad_palette() {
        let result = convert_sources("0 0 256\n", &[], &ConvertOptions::default());
        assert!(matches!(result, Err(ConvertError::Palette(_))));
    }

    #[test]
    fn test_convert_sources_bad_image() {
        let result = convert_sources("0 0 0\n", &[1, 2, 3], &ConvertOptions::default());
        assert!(matches!(result, Err(ConvertError::Decode(_))));
    }

    #[test]
    fn test_convert_error_display_is_transparent() {
        let err = ConvertError::from(PackError::InvalidSpriteSize(0));
        assert_eq!(
            err.to_string(),
            "Invalid sprite size 0: must be a positive even number"
        );
    }
}
