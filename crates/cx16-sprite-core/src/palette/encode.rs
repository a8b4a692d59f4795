//! 12-bit palette encoding for VERA.
//!
//! VERA stores each palette entry as a little-endian 16-bit word holding four
//! bits per channel:
//!
//! ```text
//! byte 0: GGGG BBBB
//! byte 1: 0000 RRRR
//! ```
//!
//! Channels are quantized by dropping their low four bits. No rounding is
//! applied so that the result matches what the hardware tools produce.

use crate::nibble::{expand_channel, quantize_channel, to_byte, unpack_nibbles};
use crate::warning::Warning;

use super::{PaletteColor, PaletteError, PaletteTable, MAX_4BPP_COLORS};

/// Bytes used by one encoded palette entry.
pub const BYTES_PER_COLOR: usize = 2;

/// An encoded palette ready to be loaded into VERA palette memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPalette {
    /// Two bytes per color, in table order.
    pub bytes: Vec<u8>,
    /// Number of colors encoded.
    pub color_count: usize,
}

impl EncodedPalette {
    /// Non-fatal conditions found while encoding.
    pub fn warnings(&self) -> Vec<Warning> {
        if self.color_count > MAX_4BPP_COLORS {
            vec![Warning::OversizedPalette {
                count: self.color_count,
            }]
        } else {
            Vec::new()
        }
    }
}

/// Encode every color of the table, in order, as a GB byte followed by an R byte.
///
/// Tables larger than 16 colors are encoded in full; the caller is told
/// through [`EncodedPalette::warnings`].
///
/// # Example
///
/// ```ignore
/// use cx16_sprite_core::palette::{encode_palette, PaletteColor, PaletteTable};
///
/// let table = PaletteTable::new(vec![PaletteColor::new(255, 0, 0)]);
/// let encoded = encode_palette(&table).unwrap();
/// assert_eq!(encoded.bytes, vec![0x00, 0x0F]);
/// ```
pub fn encode_palette(table: &PaletteTable) -> Result<EncodedPalette, PaletteError> {
    let mut bytes = Vec::with_capacity(table.len() * BYTES_PER_COLOR);
    for &color in table.colors() {
        let [gb, r] = encode_color(color)?;
        bytes.push(gb);
        bytes.push(r);
    }

    Ok(EncodedPalette {
        bytes,
        color_count: table.len(),
    })
}

/// Encode a single color into its two VERA palette bytes.
pub fn encode_color(color: PaletteColor) -> Result<[u8; 2], PaletteError> {
    let green = i64::from(quantize_channel(color.g));
    let blue = i64::from(quantize_channel(color.b));
    let red = i64::from(quantize_channel(color.r));

    let green_blue = to_byte(green << 4 | blue)?;
    let red = to_byte(red)?;
    Ok([green_blue, red])
}

/// Expand VERA palette bytes back into 8-bit colors.
///
/// Each nibble is replicated into both halves of the channel byte, so a
/// round trip through [`encode_palette`] keeps the top four bits of every
/// channel. The unused high nibble of the red byte is ignored.
///
/// # Errors
///
/// Returns `PaletteError::OddLength` if `bytes` does not hold whole entries.
pub fn decode_palette(bytes: &[u8]) -> Result<PaletteTable, PaletteError> {
    if bytes.len() % BYTES_PER_COLOR != 0 {
        return Err(PaletteError::OddLength(bytes.len()));
    }

    Ok(bytes
        .chunks_exact(BYTES_PER_COLOR)
        .map(|entry| {
            let (green, blue) = unpack_nibbles(entry[0]);
            let (_, red) = unpack_nibbles(entry[1]);
            PaletteColor::new(
                expand_channel(red),
                expand_channel(green),
                expand_channel(blue),
            )
        })
        .collect())
}
