//! Nibble and byte-range helpers shared by the palette and sprite encoders.
//!
//! Every value that ends up in an output buffer passes through [`to_byte`]
//! or [`pack_nibbles`], so an out-of-range value is reported instead of being
//! silently truncated.

use thiserror::Error;

/// Largest value a 4-bit nibble can hold.
pub const NIBBLE_MAX: u8 = 0x0F;

/// Errors raised when a value cannot be stored in the target width.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NibbleError {
    /// The value does not fit in one byte.
    #[error("Value {0} out of one byte range")]
    ByteOutOfRange(i64),

    /// The value does not fit in four bits.
    #[error("Value {0} out of nibble range (0-15)")]
    NibbleOutOfRange(i64),
}

/// Convert an intermediate integer into a byte, failing if it is outside 0-255.
pub fn to_byte(value: i64) -> Result<u8, NibbleError> {
    u8::try_from(value).map_err(|_| NibbleError::ByteOutOfRange(value))
}

/// Convert an intermediate integer into a nibble, failing if it is outside 0-15.
pub fn to_nibble(value: i64) -> Result<u8, NibbleError> {
    match u8::try_from(value) {
        Ok(n) if n <= NIBBLE_MAX => Ok(n),
        _ => Err(NibbleError::NibbleOutOfRange(value)),
    }
}

/// Reduce an 8-bit color channel to 4 bits by dropping the low nibble.
///
/// This truncates, it never rounds: `0x1F` becomes `0x1`.
#[inline]
pub fn quantize_channel(value: u8) -> u8 {
    value >> 4
}

/// Expand a 4-bit channel back to 8 bits by replicating the nibble.
///
/// `0x0` maps to `0x00` and `0xF` maps to `0xFF`.
#[inline]
pub fn expand_channel(nibble: u8) -> u8 {
    let n = nibble & NIBBLE_MAX;
    n << 4 | n
}

/// Pack two 4-bit values into one byte, `high` in bits 4-7 and `low` in bits 0-3.
///
/// # Errors
///
/// Returns `NibbleError::NibbleOutOfRange` if either value is above 15.
pub fn pack_nibbles(high: i64, low: i64) -> Result<u8, NibbleError> {
    let high = to_nibble(high)?;
    let low = to_nibble(low)?;
    to_byte(i64::from(high) << 4 | i64::from(low))
}

/// Split a byte into its `(high, low)` nibbles.
#[inline]
pub fn unpack_nibbles(byte: u8) -> (u8, u8) {
    (byte >> 4, byte & NIBBLE_MAX)
}
