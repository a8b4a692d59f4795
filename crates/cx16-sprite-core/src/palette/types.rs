//! Core palette types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::nibble::NibbleError;

/// Number of colors addressable by a 4bpp sprite.
pub const MAX_4BPP_COLORS: usize = 16;

/// Error types for palette parsing and encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// A color component in the palette text does not fit in 8 bits.
    #[error("Line {line}: color component {value} out of one byte range")]
    ChannelOutOfRange { line: usize, value: String },

    /// An intermediate value could not be represented in the output.
    #[error("Palette encoding failed: {0}")]
    Encoding(#[from] NibbleError),

    /// Palette binary data must hold two bytes per color.
    #[error("Palette data length {0} is not a multiple of 2")]
    OddLength(usize),
}

/// An 8-bit RGB color taken from the palette source.
///
/// Two colors are the same entry only if all three components are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PaletteColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PaletteColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from an RGBA pixel, dropping alpha.
    #[inline]
    pub fn from_rgba(rgba: [u8; 4]) -> Self {
        Self::new(rgba[0], rgba[1], rgba[2])
    }
}

impl From<(u8, u8, u8)> for PaletteColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// Ordered palette. A color's position is its 4-bit color index.
///
/// Tables with more than [`MAX_4BPP_COLORS`] entries are allowed; callers
/// get a warning and the sprite packer rejects any pixel that resolves to an
/// index it cannot store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteTable {
    colors: Vec<PaletteColor>,
}

impl PaletteTable {
    pub fn new(colors: Vec<PaletteColor>) -> Self {
        Self { colors }
    }

    pub fn colors(&self) -> &[PaletteColor] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<PaletteColor> {
        self.colors.get(index).copied()
    }

    /// Check whether the table holds more colors than a 4bpp sprite can address.
    pub fn is_oversized(&self) -> bool {
        self.colors.len() > MAX_4BPP_COLORS
    }

    /// Index of the first entry equal to `color`, by linear scan.
    pub fn index_of(&self, color: PaletteColor) -> Option<usize> {
        self.colors.iter().position(|&c| c == color)
    }

    /// Build an exact-match lookup for this table.
    pub fn lookup(&self) -> PaletteLookup {
        PaletteLookup::new(self)
    }
}

impl FromIterator<PaletteColor> for PaletteTable {
    fn from_iter<I: IntoIterator<Item = PaletteColor>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Exact RGB to index map with the same answers as [`PaletteTable::index_of`].
///
/// Duplicate colors keep the index of their first occurrence.
#[derive(Debug, Clone)]
pub struct PaletteLookup {
    indices: HashMap<PaletteColor, usize>,
}

impl PaletteLookup {
    pub fn new(table: &PaletteTable) -> Self {
        let mut indices = HashMap::with_capacity(table.len());
        for (index, &color) in table.colors().iter().enumerate() {
            indices.entry(color).or_insert(index);
        }
        Self { indices }
    }

    #[inline]
    pub fn get(&self, color: PaletteColor) -> Option<usize> {
        self.indices.get(&color).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(r: u8, g: u8, b: u8) -> PaletteColor {
        PaletteColor::new(r, g, b)
    }

    #[test]
    fn test_color_from_rgba_drops_alpha() {
        assert_eq!(PaletteColor::from_rgba([1, 2, 3, 0]), rgb(1, 2, 3));
        assert_eq!(PaletteColor::from_rgba([1, 2, 3, 255]), rgb(1, 2, 3));
    }

    #[test]
    fn test_index_of_first_match_wins() {
        let table = PaletteTable::new(vec![rgb(0, 0, 0), rgb(9, 9, 9), rgb(9, 9, 9)]);
        assert_eq!(table.index_of(rgb(9, 9, 9)), Some(1));
        assert_eq!(table.index_of(rgb(1, 1, 1)), None);
    }

    #[test]
    fn test_lookup_matches_linear_scan() {
        let table = PaletteTable::new(vec![
            rgb(10, 20, 30),
            rgb(0, 0, 0),
            rgb(10, 20, 30),
            rgb(255, 255, 255),
        ]);
        let lookup = table.lookup();
        for color in [rgb(10, 20, 30), rgb(0, 0, 0), rgb(255, 255, 255), rgb(1, 2, 3)] {
            assert_eq!(lookup.get(color), table.index_of(color));
        }
    }

    #[test]
    fn test_oversized() {
        let table: PaletteTable = (0..16).map(|i| rgb(i, 0, 0)).collect();
        assert!(!table.is_oversized());

        let table: PaletteTable = (0..17).map(|i| rgb(i, 0, 0)).collect();
        assert!(table.is_oversized());
        assert_eq!(table.len(), 17);
    }

    #[test]
    fn test_empty_table() {
        let table = PaletteTable::default();
        assert!(table.is_empty());
        assert_eq!(table.get(0), None);
    }

    #[test]
    fn test_palette_error_display() {
        let err = PaletteError::ChannelOutOfRange {
            line: 4,
            value: "300".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Line 4: color component 300 out of one byte range"
        );
    }
}
