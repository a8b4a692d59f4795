//! Text palette parsing.
//!
//! Reads GIMP-style `.gpl` files, which are plain text with one color per
//! line:
//!
//! ```text
//! GIMP Palette
//! Name: Sprites
//! Columns: 16
//! #
//!   0   0   0	Background
//! 255 128  64	Orange
//! ```
//!
//! Only the RGB values are used. Every run of three consecutive unsigned
//! integer tokens on a line becomes one color; all other text is ignored.

use super::{PaletteColor, PaletteError, PaletteTable};

/// Parse palette text into an ordered table.
///
/// # Errors
///
/// Returns `PaletteError::ChannelOutOfRange` if a color component is
/// larger than 255.
pub fn parse_palette(text: &str) -> Result<PaletteTable, PaletteError> {
    let mut colors = Vec::new();
    for (line_idx, line) in text.lines().enumerate() {
        parse_line(line, line_idx + 1, &mut colors)?;
    }
    Ok(PaletteTable::new(colors))
}

fn parse_line(
    line: &str,
    line_number: usize,
    colors: &mut Vec<PaletteColor>,
) -> Result<(), PaletteError> {
    if line.trim_start().starts_with('#') {
        return Ok(());
    }

    let mut run: Vec<&str> = Vec::with_capacity(3);
    for token in line.split_whitespace() {
        if !is_unsigned_integer(token) {
            run.clear();
            continue;
        }
        run.push(token);
        if run.len() == 3 {
            colors.push(PaletteColor::new(
                parse_channel(run[0], line_number)?,
                parse_channel(run[1], line_number)?,
                parse_channel(run[2], line_number)?,
            ));
            run.clear();
        }
    }
    Ok(())
}

fn is_unsigned_integer(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

fn parse_channel(token: &str, line: usize) -> Result<u8, PaletteError> {
    token
        .parse::<u8>()
        .map_err(|_| PaletteError::ChannelOutOfRange {
            line,
            value: token.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GIMP_PALETTE: &str = "GIMP Palette\n\
                                Name: Sprites\n\
                                Columns: 16\n\
                                #\n\
                                \x20 0   0   0\tBackground\n\
                                255   0   0\tRed\n\
                                \x20 0 255   0\tGreen\n";

    #[test]
    fn test_parse_gimp_palette() {
        let table = parse_palette(GIMP_PALETTE).unwrap();
        assert_eq!(
            table.colors(),
            &[
                PaletteColor::new(0, 0, 0),
                PaletteColor::new(255, 0, 0),
                PaletteColor::new(0, 255, 0),
            ]
        );
    }

    #[test]
    fn test_parse_keeps_file_order_and_duplicates() {
        let table = parse_palette("1 2 3\n4 5 6\n1 2 3\n").unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(2), Some(PaletteColor::new(1, 2, 3)));
    }

    #[test]
    fn test_parse_multiple_triples_per_line() {
        let table = parse_palette("0 0 0 255 255 255\n").unwrap();
        assert_eq!(
            table.colors(),
            &[PaletteColor::new(0, 0, 0), PaletteColor::new(255, 255, 255)]
        );
    }

    #[test]
    fn test_parse_without_trailing_name() {
        let table = parse_palette("16 32 48").unwrap();
        assert_eq!(table.colors(), &[PaletteColor::new(16, 32, 48)]);
    }

    #[test]
    fn test_parse_ignores_non_matching_lines() {
        let table = parse_palette("Columns: 16\nfoo bar\n12 13\n\n").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_parse_skips_comment_lines() {
        let table = parse_palette("# 1 2 3\n  # 4 5 6\n7 8 9\n").unwrap();
        assert_eq!(table.colors(), &[PaletteColor::new(7, 8, 9)]);
    }

    #[test]
    fn test_parse_word_breaks_a_run() {
        // "x" interrupts the run, so only 4 5 6 forms a color
        let table = parse_palette("1 2 x 4 5 6\n").unwrap();
        assert_eq!(table.colors(), &[PaletteColor::new(4, 5, 6)]);
    }

    #[test]
    fn test_parse_negative_numbers_are_not_colors() {
        let table = parse_palette("-1 2 3\n").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_parse_out_of_range_component() {
        let result = parse_palette("0 0 0\n10 300 20\tBad\n");
        assert_eq!(
            result,
            Err(PaletteError::ChannelOutOfRange {
                line: 2,
                value: "300".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_huge_component() {
        let result = parse_palette("1 2 99999999999999999999999\n");
        assert!(matches!(
            result,
            Err(PaletteError::ChannelOutOfRange { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_windows_line_endings() {
        let table = parse_palette("1 2 3\r\n4 5 6\r\n").unwrap();
        assert_eq!(table.len(), 2);
    }
}
