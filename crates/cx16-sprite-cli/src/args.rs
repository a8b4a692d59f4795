//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;
use cx16_sprite_core::{ConvertOptions, DEFAULT_SPRITE_SIZE};

/// Convert indexed color PNG sprite sheets for use as sprites in the Commander X16.
#[derive(Parser, Debug, Clone)]
#[command(name = "cx16-sprite", version, about, long_about = None)]
pub struct Cli {
    /// The GIMP-formatted palette file (RGB values as plain text) to convert to 12-bit color
    #[arg(long)]
    pub palette_file: PathBuf,

    /// An indexed color PNG sprite sheet to convert to a 4bpp indexed sprite
    #[arg(long)]
    pub sprite_sheet_file: PathBuf,

    /// Size of one side of a square sprite
    #[arg(long, default_value_t = DEFAULT_SPRITE_SIZE)]
    pub sprite_size: u32,

    /// The X16 sprite sheet, ready to load directly into memory
    #[arg(long)]
    pub sprite_output_file: PathBuf,

    /// The X16 palette file, ready to load into memory at a 16-color offset
    #[arg(long)]
    pub palette_output_file: Option<PathBuf>,

    /// Uppercase output file names, as the X16 host file system expects
    #[arg(long, default_value_t = false)]
    pub uppercase_output_names: bool,
}

impl Cli {
    /// Conversion settings implied by the arguments.
    pub fn options(&self) -> ConvertOptions {
        ConvertOptions {
            sprite_size: self.sprite_size,
            encode_palette: self.palette_output_file.is_some(),
        }
    }
}
