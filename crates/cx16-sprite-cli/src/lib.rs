//! CX16 Sprite CLI - command line front end for cx16-sprite-core
//!
//! Reads a text palette and a sprite sheet, converts them with
//! `cx16_sprite_core`, reports warnings through `log`, and writes the raw
//! sprite and palette binaries.
//!
//! # Module Structure
//!
//! - `args` - Command line flags
//! - `run` - One conversion from input files to output files
//! - `output` - Output path handling and file writing
//!
//! # Usage
//!
//! ```text
//! cx16-sprite --palette-file sprites.gpl --sprite-sheet-file sprites.png \
//!     --sprite-size 16 --sprite-output-file SPRITES.BIN \
//!     --palette-output-file PALETTE.BIN
//! ```

mod args;
mod output;
mod run;

pub use args::Cli;
pub use output::{output_path, write_output};
pub use run::{run, RunSummary};
