//! One conversion run from files to files.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use cx16_sprite_core::{convert, decode_image, parse_palette, Conversion};
use log::{debug, info, warn};

use crate::args::Cli;
use crate::output::write_output;

/// Files written by a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub sprite_path: PathBuf,
    pub palette_path: Option<PathBuf>,
    pub sprite_count: u32,
    pub warning_count: usize,
}

/// Read the palette and sheet, convert them, and write the outputs.
///
/// Both outputs are computed before anything is written, so a conversion
/// error leaves no output file behind. The palette file is written first.
pub fn run(cli: &Cli) -> Result<RunSummary> {
    let conversion = convert_inputs(cli)?;

    for warning in &conversion.warnings {
        warn!("{}", warning);
    }

    let palette_path = match (&cli.palette_output_file, &conversion.palette) {
        (Some(path), Some(encoded)) => {
            Some(write_output(path, &encoded.bytes, cli.uppercase_output_names)?)
        }
        _ => None,
    };

    let sprite_path = write_output(
        &cli.sprite_output_file,
        &conversion.sprite.bytes,
        cli.uppercase_output_names,
    )?;

    let summary = RunSummary {
        sprite_path,
        palette_path,
        sprite_count: conversion.sprite.sprite_count(),
        warning_count: conversion.warnings.len(),
    };
    info!(
        "Converted {} sprite(s) with {} warning(s)",
        summary.sprite_count, summary.warning_count
    );
    Ok(summary)
}

fn convert_inputs(cli: &Cli) -> Result<Conversion> {
    info!("Reading palette from {}", cli.palette_file.display());
    let palette_text = fs::read_to_string(&cli.palette_file)
        .with_context(|| format!("Failed to read palette file {}", cli.palette_file.display()))?;
    let palette = parse_palette(&palette_text)
        .with_context(|| format!("Invalid palette file {}", cli.palette_file.display()))?;
    debug!("Palette has {} color(s)", palette.len());

    info!("Reading sprite sheet from {}", cli.sprite_sheet_file.display());
    let sheet_bytes = fs::read(&cli.sprite_sheet_file).with_context(|| {
        format!(
            "Failed to read sprite sheet {}",
            cli.sprite_sheet_file.display()
        )
    })?;
    let grid = decode_image(&sheet_bytes).with_context(|| {
        format!(
            "Failed to decode sprite sheet {}",
            cli.sprite_sheet_file.display()
        )
    })?;
    debug!(
        "Sprite sheet is {}x{}, sprite size {}",
        grid.width, grid.height, cli.sprite_size
    );

    let conversion = convert(&grid, &palette, &cli.options())
        .context("Sprite sheet conversion failed")?;
    Ok(conversion)
}
