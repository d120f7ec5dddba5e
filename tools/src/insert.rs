//! Inserting a `.gbs` song into a base ROM

use crate::utils::has_extension;
use anyhow::{Context, Error, Result};
use clap::Parser;
use gbsrom::{
    gbs::Gbs,
    layout::Layout,
    patch::{check_song_len, insert_author, insert_name, insert_song_data},
    rom::{self, Rom},
};
use log::debug;
use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::PathBuf,
};

/// The base ROM used when none is passed on the command line
pub const DEFAULT_BASE_ROM: &str = "rom.gb";

/// Printed whenever the arguments don't make sense
pub const USAGE: &str = "Usage:
song-inserter [output.gb] [song.gbs] (uses default base ROM)
song-inserter [output.gb] [song.gbs] [base_rom.gb]";

/// Arguments for inserting a song
#[derive(Parser)]
#[clap(author, version, about = "Insert a .gbs song into a Game Boy ROM", long_about = None)]
pub struct InsertArgs {
    /// The path of the ROM to write (.gb)
    #[clap(allow_hyphen_values = true)]
    output: PathBuf,

    /// The song to insert (.gbs)
    #[clap(allow_hyphen_values = true)]
    song: PathBuf,

    /// The base ROM to insert the song into (.gb) [default: rom.gb]
    #[clap(allow_hyphen_values = true)]
    base: Option<PathBuf>,
}

/// Insert a `.gbs` song into a base ROM and write the result
pub fn insert(args: InsertArgs) -> Result<()> {
    let layout = Layout::DEFAULT;

    println!("Starting...");

    let base = match args.base {
        Some(base) if !has_extension(&base, ".gb") => {
            return Err(Error::msg(
                "Base ROM must have the file name extension '.gb'",
            ));
        }
        Some(base) => base,
        None => PathBuf::from(DEFAULT_BASE_ROM),
    };

    if !has_extension(&args.song, ".gbs") {
        return Err(Error::msg(
            "The input song must have the file name extension '.gbs'",
        ));
    }

    if !has_extension(&args.output, ".gb") {
        return Err(Error::msg(
            "The output ROM must have the file name extension '.gb'",
        ));
    }

    // All files get opened before any of them is reported as missing
    let base_file = File::open(&base);
    let song_file = File::open(&args.song);
    let output_file = File::create(&args.output);

    let base_file = base_file
        .with_context(|| format!("Failed to open base ROM '{}'", base.display()))?;
    let song_file = song_file
        .with_context(|| format!("Failed to open gbs file '{}'", args.song.display()))?;
    let output_file = output_file
        .with_context(|| format!("Failed to open output file '{}'", args.output.display()))?;

    let mut rom = match Rom::from_reader(BufReader::new(base_file), &layout) {
        Err(error @ rom::FromReaderError::TooSmall { .. }) => return Err(error.into()),
        result => result
            .with_context(|| format!("Failed to read base ROM '{}'", base.display()))?,
    };

    println!("Writing song data");

    let song_len = song_file
        .metadata()
        .with_context(|| format!("Failed to read gbs file '{}'", args.song.display()))?
        .len();

    debug!(
        "Base ROM is 0x{:X} bytes, gbs file is 0x{:X} bytes",
        rom.len(),
        song_len
    );

    // Oversized songs are rejected before being read into memory
    check_song_len(song_len, &layout)?;

    let gbs = Gbs::from_reader(BufReader::new(song_file))
        .with_context(|| format!("Failed to read gbs file '{}'", args.song.display()))?;

    insert_song_data(&mut rom, &gbs, &layout)?;

    println!("Writing song name");
    insert_name(&mut rom, &gbs, &layout)?;

    println!("Writing song author");
    insert_author(&mut rom, &gbs, &layout)?;

    println!("Writing buffer to ROM");
    rom.to_writer(BufWriter::new(output_file))
        .with_context(|| format!("Failed to write output file '{}'", args.output.display()))?;

    println!("Success!");

    Ok(())
}
