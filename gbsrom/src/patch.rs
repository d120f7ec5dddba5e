//! Inserting a [`Gbs`] song into a [`Rom`]
//!
//! Insertion happens in three steps (song data, name, author), which are available separately
//! for callers that want to report progress in between. [`insert_song()`] runs all three.

use crate::{
    gbs::Gbs,
    layout::Layout,
    rom::{OutOfRangeError, Rom},
};
use log::debug;
use thiserror::Error;

/// Copy the song data, name and author from a GBS file into the ROM
///
/// Everything outside of those three regions is left untouched, and the size of the ROM never
/// changes. If the song data doesn't fit, the ROM isn't modified at all.
pub fn insert_song(rom: &mut Rom, gbs: &Gbs, layout: &Layout) -> Result<(), InsertSongError> {
    insert_song_data(rom, gbs, layout)?;
    insert_name(rom, gbs, layout)?;
    insert_author(rom, gbs, layout)?;

    Ok(())
}

/// Copy the song data from the GBS file into the ROM
///
/// The data has to end before the graphics data in the ROM starts.
pub fn insert_song_data(rom: &mut Rom, gbs: &Gbs, layout: &Layout) -> Result<(), InsertSongError> {
    check_song_len(gbs.len() as u64, layout)?;
    let data = gbs.song_data(layout);

    debug!(
        "Copying 0x{:X} bytes of song data to 0x{:X}",
        data.len(),
        layout.rom_song_start
    );

    rom.write_at(layout.rom_song_start, data)?;
    Ok(())
}

/// Check whether the song data of a GBS file of `len` bytes fits in the ROM
///
/// Only needs the size of the file, so oversized songs can be rejected before reading them.
pub fn check_song_len(len: u64, layout: &Layout) -> Result<(), InsertSongError> {
    let size = usize::try_from(len)
        .unwrap_or(usize::MAX)
        .saturating_sub(layout.gbs_song_start);
    let capacity = layout.song_capacity();

    if size > capacity {
        return Err(InsertSongError::Overflow { size, capacity });
    }

    Ok(())
}

/// Copy the (transformed) song name from the GBS file into the ROM
pub fn insert_name(rom: &mut Rom, gbs: &Gbs, layout: &Layout) -> Result<(), InsertSongError> {
    let name = gbs.name(layout);
    debug!("Song name: \"{name}\"");

    rom.write_at(layout.rom_song_name, name.bytes())?;
    Ok(())
}

/// Copy the (transformed) song author from the GBS file into the ROM
pub fn insert_author(rom: &mut Rom, gbs: &Gbs, layout: &Layout) -> Result<(), InsertSongError> {
    let author = gbs.author(layout);
    debug!("Song author: \"{author}\"");

    rom.write_at(layout.rom_song_author, author.bytes())?;
    Ok(())
}

/// Errors that might be returned from [`insert_song()`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InsertSongError {
    /// The song data would run into the graphics data
    #[error("Cannot insert song without overwriting graphics data.")]
    Overflow { size: usize, capacity: usize },

    /// A region fell outside of the ROM, which only happens with an inconsistent [`Layout`]
    #[error("A song region does not fit in the ROM")]
    OutOfRange(#[from] OutOfRangeError),
}
