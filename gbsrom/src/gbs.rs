//! The `.gbs` song source

use crate::{field::TextField, layout::Layout};
use log::debug;
use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};
use thiserror::Error;

/// A name or author field, as read from a GBS header
pub type SongField = TextField<{ Layout::FIELD_LEN }>;

/// The raw contents of a `.gbs` file
///
/// GBS files start with a fixed-size header (containing, among other things, the song name and
/// author), followed by the music driver data up until the end of the file. Only those three
/// regions are ever looked at, and their locations come from a [`Layout`], so no validation is
/// done on load.
#[derive(Clone)]
pub struct Gbs {
    bytes: Vec<u8>,
}

impl Gbs {
    /// Wrap the bytes of a GBS file
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Read a GBS file from an arbitrary I/O reader
    pub fn from_reader<R>(mut reader: R) -> Result<Self, FromReaderError>
    where
        R: Read,
    {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        debug!("Read GBS file of 0x{:X} bytes", bytes.len());

        Ok(Self::from_bytes(bytes))
    }

    /// Read a GBS file from a path on disk (.gbs)
    pub fn from_path<P>(path: P) -> Result<Self, FromPathError>
    where
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        Ok(Self::from_reader(file)?)
    }

    /// The total size of the file in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Is the file completely empty?
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The song data, which runs from the end of the header up until the end of the file
    ///
    /// Empty if the file isn't even as long as the header.
    pub fn song_data(&self, layout: &Layout) -> &[u8] {
        self.bytes.get(layout.gbs_song_start..).unwrap_or_default()
    }

    /// The song name
    pub fn name(&self, layout: &Layout) -> SongField {
        self.field(layout.gbs_song_name)
    }

    /// The song author
    pub fn author(&self, layout: &Layout) -> SongField {
        self.field(layout.gbs_song_author)
    }

    // Bytes past the end of the file are padded as if they were null
    fn field(&self, offset: usize) -> SongField {
        let bytes = self.bytes.get(offset..).unwrap_or_default();
        TextField::from_gbs_bytes(bytes)
    }
}

/// Errors that might be returned from [`Gbs::from_reader()`]
#[derive(Debug, Error)]
pub enum FromReaderError {
    /// Reading the bytes failed
    #[error("Something failed with I/O")]
    Read(#[from] io::Error),
}

/// Errors that might be returned from [`Gbs::from_path()`]
#[derive(Debug, Error)]
pub enum FromPathError {
    /// Opening the file itself failed
    #[error("Opening the file failed")]
    FileOpen(#[from] io::Error),

    /// Reading the GBS from the file failed
    #[error("Reading the GBS from file failed")]
    Read(#[from] FromReaderError),
}
