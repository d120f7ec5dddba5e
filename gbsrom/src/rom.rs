//! The base ROM image songs are inserted into

use crate::layout::Layout;
use log::debug;
use std::{
    fs::File,
    io::{self, Read, Write},
    path::Path,
};
use thiserror::Error;

/// A Game Boy ROM image held completely in memory
///
/// The ROM is treated as an opaque byte buffer. The only thing checked on load is that it's
/// big enough to hold everything described by a [`Layout`]. After that, the only way to change
/// it is through [`Rom::write_at()`], which refuses writes that would run past its end.
///
/// ```no_run
/// # use gbsrom::{layout::Layout, rom::Rom};
/// let mut rom = Rom::from_path("rom.gb", &Layout::DEFAULT)?;
/// rom.write_at(0x500, &[0x01, 0x02])?;
/// rom.to_path("out.gb")?;
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Clone)]
pub struct Rom {
    bytes: Vec<u8>,
}

impl Rom {
    /// Wrap a byte buffer, checking it against the minimal size of a layout
    pub fn from_bytes(bytes: Vec<u8>, layout: &Layout) -> Result<Self, FromReaderError> {
        if bytes.len() < layout.rom_min_size {
            return Err(FromReaderError::TooSmall {
                len: bytes.len(),
                min: layout.rom_min_size,
            });
        }

        Ok(Self { bytes })
    }

    /// Read a complete ROM from an arbitrary I/O reader
    pub fn from_reader<R>(mut reader: R, layout: &Layout) -> Result<Self, FromReaderError>
    where
        R: Read,
    {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        debug!("Read base ROM of 0x{:X} bytes", bytes.len());

        Self::from_bytes(bytes, layout)
    }

    /// Read a complete ROM from a path on disk (.gb)
    pub fn from_path<P>(path: P, layout: &Layout) -> Result<Self, FromPathError>
    where
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        Ok(Self::from_reader(file, layout)?)
    }

    /// Overwrite the bytes at `offset` with `bytes`
    ///
    /// Fails without touching the ROM if any of the bytes would fall outside of it.
    pub fn write_at(&mut self, offset: usize, bytes: &[u8]) -> Result<(), OutOfRangeError> {
        let size = self.bytes.len();
        let range = offset
            .checked_add(bytes.len())
            .filter(|end| *end <= size)
            .map(|end| offset..end)
            .ok_or(OutOfRangeError {
                offset,
                len: bytes.len(),
                size,
            })?;

        self.bytes[range].copy_from_slice(bytes);
        Ok(())
    }

    /// Serialize the ROM to an arbitrary I/O writer
    pub fn to_writer<W>(&self, mut writer: W) -> Result<(), io::Error>
    where
        W: Write,
    {
        writer.write_all(&self.bytes)?;
        writer.flush()
    }

    /// Serialize the ROM to a path on disk (.gb)
    pub fn to_path<P>(&self, path: P) -> Result<(), io::Error>
    where
        P: AsRef<Path>,
    {
        self.to_writer(File::create(path)?)
    }

    /// The size of the ROM in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Is the ROM empty? (Only possible with a zero-sized layout)
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Access the bytes that make up the ROM
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

/// A write that would have gone past the end of the [`Rom`]
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Writing 0x{len:X} bytes at 0x{offset:X} exceeds the ROM size of 0x{size:X}")]
pub struct OutOfRangeError {
    /// Where the write would have started
    pub offset: usize,

    /// The number of bytes that would have been written
    pub len: usize,

    /// The size of the ROM
    pub size: usize,
}

/// Errors that might be returned from [`Rom::from_reader()`]
#[derive(Debug, Error)]
pub enum FromReaderError {
    /// Reading the bytes failed
    #[error("Something failed with I/O")]
    Read(#[from] io::Error),

    /// The ROM can't hold everything the layout describes
    #[error("Base ROM is too small. It should be 0x{min:x} ({min}) bytes or more.")]
    TooSmall { len: usize, min: usize },
}

/// Errors that might be returned from [`Rom::from_path()`]
#[derive(Debug, Error)]
pub enum FromPathError {
    /// Opening the file itself failed
    #[error("Opening the file failed")]
    FileOpen(#[from] io::Error),

    /// Reading the ROM from the file failed
    #[error("Reading the ROM from file failed")]
    Read(#[from] FromReaderError),
}
