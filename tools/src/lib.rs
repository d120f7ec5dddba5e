//! # Song Inserter
//!
//! Game Boy music is often ripped into `.gbs` files: a small header with the song name and
//! author, followed by the music driver data. This crate provides a command-line utility that
//! inserts such a song into a base ROM, so it can be played back on an emulator or real
//! hardware.
//!
//! ```console
//! song-inserter 0.1.0
//! Insert a .gbs song into a Game Boy ROM
//!
//! USAGE:
//!     song-inserter <OUTPUT> <SONG> [BASE]
//!
//! ARGS:
//!     <OUTPUT>    The path of the ROM to write (.gb)
//!     <SONG>      The song to insert (.gbs)
//!     <BASE>      The base ROM to insert the song into (.gb) [default: rom.gb]
//! ```
//!
//! ## Example
//!
//! ```console
//! > song-inserter out.gb track.gbs
//! Starting...
//! Writing song data
//! Writing song name
//! Writing song author
//! Writing buffer to ROM
//! Success!
//! ```
//!
//! Set `RUST_LOG=debug` to see the sizes and offsets involved.

pub mod insert;
pub(crate) mod utils;
