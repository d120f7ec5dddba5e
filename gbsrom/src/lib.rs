//! Insert GBS song data into a Game Boy ROM image
//!
//! A GBS file is a ripped Game Boy music driver: a fixed-size header with a couple of text
//! fields, followed by the raw driver data. This crate copies that data, along with the song
//! title and author, into fixed locations of a base ROM. Nothing about the GBS format is parsed
//! beyond those regions; every location lives in a [`Layout`](layout::Layout).
//!
//! ```no_run
//! # use gbsrom::{gbs::Gbs, layout::Layout, patch::insert_song, rom::Rom};
//! let layout = Layout::DEFAULT;
//!
//! let mut rom = Rom::from_path("rom.gb", &layout)?;
//! let gbs = Gbs::from_path("track.gbs")?;
//!
//! insert_song(&mut rom, &gbs, &layout)?;
//! rom.to_path("out.gb")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod field;
pub mod gbs;
pub mod layout;
pub mod patch;
pub mod rom;
