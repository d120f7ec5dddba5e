//! Where everything lives, both in the GBS song source and in the ROM image

/// The fixed offsets and sizes used while inserting a song
///
/// Both the GBS header and the base ROM have a fixed structure, so inserting a song never has to
/// look anything up: it just copies bytes between known locations. Those locations are gathered
/// here, so they can be handed to [`insert_song()`](crate::patch::insert_song) as one value.
///
/// [`Layout::DEFAULT`] matches the base ROM the inserter was written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// The smallest base ROM (in bytes) that can hold a song
    pub rom_min_size: usize,

    /// Where the song data starts in the GBS file (i.e. the size of its header)
    pub gbs_song_start: usize,

    /// Where the song name field starts in the GBS file
    pub gbs_song_name: usize,

    /// Where the song author field starts in the GBS file
    pub gbs_song_author: usize,

    /// Where the song data is written to in the ROM
    pub rom_song_start: usize,

    /// The start of the graphics data in the ROM, which song data may never reach
    pub rom_graphics_data_start: usize,

    /// Where the song name is written to in the ROM
    pub rom_song_name: usize,

    /// Where the song author is written to in the ROM
    pub rom_song_author: usize,
}

impl Layout {
    /// The length of both the name and author text fields
    pub const FIELD_LEN: usize = 18;

    /// The layout of the stock base ROM
    pub const DEFAULT: Self = Self {
        rom_min_size: 0x80000,
        gbs_song_start: 0x70,
        gbs_song_name: 0x10,
        gbs_song_author: 0x30,
        rom_song_start: 0x500,
        rom_graphics_data_start: 0x7C000,
        rom_song_name: 0x7C715,
        rom_song_author: 0x7C729,
    };

    /// The maximal number of song data bytes that fit before the graphics data
    pub const fn song_capacity(&self) -> usize {
        self.rom_graphics_data_start
            .saturating_sub(self.rom_song_start)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::DEFAULT
    }
}
