//! Fixed-length, space-padded text fields as the ROM displays them
use std::fmt;

/// A fixed-length text field, ready to be written into the ROM
///
/// GBS headers store the song name and author as null-padded strings. The ROM displays them
/// in capitals and pads with spaces instead, so the bytes are transformed on the way in:
///
/// - `a-z` become `A-Z`
/// - `0x00` becomes a space
/// - every other byte (including `0x80..=0xFF`) is kept as-is
///
/// The case folding is plain ASCII and doesn't depend on any locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> TextField<N> {
    /// Transform raw GBS header bytes into a field
    ///
    /// If fewer than `N` bytes are given, the missing ones are treated as `0x00` (and
    /// so become spaces). Bytes beyond `N` are ignored.
    pub fn from_gbs_bytes(bytes: &[u8]) -> Self {
        let mut dest = [b' '; N];
        for (dest, byte) in dest.iter_mut().zip(bytes) {
            *dest = Self::transform_byte(*byte);
        }

        Self { bytes: dest }
    }

    /// Transform a single header byte
    pub const fn transform_byte(byte: u8) -> u8 {
        match byte {
            0 => b' ',
            byte => byte.to_ascii_uppercase(),
        }
    }

    /// Access the underlying bytes that make up the field
    ///
    /// This includes any trailing padding spaces
    pub fn bytes(&self) -> &[u8; N] {
        &self.bytes
    }

    /// The length of the field, padding included
    pub const fn capacity(&self) -> usize {
        N
    }

    /// The field without trailing padding
    pub fn trimmed(&self) -> &[u8] {
        let len = self
            .bytes
            .iter()
            .rposition(|byte| *byte != b' ')
            .map_or(0, |last| last + 1);

        &self.bytes[..len]
    }
}

impl<const N: usize> Default for TextField<N> {
    fn default() -> Self {
        Self { bytes: [b' '; N] }
    }
}

impl<const N: usize> fmt::Display for TextField<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.trimmed()))
    }
}
