//! Palette (TLUT) views for color-indexed formats.
//!
//! The codec never owns or edits a palette. Callers resolve one from their
//! asset, wrap it in a [`Palette`], and pass it to decode.

use alloc::vec::Vec;
use rgb::Rgba;

use crate::TextureError;
use crate::pixel::{unpack_ia88, unpack_rgba5551};

/// Layout of the 16-bit palette entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PaletteFormat {
    /// `RRRRRGGGGGBBBBBA`, expanded exactly like RGBA16 pixels.
    #[default]
    Rgba16,
    /// Intensity in the high byte, alpha in the low byte.
    Ia16,
}

/// Borrowed palette: 16 entries for CI4, 256 for CI8.
///
/// Shorter tables are accepted; an index past the end fails the lookup
/// instead of reading stale memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette<'a> {
    entries: &'a [u16],
    format: PaletteFormat,
}

impl<'a> Palette<'a> {
    /// RGBA16 palette over `entries`.
    pub fn new(entries: &'a [u16]) -> Self {
        Self::with_format(entries, PaletteFormat::Rgba16)
    }

    /// Palette with an explicit entry layout.
    pub fn with_format(entries: &'a [u16], format: PaletteFormat) -> Self {
        Self { entries, format }
    }

    /// Raw entries.
    pub fn entries(&self) -> &'a [u16] {
        self.entries
    }

    /// Entry layout.
    pub fn format(&self) -> PaletteFormat {
        self.format
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve `index` to an RGBA8 color.
    pub fn lookup(&self, index: usize) -> Result<Rgba<u8>, TextureError> {
        let Some(&entry) = self.entries.get(index) else {
            log::debug!(
                "palette index {index} out of range ({} entries)",
                self.entries.len()
            );
            return Err(TextureError::PaletteIndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        };
        Ok(match self.format {
            PaletteFormat::Rgba16 => unpack_rgba5551(entry),
            PaletteFormat::Ia16 => unpack_ia88(entry),
        })
    }
}

/// Read big-endian 16-bit palette words. A trailing odd byte is ignored.
pub fn palette_from_be_bytes(data: &[u8]) -> Vec<u16> {
    data.chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect()
}
