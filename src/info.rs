//! Texture metadata attached to decoded results.

use alloc::format;
use alloc::string::String;

use crate::TextureFormat;

/// Describes a decoded texture.
///
/// Informational only: nothing in the codec dispatches on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct TextureInfo {
    /// Format the pixels were decoded from.
    pub format: TextureFormat,
    /// Texture width in pixels.
    pub width: u32,
    /// Texture height in pixels.
    pub height: u32,
}

impl TextureInfo {
    /// Create texture info.
    pub fn new(format: TextureFormat, width: u32, height: u32) -> Self {
        Self {
            format,
            width,
            height,
        }
    }

    /// Whether the source format stores transparency.
    pub fn has_alpha(&self) -> bool {
        self.format.has_alpha()
    }

    /// Size of the packed source data in bytes.
    pub fn packed_len(&self) -> Option<usize> {
        self.format.packed_len(self.width, self.height)
    }

    /// Display lines for a texture inspector:
    /// `["Format: RGBA16", "Width: 32", "Height: 32"]`.
    pub fn labels(&self) -> [String; 3] {
        [
            format!("Format: {}", self.format),
            format!("Width: {}", self.width),
            format!("Height: {}", self.height),
        ]
    }
}

impl core::fmt::Display for TextureInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}x{}", self.format, self.width, self.height)
    }
}
