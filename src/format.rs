//! Texture format catalog.
//!
//! [`TextureFormat`] names every pixel format the codec understands, keyed by
//! the single-byte code stored in Fast3D texture commands. The free functions
//! [`name_to_code`], [`code_to_name`] and [`bits_per_pixel`] operate on raw
//! codes for callers that never leave the byte representation.

use alloc::string::String;

use crate::TextureError;

/// Color model selected by the high bits of a format code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ColorModel {
    Rgba = 0,
    /// Present in the hardware encoding but never produced or consumed here.
    Yuv = 1,
    ColorIndexed = 2,
    IntensityAlpha = 3,
    Intensity = 4,
}

impl ColorModel {
    /// Resolve the low 3 bits of `bits`. Returns `None` for 5-7.
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits & 7 {
            0 => Some(Self::Rgba),
            1 => Some(Self::Yuv),
            2 => Some(Self::ColorIndexed),
            3 => Some(Self::IntensityAlpha),
            4 => Some(Self::Intensity),
            _ => None,
        }
    }

    /// Short label used in format names ("RGBA", "CI", ...).
    pub fn label(self) -> &'static str {
        match self {
            Self::Rgba => "RGBA",
            Self::Yuv => "YUV",
            Self::ColorIndexed => "CI",
            Self::IntensityAlpha => "IA",
            Self::Intensity => "I",
        }
    }
}

/// Supported texture formats.
///
/// Every variant maps to a fixed `(ColorModel, bits per pixel)` pair.
/// [`OneBitAlpha`](TextureFormat::OneBitAlpha) is not a hardware format; it
/// is a 1-bit coverage mask that shares the `0x00` code slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    OneBitAlpha,
    Rgba16,
    Rgba32,
    Ci4,
    Ci8,
    Ia4,
    Ia8,
    Ia16,
    I4,
    I8,
}

impl TextureFormat {
    /// All formats, in code order.
    pub const ALL: [TextureFormat; 10] = [
        TextureFormat::OneBitAlpha,
        TextureFormat::Rgba16,
        TextureFormat::Rgba32,
        TextureFormat::Ci4,
        TextureFormat::Ci8,
        TextureFormat::Ia4,
        TextureFormat::Ia8,
        TextureFormat::Ia16,
        TextureFormat::I4,
        TextureFormat::I8,
    ];

    /// Resolve a format code. `0x90` is accepted as an alias of I4.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x00 => Some(Self::OneBitAlpha),
            0x10 => Some(Self::Rgba16),
            0x18 => Some(Self::Rgba32),
            0x40 => Some(Self::Ci4),
            0x48 => Some(Self::Ci8),
            0x60 => Some(Self::Ia4),
            0x68 => Some(Self::Ia8),
            0x70 => Some(Self::Ia16),
            0x80 | 0x90 => Some(Self::I4),
            0x88 => Some(Self::I8),
            _ => None,
        }
    }

    /// Canonical format code.
    pub fn code(self) -> u8 {
        match self {
            Self::OneBitAlpha => 0x00,
            Self::Rgba16 => 0x10,
            Self::Rgba32 => 0x18,
            Self::Ci4 => 0x40,
            Self::Ci8 => 0x48,
            Self::Ia4 => 0x60,
            Self::Ia8 => 0x68,
            Self::Ia16 => 0x70,
            Self::I4 => 0x80,
            Self::I8 => 0x88,
        }
    }

    /// Strict name lookup (case-insensitive). See [`name_to_code`] for the
    /// permissive variant that falls back to RGBA16.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.short_name().eq_ignore_ascii_case(name))
    }

    /// Lowercase asset name ("rgba16", "1bpp", ...).
    pub fn short_name(self) -> &'static str {
        match self {
            Self::OneBitAlpha => "1bpp",
            Self::Rgba16 => "rgba16",
            Self::Rgba32 => "rgba32",
            Self::Ci4 => "ci4",
            Self::Ci8 => "ci8",
            Self::Ia4 => "ia4",
            Self::Ia8 => "ia8",
            Self::Ia16 => "ia16",
            Self::I4 => "i4",
            Self::I8 => "i8",
        }
    }

    /// Display name ("RGBA16", "1BPP", ...).
    pub fn name(self) -> &'static str {
        match self {
            Self::OneBitAlpha => "1BPP",
            Self::Rgba16 => "RGBA16",
            Self::Rgba32 => "RGBA32",
            Self::Ci4 => "CI4",
            Self::Ci8 => "CI8",
            Self::Ia4 => "IA4",
            Self::Ia8 => "IA8",
            Self::Ia16 => "IA16",
            Self::I4 => "I4",
            Self::I8 => "I8",
        }
    }

    /// Color model of this format.
    ///
    /// The 1-bit mask reports [`ColorModel::Intensity`]: its single bit drives
    /// luminance and alpha together.
    pub fn color_model(self) -> ColorModel {
        match self {
            Self::Rgba16 | Self::Rgba32 => ColorModel::Rgba,
            Self::Ci4 | Self::Ci8 => ColorModel::ColorIndexed,
            Self::Ia4 | Self::Ia8 | Self::Ia16 => ColorModel::IntensityAlpha,
            Self::OneBitAlpha | Self::I4 | Self::I8 => ColorModel::Intensity,
        }
    }

    /// Bits per pixel: one of 1, 4, 8, 16, 32.
    pub fn bits_per_pixel(self) -> u32 {
        match self {
            Self::OneBitAlpha => 1,
            Self::Ci4 | Self::Ia4 | Self::I4 => 4,
            Self::Ci8 | Self::Ia8 | Self::I8 => 8,
            Self::Rgba16 | Self::Ia16 => 16,
            Self::Rgba32 => 32,
        }
    }

    /// Number of pixels that share one packed byte (1 for byte-aligned formats).
    ///
    /// `width * height` must be a multiple of this for encode and decode.
    pub fn pixels_per_group(self) -> u32 {
        match self.bits_per_pixel() {
            1 => 8,
            4 => 2,
            _ => 1,
        }
    }

    /// Exact packed size in bytes: `ceil(width * height * bpp / 8)`.
    ///
    /// Returns `None` on overflow.
    pub fn packed_len(self, width: u32, height: u32) -> Option<usize> {
        let bits = (width as u64)
            .checked_mul(height as u64)?
            .checked_mul(self.bits_per_pixel() as u64)?;
        usize::try_from(bits.div_ceil(8)).ok()
    }

    /// Whether pixels are palette indices.
    pub fn is_indexed(self) -> bool {
        matches!(self, Self::Ci4 | Self::Ci8)
    }

    /// Whether the packed form stores transparency.
    ///
    /// I4 and I8 have no alpha bits. CI formats carry alpha in the palette.
    pub fn has_alpha(self) -> bool {
        !matches!(self, Self::I4 | Self::I8)
    }

    /// Whether [`encode`](crate::encode) can produce this format.
    pub fn supports_encode(self) -> bool {
        !self.is_indexed()
    }
}

impl core::fmt::Display for TextureFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Permissive name lookup.
///
/// Matches `rgba16`, `rgba32`, `ci4`, `ci8`, `ia4`, `ia8`, `ia16`, `i4`, `i8`
/// and `1bpp` ignoring ASCII case. Anything else resolves to the RGBA16 code.
pub fn name_to_code(name: &str) -> u8 {
    TextureFormat::from_name(name)
        .unwrap_or(TextureFormat::Rgba16)
        .code()
}

/// Build a descriptive label from the color and size fields of a format.
///
/// The low 3 bits of `color_bits` pick the color model (5-7 give `UNKNOWN`)
/// and the low 2 bits of `size_bits` pick 4/8/16/32. Diagnostic only.
pub fn code_to_name(color_bits: u8, size_bits: u8) -> String {
    let model = ColorModel::from_bits(color_bits).map_or("UNKNOWN", ColorModel::label);
    let mut name = String::from(model);
    name.push_str(match size_bits & 3 {
        0 => "4",
        1 => "8",
        2 => "16",
        _ => "32",
    });
    name
}

/// Validate dimensions for `format` and return the packed size in bytes.
///
/// Rejects zero or overflowing dimensions, and pixel counts that do not fill
/// whole packed bytes. Odd sizes are never padded.
pub(crate) fn validate_dimensions(
    format: TextureFormat,
    width: u32,
    height: u32,
) -> Result<usize, TextureError> {
    let pixels = width as u64 * height as u64;
    if pixels == 0 || usize::try_from(pixels).is_err() {
        log::debug!("{format}: rejecting {width}x{height}");
        return Err(TextureError::InvalidDimensions { width, height });
    }
    let group = format.pixels_per_group();
    if pixels % group as u64 != 0 {
        log::debug!("{format}: {width}x{height} is not a multiple of {group} pixels");
        return Err(TextureError::DimensionPrecondition {
            format,
            width,
            height,
            group,
        });
    }
    format
        .packed_len(width, height)
        .ok_or(TextureError::InvalidDimensions { width, height })
}

/// Split a format code into its `(color_bits, size_bits)` fields.
pub fn split_code(code: u8) -> (u8, u8) {
    (code >> 5, (code >> 3) & 3)
}

/// Bits per pixel for a raw format code. Unknown codes report 16.
pub fn bits_per_pixel(code: u8) -> u32 {
    TextureFormat::from_code(code).map_or(16, TextureFormat::bits_per_pixel)
}
