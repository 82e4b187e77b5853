//! Codec error type.

use crate::TextureFormat;
use crate::limits::LimitExceeded;

/// Errors from texture encode and decode operations.
///
/// All failures are deterministic for a given input; nothing is retried.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TextureError {
    /// The byte is not a known format code.
    #[error("unknown texture format code {0:#04x}")]
    UnknownFormat(u8),
    /// Encoding into this format is not implemented (CI4, CI8).
    #[error("encoding to {0} is not supported")]
    UnsupportedEncode(TextureFormat),
    /// Width or height is zero, or the pixel count overflows.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// The dimensions do not divide into whole packed bytes for this format.
    #[error("{format} needs a pixel count divisible by {group}, got {width}x{height}")]
    DimensionPrecondition {
        /// Target format.
        format: TextureFormat,
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
        /// Pixels per packed byte (or row alignment for 1bpp encode).
        group: u32,
    },
    /// Packed input is shorter than the dimensions require.
    #[error("packed data is {actual} bytes, expected at least {expected}")]
    InsufficientData {
        /// Bytes required.
        expected: usize,
        /// Bytes supplied.
        actual: usize,
    },
    /// A color-indexed format was decoded without a palette.
    #[error("{0} decode requires a palette")]
    MissingPalette(TextureFormat),
    /// A packed index points past the end of the palette.
    #[error("palette index {index} out of range for {len} entries")]
    PaletteIndexOutOfRange {
        /// Index read from the packed data.
        index: usize,
        /// Palette length.
        len: usize,
    },
    /// A configured resource limit rejected the operation.
    #[error(transparent)]
    Limit(#[from] LimitExceeded),
}
