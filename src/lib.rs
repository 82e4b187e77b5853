//! Fast3D (N64 RDP) texture codec.
//!
//! Converts between RGBA8 pixel buffers and the packed texel layouts the RDP
//! samples from:
//!
//! - [`encode`] / [`EncodeJob`]: RGBA8 → packed bytes for every non-indexed format
//! - [`decode`] / [`DecodeJob`]: packed bytes (+ [`Palette`] for CI4/CI8) → RGBA8
//! - [`TextureFormat`]: format codes, names, bit depths, packed sizes
//! - [`TextureInfo`]: decoded dimensions and display labels
//! - [`ResourceLimits`]: optional caps checked before allocation
//!
//! Format codes are single bytes: the color model sits in the top three bits
//! and the pixel size in the next two (see [`split_code`]). Multi-byte values
//! are big-endian.
//!
//! ```
//! use f3d_texture::{Img, Rgba, decode, encode};
//!
//! let img = Img::new(vec![Rgba::new(255, 255, 255, 255); 4], 2, 2);
//! let packed = encode(0x10, img.as_ref())?;
//! assert_eq!(packed.bytes(), &[0xFF; 8]);
//!
//! let decoded = decode(0x10, packed.bytes(), 2, 2, None)?;
//! assert_eq!(decoded.pixel(0, 0), Some(Rgba::new(248, 248, 248, 255)));
//! # Ok::<(), f3d_texture::TextureError>(())
//! ```
//!
//! All operations are pure; inputs are borrowed and outputs freshly allocated,
//! so calls on independent data can run on any number of threads.

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod encode;
mod error;
mod format;
mod info;
mod limits;
mod output;
mod palette;
mod pixel;

pub use decode::{DecodeJob, decode};
pub use encode::{EncodeJob, encode};
pub use error::TextureError;
pub use format::{
    ColorModel, TextureFormat, bits_per_pixel, code_to_name, name_to_code, split_code,
};
pub use info::TextureInfo;
pub use limits::{LimitExceeded, ResourceLimits};
pub use output::{DecodeOutput, EncodeOutput};
pub use palette::{Palette, PaletteFormat, palette_from_be_bytes};
pub use pixel::{PixelBuffer, solid_color};

// Re-exports so callers need not depend on imgref/rgb directly.
pub use imgref::{Img, ImgRef, ImgVec};
pub use rgb;
pub use rgb::Rgba;
