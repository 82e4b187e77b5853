//! RGBA8 pixel buffers and per-channel conversions.
//!
//! Uses `imgref::ImgVec` for 2D pixel data with `rgb::Rgba<u8>` pixels.
//! Quantization always truncates; expansion multiplies by the level step and
//! never replicates high bits, so a full-scale 5-bit channel decodes to 248.

use alloc::vec;
use imgref::ImgVec;
use rgb::Rgba;

/// Owned RGBA8 texture, row-major, top-left origin.
pub type PixelBuffer = ImgVec<Rgba<u8>>;

/// Build a 1×1 texture filled with `color`.
pub fn solid_color(color: Rgba<u8>) -> PixelBuffer {
    ImgVec::new(vec![color], 1, 1)
}

/// Integer mean of the red, green and blue channels.
#[inline]
pub(crate) fn intensity(px: Rgba<u8>) -> u8 {
    ((px.r as u16 + px.g as u16 + px.b as u16) / 3) as u8
}

/// Truncate an 8-bit value to `levels` steps: `floor(value / 255 * levels)`,
/// saturating at `levels - 1` so full scale stays representable.
#[inline]
pub(crate) fn quantize(value: u8, levels: u32) -> u8 {
    (value as u32 * levels / 255).min(levels - 1) as u8
}

/// 1 if the pixel is fully opaque, else 0.
#[inline]
pub(crate) fn opaque_bit(px: Rgba<u8>) -> u8 {
    u8::from(px.a == 255)
}

/// Gray pixel with R=G=B=`value`.
#[inline]
pub(crate) fn gray(value: u8, alpha: u8) -> Rgba<u8> {
    Rgba::new(value, value, value, alpha)
}

/// Pack into the `RRRRRGGGGGBBBBBA` word.
#[inline]
pub(crate) fn pack_rgba5551(px: Rgba<u8>) -> u16 {
    let r = quantize(px.r, 32) as u16;
    let g = quantize(px.g, 32) as u16;
    let b = quantize(px.b, 32) as u16;
    (r << 11) | (g << 6) | (b << 1) | opaque_bit(px) as u16
}

/// Expand an `RRRRRGGGGGBBBBBA` word.
#[inline]
pub(crate) fn unpack_rgba5551(word: u16) -> Rgba<u8> {
    Rgba::new(
        ((word >> 11) & 0x1F) as u8 * 8,
        ((word >> 6) & 0x1F) as u8 * 8,
        ((word >> 1) & 0x1F) as u8 * 8,
        if word & 1 != 0 { 0xFF } else { 0x00 },
    )
}

/// Expand an intensity/alpha word (high byte intensity, low byte alpha).
#[inline]
pub(crate) fn unpack_ia88(word: u16) -> Rgba<u8> {
    let [i, a] = word.to_be_bytes();
    gray(i, a)
}
