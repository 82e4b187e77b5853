//! RGBA8 → packed texture encoders.
//!
//! Each encoder walks the pixels in row-major order and appends packed bytes.
//! Sub-byte formats pack the earlier pixel into the high bits. Quantization
//! truncates, so re-encoding a decoded texture reproduces the same bytes.

use alloc::vec::Vec;
use imgref::ImgRef;
use rgb::Rgba;

use crate::format::validate_dimensions;
use crate::pixel::{intensity, opaque_bit, pack_rgba5551, quantize};
use crate::{EncodeOutput, ResourceLimits, TextureError, TextureFormat};

/// Encode `img` into the format named by `format_code`.
///
/// CI4 and CI8 return [`TextureError::UnsupportedEncode`]; unknown codes
/// return [`TextureError::UnknownFormat`].
pub fn encode(format_code: u8, img: ImgRef<'_, Rgba<u8>>) -> Result<EncodeOutput, TextureError> {
    let format =
        TextureFormat::from_code(format_code).ok_or(TextureError::UnknownFormat(format_code))?;
    EncodeJob::new(format).encode(img)
}

/// Configured encode of one texture format.
///
/// Jobs are plain values; one job can encode any number of images, from any
/// number of threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodeJob {
    format: TextureFormat,
    limits: ResourceLimits,
}

impl EncodeJob {
    /// Encode job for `format` with no resource limits.
    pub fn new(format: TextureFormat) -> Self {
        Self {
            format,
            limits: ResourceLimits::none(),
        }
    }

    /// Apply resource limits, checked before the output is allocated.
    pub fn with_limits(mut self, limits: ResourceLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Target format.
    pub fn format(&self) -> TextureFormat {
        self.format
    }

    /// Pack `img`.
    ///
    /// # Errors
    ///
    /// - [`TextureError::UnsupportedEncode`] for CI4/CI8.
    /// - [`TextureError::DimensionPrecondition`] when the pixel count is not a
    ///   multiple of the format's pixels per byte, or the 1bpp width is not a
    ///   multiple of 8.
    /// - [`TextureError::Limit`] when a configured limit is exceeded.
    pub fn encode(&self, img: ImgRef<'_, Rgba<u8>>) -> Result<EncodeOutput, TextureError> {
        let format = self.format;
        if !format.supports_encode() {
            log::debug!("refusing to encode {format}");
            return Err(TextureError::UnsupportedEncode(format));
        }
        let width = img.width() as u32;
        let height = img.height() as u32;
        let len = validate_dimensions(format, width, height)?;
        if format == TextureFormat::OneBitAlpha && width % 8 != 0 {
            return Err(TextureError::DimensionPrecondition {
                format,
                width,
                height,
                group: 8,
            });
        }
        self.limits.check_dimensions(width, height)?;
        self.limits.check_memory(len as u64)?;

        let (pixels, _, _) = img.to_contiguous_buf();
        let mut data = Vec::with_capacity(len);
        match format {
            TextureFormat::OneBitAlpha => encode_1bpp(&pixels, &mut data),
            TextureFormat::Rgba16 => encode_rgba16(&pixels, &mut data),
            TextureFormat::Rgba32 => encode_rgba32(&pixels, &mut data),
            TextureFormat::Ia4 => encode_ia4(&pixels, &mut data),
            TextureFormat::Ia8 => encode_ia8(&pixels, &mut data),
            TextureFormat::Ia16 => encode_ia16(&pixels, &mut data),
            TextureFormat::I4 => encode_i4(&pixels, &mut data),
            TextureFormat::I8 => encode_i8(&pixels, &mut data),
            TextureFormat::Ci4 | TextureFormat::Ci8 => {
                return Err(TextureError::UnsupportedEncode(format));
            }
        }
        debug_assert_eq!(data.len(), len);
        log::trace!("encoded {width}x{height} to {format}: {} bytes", data.len());
        Ok(EncodeOutput::new(data, format))
    }
}

/// Coverage mask: bit set where alpha is non-zero, MSB first.
fn encode_1bpp(pixels: &[Rgba<u8>], out: &mut Vec<u8>) {
    out.extend(pixels.chunks_exact(8).map(|eight| {
        eight
            .iter()
            .fold(0u8, |byte, px| (byte << 1) | u8::from(px.a > 0))
    }));
}

fn encode_rgba16(pixels: &[Rgba<u8>], out: &mut Vec<u8>) {
    for &px in pixels {
        out.extend_from_slice(&pack_rgba5551(px).to_be_bytes());
    }
}

fn encode_rgba32(pixels: &[Rgba<u8>], out: &mut Vec<u8>) {
    for px in pixels {
        out.extend_from_slice(&[px.r, px.g, px.b, px.a]);
    }
}

/// 3-bit intensity and the opaque flag per nibble.
fn encode_ia4(pixels: &[Rgba<u8>], out: &mut Vec<u8>) {
    fn nibble(px: Rgba<u8>) -> u8 {
        (quantize(intensity(px), 8) << 1) | opaque_bit(px)
    }
    out.extend(
        pixels
            .chunks_exact(2)
            .map(|pair| (nibble(pair[0]) << 4) | nibble(pair[1])),
    );
}

fn encode_ia8(pixels: &[Rgba<u8>], out: &mut Vec<u8>) {
    out.extend(
        pixels
            .iter()
            .map(|&px| (quantize(intensity(px), 16) << 4) | quantize(px.a, 16)),
    );
}

fn encode_ia16(pixels: &[Rgba<u8>], out: &mut Vec<u8>) {
    for &px in pixels {
        out.extend_from_slice(&[intensity(px), px.a]);
    }
}

fn encode_i4(pixels: &[Rgba<u8>], out: &mut Vec<u8>) {
    out.extend(pixels.chunks_exact(2).map(|pair| {
        (quantize(intensity(pair[0]), 16) << 4) | quantize(intensity(pair[1]), 16)
    }));
}

fn encode_i8(pixels: &[Rgba<u8>], out: &mut Vec<u8>) {
    out.extend(pixels.iter().map(|&px| intensity(px)));
}
