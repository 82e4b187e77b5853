//! Packed texture → RGBA8 decoders.
//!
//! Decoders expand each packed field by its level step (×8 for 5-bit, ×16 for
//! 4-bit, ×32 for 3-bit). They do not replicate high bits into the low bits,
//! so full scale decodes below 255 for every field narrower than 8 bits.

use alloc::vec::Vec;
use imgref::ImgVec;
use rgb::Rgba;

use crate::format::validate_dimensions;
use crate::pixel::{gray, unpack_rgba5551};
use crate::{DecodeOutput, Palette, ResourceLimits, TextureError, TextureFormat, TextureInfo};

/// Decode `data` as a `width`×`height` texture in the format named by
/// `format_code`.
///
/// `palette` is required for CI4 and CI8 and ignored otherwise.
pub fn decode(
    format_code: u8,
    data: &[u8],
    width: u32,
    height: u32,
    palette: Option<Palette<'_>>,
) -> Result<DecodeOutput, TextureError> {
    let format =
        TextureFormat::from_code(format_code).ok_or(TextureError::UnknownFormat(format_code))?;
    let mut job = DecodeJob::new(format);
    if let Some(palette) = palette {
        job = job.with_palette(palette);
    }
    job.decode(data, width, height)
}

/// Configured decode of one texture format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeJob<'a> {
    format: TextureFormat,
    palette: Option<Palette<'a>>,
    limits: ResourceLimits,
}

impl<'a> DecodeJob<'a> {
    /// Decode job for `format` with no palette and no resource limits.
    pub fn new(format: TextureFormat) -> Self {
        Self {
            format,
            palette: None,
            limits: ResourceLimits::none(),
        }
    }

    /// Palette for CI4/CI8 lookups.
    pub fn with_palette(mut self, palette: Palette<'a>) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Apply resource limits, checked before the pixel buffer is allocated.
    pub fn with_limits(mut self, limits: ResourceLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Source format.
    pub fn format(&self) -> TextureFormat {
        self.format
    }

    /// Expand `data` into RGBA8 pixels.
    ///
    /// Bytes past the packed length are ignored.
    ///
    /// # Errors
    ///
    /// - [`TextureError::DimensionPrecondition`] when the pixel count does not
    ///   fill whole packed bytes.
    /// - [`TextureError::InsufficientData`] when `data` is too short.
    /// - [`TextureError::MissingPalette`] for CI formats without a palette.
    /// - [`TextureError::PaletteIndexOutOfRange`] when an index is past the
    ///   palette end.
    /// - [`TextureError::Limit`] when a configured limit is exceeded.
    pub fn decode(&self, data: &[u8], width: u32, height: u32) -> Result<DecodeOutput, TextureError> {
        let format = self.format;
        let len = validate_dimensions(format, width, height)?;
        self.limits.check_dimensions(width, height)?;
        let pixel_count = width as usize * height as usize;
        self.limits
            .check_memory(pixel_count as u64 * size_of::<Rgba<u8>>() as u64)?;
        if data.len() < len {
            log::debug!("{format}: need {len} bytes, got {}", data.len());
            return Err(TextureError::InsufficientData {
                expected: len,
                actual: data.len(),
            });
        }
        let data = &data[..len];

        let mut pixels = Vec::with_capacity(pixel_count);
        match format {
            TextureFormat::OneBitAlpha => decode_1bpp(data, &mut pixels),
            TextureFormat::Rgba16 => decode_rgba16(data, &mut pixels),
            TextureFormat::Rgba32 => decode_rgba32(data, &mut pixels),
            TextureFormat::Ia4 => decode_ia4(data, &mut pixels),
            TextureFormat::Ia8 => decode_ia8(data, &mut pixels),
            TextureFormat::Ia16 => decode_ia16(data, &mut pixels),
            TextureFormat::I4 => decode_i4(data, &mut pixels),
            TextureFormat::I8 => decode_i8(data, &mut pixels),
            TextureFormat::Ci4 => decode_ci4(data, self.palette(format)?, &mut pixels)?,
            TextureFormat::Ci8 => decode_ci8(data, self.palette(format)?, &mut pixels)?,
        }
        debug_assert_eq!(pixels.len(), pixel_count);
        log::trace!("decoded {len} bytes of {format} to {width}x{height}");

        Ok(DecodeOutput::new(
            ImgVec::new(pixels, width as usize, height as usize),
            TextureInfo::new(format, width, height),
        ))
    }

    fn palette(&self, format: TextureFormat) -> Result<&Palette<'a>, TextureError> {
        self.palette
            .as_ref()
            .ok_or(TextureError::MissingPalette(format))
    }
}

/// Each bit drives luminance and alpha together: opaque white or clear black.
fn decode_1bpp(data: &[u8], out: &mut Vec<Rgba<u8>>) {
    for &byte in data {
        for shift in (0..8).rev() {
            let v = if (byte >> shift) & 1 != 0 { 0xFF } else { 0x00 };
            out.push(gray(v, v));
        }
    }
}

fn decode_rgba16(data: &[u8], out: &mut Vec<Rgba<u8>>) {
    out.extend(
        data.chunks_exact(2)
            .map(|word| unpack_rgba5551(u16::from_be_bytes([word[0], word[1]]))),
    );
}

fn decode_rgba32(data: &[u8], out: &mut Vec<Rgba<u8>>) {
    out.extend(
        data.chunks_exact(4)
            .map(|px| Rgba::new(px[0], px[1], px[2], px[3])),
    );
}

fn decode_ia4(data: &[u8], out: &mut Vec<Rgba<u8>>) {
    fn expand(nibble: u8) -> Rgba<u8> {
        let alpha = if nibble & 1 != 0 { 0xFF } else { 0x00 };
        gray((nibble >> 1) * 32, alpha)
    }
    for &byte in data {
        out.push(expand(byte >> 4));
        out.push(expand(byte & 0xF));
    }
}

fn decode_ia8(data: &[u8], out: &mut Vec<Rgba<u8>>) {
    out.extend(
        data.iter()
            .map(|&byte| gray((byte >> 4) * 16, (byte & 0xF) * 16)),
    );
}

fn decode_ia16(data: &[u8], out: &mut Vec<Rgba<u8>>) {
    out.extend(data.chunks_exact(2).map(|ia| gray(ia[0], ia[1])));
}

/// I4 has no alpha field; pixels decode opaque.
fn decode_i4(data: &[u8], out: &mut Vec<Rgba<u8>>) {
    for &byte in data {
        out.push(gray((byte >> 4) * 16, 0xFF));
        out.push(gray((byte & 0xF) * 16, 0xFF));
    }
}

/// Alpha mirrors intensity, as existing assets expect. I8 stores no alpha,
/// so whether this tie was deliberate upstream is unknown; keep it for
/// compatibility.
fn decode_i8(data: &[u8], out: &mut Vec<Rgba<u8>>) {
    out.extend(data.iter().map(|&i| gray(i, i)));
}

fn decode_ci4(data: &[u8], palette: &Palette<'_>, out: &mut Vec<Rgba<u8>>) -> Result<(), TextureError> {
    for &byte in data {
        out.push(palette.lookup((byte >> 4) as usize)?);
        out.push(palette.lookup((byte & 0xF) as usize)?);
    }
    Ok(())
}

fn decode_ci8(data: &[u8], palette: &Palette<'_>, out: &mut Vec<Rgba<u8>>) -> Result<(), TextureError> {
    for &index in data {
        out.push(palette.lookup(index as usize)?);
    }
    Ok(())
}
