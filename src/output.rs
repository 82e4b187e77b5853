//! Encode and decode output types.

use alloc::vec::Vec;
use imgref::{ImgRef, ImgVec};
use rgb::Rgba;

use crate::{TextureFormat, TextureInfo};

/// Packed texture bytes produced by an encode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeOutput {
    data: Vec<u8>,
    format: TextureFormat,
}

impl EncodeOutput {
    /// Create a new encode output.
    pub fn new(data: Vec<u8>, format: TextureFormat) -> Self {
        Self { data, format }
    }

    /// Consume and return the packed bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Borrow the packed bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Packed byte count.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the output is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The format the pixels were packed into.
    pub fn format(&self) -> TextureFormat {
        self.format
    }
}

impl AsRef<[u8]> for EncodeOutput {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

/// RGBA8 pixels reconstructed by a decode, plus descriptive metadata.
#[derive(Clone, Debug)]
pub struct DecodeOutput {
    pixels: ImgVec<Rgba<u8>>,
    info: TextureInfo,
}

impl DecodeOutput {
    /// Create a new decode output.
    pub fn new(pixels: ImgVec<Rgba<u8>>, info: TextureInfo) -> Self {
        Self { pixels, info }
    }

    /// Texture metadata.
    pub fn info(&self) -> &TextureInfo {
        &self.info
    }

    /// Texture width in pixels.
    pub fn width(&self) -> u32 {
        self.info.width
    }

    /// Texture height in pixels.
    pub fn height(&self) -> u32 {
        self.info.height
    }

    /// Borrow the pixels.
    pub fn pixels(&self) -> ImgRef<'_, Rgba<u8>> {
        self.pixels.as_ref()
    }

    /// Pixel at `(x, y)`, or `None` outside the texture.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        if x >= self.info.width || y >= self.info.height {
            return None;
        }
        let idx = y as usize * self.info.width as usize + x as usize;
        self.pixels.buf().get(idx).copied()
    }

    /// Take the pixels, consuming this output.
    pub fn into_pixels(self) -> ImgVec<Rgba<u8>> {
        self.pixels
    }

    /// Split into pixels and metadata.
    pub fn into_parts(self) -> (ImgVec<Rgba<u8>>, TextureInfo) {
        (self.pixels, self.info)
    }
}
