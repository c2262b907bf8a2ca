//! Decoded spritesheet pixels.
//!
//! A [`PixelBuffer`] is the CPU-side copy of a spritesheet: tightly packed
//! RGBA8 rows at the image's native resolution. It is produced once at load
//! time and owned by the sprite for as long as the texture made from it.

use std::path::Path;

use log::debug;

use crate::error::{Result, SpriteError};

/// Bytes per pixel of every buffer produced by [`PixelBuffer::decode`].
pub const RGBA8_BYTES_PER_PIXEL: usize = 4;

/// Exclusively owned RGBA8 pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    /// Channel count of the file before conversion to RGBA.
    source_channels: u8,
    bytes: Vec<u8>,
}

impl PixelBuffer {
    /// Decode an image file into RGBA8.
    pub fn decode(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|source| SpriteError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let source_channels = image.color().channel_count();
        let rgba = image.into_rgba8();
        let (width, height) = rgba.dimensions();
        debug!(
            "Decoded {} ({}x{}, {} channels)",
            path.display(),
            width,
            height,
            source_channels
        );
        Ok(Self {
            width,
            height,
            source_channels,
            bytes: rgba.into_raw(),
        })
    }

    /// Wrap raw RGBA8 bytes. Returns `None` if the length does not match
    /// `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, bytes: Vec<u8>) -> Option<Self> {
        let expected = width as usize * height as usize * RGBA8_BYTES_PER_PIXEL;
        if bytes.len() != expected {
            return None;
        }
        Some(Self {
            width,
            height,
            source_channels: RGBA8_BYTES_PER_PIXEL as u8,
            bytes,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn source_channels(&self) -> u8 {
        self.source_channels
    }

    /// Length of one pixel row in bytes.
    pub fn pitch(&self) -> usize {
        self.width as usize * RGBA8_BYTES_PER_PIXEL
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
