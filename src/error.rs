//! Sprite loading errors.
//!
//! Loading is the only fallible sprite operation. Every variant is returned
//! after any partially built state (decoded pixels, texture) has already been
//! dropped, so callers never need to clean up after a failed load.

use std::path::PathBuf;

use thiserror::Error;

/// Reasons [`Sprite::load`](crate::components::sprite::Sprite::load) can fail.
#[derive(Debug, Error)]
pub enum SpriteError {
    /// The frame grid has zero columns or zero rows.
    #[error("invalid frame grid {columns}x{rows}: both dimensions must be at least 1")]
    InvalidGrid { columns: u32, rows: u32 },

    /// The image file could not be read or parsed.
    #[error("could not load pixels from {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The rendering backend refused to create or fill the texture.
    #[error("texture upload failed: {0}")]
    Upload(String),
}

pub type Result<T> = std::result::Result<T, SpriteError>;
