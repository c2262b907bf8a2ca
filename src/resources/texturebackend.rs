//! Rendering backend seam for sprites.
//!
//! [`TextureBackend`] turns a decoded [`PixelBuffer`] into a GPU texture and
//! [`Blitter`] draws a sub-rectangle of that texture. raylib implements both:
//! textures through [`RaylibTextures`], blits through any raylib draw handle.
//! Tests plug in their own implementations so sprite logic runs headless.

use std::ffi::c_void;

use raylib::ffi;
use raylib::prelude::*;

use crate::error::{Result, SpriteError};
use crate::resources::pixelbuffer::PixelBuffer;

/// Creates textures from decoded pixels.
pub trait TextureBackend {
    /// Move-only texture handle. Releasing it is the owner's job.
    type Texture;

    /// Create a texture of the buffer's size and upload the pixels into it.
    fn upload(&mut self, pixels: &PixelBuffer) -> Result<Self::Texture>;
}

/// Draws a region of a texture.
pub trait Blitter<T> {
    /// Copy `source` (texture pixels) into `dest` (screen), rotated by
    /// `rotation` degrees around `pivot`, which is relative to `dest`'s
    /// top-left corner.
    fn blit(&mut self, texture: &T, source: Rectangle, dest: Rectangle, pivot: Vector2, rotation: f32);
}

/// raylib texture creation. Holding the handle and the thread token proves
/// the window (and its GL context) exists and that uploads happen on the
/// main thread.
pub struct RaylibTextures<'a> {
    _rl: &'a mut RaylibHandle,
    _thread: &'a RaylibThread,
}

impl<'a> RaylibTextures<'a> {
    pub fn new(rl: &'a mut RaylibHandle, thread: &'a RaylibThread) -> Self {
        Self {
            _rl: rl,
            _thread: thread,
        }
    }
}

impl TextureBackend for RaylibTextures<'_> {
    type Texture = Texture2D;

    fn upload(&mut self, pixels: &PixelBuffer) -> Result<Texture2D> {
        let width = i32::try_from(pixels.width())
            .map_err(|_| SpriteError::Upload(format!("width {} too large", pixels.width())))?;
        let height = i32::try_from(pixels.height())
            .map_err(|_| SpriteError::Upload(format!("height {} too large", pixels.height())))?;

        // Borrowed view: LoadTextureFromImage copies the data and never frees it.
        let view = ffi::Image {
            data: pixels.as_bytes().as_ptr() as *mut c_void,
            width,
            height,
            mipmaps: 1,
            format: ffi::PixelFormat::PIXELFORMAT_UNCOMPRESSED_R8G8B8A8 as i32,
        };
        let raw = unsafe { ffi::LoadTextureFromImage(view) };
        if raw.id == 0 {
            return Err(SpriteError::Upload(format!(
                "raylib rejected a {}x{} RGBA8 texture",
                width, height
            )));
        }
        // SAFETY: id is non-zero so raylib owns a live texture we now manage.
        Ok(unsafe { Texture2D::from_raw(raw) })
    }
}

impl<D: RaylibDraw> Blitter<Texture2D> for D {
    fn blit(
        &mut self,
        texture: &Texture2D,
        source: Rectangle,
        dest: Rectangle,
        pivot: Vector2,
        rotation: f32,
    ) {
        self.draw_texture_pro(texture, source, dest, pivot, rotation, Color::WHITE);
    }
}
