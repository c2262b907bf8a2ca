//! Spritesheet sprite component.
//!
//! A [`Sprite`] owns a decoded spritesheet and the texture made from it. The
//! sheet is cut into a `columns x rows` grid of equally sized frames; the
//! current column/row select which frame is drawn.
//!
//! - Columns are driven by time through [`Sprite::animate`].
//! - Rows are only changed by the caller and usually represent a state such
//!   as idle/walk/attack.
//!
//! Placement (position, scale, origin, rotation) is public and may be changed
//! freely every frame. The frame indices and the source rectangle are private
//! so the rectangle can never drift from the indices.
//!
//! The texture type is generic so the same logic runs against raylib's
//! `Texture2D` in the game and against plain values in tests.

use std::path::Path;

use bevy_ecs::prelude::Component;
use log::{debug, info};
use raylib::prelude::{Rectangle, Vector2};

use crate::error::{Result, SpriteError};
use crate::resources::pixelbuffer::PixelBuffer;
use crate::resources::texturebackend::{Blitter, TextureBackend};

/// Seconds each frame stays on screen unless changed.
pub const DEFAULT_FRAME_PERIOD: f32 = 0.25;
/// Multiplier applied to elapsed time before it is accumulated.
pub const DEFAULT_ANIMATION_RATE: f32 = 1.0;

#[derive(Component, Debug)]
pub struct Sprite<T> {
    texture: T,
    pixels: PixelBuffer,
    columns: u32,
    rows: u32,
    frame_width: u32,
    frame_height: u32,
    column: u32,
    row: u32,
    frame_rect: Rectangle,
    accumulated_time: f32,
    /// World position of the pivot.
    pub position: Vector2,
    /// Per-axis multiplier of the frame size.
    pub scale: Vector2,
    /// Normalized pivot inside the destination rectangle (0..1 per axis).
    pub origin: Vector2,
    /// Degrees, clockwise, around the pivot.
    pub rotation: f32,
    /// Seconds per animation frame.
    pub frame_period: f32,
    /// Playback speed multiplier (hspeed).
    pub animation_rate: f32,
}

impl<T> Sprite<T> {
    /// Decode `path`, upload it through `backend` and cut it into a
    /// `columns x rows` frame grid.
    ///
    /// On any error nothing is kept: the decoded buffer and any texture are
    /// dropped before returning.
    pub fn load<B>(backend: &mut B, path: impl AsRef<Path>, columns: u32, rows: u32) -> Result<Self>
    where
        B: TextureBackend<Texture = T>,
    {
        let path = path.as_ref();
        if columns == 0 || rows == 0 {
            return Err(SpriteError::InvalidGrid { columns, rows });
        }
        let pixels = PixelBuffer::decode(path)?;
        let texture = backend.upload(&pixels)?;
        let sprite = Self::from_parts(texture, pixels, columns, rows)?;
        info!(
            "Loaded spritesheet {} ({}x{}, {}x{} frames of {}x{})",
            path.display(),
            sprite.source_width(),
            sprite.source_height(),
            columns,
            rows,
            sprite.frame_width,
            sprite.frame_height
        );
        Ok(sprite)
    }

    /// Build a sprite from an already uploaded texture and its pixels.
    pub fn from_parts(texture: T, pixels: PixelBuffer, columns: u32, rows: u32) -> Result<Self> {
        if columns == 0 || rows == 0 {
            return Err(SpriteError::InvalidGrid { columns, rows });
        }
        // Remainders are dropped: a 33px wide sheet with 2 columns has 16px frames.
        let frame_width = pixels.width() / columns;
        let frame_height = pixels.height() / rows;
        let mut sprite = Self {
            texture,
            pixels,
            columns,
            rows,
            frame_width,
            frame_height,
            column: 0,
            row: 0,
            frame_rect: Rectangle {
                x: 0.0,
                y: 0.0,
                width: 0.0,
                height: 0.0,
            },
            accumulated_time: 0.0,
            position: Vector2 { x: 0.0, y: 0.0 },
            scale: Vector2 { x: 1.0, y: 1.0 },
            origin: Vector2 { x: 0.5, y: 0.5 },
            rotation: 0.0,
            frame_period: DEFAULT_FRAME_PERIOD,
            animation_rate: DEFAULT_ANIMATION_RATE,
        };
        sprite.update_frame();
        Ok(sprite)
    }

    /// Release the texture and the pixel buffer together.
    pub fn free(self) {
        debug!(
            "Freeing sprite ({}x{} sheet)",
            self.source_width(),
            self.source_height()
        );
        drop(self);
    }

    pub fn texture(&self) -> &T {
        &self.texture
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn source_width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn source_height(&self) -> u32 {
        self.pixels.height()
    }

    /// Number of frame columns (hframes).
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of frame rows (vframes).
    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn frame_width(&self) -> u32 {
        self.frame_width
    }

    pub fn frame_height(&self) -> u32 {
        self.frame_height
    }

    /// Current column (hframe).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Current row (vframe).
    pub fn row(&self) -> u32 {
        self.row
    }

    /// Source rectangle of the current frame, in texture pixels.
    pub fn frame_rect(&self) -> Rectangle {
        self.frame_rect
    }

    pub fn accumulated_time(&self) -> f32 {
        self.accumulated_time
    }

    /// Select a column. Out of range requests wrap by one step only: anything
    /// negative becomes the last column and anything past the end becomes 0.
    pub fn set_column(&mut self, column: i32) {
        self.column = wrap_once(column, self.columns);
        self.update_frame();
    }

    /// Select a row, with the same wrapping as [`Sprite::set_column`].
    pub fn set_row(&mut self, row: i32) {
        self.row = wrap_once(row, self.rows);
        self.update_frame();
    }

    pub fn next_column(&mut self) {
        self.set_column(self.column as i32 + 1);
    }

    pub fn previous_column(&mut self) {
        self.set_column(self.column as i32 - 1);
    }

    pub fn next_row(&mut self) {
        self.set_row(self.row as i32 + 1);
    }

    pub fn previous_row(&mut self) {
        self.set_row(self.row as i32 - 1);
    }

    /// Accumulate `elapsed` seconds (scaled by `animation_rate`) and advance
    /// one column once a full `frame_period` has built up.
    ///
    /// At most one frame is advanced per call; surplus time stays in the
    /// accumulator for the next call.
    pub fn animate(&mut self, elapsed: f32) {
        self.accumulated_time += elapsed * self.animation_rate;
        if self.accumulated_time >= self.frame_period {
            self.accumulated_time -= self.frame_period;
            self.next_column();
        }
    }

    /// Destination rectangle and rotation pivot for the current placement.
    ///
    /// The pivot is relative to the rectangle's top-left corner, which is
    /// what raylib's `DrawTexturePro` expects.
    pub fn dest_rect(&self) -> (Rectangle, Vector2) {
        let width = self.frame_width as f32 * self.scale.x;
        let height = self.frame_height as f32 * self.scale.y;
        let rect = Rectangle {
            x: self.position.x - self.origin.x * width,
            y: self.position.y - self.origin.y * height,
            width,
            height,
        };
        let pivot = Vector2 {
            x: self.origin.x * width,
            y: self.origin.y * height,
        };
        (rect, pivot)
    }

    /// Blit the current frame.
    pub fn draw<B: Blitter<T>>(&self, blitter: &mut B) {
        let (dest, pivot) = self.dest_rect();
        blitter.blit(&self.texture, self.frame_rect, dest, pivot, self.rotation);
    }

    // The only place frame_rect is written.
    fn update_frame(&mut self) {
        self.frame_rect = Rectangle {
            x: (self.column * self.frame_width) as f32,
            y: (self.row * self.frame_height) as f32,
            width: self.frame_width as f32,
            height: self.frame_height as f32,
        };
    }
}

fn wrap_once(requested: i32, count: u32) -> u32 {
    if requested < 0 {
        count - 1
    } else if requested as u32 >= count {
        0
    } else {
        requested as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// 64x128 sheet with 2 columns and 4 rows: 32x32 frames.
    fn make_sprite() -> Sprite<u32> {
        let pixels = PixelBuffer::from_rgba8(64, 128, vec![0; 64 * 128 * 4]).unwrap();
        Sprite::from_parts(7, pixels, 2, 4).unwrap()
    }

    fn assert_frame_rect_matches_indices(sprite: &Sprite<u32>) {
        let rect = sprite.frame_rect();
        assert!(approx_eq(rect.x, (sprite.column() * sprite.frame_width()) as f32));
        assert!(approx_eq(rect.y, (sprite.row() * sprite.frame_height()) as f32));
        assert!(approx_eq(rect.width, sprite.frame_width() as f32));
        assert!(approx_eq(rect.height, sprite.frame_height() as f32));
    }

    #[test]
    fn test_defaults() {
        let sprite = make_sprite();
        assert_eq!(sprite.frame_width(), 32);
        assert_eq!(sprite.frame_height(), 32);
        assert_eq!(sprite.column(), 0);
        assert_eq!(sprite.row(), 0);
        assert_eq!(*sprite.texture(), 7);
        assert!(approx_eq(sprite.scale.x, 1.0));
        assert!(approx_eq(sprite.scale.y, 1.0));
        assert!(approx_eq(sprite.origin.x, 0.5));
        assert!(approx_eq(sprite.origin.y, 0.5));
        assert!(approx_eq(sprite.rotation, 0.0));
        assert!(approx_eq(sprite.frame_period, 0.25));
        assert!(approx_eq(sprite.animation_rate, 1.0));
        assert!(approx_eq(sprite.accumulated_time(), 0.0));
        assert_frame_rect_matches_indices(&sprite);
    }

    #[test]
    fn test_frame_size_truncates_remainder() {
        let pixels = PixelBuffer::from_rgba8(33, 10, vec![0; 33 * 10 * 4]).unwrap();
        let sprite = Sprite::from_parts((), pixels, 2, 3).unwrap();
        assert_eq!(sprite.frame_width(), 16);
        assert_eq!(sprite.frame_height(), 3);
    }

    #[test]
    fn test_zero_grid_rejected() {
        let pixels = PixelBuffer::from_rgba8(2, 2, vec![0; 16]).unwrap();
        let err = Sprite::from_parts((), pixels.clone(), 0, 1).unwrap_err();
        assert!(matches!(err, SpriteError::InvalidGrid { columns: 0, rows: 1 }));
        let err = Sprite::from_parts((), pixels, 1, 0).unwrap_err();
        assert!(matches!(err, SpriteError::InvalidGrid { columns: 1, rows: 0 }));
    }

    #[test]
    fn test_set_column_in_range() {
        let mut sprite = make_sprite();
        sprite.set_column(1);
        assert_eq!(sprite.column(), 1);
        assert_frame_rect_matches_indices(&sprite);
        assert!(approx_eq(sprite.frame_rect().x, 32.0));
    }

    #[test]
    fn test_wrap_boundaries() {
        let mut sprite = make_sprite();
        sprite.set_column(-1);
        assert_eq!(sprite.column(), 1);
        sprite.set_column(2);
        assert_eq!(sprite.column(), 0);
        sprite.set_row(-1);
        assert_eq!(sprite.row(), 3);
        sprite.set_row(4);
        assert_eq!(sprite.row(), 0);
    }

    #[test]
    fn test_wrap_is_single_step_not_modulo() {
        let mut sprite = make_sprite();
        // A true modulo would give row 2 and row 1 here.
        sprite.set_row(-2);
        assert_eq!(sprite.row(), 3);
        sprite.set_row(5);
        assert_eq!(sprite.row(), 0);
        sprite.set_column(i32::MIN);
        assert_eq!(sprite.column(), 1);
        sprite.set_column(i32::MAX);
        assert_eq!(sprite.column(), 0);
    }

    #[test]
    fn test_indices_always_in_range() {
        for columns in 1..5u32 {
            for rows in 1..5u32 {
                let pixels = PixelBuffer::from_rgba8(8, 8, vec![0; 256]).unwrap();
                let mut sprite = Sprite::from_parts((), pixels, columns, rows).unwrap();
                for request in -10..10 {
                    sprite.set_column(request);
                    sprite.set_row(request);
                    assert!(sprite.column() < columns);
                    assert!(sprite.row() < rows);
                    let rect = sprite.frame_rect();
                    assert!(approx_eq(rect.x, (sprite.column() * sprite.frame_width()) as f32));
                    assert!(approx_eq(rect.y, (sprite.row() * sprite.frame_height()) as f32));
                }
            }
        }
    }

    #[test]
    fn test_next_and_previous_helpers() {
        let mut sprite = make_sprite();
        sprite.next_row();
        sprite.next_row();
        assert_eq!(sprite.row(), 2);
        assert!(approx_eq(sprite.frame_rect().y, 64.0));
        sprite.previous_row();
        assert_eq!(sprite.row(), 1);
        sprite.previous_column();
        assert_eq!(sprite.column(), 1);
        sprite.next_column();
        assert_eq!(sprite.column(), 0);
    }

    #[test]
    fn test_animate_exact_period_in_steps() {
        let mut sprite = make_sprite();
        sprite.animate(0.125);
        assert_eq!(sprite.column(), 0);
        sprite.animate(0.125);
        assert_eq!(sprite.column(), 1);
        assert!(approx_eq(sprite.accumulated_time(), 0.0));
        assert_frame_rect_matches_indices(&sprite);
    }

    #[test]
    fn test_animate_single_step_keeps_overshoot() {
        let mut sprite = make_sprite();
        sprite.animate(0.6);
        assert_eq!(sprite.column(), 1);
        assert!(approx_eq(sprite.accumulated_time(), 0.35));
        // The backlog is only paid one frame per call.
        sprite.animate(0.0);
        assert_eq!(sprite.column(), 0);
        assert!(approx_eq(sprite.accumulated_time(), 0.1));
    }

    #[test]
    fn test_animate_never_touches_row() {
        let mut sprite = make_sprite();
        sprite.set_row(2);
        for _ in 0..20 {
            sprite.animate(0.3);
        }
        assert_eq!(sprite.row(), 2);
    }

    #[test]
    fn test_animate_rate_scales_time() {
        let mut sprite = make_sprite();
        sprite.animation_rate = 2.0;
        sprite.animate(0.125);
        assert_eq!(sprite.column(), 1);
        sprite.animation_rate = 0.0;
        sprite.animate(10.0);
        assert_eq!(sprite.column(), 1);
    }

    #[test]
    fn test_dest_rect_centered_origin() {
        let mut sprite = make_sprite();
        sprite.position = Vector2 { x: 100.0, y: 100.0 };
        let (rect, pivot) = sprite.dest_rect();
        assert!(approx_eq(rect.x, 84.0));
        assert!(approx_eq(rect.y, 84.0));
        assert!(approx_eq(rect.width, 32.0));
        assert!(approx_eq(rect.height, 32.0));
        assert!(approx_eq(pivot.x, 16.0));
        assert!(approx_eq(pivot.y, 16.0));
    }

    #[test]
    fn test_dest_rect_scale_and_origin() {
        let mut sprite = make_sprite();
        sprite.position = Vector2 { x: 10.0, y: 20.0 };
        sprite.scale = Vector2 { x: 8.0, y: 2.0 };
        sprite.origin = Vector2 { x: 0.0, y: 1.0 };
        let (rect, pivot) = sprite.dest_rect();
        assert!(approx_eq(rect.width, 256.0));
        assert!(approx_eq(rect.height, 64.0));
        assert!(approx_eq(rect.x, 10.0));
        assert!(approx_eq(rect.y, -44.0));
        assert!(approx_eq(pivot.x, 0.0));
        assert!(approx_eq(pivot.y, 64.0));
    }

    struct RecordingBlitter {
        calls: Vec<(u32, Rectangle, Rectangle, Vector2, f32)>,
    }

    impl Blitter<u32> for RecordingBlitter {
        fn blit(&mut self, texture: &u32, source: Rectangle, dest: Rectangle, pivot: Vector2, rotation: f32) {
            self.calls.push((*texture, source, dest, pivot, rotation));
        }
    }

    #[test]
    fn test_draw_passes_current_frame() {
        let mut sprite = make_sprite();
        sprite.set_column(1);
        sprite.set_row(3);
        sprite.rotation = 45.0;
        sprite.position = Vector2 { x: 100.0, y: 100.0 };
        let mut blitter = RecordingBlitter { calls: Vec::new() };
        sprite.draw(&mut blitter);

        assert_eq!(blitter.calls.len(), 1);
        let (texture, source, dest, pivot, rotation) = blitter.calls[0];
        assert_eq!(texture, 7);
        assert!(approx_eq(source.x, 32.0));
        assert!(approx_eq(source.y, 96.0));
        assert!(approx_eq(dest.x, 84.0));
        assert!(approx_eq(pivot.x, 16.0));
        assert!(approx_eq(rotation, 45.0));
    }
}
