//! Demo scene setup and teardown.
//!
//! [`spawn_player`] loads the configured spritesheet and spawns it as a
//! keyboard-controlled entity in the middle of the window.
//! [`free_sprites`] takes every sprite back out of the world and frees it,
//! which must happen while the window (and its GL context) is still open.

use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::Vector2;

use crate::components::inputcontrolled::InputControlled;
use crate::components::sprite::Sprite;
use crate::error::Result;
use crate::resources::gameconfig::GameConfig;
use crate::resources::texturebackend::TextureBackend;

/// Load the configured spritesheet through `backend` and spawn it.
pub fn spawn_player<B>(world: &mut World, backend: &mut B, config: &GameConfig) -> Result<Entity>
where
    B: TextureBackend,
    B::Texture: Send + Sync + 'static,
{
    let mut sprite = Sprite::load(
        backend,
        &config.sprite_path,
        config.sprite_columns,
        config.sprite_rows,
    )?;
    sprite.scale = Vector2 {
        x: config.sprite_scale,
        y: config.sprite_scale,
    };
    sprite.frame_period = config.frame_period;
    sprite.animation_rate = config.animation_rate;
    sprite.position = Vector2 {
        x: config.window_width as f32 * 0.5,
        y: config.window_height as f32 * 0.5,
    };

    let entity = world
        .spawn((sprite, InputControlled::new(config.player_speed)))
        .id();
    info!("Spawned player {:?}", entity);
    Ok(entity)
}

/// Remove and free every `Sprite<T>` in the world. Returns how many were freed.
pub fn free_sprites<T: Send + Sync + 'static>(world: &mut World) -> usize {
    let entities: Vec<Entity> = world
        .query_filtered::<Entity, With<Sprite<T>>>()
        .iter(world)
        .collect();
    let mut freed = 0;
    for entity in entities {
        if let Some(sprite) = world.entity_mut(entity).take::<Sprite<T>>() {
            sprite.free();
            freed += 1;
        }
    }
    freed
}
