//! Keyboard controller for sprites.
//!
//! Reads the shared [`InputState`] and moves every sprite that has an
//! [`InputControlled`] component. Each held arrow key adds `speed * delta` on
//! its axis independently, so diagonals are faster than straight lines. The
//! row key advances the sprite to its next animation row.
use bevy_ecs::prelude::*;

use crate::components::inputcontrolled::InputControlled;
use crate::components::sprite::Sprite;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

pub fn sprite_controller<T: Send + Sync + 'static>(
    mut query: Query<(&InputControlled, &mut Sprite<T>)>,
    input: Res<InputState>,
    time: Res<WorldTime>,
) {
    for (controlled, mut sprite) in query.iter_mut() {
        let step = controlled.speed * time.delta;

        if input.direction_down.active {
            sprite.position.y += step;
        }
        if input.direction_up.active {
            sprite.position.y -= step;
        }
        if input.direction_right.active {
            sprite.position.x += step;
        }
        if input.direction_left.active {
            sprite.position.x -= step;
        }

        if input.next_row.just_pressed {
            sprite.next_row();
        }
    }
}
