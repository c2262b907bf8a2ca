//! Keyboard-driven movement marker.
//!
//! Entities carrying [`InputControlled`] together with a sprite are moved by
//! the arrow keys and step through animation rows on the row key. See
//! [`crate::systems::spritecontroller`].

use bevy_ecs::prelude::Component;

/// Movement intent derived from player keyboard input.
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    /// Pixels per second along each held direction.
    pub speed: f32,
}

impl InputControlled {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }
}
