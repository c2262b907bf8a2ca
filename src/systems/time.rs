//! Frame clock.
//!
//! The main loop measures the frame time with raylib and hands it to
//! [`update_world_time`] before running the schedule, so every system in a
//! frame sees the same [`WorldTime::delta`].
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

pub fn update_world_time(world: &mut World, dt: f32) {
    world.resource_mut::<WorldTime>().advance(dt);
}
