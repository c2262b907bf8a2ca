//! Simulation time resource.
//!
//! Written once per frame by [`update_world_time`](crate::systems::time::update_world_time)
//! and read by every system that needs the frame delta.
use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Seconds since start, scaled.
    pub elapsed: f32,
    /// Seconds since the previous frame, scaled.
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Account for one frame of `dt` unscaled seconds.
    pub fn advance(&mut self, dt: f32) {
        let scaled_dt = dt * self.time_scale;
        self.elapsed += scaled_dt;
        self.delta = scaled_dt;
        self.frame_count += 1;
    }

    /// Frames per second implied by the last delta, truncated. Zero before the
    /// first non-empty frame.
    pub fn fps(&self) -> i32 {
        if self.delta > 0.0 {
            (1.0 / self.delta) as i32
        } else {
            0
        }
    }
}
