//! Animation system.
//!
//! [`animation`] feeds the frame delta from [`WorldTime`] into every
//! [`Sprite`], advancing its column when enough time has accumulated. Rows are
//! left alone; they belong to whoever selects the animation state.
use bevy_ecs::prelude::*;

use crate::components::sprite::Sprite;
use crate::resources::worldtime::WorldTime;

/// Advance sprite animations by the current frame delta.
pub fn animation<T: Send + Sync + 'static>(mut query: Query<&mut Sprite<T>>, time: Res<WorldTime>) {
    for mut sprite in query.iter_mut() {
        sprite.animate(time.delta);
    }
}
