//! Window title system.
//!
//! Shows the last frame delta and the FPS it implies next to the configured
//! title, e.g. `spriteanim | 0.016s | 60fps`.
use bevy_ecs::prelude::*;

use crate::resources::gameconfig::GameConfig;
use crate::resources::worldtime::WorldTime;

/// Build the title text for a frame.
pub fn format_title(title: &str, time: &WorldTime) -> String {
    format!("{} | {:.3}s | {}fps", title, time.delta, time.fps())
}

pub fn window_title_system(
    rl: NonSend<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    config: Res<GameConfig>,
    time: Res<WorldTime>,
) {
    let title = format_title(&config.window_title, &time);
    rl.set_window_title(&th, &title);
}
