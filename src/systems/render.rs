use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::sprite::Sprite;
use crate::resources::debugmode::DebugMode;

/// Clear the screen and blit every sprite's current frame.
///
/// With [`DebugMode`] present, each sprite also gets its destination rect
/// outlined (unrotated), a cross on its position and its frame indices
/// printed next to it.
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    query: Query<&Sprite<Texture2D>>,
    debug_mode: Option<Res<DebugMode>>,
) {
    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::BLACK);

    for sprite in query.iter() {
        sprite.draw(&mut d);
    }

    if debug_mode.is_some() {
        for sprite in query.iter() {
            let (dest, _pivot) = sprite.dest_rect();
            d.draw_rectangle_lines(
                dest.x as i32,
                dest.y as i32,
                dest.width as i32,
                dest.height as i32,
                Color::RED,
            );

            let (x, y) = (sprite.position.x as i32, sprite.position.y as i32);
            d.draw_line(x - 5, y, x + 5, y, Color::GREEN);
            d.draw_line(x, y - 5, x, y + 5, Color::GREEN);

            let text = format!(
                "frame ({}, {}) of {}x{}",
                sprite.column(),
                sprite.row(),
                sprite.columns(),
                sprite.rows()
            );
            d.draw_text(&text, dest.x as i32, dest.y as i32 - 12, 10, Color::WHITE);
        }

        let fps = d.get_fps();
        d.draw_text(
            &format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps),
            10,
            10,
            10,
            Color::WHITE,
        );
    }
}
