//! Spriteanim demo entry point.
//!
//! Opens a raylib window, loads a spritesheet and animates it. Arrow keys
//! move the sprite, space cycles the animation row and F11 toggles the debug
//! overlay.
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults if missing) and apply CLI overrides
//! 2. Create the window and the ECS world with its resources
//! 3. Load the spritesheet and spawn the player
//! 4. Each frame: update time, poll input, move, animate, retitle, render
//! 5. Free sprites, then close the window
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --sprite assets/player.png --columns 2 --rows 4
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::prelude::*;
use clap::Parser;
use raylib::prelude::Texture2D;
use std::path::PathBuf;

use spriteanim::events::switchdebug::switch_debug_observer;
use spriteanim::game;
use spriteanim::resources::gameconfig::GameConfig;
use spriteanim::resources::input::InputState;
use spriteanim::resources::texturebackend::RaylibTextures;
use spriteanim::resources::worldtime::WorldTime;
use spriteanim::systems::animation::animation;
use spriteanim::systems::input::update_input_state;
use spriteanim::systems::render::render_system;
use spriteanim::systems::spritecontroller::sprite_controller;
use spriteanim::systems::time::update_world_time;
use spriteanim::systems::windowtitle::window_title_system;

/// Spritesheet animation demo
#[derive(Parser)]
#[command(version, about = "Animate a spritesheet with raylib")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Spritesheet image to load (overrides the config file).
    #[arg(long, value_name = "PATH")]
    sprite: Option<PathBuf>,

    /// Number of frame columns in the sheet.
    #[arg(long)]
    columns: Option<u32>,

    /// Number of frame rows in the sheet.
    #[arg(long)]
    rows: Option<u32>,

    /// Uniform draw scale.
    #[arg(long)]
    scale: Option<f32>,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,
}

impl Cli {
    fn apply(&self, config: &mut GameConfig) {
        if let Some(sprite) = &self.sprite {
            config.sprite_path = sprite.clone();
        }
        if let Some(columns) = self.columns {
            config.sprite_columns = columns;
        }
        if let Some(rows) = self.rows {
            config.sprite_rows = rows;
        }
        if let Some(scale) = self.scale {
            config.sprite_scale = scale;
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }
    cli.apply(&mut config);

    // Early-exit: write config and quit (no window needed)
    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            log::error!("{}", e);
            std::process::exit(1);
        }
        return;
    }

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let mut builder = raylib::init();
    builder
        .size(window_width as i32, window_height as i32)
        .title(&config.window_title);
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());

    {
        let mut textures = RaylibTextures::new(&mut rl, &thread);
        if let Err(e) = game::spawn_player(&mut world, &mut textures, &config) {
            log::error!("Failed to load sprite: {}", e);
            std::process::exit(1);
        }
    }

    world.insert_resource(config);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
    world.spawn(Observer::new(switch_debug_observer));
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(sprite_controller::<Texture2D>.after(update_input_state));
    update.add_systems(animation::<Texture2D>.after(sprite_controller::<Texture2D>));
    update.add_systems(window_title_system);
    update.add_systems(render_system.after(animation::<Texture2D>));

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);
    }

    // Textures must go before the GL context does.
    let freed = game::free_sprites::<Texture2D>(&mut world);
    log::info!("Freed {} sprite(s)", freed);
    world.remove_non_send_resource::<raylib::RaylibHandle>();
}
