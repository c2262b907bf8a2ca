//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! title = spriteanim
//! target_fps = 120
//! vsync = true
//!
//! [sprite]
//! path = player.png
//! columns = 2
//! rows = 4
//! scale = 8
//! frame_period = 0.25
//! animation_rate = 1.0
//!
//! [player]
//! speed = 500
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::sprite::{DEFAULT_ANIMATION_RATE, DEFAULT_FRAME_PERIOD};

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_WINDOW_TITLE: &str = "spriteanim";
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_SPRITE_PATH: &str = "player.png";
const DEFAULT_SPRITE_COLUMNS: u32 = 2;
const DEFAULT_SPRITE_ROWS: u32 = 4;
const DEFAULT_SPRITE_SCALE: f32 = 8.0;
const DEFAULT_PLAYER_SPEED: f32 = 500.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Base window title; frame timing is appended every frame.
    pub window_title: String,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Spritesheet image.
    pub sprite_path: PathBuf,
    /// Frame grid columns (hframes).
    pub sprite_columns: u32,
    /// Frame grid rows (vframes).
    pub sprite_rows: u32,
    /// Uniform draw scale.
    pub sprite_scale: f32,
    /// Seconds per animation frame.
    pub frame_period: f32,
    /// Animation playback multiplier.
    pub animation_rate: f32,
    /// Movement speed in pixels per second.
    pub player_speed: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            sprite_path: PathBuf::from(DEFAULT_SPRITE_PATH),
            sprite_columns: DEFAULT_SPRITE_COLUMNS,
            sprite_rows: DEFAULT_SPRITE_ROWS,
            sprite_scale: DEFAULT_SPRITE_SCALE,
            frame_period: DEFAULT_FRAME_PERIOD,
            animation_rate: DEFAULT_ANIMATION_RATE,
            player_speed: DEFAULT_PLAYER_SPEED,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(title) = config.get("window", "title") {
            self.window_title = title;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [sprite] section
        if let Some(path) = config.get("sprite", "path") {
            self.sprite_path = PathBuf::from(path);
        }
        if let Some(columns) = config.getuint("sprite", "columns").ok().flatten() {
            self.sprite_columns = columns as u32;
        }
        if let Some(rows) = config.getuint("sprite", "rows").ok().flatten() {
            self.sprite_rows = rows as u32;
        }
        if let Some(scale) = config.getfloat("sprite", "scale").ok().flatten() {
            self.sprite_scale = scale as f32;
        }
        if let Some(period) = config.getfloat("sprite", "frame_period").ok().flatten() {
            self.frame_period = period as f32;
        }
        if let Some(rate) = config.getfloat("sprite", "animation_rate").ok().flatten() {
            self.animation_rate = rate as f32;
        }

        // [player] section
        if let Some(speed) = config.getfloat("player", "speed").ok().flatten() {
            self.player_speed = speed as f32;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, sheet={} ({}x{})",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.sprite_path.display(),
            self.sprite_columns,
            self.sprite_rows
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "title", Some(self.window_title.clone()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));

        // [sprite] section
        config.set(
            "sprite",
            "path",
            Some(self.sprite_path.display().to_string()),
        );
        config.set("sprite", "columns", Some(self.sprite_columns.to_string()));
        config.set("sprite", "rows", Some(self.sprite_rows.to_string()));
        config.set("sprite", "scale", Some(self.sprite_scale.to_string()));
        config.set("sprite", "frame_period", Some(self.frame_period.to_string()));
        config.set(
            "sprite",
            "animation_rate",
            Some(self.animation_rate.to_string()),
        );

        // [player] section
        config.set("player", "speed", Some(self.player_speed.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_ini(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "spriteanim_gameconfig_{}_{}.ini",
            std::process::id(),
            name
        ))
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (1280, 720));
        assert_eq!(config.sprite_path, PathBuf::from("player.png"));
        assert_eq!(config.sprite_columns, 2);
        assert_eq!(config.sprite_rows, 4);
        assert_eq!(config.sprite_scale, 8.0);
        assert_eq!(config.frame_period, 0.25);
        assert_eq!(config.animation_rate, 1.0);
        assert_eq!(config.player_speed, 500.0);
        assert!(config.vsync);
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let path = temp_ini("partial");
        std::fs::write(
            &path,
            "[window]\nwidth = 800\ntitle = demo\n\n[sprite]\npath = hero.png\nrows = 3\nframe_period = 0.1\n",
        )
        .unwrap();

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_height, 720);
        assert_eq!(config.window_title, "demo");
        assert_eq!(config.sprite_path, PathBuf::from("hero.png"));
        assert_eq!(config.sprite_columns, 2);
        assert_eq!(config.sprite_rows, 3);
        assert!((config.frame_period - 0.1).abs() < 1e-6);
        assert_eq!(config.player_speed, 500.0);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let mut config = GameConfig::with_path(temp_ini("missing"));
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_width, 1280);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_ini("saved");
        let mut saved = GameConfig::with_path(&path);
        saved.window_title = "saved title".to_string();
        saved.sprite_columns = 6;
        saved.sprite_scale = 2.5;
        saved.player_speed = 120.0;
        saved.vsync = false;
        saved.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, saved);
    }
}
