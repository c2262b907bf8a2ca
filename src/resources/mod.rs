//! ECS resources and sprite backend plumbing.
//!
//! Overview
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – INI-backed window, sprite and player settings
//! - `input` – per-frame keyboard state of keys relevant to the demo
//! - `pixelbuffer` – decoded RGBA8 spritesheet pixels
//! - `texturebackend` – texture upload and blit traits, implemented for raylib
//! - `worldtime` – simulation time and delta
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod pixelbuffer;
pub mod texturebackend;
pub mod worldtime;
